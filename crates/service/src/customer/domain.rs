use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use models::customer as entity;

use crate::errors::ServiceError;

/// A stored customer record. Serialized with camelCase keys.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub registration_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload. Absent and `null` fields are treated alike.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CustomerInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Mutable fields of a customer after validation.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomerFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl CustomerInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { name: Some(name.into()), email: Some(email.into()), ..Default::default() }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Presence first, then email shape.
    pub fn validate(self) -> Result<CustomerFields, ServiceError> {
        let name = self.name.unwrap_or_default();
        let email = self.email.unwrap_or_default();
        entity::validate_required(&name, &email)?;
        entity::validate_email(&email)?;
        Ok(CustomerFields {
            name,
            email,
            phone: self.phone.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
        })
    }
}

impl Customer {
    pub fn new(customer_id: String, fields: CustomerFields, now: DateTime<Utc>) -> Self {
        Self {
            customer_id,
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            address: fields.address,
            registration_date: now.date_naive(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Full replace of the mutable fields; identity and creation stamps stay put.
    pub fn apply(&mut self, fields: CustomerFields, now: DateTime<Utc>) {
        self.name = fields.name;
        self.email = fields.email;
        self.phone = fields.phone;
        self.address = fields.address;
        self.updated_at = now.max(self.created_at);
    }
}

impl From<entity::Model> for Customer {
    fn from(m: entity::Model) -> Self {
        Self {
            customer_id: m.customer_id,
            name: m.name,
            email: m.email,
            phone: m.phone,
            address: m.address,
            registration_date: m.registration_date,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<Customer> for entity::Model {
    fn from(c: Customer) -> Self {
        Self {
            customer_id: c.customer_id,
            name: c.name,
            email: c.email,
            phone: c.phone,
            address: c.address,
            registration_date: c.registration_date,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}
