//! `customer` table and the field rules every stored customer satisfies.

use once_cell::sync::Lazy;
use regex::Regex;
use sea_orm::entity::prelude::*;

use crate::errors::ModelError;

pub const MSG_REQUIRED: &str = "Name and email are required";
pub const MSG_INVALID_EMAIL: &str = "Invalid email format";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub customer_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub registration_date: Date,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Both `name` and `email` must be non-empty.
pub fn validate_required(name: &str, email: &str) -> Result<(), ModelError> {
    if name.is_empty() || email.is_empty() {
        return Err(ModelError::Validation(MSG_REQUIRED.into()));
    }
    Ok(())
}

/// `local@domain.tld` shape: no whitespace, exactly one `@`, a dot inside the domain.
pub fn validate_email(email: &str) -> Result<(), ModelError> {
    if !EMAIL_RE.is_match(email) {
        return Err(ModelError::Validation(MSG_INVALID_EMAIL.into()));
    }
    Ok(())
}
