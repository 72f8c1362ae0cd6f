use async_trait::async_trait;
use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait, Set};

use models::customer::{self as entity, Column, Entity};

use crate::customer::{Customer, CustomerStore};
use crate::errors::ServiceError;

/// SeaORM-backed store over the `customer` table (Postgres or SQLite).
#[derive(Clone)]
pub struct SeaOrmCustomerStore {
    pub db: DatabaseConnection,
}

impl SeaOrmCustomerStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl CustomerStore for SeaOrmCustomerStore {
    async fn get(&self, customer_id: &str) -> Result<Option<Customer>, ServiceError> {
        let found = Entity::find_by_id(customer_id.to_owned()).one(&self.db).await?;
        Ok(found.map(Customer::from))
    }

    async fn put(&self, customer: Customer) -> Result<(), ServiceError> {
        let m = entity::Model::from(customer);
        let am = entity::ActiveModel {
            customer_id: Set(m.customer_id),
            name: Set(m.name),
            email: Set(m.email),
            phone: Set(m.phone),
            address: Set(m.address),
            registration_date: Set(m.registration_date),
            created_at: Set(m.created_at),
            updated_at: Set(m.updated_at),
        };
        Entity::insert(am)
            .on_conflict(
                OnConflict::column(Column::CustomerId)
                    .update_columns([
                        Column::Name,
                        Column::Email,
                        Column::Phone,
                        Column::Address,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn delete(&self, customer_id: &str) -> Result<bool, ServiceError> {
        let res = Entity::delete_by_id(customer_id.to_owned()).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }

    async fn scan(&self) -> Result<Vec<Customer>, ServiceError> {
        let all = Entity::find().all(&self.db).await?;
        Ok(all.into_iter().map(Customer::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use migration::MigratorTrait;

    use super::*;
    use crate::customer::{CustomerInput, CustomerService};

    async fn setup() -> anyhow::Result<SeaOrmCustomerStore> {
        let db = models::db::connect_sqlite_memory().await?;
        migration::Migrator::up(&db, None).await?;
        Ok(SeaOrmCustomerStore::new(db))
    }

    #[tokio::test]
    async fn crud_against_sqlite() -> anyhow::Result<()> {
        let store = setup().await?;
        let svc = CustomerService::new(Arc::new(store.clone()));

        assert!(svc.list().await?.is_empty());
        let created = svc.create(CustomerInput::new("A", "a@b.com").with_phone("555")).await?;
        let found = svc.get(&created.customer_id).await?;
        assert_eq!(found, created);
        assert_eq!(found.phone, "555");

        let updated = svc.update(&created.customer_id, CustomerInput::new("B", "a@b.com")).await?;
        let reread = store.get(&created.customer_id).await?.expect("row present");
        assert_eq!(reread, updated);
        assert_eq!(reread.phone, "");
        assert_eq!(reread.created_at, created.created_at);
        assert_eq!(store.scan().await?.len(), 1);

        svc.delete(&created.customer_id).await?;
        assert!(store.get(&created.customer_id).await?.is_none());
        assert!(!store.delete(&created.customer_id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn missing_table_is_a_storage_error() -> anyhow::Result<()> {
        let store = SeaOrmCustomerStore::new(models::db::connect_sqlite_memory().await?);
        assert!(matches!(store.scan().await, Err(ServiceError::Storage(_))));
        Ok(())
    }
}
