use async_trait::async_trait;

use crate::customer::domain::Customer;
use crate::errors::ServiceError;

/// Key-value access to customer records by primary key.
/// Implementations can be in-memory, file-backed or database-backed.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn get(&self, customer_id: &str) -> Result<Option<Customer>, ServiceError>;
    /// Insert or replace by `customer_id`.
    async fn put(&self, customer: Customer) -> Result<(), ServiceError>;
    /// Returns whether a record existed.
    async fn delete(&self, customer_id: &str) -> Result<bool, ServiceError>;
    /// Every record, in no particular order.
    async fn scan(&self) -> Result<Vec<Customer>, ServiceError>;
}
