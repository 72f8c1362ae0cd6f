use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::customer::{Customer, CustomerStore};
use crate::errors::ServiceError;

/// Process-local store; contents vanish with the process.
#[derive(Default)]
pub struct MemoryCustomerStore {
    inner: RwLock<HashMap<String, Customer>>,
}

impl MemoryCustomerStore {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl CustomerStore for MemoryCustomerStore {
    async fn get(&self, customer_id: &str) -> Result<Option<Customer>, ServiceError> {
        Ok(self.inner.read().await.get(customer_id).cloned())
    }

    async fn put(&self, customer: Customer) -> Result<(), ServiceError> {
        self.inner.write().await.insert(customer.customer_id.clone(), customer);
        Ok(())
    }

    async fn delete(&self, customer_id: &str) -> Result<bool, ServiceError> {
        Ok(self.inner.write().await.remove(customer_id).is_some())
    }

    async fn scan(&self) -> Result<Vec<Customer>, ServiceError> {
        Ok(self.inner.read().await.values().cloned().collect())
    }
}
