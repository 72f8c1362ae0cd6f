use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;

use crate::customer::{Customer, CustomerStore};
use crate::errors::ServiceError;
use crate::storage::json_map_store::JsonMapStore;

/// Customers persisted as a JSON object keyed by `customerId`.
#[derive(Clone)]
pub struct JsonFileCustomerStore {
    store: Arc<JsonMapStore<String, Customer>>,
}

impl JsonFileCustomerStore {
    /// Open (or create) the data file.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        let store = JsonMapStore::<String, Customer>::new(path).await?;
        Ok(Self { store })
    }
}

#[async_trait]
impl CustomerStore for JsonFileCustomerStore {
    async fn get(&self, customer_id: &str) -> Result<Option<Customer>, ServiceError> {
        Ok(self.store.get(&customer_id.to_string()).await)
    }

    async fn put(&self, customer: Customer) -> Result<(), ServiceError> {
        self.store.insert(customer.customer_id.clone(), customer).await
    }

    async fn delete(&self, customer_id: &str) -> Result<bool, ServiceError> {
        self.store.remove(&customer_id.to_string()).await
    }

    async fn scan(&self) -> Result<Vec<Customer>, ServiceError> {
        Ok(self.store.list().await.into_iter().map(|(_, v)| v).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::{CustomerInput, CustomerService};

    #[tokio::test]
    async fn records_survive_reopen() -> anyhow::Result<()> {
        let tmp = std::env::temp_dir().join(format!("customers_{}.json", uuid::Uuid::new_v4()));

        let svc = CustomerService::new(Arc::new(JsonFileCustomerStore::new(&tmp).await?));
        let a = svc.create(CustomerInput::new("A", "a@b.com").with_address("Elm St")).await?;
        let b = svc.create(CustomerInput::new("B", "b@c.com")).await?;
        svc.delete(&b.customer_id).await?;

        let reopened = JsonFileCustomerStore::new(&tmp).await?;
        let all = reopened.scan().await?;
        assert_eq!(all, vec![a.clone()]);
        assert_eq!(reopened.get(&a.customer_id).await?, Some(a));
        assert_eq!(reopened.get(&b.customer_id).await?, None);

        let raw: serde_json::Value = serde_json::from_slice(&tokio::fs::read(&tmp).await?)?;
        assert!(raw.is_object());

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
