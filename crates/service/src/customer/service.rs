use std::sync::Arc;

use tracing::{info, instrument};

use crate::clock::{Clock, SystemClock};
use crate::customer::domain::{Customer, CustomerInput};
use crate::customer::store::CustomerStore;
use crate::errors::ServiceError;
use crate::ids::{IdGenerator, UuidGenerator};

const ENTITY: &str = "Customer";

/// Application service encapsulating customer business rules.
/// Each operation is independent; the store is the only shared state.
///
/// Update and delete read before they write. Two callers racing on the same
/// id can both pass the existence check, in which case the later one wins
/// (update) or reports not found (delete).
#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self::with_collaborators(store, Arc::new(SystemClock), Arc::new(UuidGenerator))
    }

    pub fn with_collaborators(
        store: Arc<dyn CustomerStore>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self { store, clock, ids }
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CustomerInput) -> Result<Customer, ServiceError> {
        let fields = input.validate()?;
        let customer = Customer::new(self.ids.next_id(), fields, self.clock.now());
        self.store.put(customer.clone()).await?;
        info!(customer_id = %customer.customer_id, "customer created");
        Ok(customer)
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Customer>, ServiceError> {
        let all = self.store.scan().await?;
        info!(count = all.len(), "customers listed");
        Ok(all)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, customer_id: &str) -> Result<Customer, ServiceError> {
        self.store
            .get(customer_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY))
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, customer_id: &str, input: CustomerInput) -> Result<Customer, ServiceError> {
        let fields = input.validate()?;
        let mut customer = self.get(customer_id).await?;
        customer.apply(fields, self.clock.now());
        self.store.put(customer.clone()).await?;
        info!(customer_id = %customer.customer_id, "customer updated");
        Ok(customer)
    }

    /// Not idempotent: deleting an unknown id is `NotFound`.
    #[instrument(skip(self))]
    pub async fn delete(&self, customer_id: &str) -> Result<(), ServiceError> {
        self.get(customer_id).await?;
        if !self.store.delete(customer_id).await? {
            // removed by someone else between the check and the delete
            return Err(ServiceError::not_found(ENTITY));
        }
        info!(customer_id, "customer deleted");
        Ok(())
    }
}
