#![cfg(test)]
//! Deterministic collaborators for service tests.

use std::sync::atomic::{AtomicI32, AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::clock::Clock;
use crate::customer::{Customer, CustomerStore};
use crate::errors::ServiceError;
use crate::ids::IdGenerator;

/// Advances by `step` on every reading.
pub struct SteppingClock {
    start: DateTime<Utc>,
    step: Duration,
    ticks: AtomicI32,
}

impl SteppingClock {
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self { start, step, ticks: AtomicI32::new(0) }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let n = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + self.step * n
    }
}

/// `prefix-1`, `prefix-2`, ...
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: &str) -> Self { Self { prefix: prefix.into(), next: AtomicU64::new(1) } }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        format!("{}-{}", self.prefix, self.next.fetch_add(1, Ordering::SeqCst))
    }
}

/// Store whose every call fails, standing in for an unreachable backend.
pub struct FailingStore;

#[async_trait]
impl CustomerStore for FailingStore {
    async fn get(&self, _customer_id: &str) -> Result<Option<Customer>, ServiceError> {
        Err(ServiceError::storage("backend unreachable"))
    }
    async fn put(&self, _customer: Customer) -> Result<(), ServiceError> {
        Err(ServiceError::storage("backend unreachable"))
    }
    async fn delete(&self, _customer_id: &str) -> Result<bool, ServiceError> {
        Err(ServiceError::storage("backend unreachable"))
    }
    async fn scan(&self) -> Result<Vec<Customer>, ServiceError> {
        Err(ServiceError::storage("backend unreachable"))
    }
}
