//! Customer records: domain types, the storage seam and the service that
//! enforces the validation and lifecycle rules.

pub mod domain;
pub mod store;
pub mod service;

pub use self::domain::{Customer, CustomerFields, CustomerInput};
pub use self::service::CustomerService;
pub use self::store::CustomerStore;
