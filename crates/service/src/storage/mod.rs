//! Storage backends for customer records
//!
//! Every backend implements [`crate::customer::CustomerStore`]; the generic
//! JSON map store underneath the file backend is reusable on its own.

pub mod json_map_store;
pub mod memory;
pub mod file;
pub mod seaorm;

pub use file::JsonFileCustomerStore;
pub use memory::MemoryCustomerStore;
pub use seaorm::SeaOrmCustomerStore;
