//! Service layer for customer records.
//! - Separates business rules from data access behind `CustomerStore`.
//! - Reuses field validation and entity definitions from the `models` crate.
//! - Wall clock and id generation are injected so tests can pin them.

pub mod errors;
pub mod clock;
pub mod ids;
pub mod customer;
pub mod storage;
#[cfg(test)]
pub mod test_support;
