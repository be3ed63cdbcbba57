//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates update semantics from data access.
//! - Exposes the store as a capability trait so backends are swappable.
//! - Provides clear error types and documented interfaces.

pub mod entity;
pub mod errors;
#[cfg(test)]
pub mod test_support;
