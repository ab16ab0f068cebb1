// Common types and utilities shared across the application

pub mod auth;
pub mod entity_ids;
pub mod id;
pub mod validation;

pub use auth::{Actor, AuthError, Capability, CapabilityBuilder};
pub use entity_ids::*;
pub use id::Id;
pub use validation::ValidationErrors;
