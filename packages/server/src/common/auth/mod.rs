//! Authorization for the inquiry endpoints.
//!
//! Checks are written against an [`Actor`] built from the acting profile:
//!
//! ```rust
//! use marketplace_core::common::{Actor, Capability, ProfileId};
//!
//! let actor = Actor::new(ProfileId::new(), true);
//! actor.can(Capability::ApplyToGig).check().unwrap();
//! ```
//!
//! The router runs these checks in middleware, so handlers only ever see
//! requests that already passed.

mod builder;
mod capability;
mod errors;

pub use builder::{Actor, CapabilityBuilder};
pub use capability::Capability;
pub use errors::AuthError;
