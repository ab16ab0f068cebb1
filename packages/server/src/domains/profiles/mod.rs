//! Profiles domain - the acting party (artist or promoter) and what hangs off it

pub mod models;

pub use models::{BillingAddress, CurrentProfile, Profile, ProfileRole, Rider, RiderKind, User};
