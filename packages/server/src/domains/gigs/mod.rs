//! Gigs domain - promoter listings that artists apply to

pub mod models;

pub use models::{Gig, GigInvite, GigInviteStatus};
