// Gig Marketplace - Server Core
//
// Artists apply to promoters' gigs through inquiries. This crate holds the
// inquiry endpoints together with the domain models, infrastructure traits and
// HTTP layer they run on.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
