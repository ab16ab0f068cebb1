// Business domains
pub mod auth;
pub mod gigs;
pub mod inquiries;
pub mod matching;
pub mod profiles;
