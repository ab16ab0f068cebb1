//! Auth domain - bearer tokens identifying the acting user and profile
//!
//! Tokens are issued by the account service; this server only verifies them.
//! `create_token` exists for tooling and tests.

pub mod jwt;

pub use jwt::{Claims, JwtService};
