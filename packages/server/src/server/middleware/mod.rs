// HTTP middleware
pub mod authorize;
pub mod jwt_auth;

pub use authorize::*;
pub use jwt_auth::*;
