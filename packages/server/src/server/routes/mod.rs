// HTTP routes
pub mod health;
pub mod inquiries;

pub use health::*;
pub use inquiries::*;
