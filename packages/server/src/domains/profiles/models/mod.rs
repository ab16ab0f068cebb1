pub mod billing_address;
pub mod current_profile;
pub mod profile;
pub mod rider;
pub mod user;

pub use billing_address::*;
pub use current_profile::*;
pub use profile::*;
pub use rider::*;
pub use user::*;
