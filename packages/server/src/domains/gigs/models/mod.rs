pub mod gig;
pub mod gig_invite;

pub use gig::*;
pub use gig_invite::*;
