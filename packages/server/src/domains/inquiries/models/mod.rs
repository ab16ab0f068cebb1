pub mod inquiry;
pub mod inquiry_rider;

pub use inquiry::*;
pub use inquiry_rider::*;
