//! Matching domain - does an artist fit a gig?

mod gig_matcher;

pub use gig_matcher::GigMatcher;
