use crate::domains::gigs::Gig;
use crate::domains::profiles::Profile;

/// Compatibility check between a gig and an artist profile.
///
/// A gig without genres is open to everyone; otherwise the profile needs at
/// least one of the gig's genres (compared case-insensitively).
pub struct GigMatcher<'a> {
    gig: &'a Gig,
    profile: &'a Profile,
}

impl<'a> GigMatcher<'a> {
    pub fn new(gig: &'a Gig, profile: &'a Profile) -> Self {
        Self { gig, profile }
    }

    pub fn matches(&self) -> bool {
        if self.gig.genres.is_empty() {
            return true;
        }

        self.gig.genres.iter().any(|wanted| {
            self.profile
                .genres
                .iter()
                .any(|offered| offered.trim().eq_ignore_ascii_case(wanted.trim()))
        })
    }
}
