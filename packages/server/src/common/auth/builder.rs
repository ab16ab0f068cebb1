use super::{AuthError, Capability};
use crate::common::entity_ids::ProfileId;

/// Entry point for authorization checks
///
/// Usage:
/// ```
/// # use marketplace_core::common::{Actor, Capability, ProfileId};
/// # let (profile_id, artist_id, promoter_id) = (ProfileId::new(), ProfileId::new(), ProfileId::new());
/// let result = Actor::new(profile_id, false)
///     .can(Capability::ViewInquiry { artist_id, promoter_id })
///     .check();
/// assert!(result.is_err());
/// ```
pub struct Actor {
    profile_id: ProfileId,
    is_artist: bool,
}

impl Actor {
    /// * `profile_id` - the acting profile
    /// * `is_artist` - role flag from the loaded profile
    pub fn new(profile_id: ProfileId, is_artist: bool) -> Self {
        Self {
            profile_id,
            is_artist,
        }
    }

    /// Specify what capability the actor needs
    pub fn can(self, capability: Capability) -> CapabilityBuilder {
        CapabilityBuilder {
            profile_id: self.profile_id,
            is_artist: self.is_artist,
            capability,
        }
    }
}

/// Builder after specifying capability
pub struct CapabilityBuilder {
    profile_id: ProfileId,
    is_artist: bool,
    capability: Capability,
}

impl CapabilityBuilder {
    pub fn check(self) -> Result<(), AuthError> {
        match self.capability {
            Capability::ApplyToGig if self.is_artist => Ok(()),
            Capability::ApplyToGig => Err(AuthError::PermissionDenied(
                "only artists can apply to gigs".to_string(),
            )),
            Capability::ViewInquiry {
                artist_id,
                promoter_id,
            } => {
                if self.profile_id == artist_id || self.profile_id == promoter_id {
                    Ok(())
                } else {
                    Err(AuthError::PermissionDenied(format!(
                        "profile {} is not a party to this inquiry",
                        self.profile_id
                    )))
                }
            }
        }
    }
}
