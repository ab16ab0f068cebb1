//! Typed ids for every marketplace entity.

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker for promoter gig listings.
pub struct Gig;

/// Marker for artist/promoter business profiles.
pub struct Profile;

/// Marker for login accounts attached to a profile.
pub struct User;

/// Marker for artist applications to a gig.
pub struct Inquiry;

/// Marker for reusable rider bundles stored on a profile.
pub struct Rider;

/// Marker for rider copies attached to an inquiry.
pub struct InquiryRider;

/// Marker for promoter-initiated invitations.
pub struct GigInvite;

pub struct BillingAddress;

// ============================================================================
// Type aliases
// ============================================================================

pub type GigId = Id<Gig>;
pub type ProfileId = Id<Profile>;
pub type UserId = Id<User>;
pub type InquiryId = Id<Inquiry>;
pub type RiderId = Id<Rider>;
pub type InquiryRiderId = Id<InquiryRider>;
pub type GigInviteId = Id<GigInvite>;
pub type BillingAddressId = Id<BillingAddress>;
