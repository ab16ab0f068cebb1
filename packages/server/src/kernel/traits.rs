// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Inquiry rules live in domains/inquiries and only call through these.
//
// Naming convention: Base* for trait names (e.g., BaseMarketplaceStore, BaseJobQueue)

use anyhow::Result;
use async_trait::async_trait;

use super::job_queue::{EnqueueResult, JobSpec};
use crate::common::{GigId, InquiryId, ProfileId, RiderId, UserId};
use crate::domains::gigs::{Gig, GigInvite};
use crate::domains::inquiries::{Inquiry, InquiryRider};
use crate::domains::profiles::{BillingAddress, Profile, Rider, User};

// =============================================================================
// Persistence (Infrastructure)
// =============================================================================

/// Record lookup and creation for the inquiry endpoints.
///
/// Lookups return `Ok(None)` for missing rows; `Err` is reserved for
/// infrastructure failures.
#[async_trait]
pub trait BaseMarketplaceStore: Send + Sync {
    async fn find_gig(&self, id: GigId) -> Result<Option<Gig>>;

    async fn find_profile(&self, id: ProfileId) -> Result<Option<Profile>>;

    async fn find_user(&self, id: UserId) -> Result<Option<User>>;

    async fn find_billing_address(&self, profile_id: ProfileId) -> Result<Option<BillingAddress>>;

    async fn find_rider(&self, id: RiderId) -> Result<Option<Rider>>;

    /// Inquiry with its attached riders loaded
    async fn find_inquiry(&self, id: InquiryId) -> Result<Option<Inquiry>>;

    async fn find_inquiry_riders(&self, inquiry_id: InquiryId) -> Result<Vec<InquiryRider>>;

    /// Oldest pending invite for this artist on this gig
    async fn find_pending_gig_invite(
        &self,
        artist_id: ProfileId,
        gig_id: GigId,
    ) -> Result<Option<GigInvite>>;

    async fn find_last_inquiry_by_artist(&self, artist_id: ProfileId) -> Result<Option<Inquiry>>;

    async fn insert_inquiry(&self, inquiry: &Inquiry) -> Result<Inquiry>;

    async fn insert_inquiry_rider(&self, rider: &InquiryRider) -> Result<InquiryRider>;
}

// =============================================================================
// Job Queue Trait (Infrastructure)
// =============================================================================

/// Asynchronous task submission.
///
/// Jobs are delivered at least once and in no particular order; the caller
/// never waits for execution.
#[async_trait]
pub trait BaseJobQueue: Send + Sync {
    async fn enqueue(&self, spec: JobSpec) -> Result<EnqueueResult>;
}
