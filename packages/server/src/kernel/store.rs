//! PostgreSQL implementation of [`BaseMarketplaceStore`].
//!
//! Thin adapter over the model query functions in each domain.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use super::BaseMarketplaceStore;
use crate::common::{GigId, InquiryId, ProfileId, RiderId, UserId};
use crate::domains::gigs::{Gig, GigInvite};
use crate::domains::inquiries::{Inquiry, InquiryRider};
use crate::domains::profiles::{BillingAddress, Profile, Rider, User};

#[derive(Clone)]
pub struct PostgresMarketplaceStore {
    pool: PgPool,
}

impl PostgresMarketplaceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseMarketplaceStore for PostgresMarketplaceStore {
    async fn find_gig(&self, id: GigId) -> Result<Option<Gig>> {
        Gig::find_by_id_optional(id, &self.pool).await
    }

    async fn find_profile(&self, id: ProfileId) -> Result<Option<Profile>> {
        Profile::find_by_id_optional(id, &self.pool).await
    }

    async fn find_user(&self, id: UserId) -> Result<Option<User>> {
        User::find_by_id_optional(id, &self.pool).await
    }

    async fn find_billing_address(&self, profile_id: ProfileId) -> Result<Option<BillingAddress>> {
        BillingAddress::find_by_profile(profile_id, &self.pool).await
    }

    async fn find_rider(&self, id: RiderId) -> Result<Option<Rider>> {
        Rider::find_by_id_optional(id, &self.pool).await
    }

    async fn find_inquiry(&self, id: InquiryId) -> Result<Option<Inquiry>> {
        let Some(mut inquiry) = Inquiry::find_by_id_optional(id, &self.pool).await? else {
            return Ok(None);
        };

        for rider in self.find_inquiry_riders(id).await? {
            inquiry.attach_rider(rider);
        }

        Ok(Some(inquiry))
    }

    async fn find_inquiry_riders(&self, inquiry_id: InquiryId) -> Result<Vec<InquiryRider>> {
        InquiryRider::find_by_inquiry(inquiry_id, &self.pool).await
    }

    async fn find_pending_gig_invite(
        &self,
        artist_id: ProfileId,
        gig_id: GigId,
    ) -> Result<Option<GigInvite>> {
        GigInvite::find_pending_for(gig_id, artist_id, &self.pool).await
    }

    async fn find_last_inquiry_by_artist(&self, artist_id: ProfileId) -> Result<Option<Inquiry>> {
        Inquiry::find_last_by_artist(artist_id, &self.pool).await
    }

    async fn insert_inquiry(&self, inquiry: &Inquiry) -> Result<Inquiry> {
        inquiry.insert(&self.pool).await
    }

    async fn insert_inquiry_rider(&self, rider: &InquiryRider) -> Result<InquiryRider> {
        rider.insert(&self.pool).await
    }
}
