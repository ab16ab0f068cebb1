// TestDependencies - in-memory implementations for testing
//
// Provides doubles for the store, the NATS publisher and the job queue so the
// inquiry endpoints can be exercised without Postgres or a broker.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use super::{
    BaseJobQueue, BaseMarketplaceStore, EnqueueResult, EventBus, JobSpec, ServerDeps, TestNats,
};
use crate::common::{GigId, InquiryId, ProfileId, RiderId, UserId};
use crate::domains::auth::JwtService;
use crate::domains::gigs::{Gig, GigInvite};
use crate::domains::inquiries::{Inquiry, InquiryRider};
use crate::domains::profiles::{BillingAddress, Profile, Rider, User};

// =============================================================================
// Mock Marketplace Store
// =============================================================================

#[derive(Default)]
struct StoreState {
    gigs: HashMap<GigId, Gig>,
    profiles: HashMap<ProfileId, Profile>,
    users: HashMap<UserId, User>,
    billing_addresses: HashMap<ProfileId, BillingAddress>,
    riders: HashMap<RiderId, Rider>,
    gig_invites: Vec<GigInvite>,
    inquiries: Vec<Inquiry>,
    inquiry_riders: Vec<InquiryRider>,
}

/// In-memory store. Seed it with the `with_*` builders, inspect it with the
/// accessors after a request ran.
#[derive(Default)]
pub struct MockMarketplaceStore {
    state: RwLock<StoreState>,
    fail_inserts: bool,
}

impl MockMarketplaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every insert fails, as if the database went away mid-request.
    pub fn with_failing_inserts(mut self) -> Self {
        self.fail_inserts = true;
        self
    }

    pub fn with_gig(self, gig: Gig) -> Self {
        self.write(|s| {
            s.gigs.insert(gig.id, gig);
        });
        self
    }

    pub fn with_profile(self, profile: Profile) -> Self {
        self.write(|s| {
            s.profiles.insert(profile.id, profile);
        });
        self
    }

    pub fn with_user(self, user: User) -> Self {
        self.write(|s| {
            s.users.insert(user.id, user);
        });
        self
    }

    pub fn with_billing_address(self, address: BillingAddress) -> Self {
        self.write(|s| {
            s.billing_addresses.insert(address.profile_id, address);
        });
        self
    }

    pub fn with_rider(self, rider: Rider) -> Self {
        self.write(|s| {
            s.riders.insert(rider.id, rider);
        });
        self
    }

    pub fn with_gig_invite(self, invite: GigInvite) -> Self {
        self.write(|s| s.gig_invites.push(invite));
        self
    }

    pub fn with_inquiry(self, inquiry: Inquiry) -> Self {
        self.write(|s| s.inquiries.push(inquiry));
        self
    }

    /// Stored gig as persisted (unaffected by presentation overrides).
    pub fn gig(&self, id: GigId) -> Option<Gig> {
        self.read(|s| s.gigs.get(&id).cloned())
    }

    pub fn inquiries(&self) -> Vec<Inquiry> {
        self.read(|s| s.inquiries.clone())
    }

    pub fn inquiry_count(&self) -> usize {
        self.read(|s| s.inquiries.len())
    }

    pub fn inquiry_riders(&self) -> Vec<InquiryRider> {
        self.read(|s| s.inquiry_riders.clone())
    }

    fn read<T>(&self, f: impl FnOnce(&StoreState) -> T) -> T {
        f(&self.state.read().unwrap_or_else(|e| e.into_inner()))
    }

    fn write<T>(&self, f: impl FnOnce(&mut StoreState) -> T) -> T {
        f(&mut self.state.write().unwrap_or_else(|e| e.into_inner()))
    }
}

#[async_trait]
impl BaseMarketplaceStore for MockMarketplaceStore {
    async fn find_gig(&self, id: GigId) -> Result<Option<Gig>> {
        Ok(self.read(|s| s.gigs.get(&id).cloned()))
    }

    async fn find_profile(&self, id: ProfileId) -> Result<Option<Profile>> {
        Ok(self.read(|s| s.profiles.get(&id).cloned()))
    }

    async fn find_user(&self, id: UserId) -> Result<Option<User>> {
        Ok(self.read(|s| s.users.get(&id).cloned()))
    }

    async fn find_billing_address(&self, profile_id: ProfileId) -> Result<Option<BillingAddress>> {
        Ok(self.read(|s| s.billing_addresses.get(&profile_id).cloned()))
    }

    async fn find_rider(&self, id: RiderId) -> Result<Option<Rider>> {
        Ok(self.read(|s| s.riders.get(&id).cloned()))
    }

    async fn find_inquiry(&self, id: InquiryId) -> Result<Option<Inquiry>> {
        Ok(self.read(|s| {
            let mut inquiry = s.inquiries.iter().find(|i| i.id == id).cloned()?;
            for rider in s.inquiry_riders.iter().filter(|r| r.inquiry_id == id) {
                inquiry.attach_rider(rider.clone());
            }
            Some(inquiry)
        }))
    }

    async fn find_inquiry_riders(&self, inquiry_id: InquiryId) -> Result<Vec<InquiryRider>> {
        Ok(self.read(|s| {
            s.inquiry_riders
                .iter()
                .filter(|r| r.inquiry_id == inquiry_id)
                .cloned()
                .collect()
        }))
    }

    async fn find_pending_gig_invite(
        &self,
        artist_id: ProfileId,
        gig_id: GigId,
    ) -> Result<Option<GigInvite>> {
        Ok(self.read(|s| {
            s.gig_invites
                .iter()
                .filter(|i| i.artist_id == artist_id && i.gig_id == gig_id && i.is_pending())
                .min_by_key(|i| i.created_at)
                .cloned()
        }))
    }

    async fn find_last_inquiry_by_artist(&self, artist_id: ProfileId) -> Result<Option<Inquiry>> {
        Ok(self.read(|s| {
            s.inquiries
                .iter()
                .filter(|i| i.artist_id == artist_id)
                .max_by_key(|i| i.created_at)
                .cloned()
        }))
    }

    async fn insert_inquiry(&self, inquiry: &Inquiry) -> Result<Inquiry> {
        if self.fail_inserts {
            anyhow::bail!("insert failed: connection reset");
        }
        let mut stored = inquiry.clone();
        stored.technical_rider = None;
        stored.catering_rider = None;
        self.write(|s| s.inquiries.push(stored.clone()));
        Ok(stored)
    }

    async fn insert_inquiry_rider(&self, rider: &InquiryRider) -> Result<InquiryRider> {
        if self.fail_inserts {
            anyhow::bail!("insert failed: connection reset");
        }
        self.write(|s| s.inquiry_riders.push(rider.clone()));
        Ok(rider.clone())
    }
}

// =============================================================================
// Spy Job Queue
// =============================================================================

/// Job queue that records every enqueued job instead of storing it.
#[derive(Default)]
pub struct SpyJobQueue {
    jobs: RwLock<Vec<JobSpec>>,
}

impl SpyJobQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueued(&self) -> Vec<JobSpec> {
        self.jobs.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn enqueued_of_type(&self, job_type: &str) -> Vec<JobSpec> {
        self.jobs
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|j| j.job_type == job_type)
            .cloned()
            .collect()
    }

    pub fn count(&self) -> usize {
        self.jobs.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn was_enqueued(&self, job_type: &str) -> bool {
        self.jobs
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .any(|j| j.job_type == job_type)
    }
}

#[async_trait]
impl BaseJobQueue for SpyJobQueue {
    async fn enqueue(&self, spec: JobSpec) -> Result<EnqueueResult> {
        self.jobs
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(spec);
        Ok(EnqueueResult::Created(Uuid::now_v7()))
    }
}

// =============================================================================
// TestDependencies - Builder for test dependencies
// =============================================================================

#[derive(Clone)]
pub struct TestDependencies {
    pub store: Arc<MockMarketplaceStore>,
    pub nats: Arc<TestNats>,
    pub job_queue: Arc<SpyJobQueue>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            store: Arc::new(MockMarketplaceStore::new()),
            nats: Arc::new(TestNats::new()),
            job_queue: Arc::new(SpyJobQueue::new()),
        }
    }

    /// Set a seeded store
    pub fn mock_store(mut self, store: MockMarketplaceStore) -> Self {
        self.store = Arc::new(store);
        self
    }

    /// Set a NATS double (e.g. `TestNats::failing`)
    pub fn mock_nats(mut self, nats: TestNats) -> Self {
        self.nats = Arc::new(nats);
        self
    }

    /// Convert into ServerDeps for testing
    pub fn into_server_deps(self, jwt_service: Arc<JwtService>) -> ServerDeps {
        ServerDeps::new(
            self.store,
            EventBus::new(self.nats),
            self.job_queue,
            jwt_service,
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
