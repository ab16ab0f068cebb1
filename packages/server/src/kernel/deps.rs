//! Server dependencies for actions (using traits for testability)
//!
//! The inquiry actions receive everything they touch through this container,
//! so tests can swap Postgres, NATS and the job table for in-memory doubles.

use std::sync::Arc;

use crate::domains::auth::JwtService;
use crate::kernel::{BaseJobQueue, BaseMarketplaceStore, EventBus};

/// Server dependencies accessible to actions and middleware
#[derive(Clone)]
pub struct ServerDeps {
    pub store: Arc<dyn BaseMarketplaceStore>,
    pub event_bus: EventBus,
    pub job_queue: Arc<dyn BaseJobQueue>,
    /// JWT service for token verification
    pub jwt_service: Arc<JwtService>,
}

impl ServerDeps {
    pub fn new(
        store: Arc<dyn BaseMarketplaceStore>,
        event_bus: EventBus,
        job_queue: Arc<dyn BaseJobQueue>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            store,
            event_bus,
            job_queue,
            jwt_service,
        }
    }
}
