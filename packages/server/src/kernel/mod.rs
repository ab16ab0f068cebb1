//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod event_bus;
pub mod job_queue;
pub mod nats;
pub mod store;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use event_bus::EventBus;
pub use job_queue::{enqueue_command, CommandMeta, EnqueueResult, Job, JobSpec, PostgresJobQueue};
pub use nats::{NatsClientPublisher, NatsPublisher, PublishedMessage, TestNats};
pub use store::PostgresMarketplaceStore;
pub use test_dependencies::{MockMarketplaceStore, SpyJobQueue, TestDependencies};
pub use traits::*;
