//! Inquiry domain actions - business logic functions
//!
//! Actions are async functions called from the HTTP handlers once the
//! authorization middleware has resolved the acting profile. They do the work,
//! then hand follow-ups to the event bus and the job queue.

mod create;
mod form;
mod show;

#[cfg(test)]
mod fixtures;

pub use create::*;
pub use form::*;
pub use show::*;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::kernel::{enqueue_command, CommandMeta, ServerDeps};

#[derive(Debug, Error)]
pub enum InquiryError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}

impl InquiryError {
    pub(crate) fn not_found(entity: &'static str, id: impl ToString) -> Self {
        InquiryError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Enqueue a follow-up job. Failures are logged and never reach the caller.
pub(crate) async fn enqueue_follow_up<C>(deps: &ServerDeps, command: &C)
where
    C: Serialize + CommandMeta,
{
    match enqueue_command(deps.job_queue.as_ref(), command).await {
        Ok(result) => debug!(
            job_type = command.command_type(),
            job_id = %result.job_id(),
            created = result.is_created(),
            "Enqueued job"
        ),
        Err(e) => warn!(job_type = command.command_type(), error = %e, "Failed to enqueue job"),
    }
}
