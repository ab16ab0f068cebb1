//! PostgreSQL-backed job queue.
//!
//! Commands are serialized into the `jobs` table; a separate worker claims and
//! runs them. This module only covers the enqueue side.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use super::BaseJobQueue;

/// Result type for enqueue operations that handles idempotency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnqueueResult {
    /// Command was enqueued, returns new job ID
    Created(Uuid),
    /// Command already exists (idempotency hit), returns existing job ID
    Duplicate(Uuid),
}

impl EnqueueResult {
    pub fn job_id(&self) -> Uuid {
        match self {
            EnqueueResult::Created(id) | EnqueueResult::Duplicate(id) => *id,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, EnqueueResult::Created(_))
    }
}

/// Metadata for command serialization.
pub trait CommandMeta {
    /// The command type name (stored as job_type).
    fn command_type(&self) -> &'static str;

    /// If provided, only one pending/running job exists with this key.
    fn idempotency_key(&self) -> Option<String> {
        None
    }

    fn command_version(&self) -> i32 {
        1
    }

    fn reference_id(&self) -> Option<Uuid> {
        None
    }

    fn max_retries(&self) -> i32 {
        3
    }
}

/// A serialized command ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct JobSpec {
    pub job_type: &'static str,
    pub args: serde_json::Value,
    pub idempotency_key: Option<String>,
    pub reference_id: Option<Uuid>,
    pub version: i32,
    pub max_retries: i32,
}

impl JobSpec {
    pub fn for_command<C>(command: &C) -> Result<Self>
    where
        C: Serialize + CommandMeta,
    {
        let args = serde_json::to_value(command)
            .map_err(|e| anyhow!("failed to serialize {}: {}", command.command_type(), e))?;

        Ok(Self {
            job_type: command.command_type(),
            args,
            idempotency_key: command.idempotency_key(),
            reference_id: command.reference_id(),
            version: command.command_version(),
            max_retries: command.max_retries(),
        })
    }
}

/// Serialize a command and hand it to the queue.
pub async fn enqueue_command<C>(queue: &dyn BaseJobQueue, command: &C) -> Result<EnqueueResult>
where
    C: Serialize + CommandMeta,
{
    queue.enqueue(JobSpec::for_command(command)?).await
}

/// Row in the `jobs` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Job {
    pub id: Uuid,
    pub status: String,
    pub job_type: String,
    pub args: serde_json::Value,
    pub next_run_at: Option<DateTime<Utc>>,
    pub max_retries: i32,
    pub retry_count: i32,
    pub version: i32,
    pub idempotency_key: Option<String>,
    pub reference_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Pending job due immediately
    pub fn from_spec(spec: JobSpec) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            status: "pending".to_string(),
            job_type: spec.job_type.to_string(),
            args: spec.args,
            next_run_at: Some(now),
            max_retries: spec.max_retries,
            retry_count: 0,
            version: spec.version,
            idempotency_key: spec.idempotency_key,
            reference_id: spec.reference_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub async fn insert(&self, pool: &PgPool) -> Result<Self> {
        let job = sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (
                id, status, job_type, args, next_run_at, max_retries, retry_count,
                version, idempotency_key, reference_id, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, status, job_type, args, next_run_at, max_retries, retry_count,
                      version, idempotency_key, reference_id, created_at, updated_at
            "#,
        )
        .bind(self.id)
        .bind(&self.status)
        .bind(&self.job_type)
        .bind(&self.args)
        .bind(self.next_run_at)
        .bind(self.max_retries)
        .bind(self.retry_count)
        .bind(self.version)
        .bind(&self.idempotency_key)
        .bind(self.reference_id)
        .bind(self.created_at)
        .bind(self.updated_at)
        .fetch_one(pool)
        .await?;

        Ok(job)
    }
}

/// Job queue storing commands in PostgreSQL.
pub struct PostgresJobQueue {
    db: PgPool,
}

impl PostgresJobQueue {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Check if a job with the given idempotency key is still pending or running.
    async fn find_by_idempotency_key(&self, key: &str) -> Result<Option<Uuid>> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT id
            FROM jobs
            WHERE idempotency_key = $1
              AND status IN ('pending', 'running')
            LIMIT 1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.db)
        .await?;

        Ok(id)
    }
}

#[async_trait]
impl BaseJobQueue for PostgresJobQueue {
    async fn enqueue(&self, spec: JobSpec) -> Result<EnqueueResult> {
        if let Some(key) = &spec.idempotency_key {
            if let Some(existing) = self.find_by_idempotency_key(key).await? {
                debug!(
                    job_id = %existing,
                    idempotency_key = %key,
                    "Found existing job with idempotency key"
                );
                return Ok(EnqueueResult::Duplicate(existing));
            }
        }

        let job = Job::from_spec(spec);
        debug!(job_id = %job.id, job_type = %job.job_type, "Enqueueing job");
        let inserted = job.insert(&self.db).await?;

        Ok(EnqueueResult::Created(inserted.id))
    }
}
