use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{InquiryId, InquiryRiderId, UserId};
use crate::domains::profiles::RiderKind;

/// Rider copy attached to an inquiry.
///
/// Created empty; the media itself is copied from the profile's rider by a
/// background job.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct InquiryRider {
    pub id: InquiryRiderId,
    pub inquiry_id: InquiryId,
    pub kind: RiderKind,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl InquiryRider {
    pub fn build(inquiry_id: InquiryId, kind: RiderKind, user_id: UserId) -> Self {
        Self {
            id: InquiryRiderId::new(),
            inquiry_id,
            kind,
            user_id,
            created_at: Utc::now(),
        }
    }

    pub async fn insert(&self, pool: &PgPool) -> Result<Self> {
        let rider = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO inquiry_riders (id, inquiry_id, kind, user_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(self.inquiry_id)
        .bind(self.kind)
        .bind(self.user_id)
        .bind(self.created_at)
        .fetch_one(pool)
        .await?;
        Ok(rider)
    }

    pub async fn find_by_inquiry(inquiry_id: InquiryId, pool: &PgPool) -> Result<Vec<Self>> {
        let riders = sqlx::query_as::<_, Self>(
            "SELECT * FROM inquiry_riders WHERE inquiry_id = $1 ORDER BY created_at",
        )
        .bind(inquiry_id)
        .fetch_all(pool)
        .await?;
        Ok(riders)
    }
}
