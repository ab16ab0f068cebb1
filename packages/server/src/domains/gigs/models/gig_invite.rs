use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use typed_builder::TypedBuilder;

use crate::common::{GigId, GigInviteId, ProfileId};

/// Invite status enum for type-safe querying
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "text", rename_all = "snake_case")]
pub enum GigInviteStatus {
    Pending,
    Accepted,
    Declined,
}

impl std::fmt::Display for GigInviteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GigInviteStatus::Pending => write!(f, "pending"),
            GigInviteStatus::Accepted => write!(f, "accepted"),
            GigInviteStatus::Declined => write!(f, "declined"),
        }
    }
}

/// A promoter's invitation for an artist to apply to a gig
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, TypedBuilder)]
pub struct GigInvite {
    #[builder(default)]
    pub id: GigInviteId,
    pub gig_id: GigId,
    pub artist_id: ProfileId,
    pub promoter_id: ProfileId,
    #[builder(default = GigInviteStatus::Pending)]
    pub status: GigInviteStatus,
    #[builder(default = Utc::now())]
    pub created_at: DateTime<Utc>,
}

impl GigInvite {
    /// Oldest pending invite for this artist on this gig
    pub async fn find_pending_for(
        gig_id: GigId,
        artist_id: ProfileId,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        let invite = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM gig_invites
            WHERE gig_id = $1 AND artist_id = $2 AND status = 'pending'
            ORDER BY created_at ASC
            LIMIT 1
            "#,
        )
        .bind(gig_id)
        .bind(artist_id)
        .fetch_optional(pool)
        .await?;
        Ok(invite)
    }

    pub fn is_pending(&self) -> bool {
        self.status == GigInviteStatus::Pending
    }
}
