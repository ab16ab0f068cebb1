use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use typed_builder::TypedBuilder;

use crate::common::{ProfileId, RiderId, UserId};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "text", rename_all = "snake_case")]
pub enum RiderKind {
    Technical,
    Catering,
}

impl std::fmt::Display for RiderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiderKind::Technical => write!(f, "technical"),
            RiderKind::Catering => write!(f, "catering"),
        }
    }
}

/// A reusable rider bundle kept on an artist profile
///
/// `item_hash` changes whenever the underlying media changes; clients echo it
/// back on submit so a stale form never attaches a newer rider.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, TypedBuilder)]
pub struct Rider {
    #[builder(default)]
    pub id: RiderId,
    pub profile_id: ProfileId,
    pub user_id: UserId,
    pub kind: RiderKind,
    #[builder(setter(into))]
    pub item_hash: String,
    #[builder(setter(into))]
    pub file_name: String,
    #[builder(default = Utc::now())]
    pub created_at: DateTime<Utc>,
}

impl Rider {
    pub async fn find_by_id_optional(id: RiderId, pool: &PgPool) -> Result<Option<Self>> {
        let rider = sqlx::query_as::<_, Self>("SELECT * FROM riders WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(rider)
    }

    /// True when the client-submitted hash names this exact rider version.
    pub fn matches_hash(&self, submitted: Option<&str>) -> bool {
        submitted.is_some_and(|hash| hash == self.item_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_hash() {
        let rider = Rider::builder()
            .profile_id(ProfileId::new())
            .user_id(UserId::new())
            .kind(RiderKind::Technical)
            .item_hash("abc123")
            .file_name("stage-plot.pdf")
            .build();

        assert!(rider.matches_hash(Some("abc123")));
        assert!(!rider.matches_hash(Some("stale")));
        assert!(!rider.matches_hash(None));
    }
}
