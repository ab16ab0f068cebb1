use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use typed_builder::TypedBuilder;

use crate::common::{ProfileId, RiderId, UserId};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "text", rename_all = "snake_case")]
pub enum ProfileRole {
    Artist,
    Promoter,
}

impl std::fmt::Display for ProfileRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileRole::Artist => write!(f, "artist"),
            ProfileRole::Promoter => write!(f, "promoter"),
        }
    }
}

/// Profile model - an artist's or promoter's business record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, TypedBuilder)]
pub struct Profile {
    #[builder(default)]
    pub id: ProfileId,
    pub role: ProfileRole,
    #[builder(setter(into))]
    pub name: String,
    pub main_user_id: UserId,

    // Electronic press kit
    #[builder(default, setter(strip_option, into))]
    pub bio: Option<String>,
    #[builder(default, setter(strip_option, into))]
    pub photo_url: Option<String>,
    #[builder(default)]
    pub genres: Vec<String>,

    // Billing
    #[builder(default, setter(strip_option))]
    pub tax_rate: Option<Decimal>,

    // Current reusable riders
    #[builder(default, setter(strip_option))]
    pub technical_rider_id: Option<RiderId>,
    #[builder(default, setter(strip_option))]
    pub catering_rider_id: Option<RiderId>,

    #[builder(default = Utc::now())]
    pub created_at: DateTime<Utc>,
    #[builder(default = Utc::now())]
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub async fn find_by_id_optional(id: ProfileId, pool: &PgPool) -> Result<Option<Self>> {
        let profile = sqlx::query_as::<_, Self>("SELECT * FROM profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(profile)
    }

    pub fn is_artist(&self) -> bool {
        self.role == ProfileRole::Artist
    }

    /// Whether the electronic press kit has everything promoters look at.
    pub fn epk_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && is_present(&self.bio)
            && is_present(&self.photo_url)
            && !self.genres.is_empty()
    }
}

pub(crate) fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}
