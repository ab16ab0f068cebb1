use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use typed_builder::TypedBuilder;

use crate::common::{GigId, ProfileId};

/// Gig model - a promoter's event listing
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, TypedBuilder)]
pub struct Gig {
    #[builder(default)]
    pub id: GigId,
    pub promoter_id: ProfileId,
    #[builder(setter(into))]
    pub title: String,

    // Fees
    #[builder(default)]
    pub deal_possible_fee_min: Option<Decimal>,
    #[builder(default)]
    pub fixed_fee_option: bool,
    #[builder(default)]
    pub fixed_fee_min: Decimal,
    #[builder(default)]
    pub fixed_fee_max: Decimal,
    #[builder(default)]
    pub fixed_fee_negotiable: bool,

    /// Promoter-defined questions, answered per inquiry.
    #[builder(default = serde_json::json!({}))]
    pub custom_fields: serde_json::Value,
    /// Empty means open to every genre.
    #[builder(default)]
    pub genres: Vec<String>,

    #[builder(default = Utc::now())]
    pub created_at: DateTime<Utc>,
    #[builder(default = Utc::now())]
    pub updated_at: DateTime<Utc>,
}

impl Gig {
    /// Find gig by ID, returning None if not found
    pub async fn find_by_id_optional(id: GigId, pool: &PgPool) -> Result<Option<Self>> {
        let gig = sqlx::query_as::<_, Self>("SELECT * FROM gigs WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(gig)
    }

    /// Fee an application form starts with: zero when the gig pays a fixed
    /// fee whose maximum is zero, otherwise left for the artist to fill in.
    pub fn default_fixed_fee(&self) -> Option<Decimal> {
        (self.fixed_fee_option && self.fixed_fee_max.is_zero()).then_some(Decimal::ZERO)
    }

    /// Rewrites a negotiable gig's fee settings for display on the
    /// application form. Never persisted.
    pub fn present_negotiable_fee(&mut self) {
        if self.fixed_fee_negotiable {
            self.fixed_fee_option = true;
            self.fixed_fee_max = Decimal::ZERO;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gig(fixed_fee_option: bool, fixed_fee_max: i64, negotiable: bool) -> Gig {
        Gig::builder()
            .promoter_id(ProfileId::new())
            .title("Open Air")
            .fixed_fee_option(fixed_fee_option)
            .fixed_fee_max(Decimal::from(fixed_fee_max))
            .fixed_fee_negotiable(negotiable)
            .build()
    }

    #[test]
    fn test_default_fixed_fee_is_zero_only_for_zero_max_fixed_fee() {
        assert_eq!(gig(true, 0, false).default_fixed_fee(), Some(Decimal::ZERO));
        assert_eq!(gig(true, 500, false).default_fixed_fee(), None);
        assert_eq!(gig(false, 0, false).default_fixed_fee(), None);
    }

    #[test]
    fn test_negotiable_fee_presentation() {
        let mut negotiable = gig(false, 500, true);
        negotiable.present_negotiable_fee();
        assert!(negotiable.fixed_fee_option);
        assert_eq!(negotiable.fixed_fee_max, Decimal::ZERO);

        let mut fixed = gig(true, 500, false);
        fixed.present_negotiable_fee();
        assert_eq!(fixed.fixed_fee_max, Decimal::from(500));
    }
}
