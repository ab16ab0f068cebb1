use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use typed_builder::TypedBuilder;

use super::InquiryRider;
use crate::common::{GigId, GigInviteId, InquiryId, ProfileId, UserId, ValidationErrors};
use crate::domains::gigs::Gig;
use crate::domains::profiles::RiderKind;

/// Inquiry model - an artist's application to play a gig
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Inquiry {
    pub id: InquiryId,

    // Parties
    pub gig_id: GigId,
    pub artist_id: ProfileId,
    pub user_id: UserId,
    pub promoter_id: ProfileId,
    pub existing_gig_invite_id: Option<GigInviteId>,

    // Application details
    pub deal_possible_fee_min: Option<Decimal>,
    pub fixed_fee: Option<Decimal>,
    pub travel_party_count: Option<i32>,
    pub artist_contact: Option<String>,
    pub custom_fields: serde_json::Value,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[sqlx(skip)]
    pub technical_rider: Option<InquiryRider>,
    #[sqlx(skip)]
    pub catering_rider: Option<InquiryRider>,
}

/// Every field an inquiry is created from.
///
/// Parties come from the route and the acting profile; the rest is what the
/// artist submitted.
#[derive(Debug, Clone, TypedBuilder)]
pub struct NewInquiry {
    pub gig_id: GigId,
    pub artist_id: ProfileId,
    pub user_id: UserId,
    pub promoter_id: ProfileId,
    #[builder(default)]
    pub existing_gig_invite_id: Option<GigInviteId>,
    #[builder(default)]
    pub deal_possible_fee_min: Option<Decimal>,
    #[builder(default)]
    pub fixed_fee: Option<Decimal>,
    #[builder(default)]
    pub travel_party_count: Option<i32>,
    #[builder(default)]
    pub artist_contact: Option<String>,
    #[builder(default = serde_json::json!({}))]
    pub custom_fields: serde_json::Value,
}

impl Inquiry {
    /// Unsaved inquiry from its creation fields.
    pub fn build(new: NewInquiry) -> Self {
        let now = Utc::now();
        Self {
            id: InquiryId::new(),
            gig_id: new.gig_id,
            artist_id: new.artist_id,
            user_id: new.user_id,
            promoter_id: new.promoter_id,
            existing_gig_invite_id: new.existing_gig_invite_id,
            deal_possible_fee_min: new.deal_possible_fee_min,
            fixed_fee: new.fixed_fee,
            travel_party_count: new.travel_party_count,
            artist_contact: new.artist_contact,
            custom_fields: new.custom_fields,
            created_at: now,
            updated_at: now,
            technical_rider: None,
            catering_rider: None,
        }
    }

    /// Check the inquiry against the gig it applies to.
    pub fn validate(&self, gig: &Gig) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self
            .artist_contact
            .as_deref()
            .map_or(true, |contact| contact.trim().is_empty())
        {
            errors.add("artist_contact", "can't be blank");
        }

        match self.travel_party_count {
            None => errors.add("travel_party_count", "can't be blank"),
            Some(count) if count <= 0 => {
                errors.add("travel_party_count", "must be greater than 0")
            }
            Some(_) => {}
        }

        if let Some(fee) = self.deal_possible_fee_min {
            if fee < Decimal::ZERO {
                errors.add("deal_possible_fee_min", "must be greater than or equal to 0");
            }
        }

        if gig.fixed_fee_option {
            match self.fixed_fee {
                None => errors.add("fixed_fee", "can't be blank"),
                Some(fee) if fee < Decimal::ZERO => {
                    errors.add("fixed_fee", "must be greater than or equal to 0")
                }
                Some(fee) => {
                    let bounded = !gig.fixed_fee_negotiable && gig.fixed_fee_max > Decimal::ZERO;
                    if bounded && (fee < gig.fixed_fee_min || fee > gig.fixed_fee_max) {
                        errors.add(
                            "fixed_fee",
                            format!(
                                "must be between {} and {}",
                                gig.fixed_fee_min, gig.fixed_fee_max
                            ),
                        );
                    }
                }
            }
        }

        if !self.custom_fields.is_object() {
            errors.add("custom_fields", "must be an object");
        }

        errors.into_result()
    }

    pub fn attach_rider(&mut self, rider: InquiryRider) {
        match rider.kind {
            RiderKind::Technical => self.technical_rider = Some(rider),
            RiderKind::Catering => self.catering_rider = Some(rider),
        }
    }

    pub async fn find_by_id_optional(id: InquiryId, pool: &PgPool) -> Result<Option<Self>> {
        let inquiry = sqlx::query_as::<_, Self>("SELECT * FROM inquiries WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(inquiry)
    }

    /// Most recent inquiry the artist submitted to any gig
    pub async fn find_last_by_artist(artist_id: ProfileId, pool: &PgPool) -> Result<Option<Self>> {
        let inquiry = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM inquiries
            WHERE artist_id = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(artist_id)
        .fetch_optional(pool)
        .await?;
        Ok(inquiry)
    }

    pub async fn insert(&self, pool: &PgPool) -> Result<Self> {
        let inquiry = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO inquiries (
                id, gig_id, artist_id, user_id, promoter_id, existing_gig_invite_id,
                deal_possible_fee_min, fixed_fee, travel_party_count, artist_contact,
                custom_fields, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(self.gig_id)
        .bind(self.artist_id)
        .bind(self.user_id)
        .bind(self.promoter_id)
        .bind(self.existing_gig_invite_id)
        .bind(self.deal_possible_fee_min)
        .bind(self.fixed_fee)
        .bind(self.travel_party_count)
        .bind(&self.artist_contact)
        .bind(&self.custom_fields)
        .bind(self.created_at)
        .bind(self.updated_at)
        .fetch_one(pool)
        .await?;
        Ok(inquiry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gig() -> Gig {
        Gig::builder()
            .promoter_id(ProfileId::new())
            .title("Harbour Festival")
            .build()
    }

    fn valid_inquiry(gig: &Gig) -> Inquiry {
        Inquiry::build(
            NewInquiry::builder()
                .gig_id(gig.id)
                .artist_id(ProfileId::new())
                .user_id(UserId::new())
                .promoter_id(gig.promoter_id)
                .artist_contact(Some("booking@owls.example".to_string()))
                .travel_party_count(Some(4))
                .build(),
        )
    }

    #[test]
    fn test_valid_inquiry() {
        let gig = gig();
        assert!(valid_inquiry(&gig).validate(&gig).is_ok());
    }

    #[test]
    fn test_missing_required_fields() {
        let gig = gig();
        let mut inquiry = valid_inquiry(&gig);
        inquiry.artist_contact = Some("  ".to_string());
        inquiry.travel_party_count = None;

        let errors = inquiry.validate(&gig).unwrap_err();
        assert_eq!(errors.on("artist_contact"), ["can't be blank".to_string()]);
        assert_eq!(errors.on("travel_party_count"), ["can't be blank".to_string()]);
    }

    #[test]
    fn test_travel_party_must_be_positive() {
        let gig = gig();
        let mut inquiry = valid_inquiry(&gig);
        inquiry.travel_party_count = Some(0);

        let errors = inquiry.validate(&gig).unwrap_err();
        assert_eq!(
            errors.on("travel_party_count"),
            ["must be greater than 0".to_string()]
        );
    }

    #[test]
    fn test_fixed_fee_required_and_bounded_for_fixed_fee_gigs() {
        let mut gig = gig();
        gig.fixed_fee_option = true;
        gig.fixed_fee_min = Decimal::from(100);
        gig.fixed_fee_max = Decimal::from(500);

        let mut inquiry = valid_inquiry(&gig);
        let errors = inquiry.validate(&gig).unwrap_err();
        assert_eq!(errors.on("fixed_fee"), ["can't be blank".to_string()]);

        inquiry.fixed_fee = Some(Decimal::from(800));
        let errors = inquiry.validate(&gig).unwrap_err();
        assert_eq!(
            errors.on("fixed_fee"),
            ["must be between 100 and 500".to_string()]
        );

        inquiry.fixed_fee = Some(Decimal::from(300));
        assert!(inquiry.validate(&gig).is_ok());
    }

    #[test]
    fn test_negotiable_fee_is_not_bounded() {
        let mut gig = gig();
        gig.fixed_fee_option = true;
        gig.fixed_fee_negotiable = true;
        gig.fixed_fee_max = Decimal::from(500);

        let mut inquiry = valid_inquiry(&gig);
        inquiry.fixed_fee = Some(Decimal::from(900));
        assert!(inquiry.validate(&gig).is_ok());
    }

    #[test]
    fn test_custom_fields_must_be_object() {
        let gig = gig();
        let mut inquiry = valid_inquiry(&gig);
        inquiry.custom_fields = serde_json::json!(["not", "an", "object"]);

        let errors = inquiry.validate(&gig).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["custom_fields"]);
    }
}
