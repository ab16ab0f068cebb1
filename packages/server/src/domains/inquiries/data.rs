//! Request and view types for the inquiry endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domains::gigs::Gig;
use crate::domains::profiles::models::ProfileBillingForm;
use crate::domains::profiles::{Rider, RiderKind};

/// Body of `POST /gigs/:gig_id/inquiries`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateInquiryParams {
    #[serde(default)]
    pub inquiry: InquiryParams,
}

/// Fields the artist may submit. Parties are never taken from the client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InquiryParams {
    #[serde(default)]
    pub artist_contact: Option<String>,
    #[serde(default)]
    pub travel_party_count: Option<i32>,
    #[serde(default)]
    pub deal_possible_fee_min: Option<Decimal>,
    #[serde(default)]
    pub fixed_fee: Option<Decimal>,
    #[serde(default)]
    pub custom_fields: Option<serde_json::Value>,
    /// Hash of the technical rider the form was rendered with.
    #[serde(default)]
    pub technical_rider_hash: Option<String>,
    /// Hash of the catering rider the form was rendered with.
    #[serde(default)]
    pub catering_rider_hash: Option<String>,
}

impl InquiryParams {
    pub fn rider_hash(&self, kind: RiderKind) -> Option<&str> {
        match kind {
            RiderKind::Technical => self.technical_rider_hash.as_deref(),
            RiderKind::Catering => self.catering_rider_hash.as_deref(),
        }
    }
}

/// Unsaved inquiry used to pre-populate the application form.
#[derive(Debug, Clone, Serialize)]
pub struct InquiryDraft {
    /// The gig as the form should present it (negotiable fees rewritten).
    pub gig: Gig,
    pub deal_possible_fee_min: Option<Decimal>,
    pub fixed_fee: Option<Decimal>,
    pub artist_contact: Option<String>,
    pub travel_party_count: Option<i32>,
    pub custom_fields: serde_json::Value,
    /// Profile riders offered for attachment; copied only if kept until submit.
    pub technical_rider: Option<Rider>,
    pub catering_rider: Option<Rider>,
}

/// Everything the application form renders.
#[derive(Debug, Clone, Serialize)]
pub struct InquiryForm {
    pub inquiry: InquiryDraft,
    pub is_matching: bool,
    /// Present only when the profile still lacks billing details.
    pub profile: Option<ProfileBillingForm>,
}
