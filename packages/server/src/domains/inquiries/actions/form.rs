use tracing::debug;

use super::InquiryError;
use crate::common::GigId;
use crate::domains::inquiries::{CrmEvent, DomainEvent, InquiryDraft, InquiryForm};
use crate::domains::matching::GigMatcher;
use crate::domains::profiles::CurrentProfile;
use crate::kernel::ServerDeps;

/// Assemble the application form for `gig_id`.
///
/// Nothing is persisted: the draft, the negotiable-fee override and the
/// prefilled billing address only exist for rendering.
pub async fn build_inquiry_form(
    gig_id: GigId,
    current: &CurrentProfile,
    deps: &ServerDeps,
) -> Result<InquiryForm, InquiryError> {
    let mut gig = deps
        .store
        .find_gig(gig_id)
        .await?
        .ok_or_else(|| InquiryError::not_found("gig", gig_id))?;

    // Default fee is taken from the stored settings, before the override.
    let fixed_fee = gig.default_fixed_fee();
    gig.present_negotiable_fee();

    let last = current.last_inquired(deps.store.as_ref()).await?;
    let is_matching = GigMatcher::new(&gig, &current.profile).matches();
    let profile = current
        .needs_billing_details()
        .then(|| current.billing_form());

    emit_form_events(gig_id, current, deps).await;

    debug!(gig_id = %gig_id, profile_id = %current.id(), is_matching, "Built inquiry form");

    Ok(InquiryForm {
        inquiry: InquiryDraft {
            deal_possible_fee_min: gig.deal_possible_fee_min,
            fixed_fee,
            artist_contact: last.artist_contact,
            travel_party_count: last.travel_party_count,
            custom_fields: gig.custom_fields.clone(),
            technical_rider: current.technical_rider.clone(),
            catering_rider: current.catering_rider.clone(),
            gig,
        },
        is_matching,
        profile,
    })
}

/// CRM events describing what the artist saw on the form.
async fn emit_form_events(gig_id: GigId, current: &CurrentProfile, deps: &ServerDeps) {
    let profile_id = current.id();

    if !current.has_complete_billing_address() {
        deps.event_bus
            .emit(DomainEvent::crm(
                CrmEvent::ApplicationSawIncompleteBillingDataWarning { gig_id, profile_id },
            ))
            .await;
    }
    if !current.epk_complete() {
        deps.event_bus
            .emit(DomainEvent::crm(CrmEvent::ApplicationSawIncompleteEpkWarning {
                gig_id,
                profile_id,
            }))
            .await;
    }
    if current.complete_for_inquiry() {
        deps.event_bus
            .emit(DomainEvent::crm(
                CrmEvent::ApplicationVisitedGigApplicationForm { gig_id, profile_id },
            ))
            .await;
    }
}
