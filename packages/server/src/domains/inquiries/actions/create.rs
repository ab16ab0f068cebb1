use tracing::{debug, info};

use super::{enqueue_follow_up, InquiryError};
use crate::common::{GigId, UserId, ValidationErrors};
use crate::domains::gigs::Gig;
use crate::domains::inquiries::{
    CopyMediaItem, CreateInquiryParams, CrmEvent, DomainEvent, Inquiry, InquiryParams,
    InquiryRider, NewInquiry, SyncCrmProfile,
};
use crate::domains::profiles::{CurrentProfile, RiderKind};
use crate::kernel::ServerDeps;

/// CRM event the promoter receives for every new application.
const GIG_RECEIVED_APPLICATION: &str = "gig-received-application";

#[derive(Debug, Clone)]
pub enum CreateInquiryOutcome {
    Created(Inquiry),
    /// Nothing was persisted, emitted or enqueued.
    Invalid(ValidationErrors),
}

/// Apply to a gig as the acting artist.
///
/// `user_id` is the authenticated user; riders attached to the new inquiry
/// belong to them. Follow-ups run only after the inquiry is stored.
pub async fn create_inquiry(
    gig_id: GigId,
    current: &CurrentProfile,
    user_id: UserId,
    params: CreateInquiryParams,
    deps: &ServerDeps,
) -> Result<CreateInquiryOutcome, InquiryError> {
    let gig = deps
        .store
        .find_gig(gig_id)
        .await?
        .ok_or_else(|| InquiryError::not_found("gig", gig_id))?;

    let invite = deps
        .store
        .find_pending_gig_invite(current.id(), gig_id)
        .await?;

    let params = params.inquiry;
    let new_inquiry = NewInquiry::builder()
        .gig_id(gig.id)
        .artist_id(current.id())
        .user_id(current.main_user.id)
        .promoter_id(gig.promoter_id)
        .existing_gig_invite_id(invite.as_ref().map(|i| i.id))
        .deal_possible_fee_min(params.deal_possible_fee_min)
        .fixed_fee(params.fixed_fee)
        .travel_party_count(params.travel_party_count)
        .artist_contact(params.artist_contact.clone())
        .custom_fields(
            params
                .custom_fields
                .clone()
                .unwrap_or_else(|| serde_json::json!({})),
        )
        .build();

    let inquiry = Inquiry::build(new_inquiry);
    if let Err(errors) = inquiry.validate(&gig) {
        debug!(gig_id = %gig_id, fields = errors.len(), "Inquiry rejected by validation");
        return Ok(CreateInquiryOutcome::Invalid(errors));
    }

    let mut inquiry = deps.store.insert_inquiry(&inquiry).await?;
    info!(inquiry_id = %inquiry.id, gig_id = %gig_id, artist_id = %inquiry.artist_id, "Inquiry created");

    for kind in [RiderKind::Technical, RiderKind::Catering] {
        attach_rider(&mut inquiry, kind, current, user_id, &params, deps).await?;
    }

    after_create(&inquiry, &gig, deps).await;
    if let Some(invite) = invite {
        deps.event_bus
            .emit(DomainEvent::read_gig_invite(invite.id))
            .await;
    }

    Ok(CreateInquiryOutcome::Created(inquiry))
}

/// Copy the profile rider of `kind` onto the inquiry if the form was rendered
/// with its current version. A missing or stale hash skips the rider.
async fn attach_rider(
    inquiry: &mut Inquiry,
    kind: RiderKind,
    current: &CurrentProfile,
    user_id: UserId,
    params: &InquiryParams,
    deps: &ServerDeps,
) -> Result<(), InquiryError> {
    let Some(source) = current.rider(kind) else {
        return Ok(());
    };
    if !source.matches_hash(params.rider_hash(kind)) {
        debug!(inquiry_id = %inquiry.id, kind = %kind, "Rider hash mismatch, not attaching");
        return Ok(());
    }

    let rider = deps
        .store
        .insert_inquiry_rider(&InquiryRider::build(inquiry.id, kind, user_id))
        .await?;

    enqueue_follow_up(
        deps,
        &CopyMediaItem {
            source_rider_id: source.id,
            target_rider_id: rider.id,
        },
    )
    .await;

    inquiry.attach_rider(rider);
    Ok(())
}

async fn after_create(inquiry: &Inquiry, gig: &Gig, deps: &ServerDeps) {
    deps.event_bus
        .emit(DomainEvent::WatchlistArtistInquiry {
            inquiry_id: inquiry.id,
        })
        .await;
    deps.event_bus
        .emit(DomainEvent::crm(CrmEvent::Simple {
            name: GIG_RECEIVED_APPLICATION.to_string(),
            profile_id: gig.promoter_id,
        }))
        .await;

    enqueue_follow_up(
        deps,
        &SyncCrmProfile {
            profile_id: gig.promoter_id,
        },
    )
    .await;
}
