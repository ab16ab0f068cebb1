//! Inquiry events - FACT EVENTS ONLY
//!
//! Published to the event bus after the fact; nothing in the request path
//! waits on a consumer.

use serde::{Deserialize, Serialize};

use crate::common::{GigId, GigInviteId, InquiryId, ProfileId};

/// What a read receipt refers to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "subject", content = "id", rename_all = "snake_case")]
pub enum ReadSubject {
    Inquiry(InquiryId),
    GigInvite(GigInviteId),
}

/// CRM (customer messaging) events, keyed by the profile they are about
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CrmEvent {
    /// Artist opened the application form without complete billing data
    ApplicationSawIncompleteBillingDataWarning {
        gig_id: GigId,
        profile_id: ProfileId,
    },

    /// Artist opened the application form with an incomplete press kit
    ApplicationSawIncompleteEpkWarning {
        gig_id: GigId,
        profile_id: ProfileId,
    },

    /// Artist with a complete profile opened the application form
    ApplicationVisitedGigApplicationForm {
        gig_id: GigId,
        profile_id: ProfileId,
    },

    /// Named event without extra payload, e.g. `gig-received-application`
    Simple { name: String, profile_id: ProfileId },
}

impl CrmEvent {
    pub fn name(&self) -> &str {
        match self {
            CrmEvent::ApplicationSawIncompleteBillingDataWarning { .. } => {
                "application-saw-incomplete-billing-data-warning"
            }
            CrmEvent::ApplicationSawIncompleteEpkWarning { .. } => {
                "application-saw-incomplete-epk-warning"
            }
            CrmEvent::ApplicationVisitedGigApplicationForm { .. } => {
                "application-visited-gig-application-form"
            }
            CrmEvent::Simple { name, .. } => name,
        }
    }
}

/// Events emitted by the inquiry endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A new inquiry should show up on the artist watchlist
    WatchlistArtistInquiry { inquiry_id: InquiryId },

    /// The acting party has seen the record
    Read { target: ReadSubject },

    /// Forwarded to the CRM
    Crm { event: CrmEvent },
}

impl DomainEvent {
    /// Subject the event is published on.
    pub fn subject(&self) -> String {
        match self {
            DomainEvent::WatchlistArtistInquiry { .. } => "events.watchlist.artist_inquiry".to_string(),
            DomainEvent::Read { target } => match target {
                ReadSubject::Inquiry(_) => "events.read.inquiry".to_string(),
                ReadSubject::GigInvite(_) => "events.read.gig_invite".to_string(),
            },
            DomainEvent::Crm { event } => format!("events.crm.{}", event.name()),
        }
    }

    pub fn read_inquiry(id: InquiryId) -> Self {
        DomainEvent::Read {
            target: ReadSubject::Inquiry(id),
        }
    }

    pub fn read_gig_invite(id: GigInviteId) -> Self {
        DomainEvent::Read {
            target: ReadSubject::GigInvite(id),
        }
    }

    pub fn crm(event: CrmEvent) -> Self {
        DomainEvent::Crm { event }
    }
}
