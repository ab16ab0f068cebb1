use crate::common::entity_ids::ProfileId;

/// What an actor is trying to do with inquiries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Open the application form for a gig and submit an inquiry.
    ApplyToGig,

    /// Read an existing inquiry. Only its two parties may.
    ViewInquiry {
        artist_id: ProfileId,
        promoter_id: ProfileId,
    },
}

impl Capability {
    pub fn name(&self) -> &'static str {
        match self {
            Capability::ApplyToGig => "apply_to_gig",
            Capability::ViewInquiry { .. } => "view_inquiry",
        }
    }
}
