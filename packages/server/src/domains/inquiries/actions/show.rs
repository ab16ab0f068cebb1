use crate::domains::inquiries::{DomainEvent, Inquiry};
use crate::domains::profiles::CurrentProfile;
use crate::kernel::ServerDeps;

#[derive(Debug, Clone)]
pub enum ShowInquiryOutcome {
    /// Artists read inquiries outside the gig-prefixed routes.
    Redirect(String),
    Render(Inquiry),
}

/// Promoter view of an inquiry. Marks it read for everyone but artists.
pub async fn show_inquiry(
    inquiry: Inquiry,
    current: &CurrentProfile,
    deps: &ServerDeps,
) -> ShowInquiryOutcome {
    if current.is_artist() {
        return ShowInquiryOutcome::Redirect(format!("/inquiries/{}", inquiry.id));
    }

    deps.event_bus.emit(DomainEvent::read_inquiry(inquiry.id)).await;
    ShowInquiryOutcome::Render(inquiry)
}
