//! Inquiries domain - artists applying to gigs
//!
//! Actions:
//! - `build_inquiry_form`: draft + matching flag for the application form
//! - `create_inquiry`: validate, persist, attach riders, emit follow-ups
//! - `show_inquiry`: promoter view (artists are redirected)

pub mod actions;
pub mod data;
pub mod events;
pub mod jobs;
pub mod models;

pub use actions::{
    build_inquiry_form, create_inquiry, show_inquiry, CreateInquiryOutcome, InquiryError,
    ShowInquiryOutcome,
};
pub use data::{CreateInquiryParams, InquiryDraft, InquiryForm, InquiryParams};
pub use events::{CrmEvent, DomainEvent, ReadSubject};
pub use jobs::{CopyMediaItem, SyncCrmProfile};
pub use models::{Inquiry, InquiryRider, NewInquiry};
