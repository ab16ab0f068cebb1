//! Authorization gates for the inquiry routes.
//!
//! Run as route layers after `jwt_auth_middleware`. Each gate resolves the
//! acting profile (and the requested record), checks the capability, and
//! hands the loaded values to the handler through request extensions.

use axum::{
    extract::{Extension, Path, Request},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::common::{Actor, AuthError, Capability, GigId, InquiryId};
use crate::domains::profiles::CurrentProfile;
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;
use crate::server::middleware::AuthUser;

/// Cloned out so no borrow of the request lives across an await.
fn require_auth_user(request: &Request) -> Result<AuthUser, AuthError> {
    request
        .extensions()
        .get::<AuthUser>()
        .cloned()
        .ok_or(AuthError::AuthenticationRequired)
}

async fn load_current_profile(
    auth_user: &AuthUser,
    state: &AxumAppState,
) -> Result<CurrentProfile, AuthError> {
    CurrentProfile::load(auth_user.profile_id, state.deps.store.as_ref())
        .await?
        .ok_or(AuthError::NotFound("profile"))
}

/// Gate for the application form and inquiry creation: artists only.
pub async fn authorize_inquiry_creation(
    Extension(state): Extension<AxumAppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_user = require_auth_user(&request)?;
    let current = load_current_profile(&auth_user, &state).await?;

    Actor::new(current.id(), current.is_artist())
        .can(Capability::ApplyToGig)
        .check()?;

    request.extensions_mut().insert(current);
    Ok(next.run(request).await)
}

/// Gate for reading an inquiry under its gig: only its artist or its promoter.
/// An inquiry that belongs to another gig is not found.
pub async fn authorize_inquiry_access(
    Extension(state): Extension<AxumAppState>,
    Path((gig_id, inquiry_id)): Path<(GigId, InquiryId)>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    authorize_inquiry_read(&state, inquiry_id, Some(gig_id), request, next).await
}

/// Gate for `/inquiries/:id`, same parties as [`authorize_inquiry_access`].
pub async fn authorize_inquiry_access_by_id(
    Extension(state): Extension<AxumAppState>,
    Path(inquiry_id): Path<InquiryId>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    authorize_inquiry_read(&state, inquiry_id, None, request, next).await
}

async fn authorize_inquiry_read(
    state: &AxumAppState,
    inquiry_id: InquiryId,
    gig_id: Option<GigId>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_user = require_auth_user(&request)?;
    let current = load_current_profile(&auth_user, state).await?;

    let inquiry = state
        .deps
        .store
        .find_inquiry(inquiry_id)
        .await
        .map_err(AuthError::from)?
        .filter(|inquiry| gig_id.map_or(true, |gig_id| inquiry.gig_id == gig_id))
        .ok_or(AuthError::NotFound("inquiry"))?;

    Actor::new(current.id(), current.is_artist())
        .can(Capability::ViewInquiry {
            artist_id: inquiry.artist_id,
            promoter_id: inquiry.promoter_id,
        })
        .check()
        .inspect_err(|e| debug!(inquiry_id = %inquiry_id, error = %e, "Inquiry access denied"))?;

    request.extensions_mut().insert(current);
    request.extensions_mut().insert(inquiry);
    Ok(next.run(request).await)
}
