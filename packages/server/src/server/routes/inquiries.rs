//! Inquiry endpoints. Authorization has already run (see
//! `middleware::authorize`); handlers read the resolved values from
//! request extensions.

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use tracing::debug;

use crate::common::{GigId, ValidationErrors};
use crate::domains::inquiries::{
    build_inquiry_form, create_inquiry, show_inquiry, CreateInquiryOutcome, CreateInquiryParams,
    Inquiry, ShowInquiryOutcome,
};
use crate::domains::profiles::CurrentProfile;
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;
use crate::server::middleware::AuthUser;
use crate::server::views;

const DESERIALIZE_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// `GET /gigs/:gig_id/inquiries/new`
pub async fn new_inquiry_handler(
    Extension(state): Extension<AxumAppState>,
    Extension(current): Extension<CurrentProfile>,
    Path(gig_id): Path<GigId>,
) -> Result<Html<String>, ApiError> {
    let form = build_inquiry_form(gig_id, &current, &state.deps).await?;
    Ok(Html(views::inquiry_form(&form)))
}

/// `POST /gigs/:gig_id/inquiries`
pub async fn create_inquiry_handler(
    Extension(state): Extension<AxumAppState>,
    Extension(current): Extension<CurrentProfile>,
    Extension(auth_user): Extension<AuthUser>,
    Path(gig_id): Path<GigId>,
    payload: Result<Json<CreateInquiryParams>, JsonRejection>,
) -> Result<Response, ApiError> {
    let params = match payload {
        Ok(Json(params)) => params,
        Err(rejection) => {
            debug!(error = %rejection.body_text(), "Rejected inquiry payload");
            let errors = payload_errors(&rejection.body_text());
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response());
        }
    };

    let outcome =
        create_inquiry(gig_id, &current, auth_user.user_id, params, &state.deps).await?;

    Ok(match outcome {
        CreateInquiryOutcome::Created(inquiry) => {
            (StatusCode::CREATED, Json(inquiry)).into_response()
        }
        CreateInquiryOutcome::Invalid(errors) => {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response()
        }
    })
}

/// `GET /gigs/:gig_id/inquiries/:id`
pub async fn show_inquiry_handler(
    Extension(state): Extension<AxumAppState>,
    Extension(current): Extension<CurrentProfile>,
    Extension(inquiry): Extension<Inquiry>,
) -> Response {
    match show_inquiry(inquiry, &current, &state.deps).await {
        ShowInquiryOutcome::Redirect(path) => Redirect::to(&path).into_response(),
        ShowInquiryOutcome::Render(inquiry) => Html(views::inquiry(&inquiry)).into_response(),
    }
}

/// `GET /inquiries/:id`. Artists land here from the gig-prefixed route;
/// everyone else gets the same response as there.
pub async fn inquiry_handler(
    Extension(state): Extension<AxumAppState>,
    Extension(current): Extension<CurrentProfile>,
    Extension(inquiry): Extension<Inquiry>,
) -> Response {
    if current.is_artist() {
        return Html(views::inquiry(&inquiry)).into_response();
    }

    show_inquiry_handler(Extension(state), Extension(current), Extension(inquiry)).await
}

/// Field-keyed errors for a body that never reached validation.
///
/// Type errors carry a path such as `inquiry.travel_party_count: invalid type`;
/// the last path segment becomes the field. Anything else lands on `base`.
fn payload_errors(rejection: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    let field = rejection
        .strip_prefix(DESERIALIZE_PREFIX)
        .and_then(|detail| detail.split_once(": "))
        .map(|(path, _)| path)
        .filter(|path| !path.contains(' '))
        .and_then(|path| path.rsplit('.').next())
        .filter(|field| !field.is_empty());

    match field {
        Some(field) => errors.add(field, "is invalid"),
        None => errors.add("base", "is not a valid inquiry payload"),
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_error_is_keyed_by_field() {
        let errors = payload_errors(&format!(
            "{}inquiry.travel_party_count: invalid type: string \"four\", expected i32 at line 1 column 60",
            DESERIALIZE_PREFIX
        ));

        assert_eq!(errors.on("travel_party_count"), ["is invalid"]);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_error_without_path_lands_on_base() {
        let errors = payload_errors(&format!(
            "{}invalid type: integer `7`, expected struct CreateInquiryParams at line 1 column 1",
            DESERIALIZE_PREFIX
        ));
        assert_eq!(errors.on("base"), ["is not a valid inquiry payload"]);

        let errors = payload_errors(
            "Failed to parse the request body as JSON: EOF while parsing an object at line 1 column 1",
        );
        assert_eq!(errors.on("base"), ["is not a valid inquiry payload"]);

        let errors = payload_errors("Expected request with `Content-Type: application/json`");
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["base"]);
    }
}
