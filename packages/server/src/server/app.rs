//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::{get, post},
    Router,
};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::kernel::ServerDeps;
use crate::server::middleware::{
    authorize_inquiry_access, authorize_inquiry_access_by_id, authorize_inquiry_creation,
    jwt_auth_middleware,
};
use crate::server::routes::{
    create_inquiry_handler, health_handler, inquiry_handler, new_inquiry_handler,
    show_inquiry_handler,
};

const RATE_LIMIT_REFILL_MS: u64 = 100;
const RATE_LIMIT_BURST: u32 = 20;

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub deps: ServerDeps,
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

/// Build the Axum application router
///
/// `allowed_origins` empty means any origin (development).
/// `trust_forwarded_headers` keys the rate limit on `X-Forwarded-For` /
/// `X-Real-IP`; only enable it behind a proxy that overwrites them. Otherwise
/// the peer address is used, which requires serving with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn build_app(
    deps: ServerDeps,
    allowed_origins: &[String],
    trust_forwarded_headers: bool,
) -> Result<Router> {
    let jwt_service = deps.jwt_service.clone();
    let app_state = AxumAppState { deps };

    let apply_routes = Router::new()
        .route("/gigs/:gig_id/inquiries/new", get(new_inquiry_handler))
        .route("/gigs/:gig_id/inquiries", post(create_inquiry_handler))
        .route_layer(middleware::from_fn(authorize_inquiry_creation));

    let show_routes = Router::new()
        .route("/gigs/:gig_id/inquiries/:id", get(show_inquiry_handler))
        .route_layer(middleware::from_fn(authorize_inquiry_access));

    let inquiry_routes = Router::new()
        .route("/inquiries/:id", get(inquiry_handler))
        .route_layer(middleware::from_fn(authorize_inquiry_access_by_id));

    let app = Router::new()
        .merge(apply_routes)
        .merge(show_routes)
        .merge(inquiry_routes)
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service.clone(), req, next)
        }));

    // Bursts of 20 per client, refilled at 10 requests per second.
    let app = if trust_forwarded_headers {
        let config = GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_millisecond(RATE_LIMIT_REFILL_MS)
            .burst_size(RATE_LIMIT_BURST)
            .use_headers()
            .finish()
            .context("invalid rate limit configuration")?;
        app.layer(GovernorLayer {
            config: Arc::new(config),
        })
    } else {
        let config = GovernorConfigBuilder::default()
            .per_millisecond(RATE_LIMIT_REFILL_MS)
            .burst_size(RATE_LIMIT_BURST)
            .use_headers()
            .finish()
            .context("invalid rate limit configuration")?;
        app.layer(GovernorLayer {
            config: Arc::new(config),
        })
    };

    let app = app
        // Health check (no auth, no rate limit)
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http());

    Ok(app)
}
