//! # Request Handlers
//!
//! Axum request handlers for the top-up checkout API.

use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use checkout_core::{parse_amount, CheckoutError, TopupOrder, DEFAULT_PLATFORM};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

/// Generic message for provider-side failures. Provider error detail stays
/// in the logs, never in the response body.
const GENERIC_FAILURE_MESSAGE: &str = "internal server error";

// =============================================================================
// Request/Response Types
// =============================================================================

/// Query parameters for checkout creation (all optional)
#[derive(Debug, Deserialize)]
pub struct CheckoutParams {
    /// Front-end origin for post-payment redirects
    #[serde(default)]
    pub origin: Option<String>,
    /// Top-up amount in euro cents (string from the transport)
    #[serde(default)]
    pub amount: Option<String>,
    /// Booking the top-up is credited to
    #[serde(default, rename = "bookingId")]
    pub booking_id: Option<String>,
    /// Originating platform ("web", "ios", "android")
    #[serde(default)]
    pub platform: Option<String>,
}

/// Create checkout response
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    /// Provider-hosted checkout URL (redirect user here)
    pub url: String,
}

/// Error response for caller-input errors
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }
}

fn checkout_error_to_response(err: &CheckoutError) -> Response {
    if err.is_caller_error() {
        let code = err.status_code();
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST);
        return (status, Json(ErrorResponse::new(err.to_string(), code))).into_response();
    }

    // Any provider/network/config failure collapses to a generic 500.
    (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE_MESSAGE).into_response()
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "topup-checkout",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Create a checkout session for a top-up
#[instrument(skip(state, params, headers), fields(booking_id = ?params.booking_id, platform = ?params.platform))]
pub async fn create_checkout(
    State(state): State<AppState>,
    Query(params): Query<CheckoutParams>,
    headers: HeaderMap,
) -> Result<Json<CheckoutResponse>, Response> {
    let amount = parse_amount(params.amount.as_deref())
        .map_err(|e| checkout_error_to_response(&e))?;

    // Origin precedence: query param, then the Origin request header sent
    // by browser callers, then the configured fallback. Either source
    // still goes through the redirect policy's allow-list.
    let origin = params
        .origin
        .as_deref()
        .filter(|o| !o.trim().is_empty())
        .or_else(|| headers.get(header::ORIGIN).and_then(|v| v.to_str().ok()));

    let urls = state
        .redirects
        .redirect_urls(origin, params.booking_id.as_deref());

    let booking_id = state.redirects.sanitize_booking_id(params.booking_id.as_deref());
    let platform = params
        .platform
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PLATFORM.to_string());

    let order = TopupOrder::new(amount, booking_id, platform);

    info!(
        "Creating checkout: amount={}, booking_id={}, success_url={}",
        order.amount, order.booking_id, urls.success_url
    );

    let session = state
        .gateway
        .create_checkout(&order, &urls)
        .await
        .map_err(|e| {
            error!("Failed to create checkout session: {}", e);
            checkout_error_to_response(&e)
        })?;

    info!("Created checkout session: {}", session.session_id);

    Ok(Json(CheckoutResponse {
        url: session.checkout_url,
    }))
}
