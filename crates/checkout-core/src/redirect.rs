//! # Redirect URL Construction
//!
//! Builds the post-payment success/cancel URLs from the caller-supplied
//! front-end origin and booking ID. Both values arrive over the wire
//! unauthenticated, so the origin is checked against an allow-list and the
//! booking ID is sanitized before either is interpolated into a URL.

use crate::topup::DEFAULT_BOOKING_ID;
use serde::{Deserialize, Serialize};

/// Path templates on the front-end (fragment routes)
const SUCCESS_PATH: &str = "/#/stripesuccess?bookingId=";
const CANCEL_PATH: &str = "/#/stripefailed";

/// The pair of redirect URLs handed to the payment provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectUrls {
    /// URL the provider redirects to after successful payment
    pub success_url: String,
    /// URL the provider redirects to if the customer cancels
    pub cancel_url: String,
}

impl RedirectUrls {
    /// Build the redirect pair for a resolved origin and sanitized booking ID
    pub fn build(origin: &str, booking_id: &str) -> Self {
        let origin = origin.trim_end_matches('/');
        Self {
            success_url: format!("{}{}{}", origin, SUCCESS_PATH, booking_id),
            cancel_url: format!("{}{}", origin, CANCEL_PATH),
        }
    }
}

/// Policy for resolving caller-supplied origins and booking IDs
#[derive(Debug, Clone)]
pub struct RedirectPolicy {
    /// Origin used when the caller supplies none (or an unlisted one)
    pub fallback_origin: String,
    /// Allowed front-end origins; `None` accepts any well-formed origin
    pub allowed_origins: Option<Vec<String>>,
}

impl RedirectPolicy {
    /// Create a policy with no allow-list
    pub fn new(fallback_origin: impl Into<String>) -> Self {
        Self {
            fallback_origin: normalize_origin(&fallback_origin.into()),
            allowed_origins: None,
        }
    }

    /// Builder: restrict accepted origins to the given list
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.allowed_origins = Some(origins.iter().map(|o| normalize_origin(o)).collect());
        self
    }

    /// Resolve the origin to interpolate into redirect URLs.
    ///
    /// Unknown or malformed origins fall back to the configured default
    /// rather than failing the request; the top-up still completes, the
    /// customer just lands on the default front-end.
    pub fn resolve_origin(&self, requested: Option<&str>) -> String {
        let requested = match requested {
            Some(o) if !o.trim().is_empty() => normalize_origin(o),
            _ => return self.fallback_origin.clone(),
        };

        if !is_well_formed_origin(&requested) {
            return self.fallback_origin.clone();
        }

        match &self.allowed_origins {
            Some(allowed) if !allowed.iter().any(|o| o == &requested) => {
                self.fallback_origin.clone()
            }
            _ => requested,
        }
    }

    /// Sanitize a caller-supplied booking ID for URL interpolation.
    ///
    /// Keeps `[A-Za-z0-9._-]`; an ID that is empty after filtering (or was
    /// never supplied) becomes the default placeholder.
    pub fn sanitize_booking_id(&self, requested: Option<&str>) -> String {
        let cleaned: String = requested
            .unwrap_or_default()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            .collect();

        if cleaned.is_empty() {
            DEFAULT_BOOKING_ID.to_string()
        } else {
            cleaned
        }
    }

    /// Resolve origin + booking ID and build the redirect pair in one step
    pub fn redirect_urls(&self, origin: Option<&str>, booking_id: Option<&str>) -> RedirectUrls {
        let origin = self.resolve_origin(origin);
        let booking_id = self.sanitize_booking_id(booking_id);
        RedirectUrls::build(&origin, &booking_id)
    }
}

fn normalize_origin(origin: &str) -> String {
    origin.trim().trim_end_matches('/').to_string()
}

fn is_well_formed_origin(origin: &str) -> bool {
    let rest = if let Some(rest) = origin.strip_prefix("https://") {
        rest
    } else if let Some(rest) = origin.strip_prefix("http://") {
        rest
    } else {
        return false;
    };

    // Host only: no path, query, fragment, or userinfo
    !rest.is_empty()
        && !rest.contains(['/', '?', '#', '@', ' '])
}
