//! # Top-Up Order Types
//!
//! A top-up is a single fixed-product purchase: the customer pays an
//! arbitrary amount (in euro cents) to recharge their booking balance.

use crate::error::{CheckoutError, CheckoutResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product name shown on the hosted checkout page
pub const PRODUCT_NAME: &str = "Ricarica";

/// All top-ups are charged in euro
pub const CURRENCY: &str = "eur";

/// Placeholder used when the caller supplies no booking ID
pub const DEFAULT_BOOKING_ID: &str = "defaultBookingId";

/// Platform assumed when the caller supplies none
pub const DEFAULT_PLATFORM: &str = "web";

/// Parse a caller-supplied amount string into euro cents.
///
/// `None` and empty strings default to 0, matching the endpoint contract.
/// Anything that is not a non-negative integer is rejected.
pub fn parse_amount(raw: Option<&str>) -> CheckoutResult<i64> {
    let raw = match raw {
        Some(s) if !s.trim().is_empty() => s.trim(),
        _ => return Ok(0),
    };

    match raw.parse::<i64>() {
        Ok(n) if n >= 0 => Ok(n),
        _ => Err(CheckoutError::InvalidAmount {
            value: raw.to_string(),
        }),
    }
}

/// A single top-up order to be checked out
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopupOrder {
    /// Unique order ID (generated)
    pub id: String,

    /// Amount in euro cents
    pub amount: i64,

    /// Booking the top-up is credited to
    pub booking_id: String,

    /// Originating platform ("web", "ios", "android")
    pub platform: String,

    /// Idempotency key (prevents duplicate charges)
    pub idempotency_key: String,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl TopupOrder {
    /// Create a new order with generated ID and idempotency key
    pub fn new(amount: i64, booking_id: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            amount,
            booking_id: booking_id.into(),
            platform: platform.into(),
            idempotency_key: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
        }
    }
}

/// A checkout session created by the payment provider.
///
/// The session itself is owned by the provider; we only hold the redirect
/// URL handed back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Provider's session ID
    pub session_id: String,

    /// Our internal order ID
    pub order_id: String,

    /// Provider name (e.g., "stripe")
    pub provider: String,

    /// URL to redirect the customer to for payment
    pub checkout_url: String,

    /// When the session expires
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_defaults_to_zero() {
        assert_eq!(parse_amount(None).unwrap(), 0);
        assert_eq!(parse_amount(Some("")).unwrap(), 0);
        assert_eq!(parse_amount(Some("   ")).unwrap(), 0);
    }

    #[test]
    fn test_parse_amount_valid() {
        assert_eq!(parse_amount(Some("0")).unwrap(), 0);
        assert_eq!(parse_amount(Some("500")).unwrap(), 500);
        assert_eq!(parse_amount(Some(" 2500 ")).unwrap(), 2500);
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(parse_amount(Some("-1")).is_err());
        assert!(parse_amount(Some("12.50")).is_err());
        assert!(parse_amount(Some("abc")).is_err());
    }

    #[test]
    fn test_order_has_idempotency_key() {
        let order = TopupOrder::new(500, "abc123", "web");
        assert_eq!(order.amount, 500);
        assert_eq!(order.booking_id, "abc123");
        assert!(!order.idempotency_key.is_empty());
        assert_ne!(order.id, order.idempotency_key);
    }
}
