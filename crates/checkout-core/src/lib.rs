//! # checkout-core
//!
//! Core types and traits for the Sampoz top-up checkout service.
//!
//! This crate provides:
//! - `PaymentGateway` trait for payment provider implementations
//! - `TopupOrder` and `CheckoutSession` for the checkout flow
//! - `RedirectPolicy` and `RedirectUrls` for post-payment redirects
//! - `CheckoutError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use checkout_core::{parse_amount, RedirectPolicy, TopupOrder};
//!
//! let policy = RedirectPolicy::new("https://app.sampoz.tech");
//! let urls = policy.redirect_urls(Some("https://x.test"), Some("abc123"));
//!
//! let amount = parse_amount(Some("500"))?;
//! let order = TopupOrder::new(amount, "abc123", "web");
//!
//! // Hand order + urls to a PaymentGateway, redirect the customer to
//! // session.checkout_url
//! let session = gateway.create_checkout(&order, &urls).await?;
//! ```

pub mod error;
pub mod gateway;
pub mod redirect;
pub mod topup;

// Re-exports for convenience
pub use error::{CheckoutError, CheckoutResult};
pub use gateway::{BoxedPaymentGateway, PaymentGateway};
pub use redirect::{RedirectPolicy, RedirectUrls};
pub use topup::{
    parse_amount, CheckoutSession, TopupOrder, CURRENCY, DEFAULT_BOOKING_ID, DEFAULT_PLATFORM,
    PRODUCT_NAME,
};
