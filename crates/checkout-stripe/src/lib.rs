//! # checkout-stripe
//!
//! Stripe payment gateway for the Sampoz top-up checkout service.
//!
//! Implements `checkout_core::PaymentGateway` over Stripe's Checkout
//! Sessions API: each top-up becomes a hosted checkout page with a single
//! "Ricarica" line item priced in euro cents.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use checkout_stripe::StripeGateway;
//! use checkout_core::{PaymentGateway, RedirectUrls, TopupOrder};
//!
//! // Reads STRIPE_SECRET_KEY from the environment
//! let gateway = StripeGateway::from_env()?;
//!
//! let order = TopupOrder::new(500, "abc123", "web");
//! let urls = RedirectUrls::build("https://app.sampoz.tech", "abc123");
//!
//! let session = gateway.create_checkout(&order, &urls).await?;
//! // Redirect the customer to session.checkout_url
//! ```

pub mod checkout;
pub mod config;

// Re-exports
pub use checkout::StripeGateway;
pub use config::StripeConfig;
