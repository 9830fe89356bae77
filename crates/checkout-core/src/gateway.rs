//! # Payment Gateway Trait
//!
//! Trait seam between the HTTP layer and the payment provider.
//! The service currently ships a single Stripe implementation, but the
//! handler only ever sees this trait, which is also what tests stub.

use crate::error::CheckoutResult;
use crate::redirect::RedirectUrls;
use crate::topup::{CheckoutSession, TopupOrder};
use async_trait::async_trait;
use std::sync::Arc;

/// Core trait for payment provider implementations.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a hosted checkout session and return the redirect URL.
    ///
    /// # Arguments
    /// * `order` - The top-up order to check out
    /// * `urls` - Success/cancel redirect URLs for the hosted page
    async fn create_checkout(
        &self,
        order: &TopupOrder,
        urls: &RedirectUrls,
    ) -> CheckoutResult<CheckoutSession>;

    /// Get the provider name (for logging)
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared payment gateway (dynamic dispatch)
pub type BoxedPaymentGateway = Arc<dyn PaymentGateway>;
