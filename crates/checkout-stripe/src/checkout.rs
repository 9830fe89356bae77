//! # Stripe Checkout Sessions
//!
//! Implementation of the Stripe Checkout Sessions API for top-up orders.
//! Every top-up is a single fixed-product line item ("Ricarica") priced in
//! euro cents, charged as a one-time card payment on Stripe's hosted page.

use crate::config::StripeConfig;
use async_trait::async_trait;
use checkout_core::{
    CheckoutError, CheckoutResult, CheckoutSession, PaymentGateway, RedirectUrls, TopupOrder,
    CURRENCY, PRODUCT_NAME,
};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

/// Stripe Checkout Session gateway
///
/// Uses Stripe's hosted checkout page for secure payments.
/// This is the recommended approach for PCI compliance.
pub struct StripeGateway {
    config: StripeConfig,
    client: Client,
}

impl StripeGateway {
    /// Create a new Stripe gateway
    pub fn new(config: StripeConfig) -> CheckoutResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| CheckoutError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> CheckoutResult<Self> {
        let config = StripeConfig::from_env()?;
        Self::new(config)
    }

    /// Build the form body for `POST /v1/checkout/sessions`.
    ///
    /// The parameter shape must stay compatible with Stripe's form encoding:
    /// card payment, one line item, one-time payment mode.
    fn build_form_params(order: &TopupOrder, urls: &RedirectUrls) -> Vec<(String, String)> {
        vec![
            (
                "payment_method_types[0]".to_string(),
                "card".to_string(),
            ),
            (
                "line_items[0][price_data][currency]".to_string(),
                CURRENCY.to_string(),
            ),
            (
                "line_items[0][price_data][product_data][name]".to_string(),
                PRODUCT_NAME.to_string(),
            ),
            (
                "line_items[0][price_data][unit_amount]".to_string(),
                order.amount.to_string(),
            ),
            ("line_items[0][quantity]".to_string(), "1".to_string()),
            ("mode".to_string(), "payment".to_string()),
            ("success_url".to_string(), urls.success_url.clone()),
            ("cancel_url".to_string(), urls.cancel_url.clone()),
            ("metadata[order_id]".to_string(), order.id.clone()),
            (
                "metadata[booking_id]".to_string(),
                order.booking_id.clone(),
            ),
            ("metadata[platform]".to_string(), order.platform.clone()),
        ]
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    #[instrument(skip(self, order, urls), fields(order_id = %order.id, amount = order.amount))]
    async fn create_checkout(
        &self,
        order: &TopupOrder,
        urls: &RedirectUrls,
    ) -> CheckoutResult<CheckoutSession> {
        let form_params = Self::build_form_params(order, urls);

        debug!(
            "Creating Stripe checkout session: amount={}, booking_id={}",
            order.amount, order.booking_id
        );

        let url = format!("{}/v1/checkout/sessions", self.config.api_base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .header("Idempotency-Key", &order.idempotency_key)
            .form(&form_params)
            .send()
            .await
            .map_err(|e| CheckoutError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CheckoutError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);

            // Parse Stripe error for the log trail; the HTTP layer still
            // collapses this to a generic 500 for the caller.
            if let Ok(error_response) = serde_json::from_str::<StripeErrorResponse>(&body) {
                return Err(CheckoutError::ProviderError {
                    provider: "stripe".to_string(),
                    message: error_response.error.message,
                });
            }

            return Err(CheckoutError::ProviderError {
                provider: "stripe".to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        let session_response: StripeCheckoutSessionResponse = serde_json::from_str(&body)
            .map_err(|e| {
                CheckoutError::Serialization(format!("Failed to parse Stripe response: {}", e))
            })?;

        info!(
            "Created Stripe checkout session: id={}, url={}",
            session_response.id, session_response.url
        );

        let expires_at = session_response
            .expires_at
            .and_then(|ts| DateTime::from_timestamp(ts, 0));

        Ok(CheckoutSession {
            session_id: session_response.id,
            order_id: order.id.clone(),
            provider: "stripe".to_string(),
            checkout_url: session_response.url,
            expires_at,
            created_at: Utc::now(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "stripe"
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripeCheckoutSessionResponse {
    id: String,
    url: String,
    #[serde(default)]
    expires_at: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> TopupOrder {
        TopupOrder::new(500, "abc123", "web")
    }

    fn urls() -> RedirectUrls {
        RedirectUrls::build("https://x.test", "abc123")
    }

    fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_form_params_fixed_line_item() {
        let params = StripeGateway::build_form_params(&order(), &urls());

        assert_eq!(param(&params, "payment_method_types[0]"), Some("card"));
        assert_eq!(
            param(&params, "line_items[0][price_data][currency]"),
            Some("eur")
        );
        assert_eq!(
            param(&params, "line_items[0][price_data][product_data][name]"),
            Some("Ricarica")
        );
        assert_eq!(
            param(&params, "line_items[0][price_data][unit_amount]"),
            Some("500")
        );
        assert_eq!(param(&params, "line_items[0][quantity]"), Some("1"));
        assert_eq!(param(&params, "mode"), Some("payment"));
    }

    #[test]
    fn test_form_params_redirect_urls() {
        let params = StripeGateway::build_form_params(&order(), &urls());

        assert_eq!(
            param(&params, "success_url"),
            Some("https://x.test/#/stripesuccess?bookingId=abc123")
        );
        assert_eq!(
            param(&params, "cancel_url"),
            Some("https://x.test/#/stripefailed")
        );
    }

    #[test]
    fn test_form_params_metadata() {
        let ord = order();
        let params = StripeGateway::build_form_params(&ord, &urls());

        assert_eq!(param(&params, "metadata[booking_id]"), Some("abc123"));
        assert_eq!(param(&params, "metadata[platform]"), Some("web"));
        assert_eq!(param(&params, "metadata[order_id]"), Some(ord.id.as_str()));
    }
}
