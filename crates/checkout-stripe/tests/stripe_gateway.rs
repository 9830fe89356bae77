//! Integration tests for the Stripe gateway against a mock Stripe API.

use checkout_core::{CheckoutError, PaymentGateway, RedirectUrls, TopupOrder};
use checkout_stripe::{StripeConfig, StripeGateway};
use wiremock::matchers::{body_string_contains, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(server: &MockServer) -> StripeGateway {
    let config = StripeConfig::new("sk_test_xyz").with_api_base_url(server.uri());
    StripeGateway::new(config).expect("gateway")
}

fn order() -> TopupOrder {
    TopupOrder::new(500, "abc123", "web")
}

fn urls() -> RedirectUrls {
    RedirectUrls::build("https://x.test", "abc123")
}

#[tokio::test]
async fn creates_session_and_returns_provider_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/checkout/sessions"))
        .and(header("Authorization", "Bearer sk_test_xyz"))
        .and(header_exists("Idempotency-Key"))
        .and(body_string_contains("mode=payment"))
        .and(body_string_contains("Ricarica"))
        .and(body_string_contains("card"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "cs_test_123",
            "url": "https://checkout.stripe.com/c/pay/cs_test_123",
            "expires_at": 1735689600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = gateway_for(&server)
        .create_checkout(&order(), &urls())
        .await
        .expect("session");

    assert_eq!(session.session_id, "cs_test_123");
    assert_eq!(
        session.checkout_url,
        "https://checkout.stripe.com/c/pay/cs_test_123"
    );
    assert_eq!(session.provider, "stripe");
    assert!(session.expires_at.is_some());
}

#[tokio::test]
async fn sends_fixed_line_item_for_parsed_amount() {
    let server = MockServer::start().await;

    // unit_amount is the parsed amount; currency and quantity are fixed.
    // Brackets arrive percent-encoded in the form body.
    Mock::given(method("POST"))
        .and(path("/v1/checkout/sessions"))
        .and(body_string_contains("unit_amount%5D=500"))
        .and(body_string_contains("currency%5D=eur"))
        .and(body_string_contains("quantity%5D=1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "cs_test_456",
            "url": "https://checkout.stripe.com/c/pay/cs_test_456"
        })))
        .expect(1)
        .mount(&server)
        .await;

    gateway_for(&server)
        .create_checkout(&order(), &urls())
        .await
        .expect("session");
}

#[tokio::test]
async fn stripe_error_surfaces_as_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/checkout/sessions"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": {
                "message": "Amount must be at least 50 cents",
                "type": "invalid_request_error"
            }
        })))
        .mount(&server)
        .await;

    let err = gateway_for(&server)
        .create_checkout(&order(), &urls())
        .await
        .expect_err("should fail");

    match &err {
        CheckoutError::ProviderError { provider, message } => {
            assert_eq!(provider, "stripe");
            assert_eq!(message, "Amount must be at least 50 cents");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.status_code(), 500);
}

#[tokio::test]
async fn unparseable_success_body_is_a_serialization_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/checkout/sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = gateway_for(&server)
        .create_checkout(&order(), &urls())
        .await
        .expect_err("should fail");

    assert!(matches!(err, CheckoutError::Serialization(_)));
}

#[tokio::test]
async fn connection_failure_is_a_network_error() {
    // Port 9 (discard) is closed in the test environment.
    let config = StripeConfig::new("sk_test_xyz").with_api_base_url("http://127.0.0.1:9");
    let gateway = StripeGateway::new(config).expect("gateway");

    let err = gateway
        .create_checkout(&order(), &urls())
        .await
        .expect_err("should fail");

    assert!(matches!(err, CheckoutError::NetworkError(_)));
    assert_eq!(err.status_code(), 500);
}
