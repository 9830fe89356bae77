//! # Application State
//!
//! Shared state for the Axum application: the payment gateway, the
//! redirect policy, and server configuration.

use checkout_core::{BoxedPaymentGateway, RedirectPolicy};
use checkout_stripe::StripeGateway;
use std::sync::Arc;

/// Default front-end origin when the caller supplies none
pub const DEFAULT_FALLBACK_ORIGIN: &str = "https://app.sampoz.tech";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Origin used when the caller supplies none (or an unlisted one)
    pub fallback_origin: String,
    /// Comma-separated allow-list of front-end origins (unset = accept any)
    pub allowed_origins: Option<Vec<String>>,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|raw| parse_allowed_origins(&raw));

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            fallback_origin: std::env::var("FALLBACK_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_FALLBACK_ORIGIN.to_string()),
            allowed_origins,
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<std::net::SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Build the redirect policy from this config
    pub fn redirect_policy(&self) -> RedirectPolicy {
        let policy = RedirectPolicy::new(&self.fallback_origin);
        match &self.allowed_origins {
            Some(origins) => policy.with_allowed_origins(origins.clone()),
            None => policy,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Split the comma-separated `ALLOWED_ORIGINS` value into a list
fn parse_allowed_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect()
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment gateway (Stripe in production, stubbed in tests)
    pub gateway: BoxedPaymentGateway,
    /// Redirect URL policy
    pub redirects: RedirectPolicy,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState backed by the Stripe gateway
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let gateway = StripeGateway::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Stripe: {}", e))?;

        Ok(Self {
            redirects: config.redirect_policy(),
            gateway: Arc::new(gateway),
            config,
        })
    }

    /// Create an AppState with an explicit gateway (for tests)
    pub fn with_gateway(gateway: BoxedPaymentGateway, config: AppConfig) -> Self {
        Self {
            redirects: config.redirect_policy(),
            gateway,
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_allowed_origins() {
        assert_eq!(
            parse_allowed_origins("https://x.test, https://y.test"),
            vec!["https://x.test".to_string(), "https://y.test".to_string()]
        );
        assert_eq!(
            parse_allowed_origins("https://x.test,,"),
            vec!["https://x.test".to_string()]
        );
        assert!(parse_allowed_origins("").is_empty());
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            fallback_origin: DEFAULT_FALLBACK_ORIGIN.to_string(),
            allowed_origins: None,
            environment: "test".to_string(),
        };

        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_redirect_policy_from_config() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            fallback_origin: "https://app.sampoz.tech".to_string(),
            allowed_origins: Some(vec!["https://x.test".to_string()]),
            environment: "test".to_string(),
        };

        let policy = config.redirect_policy();
        assert_eq!(policy.resolve_origin(Some("https://x.test")), "https://x.test");
        assert_eq!(
            policy.resolve_origin(Some("https://evil.test")),
            "https://app.sampoz.tech"
        );
    }
}
