//! # Top-Up Checkout Service
//!
//! Creates Stripe Checkout Sessions for Sampoz booking top-ups.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_SECRET_KEY=sk_test_...
//! export ALLOWED_ORIGINS=https://app.sampoz.tech
//!
//! # Run the server
//! topup-checkout
//! ```

use checkout_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Payment provider: {}", state.gateway.provider_name());
    info!("Fallback origin: {}", state.config.fallback_origin);
    match &state.config.allowed_origins {
        Some(origins) => info!("Allowed origins: {:?}", origins),
        None => info!("Allowed origins: any (set ALLOWED_ORIGINS to restrict)"),
    }

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("Top-up checkout starting on http://{}", addr);

    if !is_prod {
        info!("Checkout: GET http://{}/createCheckout?amount=500&bookingId=abc123", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
