//! # checkout-api
//!
//! HTTP API layer for the Sampoz top-up checkout service.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The checkout-session creation endpoint
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET/POST | `/createCheckout` | Create a top-up checkout session |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
