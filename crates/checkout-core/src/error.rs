//! # Checkout Error Types
//!
//! Typed error handling for the top-up checkout service.
//! All checkout operations return `Result<T, CheckoutError>`.

use thiserror::Error;

/// Core error type for all checkout operations
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Amount could not be coerced to a non-negative integer
    #[error("Invalid amount: {value}")]
    InvalidAmount { value: String },

    /// Payment provider API error
    #[error("Provider error [{provider}]: {message}")]
    ProviderError { provider: String, message: String },

    /// Network/HTTP error communicating with provider
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Checkout session creation failed
    #[error("Checkout creation failed: {0}")]
    CheckoutCreationFailed(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CheckoutError {
    /// Returns true if this error was caused by caller input
    pub fn is_caller_error(&self) -> bool {
        matches!(self, CheckoutError::InvalidAmount { .. })
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            CheckoutError::Configuration(_) => 500,
            CheckoutError::InvalidAmount { .. } => 400,
            // Provider-side failures are deliberately collapsed to 500 at
            // the HTTP boundary; the caller never sees provider detail.
            CheckoutError::ProviderError { .. } => 500,
            CheckoutError::NetworkError(_) => 500,
            CheckoutError::CheckoutCreationFailed(_) => 500,
            CheckoutError::Serialization(_) => 500,
        }
    }
}

/// Result type alias for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_errors() {
        assert!(CheckoutError::InvalidAmount {
            value: "-5".into()
        }
        .is_caller_error());
        assert!(!CheckoutError::NetworkError("timeout".into()).is_caller_error());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            CheckoutError::InvalidAmount { value: "x".into() }.status_code(),
            400
        );
        assert_eq!(
            CheckoutError::ProviderError {
                provider: "stripe".into(),
                message: "card declined".into()
            }
            .status_code(),
            500
        );
        assert_eq!(CheckoutError::NetworkError("refused".into()).status_code(), 500);
    }
}
