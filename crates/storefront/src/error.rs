//! Unified error handling.
//!
//! Module errors fold into a single `StorefrontError`. Every error is
//! recovered at the point of the triggering user action - nothing
//! propagates past the handler that caused it - so the type's main job is
//! producing the right user-facing message.

use thiserror::Error;

use crate::api::ApiError;
use crate::cart::CartError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::render::CATALOG_ERROR_MESSAGE;

/// Generic fallback when no server-provided text is available.
const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Cart mutation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Checkout was rejected locally.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// API call failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl StorefrontError {
    /// The message shown to the user for this error.
    ///
    /// Submission and lookup failures carry the server's own text; cart and
    /// checkout errors are already user-facing; transport and parse
    /// failures fall back to a generic string.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Cart(err) => err.to_string(),
            Self::Checkout(err) => err.to_string(),
            Self::Api(err) => match err {
                ApiError::FetchFailure => CATALOG_ERROR_MESSAGE.to_string(),
                ApiError::SubmissionFailure(msg) | ApiError::LookupFailure(msg) => msg.clone(),
                ApiError::Http(_) | ApiError::Parse(_) => GENERIC_ERROR_MESSAGE.to_string(),
            },
            Self::Config(err) => err.to_string(),
        }
    }
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
