//! # Common Error Types
//!
//! Consolidated error handling for the application.
//!
//! Errors are categorized by their source:
//!
//! - **Api**: balance service communication errors (network, HTTP, JSON parsing)
//! - **Rpc**: JSON-RPC node errors (call failures, malformed results)
//! - **State**: application state management errors
//! - **Validation**: input validation errors (invalid address, bad amount)
//!
//! Service modules return `Result<_, String>` at the reqwest boundary; the
//! strings convert into [`AppError::Api`] where a typed error is needed.

use thiserror::Error;

/// Application-wide error type.
///
/// Each variant carries a descriptive message; `thiserror` supplies the
/// `Display` and `Error` implementations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Balance service communication error.
    ///
    /// Network failures, HTTP error statuses, and malformed JSON responses
    /// from the Safe balance endpoint.
    #[error("API error: {0}")]
    Api(String),

    /// JSON-RPC node error.
    ///
    /// Failed `eth_call`/`eth_gasPrice` requests, error objects returned by
    /// the node, and undecodable call results.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Application state management error.
    #[error("State error: {0}")]
    State(String),

    /// Input validation error.
    ///
    /// Invalid account addresses, malformed claim amounts, out-of-range
    /// values.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Api(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Api(msg.to_string())
    }
}
