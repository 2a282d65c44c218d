//! Core error types for sgpahub-core.
//!
//! This module defines the error hierarchy using thiserror. Note that advice
//! failures are recovered inside [`crate::advice::AdviceRequester`] by
//! substituting a fallback string; `AdviceError` only crosses an API boundary
//! when the generative client is used directly.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for sgpahub-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Advice-service errors
    #[error("Advice error: {0}")]
    Advice(#[from] AdviceError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No platform config directory could be determined
    #[error("No configuration directory available on this platform")]
    NoConfigDir,

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors from the generative-text boundary.
///
/// Every variant is caught by the requester and mapped to a fallback string;
/// none of them reach an interactive shell as an error state.
#[derive(Error, Debug)]
pub enum AdviceError {
    /// No API credential was provided
    #[error("Advice service credential is missing")]
    MissingCredential,

    /// Transport-level failure (connect, timeout, TLS)
    #[error("Advice request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the service
    #[error("Advice service returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// Response body did not have the expected shape
    #[error("Malformed advice response: {0}")]
    MalformedResponse(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
