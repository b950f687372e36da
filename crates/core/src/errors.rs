use thiserror::Error;

use crate::models::dataset::LoadFailure;

/// Unified error type for the entire finance-dash-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Loading ─────────────────────────────────────────────────────
    #[error("Failed to load data: {0}")]
    LoadFailure(LoadFailure),

    // ── Provider / Network ──────────────────────────────────────────
    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Inconsistent net worth for {date}: expected {expected}, found {actual}")]
    InconsistentNetWorth {
        date: String,
        expected: f64,
        actual: f64,
    },

    // ── View State ──────────────────────────────────────────────────
    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    #[error("Invalid transaction filter: {0}")]
    InvalidFilter(String),

    // ── Configuration ───────────────────────────────────────────────
    #[error("Configuration error: {0}")]
    Config(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<LoadFailure> for CoreError {
    fn from(f: LoadFailure) -> Self {
        CoreError::LoadFailure(f)
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors carry the full URL; drop the query string.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(e: config::ConfigError) -> Self {
        CoreError::Config(e.to_string())
    }
}
