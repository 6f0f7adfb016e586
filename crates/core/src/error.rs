// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for sd-core operations.

use thiserror::Error;

/// All possible errors that can occur while parsing or validating store data.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid engine: '{0}'\n  hint: valid engines are: woocommerce, medusa")]
    InvalidEngine(String),

    #[error("invalid timestamp: '{0}'\n  hint: expected an ISO-8601 date-time")]
    InvalidTimestamp(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for sd-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
