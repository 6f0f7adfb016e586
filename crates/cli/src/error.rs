// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::sync::SyncError;

/// All possible errors that can occur in the storedeck front end.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("store not found: {0}\n  hint: run 'storedeck list' to see known store ids")]
    StoreNotFound(String),

    #[error("{title}: {message}")]
    Remote { title: String, message: String },

    #[error("invalid api url '{0}'\n  hint: the url must start with http:// or https://")]
    InvalidApiUrl(String),

    #[error("invalid poll interval: {reason}")]
    InvalidPollInterval { reason: String },

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// A specialized Result type for storedeck front-end operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
