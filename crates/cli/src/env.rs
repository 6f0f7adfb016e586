// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by storedeck are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns the value of `STOREDECK_API_BASE_URL` if set and non-empty.
pub fn api_base_url() -> Option<String> {
    std::env::var(vars::STOREDECK_API_BASE_URL)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Returns the value of `STOREDECK_CONFIG` if set.
pub fn config_path() -> Option<PathBuf> {
    std::env::var(vars::STOREDECK_CONFIG)
        .ok()
        .map(PathBuf::from)
}

/// Returns `true` if `NO_COLOR` is set to a non-empty value.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
