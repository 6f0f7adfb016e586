// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Request and response bodies of the store service REST contract.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::store::{Engine, StoreStatus};

/// Body of `POST /stores`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateStoreRequest {
    pub engine: Engine,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl CreateStoreRequest {
    /// Builds a request; blank display names are sent as absent.
    pub fn new(engine: Engine, display_name: Option<&str>) -> Self {
        let display_name = display_name
            .filter(|name| !name.trim().is_empty())
            .map(str::to_string);
        CreateStoreRequest {
            engine,
            display_name,
        }
    }
}

/// Acknowledgement returned by create and delete.
///
/// Only `store_id` is guaranteed; the rest is informational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnqueueReceipt {
    pub store_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StoreStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queued_job_id: Option<String>,
}

/// Ephemeral admin login for a store.
///
/// Never cached beyond the view that revealed it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCredentials {
    pub store_id: String,
    pub username: String,
    pub password: String,
    pub admin_url: String,
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("store_id", &self.store_id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("admin_url", &self.admin_url)
            .finish()
    }
}

#[cfg(test)]
#[path = "wire_tests.rs"]
mod tests;
