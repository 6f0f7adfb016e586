// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core store types for the provisioning control plane.
//!
//! This module contains the fundamental data types: Engine, StoreStatus,
//! StatusBadge, Store, StoreEvent, StoreDetail, and StoreCounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Commerce engine a store is provisioned with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// WordPress + WooCommerce.
    WooCommerce,
    /// Medusa. Accepted by the data model, not yet enabled for creation.
    Medusa,
}

impl Engine {
    /// Returns the string representation used on the wire and in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::WooCommerce => "woocommerce",
            Engine::Medusa => "medusa",
        }
    }

    /// Returns true if new stores may currently be requested with this engine.
    pub fn is_submittable(&self) -> bool {
        matches!(self, Engine::WooCommerce)
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Engine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "woocommerce" => Ok(Engine::WooCommerce),
            "medusa" => Ok(Engine::Medusa),
            _ => Err(Error::InvalidEngine(s.to_string())),
        }
    }
}

/// Lifecycle status reported by the control plane.
///
/// ```text
/// QUEUED -> PROVISIONING -> READY -> DELETING -> DELETED
///                 |                      |
///                 +-------> FAILED <-----+
/// ```
///
/// Values this client does not know are kept verbatim in [`StoreStatus::Unknown`]
/// so newer servers never break decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StoreStatus {
    /// Accepted, waiting for a provisioning worker.
    Queued,
    /// A worker is installing the tenant release.
    Provisioning,
    /// The tenant endpoint is reachable.
    Ready,
    /// Provisioning or teardown failed.
    Failed,
    /// Teardown requested or in progress.
    Deleting,
    /// Tenant resources are gone.
    Deleted,
    /// A status value this client does not recognise.
    Unknown(String),
}

impl StoreStatus {
    /// Decodes a wire value, preserving unrecognised values.
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "QUEUED" => StoreStatus::Queued,
            "PROVISIONING" => StoreStatus::Provisioning,
            "READY" => StoreStatus::Ready,
            "FAILED" => StoreStatus::Failed,
            "DELETING" => StoreStatus::Deleting,
            "DELETED" => StoreStatus::Deleted,
            other => StoreStatus::Unknown(other.to_string()),
        }
    }

    /// Returns the wire representation (the raw value for unknown statuses).
    pub fn as_str(&self) -> &str {
        match self {
            StoreStatus::Queued => "QUEUED",
            StoreStatus::Provisioning => "PROVISIONING",
            StoreStatus::Ready => "READY",
            StoreStatus::Failed => "FAILED",
            StoreStatus::Deleting => "DELETING",
            StoreStatus::Deleted => "DELETED",
            StoreStatus::Unknown(raw) => raw,
        }
    }

    /// Returns true for states the client treats as final (DELETED, FAILED).
    ///
    /// A FAILED store can still be deleted.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StoreStatus::Deleted | StoreStatus::Failed)
    }

    /// Returns true for the states that precede READY.
    pub fn is_pre_ready(&self) -> bool {
        matches!(self, StoreStatus::Queued | StoreStatus::Provisioning)
    }

    /// Returns true if this value came from outside the known set.
    pub fn is_unknown(&self) -> bool {
        matches!(self, StoreStatus::Unknown(_))
    }

    /// Display bucket for this status.
    pub fn badge(&self) -> StatusBadge {
        match self {
            StoreStatus::Ready => StatusBadge::Success,
            StoreStatus::Failed => StatusBadge::Danger,
            StoreStatus::Provisioning | StoreStatus::Deleting => StatusBadge::Warning,
            StoreStatus::Queued => StatusBadge::Info,
            StoreStatus::Deleted | StoreStatus::Unknown(_) => StatusBadge::Default,
        }
    }
}

impl fmt::Display for StoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for StoreStatus {
    fn from(raw: &str) -> Self {
        StoreStatus::from_wire(raw)
    }
}

impl Serialize for StoreStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StoreStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(StoreStatus::from_wire(&raw))
    }
}

/// Display bucket a status falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBadge {
    Success,
    Danger,
    Warning,
    Info,
    Default,
}

impl StatusBadge {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusBadge::Success => "success",
            StatusBadge::Danger => "danger",
            StatusBadge::Warning => "warning",
            StatusBadge::Info => "info",
            StatusBadge::Default => "default",
        }
    }
}

/// A tenant store as reported by the control plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    /// Opaque identifier assigned by the service.
    pub id: String,
    /// Commerce engine.
    pub engine: Engine,
    /// Operator-chosen name.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Kubernetes namespace holding the tenant.
    pub namespace: String,
    /// Helm release name.
    pub release_name: String,
    /// Current lifecycle status.
    pub status: StoreStatus,
    /// Public storefront URL, once the tenant endpoint exists.
    #[serde(default)]
    pub url: Option<String>,
    /// Most recent failure reason.
    #[serde(default)]
    pub last_error: Option<String>,
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Number of id characters used when a store has no display name.
const SHORT_ID_LEN: usize = 8;

impl Store {
    /// Human label: the display name, or a short form of the id.
    pub fn label(&self) -> String {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.id.chars().take(SHORT_ID_LEN).collect(),
        }
    }

    /// WooCommerce admin entry point derived from the storefront URL.
    pub fn admin_url(&self) -> Option<String> {
        self.url.as_deref().map(|url| {
            let base = url.strip_suffix('/').unwrap_or(url);
            format!("{}/wp-admin", base)
        })
    }
}

/// An append-only lifecycle event recorded by the control plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreEvent {
    pub id: i64,
    /// Free-form label (e.g. "queued", "delete_queued").
    pub event_type: String,
    pub message: String,
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
}

/// A store together with its event history, in server order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreDetail {
    #[serde(flatten)]
    pub store: Store,
    #[serde(default)]
    pub events: Vec<StoreEvent>,
}

impl StoreDetail {
    pub fn id(&self) -> &str {
        &self.store.id
    }
}

/// Summary counters shown above the store table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreCounts {
    pub total: usize,
    pub ready: usize,
    pub failed: usize,
}

impl StoreCounts {
    pub fn from_stores<'a>(stores: impl IntoIterator<Item = &'a Store>) -> Self {
        stores
            .into_iter()
            .fold(StoreCounts::default(), |mut counts, store| {
                counts.total += 1;
                match store.status {
                    StoreStatus::Ready => counts.ready += 1,
                    StoreStatus::Failed => counts.failed += 1,
                    _ => {}
                }
                counts
            })
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
