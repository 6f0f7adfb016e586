// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard state slices.
//!
//! The store list, the selected detail, and the credentials view are
//! independent slices. Each intent writes only the slices it owns.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};

use sd_core::{AdminCredentials, Store, StoreCounts, StoreDetail, StoreStatus};

/// Authoritative store list plus a display-only optimistic overlay.
///
/// Precedence: the overlay wins over the list it was applied to, and every
/// [`StoreList::replace`] clears it. An authoritative read always
/// overwrites an optimistic status, whatever it reports.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreList {
    stores: Vec<Store>,
    overlay: HashMap<String, StoreStatus>,
}

impl StoreList {
    pub fn new(stores: Vec<Store>) -> Self {
        StoreList {
            stores,
            overlay: HashMap::new(),
        }
    }

    /// Installs an authoritative list and drops every optimistic patch.
    pub fn replace(&mut self, stores: Vec<Store>) {
        self.stores = stores;
        self.overlay.clear();
    }

    /// Optimistically shows a store as `DELETING`.
    ///
    /// Returns false when the id is not in the list; no placeholder is
    /// invented for unknown ids.
    pub fn mark_deleting(&mut self, id: &str) -> bool {
        if !self.stores.iter().any(|s| s.id == id) {
            return false;
        }
        self.overlay.insert(id.to_string(), StoreStatus::Deleting);
        true
    }

    /// The merged view, in server order.
    pub fn stores(&self) -> Vec<Store> {
        self.stores.iter().map(|s| self.merged(s)).collect()
    }

    /// A single store from the merged view.
    pub fn get(&self, id: &str) -> Option<Store> {
        self.stores.iter().find(|s| s.id == id).map(|s| self.merged(s))
    }

    pub fn counts(&self) -> StoreCounts {
        StoreCounts::from_stores(&self.stores())
    }

    #[cfg(test)]
    pub fn is_patched(&self, id: &str) -> bool {
        self.overlay.contains_key(id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    fn merged(&self, store: &Store) -> Store {
        let mut store = store.clone();
        if let Some(status) = self.overlay.get(&store.id) {
            store.status = status.clone();
        }
        store
    }
}

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A transient notification for the operator.
///
/// Each notice carries a fresh `seq`; a newer notice replaces an older one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

/// Clipboard outcome of the credentials view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CopyState {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyState {
    pub fn helper_text(&self) -> &'static str {
        match self {
            CopyState::Idle => "Use these credentials to sign into Woo admin.",
            CopyState::Copied => "Copied to clipboard.",
            CopyState::Failed => "Could not access clipboard. Please copy manually.",
        }
    }
}

/// A copyable credential field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    Username,
    Password,
    AdminUrl,
}

impl CredentialField {
    pub fn value<'a>(&self, credentials: &'a AdminCredentials) -> &'a str {
        match self {
            CredentialField::Username => &credentials.username,
            CredentialField::Password => &credentials.password,
            CredentialField::AdminUrl => &credentials.admin_url,
        }
    }
}

/// Clipboard access failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

/// Capability boundary for copying credentials.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// An open credentials reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialsView {
    pub credentials: AdminCredentials,
    /// Display name of the store, or its short id.
    pub label: String,
    pub copy_state: CopyState,
}

/// Poll loop health as seen by the operator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollStatus {
    pub running: bool,
    pub consecutive_failures: u32,
    pub next_delay: Option<Duration>,
    pub last_success: Option<DateTime<Utc>>,
}

/// Snapshot of everything the dashboard shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub list: StoreList,
    pub selected: Option<StoreDetail>,
    pub credentials: Option<CredentialsView>,
    pub notice: Option<Notice>,
    pub loading: bool,
    pub poll: PollStatus,
}

impl DashboardState {
    /// Merged store list, in server order.
    pub fn stores(&self) -> Vec<Store> {
        self.list.stores()
    }

    pub fn store(&self, id: &str) -> Option<Store> {
        self.list.get(id)
    }

    pub fn counts(&self) -> StoreCounts {
        self.list.counts()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_ref().map(|d| d.id())
    }

    /// The current notice, if it is an error.
    pub fn error_notice(&self) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| n.is_error())
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
