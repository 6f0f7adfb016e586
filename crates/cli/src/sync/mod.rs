// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Synchronization core for the operator dashboard.
//!
//! Keeps a local view of store lifecycle state consistent with the store
//! service under background polling, user intents and optimistic updates.
//!
//! # Architecture
//!
//! ```text
//!  intents ──►┌─────────────┐     ┌─────────────┐
//!             │  Dashboard  │────►│  Transport  │──► store service
//!  snapshot ◄─│   (state)   │◄────│   (trait)   │
//!             └─────────────┘     └─────────────┘
//!                    ▲
//!                    │ guarded publish
//!             ┌─────────────┐
//!             │  Poll loop  │  (adaptive backoff)
//!             └─────────────┘
//! ```
//!
//! # Precedence
//!
//! - A list read (poll or refresh) is authoritative and clears the
//!   optimistic `DELETING` overlay.
//! - A stopped or replaced poll loop never publishes again.
//! - The latest select intent owns the selected detail.

mod backoff;
mod dashboard;
mod error;
mod poll;
mod state;

pub use backoff::{Backoff, PollConfig, DEFAULT_BASE_INTERVAL, DEFAULT_MAX_INTERVAL};
pub use dashboard::Dashboard;
pub use error::{SyncError, SyncResult};
pub use state::{
    Clipboard, ClipboardError, CopyState, CredentialField, CredentialsView, DashboardState, Notice,
    NoticeLevel, PollStatus, StoreList,
};
