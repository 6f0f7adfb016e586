// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use sd_core::Engine;

use crate::client::TransportError;

/// Error type for synchronization core intents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    /// The store service call failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The engine exists in the data model but cannot be submitted.
    #[error("engine '{0}' is not available for new stores\n  hint: use --engine woocommerce")]
    EngineNotSubmittable(Engine),
}

/// Result type for synchronization core intents.
pub type SyncResult<T> = Result<T, SyncError>;
