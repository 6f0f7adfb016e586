// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sd-core: Shared data model for the storedeck operator dashboard
//!
//! This crate provides the wire types of the store provisioning service
//! (stores, lifecycle statuses, events, credentials) used by the storedeck
//! client and synchronization core. It performs no I/O.

pub mod error;
pub mod store;
pub mod timestamp;
pub mod wire;

pub use error::{Error, Result};
pub use store::{Engine, StatusBadge, Store, StoreCounts, StoreDetail, StoreEvent, StoreStatus};
pub use wire::{AdminCredentials, CreateStoreRequest, EnqueueReceipt};
