// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transport client for the store provisioning service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Dashboard  │────►│  Transport  │────►│    Store    │
//! │   (sync)    │◄────│   (trait)   │◄────│   Service   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! Non-2xx answers become [`TransportError::Status`] carrying the response
//! body; 204 becomes [`Reply::NoContent`]; malformed bodies become
//! [`TransportError::Decode`].

mod http;
mod transport;

pub use http::{HttpTransport, DEFAULT_BASE_URL};
pub use transport::{Reply, Transport, TransportError, TransportFuture, TransportResult};

#[cfg(test)]
pub(crate) mod test_helpers;
