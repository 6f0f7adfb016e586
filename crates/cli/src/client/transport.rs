// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transport abstraction for the store service REST contract.
//!
//! Provides a trait-based transport layer that enables:
//! - Real HTTP round trips for production
//! - Scripted mock transports for unit testing
//!
//! One call is one round trip. Nothing here retries; pacing and backoff
//! belong to the synchronization core.

use std::future::Future;
use std::pin::Pin;

use sd_core::{AdminCredentials, CreateStoreRequest, EnqueueReceipt, Store, StoreDetail};

/// Error type for transport operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The service answered with a non-success status.
    ///
    /// `message` is the raw response body, or a synthesized
    /// `Request failed (<code>)` when the body was empty.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not have the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl TransportError {
    /// Builds a status failure from a response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = if body.is_empty() {
            format!("Request failed ({})", status)
        } else {
            body.to_string()
        };
        TransportError::Status { status, message }
    }

    /// HTTP status code, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Boxed future returned by [`Transport`] methods.
pub type TransportFuture<'a, T> = Pin<Box<dyn Future<Output = TransportResult<T>> + Send + 'a>>;

/// Outcome of a successful round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    /// A decoded body.
    Payload(T),
    /// The service answered 204; there was nothing to decode.
    NoContent,
}

impl<T> Reply<T> {
    /// Returns the payload, treating an empty reply as a decode failure.
    pub fn into_payload(self) -> TransportResult<T> {
        match self {
            Reply::Payload(value) => Ok(value),
            Reply::NoContent => Err(TransportError::Decode(
                "expected a response body, got 204 No Content".to_string(),
            )),
        }
    }

    pub fn payload(self) -> Option<T> {
        match self {
            Reply::Payload(value) => Some(value),
            Reply::NoContent => None,
        }
    }
}

/// Transport trait for the store service.
///
/// Methods take `&self` so the poll loop and user intents can share one
/// transport concurrently.
pub trait Transport: Send + Sync {
    /// `GET /stores`
    fn list_stores(&self) -> TransportFuture<'_, Vec<Store>>;

    /// `GET /stores/{id}`
    fn get_store<'a>(&'a self, store_id: &'a str) -> TransportFuture<'a, StoreDetail>;

    /// `GET /stores/{id}/admin-credentials`
    fn get_admin_credentials<'a>(
        &'a self,
        store_id: &'a str,
    ) -> TransportFuture<'a, AdminCredentials>;

    /// `POST /stores`
    fn create_store<'a>(
        &'a self,
        request: &'a CreateStoreRequest,
    ) -> TransportFuture<'a, EnqueueReceipt>;

    /// `DELETE /stores/{id}`; may answer 204.
    fn delete_store<'a>(
        &'a self,
        store_id: &'a str,
    ) -> TransportFuture<'a, Reply<EnqueueReceipt>>;
}
