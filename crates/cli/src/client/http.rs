// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP transport implementation using reqwest.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use sd_core::{AdminCredentials, CreateStoreRequest, EnqueueReceipt, Store, StoreDetail};

use super::transport::{Reply, Transport, TransportError, TransportFuture, TransportResult};

/// Default location of the store service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// An HTTP-based implementation of [`Transport`].
///
/// Operates against a store service speaking the JSON REST contract.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a new HTTP transport pointing to the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a new HTTP transport with a custom reqwest client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Joins `segments` onto the base URL, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> TransportResult<Url> {
        let invalid = || TransportError::Network(format!("invalid base url: {}", self.base_url));
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|()| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> TransportResult<RequestBuilder> {
        let url = self.url(segments)?;
        debug!(%method, path = url.path(), "store service request");
        Ok(self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json"))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> TransportResult<Reply<T>> {
        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "store service returned failure");
            return Err(TransportError::from_status(status.as_u16(), &body));
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(Reply::NoContent);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        serde_json::from_slice(&bytes)
            .map(Reply::Payload)
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}

impl Transport for HttpTransport {
    fn list_stores(&self) -> TransportFuture<'_, Vec<Store>> {
        Box::pin(async move {
            self.send(self.request(Method::GET, &["stores"])?)
                .await?
                .into_payload()
        })
    }

    fn get_store<'a>(&'a self, store_id: &'a str) -> TransportFuture<'a, StoreDetail> {
        Box::pin(async move {
            self.send(self.request(Method::GET, &["stores", store_id])?)
                .await?
                .into_payload()
        })
    }

    fn get_admin_credentials<'a>(
        &'a self,
        store_id: &'a str,
    ) -> TransportFuture<'a, AdminCredentials> {
        Box::pin(async move {
            let segments = ["stores", store_id, "admin-credentials"];
            self.send(self.request(Method::GET, &segments)?)
                .await?
                .into_payload()
        })
    }

    fn create_store<'a>(
        &'a self,
        request: &'a CreateStoreRequest,
    ) -> TransportFuture<'a, EnqueueReceipt> {
        Box::pin(async move {
            self.send(self.request(Method::POST, &["stores"])?.json(request))
                .await?
                .into_payload()
        })
    }

    fn delete_store<'a>(
        &'a self,
        store_id: &'a str,
    ) -> TransportFuture<'a, Reply<EnqueueReceipt>> {
        Box::pin(async move {
            self.send(self.request(Method::DELETE, &["stores", store_id])?)
                .await
        })
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
