// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers: fixtures and a scripted mock transport.

#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{TimeZone, Utc};
use tokio::time::Instant;

use sd_core::{
    AdminCredentials, CreateStoreRequest, EnqueueReceipt, Engine, Store, StoreDetail, StoreEvent,
    StoreStatus,
};

use super::transport::{Reply, Transport, TransportError, TransportFuture, TransportResult};

/// Create a store with the given id and status.
pub fn make_store(id: &str, status: StoreStatus) -> Store {
    let at = Utc.with_ymd_and_hms(2026, 2, 12, 10, 0, 0).unwrap();
    Store {
        id: id.to_string(),
        engine: Engine::WooCommerce,
        display_name: None,
        namespace: format!("store-{}", id),
        release_name: format!("store-{}", id),
        status,
        url: None,
        last_error: None,
        created_at: at,
        updated_at: at,
    }
}

/// Create a READY store with a public URL.
pub fn make_ready_store(id: &str) -> Store {
    let mut store = make_store(id, StoreStatus::Ready);
    store.url = Some(format!("http://{}.127.0.0.1.nip.io", id));
    store
}

pub fn make_event(id: i64, event_type: &str) -> StoreEvent {
    StoreEvent {
        id,
        event_type: event_type.to_string(),
        message: format!("{} event", event_type),
        created_at: Utc.with_ymd_and_hms(2026, 2, 12, 10, 0, 0).unwrap()
            + chrono::Duration::seconds(id),
    }
}

pub fn make_detail(store: Store, events: Vec<StoreEvent>) -> StoreDetail {
    StoreDetail { store, events }
}

pub fn make_credentials(store_id: &str) -> AdminCredentials {
    AdminCredentials {
        store_id: store_id.to_string(),
        username: "admin".to_string(),
        password: format!("pw-{}", store_id),
        admin_url: format!("http://{}.127.0.0.1.nip.io/wp-admin", store_id),
    }
}

pub fn make_receipt(store_id: &str) -> EnqueueReceipt {
    EnqueueReceipt {
        store_id: store_id.to_string(),
        status: None,
        namespace: None,
        queued_job_id: None,
    }
}

/// A status failure as the service would produce it.
pub fn status_error(status: u16, body: &str) -> TransportError {
    TransportError::from_status(status, body)
}

/// A recorded transport call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Get(String),
    Credentials(String),
    Create(CreateStoreRequest),
    Delete(String),
}

/// One scripted response, optionally delayed.
struct Scripted<T> {
    result: TransportResult<T>,
    delay: Option<Duration>,
}

#[derive(Default)]
struct Scripts {
    list: VecDeque<Scripted<Vec<Store>>>,
    get: VecDeque<Scripted<StoreDetail>>,
    credentials: VecDeque<Scripted<AdminCredentials>>,
    create: VecDeque<Scripted<EnqueueReceipt>>,
    delete: VecDeque<Scripted<Reply<EnqueueReceipt>>>,
    calls: Vec<(Call, Instant)>,
}

/// Mock transport for testing without a real service.
///
/// Responses are consumed in FIFO order per operation. An operation with
/// nothing scripted fails with a network error.
#[derive(Clone, Default)]
pub struct MockTransport {
    scripts: Arc<Mutex<Scripts>>,
}

fn unscripted<T>(op: &str) -> TransportResult<T> {
    Err(TransportError::Network(format!("no scripted response for {}", op)))
}

async fn play<T>(scripted: Option<Scripted<T>>, op: &str) -> TransportResult<T> {
    match scripted {
        Some(Scripted { result, delay }) => {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            result
        }
        None => unscripted(op),
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_list(&self, result: TransportResult<Vec<Store>>) {
        self.push_list_delayed(result, None);
    }

    pub fn push_list_delayed(
        &self,
        result: TransportResult<Vec<Store>>,
        delay: Option<Duration>,
    ) {
        let mut scripts = self.scripts.lock().unwrap();
        scripts.list.push_back(Scripted { result, delay });
    }

    pub fn push_get(&self, result: TransportResult<StoreDetail>) {
        self.push_get_delayed(result, None);
    }

    pub fn push_get_delayed(
        &self,
        result: TransportResult<StoreDetail>,
        delay: Option<Duration>,
    ) {
        let mut scripts = self.scripts.lock().unwrap();
        scripts.get.push_back(Scripted { result, delay });
    }

    pub fn push_credentials(&self, result: TransportResult<AdminCredentials>) {
        let mut scripts = self.scripts.lock().unwrap();
        scripts.credentials.push_back(Scripted {
            result,
            delay: None,
        });
    }

    pub fn push_create(&self, result: TransportResult<EnqueueReceipt>) {
        let mut scripts = self.scripts.lock().unwrap();
        scripts.create.push_back(Scripted {
            result,
            delay: None,
        });
    }

    pub fn push_delete(&self, result: TransportResult<Reply<EnqueueReceipt>>) {
        let mut scripts = self.scripts.lock().unwrap();
        scripts.delete.push_back(Scripted {
            result,
            delay: None,
        });
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        let scripts = self.scripts.lock().unwrap();
        scripts.calls.iter().map(|(call, _)| call.clone()).collect()
    }

    /// Instants at which `list_stores` was called.
    pub fn list_instants(&self) -> Vec<Instant> {
        let scripts = self.scripts.lock().unwrap();
        scripts
            .calls
            .iter()
            .filter(|(call, _)| *call == Call::List)
            .map(|(_, at)| *at)
            .collect()
    }

    pub fn list_calls(&self) -> usize {
        self.list_instants().len()
    }

    fn record(&self, call: Call) {
        let mut scripts = self.scripts.lock().unwrap();
        scripts.calls.push((call, Instant::now()));
    }
}

impl Transport for MockTransport {
    fn list_stores(&self) -> TransportFuture<'_, Vec<Store>> {
        self.record(Call::List);
        let next = self.scripts.lock().unwrap().list.pop_front();
        Box::pin(play(next, "list"))
    }

    fn get_store<'a>(&'a self, store_id: &'a str) -> TransportFuture<'a, StoreDetail> {
        self.record(Call::Get(store_id.to_string()));
        let next = self.scripts.lock().unwrap().get.pop_front();
        Box::pin(play(next, "get"))
    }

    fn get_admin_credentials<'a>(
        &'a self,
        store_id: &'a str,
    ) -> TransportFuture<'a, AdminCredentials> {
        self.record(Call::Credentials(store_id.to_string()));
        let next = self.scripts.lock().unwrap().credentials.pop_front();
        Box::pin(play(next, "credentials"))
    }

    fn create_store<'a>(
        &'a self,
        request: &'a CreateStoreRequest,
    ) -> TransportFuture<'a, EnqueueReceipt> {
        self.record(Call::Create(request.clone()));
        let next = self.scripts.lock().unwrap().create.pop_front();
        Box::pin(play(next, "create"))
    }

    fn delete_store<'a>(
        &'a self,
        store_id: &'a str,
    ) -> TransportFuture<'a, Reply<EnqueueReceipt>> {
        self.record(Call::Delete(store_id.to_string()));
        let next = self.scripts.lock().unwrap().delete.pop_front();
        Box::pin(play(next, "delete"))
    }
}
