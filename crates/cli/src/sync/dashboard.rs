// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The dashboard session: one owned state container plus its intents.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use sd_core::{CreateStoreRequest, EnqueueReceipt, Engine, Store};

use super::backoff::PollConfig;
use super::error::{SyncError, SyncResult};
use super::poll;
use super::state::{
    Clipboard, CopyState, CredentialField, CredentialsView, DashboardState, Notice, NoticeLevel,
    PollStatus,
};
use crate::client::Transport;

pub(super) const REFRESH_FAILED: &str = "Refresh failed";
const DETAIL_FAILED: &str = "Could not fetch store details";
const CREDENTIALS_FAILED: &str = "Could not fetch credentials";
const CREATE_FAILED: &str = "Create failed";
const DELETE_FAILED: &str = "Delete failed";

/// Handle on the running poll loop.
struct PollHandle {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

/// Shared core behind every [`Dashboard`] clone.
pub(super) struct Inner<T> {
    pub(super) transport: T,
    pub(super) config: PollConfig,
    state: watch::Sender<DashboardState>,
    poll: Mutex<Option<PollHandle>>,
    /// Bumped whenever a loop starts or stops; only the current loop publishes.
    generation: AtomicU64,
    /// Bumped by every select intent; only the latest applies its detail.
    select_seq: AtomicU64,
    notice_seq: AtomicU64,
}

impl<T> Inner<T> {
    fn next_notice(&self, level: NoticeLevel, title: &str, message: String) -> Notice {
        Notice {
            seq: self.notice_seq.fetch_add(1, Ordering::SeqCst) + 1,
            level,
            title: title.to_string(),
            message,
        }
    }

    fn notify(&self, level: NoticeLevel, title: &str, message: impl Into<String>) {
        let notice = self.next_notice(level, title, message.into());
        if notice.is_error() {
            warn!(title = %notice.title, "{}", notice.message);
        }
        self.state.send_modify(|state| state.notice = Some(notice));
    }

    /// Applies `apply` only while `generation` is the current poll loop.
    ///
    /// The check and the write happen under the channel's write lock, so a
    /// stopped or superseded loop can never publish.
    pub(super) fn publish_if_current(
        &self,
        generation: u64,
        apply: impl FnOnce(&mut DashboardState),
    ) -> bool {
        self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            apply(state);
            true
        })
    }

    /// Builds an error notice for a guarded publication.
    pub(super) fn error_notice(&self, title: &str, message: String) -> Notice {
        self.next_notice(NoticeLevel::Error, title, message)
    }

    /// Starts a new poll generation, invalidating any previous loop.
    fn advance_generation(&self, running: bool) -> u64 {
        let mut generation = 0;
        self.state.send_modify(|state| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            state.poll = PollStatus {
                running,
                last_success: state.poll.last_success,
                ..PollStatus::default()
            };
            if !running {
                state.loading = false;
            }
        });
        generation
    }

    fn take_poll(&self) -> Option<PollHandle> {
        self.poll
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl<T> Drop for Inner<T> {
    fn drop(&mut self) {
        let slot = self.poll.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = slot.take() {
            debug!("dashboard dropped while polling");
            handle.cancel.cancel();
        }
    }
}

/// Owned state container for one mounted dashboard session.
///
/// Cheap to clone; clones share the same state, transport and poll loop.
/// Dropping the last clone stops the poll loop.
/// The Presentation Layer reads via [`Dashboard::snapshot`] or
/// [`Dashboard::subscribe`] and writes only through intents.
pub struct Dashboard<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Dashboard<T> {
    fn clone(&self) -> Self {
        Dashboard {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Transport + 'static> Dashboard<T> {
    /// Creates an idle dashboard. No request is issued until an intent runs.
    pub fn new(transport: T, config: PollConfig) -> Self {
        let (state, _) = watch::channel(DashboardState::default());
        Dashboard {
            inner: Arc::new(Inner {
                transport,
                config,
                state,
                poll: Mutex::new(None),
                generation: AtomicU64::new(0),
                select_seq: AtomicU64::new(0),
                notice_seq: AtomicU64::new(0),
            }),
        }
    }

    /// Creates a dashboard and starts its poll loop.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(transport: T, config: PollConfig) -> Self {
        let dashboard = Self::new(transport, config);
        info!("dashboard mounted");
        dashboard.start_polling();
        dashboard
    }

    pub fn snapshot(&self) -> DashboardState {
        self.inner.state.borrow().clone()
    }

    /// Receives every published state change.
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.inner.state.subscribe()
    }

    /// Starts the poll loop, cancelling any loop already running.
    pub fn start_polling(&self) {
        let mut slot = self
            .inner
            .poll
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = slot.take() {
            debug!("replacing running poll loop");
            previous.cancel.cancel();
        }

        let generation = self.inner.advance_generation(true);
        let cancel = CancellationToken::new();
        let task = tokio::spawn(poll::run(
            Arc::downgrade(&self.inner),
            generation,
            cancel.clone(),
        ));
        info!(generation, "poll loop started");
        *slot = Some(PollHandle { cancel, task });
    }

    /// Stops the poll loop. Nothing it has in flight will be published.
    pub fn stop_polling(&self) {
        self.stop_loop();
    }

    /// Tears the session down, waiting for the poll loop to exit.
    pub async fn unmount(self) {
        if let Some(handle) = self.stop_loop() {
            if let Err(e) = handle.task.await {
                debug!("poll loop ended abnormally: {}", e);
            }
        }
        info!("dashboard unmounted");
    }

    fn stop_loop(&self) -> Option<PollHandle> {
        let handle = self.inner.take_poll()?;
        self.inner.advance_generation(false);
        handle.cancel.cancel();
        info!("poll loop stopped");
        Some(handle)
    }

    /// Manual refresh of the store list. Failures raise a notice.
    pub async fn refresh(&self) {
        self.inner.state.send_modify(|state| state.loading = true);
        let result = self.inner.transport.list_stores().await;
        match result {
            Ok(stores) => self.inner.state.send_modify(|state| {
                state.list.replace(stores);
                state.loading = false;
            }),
            Err(e) => {
                self.inner.state.send_modify(|state| state.loading = false);
                self.inner
                    .notify(NoticeLevel::Error, REFRESH_FAILED, e.to_string());
            }
        }
    }

    /// Enqueues a new store, then refreshes the list from the service.
    ///
    /// No placeholder is added locally. Failures raise a notice and are
    /// also returned.
    pub async fn create_store(
        &self,
        engine: Engine,
        display_name: Option<&str>,
    ) -> SyncResult<EnqueueReceipt> {
        if !engine.is_submittable() {
            let err = SyncError::EngineNotSubmittable(engine);
            self.inner
                .notify(NoticeLevel::Error, CREATE_FAILED, err.to_string());
            return Err(err);
        }

        let request = CreateStoreRequest::new(engine, display_name);
        match self.inner.transport.create_store(&request).await {
            Ok(receipt) => {
                info!(store_id = %receipt.store_id, "store queued");
                self.inner.notify(
                    NoticeLevel::Info,
                    "Store queued",
                    "Provisioning job has been enqueued.",
                );
                self.refresh().await;
                Ok(receipt)
            }
            Err(e) => {
                self.inner
                    .notify(NoticeLevel::Error, CREATE_FAILED, e.to_string());
                Err(e.into())
            }
        }
    }

    /// Requests teardown of a store.
    ///
    /// On success the list entry shows `DELETING` until the next list read,
    /// and an open detail for the same store is refetched. Failures raise a
    /// notice only.
    pub async fn delete_store(&self, store_id: &str) {
        let reply = match self.inner.transport.delete_store(store_id).await {
            Ok(reply) => reply,
            Err(e) => {
                self.inner
                    .notify(NoticeLevel::Error, DELETE_FAILED, e.to_string());
                return;
            }
        };

        let receipt_namespace = reply.payload().and_then(|r| r.namespace);
        let mut namespace = None;
        let mut was_selected = false;
        self.inner.state.send_modify(|state| {
            state.list.mark_deleting(store_id);
            namespace = state.store(store_id).map(|s| s.namespace);
            was_selected = state.selected_id() == Some(store_id);
        });
        let namespace = namespace
            .or(receipt_namespace)
            .unwrap_or_else(|| store_id.to_string());
        info!(store_id, "delete queued");
        self.inner.notify(
            NoticeLevel::Info,
            "Delete queued",
            format!("{} teardown requested.", namespace),
        );

        if was_selected {
            self.refetch_detail(store_id).await;
        }
    }

    /// Fetches a store's detail and makes it the selected one.
    ///
    /// A failure keeps whatever was selected before. When selects overlap,
    /// the latest intent wins regardless of response order.
    pub async fn select_store(&self, store_id: &str) {
        let seq = self.inner.select_seq.fetch_add(1, Ordering::SeqCst) + 1;
        match self.inner.transport.get_store(store_id).await {
            Ok(detail) => {
                let select_seq = &self.inner.select_seq;
                self.inner.state.send_if_modified(|state| {
                    if select_seq.load(Ordering::SeqCst) != seq {
                        debug!(store_id, "discarding superseded detail");
                        return false;
                    }
                    state.selected = Some(detail);
                    true
                });
            }
            Err(e) => self
                .inner
                .notify(NoticeLevel::Error, DETAIL_FAILED, e.to_string()),
        }
    }

    /// Refetch after delete; applies only if the store is still selected.
    async fn refetch_detail(&self, store_id: &str) {
        let seq = self.inner.select_seq.load(Ordering::SeqCst);
        match self.inner.transport.get_store(store_id).await {
            Ok(detail) => {
                let select_seq = &self.inner.select_seq;
                self.inner.state.send_if_modified(|state| {
                    if select_seq.load(Ordering::SeqCst) != seq
                        || state.selected_id() != Some(store_id)
                    {
                        return false;
                    }
                    state.selected = Some(detail);
                    true
                });
            }
            Err(e) => self
                .inner
                .notify(NoticeLevel::Error, DETAIL_FAILED, e.to_string()),
        }
    }

    /// Clears the selected detail.
    pub fn clear_selection(&self) {
        self.inner.select_seq.fetch_add(1, Ordering::SeqCst);
        self.inner.state.send_if_modified(|state| {
            let had = state.selected.is_some();
            state.selected = None;
            had
        });
    }

    /// Fetches fresh admin credentials for `store` and opens the reveal view.
    ///
    /// A failure leaves any open reveal untouched and raises a notice.
    pub async fn reveal_credentials(&self, store: &Store) {
        match self.inner.transport.get_admin_credentials(&store.id).await {
            Ok(credentials) => {
                let view = CredentialsView {
                    credentials,
                    label: store.label(),
                    copy_state: CopyState::Idle,
                };
                self.inner
                    .state
                    .send_modify(|state| state.credentials = Some(view));
            }
            Err(e) => self
                .inner
                .notify(NoticeLevel::Error, CREDENTIALS_FAILED, e.to_string()),
        }
    }

    /// Closes the reveal view and discards the credentials.
    pub fn close_credentials(&self) {
        self.inner.state.send_if_modified(|state| {
            let had = state.credentials.is_some();
            state.credentials = None;
            had
        });
    }

    /// Copies one field of the open credentials.
    ///
    /// Clipboard failures only change the view's copy state. Returns
    /// [`CopyState::Idle`] when no reveal is open.
    pub fn copy_credential(&self, field: CredentialField, clipboard: &dyn Clipboard) -> CopyState {
        let text = match &self.inner.state.borrow().credentials {
            Some(view) => field.value(&view.credentials).to_string(),
            None => return CopyState::Idle,
        };
        let copy_state = match clipboard.write_text(&text) {
            Ok(()) => CopyState::Copied,
            Err(e) => {
                debug!("copy failed: {}", e);
                CopyState::Failed
            }
        };
        self.inner.state.send_if_modified(|state| match &mut state.credentials {
            Some(view) => {
                view.copy_state = copy_state;
                true
            }
            None => false,
        });
        copy_state
    }

    /// Dismisses the current notice.
    pub fn dismiss_notice(&self) {
        self.inner.state.send_if_modified(|state| state.notice.take().is_some());
    }
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;
