// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Background poll loop with adaptive backoff.
//!
//! One request at a time: request, publish, sleep, repeat. The first
//! attempt is the surfaced initial refresh; later failures are silent and
//! only slow the loop down. The last good list stays visible throughout.
//!
//! The loop holds the dashboard weakly and only upgrades it for one
//! attempt at a time, so dropping every `Dashboard` handle ends it.

use std::sync::Weak;

use chrono::Utc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::backoff::Backoff;
use super::dashboard::{Inner, REFRESH_FAILED};
use crate::client::Transport;

pub(super) async fn run<T: Transport>(
    dashboard: Weak<Inner<T>>,
    generation: u64,
    cancel: CancellationToken,
) {
    let Some(config) = dashboard.upgrade().map(|inner| inner.config) else {
        return;
    };
    let mut backoff = Backoff::new(config);
    let mut initial = true;

    loop {
        if cancel.is_cancelled() {
            return;
        }
        let Some(inner) = dashboard.upgrade() else {
            debug!(generation, "dashboard dropped, poll loop exiting");
            return;
        };

        if initial {
            inner.publish_if_current(generation, |state| state.loading = true);
        }

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => return,
            result = inner.transport.list_stores() => result,
        };

        let (delay, published) = match result {
            Ok(stores) => {
                let delay = backoff.on_success();
                let published = inner.publish_if_current(generation, |state| {
                    state.list.replace(stores);
                    state.poll.consecutive_failures = 0;
                    state.poll.next_delay = Some(delay);
                    state.poll.last_success = Some(Utc::now());
                    if initial {
                        state.loading = false;
                    }
                });
                (delay, published)
            }
            Err(e) => {
                let delay = backoff.on_failure();
                let failures = backoff.consecutive_failures();
                let notice = initial.then(|| inner.error_notice(REFRESH_FAILED, e.to_string()));
                let published = inner.publish_if_current(generation, |state| {
                    state.poll.consecutive_failures = failures;
                    state.poll.next_delay = Some(delay);
                    if let Some(notice) = notice {
                        state.loading = false;
                        state.notice = Some(notice);
                    }
                });
                if published && initial {
                    warn!(title = REFRESH_FAILED, status = ?e.status(), "{}", e);
                } else {
                    debug!(
                        failures,
                        ?delay,
                        next = ?backoff.peek(),
                        status = ?e.status(),
                        "background poll failed: {}",
                        e
                    );
                }
                (delay, published)
            }
        };
        initial = false;

        if !published {
            debug!(generation, "poll loop superseded");
            return;
        }
        drop(inner);

        tokio::select! {
            biased;
            _ = cancel.cancelled() => return,
            _ = tokio::time::sleep(delay) => {}
        }
    }
}
