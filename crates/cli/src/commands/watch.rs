// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Live view of the store list, driven by the background poll loop.

use std::future::Future;
use std::io::Write;

use tracing::debug;

use sd_core::Store;

use crate::cli::OutputFormat;
use crate::client::Transport;
use crate::display::{format_notice, format_poll_status, format_store_list};
use crate::error::Result;
use crate::sync::{Dashboard, DashboardState, Notice};

use super::list::ListOutputJson;

/// What a rendered frame shows; unchanged frames are not printed again.
#[derive(PartialEq)]
struct Frame {
    stores: Vec<Store>,
    notice: Option<Notice>,
    failures: u32,
}

impl Frame {
    fn of(state: &DashboardState) -> Self {
        Frame {
            stores: state.stores(),
            notice: state.notice.clone(),
            failures: state.poll.consecutive_failures,
        }
    }
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
pub async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        debug!("cannot listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Poll until `shutdown` resolves, printing a frame per visible change.
pub async fn run<T, F>(
    dashboard: &Dashboard<T>,
    output: OutputFormat,
    color: bool,
    out: &mut impl Write,
    shutdown: F,
) -> Result<()>
where
    T: Transport + 'static,
    F: Future<Output = ()>,
{
    let mut rx = dashboard.subscribe();
    dashboard.start_polling();
    tokio::pin!(shutdown);

    let mut last: Option<Frame> = None;
    let result = loop {
        tokio::select! {
            _ = &mut shutdown => break Ok(()),
            changed = rx.changed() => {
                if changed.is_err() {
                    break Ok(());
                }
            }
        }

        let state = rx.borrow_and_update().clone();
        // Nothing to show until the first attempt settles.
        if state.loading || state.poll.next_delay.is_none() {
            continue;
        }
        let frame = Frame::of(&state);
        if last.as_ref() == Some(&frame) {
            continue;
        }
        if let Err(e) = render(&state, output, color, out) {
            break Err(e);
        }
        last = Some(frame);
    };

    dashboard.clone().unmount().await;
    result
}

fn render(
    state: &DashboardState,
    output: OutputFormat,
    color: bool,
    out: &mut impl Write,
) -> Result<()> {
    let stores = state.stores();
    let counts = state.counts();
    match output {
        OutputFormat::Text => {
            writeln!(out, "{}", format_poll_status(&state.poll))?;
            if let Some(notice) = &state.notice {
                writeln!(out, "! {}", format_notice(notice))?;
            }
            writeln!(out, "{}", format_store_list(&stores, &counts, color))?;
            writeln!(out)?;
        }
        OutputFormat::Json => {
            let json = ListOutputJson {
                counts,
                stores: &stores,
            };
            writeln!(out, "{}", serde_json::to_string(&json)?)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "watch_tests.rs"]
mod tests;
