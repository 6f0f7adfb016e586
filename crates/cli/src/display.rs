// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering of dashboard state.
//!
//! Timestamps are rendered in the local time zone.

use chrono::{DateTime, Local, Utc};

use sd_core::{Store, StoreCounts, StoreDetail};

use crate::colors;
use crate::sync::{CredentialsView, Notice, PollStatus};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a wire timestamp in the local time zone.
pub fn format_time(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format(TIME_FORMAT).to_string()
}

fn status_cell(store: &Store, color: bool) -> String {
    let text = store.status.as_str();
    if color {
        colors::badge(store.status.badge(), text)
    } else {
        text.to_string()
    }
}

/// Format the summary line: `Total 3  Ready 1  Failed 0`
pub fn format_counts(counts: &StoreCounts) -> String {
    format!(
        "Total {}  Ready {}  Failed {}",
        counts.total, counts.ready, counts.failed
    )
}

/// Format a store for list output
///
/// Format: `- [STATUS] label (engine) id url`
pub fn format_store_line(store: &Store, color: bool) -> String {
    let url = store.url.as_deref().unwrap_or("-");
    format!(
        "- [{}] {} ({}) {} {}",
        status_cell(store, color),
        store.label(),
        store.engine,
        store.id,
        url
    )
}

/// Format the store list with its counts.
pub fn format_store_list(stores: &[Store], counts: &StoreCounts, color: bool) -> String {
    let mut output = vec![format_counts(counts)];
    if stores.is_empty() {
        output.push("No stores yet.".to_string());
    }
    output.extend(stores.iter().map(|s| format_store_line(s, color)));
    output.join("\n")
}

/// Format a store and its event timeline for the show command.
pub fn format_store_detail(detail: &StoreDetail, color: bool) -> String {
    let store = &detail.store;
    let mut output = Vec::new();

    output.push(format!("[{}] {}", status_cell(store, color), store.id));
    output.push(format!("Name: {}", store.label()));
    output.push(format!("Engine: {}", store.engine));
    output.push(format!("Namespace: {}", store.namespace));
    output.push(format!("Release: {}", store.release_name));
    if let Some(url) = &store.url {
        output.push(format!("URL: {}", url));
    }
    if let Some(admin_url) = store.admin_url() {
        output.push(format!("Admin: {}", admin_url));
    }
    if let Some(error) = &store.last_error {
        output.push(format!("Last error: {}", error));
    }
    output.push(format!("Created: {}", format_time(&store.created_at)));
    output.push(format!("Updated: {}", format_time(&store.updated_at)));

    output.push(String::new());
    output.push("Events:".to_string());
    if detail.events.is_empty() {
        output.push("  (none)".to_string());
    }
    for event in &detail.events {
        let at = format_time(&event.created_at);
        let at = if color { colors::context(&at) } else { at };
        output.push(format!("  {}  {}  {}", at, event.event_type, event.message));
    }

    output.join("\n")
}

/// Format an open credentials reveal.
pub fn format_credentials(view: &CredentialsView) -> String {
    let creds = &view.credentials;
    [
        format!("Admin credentials for {}", view.label),
        format!("Username: {}", creds.username),
        format!("Password: {}", creds.password),
        format!("Admin URL: {}", creds.admin_url),
        view.copy_state.helper_text().to_string(),
    ]
    .join("\n")
}

/// Format a notice as `title: message`.
pub fn format_notice(notice: &Notice) -> String {
    format!("{}: {}", notice.title, notice.message)
}

/// Format poll health for the watch header.
pub fn format_poll_status(poll: &PollStatus) -> String {
    let last = poll
        .last_success
        .as_ref()
        .map(format_time)
        .unwrap_or_else(|| "never".to_string());
    let mut line = format!("Last sync: {}", last);
    if poll.consecutive_failures > 0 {
        line.push_str(&format!(
            " ({} failed attempts, retrying in {:.1}s)",
            poll.consecutive_failures,
            poll.next_delay.unwrap_or_default().as_secs_f64()
        ));
    }
    line
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
