// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use crate::cli::OutputFormat;
use crate::client::Transport;
use crate::display::format_credentials;
use crate::error::{Error, Result};
use crate::sync::Dashboard;

use super::check_notice;

/// Reveal admin credentials for a listed store, then discard them.
pub async fn run<T: Transport + 'static>(
    dashboard: &Dashboard<T>,
    id: &str,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    dashboard.refresh().await;
    check_notice(dashboard)?;
    let store = dashboard
        .snapshot()
        .store(id)
        .ok_or_else(|| Error::StoreNotFound(id.to_string()))?;

    dashboard.reveal_credentials(&store).await;
    check_notice(dashboard)?;
    let view = dashboard
        .snapshot()
        .credentials
        .ok_or_else(|| Error::StoreNotFound(id.to_string()))?;

    let written = match output {
        OutputFormat::Text => writeln!(out, "{}", format_credentials(&view)),
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&view.credentials)?)
        }
    };
    dashboard.close_credentials();
    written?;
    Ok(())
}

#[cfg(test)]
#[path = "creds_tests.rs"]
mod tests;
