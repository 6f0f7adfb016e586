// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use crate::cli::OutputFormat;
use crate::client::Transport;
use crate::display::format_store_detail;
use crate::error::{Error, Result};
use crate::sync::Dashboard;

use super::check_notice;

pub async fn run<T: Transport + 'static>(
    dashboard: &Dashboard<T>,
    id: &str,
    output: OutputFormat,
    color: bool,
    out: &mut impl Write,
) -> Result<()> {
    dashboard.select_store(id).await;
    check_notice(dashboard)?;

    let detail = dashboard
        .snapshot()
        .selected
        .ok_or_else(|| Error::StoreNotFound(id.to_string()))?;

    match output {
        OutputFormat::Text => writeln!(out, "{}", format_store_detail(&detail, color))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&detail)?)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
