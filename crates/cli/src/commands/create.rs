// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use sd_core::Engine;

use crate::client::Transport;
use crate::display::format_store_line;
use crate::error::Result;
use crate::sync::Dashboard;

use super::notice_error;

pub async fn run<T: Transport + 'static>(
    dashboard: &Dashboard<T>,
    engine: Engine,
    name: Option<&str>,
    color: bool,
    out: &mut impl Write,
) -> Result<()> {
    let receipt = match dashboard.create_store(engine, name).await {
        Ok(receipt) => receipt,
        Err(e) => return Err(notice_error(dashboard).unwrap_or_else(|| e.into())),
    };

    writeln!(out, "Store queued: {}", receipt.store_id)?;
    // The refresh may not list the store yet.
    if let Some(store) = dashboard.snapshot().store(&receipt.store_id) {
        writeln!(out, "{}", format_store_line(&store, color))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "create_tests.rs"]
mod tests;
