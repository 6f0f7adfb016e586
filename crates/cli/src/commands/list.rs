// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use serde::Serialize;

use sd_core::{Store, StoreCounts};

use crate::cli::OutputFormat;
use crate::client::Transport;
use crate::display::format_store_list;
use crate::error::Result;
use crate::sync::Dashboard;

use super::check_notice;

/// JSON output structure for the list and watch commands.
#[derive(Serialize)]
pub(crate) struct ListOutputJson<'a> {
    pub counts: StoreCounts,
    pub stores: &'a [Store],
}

pub async fn run<T: Transport + 'static>(
    dashboard: &Dashboard<T>,
    output: OutputFormat,
    color: bool,
    out: &mut impl Write,
) -> Result<()> {
    dashboard.refresh().await;
    check_notice(dashboard)?;

    let state = dashboard.snapshot();
    let stores = state.stores();
    let counts = state.counts();

    match output {
        OutputFormat::Text => writeln!(out, "{}", format_store_list(&stores, &counts, color))?,
        OutputFormat::Json => {
            let json = ListOutputJson {
                counts,
                stores: &stores,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
