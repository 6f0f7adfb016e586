// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use crate::client::Transport;
use crate::display::format_notice;
use crate::error::Result;
use crate::sync::Dashboard;

use super::check_notice;

pub async fn run<T: Transport + 'static>(
    dashboard: &Dashboard<T>,
    id: &str,
    out: &mut impl Write,
) -> Result<()> {
    dashboard.delete_store(id).await;
    check_notice(dashboard)?;

    if let Some(notice) = dashboard.snapshot().notice {
        writeln!(out, "{}", format_notice(&notice))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "delete_tests.rs"]
mod tests;
