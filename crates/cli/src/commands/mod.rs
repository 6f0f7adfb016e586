// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod create;
pub mod creds;
pub mod delete;
pub mod list;
pub mod show;
pub mod watch;

use std::io;

use crate::cli::Command;
use crate::client::{HttpTransport, Transport};
use crate::colors;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::sync::Dashboard;

/// Run a command against the configured store service.
pub async fn execute(command: Command, config: &Config) -> Result<()> {
    let dashboard = Dashboard::new(
        HttpTransport::new(config.api_base_url.as_str()),
        config.poll_config(),
    );
    let color = colors::should_colorize();
    let mut out = io::stdout();

    match command {
        Command::List { output } => list::run(&dashboard, output, color, &mut out).await,
        Command::Show { id, output } => show::run(&dashboard, &id, output, color, &mut out).await,
        Command::Create { name, engine } => {
            create::run(&dashboard, engine, name.as_deref(), color, &mut out).await
        }
        Command::Delete { id } => delete::run(&dashboard, &id, &mut out).await,
        Command::Creds { id, output } => creds::run(&dashboard, &id, output, &mut out).await,
        Command::Watch { output } => {
            watch::run(&dashboard, output, color, &mut out, watch::ctrl_c()).await
        }
        // Generated before the runtime starts.
        Command::Completion { .. } => Ok(()),
    }
}

/// The error notice an intent left behind, as a command error.
pub(crate) fn notice_error<T: Transport + 'static>(dashboard: &Dashboard<T>) -> Option<Error> {
    dashboard
        .snapshot()
        .error_notice()
        .map(|notice| Error::Remote {
            title: notice.title.clone(),
            message: notice.message.clone(),
        })
}

/// Fails if the last intent surfaced an error notice.
pub(crate) fn check_notice<T: Transport + 'static>(dashboard: &Dashboard<T>) -> Result<()> {
    match notice_error(dashboard) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
