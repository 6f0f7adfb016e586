// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! storedeck - Operator dashboard for a store provisioning control plane.
//!
//! This crate provides the synchronization core and terminal front end for
//! the `storedeck` CLI. The store service itself is remote and reached only
//! through its REST contract.
//!
//! # Main Components
//!
//! - [`client`] - Transport trait and reqwest-backed [`HttpTransport`](client::HttpTransport)
//! - [`sync`] - [`Dashboard`](sync::Dashboard): owned state, poll loop, intents
//! - [`Config`] - Service URL and poll pacing
//! - [`Error`] - Error types for front-end operations
//!
//! # Embedding
//!
//! ```rust,ignore
//! use storedeck::client::HttpTransport;
//! use storedeck::sync::{Dashboard, PollConfig};
//!
//! let dashboard = Dashboard::mount(HttpTransport::new("http://localhost:8000"), PollConfig::default());
//! let mut rx = dashboard.subscribe();
//! while rx.changed().await.is_ok() {
//!     println!("{} stores", rx.borrow().stores().len());
//! }
//! ```

mod cli;
mod colors;
mod commands;
mod display;

pub mod client;
pub mod config;
pub mod env;
pub mod error;
pub mod sync;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{Config, EnvOverrides};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::debug;

/// Execute a CLI invocation. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        config,
        api_url,
        command,
        ..
    } = cli;

    if let Command::Completion { shell } = command {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "storedeck", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::resolve(
        config.as_deref(),
        api_url.as_deref(),
        &EnvOverrides::from_env(),
    )?;
    debug!(api_base_url = %config.api_base_url, "resolved configuration");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(commands::execute(command, &config))
}
