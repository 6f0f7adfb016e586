// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use sd_core::Engine;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parse a display name that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

#[derive(Debug, Parser)]
#[command(name = "storedeck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Operator dashboard for the store provisioning service")]
#[command(
    long_about = "Operator dashboard for the store provisioning service.\n\n\
    List, inspect, create and tear down tenant stores, reveal their admin credentials, \
    or watch lifecycle status live."
)]
pub struct Cli {
    /// Read configuration from <path> instead of the default location
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Base URL of the store service
    #[arg(long = "api-url", global = true, value_name = "url")]
    pub api_url: Option<String>,

    /// Log debug output to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List stores with ready and failed counts
    List {
        /// Output format
        #[arg(short = 'o', long, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Show a store and its event timeline
    Show {
        /// Store id
        id: String,

        /// Output format
        #[arg(short = 'o', long, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Enqueue a new store
    Create {
        /// Display name for the store
        #[arg(short = 'n', long, value_parser = non_empty_string)]
        name: Option<String>,

        /// Storefront engine (woocommerce, medusa)
        #[arg(short = 'e', long, default_value = "woocommerce")]
        engine: Engine,
    },

    /// Request teardown of a store
    Delete {
        /// Store id
        id: String,
    },

    /// Reveal admin credentials of a store
    Creds {
        /// Store id
        id: String,

        /// Output format
        #[arg(short = 'o', long, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Poll the service and print the store list as it changes
    Watch {
        /// Output format
        #[arg(short = 'o', long, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
