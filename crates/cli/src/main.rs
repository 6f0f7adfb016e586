// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use storedeck::env::{self, vars};
use storedeck::Cli;
use tracing_subscriber::EnvFilter;

fn setup_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(vars::RUST_LOG).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!env::no_color())
        .init();
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    if let Err(e) = storedeck::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
