// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn test_global_flags_default() {
    let cli = parse(&["storedeck", "list"]).unwrap();
    assert!(cli.config.is_none());
    assert!(cli.api_url.is_none());
    assert!(!cli.verbose);
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = parse(&[
        "storedeck",
        "list",
        "--api-url",
        "http://stores.internal",
        "--config",
        "/tmp/sd.toml",
        "-v",
    ])
    .unwrap();
    assert_eq!(cli.api_url.as_deref(), Some("http://stores.internal"));
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/sd.toml")));
    assert!(cli.verbose);
}

#[test]
fn test_version_flag() {
    let err = parse(&["storedeck", "--version"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
}

#[test]
fn test_command_is_required() {
    assert!(parse(&["storedeck"]).is_err());
}
