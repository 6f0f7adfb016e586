// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for status badges.
//!
//! Respects `NO_COLOR` and only colors a TTY.

use std::io::IsTerminal;

use sd_core::StatusBadge;

use crate::env;

/// ANSI 256-color codes per badge bucket.
pub mod codes {
    pub const SUCCESS: u8 = 71;
    pub const DANGER: u8 = 167;
    pub const WARNING: u8 = 179;
    pub const INFO: u8 = 74;
    /// Timestamps and secondary text.
    pub const CONTEXT: u8 = 245;
}

const RESET: &str = "\x1b[0m";

/// Check if stdout should be colorized.
pub fn should_colorize() -> bool {
    !env::no_color() && std::io::stdout().is_terminal()
}

fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

fn paint(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, RESET)
}

/// Apply the badge color to text. The default bucket stays plain.
pub fn badge(badge: StatusBadge, text: &str) -> String {
    match badge {
        StatusBadge::Success => paint(codes::SUCCESS, text),
        StatusBadge::Danger => paint(codes::DANGER, text),
        StatusBadge::Warning => paint(codes::WARNING, text),
        StatusBadge::Info => paint(codes::INFO, text),
        StatusBadge::Default => text.to_string(),
    }
}

/// Apply context color (timestamps, hints) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
