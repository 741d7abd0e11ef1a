// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Diagnostic logging to stderr.
//!
//! Stdout carries the tool output, so every log line goes to stderr.
//!
//! ## Filter Priority
//!
//! 1. **`SEQDEX_LOG`** - a bare level (`debug`) applies to seqdex only,
//!    anything with `=`, `:` or `,` is used as a full filter
//! 2. **`RUST_LOG`** - standard tracing filter, used as-is
//! 3. **`-v` count** - `warn`, then `info`, `debug`, `trace` for seqdex

use std::env;
use tracing_subscriber::{fmt, EnvFilter};

type InitError = Box<dyn std::error::Error + Send + Sync>;

/// Install the global subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init(verbosity: u8) -> Result<(), InitError> {
    fmt()
        .with_env_filter(create_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}

/// Initialize logging for tests.
///
/// Safe to call from every test; only the first call installs anything.
pub fn test() {
    let _ = fmt()
        .with_env_filter(create_filter(0))
        .with_test_writer()
        .try_init();
}

fn create_filter(verbosity: u8) -> EnvFilter {
    if let Ok(seqdex_log) = env::var("SEQDEX_LOG") {
        return expand_seqdex_log(&seqdex_log);
    }

    if let Ok(rust_log) = env::var("RUST_LOG") {
        return EnvFilter::new(rust_log);
    }

    EnvFilter::new(format!("warn,seqdex={}", verbosity_level(verbosity)))
}

fn expand_seqdex_log(seqdex_log: &str) -> EnvFilter {
    if seqdex_log.contains('=') || seqdex_log.contains(':') || seqdex_log.contains(',') {
        return EnvFilter::new(seqdex_log);
    }
    EnvFilter::new(format!("warn,seqdex={seqdex_log}"))
}

fn verbosity_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
