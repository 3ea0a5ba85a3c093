// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "vouch.toml";

/// Environment variables read by the binary.
pub mod env {
    /// Log filter directives for tracing-subscriber.
    pub const LOG: &str = "VOUCH_LOG";

    /// Path to a config file, same as `--config`.
    pub const CONFIG: &str = "VOUCH_CONFIG";
}

/// Log filter used when `VOUCH_LOG` is unset.
pub const LOG_LEVEL: &str = "warn";

/// Defaults for the `[run]` table.
pub mod run {
    /// Honor per-test parallel opt-in.
    pub const PARALLEL: bool = true;
}
