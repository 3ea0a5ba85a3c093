// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vouch::cli::{Cli, Command};
use vouch::config::defaults;

mod cmd_run;

/// Exit status for config, input, and integration errors.
const EXIT_ERROR: u8 = 2;

fn init_logging() {
    let filter = EnvFilter::try_from_env(defaults::env::LOG)
        .unwrap_or_else(|_| EnvFilter::new(defaults::LOG_LEVEL));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Run(args) => cmd_run::run(&cli, args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("vouch: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
