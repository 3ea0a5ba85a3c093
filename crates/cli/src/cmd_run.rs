// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `vouch run` command implementation.

use anyhow::Context;
use termcolor::StandardStream;

use vouch::cli::{Cli, RunArgs};
use vouch::runner::TestRunner;
use vouch::{config, declarative, report};

/// Run the listed expectation files. Returns the process exit status.
pub fn run(cli: &Cli, args: &RunArgs) -> anyhow::Result<u8> {
    let cwd = std::env::current_dir()?;
    let config =
        config::resolve(cli.config.as_deref(), &cwd).context("failed to load configuration")?;

    let suite = declarative::load_suite(args.files.as_slice())?;
    let runner = TestRunner::new(config.run.runner(args.serial, args.filter.as_deref()));
    let results = runner.run(&suite)?;
    tracing::debug!(
        passed = results.passed_count(),
        failed = results.failed_count(),
        "suite finished"
    );

    let format = args.output.unwrap_or(config.output.format);
    let mut stdout = StandardStream::stdout(args.color_mode(config.output.color).resolve());
    report::write_report(format, &results, &mut stdout)?;
    Ok(results.exit_code())
}
