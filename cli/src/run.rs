use std::io::{self, Write};

use anyhow::Context;
use clap::Args;
use factorial_config::{Config, RunConfig};
use factorial_core::{Overflow, Strategy};

#[derive(Debug, Default, Args)]
pub struct RunArgs {
    /// Integer to take the factorial of. Values <= 1 yield 1. [default: 5]
    #[arg(value_name = "N", allow_negative_numbers = true)]
    pub input: Option<i64>,

    /// Evaluation strategy. [default: recursive]
    #[arg(long)]
    pub strategy: Option<Strategy>,

    /// Behavior once the result no longer fits into a signed 64-bit integer. [default: wrapping]
    #[arg(long)]
    pub overflow: Option<Overflow>,
}

impl RunArgs {
    /// Fills every flag that was not given from `config`.
    pub fn resolve(self, config: RunConfig) -> RunConfig {
        let RunArgs { input, strategy, overflow } = self;
        RunConfig {
            input: input.unwrap_or(config.input),
            strategy: strategy.unwrap_or(config.strategy),
            overflow: overflow.unwrap_or(config.overflow),
        }
    }
}

pub fn handle_command(args: RunArgs) -> anyhow::Result<()> {
    let config = RunConfig::from_env().context("failed to load run configuration")?;
    let config = args.resolve(config);

    let stdout = io::stdout();
    execute(&config, &mut stdout.lock())
}

/// Evaluates the factorial described by `config` and writes it as a single line.
pub fn execute<W: Write>(config: &RunConfig, out: &mut W) -> anyhow::Result<()> {
    let RunConfig { input, strategy, overflow } = *config;
    tracing::debug!(input, %strategy, %overflow, "running");

    let value = factorial_core::evaluate(input, strategy, overflow).map_err(|err| {
        tracing::warn!(input, %err, "factorial out of range");
        err
    })?;

    writeln!(out, "{value}")?;
    out.flush()?;
    Ok(())
}
