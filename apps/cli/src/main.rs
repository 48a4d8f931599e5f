//! dynval CLI - inspect, convert and combine typed values.

mod cli;
mod commands;
mod config;

use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::Parser;

use cli::{Cli, Command};
use commands::Context;
use config::Settings;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            err.print().ok();
            return ExitCode::FAILURE;
        }
    };
    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let settings = Settings::load(&cli)?;
    let _guard =
        dynval_log::init_with(settings.log.clone()).context("failed to initialize logging")?;
    let ctx = Context {
        limits: settings.limits()?,
    };
    tracing::debug!(preset = %settings.limits.preset, "settings loaded");

    match cli.command {
        Command::Encode(args) => commands::encode::run(args),
        Command::Decode(args) => commands::decode::run(args, &ctx),
        Command::Infer(args) => Ok(commands::infer::run(args)),
        Command::Compare(args) => commands::compare::run(args, &ctx),
        Command::Eval(args) => commands::eval::run(args, &ctx),
        Command::ToJson(args) => commands::json::to_json(args, &ctx),
        Command::FromJson(args) => commands::json::from_json(args),
    }
}
