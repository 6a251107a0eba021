//! GBP CLI - points from work-item labels, kept in a sorted TOML ledger
//!
//! This is the command-line interface for GBP. It supplies the labels,
//! identity, and configuration that the core library leaves to its caller,
//! and drives the load → compute → edit → persist flow.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod output;

use std::env;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{award, balances, check, points};
use crate::constants::{LOG_ENV, LOG_FORMAT_ENV};
use crate::errors::CliError;

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let ctx = AppContext::new(&cli);
    if let Err(e) = run(&ctx, &cli) {
        let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        eprintln!("Error: {:#}", e);
        std::process::exit(code);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let format = env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);
    match format.as_str() {
        "json" => registry
            .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
            .init(),
        _ => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .init(),
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Points(args) => points::handle_points(ctx, args),
        Commands::Award(args) => award::handle_award(ctx, args),
        Commands::Set(args) => balances::handle_set(ctx, args),
        Commands::Show(args) => balances::handle_show(ctx, args),
        Commands::Check(args) => check::handle_check(ctx, args),
        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "gbp", &mut std::io::stdout());
            Ok(())
        }
    }
}
