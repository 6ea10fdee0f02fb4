//! # dns-preload
//!
//! Warms a DNS cache by resolving a configured list of names against one
//! nameserver.

mod args;
mod bootstrap;
mod commands;
mod di;

use args::{Cli, Command};
use clap::Parser;
use std::time::Instant;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let started = Instant::now();
    let cli = Cli::parse();

    if let Command::Config(command) = &cli.command {
        bootstrap::init_logging(false);
        return commands::config::run(*command);
    }

    if let Some((query_type, args)) = cli.command.preload() {
        bootstrap::init_logging(args.debug);
        commands::preload::run(query_type, args, started).await?;
    }
    Ok(())
}
