//! Binary entry point for palgen.

mod cli;
mod commands;
mod config;
mod monitor;
mod output;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = cli::Cli::parse();
    commands::run(cli)
}
