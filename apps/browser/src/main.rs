//! # Thali Browser Entry Point

use std::process::ExitCode;

use clap::Parser;
use thali_browser_lib::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    thali_browser_lib::run(Cli::parse()).await
}
