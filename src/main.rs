use std::io::IsTerminal;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use gh_secret_seal::app::App;
use gh_secret_seal::cli::Cli;
use gh_secret_seal::constants;
use gh_secret_seal::error::format_error_chain;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(constants::env::LOG_FILTER).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("gh_secret_seal=debug")
        } else {
            EnvFilter::new("gh_secret_seal=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = App::run(cli).await {
        eprintln!("{} {}", "error:".red().bold(), format_error_chain(&e));
        std::process::exit(1);
    }
}
