// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use daofix::cli::Cli;
use daofix::config::ConfigBuilder;
use daofix::run;
use std::io::{self, Write};

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "daofix=debug".parse()?
                } else {
                    "daofix=info".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting daofix v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Configuration ---
    let cli = Cli::parse();
    let config = ConfigBuilder::from_cli(cli)
        .build()
        .context("Failed to build configuration")?;
    log::debug!("Configuration built successfully: {:?}", config);

    // --- Execution ---
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run(&config, &mut out);

    // --- Error Handling ---
    if let Err(e) = result {
        // Keep already printed "Fixed:" lines ahead of the error.
        if let Err(flush_err) = out.flush() {
            log::warn!("Failed to flush report before exiting: {}", flush_err);
        }
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
