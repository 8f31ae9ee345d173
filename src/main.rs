// src/main.rs

use anyhow::Result;
use clap::Parser;
use rename2date::cli::Cli;
use rename2date::config::TargetSpecBuilder;
use rename2date::output::{self, LogLineReporter};
use rename2date::{execute, preview};
use std::io::{self, Write};

fn main() -> Result<()> {
    // Initialize logging. RUST_LOG overrides the default directive.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "rename2date=debug".parse()?
                } else {
                    "rename2date=info".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting rename2date v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Setup ---
    let cli = Cli::parse();
    let preview_only = cli.preview;

    // --- Configuration ---
    let spec = match TargetSpecBuilder::from_cli(cli).build() {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built successfully.");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // --- Execution ---
    if preview_only {
        output::write_preview_header(&mut out, &spec)?;
        match preview(&spec) {
            Ok(entries) => output::write_preview_output(&mut out, &entries)?,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    output::write_run_header(&mut out, &spec)?;
    out.flush()?;
    let mut reporter = LogLineReporter::new(&mut out);
    let summary = match execute(&spec, &mut reporter) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    output::write_summary(&mut out, &summary)?;

    Ok(())
}
