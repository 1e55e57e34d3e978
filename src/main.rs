//! DiskTally: command-line disk usage analyser.
//!
//! Thin binary entry point. All logic lives in the `disktally-core`
//! and `disktally-cli` crates.

use clap::Parser;
use disktally_cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("DiskTally starting");

    // Stderr is shared with the scanner thread's log output, so it is never
    // held locked for the length of a command.
    let stdout = std::io::stdout();
    match disktally_cli::run(&cli.command, &mut stdout.lock(), &mut std::io::stderr()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
