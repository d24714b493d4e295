//! TileWeave CLI - Command-line interface
//!
//! This binary exposes the library's composition strategies as
//! subcommands: `vertical`, `horizontal`, and `windowed`.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{horizontal, vertical, windowed};
use crate::error::CliError;

#[derive(Debug, Parser)]
#[command(
    name = "tileweave",
    version,
    about = "Weave images into strip and window composites"
)]
struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Weave images as alternating vertical strips
    Vertical(vertical::VerticalArgs),
    /// Weave images as alternating horizontal strips
    Horizontal(horizontal::HorizontalArgs),
    /// Weave images as a grid of rectangular windows
    Windowed(windowed::WindowedArgs),
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<(), CliError> = match cli.command {
        Command::Vertical(args) => vertical::run(args),
        Command::Horizontal(args) => horizontal::run(args),
        Command::Windowed(args) => windowed::run(args),
    };

    if let Err(err) = result {
        tracing::error!(error = %err, "composition failed");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
