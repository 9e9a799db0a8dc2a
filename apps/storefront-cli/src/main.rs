//! # Storefront Entry Point
//!
//! ```bash
//! # Demo inventory
//! cargo run -p storefront-cli
//!
//! # Custom catalog, with logging
//! cargo run -p storefront-cli -- --config ./storefront.toml --verbose
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// Interactive in-memory storefront
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log store activity to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The actual setup is in lib.rs for better testability
    match storefront_cli::run(cli.config, cli.verbose) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("storefront: {}", err);
            ExitCode::FAILURE
        }
    }
}
