//! # Storefront CLI
//!
//! Loads the catalog, builds the [`Store`](storefront_core::Store) and runs
//! the interactive menu on stdin/stdout.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, written to stderr             │
//! │     • Default: WARN (INFO for storefront crates with --verbose)         │
//! │                                                                         │
//! │  2. Load Configuration ───────────────────────────────────────────────► │
//! │     • --config, STOREFRONT_CONFIG, or the platform config dir           │
//! │     • A named file must exist; else the demo inventory                  │
//! │                                                                         │
//! │  3. Build Store ──────────────────────────────────────────────────────► │
//! │     • Every entry goes through the core constructors                    │
//! │                                                                         │
//! │  4. Run Menu ─────────────────────────────────────────────────────────► │
//! │     • Until "4. Quit" or end of input                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod menu;

use std::io;
use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::StorefrontConfig;
pub use error::{ApiError, CliError, CliResult, ErrorCode};
pub use menu::Menu;

/// Runs the storefront menu against the terminal.
pub fn run(config_path: Option<PathBuf>, verbose: bool) -> CliResult<()> {
    init_tracing(verbose);

    info!("Starting storefront");

    let config = StorefrontConfig::load(config_path)?;
    let mut store = config.build_store()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut store, config.store.name.as_str(), stdin.lock(), stdout.lock()).run()?;

    info!("Storefront closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_core=debug` - Pricing and stock changes only
/// - Default: WARN, or INFO for storefront crates when `verbose`
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "warn,storefront_core=info,storefront_cli=info"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Logs go to stderr so they never interleave with the menu
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
