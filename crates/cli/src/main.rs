//! Threadline CLI - cart script replay and catalogue tools.
//!
//! # Usage
//!
//! ```bash
//! # Replay a script of cart actions and log the final snapshot
//! tl-cli replay crates/cli/scripts/checkout.yaml
//!
//! # List the mock catalogue
//! tl-cli catalog
//!
//! # Only sale items in outerwear, cheapest first
//! tl-cli catalog --category outerwear --on-sale --sort price-asc
//! ```
//!
//! # Commands
//!
//! - `replay` - Run a YAML or JSON list of cart actions through a fresh store
//! - `catalog` - List the mock product catalogue

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use threadline_storefront::config::StorefrontConfig;

mod commands;

use commands::catalog::{CategoryArg, SortArg};

#[derive(Parser)]
#[command(name = "tl-cli")]
#[command(author, version, about = "Threadline CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a script of cart actions and log the resulting snapshot
    Replay {
        /// Path to a `.yaml`, `.yml` or `.json` action script
        script: PathBuf,
    },
    /// List the mock product catalogue
    Catalog {
        /// Only list products in this category
        #[arg(short, long, value_enum)]
        category: Option<CategoryArg>,

        /// Only list products with a sale price
        #[arg(long)]
        on_sale: bool,

        /// Listing order
        #[arg(short, long, value_enum, default_value_t = SortArg::Featured)]
        sort: SortArg,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing; command output is logged at info level
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;

    match cli.command {
        Commands::Replay { script } => {
            commands::replay::run(&script, config.currency).await?;
        }
        Commands::Catalog {
            category,
            on_sale,
            sort,
        } => commands::catalog::list(category, on_sale, sort, config.currency),
    }
    Ok(())
}
