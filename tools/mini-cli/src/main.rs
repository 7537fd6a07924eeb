//! Mini CLI - Command line storefront for the Mini Commerce engine.
//!
//! Commands:
//! - `mini list` - Search, filter and sort the catalog
//! - `mini cart` - Run a scripted shopping session
//! - `mini catalog` - Show or validate the configured catalog

mod commands;
mod config;
mod context;
mod logging;
mod output;
mod view;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CartArgs, CatalogArgs, ListArgs};

/// Mini CLI - Browse the catalog and drive a shopping cart
#[derive(Parser)]
#[command(name = "mini")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products matching a search, category and sort
    List(ListArgs),

    /// Run cart actions against a fresh session
    Cart(CartArgs),

    /// Show or validate the catalog
    Catalog(CatalogArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    let result = context::Context::load(cli.config.as_deref(), output.clone(), cli.verbose)
        .and_then(|ctx| match cli.command {
            Commands::List(args) => commands::list::run(args, &ctx),
            Commands::Cart(args) => commands::cart::run(args, &ctx),
            Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        });

    if let Err(e) = result {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
