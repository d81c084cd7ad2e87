//! Flame CLI - Browse the Flamegrill menu and manage a cart from the terminal.
//!
//! Commands:
//! - `flame menu` - List and filter the menu
//! - `flame options` - Show spice levels, sides and sauces
//! - `flame cart` - Show and change the cart
//! - `flame config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CartArgs, ConfigArgs, MenuArgs};

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "FLAME_LOG";

/// Flame CLI - Order flame-grilled chicken from your terminal
#[derive(Parser)]
#[command(name = "flame")]
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
    /// List the menu, optionally filtered
    Menu(MenuArgs),

    /// Show spice levels, sides and sauces
    Options,

    /// Show or change the cart
    Cart(CartArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    init_logging(cli.verbose, &ctx.config.log.level);

    // Execute command
    let result = match cli.command {
        Commands::Menu(args) => commands::menu::run(args, &ctx),
        Commands::Options => commands::options::run(&ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Install the log subscriber. `--verbose` wins, then `FLAME_LOG`, then the
/// configured level.
fn init_logging(verbose: bool, configured: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(configured))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
