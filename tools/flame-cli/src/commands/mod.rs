//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod menu;
pub mod options;

use clap::{Args, Subcommand};
use flame_commerce::catalog::{MenuCategory, SpiceLevel};
use flame_commerce::search::Selector;

/// Arguments for the menu command.
#[derive(Args)]
pub struct MenuArgs {
    /// Text to look for in item names and descriptions.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Category name or slug, or "All".
    #[arg(long, default_value = "All")]
    pub category: Selector<MenuCategory>,

    /// Spice level name or slug, or "All".
    #[arg(long, default_value = "All")]
    pub spice: Selector<SpiceLevel>,

    /// Only show vegetarian items.
    #[arg(long)]
    pub veg: bool,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart (default).
    Show,
    /// Add a menu item.
    Add {
        /// Menu item id.
        item_id: String,

        /// Spice level name or slug.
        #[arg(long)]
        spice: Option<SpiceLevel>,

        /// Side id; repeat to add several.
        #[arg(long = "side")]
        sides: Vec<String>,

        /// Sauce id; repeat to add several.
        #[arg(long = "sauce")]
        sauces: Vec<String>,

        /// Special instructions for the kitchen.
        #[arg(long)]
        note: Option<String>,

        /// Number of units to add.
        #[arg(short, long, default_value = "1")]
        qty: i64,
    },
    /// Remove every line for a menu item.
    Remove {
        /// Menu item id.
        item_id: String,
    },
    /// Remove one cart line.
    RemoveLine {
        /// Line id as shown by `flame cart show`.
        line_id: String,
    },
    /// Set the quantity of every line for a menu item. Zero or less removes.
    Update {
        /// Menu item id.
        item_id: String,
        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },
    /// Set the quantity of one cart line. Zero or less removes.
    UpdateLine {
        /// Line id as shown by `flame cart show`.
        line_id: String,
        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
