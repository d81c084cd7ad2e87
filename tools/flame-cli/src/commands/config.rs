//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, AppConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("[storage]");
    ctx.output.kv("backend", ctx.config.storage.backend.as_str());
    ctx.output.kv("dir", &ctx.storage_dir().display().to_string());
    ctx.output.kv("namespace", &ctx.config.storage.namespace);

    ctx.output.info("[display]");
    ctx.output.kv("currency", &ctx.config.display.currency);

    ctx.output.info("[log]");
    ctx.output.kv("level", &ctx.config.log.level);

    Ok(())
}

/// Write a default config. With `--json` the file is `flame.json`.
fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let name = if ctx.output.is_json() {
        CONFIG_FILE_NAMES[2]
    } else {
        CONFIG_FILE_NAMES[0]
    };
    let config_path = ctx.cwd.join(name);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if ctx.output.is_json() {
        AppConfig::default().save(&config_path)?;
        ctx.output
            .json(&serde_json::json!({ "created": config_path.display().to_string() }));
    } else {
        fs::write(&config_path, generate_default_config())?;
        ctx.output.success(&format!("Created: {}", config_path.display()));
    }

    Ok(())
}
