//! Configuration management commands.

use std::fs;

use anyhow::{anyhow, bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, PlantConfig};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Get { key } => get_config(&key, ctx).await,
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[api]");
    ctx.output.kv("base_url", &ctx.config.api.base_url);
    ctx.output
        .kv("timeout_secs", &ctx.config.api.timeout_secs.to_string());

    ctx.output.info("");
    ctx.output.info("[storefront]");
    ctx.output.kv("locale", ctx.config.storefront.locale.as_str());
    ctx.output.kv(
        "admin_page_size",
        &ctx.config.storefront.admin_page_size.to_string(),
    );
    ctx.output
        .kv("share_origin", &ctx.config.storefront.share_origin);

    ctx.output.info("");
    ctx.output.info("[log]");
    ctx.output.kv("level", ctx.config.log.level.as_str());
    ctx.output.kv("format", &ctx.config.log.format.to_string());

    Ok(())
}

async fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

async fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let Some(config_path) = &ctx.config_path else {
        bail!("No config file found. Run `plant config init` first.");
    };

    let mut config = PlantConfig::load(config_path)?;
    set_config_value(&mut config, key, value)?;
    config.save(config_path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("plant.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = ctx.config.check();

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn get_config_value(config: &PlantConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["api", "base_url"] => Ok(config.api.base_url.clone()),
        ["api", "timeout_secs"] => Ok(config.api.timeout_secs.to_string()),
        ["storefront", "locale"] => Ok(config.storefront.locale.to_string()),
        ["storefront", "admin_page_size"] => Ok(config.storefront.admin_page_size.to_string()),
        ["storefront", "share_origin"] => Ok(config.storefront.share_origin.clone()),
        ["log", "level"] => Ok(config.log.level.to_string()),
        ["log", "format"] => Ok(config.log.format.to_string()),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut PlantConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["api", "base_url"] => config.api.base_url = value.to_string(),
        ["api", "timeout_secs"] => {
            config.api.timeout_secs = value
                .parse()
                .map_err(|_| anyhow!("api.timeout_secs must be a number of seconds"))?;
        }
        ["storefront", "locale"] => {
            config.storefront.locale = value.parse().map_err(|e| anyhow!("{e}"))?;
        }
        ["storefront", "admin_page_size"] => {
            config.storefront.admin_page_size = value
                .parse()
                .map_err(|_| anyhow!("storefront.admin_page_size must be a number"))?;
        }
        ["storefront", "share_origin"] => config.storefront.share_origin = value.to_string(),
        ["log", "level"] => config.log.level = value.parse()?,
        ["log", "format"] => config.log.format = value.parse()?,
        _ => bail!("Unknown config key: {}", key),
    }

    Ok(())
}
