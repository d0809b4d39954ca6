//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use dialoguer::{Input, Password};
use serde::Serialize;

use sniper_contact::GatewayConfig;
use sniper_site::{SiteConfig, DEFAULT_HOSTNAME};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::Context;

pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Check => check_config(ctx),
        ConfigCommand::Init { force, defaults } => init_config(force, defaults, ctx),
    }
}

/// Effective configuration with the public key masked.
#[derive(Debug, Serialize)]
struct ConfigView {
    source: Option<String>,
    hostname: String,
    gateway: GatewayConfig,
    out_dir: String,
}

fn mask(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    if secret.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", visible)
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let mut gateway = ctx.config.effective_gateway();
    gateway.public_key = gateway.public_key.as_deref().map(mask);

    let view = ConfigView {
        source: ctx.config_path.as_ref().map(|p| p.display().to_string()),
        hostname: ctx.config.effective_site().hostname().to_string(),
        gateway,
        out_dir: ctx.config.render.out_dir.clone(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    ctx.output.kv(
        "source",
        view.source.as_deref().unwrap_or("(none, using defaults)"),
    );
    ctx.output.kv("site.hostname", &view.hostname);
    let unset = "(unset)";
    ctx.output.kv(
        "gateway.service_id",
        view.gateway.service_id.as_deref().unwrap_or(unset),
    );
    ctx.output.kv(
        "gateway.template_id",
        view.gateway.template_id.as_deref().unwrap_or(unset),
    );
    ctx.output.kv(
        "gateway.public_key",
        view.gateway.public_key.as_deref().unwrap_or(unset),
    );
    ctx.output.kv("render.out_dir", &view.out_dir);

    Ok(())
}

#[derive(Debug, Serialize)]
struct CheckReport {
    complete: bool,
    missing: Vec<&'static str>,
}

fn check_config(ctx: &Context) -> Result<()> {
    let missing = ctx.config.effective_gateway().missing();
    let report = CheckReport {
        complete: missing.is_empty(),
        missing,
    };

    if ctx.output.is_json() {
        ctx.output.json(&report);
    } else {
        ctx.output.header("Checking gateway configuration");
        if report.complete {
            ctx.output.success("Email gateway is fully configured");
        } else {
            for name in &report.missing {
                ctx.output.list_item(&format!("{} is not set", name));
            }
        }
    }

    if !report.complete {
        bail!(
            "Email gateway not configured: missing {}",
            report.missing.join(", ")
        );
    }
    Ok(())
}

fn init_config(force: bool, defaults: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("sniper.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if defaults || ctx.output.is_json() {
        fs::write(&config_path, generate_default_config(DEFAULT_HOSTNAME))?;
    } else {
        let hostname: String = Input::new()
            .with_prompt("Site hostname")
            .default(DEFAULT_HOSTNAME.to_string())
            .interact_text()?;
        let service_id: String = Input::new()
            .with_prompt("EmailJS service id")
            .allow_empty(true)
            .interact_text()?;
        let template_id: String = Input::new()
            .with_prompt("EmailJS template id")
            .allow_empty(true)
            .interact_text()?;
        let public_key = Password::new()
            .with_prompt("EmailJS public key")
            .allow_empty_password(true)
            .interact()?;

        let config = CliConfig {
            site: SiteConfig::with_hostname(hostname),
            gateway: GatewayConfig {
                service_id: non_empty(service_id),
                template_id: non_empty(template_id),
                public_key: non_empty(public_key),
            },
            ..Default::default()
        };
        config.save(&config_path.to_string_lossy())?;

        let missing = config.gateway.missing();
        if !missing.is_empty() {
            ctx.output.warn(&format!(
                "Still missing: {} (set them in the file or the environment)",
                missing.join(", ")
            ));
        }
    }

    ctx.output
        .success(&format!("Created: {}", config_path.display()));
    Ok(())
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
