//! CLI configuration file (`sniper.toml`).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sniper_contact::GatewayConfig;
use sniper_site::SiteConfig;

/// File names searched for, in order, from the working directory upwards.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["sniper.toml", ".sniper.toml", "sniper.json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub site: SiteConfig,

    /// EmailJS credentials. Environment variables take precedence.
    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

impl CliConfig {
    /// Load config from a TOML or JSON file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Gateway credentials with environment overrides applied.
    pub fn effective_gateway(&self) -> GatewayConfig {
        self.effective_gateway_with(GatewayConfig::from_env())
    }

    fn effective_gateway_with(&self, env: GatewayConfig) -> GatewayConfig {
        env.or(self.gateway.clone())
    }

    /// Site settings with `SITE_HOSTNAME` applied.
    pub fn effective_site(&self) -> SiteConfig {
        match SiteConfig::from_env().hostname {
            Some(hostname) if !hostname.trim().is_empty() => SiteConfig::with_hostname(hostname),
            _ => self.site.clone(),
        }
    }
}

/// Static export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Output directory for `sniper render`.
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
}

fn default_out_dir() -> String {
    "dist".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
        }
    }
}

/// Commented starter config for `sniper config init --defaults`.
pub fn generate_default_config(hostname: &str) -> String {
    format!(
        r#"# SniperTrader site configuration

[site]
hostname = "{hostname}"

# EmailJS credentials. EMAILJS_SERVICE_ID, EMAILJS_TEMPLATE_ID and
# EMAILJS_PUBLIC_KEY override these values when set.
[gateway]
# service_id = "service_xxxxxxx"
# template_id = "template_xxxxxxx"
# public_key = "xxxxxxxxxxxxxxxx"

[render]
out_dir = "dist"
"#,
        hostname = hostname
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sniper.toml");
        std::fs::write(
            &path,
            r#"
[site]
hostname = "example.org"

[gateway]
service_id = "service_1"
template_id = "template_1"
"#,
        )
        .unwrap();

        let config = CliConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.site.hostname(), "example.org");
        assert_eq!(config.gateway.service_id.as_deref(), Some("service_1"));
        assert_eq!(config.gateway.missing(), vec!["EMAILJS_PUBLIC_KEY"]);
        assert_eq!(config.render.out_dir, "dist");
    }

    #[test]
    fn test_default_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config("snipertrader.online")).unwrap();
        assert_eq!(config.site.hostname(), "snipertrader.online");
        assert_eq!(config.gateway.missing().len(), 3);
    }

    #[test]
    fn test_save_and_reload_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sniper.json");
        let path = path.to_str().unwrap();

        let config = CliConfig {
            gateway: GatewayConfig::new("s", "t", "k"),
            ..Default::default()
        };
        config.save(path).unwrap();

        let reloaded = CliConfig::load(path).unwrap();
        assert!(reloaded.gateway.is_complete());
    }

    #[test]
    fn test_environment_overrides_file() {
        let config = CliConfig {
            gateway: GatewayConfig::new("file_service", "file_template", "file_key"),
            ..Default::default()
        };
        let env = GatewayConfig {
            service_id: Some("env_service".to_string()),
            template_id: Some("  ".to_string()),
            public_key: None,
        };

        let merged = config.effective_gateway_with(env);
        assert_eq!(merged.service_id.as_deref(), Some("env_service"));
        assert_eq!(merged.template_id.as_deref(), Some("file_template"));
        assert_eq!(merged.public_key.as_deref(), Some("file_key"));
    }

    #[test]
    fn test_load_missing_file_has_context() {
        let err = CliConfig::load("/nonexistent/sniper.toml").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read config file"));
    }
}
