//! Spin application variables.

use sniper_contact::GatewayConfig;
use sniper_observability::LogLevel;
use sniper_site::SiteConfig;

/// Spin variable names are the lowercase form of the environment names
/// (`EMAILJS_SERVICE_ID` -> `emailjs_service_id`).
pub fn spin_variable_name(env_name: &str) -> String {
    env_name.to_ascii_lowercase()
}

/// Gateway credentials from the component's variables.
///
/// Unset variables come back as `None`; the controller reports them when the
/// form is submitted.
pub fn gateway_config() -> GatewayConfig {
    GatewayConfig::from_lookup(|name| spin_sdk::variables::get(&spin_variable_name(name)).ok())
}

/// Site settings from the component's variables.
pub fn site_config() -> SiteConfig {
    SiteConfig {
        hostname: spin_sdk::variables::get(&spin_variable_name(sniper_site::HOSTNAME_ENV)).ok(),
    }
}

/// Minimum level from the `log_level` variable; `info` when unset or unknown.
pub fn log_level() -> LogLevel {
    spin_sdk::variables::get("log_level")
        .ok()
        .and_then(|name| LogLevel::parse(&name))
        .unwrap_or(LogLevel::Info)
}

/// Hostname reported to the email template: the request's `Host` header,
/// then the configured hostname.
pub fn resolve_site(request_host: Option<&str>, config: &SiteConfig) -> String {
    request_host
        .filter(|h| !h.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| config.hostname().to_string())
}
