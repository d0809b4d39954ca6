//! Email gateway credentials.

use serde::{Deserialize, Serialize};

use crate::error::ContactError;

/// Environment variable holding the EmailJS service id.
pub const SERVICE_ID_ENV: &str = "EMAILJS_SERVICE_ID";
/// Environment variable holding the EmailJS template id.
pub const TEMPLATE_ID_ENV: &str = "EMAILJS_TEMPLATE_ID";
/// Environment variable holding the EmailJS public key.
pub const PUBLIC_KEY_ENV: &str = "EMAILJS_PUBLIC_KEY";

/// Credentials for the external email gateway.
///
/// Every value is optional so that an incomplete deployment can still serve
/// pages; the controller reports the gap when someone submits the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
}

/// A complete set of credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayCredentials<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub public_key: &'a str,
}

impl GatewayConfig {
    /// Create a fully populated configuration.
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: Some(service_id.into()),
            template_id: Some(template_id.into()),
            public_key: Some(public_key.into()),
        }
    }

    /// Read the configuration through an arbitrary lookup.
    ///
    /// The lookup receives the environment variable names
    /// (`EMAILJS_SERVICE_ID`, ...).
    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        Self {
            service_id: lookup(SERVICE_ID_ENV),
            template_id: lookup(TEMPLATE_ID_ENV),
            public_key: lookup(PUBLIC_KEY_ENV),
        }
    }

    /// Read the configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Fill unset values from another configuration.
    pub fn or(self, fallback: GatewayConfig) -> Self {
        Self {
            service_id: present(self.service_id).or(fallback.service_id),
            template_id: present(self.template_id).or(fallback.template_id),
            public_key: present(self.public_key).or(fallback.public_key),
        }
    }

    /// Names of the values that are unset or blank.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (SERVICE_ID_ENV, &self.service_id),
            (TEMPLATE_ID_ENV, &self.template_id),
            (PUBLIC_KEY_ENV, &self.public_key),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().map_or(true, |v| v.trim().is_empty()))
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Borrow the credentials, or report which ones are missing.
    pub fn credentials(&self) -> Result<GatewayCredentials<'_>, ContactError> {
        match (&self.service_id, &self.template_id, &self.public_key) {
            (Some(service_id), Some(template_id), Some(public_key)) if self.is_complete() => {
                Ok(GatewayCredentials {
                    service_id,
                    template_id,
                    public_key,
                })
            }
            _ => Err(ContactError::Configuration {
                missing: self.missing(),
            }),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
