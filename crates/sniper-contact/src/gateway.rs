//! The external email gateway seam.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// EmailJS REST endpoint for sending a templated email.
pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Variables handed to the email template.
///
/// The field names are matched by the template on the provider side and must
/// not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub message: String,
    /// Hostname of the site the form was sent from.
    pub site: String,
    /// Reply-To address; always the sender's email.
    pub reply_to: String,
}

/// A fully formed send request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayRequest {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub template_params: TemplateParams,
}

/// JSON body of an EmailJS send call.
#[derive(Debug, Serialize)]
pub struct EmailJsPayload<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    /// EmailJS calls the public key `user_id`.
    pub user_id: &'a str,
    pub template_params: &'a TemplateParams,
}

impl GatewayRequest {
    /// The EmailJS wire body for this request.
    pub fn emailjs_payload(&self) -> EmailJsPayload<'_> {
        EmailJsPayload {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: &self.template_params,
        }
    }

    /// Serialize the EmailJS wire body.
    pub fn to_emailjs_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.emailjs_payload())
    }
}

/// A failed gateway call.
///
/// `text` carries whatever human-readable reason the provider returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Email gateway error{}: {}",
    .status.map(|s| format!(" (HTTP {})", s)).unwrap_or_default(),
    .text.as_deref().unwrap_or("no detail"))]
pub struct GatewayError {
    /// HTTP status, when a response came back at all.
    pub status: Option<u16>,
    /// Provider error text.
    pub text: Option<String>,
}

impl GatewayError {
    /// The provider answered with a non-success status.
    pub fn http(status: u16, text: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            text: Some(text.into()),
        }
    }

    /// The request never got a response.
    pub fn transport(text: impl Into<String>) -> Self {
        Self {
            status: None,
            text: Some(text.into()),
        }
    }

    /// Failure with nothing to report.
    pub fn opaque() -> Self {
        Self {
            status: None,
            text: None,
        }
    }

    /// Provider text exactly as returned; `None` when absent or empty.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }
}

/// Third-party service that delivers the email.
///
/// Futures are not required to be `Send`: the Spin guest runs one
/// request per single-threaded instance.
#[async_trait(?Send)]
pub trait EmailGateway {
    async fn send(&self, request: &GatewayRequest) -> Result<(), GatewayError>;
}

#[async_trait(?Send)]
impl<G: EmailGateway + ?Sized> EmailGateway for &G {
    async fn send(&self, request: &GatewayRequest) -> Result<(), GatewayError> {
        (**self).send(request).await
    }
}

/// Gateway that accepts everything without sending. Used for dry runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunGateway;

#[async_trait(?Send)]
impl EmailGateway for DryRunGateway {
    async fn send(&self, request: &GatewayRequest) -> Result<(), GatewayError> {
        tracing::info!(
            service_id = %request.service_id,
            template_id = %request.template_id,
            reply_to = %request.template_params.reply_to,
            "dry run: email not sent"
        );
        Ok(())
    }
}
