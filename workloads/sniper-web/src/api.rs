//! `POST /api/contact`: body parsing, the submission run, and the reply.

use http::StatusCode;
use serde::Serialize;
use sniper_contact::{
    ContactError, ContactSubmission, EmailGateway, GatewayConfig, Notification,
    SubmissionController, ToastQueue,
};
use sniper_core::{Page, WorkloadError};
use sniper_site::{ContactFormView, Site};

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Outcome reported to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Sent,
    Invalid,
    Ignored,
    Misconfigured,
    Failed,
    Busy,
}

impl ApiStatus {
    pub fn from_result(result: &Result<(), ContactError>) -> Self {
        match result {
            Ok(()) => ApiStatus::Sent,
            Err(ContactError::InvalidInput(_)) => ApiStatus::Invalid,
            Err(ContactError::BotSuspected) => ApiStatus::Ignored,
            Err(ContactError::Configuration { .. }) => ApiStatus::Misconfigured,
            Err(ContactError::Gateway(_)) => ApiStatus::Failed,
            Err(ContactError::AlreadySubmitting) => ApiStatus::Busy,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiStatus::Sent => "sent",
            ApiStatus::Invalid => "invalid",
            ApiStatus::Ignored => "ignored",
            ApiStatus::Misconfigured => "misconfigured",
            ApiStatus::Failed => "failed",
            ApiStatus::Busy => "busy",
        }
    }

    /// A bot gets the same 200 a person would.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiStatus::Sent | ApiStatus::Ignored => StatusCode::OK,
            ApiStatus::Invalid => StatusCode::UNPROCESSABLE_ENTITY,
            ApiStatus::Misconfigured => StatusCode::SERVICE_UNAVAILABLE,
            ApiStatus::Failed => StatusCode::BAD_GATEWAY,
            ApiStatus::Busy => StatusCode::CONFLICT,
        }
    }
}

/// JSON body of the API response.
#[derive(Debug, Clone, Serialize)]
pub struct ContactReply {
    pub status: ApiStatus,
    pub notifications: Vec<Notification>,
}

impl ContactReply {
    pub fn to_json(&self) -> Vec<u8> {
        serde_json::to_vec(self).unwrap_or_default()
    }
}

/// Everything the handler needs to answer a submission.
#[derive(Debug, Clone)]
pub struct ContactOutcome {
    pub status: ApiStatus,
    pub notifications: Vec<Notification>,
    /// Form contents after the run: cleared when sent, retained otherwise.
    pub submission: ContactSubmission,
}

impl ContactOutcome {
    pub fn reply(&self) -> ContactReply {
        ContactReply {
            status: self.status,
            notifications: self.notifications.clone(),
        }
    }
}

/// A complete reply to a contact post.
#[derive(Debug, Clone)]
pub struct ContactResponse {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

/// JSON for script callers; otherwise the contact page again, carrying the
/// toasts and whatever the form still holds.
pub fn contact_response(outcome: &ContactOutcome, json: bool, site: &Site) -> ContactResponse {
    let status = outcome.status.status_code();
    if json {
        return ContactResponse {
            status,
            content_type: JSON_CONTENT_TYPE,
            body: outcome.reply().to_json(),
        };
    }

    let form = ContactFormView::new()
        .with_submission(outcome.submission.clone())
        .with_toasts(outcome.notifications.clone());
    ContactResponse {
        status,
        content_type: HTML_CONTENT_TYPE,
        body: site.render_page(Page::Contact, &form).into_bytes(),
    }
}

/// Decode a submission from a urlencoded or JSON body.
///
/// `content_type` is expected lowercased. A missing content type is treated
/// as a native form post.
pub fn parse_submission(
    content_type: Option<&str>,
    body: &[u8],
) -> Result<ContactSubmission, WorkloadError> {
    match content_type {
        Some("application/json") => serde_json::from_slice(body)
            .map_err(|e| WorkloadError::BadRequest(format!("invalid JSON: {}", e))),
        Some("application/x-www-form-urlencoded") | None => serde_urlencoded::from_bytes(body)
            .map_err(|e| WorkloadError::BadRequest(format!("invalid form body: {}", e))),
        Some(other) => Err(WorkloadError::BadRequest(format!(
            "unsupported content type: {}",
            other
        ))),
    }
}

/// Whether the caller asked for JSON rather than a rendered page.
pub fn wants_json(accept: Option<&str>, content_type: Option<&str>) -> bool {
    let accepts_json = accept
        .map(|a| {
            a.split(',')
                .any(|part| part.trim().to_ascii_lowercase().starts_with(JSON_CONTENT_TYPE))
        })
        .unwrap_or(false);
    accepts_json || content_type == Some(JSON_CONTENT_TYPE)
}

/// Run one submission through a fresh controller.
pub async fn submit_contact<G: EmailGateway>(
    config: GatewayConfig,
    gateway: G,
    site: &str,
    submission: ContactSubmission,
) -> ContactOutcome {
    let toasts = ToastQueue::new();
    let mut controller = SubmissionController::new(config, gateway, &toasts)
        .with_site(site)
        .with_submission(submission);

    let result = controller.submit().await;

    ContactOutcome {
        status: ApiStatus::from_result(&result),
        notifications: toasts.drain(),
        submission: controller.submission().clone(),
    }
}
