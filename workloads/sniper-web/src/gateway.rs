//! EmailJS over Spin's outbound HTTP.

use async_trait::async_trait;
use spin_sdk::http::{Method, Request, Response};

use sniper_contact::gateway::EMAILJS_SEND_URL;
use sniper_contact::{EmailGateway, GatewayError, GatewayRequest};
use sniper_observability::StructuredLogger;

/// Sends contact emails through the EmailJS REST API.
///
/// The host must be listed in the component's `allowed_outbound_hosts`.
pub struct SpinEmailGateway<'a> {
    logger: &'a StructuredLogger,
}

impl<'a> SpinEmailGateway<'a> {
    pub fn new(logger: &'a StructuredLogger) -> Self {
        Self { logger }
    }
}

#[async_trait(?Send)]
impl EmailGateway for SpinEmailGateway<'_> {
    async fn send(&self, request: &GatewayRequest) -> Result<(), GatewayError> {
        let body = request.to_emailjs_json().map_err(|e| {
            self.logger
                .error_builder("Failed to encode gateway payload")
                .field("error", e.to_string())
                .emit();
            GatewayError::opaque()
        })?;

        let req = Request::builder()
            .method(Method::Post)
            .uri(EMAILJS_SEND_URL)
            .header("content-type", "application/json")
            .body(body)
            .build();

        let started = std::time::Instant::now();
        let resp: Response = spin_sdk::http::send(req).await.map_err(|e| {
            // Transport detail stays in the logs; the user sees the generic text.
            self.logger
                .error_builder("Gateway request failed")
                .field("error", e.to_string())
                .duration_ms("gateway_ms", started.elapsed())
                .emit();
            GatewayError::opaque()
        })?;

        let status = *resp.status();
        self.logger
            .info_builder("Gateway responded")
            .field_i64("status", i64::from(status))
            .duration_ms("gateway_ms", started.elapsed())
            .emit();

        if status == 200 {
            return Ok(());
        }

        Err(GatewayError::http(
            status,
            String::from_utf8_lossy(resp.body()).into_owned(),
        ))
    }
}
