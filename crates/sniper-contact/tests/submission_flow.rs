//! End-to-end contact pipeline scenarios against a scripted gateway.

use std::cell::Cell;
use std::panic::AssertUnwindSafe;

use async_trait::async_trait;
use futures::FutureExt;
use sniper_contact::prelude::*;

/// Gateway double that counts calls and answers from a script.
#[derive(Default)]
struct ScriptedGateway {
    calls: Cell<usize>,
    reply: Reply,
}

#[derive(Default)]
enum Reply {
    #[default]
    Accept,
    Reject(GatewayError),
    Panic,
}

impl ScriptedGateway {
    fn rejecting(err: GatewayError) -> Self {
        Self {
            calls: Cell::new(0),
            reply: Reply::Reject(err),
        }
    }

    fn panicking() -> Self {
        Self {
            calls: Cell::new(0),
            reply: Reply::Panic,
        }
    }
}

#[async_trait(?Send)]
impl EmailGateway for ScriptedGateway {
    async fn send(&self, _request: &GatewayRequest) -> Result<(), GatewayError> {
        self.calls.set(self.calls.get() + 1);
        match &self.reply {
            Reply::Accept => Ok(()),
            Reply::Reject(err) => Err(err.clone()),
            Reply::Panic => panic!("gateway client blew up"),
        }
    }
}

fn configured() -> GatewayConfig {
    GatewayConfig::new("service_x", "template_y", "pk_z")
}

fn form(
    submission: ContactSubmission,
    gateway: ScriptedGateway,
) -> SubmissionController<ScriptedGateway, ToastQueue> {
    SubmissionController::new(configured(), gateway, ToastQueue::new())
        .with_site("snipertrader.online")
        .with_submission(submission)
}

#[tokio::test]
async fn missing_name_never_reaches_gateway() {
    let mut controller = form(
        ContactSubmission::with_fields("", "a@b.com", "hi"),
        ScriptedGateway::default(),
    );

    let err = controller.submit().await.unwrap_err();

    assert!(matches!(
        err,
        ContactError::InvalidInput(InvalidReason::MissingFields)
    ));
    assert_eq!(controller.gateway().calls.get(), 0);
    assert_eq!(controller.sink().snapshot()[0].title, "Missing fields");
    assert_eq!(controller.state(), SubmissionState::Idle);
}

#[tokio::test]
async fn malformed_email_is_reported() {
    let mut controller = form(
        ContactSubmission::with_fields("Jane", "not-an-email", "hi"),
        ScriptedGateway::default(),
    );

    let err = controller.submit().await.unwrap_err();

    assert!(matches!(
        err,
        ContactError::InvalidInput(InvalidReason::BadEmailFormat)
    ));
    assert_eq!(controller.gateway().calls.get(), 0);
    let toasts = controller.sink().snapshot();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, NotificationKind::Error);
    assert_eq!(toasts[0].title, "Invalid email");
}

#[tokio::test]
async fn honeypot_drops_silently() {
    let mut controller = form(
        ContactSubmission::with_fields("Jane", "jane@x.com", "Interested").with_honeypot("filled"),
        ScriptedGateway::default(),
    );

    let err = controller.submit().await.unwrap_err();

    assert!(matches!(err, ContactError::BotSuspected));
    assert_eq!(controller.gateway().calls.get(), 0);
    assert!(controller.sink().is_empty());
    assert_eq!(controller.state(), SubmissionState::Idle);
    assert_eq!(controller.submission().honeypot, "filled");
}

#[tokio::test]
async fn successful_send_resets_form() {
    let mut controller = form(
        ContactSubmission::with_fields("Jane", "jane@x.com", "Interested"),
        ScriptedGateway::default(),
    );

    controller.submit().await.unwrap();

    assert_eq!(controller.gateway().calls.get(), 1);
    let toasts = controller.sink().snapshot();
    assert_eq!(toasts, vec![Notification::sent()]);
    assert!(toasts[0].description.contains("24 hours"));
    assert!(controller.submission().is_empty());
    assert_eq!(controller.state(), SubmissionState::Idle);
}

#[tokio::test]
async fn gateway_rejection_keeps_fields() {
    let mut controller = form(
        ContactSubmission::with_fields("Jane", "jane@x.com", "Interested"),
        ScriptedGateway::rejecting(GatewayError::http(400, "Invalid template")),
    );

    let err = controller.submit().await.unwrap_err();

    assert!(matches!(err, ContactError::Gateway(_)));
    let toasts = controller.sink().snapshot();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title, "Sending failed");
    assert!(toasts[0].description.contains("Invalid template"));
    assert_eq!(
        controller.submission(),
        &ContactSubmission::with_fields("Jane", "jane@x.com", "Interested")
    );
    assert_eq!(controller.state(), SubmissionState::Idle);
}

#[tokio::test]
async fn gateway_failure_without_text_uses_generic_message() {
    let mut controller = form(
        ContactSubmission::with_fields("Jane", "jane@x.com", "Interested"),
        ScriptedGateway::rejecting(GatewayError::opaque()),
    );

    controller.submit().await.unwrap_err();

    let toasts = controller.sink().snapshot();
    assert_eq!(
        toasts[0].description,
        "We couldn't send your message right now. Please try again."
    );
}

#[tokio::test]
async fn missing_configuration_is_reported_without_sending() {
    let mut controller = SubmissionController::new(
        GatewayConfig::default(),
        ScriptedGateway::default(),
        ToastQueue::new(),
    )
    .with_submission(ContactSubmission::with_fields("Jane", "jane@x.com", "Interested"));

    let err = controller.submit().await.unwrap_err();

    match err {
        ContactError::Configuration { missing } => assert_eq!(missing.len(), 3),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(controller.gateway().calls.get(), 0);
    assert_eq!(controller.sink().snapshot()[0].title, "Configuration error");
    assert_eq!(controller.state(), SubmissionState::Idle);
}

#[tokio::test]
async fn panicking_gateway_still_releases_flag() {
    let mut controller = form(
        ContactSubmission::with_fields("Jane", "jane@x.com", "Interested"),
        ScriptedGateway::panicking(),
    );

    let outcome = AssertUnwindSafe(controller.submit()).catch_unwind().await;

    assert!(outcome.is_err());
    assert_eq!(controller.gateway().calls.get(), 1);
    assert_eq!(controller.state(), SubmissionState::Idle);
}

#[tokio::test]
async fn state_is_idle_after_every_path() {
    let cases = [
        ContactSubmission::with_fields("", "", ""),
        ContactSubmission::with_fields("Jane", "bad", "hi"),
        ContactSubmission::with_fields("Jane", "jane@x.com", "hi").with_honeypot("x"),
        ContactSubmission::with_fields("Jane", "jane@x.com", "hi"),
    ];

    for submission in cases {
        for gateway in [
            ScriptedGateway::default(),
            ScriptedGateway::rejecting(GatewayError::transport("connection reset")),
        ] {
            let mut controller = form(submission.clone(), gateway);
            let _ = controller.submit().await;
            assert_eq!(controller.state(), SubmissionState::Idle);
        }
    }
}

#[tokio::test]
async fn resubmitting_after_failure_is_allowed() {
    let mut controller = form(
        ContactSubmission::with_fields("Jane", "jane@x.com", "Interested"),
        ScriptedGateway::rejecting(GatewayError::transport("timeout")),
    );

    controller.submit().await.unwrap_err();
    controller.submit().await.unwrap_err();

    assert_eq!(controller.gateway().calls.get(), 2);
    assert_eq!(controller.sink().len(), 2);
}
