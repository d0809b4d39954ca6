//! Contact form submission state machine.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::GatewayConfig;
use crate::error::ContactError;
use crate::gateway::{EmailGateway, GatewayRequest, TemplateParams};
use crate::honeypot::is_bot;
use crate::notify::{Notification, NotificationSink};
use crate::submission::{ContactField, ContactSubmission, FormEvent};
use crate::validation::validate;

/// Whether a send is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// Shared view of a form's in-flight flag.
///
/// Clones observe the same flag, so a renderer can disable the submit button
/// while the controller holds it.
#[derive(Debug, Clone, Default)]
pub struct SubmissionFlag(Arc<AtomicBool>);

impl SubmissionFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        if self.0.load(Ordering::Acquire) {
            SubmissionState::Submitting
        } else {
            SubmissionState::Idle
        }
    }

    /// Take the flag. `None` if it is already held.
    pub fn try_acquire(&self) -> Option<InFlight> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight(self.0.clone()))
    }
}

/// Holds the in-flight flag; dropping it returns the form to `Idle`.
#[derive(Debug)]
#[must_use = "the flag is released as soon as this guard is dropped"]
pub struct InFlight(Arc<AtomicBool>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Owns one contact form: its field values, its in-flight flag, and the
/// validate, filter, send, report lifecycle.
pub struct SubmissionController<G, N> {
    config: GatewayConfig,
    gateway: G,
    sink: N,
    site: String,
    submission: ContactSubmission,
    flag: SubmissionFlag,
}

impl<G, N> SubmissionController<G, N>
where
    G: EmailGateway,
    N: NotificationSink,
{
    /// Create a controller with an empty form.
    pub fn new(config: GatewayConfig, gateway: G, sink: N) -> Self {
        Self {
            config,
            gateway,
            sink,
            site: String::new(),
            submission: ContactSubmission::new(),
            flag: SubmissionFlag::new(),
        }
    }

    /// Set the hostname reported to the email template.
    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = site.into();
        self
    }

    /// Start from pre-filled field values.
    pub fn with_submission(mut self, submission: ContactSubmission) -> Self {
        self.submission = submission;
        self
    }

    pub fn submission(&self) -> &ContactSubmission {
        &self.submission
    }

    pub fn state(&self) -> SubmissionState {
        self.flag.state()
    }

    /// A handle observing this form's in-flight flag.
    pub fn flag(&self) -> SubmissionFlag {
        self.flag.clone()
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn sink(&self) -> &N {
        &self.sink
    }

    /// Update one field.
    pub fn apply(&mut self, field: ContactField, value: impl Into<String>) {
        self.submission.set(field, value);
    }

    /// Feed one form event through the state machine.
    pub async fn handle(&mut self, event: FormEvent) -> Result<(), ContactError> {
        match event {
            FormEvent::FieldChanged { field, value } => {
                self.apply(field, value);
                Ok(())
            }
            FormEvent::SubmitRequested => self.submit().await,
        }
    }

    /// Submit the current field values.
    ///
    /// Every path returns with the form `Idle`. Input errors, configuration
    /// errors, and gateway failures are reported to the sink; a honeypot hit
    /// and a refused re-entrant submit are not.
    pub async fn submit(&mut self) -> Result<(), ContactError> {
        if let Err(reason) = validate(&self.submission).into_result() {
            debug!(reason = reason.as_str(), "contact submission rejected");
            self.sink.notify(Notification::invalid(reason));
            return Err(ContactError::InvalidInput(reason));
        }

        if is_bot(&self.submission) {
            info!("contact submission dropped by honeypot");
            return Err(ContactError::BotSuspected);
        }

        let request = match self.build_request() {
            Ok(request) => request,
            Err(err) => {
                warn!(error = %err, "email gateway is not configured");
                self.sink.notify(Notification::misconfigured());
                return Err(err);
            }
        };

        let Some(_in_flight) = self.flag.try_acquire() else {
            debug!("contact submission ignored: already submitting");
            return Err(ContactError::AlreadySubmitting);
        };

        match self.gateway.send(&request).await {
            Ok(()) => {
                info!(site = %request.template_params.site, "contact message sent");
                self.sink.notify(Notification::sent());
                self.submission.reset();
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "contact message failed to send");
                self.sink.notify(Notification::send_failed(err.text()));
                Err(ContactError::Gateway(err))
            }
        }
    }

    fn build_request(&self) -> Result<GatewayRequest, ContactError> {
        let credentials = self.config.credentials()?;
        let submission = &self.submission;

        Ok(GatewayRequest {
            service_id: credentials.service_id.to_string(),
            template_id: credentials.template_id.to_string(),
            public_key: credentials.public_key.to_string(),
            template_params: TemplateParams {
                full_name: submission.full_name.clone(),
                email: submission.email.clone(),
                message: submission.message.clone(),
                site: self.site.clone(),
                reply_to: submission.email.clone(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::GatewayError;
    use crate::notify::ToastQueue;
    use async_trait::async_trait;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeGateway {
        fail_with: Option<GatewayError>,
        observed: RefCell<Vec<SubmissionState>>,
        sent: RefCell<Vec<GatewayRequest>>,
        flag: RefCell<Option<SubmissionFlag>>,
    }

    #[async_trait(?Send)]
    impl EmailGateway for FakeGateway {
        async fn send(&self, request: &GatewayRequest) -> Result<(), GatewayError> {
            if let Some(flag) = self.flag.borrow().as_ref() {
                self.observed.borrow_mut().push(flag.state());
            }
            self.sent.borrow_mut().push(request.clone());
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    fn controller(gateway: FakeGateway) -> SubmissionController<FakeGateway, ToastQueue> {
        let controller = SubmissionController::new(
            GatewayConfig::new("service_x", "template_y", "pk_z"),
            gateway,
            ToastQueue::new(),
        )
        .with_site("snipertrader.online")
        .with_submission(ContactSubmission::with_fields("Jane", "jane@x.com", "Interested"));
        *controller.gateway().flag.borrow_mut() = Some(controller.flag());
        controller
    }

    #[tokio::test]
    async fn test_gateway_sees_submitting_state() {
        let mut controller = controller(FakeGateway::default());
        controller.submit().await.unwrap();

        assert_eq!(
            *controller.gateway().observed.borrow(),
            vec![SubmissionState::Submitting]
        );
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_request_carries_reply_to_and_site() {
        let mut controller = controller(FakeGateway::default());
        controller.submit().await.unwrap();

        let sent = controller.gateway().sent.borrow();
        let params = &sent[0].template_params;
        assert_eq!(params.reply_to, "jane@x.com");
        assert_eq!(params.site, "snipertrader.online");
        assert_eq!(sent[0].public_key, "pk_z");
    }

    #[tokio::test]
    async fn test_events_drive_the_form() {
        let mut controller = controller(FakeGateway::default())
            .with_submission(ContactSubmission::new());

        for event in [
            FormEvent::changed(ContactField::FullName, "Jane"),
            FormEvent::changed(ContactField::Email, "jane@x.com"),
            FormEvent::changed(ContactField::Message, "Interested"),
        ] {
            controller.handle(event).await.unwrap();
        }
        assert_eq!(controller.submission().full_name, "Jane");

        controller.handle(FormEvent::SubmitRequested).await.unwrap();
        assert!(controller.submission().is_empty());
    }

    #[tokio::test]
    async fn test_held_flag_refuses_submit() {
        let mut controller = controller(FakeGateway::default());
        let flag = controller.flag();
        let held = flag.try_acquire().expect("flag starts free");

        let err = controller.submit().await.unwrap_err();
        assert!(matches!(err, ContactError::AlreadySubmitting));
        assert!(controller.gateway().sent.borrow().is_empty());
        assert!(controller.sink().is_empty());

        drop(held);
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_flag_guard_releases_on_drop() {
        let flag = SubmissionFlag::new();
        {
            let _guard = flag.try_acquire().unwrap();
            assert_eq!(flag.state(), SubmissionState::Submitting);
            assert!(flag.try_acquire().is_none());
        }
        assert_eq!(flag.state(), SubmissionState::Idle);
    }
}
