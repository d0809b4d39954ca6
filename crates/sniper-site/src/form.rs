//! Server-rendered contact form.

use sniper_contact::{ContactField, ContactSubmission, Notification, NotificationKind, SubmissionState};

use crate::sections::html_escape;

/// Element id the client script binds to.
pub const FORM_ID: &str = "contact-form";
/// Element id of the live region toasts are rendered into.
pub const TOAST_REGION_ID: &str = "toast-region";

/// Everything needed to render the contact form in a given state.
///
/// A fresh page uses the default view. After a non-script POST the workload
/// re-renders with the retained field values and the toasts the controller
/// produced.
#[derive(Debug, Clone, Default)]
pub struct ContactFormView {
    pub submission: ContactSubmission,
    pub state: SubmissionState,
    pub toasts: Vec<Notification>,
}

impl ContactFormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_submission(mut self, submission: ContactSubmission) -> Self {
        self.submission = submission;
        self
    }

    pub fn with_state(mut self, state: SubmissionState) -> Self {
        self.state = state;
        self
    }

    pub fn with_toasts(mut self, toasts: Vec<Notification>) -> Self {
        self.toasts = toasts;
        self
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Render the toast live region.
    pub fn render_toasts(&self) -> String {
        let toasts = self.toasts.iter().map(render_toast).collect::<String>();
        format!(
            r#"<div class="toast-region" id="{}" aria-live="polite">{}</div>"#,
            TOAST_REGION_ID, toasts
        )
    }

    /// Render the form card.
    pub fn render(&self, title: &str) -> String {
        let value = |field| html_escape(self.submission.get(field));

        let button = if self.is_submitting() {
            r#"<button type="submit" class="btn-primary btn-submit" disabled aria-busy="true">Sending...</button>"#
        } else {
            r#"<button type="submit" class="btn-primary btn-submit">Send Message</button>"#
        };

        format!(
            r#"<div class="card form-card">
    <h2>{title}</h2>
    {toasts}
    <form id="{form_id}" class="contact-form" action="/api/contact" method="POST" novalidate>
        <div class="hp-field" aria-hidden="true">
            <label for="{hp}">Company</label>
            <input type="text" id="{hp}" name="{hp}" class="hidden" tabindex="-1" autocomplete="off" value="">
        </div>
        <div class="form-group">
            <label for="{name_field}">Full Name *</label>
            <input type="text" id="{name_field}" name="{name_field}" placeholder="Enter your full name" required value="{name}">
        </div>
        <div class="form-group">
            <label for="{email_field}">Email Address *</label>
            <input type="email" id="{email_field}" name="{email_field}" placeholder="Enter your email address" required value="{email}">
        </div>
        <div class="form-group">
            <label for="{message_field}">Message *</label>
            <textarea id="{message_field}" name="{message_field}" rows="6" placeholder="Tell us about your trading experience and goals..." required>{message}</textarea>
        </div>
        {button}
    </form>
</div>"#,
            title = html_escape(title),
            toasts = self.render_toasts(),
            form_id = FORM_ID,
            hp = ContactField::Honeypot.name(),
            name_field = ContactField::FullName.name(),
            email_field = ContactField::Email.name(),
            message_field = ContactField::Message.name(),
            name = value(ContactField::FullName),
            email = value(ContactField::Email),
            message = value(ContactField::Message),
            button = button,
        )
    }
}

fn render_toast(toast: &Notification) -> String {
    let (class, role) = match toast.kind {
        NotificationKind::Info => ("toast toast-info", "status"),
        NotificationKind::Error => ("toast toast-error", "alert"),
    };
    format!(
        r#"<div class="{}" role="{}"><strong>{}</strong><p>{}</p></div>"#,
        class,
        role,
        html_escape(&toast.title),
        html_escape(&toast.description)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sniper_contact::InvalidReason;

    #[test]
    fn test_honeypot_attributes() {
        let html = ContactFormView::new().render("Send Us a Message");
        assert!(html.contains(
            r#"<input type="text" id="company" name="company" class="hidden" tabindex="-1" autocomplete="off" value="">"#
        ));
        assert!(html.contains(r#"name="fullName""#));
        assert!(html.contains(r#"name="email""#));
        assert!(html.contains(r#"<textarea id="message" name="message" rows="6""#));
    }

    #[test]
    fn test_idle_button_enabled() {
        let html = ContactFormView::new().render("Send Us a Message");
        assert!(html.contains(">Send Message</button>"));
        assert!(!html.contains("disabled"));
        assert!(!html.contains("aria-busy"));
    }

    #[test]
    fn test_submitting_button_disabled() {
        let view = ContactFormView::new().with_state(SubmissionState::Submitting);
        let html = view.render("Send Us a Message");
        assert!(html.contains(r#"disabled aria-busy="true">Sending...</button>"#));
        assert!(!html.contains(">Send Message</button>"));
    }

    #[test]
    fn test_retained_values_are_escaped() {
        let submission = ContactSubmission::with_fields(
            r#""><script>alert(1)</script>"#,
            "jane@example.com",
            "</textarea><b>hi</b>",
        )
        .with_honeypot("acme");
        let html = ContactFormView::new()
            .with_submission(submission)
            .render("Send Us a Message");

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
        assert!(html.contains("&lt;/textarea&gt;&lt;b&gt;hi&lt;/b&gt;</textarea>"));
        assert!(html.contains(r#"value="jane@example.com""#));
        assert!(!html.contains("acme"));
    }

    #[test]
    fn test_toasts_render_with_roles() {
        let view = ContactFormView::new().with_toasts(vec![
            Notification::invalid(InvalidReason::BadEmailFormat),
            Notification::sent(),
        ]);
        let region = view.render_toasts();
        assert!(region.starts_with(r#"<div class="toast-region" id="toast-region" aria-live="polite">"#));
        assert!(region.contains(r#"<div class="toast toast-error" role="alert"><strong>Invalid email</strong>"#));
        assert!(region.contains(r#"role="status"><strong>Message sent successfully!</strong>"#));
        assert!(region.contains("We&#x27;ll get back to you within 24 hours."));
    }
}
