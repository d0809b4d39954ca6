//! Run a submission through the contact pipeline from the command line.

use anyhow::{bail, Result};
use serde::Serialize;

use sniper_contact::gateway::DryRunGateway;
use sniper_contact::{
    is_bot, validate, ContactError, ContactSubmission, LogSink, Notification,
    SubmissionController, ToastQueue, ValidationResult,
};

use super::ValidateArgs;
use crate::context::Context;

#[derive(Debug, Serialize)]
struct Report {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
    bot: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<&'static str>,
    notifications: Vec<Notification>,
}

pub async fn run(args: ValidateArgs, ctx: &Context) -> Result<()> {
    let submission = ContactSubmission::with_fields(args.name, args.email, args.message)
        .with_honeypot(args.company);

    let validation = validate(&submission);
    let mut report = Report {
        valid: validation.is_valid(),
        reason: match validation {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(reason) => Some(reason.as_str()),
        },
        bot: is_bot(&submission),
        outcome: None,
        notifications: Vec::new(),
    };

    if args.dry_run {
        ctx.output.info("Dry run: the gateway is not contacted");
        let toasts = ToastQueue::new();
        let site = ctx.config.effective_site();
        // Toasts feed the report; LogSink mirrors them to the tracing log.
        let mut controller = SubmissionController::new(
            ctx.config.effective_gateway(),
            DryRunGateway,
            (&toasts, LogSink),
        )
        .with_site(site.hostname())
        .with_submission(submission);

        let result = controller.submit().await;
        report.outcome = Some(match &result {
            Ok(()) => "sent",
            Err(e) => e.code(),
        });
        report.notifications = toasts.drain();
        if let Err(ContactError::Configuration { missing }) = &result {
            ctx.output
                .warn(&format!("Gateway not configured: {}", missing.join(", ")));
        }
    }

    if ctx.output.is_json() {
        ctx.output.json(&report);
    } else {
        print_report(&report, ctx);
    }

    if !report.valid {
        bail!("Submission rejected: {}", report.reason.unwrap_or("invalid"));
    }
    Ok(())
}

fn print_report(report: &Report, ctx: &Context) {
    ctx.output.header("Contact submission");

    match report.reason {
        None => ctx.output.success("Fields are valid"),
        Some(reason) => ctx.output.warn(&format!("Invalid: {}", reason)),
    }

    if report.bot {
        ctx.output
            .warn("Decoy field is filled: the submission would be dropped silently");
    }

    if let Some(outcome) = report.outcome {
        ctx.output.kv("Outcome", outcome);
    }
    for toast in &report.notifications {
        ctx.output
            .list_item(&format!("{}: {}", toast.title, toast.description));
    }
}
