//! Contact form pipeline for the SniperTrader site.
//!
//! A submission flows through:
//!
//! - **Validation** - required fields and a permissive email shape check
//! - **Honeypot** - a hidden decoy field; filled means a bot, dropped silently
//! - **Controller** - configuration check, the in-flight flag, the gateway
//!   call, and user feedback through a [`NotificationSink`]
//!
//! # Example
//!
//! ```rust,ignore
//! use sniper_contact::prelude::*;
//!
//! let mut controller = SubmissionController::new(config, gateway, ToastQueue::new())
//!     .with_site("snipertrader.online");
//!
//! controller.apply(ContactField::FullName, "Jane");
//! controller.apply(ContactField::Email, "jane@example.com");
//! controller.apply(ContactField::Message, "Interested in mentorship");
//!
//! match controller.submit().await {
//!     Ok(()) => assert!(controller.submission().is_empty()),
//!     Err(e) => eprintln!("not sent: {e}"),
//! }
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod honeypot;
pub mod notify;
pub mod submission;
pub mod validation;

pub use config::GatewayConfig;
pub use controller::{InFlight, SubmissionController, SubmissionFlag, SubmissionState};
pub use error::ContactError;
pub use gateway::{EmailGateway, GatewayError, GatewayRequest, TemplateParams};
pub use honeypot::is_bot;
pub use notify::{LogSink, Notification, NotificationKind, NotificationSink, ToastQueue};
pub use submission::{ContactField, ContactSubmission, FormEvent};
pub use validation::{is_valid_email, validate, InvalidReason, ValidationResult};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::GatewayConfig;
    pub use crate::controller::{SubmissionController, SubmissionFlag, SubmissionState};
    pub use crate::error::ContactError;
    pub use crate::gateway::{EmailGateway, GatewayError, GatewayRequest, TemplateParams};
    pub use crate::notify::{Notification, NotificationKind, NotificationSink, ToastQueue};
    pub use crate::submission::{ContactField, ContactSubmission, FormEvent};
    pub use crate::validation::{validate, InvalidReason, ValidationResult};
}
