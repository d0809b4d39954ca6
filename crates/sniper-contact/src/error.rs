//! Contact pipeline error types.

use thiserror::Error;

use crate::gateway::GatewayError;
use crate::validation::InvalidReason;

/// Why a submission did not result in a sent email.
#[derive(Error, Debug)]
pub enum ContactError {
    /// The user's input failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(InvalidReason),

    /// The decoy field was filled; the submission was dropped.
    #[error("Submission dropped by honeypot")]
    BotSuspected,

    /// The deployment lacks gateway credentials.
    #[error("Email gateway not configured: missing {}", .missing.join(", "))]
    Configuration { missing: Vec<&'static str> },

    /// The gateway call failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// A send for this form is already in flight.
    #[error("A submission is already in progress")]
    AlreadySubmitting,
}

impl ContactError {
    /// Short machine-readable label.
    pub fn code(&self) -> &'static str {
        match self {
            ContactError::InvalidInput(_) => "invalid",
            ContactError::BotSuspected => "ignored",
            ContactError::Configuration { .. } => "misconfigured",
            ContactError::Gateway(_) => "failed",
            ContactError::AlreadySubmitting => "busy",
        }
    }
}

impl From<InvalidReason> for ContactError {
    fn from(reason: InvalidReason) -> Self {
        ContactError::InvalidInput(reason)
    }
}
