//! Errors raised while serving a request.

/// Error type for workload operations.
#[derive(Debug, thiserror::Error)]
pub enum WorkloadError {
    #[error("Shell not sent before sections")]
    ShellNotSent,

    #[error("Streaming error: {0}")]
    StreamError(String),

    #[error("Bad request body: {0}")]
    BadRequest(String),

    #[error("Section '{0}' failed: {1}")]
    SectionFailed(String, String),
}
