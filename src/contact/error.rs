use thiserror::Error;

use super::form::FieldErrors;

/// One or more fields failed their rule. Carries the full per-field map so the
/// form can show every message at once.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("contact form has invalid fields")]
pub struct ValidationError {
    pub errors: FieldErrors,
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("could not encode relay request: {0}")]
    Encode(String),
    #[error("relay unreachable: {0}")]
    Transport(String),
    #[error("relay rejected message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Why `begin_submit` handed back no message to send.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    Busy,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}
