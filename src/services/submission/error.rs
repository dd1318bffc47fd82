use thiserror::Error;

/// Failures from the early access flow. The display text is shown to the
/// user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The request was rejected before or by the endpoint because of its content.
    #[error("{0}")]
    InvalidInput(String),
    /// The endpoint could not process the request.
    #[error("{0}")]
    Failed(String),
}

impl SubmissionError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
