use async_trait::async_trait;

use super::error::SubmissionError;
use crate::models::early_access::{EarlyAccessRequest, EarlyAccessResponse};

/// Remote endpoint receiving early access requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EarlyAccessClient: Send + Sync {
    async fn submit(
        &self,
        request: EarlyAccessRequest,
    ) -> Result<EarlyAccessResponse, SubmissionError>;

    /// Asks the endpoint whether an address may join the waitlist.
    async fn validate_email(&self, email: String) -> Result<bool, SubmissionError>;
}
