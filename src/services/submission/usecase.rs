use std::sync::Arc;

use super::client::EarlyAccessClient;
use super::error::SubmissionError;
use crate::models::early_access::{EarlyAccessRequest, EarlyAccessResponse};
use crate::services::validation::{
    is_blank, validate_email, ValidationResult, EMAIL_REQUIRED_MESSAGE,
};

/// Re-checks a request and forwards it to the endpoint exactly once.
#[derive(Clone)]
pub struct SubmitEarlyAccess {
    client: Arc<dyn EarlyAccessClient>,
}

impl SubmitEarlyAccess {
    pub fn new(client: Arc<dyn EarlyAccessClient>) -> Self {
        Self { client }
    }

    pub async fn execute(
        &self,
        request: EarlyAccessRequest,
    ) -> Result<EarlyAccessResponse, SubmissionError> {
        if is_blank(&request.full_name) {
            return Err(SubmissionError::invalid_input("Full name is required"));
        }
        if is_blank(&request.email) {
            return Err(SubmissionError::invalid_input(EMAIL_REQUIRED_MESSAGE));
        }
        if !request.agree_to_terms {
            return Err(SubmissionError::invalid_input("You must agree to terms"));
        }
        if let ValidationResult::Invalid(message) = validate_email(&request.email) {
            return Err(SubmissionError::InvalidInput(message));
        }

        let response = self.client.submit(request).await?;
        if !response.success {
            return Err(SubmissionError::Failed(response.message));
        }
        Ok(response)
    }
}

/// Format check followed by the endpoint's eligibility check.
#[derive(Clone)]
pub struct ValidateEmail {
    client: Arc<dyn EarlyAccessClient>,
}

impl ValidateEmail {
    pub fn new(client: Arc<dyn EarlyAccessClient>) -> Self {
        Self { client }
    }

    /// `Ok(false)` for a blank address, `InvalidInput` for a malformed one,
    /// otherwise the endpoint's verdict.
    pub async fn execute(&self, email: &str) -> Result<bool, SubmissionError> {
        if is_blank(email) {
            return Ok(false);
        }
        if let ValidationResult::Invalid(message) = validate_email(email) {
            return Err(SubmissionError::InvalidInput(message));
        }
        self.client.validate_email(email.to_string()).await
    }
}
