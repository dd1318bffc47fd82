use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use super::client::EarlyAccessClient;
use super::error::SubmissionError;
use crate::models::early_access::{EarlyAccessRequest, EarlyAccessResponse};
use crate::services::validation::validate_name;

pub const ACCESS_CODE_PREFIX: &str = "IAIAIN-";
pub const SUCCESS_MESSAGE: &str = "Thank you for your interest! Check your email for next steps.";

/// Stand-in for the waitlist backend. Accepts every well-formed request
/// after a configurable delay and hands out a random access code.
#[derive(Debug, Clone, Default)]
pub struct SimulatedEarlyAccessClient {
    latency: Duration,
}

impl SimulatedEarlyAccessClient {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    fn generate_access_code() -> String {
        let code: u32 = rand::thread_rng().gen_range(100_000..1_000_000);
        format!("{}{}", ACCESS_CODE_PREFIX, code)
    }
}

#[async_trait]
impl EarlyAccessClient for SimulatedEarlyAccessClient {
    async fn submit(
        &self,
        request: EarlyAccessRequest,
    ) -> Result<EarlyAccessResponse, SubmissionError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if let Some(message) = validate_name(&request.full_name).into_error() {
            return Err(SubmissionError::InvalidInput(message));
        }

        let access_code = Self::generate_access_code();
        log::info!(
            "Simulated endpoint accepted early access request ({} as {})",
            request.institution,
            request.role
        );

        Ok(EarlyAccessResponse {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            access_code: Some(access_code),
        })
    }

    async fn validate_email(&self, _email: String) -> Result<bool, SubmissionError> {
        Ok(true)
    }
}
