mod client;
mod error;
mod simulated;
mod usecase;

#[cfg(test)]
pub(crate) use client::MockEarlyAccessClient;
pub use client::EarlyAccessClient;
pub use error::SubmissionError;
pub use simulated::{SimulatedEarlyAccessClient, ACCESS_CODE_PREFIX, SUCCESS_MESSAGE};
pub use usecase::{SubmitEarlyAccess, ValidateEmail};
