//! Error types for the onboarding core.

use crate::wizard::WizardStep;

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Session store error: {0}")]
    Store(#[from] StoreError),

    #[error("Wizard flow error: {0}")]
    Flow(#[from] FlowError),

    #[error("Submission error: {0}")]
    Submit(#[from] SubmitError),
}

/// Session persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Wizard sequencing and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("Empty answer for step {step}")]
    EmptyAnswer { step: WizardStep },

    #[error("Expected step {expected}, currently at {current}")]
    StepMismatch {
        expected: WizardStep,
        current: WizardStep,
    },

    #[error("No step before {current}")]
    NoPreviousStep { current: WizardStep },

    #[error("Session store error: {0}")]
    Store(#[from] StoreError),
}

/// Backend submission errors.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Backend returned status {status}")]
    Status { status: reqwest::StatusCode },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Submission task was cancelled before completing")]
    Cancelled,
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
