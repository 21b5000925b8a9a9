//! Submission of the aggregate to the Mono backend.

pub mod client;
pub mod task;

pub use client::{SUBMIT_PATH, SubmissionClient};
pub use task::{SubmissionHandle, spawn_submission};
