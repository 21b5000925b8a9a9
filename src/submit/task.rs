//! Fire-and-forget submission as an explicit background task.

use secrecy::SecretString;
use tokio::sync::oneshot;

use crate::aggregate::OnboardingAggregate;
use crate::error::SubmitError;
use crate::submit::SubmissionClient;

/// Handle to a spawned submission.
///
/// Await [`SubmissionHandle::outcome`] to observe the result, or drop
/// the handle to ignore it. The request runs to completion either way.
#[derive(Debug)]
pub struct SubmissionHandle {
    rx: oneshot::Receiver<Result<serde_json::Value, SubmitError>>,
}

impl SubmissionHandle {
    /// Wait for the submission to finish.
    pub async fn outcome(self) -> Result<serde_json::Value, SubmitError> {
        match self.rx.await {
            Ok(result) => result,
            // Sender dropped without reporting (runtime shutdown).
            Err(_) => Err(SubmitError::Cancelled),
        }
    }
}

/// Spawn the submission in the background.
///
/// The wizard never blocks on the backend. The spawned task runs the
/// request to completion, logs the outcome, and reports it over the
/// returned handle.
pub fn spawn_submission(
    client: SubmissionClient,
    aggregate: OnboardingAggregate,
    credential: Option<SecretString>,
) -> SubmissionHandle {
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let result = client.submit(&aggregate, credential.as_ref()).await;
        match &result {
            Ok(_) => tracing::info!("Onboarding submission accepted"),
            Err(e) => tracing::error!(error = %e, "Onboarding submission failed"),
        }
        // Receiver may already be gone; the outcome is dropped then.
        let _ = tx.send(result);
    });

    SubmissionHandle { rx }
}
