//! OnboardingFlow: coordinates step sequencing, answer writes, and the
//! handoff to the processing screen.

use std::sync::Arc;

use secrecy::SecretString;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::aggregate::{DebtSheet, collect};
use crate::config::ProgressConfig;
use crate::error::FlowError;
use crate::session::{SessionStore, clear_responses, field_keys};
use crate::submit::{SubmissionClient, SubmissionHandle, spawn_submission};

use super::progress::{ProgressStream, spawn_progress};
use super::step::{GoalChoice, WizardStep};

/// Everything the processing screen needs once the wizard hands off.
pub struct ProcessingHandles {
    /// Simulated indicator events, ending with
    /// [`super::ProgressUpdate::Done`].
    pub progress: ProgressStream,
    /// Outcome of the background submission.
    pub submission: SubmissionHandle,
}

impl std::fmt::Debug for ProcessingHandles {
    // The progress stream is a boxed trait object with nothing to show.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessingHandles")
            .field("submission", &self.submission)
            .finish_non_exhaustive()
    }
}

/// Coordinates the onboarding wizard: one step at a time, validated
/// per-step writers, and the handoff to processing.
///
/// Every answer lands in the session store under its fixed key, so a
/// flow rebuilt over the same store picks up where the user left off.
pub struct OnboardingFlow {
    store: Arc<dyn SessionStore>,
    step: RwLock<WizardStep>,
    session_id: Uuid,
}

impl OnboardingFlow {
    /// Start a wizard over `store`, at the first step.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        let session_id = Uuid::new_v4();
        tracing::debug!(session = %session_id, "Onboarding wizard started");
        Self {
            store,
            step: RwLock::new(WizardStep::default()),
            session_id,
        }
    }

    /// The id this wizard run carries in log lines.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// The step the wizard is currently on.
    pub async fn current_step(&self) -> WizardStep {
        *self.step.read().await
    }

    /// The stored answer for a data step, if any. Lets a screen prefill
    /// its input after back navigation.
    pub async fn answer(&self, step: WizardStep) -> Option<String> {
        let key = step.field_key()?;
        self.store.get(key).await
    }

    /// Record the user's first name and advance.
    pub async fn submit_name(&self, name: &str) -> Result<WizardStep, FlowError> {
        self.write_answer(WizardStep::Name, field_keys::FIRST_NAME, name)
            .await
    }

    /// Record the selected motivation and advance.
    pub async fn choose_goal(&self, goal: GoalChoice) -> Result<WizardStep, FlowError> {
        self.write_answer(WizardStep::Goal, field_keys::GOAL, goal.label())
            .await
    }

    /// Record monthly after-tax income and advance. The value is kept
    /// verbatim; no numeric validation.
    pub async fn submit_income(&self, income: &str) -> Result<WizardStep, FlowError> {
        self.write_answer(WizardStep::Income, field_keys::MONTHLY_INCOME, income)
            .await
    }

    /// Record monthly rent and advance.
    pub async fn submit_rent(&self, rent: &str) -> Result<WizardStep, FlowError> {
        self.write_answer(WizardStep::Rent, field_keys::MONTHLY_RENT, rent)
            .await
    }

    /// Record the debt selection. At least one category must carry an
    /// amount; the explicit no-debt choice goes through
    /// [`OnboardingFlow::submit_no_debts`].
    ///
    /// The wizard stays on the debts step; continuing into processing
    /// is [`OnboardingFlow::begin_processing`].
    pub async fn submit_debts(&self, sheet: &DebtSheet) -> Result<WizardStep, FlowError> {
        if sheet.is_empty() {
            return Err(FlowError::EmptyAnswer {
                step: WizardStep::Debts,
            });
        }
        self.write_answer(WizardStep::Debts, field_keys::USER_DEBTS, &sheet.to_stored_json())
            .await
    }

    /// Record the explicit "I don't currently have debt" choice.
    pub async fn submit_no_debts(&self) -> Result<WizardStep, FlowError> {
        self.write_answer(WizardStep::Debts, field_keys::USER_DEBTS, "{}")
            .await
    }

    /// Step back to the previous data step. The answer of the step we
    /// leave stays stored; resubmitting simply overwrites it.
    pub async fn go_back(&self) -> Result<WizardStep, FlowError> {
        let mut current = self.step.write().await;
        let from = *current;
        let prev = from
            .prev()
            .ok_or(FlowError::NoPreviousStep { current: from })?;
        *current = prev;
        tracing::info!(session = %self.session_id, from = %from, to = %prev, "Wizard stepped back");
        Ok(prev)
    }

    /// Collect the stored answers, start the background submission, and
    /// move to the processing step.
    ///
    /// Requires the debts question to be answered, via
    /// [`OnboardingFlow::submit_debts`] or
    /// [`OnboardingFlow::submit_no_debts`]; like every other continue
    /// action, this one is gated on its step's stored field.
    ///
    /// The submission never blocks the wizard: it runs in its own task
    /// and reports over the returned handle. The progress stream is the
    /// simulated indicator, on its own clock.
    pub async fn begin_processing(
        &self,
        client: &SubmissionClient,
        credential: Option<SecretString>,
        progress: ProgressConfig,
    ) -> Result<ProcessingHandles, FlowError> {
        let mut current = self.step.write().await;
        if *current != WizardStep::Debts {
            return Err(FlowError::StepMismatch {
                expected: WizardStep::Debts,
                current: *current,
            });
        }

        let answered = self
            .store
            .get(field_keys::USER_DEBTS)
            .await
            .is_some_and(|value| !value.is_empty());
        if !answered {
            return Err(FlowError::EmptyAnswer {
                step: WizardStep::Debts,
            });
        }

        let aggregate = collect(self.store.as_ref()).await;
        tracing::info!(
            session = %self.session_id,
            answers = aggregate.responses.len(),
            "Collected onboarding answers; submitting in the background"
        );

        let submission = spawn_submission(client.clone(), aggregate, credential);
        let progress = spawn_progress(progress);

        *current = WizardStep::Processing;
        Ok(ProcessingHandles {
            progress,
            submission,
        })
    }

    /// Mark the wizard complete. Call when the progress ticker signals
    /// done; the submission outcome never gates this.
    pub async fn finish(&self) -> Result<WizardStep, FlowError> {
        let mut current = self.step.write().await;
        if *current != WizardStep::Processing {
            return Err(FlowError::StepMismatch {
                expected: WizardStep::Processing,
                current: *current,
            });
        }
        *current = WizardStep::Complete;
        tracing::info!(session = %self.session_id, "Onboarding wizard complete");
        Ok(*current)
    }

    /// Clear every stored answer and return to the first step.
    pub async fn reset(&self) -> Result<(), FlowError> {
        clear_responses(self.store.as_ref()).await?;
        let mut current = self.step.write().await;
        *current = WizardStep::Name;
        tracing::info!(session = %self.session_id, "Onboarding answers cleared");
        Ok(())
    }

    /// Validate and store one data-step answer, then advance.
    async fn write_answer(
        &self,
        step: WizardStep,
        key: &str,
        value: &str,
    ) -> Result<WizardStep, FlowError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(FlowError::EmptyAnswer { step });
        }

        let mut current = self.step.write().await;
        if *current != step {
            return Err(FlowError::StepMismatch {
                expected: step,
                current: *current,
            });
        }

        self.store.set(key, value).await?;

        // Moving into processing is begin_processing's job, so the
        // debts step holds until then.
        if let Some(next) = step.next().filter(|n| *n != WizardStep::Processing) {
            *current = next;
            tracing::info!(session = %self.session_id, from = %step, to = %next, "Wizard step advanced");
        }
        Ok(*current)
    }
}
