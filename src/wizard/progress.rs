//! Simulated processing indicator for the wizard's final screen.
//!
//! The indicator is a fixed-rate ticker, deliberately decoupled from
//! the real submission: it climbs to 100% at a steady pace, holds
//! there briefly, then signals completion. The submission runs in its
//! own task and never slows the screen down.

use std::pin::Pin;
use std::time::Duration;

use futures::{Stream, stream};
use tokio::sync::mpsc;

use crate::config::ProgressConfig;

/// Progress events emitted while the processing screen runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressUpdate {
    /// Percent complete, climbing to 100 in fixed steps.
    Percent(u8),
    /// The hold at 100% has elapsed; move on.
    Done,
}

/// Stream of progress events.
pub type ProgressStream = Pin<Box<dyn Stream<Item = ProgressUpdate> + Send>>;

/// Milestone copy for the processing screen.
///
/// Every milestone at or below the current percent counts as reached.
pub const MILESTONES: [(u8, &str); 5] = [
    (20, "Analyzing your income and expenses"),
    (40, "Calculating your debt strategy"),
    (60, "Setting up your budget categories"),
    (80, "Personalizing your experience"),
    (100, "Ready to take control!"),
];

/// The most recently reached milestone label, if any.
pub fn milestone_label(percent: u8) -> Option<&'static str> {
    MILESTONES
        .iter()
        .rev()
        .find(|(threshold, _)| percent >= *threshold)
        .map(|(_, label)| *label)
}

/// Spawn the progress ticker.
///
/// Emits `Percent` once per tick until 100, waits out the hold, then
/// emits `Done` and ends the stream. Dropping the stream stops the
/// ticker at its next send.
pub fn spawn_progress(config: ProgressConfig) -> ProgressStream {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        // Zero values from the environment would stall or panic.
        let step = config.step.max(1);
        let tick = config.tick.max(Duration::from_millis(1));

        let mut interval = tokio::time::interval(tick);
        // The first tick fires immediately; skip it so each percent
        // lands one full tick apart.
        interval.tick().await;

        let mut percent: u8 = 0;
        while percent < 100 {
            interval.tick().await;
            percent = percent.saturating_add(step).min(100);
            if tx.send(ProgressUpdate::Percent(percent)).is_err() {
                return;
            }
        }

        tokio::time::sleep(config.hold).await;
        let _ = tx.send(ProgressUpdate::Done);
    });

    let stream = stream::unfold(rx, |mut rx| async move {
        rx.recv().await.map(|update| (update, rx))
    });

    Box::pin(stream)
}
