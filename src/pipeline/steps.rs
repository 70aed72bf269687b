use tokio::sync::watch;
use tokio::time::{sleep, Duration};
use tracing::{debug, info};

use crate::types::ProcessingStatus;
use crate::TARGET_PIPELINE;

/// A named step of the processing sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStep {
    pub label: &'static str,
    pub progress: u8,
}

const fn step(label: &'static str, progress: u8) -> ProcessingStep {
    ProcessingStep { label, progress }
}

pub const PROCESSING_STEPS: [ProcessingStep; 8] = [
    step("Connecting to Andhra Pradesh news sources...", 10),
    step("Fetching articles from regional and national media...", 20),
    step("Analyzing relevance to AP State Police operations...", 35),
    step("Processing weather and coastal security data...", 50),
    step("Clustering articles by operational categories...", 65),
    step("Generating district-wise comparative analysis...", 80),
    step("Creating intelligence alerts and recommendations...", 90),
    step("Finalizing AP State Police daily digest...", 100),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingOutcome {
    Completed,
    /// Cancelled while announcing the step at this index.
    Cancelled { at_step: usize },
}

impl ProcessingOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, ProcessingOutcome::Completed)
    }
}

/// Announces each step on `status_tx`, pausing `delay` after each one.
///
/// Returns as soon as `cancel_rx` reads `true`, either before a step starts or
/// while waiting out its pause. A zero `delay` runs the whole sequence without
/// touching the timer. Dropping the cancel sender is not a cancellation.
pub async fn run_steps(
    steps: &[ProcessingStep],
    delay: Duration,
    status_tx: &watch::Sender<Option<ProcessingStatus>>,
    cancel_rx: &mut watch::Receiver<bool>,
) -> ProcessingOutcome {
    for (index, step) in steps.iter().enumerate() {
        if *cancel_rx.borrow() {
            return cancelled(index, step, status_tx);
        }

        debug!(target: TARGET_PIPELINE, "[{}%] {}", step.progress, step.label);
        status_tx.send_replace(Some(ProcessingStatus {
            step: step.label.to_string(),
            progress: step.progress,
            is_complete: false,
            error: None,
        }));

        if delay.is_zero() {
            continue;
        }

        let pause = sleep(delay);
        tokio::pin!(pause);
        loop {
            tokio::select! {
                _ = &mut pause => break,
                changed = cancel_rx.changed() => {
                    match changed {
                        Ok(()) if *cancel_rx.borrow_and_update() => {
                            return cancelled(index, step, status_tx);
                        }
                        Ok(()) => continue,
                        // Sender gone: nobody can cancel any more, just finish the pause.
                        Err(_) => {
                            (&mut pause).await;
                            break;
                        }
                    }
                }
            }
        }
    }

    let last = steps.last().map(|s| s.label).unwrap_or_default();
    status_tx.send_replace(Some(ProcessingStatus {
        step: last.to_string(),
        progress: 100,
        is_complete: true,
        error: None,
    }));
    info!(target: TARGET_PIPELINE, "Processing sequence complete ({} steps)", steps.len());
    ProcessingOutcome::Completed
}

fn cancelled(
    index: usize,
    step: &ProcessingStep,
    status_tx: &watch::Sender<Option<ProcessingStatus>>,
) -> ProcessingOutcome {
    info!(target: TARGET_PIPELINE, "Processing cancelled at step {}: {}", index + 1, step.label);
    status_tx.send_replace(Some(ProcessingStatus {
        step: step.label.to_string(),
        progress: step.progress,
        is_complete: false,
        error: Some("cancelled".to_string()),
    }));
    ProcessingOutcome::Cancelled { at_step: index }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_progress_is_increasing() {
        assert!(PROCESSING_STEPS
            .windows(2)
            .all(|w| w[0].progress < w[1].progress));
        assert_eq!(PROCESSING_STEPS.last().map(|s| s.progress), Some(100));
    }

    #[tokio::test]
    async fn test_zero_delay_completes() {
        let (status_tx, mut status_rx) = watch::channel(None);
        let (_cancel_tx, mut cancel_rx) = watch::channel(false);

        let outcome =
            run_steps(&PROCESSING_STEPS, Duration::ZERO, &status_tx, &mut cancel_rx).await;
        assert_eq!(outcome, ProcessingOutcome::Completed);

        let status = status_rx.borrow_and_update().clone().unwrap();
        assert!(status.is_complete);
        assert_eq!(status.progress, 100);
        assert!(status.error.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_steps_observed_in_order_with_delay() {
        let (status_tx, mut status_rx) = watch::channel(None);
        let (_cancel_tx, mut cancel_rx) = watch::channel(false);

        let runner = tokio::spawn(async move {
            run_steps(
                &PROCESSING_STEPS,
                Duration::from_millis(900),
                &status_tx,
                &mut cancel_rx,
            )
            .await
        });

        let mut progress = Vec::new();
        while status_rx.changed().await.is_ok() {
            let status = status_rx.borrow_and_update().clone().unwrap();
            if status.is_complete {
                break;
            }
            progress.push(status.progress);
        }

        assert_eq!(runner.await.unwrap(), ProcessingOutcome::Completed);
        assert_eq!(progress, vec![10, 20, 35, 50, 65, 80, 90, 100]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_pause_stops_sequence() {
        let (status_tx, status_rx) = watch::channel(None);
        let (cancel_tx, mut cancel_rx) = watch::channel(false);

        let runner = tokio::spawn(async move {
            run_steps(
                &PROCESSING_STEPS,
                Duration::from_millis(900),
                &status_tx,
                &mut cancel_rx,
            )
            .await
        });

        // Land in the middle of the third step's pause.
        tokio::time::sleep(Duration::from_millis(2 * 900 + 450)).await;
        cancel_tx.send(true).unwrap();

        assert_eq!(
            runner.await.unwrap(),
            ProcessingOutcome::Cancelled { at_step: 2 }
        );
        let last = status_rx.borrow().clone().unwrap();
        assert_eq!(last.progress, 35);
        assert_eq!(last.error.as_deref(), Some("cancelled"));
        assert!(!last.is_complete);
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let (status_tx, _status_rx) = watch::channel(None);
        let (_cancel_tx, mut cancel_rx) = watch::channel(true);

        let outcome =
            run_steps(&PROCESSING_STEPS, Duration::ZERO, &status_tx, &mut cancel_rx).await;
        assert_eq!(outcome, ProcessingOutcome::Cancelled { at_step: 0 });
    }
}
