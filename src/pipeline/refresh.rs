use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::TARGET_PIPELINE;

/// Sent once per period while auto-refresh is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTick {
    /// 1-based count since the timer was enabled.
    pub sequence: u64,
}

/// Periodic resynthesis timer.
///
/// While enabled a background task sends a `RefreshTick` every `period`,
/// the first one a full period after enabling. Disabling (or dropping the
/// timer) aborts the task, so at most a tick already in the channel can
/// still be observed afterwards.
pub struct AutoRefresh {
    period: Duration,
    handle: Option<JoinHandle<()>>,
}

impl AutoRefresh {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            handle: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_enabled(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Starts the timer. Enabling an enabled timer restarts its period.
    pub fn enable(&mut self, tx: mpsc::Sender<RefreshTick>) {
        self.disable();

        let period = self.period;
        info!(target: TARGET_PIPELINE, "Auto-refresh enabled every {:?}", period);
        self.handle = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut sequence = 0;
            loop {
                ticker.tick().await;
                sequence += 1;
                debug!(target: TARGET_PIPELINE, "Auto-refresh tick {}", sequence);
                if tx.send(RefreshTick { sequence }).await.is_err() {
                    // Receiver dropped: the dashboard is gone.
                    break;
                }
            }
        }));
    }

    pub fn disable(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!(target: TARGET_PIPELINE, "Auto-refresh disabled");
        }
    }

    /// Flips the timer and returns whether it is now enabled.
    pub fn toggle(&mut self, tx: mpsc::Sender<RefreshTick>) -> bool {
        if self.is_enabled() {
            self.disable();
            false
        } else {
            self.enable(tx);
            true
        }
    }
}

impl Drop for AutoRefresh {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    const PERIOD: Duration = Duration::from_secs(300);

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_period() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut refresh = AutoRefresh::new(PERIOD);
        refresh.enable(tx);
        assert!(refresh.is_enabled());

        let start = Instant::now();
        assert_eq!(rx.recv().await, Some(RefreshTick { sequence: 1 }));
        assert_eq!(start.elapsed(), PERIOD);
        assert_eq!(rx.recv().await, Some(RefreshTick { sequence: 2 }));
        assert_eq!(start.elapsed(), PERIOD * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_off_clears_timer() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut refresh = AutoRefresh::new(PERIOD);

        assert!(refresh.toggle(tx.clone()));
        assert_eq!(rx.recv().await.map(|t| t.sequence), Some(1));

        assert!(!refresh.toggle(tx));
        assert!(!refresh.is_enabled());

        let mut after_off = 0;
        while let Ok(Some(_)) = timeout(PERIOD * 3, rx.recv()).await {
            after_off += 1;
        }
        assert!(after_off <= 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_ticks() {
        let (tx, mut rx) = mpsc::channel(4);
        {
            let mut refresh = AutoRefresh::new(PERIOD);
            refresh.enable(tx);
        }
        // The aborted task drops the only sender.
        assert_eq!(timeout(PERIOD * 2, rx.recv()).await, Ok(None));
    }
}
