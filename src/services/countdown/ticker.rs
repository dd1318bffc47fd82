use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use super::engine::remaining;
use crate::models::countdown::RemainingDuration;
use crate::models::timestamp::CivilTimestamp;
use crate::services::clock::Clock;

/// Shortest period the ticker runs at; shorter requests are raised to it.
pub const MIN_TICK_PERIOD: Duration = Duration::from_millis(1);

struct ActiveTicker {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

/// Periodic countdown task. At most one ticking task exists per ticker;
/// every tick recomputes the remaining time from a fresh clock reading.
#[derive(Default)]
pub struct CountdownTicker {
    active: Option<ActiveTicker>,
}

impl CountdownTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts ticking, cancelling any task already running. The first tick
    /// fires immediately; ticking ends after `on_tick` receives zero.
    /// A period below [`MIN_TICK_PERIOD`] is raised to it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<F>(
        &mut self,
        clock: Arc<dyn Clock>,
        target: CivilTimestamp,
        period: Duration,
        on_tick: F,
    ) where
        F: Fn(RemainingDuration) + Send + 'static,
    {
        if self.stop() {
            log::debug!("Restarting countdown ticker");
        }

        if period < MIN_TICK_PERIOD {
            log::warn!(
                "Countdown period {:?} is too short; using {:?}",
                period,
                MIN_TICK_PERIOD
            );
        }
        let period = period.max(MIN_TICK_PERIOD);

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    _ = interval.tick() => {}
                }

                let value = remaining(clock.now(), target);
                if token.is_cancelled() {
                    break;
                }
                log::debug!("Countdown tick: {}", value);
                on_tick(value);

                if value.is_zero() {
                    log::info!("Countdown reached launch target {}", target);
                    break;
                }
            }
        });

        log::info!(
            "Countdown started towards {} ({}ms period)",
            target,
            period.as_millis()
        );
        self.active = Some(ActiveTicker { cancel, handle });
    }

    /// Cancels the running task, if any. Returns true if one was still running.
    pub fn stop(&mut self) -> bool {
        match self.active.take() {
            Some(active) => {
                let was_running = !active.handle.is_finished();
                active.cancel.cancel();
                active.handle.abort();
                was_running
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| !active.handle.is_finished())
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
