//! Live contest countdowns
//!
//! [`Countdown::at`] computes a single snapshot. [`CountdownTimer`] keeps
//! one up to date at 1 Hz on a background task and stops on its own once
//! the contest has ended. Stopping (or dropping) the timer cancels the
//! task, so nothing is published after teardown.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::constants::COUNTDOWN_TICK_MS;
use crate::models::ContestPhase;
use crate::utils::time::{Clock, DurationParts, duration_parts, millis_until};

/// Time remaining until the next phase boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Remaining {
        phase: ContestPhase,
        parts: DurationParts,
    },
    Ended,
}

impl Countdown {
    pub fn at(now: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        let window = ContestPhase::classify(now, start, end);
        match window.target {
            Some(target) => Self::Remaining {
                phase: window.phase,
                parts: duration_parts(millis_until(now, target)),
            },
            None => Self::Ended,
        }
    }

    pub fn is_ended(&self) -> bool {
        matches!(self, Self::Ended)
    }

    pub fn phase(&self) -> ContestPhase {
        match self {
            Self::Remaining { phase, .. } => *phase,
            Self::Ended => ContestPhase::Ended,
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remaining { phase, parts } => write!(f, "{}: {}", phase.countdown_label(), parts),
            Self::Ended => write!(f, "{}", ContestPhase::Ended.countdown_label()),
        }
    }
}

/// Countdown recomputed every second on a background task
pub struct CountdownTimer {
    receiver: watch::Receiver<Countdown>,
    handle: Option<JoinHandle<()>>,
}

impl CountdownTimer {
    /// Start ticking. Must be called from within a tokio runtime.
    ///
    /// A contest that has already ended gets no task at all.
    pub fn start(clock: Arc<dyn Clock>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        let initial = Countdown::at(clock.now(), start, end);
        let (sender, receiver) = watch::channel(initial);

        let handle = if initial.is_ended() {
            None
        } else {
            Some(tokio::spawn(tick(clock, start, end, sender)))
        };

        tracing::debug!(%start, %end, countdown = %initial, "countdown started");
        Self { receiver, handle }
    }

    /// Latest published value
    pub fn current(&self) -> Countdown {
        *self.receiver.borrow()
    }

    /// A receiver that is notified on every tick
    pub fn subscribe(&self) -> watch::Receiver<Countdown> {
        self.receiver.clone()
    }

    /// Whether the background task is still scheduled
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Cancel further ticks. Idempotent.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("countdown stopped");
        }
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn tick(
    clock: Arc<dyn Clock>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    sender: watch::Sender<Countdown>,
) {
    let mut interval = tokio::time::interval(Duration::from_millis(COUNTDOWN_TICK_MS));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // first tick completes immediately; the initial value is already published
    interval.tick().await;

    loop {
        interval.tick().await;
        let next = Countdown::at(clock.now(), start, end);
        if sender.send(next).is_err() {
            break;
        }
        if next.is_ended() {
            tracing::debug!("contest ended, countdown finished");
            break;
        }
    }
}
