//! Wall-clock sampling
//!
//! [`TimeSampler`] owns a background task that reads a [`Clock`] on a fixed
//! cadence and posts each reading as [`RawMsg::TimeSampled`]. The task lives
//! exactly as long as the sampler.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{Local, NaiveDateTime, TimeDelta};
use tokio::{sync::mpsc, task::JoinHandle, time::MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::core::raw_msg::RawMsg;

/// Source of the current local time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Host-local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        match self.now.lock() {
            Ok(mut guard) => *guard = now,
            Err(poisoned) => *poisoned.into_inner() = now,
        }
    }

    pub fn advance(&self, by: TimeDelta) {
        let now = self.now();
        self.set(now + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        match self.now.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

/// Periodic clock reader bound to its owner's lifetime
pub struct TimeSampler {
    cancellation_token: CancellationToken,
    task: JoinHandle<()>,
}

impl TimeSampler {
    /// Start sampling. The first reading is sent immediately, then one per
    /// `interval`. Sampling ends on `stop()`, on drop, or once the receiver
    /// is gone.
    pub fn spawn(
        clock: Arc<dyn Clock>,
        interval: Duration,
        sender: mpsc::UnboundedSender<RawMsg>,
    ) -> Self {
        let cancellation_token = CancellationToken::new();
        let token = cancellation_token.clone();
        let period = interval.max(Duration::from_millis(1));

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        if sender.send(RawMsg::TimeSampled(clock.now())).is_err() {
                            log::debug!("Time sampler receiver closed");
                            break;
                        }
                    }
                }
            }
        });
        log::debug!("Time sampler started every {period:?}");

        Self {
            cancellation_token,
            task,
        }
    }

    /// Cancel the sampling task; the sender is dropped with it.
    pub fn stop(&self) {
        self.cancellation_token.cancel();
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TimeSampler {
    fn drop(&mut self) {
        self.stop();
    }
}
