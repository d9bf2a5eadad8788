//! Session countdowns.
//!
//! [`Countdown`] is the logical one-second timer each session owns: the host
//! calls `tick()` once per second and the session decrements whichever
//! countdown is live. A session holds exactly one `Countdown` field per timer
//! kind, so restarting it replaces the previous run and a cancelled countdown
//! ignores further ticks.
//!
//! [`Ticker`] is the real-time driver for hosts that want the engine to tick
//! itself: a tokio interval task that stops when its handle is cancelled or
//! dropped.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::{task::JoinHandle, time::MissedTickBehavior};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// Countdown not running; nothing happened.
    Idle,
    Running(u32),
    /// This tick brought the countdown to zero. Reported once.
    Expired,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    remaining: u32,
    running: bool,
}

impl Countdown {
    /// (Re)start at `seconds`, replacing any previous run.
    pub fn start(&mut self, seconds: u32) {
        self.remaining = seconds;
        self.running = seconds > 0;
    }

    pub fn cancel(&mut self) {
        self.running = false;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn tick(&mut self) -> TickResult {
        if !self.running {
            return TickResult::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            TickResult::Expired
        } else {
            TickResult::Running(self.remaining)
        }
    }
}

/// Handle to a repeating tokio task. Aborts the task on `cancel` or drop.
#[derive(Debug)]
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Call `on_tick` every `period` (first call after one period) until it
    /// returns `false`. Must be called from within a tokio runtime.
    pub fn spawn<F>(period: Duration, mut on_tick: F) -> Ticker
    where
        F: FnMut() -> bool + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(start, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if !on_tick() {
                    break;
                }
            }
        });
        Ticker { handle }
    }

    /// One tick per second.
    pub fn every_second<F>(on_tick: F) -> Ticker
    where
        F: FnMut() -> bool + Send + 'static,
    {
        Ticker::spawn(Duration::from_secs(1), on_tick)
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
