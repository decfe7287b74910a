use std::time::Duration;
use tokio::time::{Interval, MissedTickBehavior, interval};

/// Fixed-period tick source that can be stopped and restarted.
///
/// The timer itself is created lazily on the first `tick()` after `start()`,
/// so starting and stopping need no runtime.
pub struct TickScheduler {
    period: Duration,
    running: bool,
    timer: Option<Interval>,
}

impl TickScheduler {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            running: false,
            timer: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// (Re)start the chain; the first tick fires immediately
    pub fn start(&mut self) {
        self.running = true;
        self.timer = None;
    }

    /// Drop the chain; pending `tick()` calls never complete
    pub fn stop(&mut self) {
        self.running = false;
        self.timer = None;
    }

    /// Wait for the next tick. Never resolves while stopped.
    pub async fn tick(&mut self) {
        if !self.running {
            return std::future::pending().await;
        }

        let period = self.period;
        let timer = self.timer.get_or_insert_with(|| {
            let mut timer = interval(period);
            // A slow frame pushes the schedule back instead of bursting ticks
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            timer
        });
        timer.tick().await;
    }
}
