//! Job list poller
//!
//! Refreshes the job list once right away and then on a fixed interval,
//! for as long as its [`PollerHandle`] is alive.

use tokio::task::JoinHandle;
use tokio::time::{self, Duration, MissedTickBehavior};
use tracing::{debug, info};

use crate::view::JobFinder;

/// How often an active view reloads the job list
pub const POLL_INTERVAL: Duration = Duration::from_millis(5000);

/// Periodically refreshes the job list of a view
pub struct JobPoller {
    finder: JobFinder,
    interval: Duration,
}

impl JobPoller {
    /// Creates a new job poller
    pub fn new(finder: JobFinder, interval: Duration) -> Self {
        Self { finder, interval }
    }

    /// Spawns the polling loop
    ///
    /// The first refresh happens immediately. The loop runs until the
    /// returned handle is stopped or dropped.
    pub fn start(self) -> PollerHandle {
        info!("Starting job poller (interval: {:?})", self.interval);
        PollerHandle {
            task: tokio::spawn(async move { self.run().await }),
        }
    }

    async fn run(&self) {
        let mut interval = time::interval(self.interval);
        // A slow refresh must not be followed by a burst of catch-up polls.
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;

            debug!("Polling for jobs");
            self.finder.refresh_jobs().await;
        }
    }
}

/// Owner of a running poll loop
///
/// Dropping the handle cancels the loop, so a torn-down view leaves no
/// timer behind.
pub struct PollerHandle {
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Stops polling
    pub fn stop(self) {
        debug!("Stopping job poller");
        // Drop aborts the task.
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
