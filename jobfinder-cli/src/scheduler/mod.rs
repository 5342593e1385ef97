//! Scheduler layer
//!
//! Keeps the job list of an active view fresh by polling the bridge.

pub mod poller;

pub use poller::{JobPoller, POLL_INTERVAL, PollerHandle};
