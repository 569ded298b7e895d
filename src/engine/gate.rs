//! Cooperative pause primitive
//!
//! The gate does not block on a wake signal. While the run is paused it sleeps for one
//! poll interval and looks again, so a pause flag flipped from another thread is noticed
//! within one interval. It also watches the run epoch and gives up as soon as the run it
//! was called for is no longer the active one.

use super::clock::Clock;
use super::constants::PAUSE_POLL_INTERVAL;
use super::controller::RunControl;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct SuspendGate {
    poll: Duration,
}

impl SuspendGate {
    pub fn new(poll: Duration) -> Self {
        SuspendGate { poll }
    }

    /// Wait until `run` is not paused.
    ///
    /// Returns `true` when the run may proceed and `false` when it has been superseded
    /// (reset, cancelled or replaced) and should stop without publishing anything else.
    pub fn wait_until_resumed(&self, control: &RunControl, run: u64, clock: &dyn Clock) -> bool {
        loop {
            if !control.is_current(run) {
                return false;
            }
            if !control.is_paused() {
                return true;
            }
            clock.sleep(self.poll);
        }
    }
}

impl Default for SuspendGate {
    fn default() -> Self {
        Self::new(PAUSE_POLL_INTERVAL)
    }
}
