//! Step controller: runs one [`Steppable`] at a time on a worker thread
//!
//! # Run lifecycle
//!
//! ```text
//! Idle ──start──▶ Running ◀──toggle_pause──▶ Paused
//!                   │                           │
//!                   ├──last step──▶ Completed   │
//!                   └──cancel/reset──▶ Cancelled ◀┘
//! ```
//!
//! All mutable run state (run state, pause flag, speed, epoch) lives in one
//! [`RunControl`] shared between the controller and its worker. Each run is tagged with
//! the epoch current when it started. Cancelling, resetting or starting a new run bumps
//! the epoch; a worker compares its tag after every suspension point and quietly exits
//! once it no longer matches, so a reset never lets stale frames through.
//!
//! Per step the worker waits at the [`SuspendGate`], publishes the snapshot, waits the
//! step's [`Pace`](super::speed::Pace) at the speed read at that moment, and checks the
//! epoch again.
//!
//! Two locks order what the sink sees. A snapshot is published while holding the publish
//! lock, and cancelling takes that lock before bumping the epoch, so once `cancel` or
//! `reset` returns no frame of the old run can arrive. Every run state change is made
//! and reported under the notify lock, so the sink receives state changes in the order
//! they happened. Lock order is publish, then notify, then the run slot.

use super::clock::{Clock, SystemClock};
use super::errors::StartOutcome;
use super::gate::SuspendGate;
use super::speed::{SpeedLevel, SpeedTable};
use crate::algorithms::{Outcome, Steppable};
use crate::snapshot::Published;
use log::{debug, error, info};
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Paused,
    Completed,
    Cancelled,
}

impl RunState {
    /// Running or Paused: a new run may not start
    pub fn is_active(self) -> bool {
        matches!(self, RunState::Running | RunState::Paused)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RunState::Idle => "Idle",
            RunState::Running => "Running",
            RunState::Paused => "Paused",
            RunState::Completed => "Completed",
            RunState::Cancelled => "Cancelled",
        };
        write!(f, "{}", label)
    }
}

/// Receiver of everything a run produces. Called from the worker thread.
///
/// `on_snapshot` may pause, resume or re-speed the run, but must not cancel or reset it.
pub trait VisualizationSink: Send + Sync {
    fn on_snapshot(&self, published: Published);
    fn on_run_state_change(&self, state: RunState);
    fn on_transient_error(&self, message: &str, duration: Duration);
    fn on_outcome(&self, outcome: &Outcome);
}

#[derive(Debug, Default)]
struct RunSlot {
    state: RunState,
    epoch: u64,
}

/// Shared run state: the single source of truth for pause, speed and run identity
#[derive(Debug)]
pub struct RunControl {
    slot: Mutex<RunSlot>,
    paused: AtomicBool,
    speed: AtomicU8,
}

impl RunControl {
    pub fn new() -> Self {
        RunControl {
            slot: Mutex::new(RunSlot::default()),
            paused: AtomicBool::new(false),
            speed: AtomicU8::new(SpeedLevel::default().to_u8()),
        }
    }

    fn slot(&self) -> MutexGuard<'_, RunSlot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> RunState {
        self.slot().state
    }

    /// Epoch of the most recent run
    pub fn epoch(&self) -> u64 {
        self.slot().epoch
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    /// Whether `run` is still the active run
    pub fn is_current(&self, run: u64) -> bool {
        let slot = self.slot();
        slot.epoch == run && slot.state.is_active()
    }

    pub fn speed(&self) -> SpeedLevel {
        SpeedLevel::from_u8(self.speed.load(Ordering::Acquire))
    }

    pub fn set_speed(&self, level: SpeedLevel) {
        self.speed.store(level.to_u8(), Ordering::Release);
    }

    /// Claim a new run; `None` if one is already active
    pub fn begin(&self) -> Option<u64> {
        let mut slot = self.slot();
        if slot.state.is_active() {
            return None;
        }
        slot.epoch += 1;
        slot.state = RunState::Running;
        self.paused.store(false, Ordering::Release);
        Some(slot.epoch)
    }

    /// Flip Running ⇄ Paused; returns the new state, or `None` if no run is active
    pub fn toggle_pause(&self) -> Option<RunState> {
        let mut slot = self.slot();
        let next = match slot.state {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
            _ => return None,
        };
        slot.state = next;
        self.paused
            .store(next == RunState::Paused, Ordering::Release);
        Some(next)
    }

    /// Mark `run` completed if it is still the active run
    pub fn complete(&self, run: u64) -> bool {
        let mut slot = self.slot();
        if slot.epoch != run || !slot.state.is_active() {
            return false;
        }
        slot.state = RunState::Completed;
        self.paused.store(false, Ordering::Release);
        true
    }

    /// Cancel the active run, if any, returning its epoch. Bumps the epoch so the
    /// run's worker stops at its next check.
    pub fn cancel(&self) -> Option<u64> {
        let mut slot = self.slot();
        if !slot.state.is_active() {
            return None;
        }
        let run = slot.epoch;
        slot.epoch += 1;
        slot.state = RunState::Cancelled;
        self.paused.store(false, Ordering::Release);
        Some(run)
    }

    /// Return to Idle; returns whether the state changed
    pub fn reset(&self) -> bool {
        let mut slot = self.slot();
        if slot.state.is_active() {
            slot.epoch += 1;
        }
        self.paused.store(false, Ordering::Release);
        let changed = slot.state != RunState::Idle;
        slot.state = RunState::Idle;
        changed
    }
}

impl Default for RunControl {
    fn default() -> Self {
        Self::new()
    }
}

struct Shared {
    control: RunControl,
    sink: Arc<dyn VisualizationSink>,
    publishing: Mutex<()>,
    notifying: Mutex<()>,
}

impl Shared {
    fn publish_lock(&self) -> MutexGuard<'_, ()> {
        self.publishing.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify_lock(&self) -> MutexGuard<'_, ()> {
        self.notifying.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Cloneable handle for pausing and re-speeding a run from other threads
#[derive(Clone)]
pub struct ControllerHandle {
    shared: Arc<Shared>,
}

impl ControllerHandle {
    pub fn state(&self) -> RunState {
        self.shared.control.state()
    }

    pub fn is_paused(&self) -> bool {
        self.shared.control.is_paused()
    }

    /// Pause a running run or resume a paused one; no effect otherwise
    pub fn toggle_pause(&self) -> Option<RunState> {
        let _notify = self.shared.notify_lock();
        let next = self.shared.control.toggle_pause()?;
        debug!("Run {} is now {}", self.shared.control.epoch(), next);
        self.shared.sink.on_run_state_change(next);
        Some(next)
    }

    /// Takes effect at the next wait
    pub fn set_speed(&self, level: SpeedLevel) {
        self.shared.control.set_speed(level);
    }
}

/// Drives one algorithm at a time and reports through a [`VisualizationSink`]
pub struct StepController {
    shared: Arc<Shared>,
    clock: Arc<dyn Clock>,
    gate: SuspendGate,
    worker: Option<JoinHandle<()>>,
}

impl StepController {
    /// Controller with real-time waits
    pub fn new(sink: Arc<dyn VisualizationSink>) -> Self {
        Self::with_clock(sink, Arc::new(SystemClock))
    }

    pub fn with_clock(sink: Arc<dyn VisualizationSink>, clock: Arc<dyn Clock>) -> Self {
        StepController {
            shared: Arc::new(Shared {
                control: RunControl::new(),
                sink,
                publishing: Mutex::new(()),
                notifying: Mutex::new(()),
            }),
            clock,
            gate: SuspendGate::default(),
            worker: None,
        }
    }

    pub fn handle(&self) -> ControllerHandle {
        ControllerHandle {
            shared: Arc::clone(&self.shared),
        }
    }

    pub fn sink(&self) -> &Arc<dyn VisualizationSink> {
        &self.shared.sink
    }

    pub fn state(&self) -> RunState {
        self.shared.control.state()
    }

    /// Epoch of the most recent run; snapshots carry it as `Published::run`
    pub fn current_run(&self) -> u64 {
        self.shared.control.epoch()
    }

    pub fn is_paused(&self) -> bool {
        self.shared.control.is_paused()
    }

    pub fn speed(&self) -> SpeedLevel {
        self.shared.control.speed()
    }

    pub fn set_speed(&self, level: SpeedLevel) {
        self.handle().set_speed(level);
    }

    pub fn toggle_pause(&self) -> Option<RunState> {
        self.handle().toggle_pause()
    }

    /// Start `algorithm` paced by `speeds`. Ignored while another run is active.
    pub fn start(&mut self, algorithm: Box<dyn Steppable>, speeds: SpeedTable) -> StartOutcome {
        let run = {
            let _notify = self.shared.notify_lock();
            let Some(run) = self.shared.control.begin() else {
                debug!("Ignoring start of {}: a run is already active", algorithm.name());
                return StartOutcome::AlreadyActive;
            };
            info!("Starting {} (run {})", algorithm.name(), run);
            self.shared.sink.on_run_state_change(RunState::Running);
            run
        };

        let shared = Arc::clone(&self.shared);
        let clock = Arc::clone(&self.clock);
        let gate = self.gate;
        // a previous worker is either finished or superseded; let it wind down on its own
        self.worker = Some(thread::spawn(move || {
            drive(shared, clock, gate, algorithm, speeds, run)
        }));
        StartOutcome::Started
    }

    /// Stop the active run; it ends as Cancelled
    pub fn cancel(&mut self) {
        let _publish = self.shared.publish_lock();
        let _notify = self.shared.notify_lock();
        if let Some(run) = self.shared.control.cancel() {
            info!("Cancelled run {}", run);
            self.shared.sink.on_run_state_change(RunState::Cancelled);
        }
    }

    /// Stop any active run and return to Idle
    pub fn reset(&mut self) {
        self.cancel();
        let _notify = self.shared.notify_lock();
        if self.shared.control.reset() {
            self.shared.sink.on_run_state_change(RunState::Idle);
        }
    }

    /// Block until the most recently started worker has exited
    pub fn join(&mut self) {
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                error!("Run worker panicked");
            }
        }
    }
}

impl Drop for StepController {
    fn drop(&mut self) {
        self.shared.control.cancel();
    }
}

fn drive(
    shared: Arc<Shared>,
    clock: Arc<dyn Clock>,
    gate: SuspendGate,
    mut algorithm: Box<dyn Steppable>,
    speeds: SpeedTable,
    run: u64,
) {
    let control = &shared.control;
    let mut index = 0;

    while let Some(step) = algorithm.next_step() {
        if !gate.wait_until_resumed(control, run, clock.as_ref()) {
            debug!("Run {} superseded before step {}", run, index);
            return;
        }

        {
            let _publish = shared.publish_lock();
            if !control.is_current(run) {
                debug!("Run {} superseded at step {}", run, index);
                return;
            }
            shared.sink.on_snapshot(Published {
                run,
                index,
                snapshot: step.snapshot,
            });
        }
        index += 1;

        let delay = step.pace.resolve(speeds.delay(control.speed()));
        if !delay.is_zero() {
            clock.sleep(delay);
        }

        if !control.is_current(run) {
            debug!("Run {} superseded after step {}", run, index);
            return;
        }
    }

    let outcome = algorithm.outcome();
    let _notify = shared.notify_lock();
    if control.complete(run) {
        info!("{} finished after {} steps: {}", algorithm.name(), index, outcome);
        shared.sink.on_outcome(&outcome);
        shared.sink.on_run_state_change(RunState::Completed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_is_exclusive() {
        let control = RunControl::new();
        let first = control.begin().unwrap();
        assert!(control.begin().is_none());
        assert_eq!(control.toggle_pause(), Some(RunState::Paused));
        assert!(control.begin().is_none());
        assert!(control.is_current(first));

        assert_eq!(control.cancel(), Some(first));
        assert!(!control.is_current(first));
        assert_eq!(control.state(), RunState::Cancelled);
        assert!(!control.is_paused());

        let second = control.begin().unwrap();
        assert!(second > first);
    }

    #[test]
    fn toggle_pause_needs_an_active_run() {
        let control = RunControl::new();
        assert_eq!(control.toggle_pause(), None);
        let run = control.begin().unwrap();
        assert!(control.complete(run));
        assert_eq!(control.toggle_pause(), None);
        assert_eq!(control.state(), RunState::Completed);
    }

    #[test]
    fn stale_run_cannot_complete() {
        let control = RunControl::new();
        let run = control.begin().unwrap();
        assert!(control.reset());
        assert!(!control.complete(run));
        assert_eq!(control.state(), RunState::Idle);
    }
}
