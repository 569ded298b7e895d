// Shared helpers for the integration tests

#![allow(dead_code)]

use algoviz::algorithms::{AlgorithmKind, Outcome};
use algoviz::engine::clock::RecordingClock;
use algoviz::engine::{RunState, Session, VisualizationSink};
use algoviz::model::InputGenerator;
use algoviz::snapshot::Published;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

type SnapshotHook = Box<dyn Fn(&Published) + Send + Sync>;

/// Sink that keeps everything it is given
#[derive(Default)]
pub struct CollectingSink {
    snapshots: Mutex<Vec<Published>>,
    states: Mutex<Vec<RunState>>,
    errors: Mutex<Vec<(String, Duration)>>,
    outcomes: Mutex<Vec<Outcome>>,
    hook: Mutex<Option<SnapshotHook>>,
}

impl CollectingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Run `hook` on the worker thread after each snapshot is recorded
    pub fn on_each_snapshot(&self, hook: impl Fn(&Published) + Send + Sync + 'static) {
        *self.hook.lock().unwrap() = Some(Box::new(hook));
    }

    pub fn snapshots(&self) -> Vec<Published> {
        self.snapshots.lock().unwrap().clone()
    }

    pub fn snapshot_count(&self) -> usize {
        self.snapshots.lock().unwrap().len()
    }

    pub fn states(&self) -> Vec<RunState> {
        self.states.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<(String, Duration)> {
        self.errors.lock().unwrap().clone()
    }

    pub fn outcomes(&self) -> Vec<Outcome> {
        self.outcomes.lock().unwrap().clone()
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.outcomes.lock().unwrap().last().cloned()
    }
}

impl VisualizationSink for CollectingSink {
    fn on_snapshot(&self, published: Published) {
        self.snapshots.lock().unwrap().push(published.clone());
        // locks above are released; the hook may call back into the controller
        if let Some(hook) = self.hook.lock().unwrap().as_ref() {
            hook(&published);
        }
    }

    fn on_run_state_change(&self, state: RunState) {
        self.states.lock().unwrap().push(state);
    }

    fn on_transient_error(&self, message: &str, duration: Duration) {
        self.errors
            .lock()
            .unwrap()
            .push((message.to_string(), duration));
    }

    fn on_outcome(&self, outcome: &Outcome) {
        self.outcomes.lock().unwrap().push(outcome.clone());
    }
}

/// Session over a seeded generator whose waits return immediately
pub fn session(kind: AlgorithmKind) -> (Session, Arc<CollectingSink>, Arc<RecordingClock>) {
    let sink = CollectingSink::new();
    let clock = Arc::new(RecordingClock::new());
    let session = Session::with_clock(
        kind,
        sink.clone(),
        clock.clone(),
        InputGenerator::seeded(7),
    );
    (session, sink, clock)
}

/// Poll `condition` until it holds or five seconds pass
pub fn wait_for(mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(1));
    }
    condition()
}
