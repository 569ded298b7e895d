//! Sink that forwards everything a run produces to the UI thread

use crate::algorithms::Outcome;
use crate::engine::controller::{RunState, VisualizationSink};
use crate::snapshot::Published;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// One notification from the engine
#[derive(Debug, Clone)]
pub enum SinkEvent {
    Snapshot(Published),
    RunState(RunState),
    TransientError { message: String, duration: Duration },
    Outcome(Outcome),
}

/// Queues events on a channel drained by the render loop
pub struct ChannelSink {
    tx: Mutex<Sender<SinkEvent>>,
}

impl ChannelSink {
    pub fn channel() -> (Arc<Self>, Receiver<SinkEvent>) {
        let (tx, rx) = mpsc::channel();
        (Arc::new(ChannelSink { tx: Mutex::new(tx) }), rx)
    }

    fn send(&self, event: SinkEvent) {
        // the receiver only goes away while the app is shutting down
        let _ = self
            .tx
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .send(event);
    }
}

impl VisualizationSink for ChannelSink {
    fn on_snapshot(&self, published: Published) {
        self.send(SinkEvent::Snapshot(published));
    }

    fn on_run_state_change(&self, state: RunState) {
        self.send(SinkEvent::RunState(state));
    }

    fn on_transient_error(&self, message: &str, duration: Duration) {
        self.send(SinkEvent::TransientError {
            message: message.to_string(),
            duration,
        });
    }

    fn on_outcome(&self, outcome: &Outcome) {
        self.send(SinkEvent::Outcome(outcome.clone()));
    }
}
