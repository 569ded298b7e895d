//! Interruptible stepping engine
//!
//! - [`speed`]: speed levels, per-algorithm delay tables and step pacing
//! - [`clock`]: the time source waits go through
//! - [`gate`]: the polling pause gate
//! - [`controller`]: run lifecycle, worker thread and the sink contract
//! - [`session`]: one screen's inputs and user intents
//! - [`errors`]: precondition errors and start outcomes
//! - [`constants`]: size range, poll interval and message timeout
//!
//! # Execution Model
//!
//! A run is a [`Steppable`](crate::algorithms::Steppable) moved onto a worker thread.
//! The worker is the only place that waits; the UI thread only flips flags on the
//! shared [`controller::RunControl`] and drains what the sink received.

pub mod clock;
pub mod constants;
pub mod controller;
pub mod errors;
pub mod gate;
pub mod session;
pub mod speed;

pub use controller::{RunState, StepController, VisualizationSink};
pub use errors::{PreconditionError, StartOutcome};
pub use session::Session;
pub use speed::{Pace, SpeedLevel, SpeedTable};
