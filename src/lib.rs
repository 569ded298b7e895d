//! # Introduction
//!
//! algoviz runs classic algorithms one observable step at a time. Each step produces
//! an immutable snapshot of the algorithm's state, which is handed to a
//! [`engine::VisualizationSink`] and drawn by a terminal UI built with
//! [ratatui](https://docs.rs/ratatui). Runs can be paused, resumed, re-speeded and
//! cancelled at any step boundary.
//!
//! ## Execution pipeline
//!
//! ```text
//! Input → Steppable → StepController (worker) → Published snapshots → Sink → TUI
//! ```
//!
//! 1. [`model`] — arrays, graphs, custom-value parsing and seeded input generation.
//! 2. [`algorithms`] — bubble/insertion/selection sort, linear/binary search and
//!    BFS/DFS as step-by-step state machines, plus merge sort recorded into a
//!    replayable log.
//! 3. [`snapshot`] — the frames each algorithm publishes and the merge-sort
//!    [`snapshot::StepLog`].
//! 4. [`engine`] — speed policy, pause gate, step controller and the per-screen
//!    [`engine::Session`].
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Sorts: bubble, insertion, selection, merge (replay).
//! Searches: linear, binary (on a sorted array).
//! Traversals: breadth-first and depth-first search on a small directed graph.

pub mod algorithms;
pub mod engine;
pub mod model;
pub mod snapshot;
pub mod ui;
