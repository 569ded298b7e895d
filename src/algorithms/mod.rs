//! Instrumented algorithms
//!
//! Every live algorithm is a state machine implementing [`Steppable`]: each call to
//! [`Steppable::next_step`] performs the next algorithmic decision and returns the
//! snapshot to publish together with how long to hold it. The
//! [`StepController`](crate::engine::controller::StepController) owns pacing, pausing and
//! publication; the algorithms never sleep.
//!
//! - [`sorting`]: bubble, insertion and selection sort
//! - [`searching`]: linear and binary search
//! - [`traversal`]: breadth- and depth-first search
//! - [`merge_sort`]: merge sort, recorded into a [`StepLog`](crate::snapshot::StepLog)
//!   up front instead of being stepped live

pub mod merge_sort;
pub mod searching;
pub mod sorting;
pub mod traversal;

use crate::engine::speed::{Pace, SpeedTable};
use crate::model::sequence::format_values;
use crate::model::NodeId;
use crate::snapshot::Snapshot;
use std::fmt;
use std::time::Duration;

/// A snapshot to publish and the wait that follows it
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub snapshot: Snapshot,
    pub pace: Pace,
}

impl Step {
    pub fn full(snapshot: Snapshot) -> Self {
        Step {
            snapshot,
            pace: Pace::Full,
        }
    }

    pub fn half(snapshot: Snapshot) -> Self {
        Step {
            snapshot,
            pace: Pace::Half,
        }
    }

    pub fn fixed(snapshot: Snapshot, wait: Duration) -> Self {
        Step {
            snapshot,
            pace: Pace::Fixed(wait),
        }
    }

    pub fn immediate(snapshot: Snapshot) -> Self {
        Step {
            snapshot,
            pace: Pace::Immediate,
        }
    }
}

/// Final summary of a run
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Sorted { values: Vec<f64>, swaps: usize },
    Found { index: usize },
    NotFound,
    Path(Vec<NodeId>),
    NoPath,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Sorted { values, swaps } => {
                write!(f, "Sorted {} with {} swap(s)", format_values(values), swaps)
            }
            Outcome::Found { index } => write!(f, "Found at index {}", index),
            Outcome::NotFound => write!(f, "Key not found"),
            Outcome::Path(path) => {
                let names: Vec<String> = path.iter().map(NodeId::to_string).collect();
                write!(f, "Path found: {}", names.join(" → "))
            }
            Outcome::NoPath => write!(f, "No path to target"),
        }
    }
}

/// A live-stepped algorithm
pub trait Steppable: Send {
    fn name(&self) -> &'static str;

    /// Advance one step. `None` once the algorithm has published its final frame.
    fn next_step(&mut self) -> Option<Step>;

    /// Result so far; final once `next_step` has returned `None`
    fn outcome(&self) -> Outcome;
}

/// Run `algorithm` to completion without pacing and return every step
pub fn collect_steps(algorithm: &mut dyn Steppable) -> Vec<Step> {
    std::iter::from_fn(|| algorithm.next_step()).collect()
}

/// Broad class of an algorithm; decides which inputs a screen needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Sort,
    Search,
    Traversal,
    Replay,
}

/// Every algorithm the crate can visualize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum AlgorithmKind {
    #[value(name = "bubble")]
    BubbleSort,
    #[value(name = "insertion")]
    InsertionSort,
    #[value(name = "selection")]
    SelectionSort,
    #[value(name = "linear")]
    LinearSearch,
    #[value(name = "binary")]
    BinarySearch,
    Bfs,
    Dfs,
    #[value(name = "merge")]
    MergeSort,
}

impl AlgorithmKind {
    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::BubbleSort => "Bubble Sort",
            AlgorithmKind::InsertionSort => "Insertion Sort",
            AlgorithmKind::SelectionSort => "Selection Sort",
            AlgorithmKind::LinearSearch => "Linear Search",
            AlgorithmKind::BinarySearch => "Binary Search",
            AlgorithmKind::Bfs => "Breadth-First Search",
            AlgorithmKind::Dfs => "Depth-First Search",
            AlgorithmKind::MergeSort => "Merge Sort",
        }
    }

    pub fn family(self) -> Family {
        match self {
            AlgorithmKind::BubbleSort
            | AlgorithmKind::InsertionSort
            | AlgorithmKind::SelectionSort => Family::Sort,
            AlgorithmKind::LinearSearch | AlgorithmKind::BinarySearch => Family::Search,
            AlgorithmKind::Bfs | AlgorithmKind::Dfs => Family::Traversal,
            AlgorithmKind::MergeSort => Family::Replay,
        }
    }

    /// Base delays for this algorithm's screen
    pub fn speed_table(self) -> SpeedTable {
        match self {
            AlgorithmKind::SelectionSort => SpeedTable::from_millis(200, 600, 2200),
            AlgorithmKind::BinarySearch => SpeedTable::from_millis(200, 600, 1500),
            AlgorithmKind::Bfs | AlgorithmKind::Dfs => SpeedTable::from_millis(300, 1000, 2000),
            _ => SpeedTable::from_millis(200, 600, 1200),
        }
    }

    /// Whether the screen accepts hand-entered values
    pub fn supports_custom_values(self) -> bool {
        matches!(
            self.family(),
            Family::Sort | Family::Search | Family::Replay
        )
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
