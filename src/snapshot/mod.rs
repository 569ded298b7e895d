// Visualization snapshots and the replayable step log

use crate::model::NodeId;

/// Role an index plays in a sort or search frame; drives the highlight color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Compare,
    Swap,
    Key,
    Min,
    Shift,
    Active,
    Found,
}

/// One frame of a comparison sort
#[derive(Debug, Clone, PartialEq)]
pub struct SortFrame {
    pub values: Vec<f64>,
    pub highlights: Vec<(usize, Role)>,
    /// Swaps (or insertion shifts) performed so far
    pub swaps: usize,
    pub note: String,
}

impl SortFrame {
    /// Role of `index` in this frame, if highlighted
    pub fn role_of(&self, index: usize) -> Option<Role> {
        self.highlights
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, role)| *role)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Probing,
    Found(usize),
    NotFound,
}

/// A single binary-search probe, kept in an append-only history
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryProbe {
    pub start: usize,
    pub mid: usize,
    pub end: usize,
    pub subrange: Vec<f64>,
    pub value_at_mid: f64,
    pub comparison: String,
}

/// One frame of a linear or binary search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFrame {
    pub values: Vec<f64>,
    pub key: f64,
    pub probe: Option<usize>,
    /// Inclusive `(start, end)` bounds; binary search only
    pub bounds: Option<(usize, usize)>,
    pub status: SearchStatus,
    pub history: Vec<BinaryProbe>,
    pub note: String,
}

/// Frontier animation tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierAction {
    Enqueue,
    Dequeue,
    Push,
    Pop,
}

impl FrontierAction {
    pub fn label(self) -> &'static str {
        match self {
            FrontierAction::Enqueue => "enqueue",
            FrontierAction::Dequeue => "dequeue",
            FrontierAction::Push => "push",
            FrontierAction::Pop => "pop",
        }
    }
}

/// One frame of a BFS or DFS run
#[derive(Debug, Clone, PartialEq)]
pub struct TraversalFrame {
    /// Queue front-to-back, or stack bottom-to-top
    pub frontier: Vec<NodeId>,
    pub current: Option<NodeId>,
    /// Visited nodes in the order they were marked
    pub visited: Vec<NodeId>,
    pub action: Option<(FrontierAction, NodeId)>,
    pub found: bool,
    pub path: Vec<NodeId>,
    pub note: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStepKind {
    Initial,
    Split,
    Merged,
}

/// One entry of the merge-sort step log
#[derive(Debug, Clone, PartialEq)]
pub struct MergeStep {
    pub kind: MergeStepKind,
    /// Inclusive range of the full array this step covers
    pub range: (usize, usize),
    /// The covered segment as it was when the step was recorded
    pub segment: Vec<f64>,
    pub left: Vec<f64>,
    pub right: Vec<f64>,
    pub merged: Vec<f64>,
    pub action: String,
}

/// Immutable view of algorithm state at one step
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    Sort(SortFrame),
    Search(SearchFrame),
    Traversal(TraversalFrame),
    Merge(MergeStep),
}

impl Snapshot {
    /// Short description shown under the visualization
    pub fn note(&self) -> &str {
        match self {
            Snapshot::Sort(frame) => &frame.note,
            Snapshot::Search(frame) => &frame.note,
            Snapshot::Traversal(frame) => &frame.note,
            Snapshot::Merge(step) => &step.action,
        }
    }
}

/// A snapshot as delivered to a sink
#[derive(Debug, Clone, PartialEq)]
pub struct Published {
    /// Run the snapshot belongs to
    pub run: u64,
    /// Position within the run, strictly increasing
    pub index: usize,
    pub snapshot: Snapshot,
}

/// Ordered, finite, replayable list of merge steps with a cursor
#[derive(Debug, Clone, Default)]
pub struct StepLog {
    steps: Vec<MergeStep>,
    cursor: usize,
}

impl StepLog {
    pub fn new(steps: Vec<MergeStep>) -> Self {
        StepLog { steps, cursor: 0 }
    }

    /// Step under the cursor
    pub fn current(&self) -> Option<&MergeStep> {
        self.steps.get(self.cursor)
    }

    pub fn steps(&self) -> &[MergeStep] {
        &self.steps
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn at_end(&self) -> bool {
        self.cursor + 1 >= self.steps.len()
    }

    /// Move one step forward; `false` at the last step
    pub fn step_forward(&mut self) -> bool {
        if self.cursor + 1 < self.steps.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Move one step back; `false` at the first step
    pub fn step_backward(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Jump straight to `index`; out-of-range indices leave the cursor alone
    pub fn seek(&mut self, index: usize) -> bool {
        if index < self.steps.len() {
            self.cursor = index;
            true
        } else {
            false
        }
    }

    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.cursor = self.steps.len().saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(kind: MergeStepKind, n: usize) -> MergeStep {
        MergeStep {
            kind,
            range: (0, n),
            segment: vec![n as f64],
            left: Vec::new(),
            right: Vec::new(),
            merged: Vec::new(),
            action: format!("step {}", n),
        }
    }

    #[test]
    fn cursor_is_bounds_checked() {
        let mut log = StepLog::new(vec![
            step(MergeStepKind::Initial, 0),
            step(MergeStepKind::Split, 1),
            step(MergeStepKind::Merged, 2),
        ]);

        assert!(!log.step_backward());
        assert_eq!(log.position(), 0);
        assert!(log.step_forward());
        assert!(log.step_forward());
        assert!(!log.step_forward());
        assert_eq!(log.position(), 2);
        assert!(log.at_end());

        assert!(!log.seek(3));
        assert_eq!(log.position(), 2);
        assert!(log.seek(1));
        assert_eq!(log.current().unwrap().kind, MergeStepKind::Split);

        log.rewind();
        assert!(log.at_start());
        log.jump_to_end();
        assert_eq!(log.position(), 2);
    }

    #[test]
    fn empty_log_has_no_current_step() {
        let mut log = StepLog::default();
        assert!(log.current().is_none());
        assert!(!log.step_forward());
        assert!(!log.step_backward());
        log.jump_to_end();
        assert_eq!(log.position(), 0);
    }
}
