//! One visualization screen: its input, parameters and controller
//!
//! A [`Session`] receives user intents (resize, randomize, enter values, pick nodes,
//! start, pause, change speed) and turns them into runs. It validates parameters before
//! touching any run state; a missing key or an incomplete custom array is reported to
//! the sink as a transient message and the start request is answered with
//! [`StartOutcome::Rejected`].
//!
//! Merge sort takes a different path: `start` records the whole step log at once and the
//! session exposes cursor navigation over it. The controller is never involved.

use super::clock::Clock;
use super::constants::{
    DEFAULT_SIZE, MAX_SIZE, MERGE_VALUE_UPPER, MIN_SIZE, TRANSIENT_ERROR_DURATION, VALUE_UPPER,
};
use super::controller::{ControllerHandle, RunState, StepController, VisualizationSink};
use super::errors::{PreconditionError, StartOutcome};
use super::speed::SpeedLevel;
use crate::algorithms::merge_sort;
use crate::algorithms::searching::{BinarySearch, LinearSearch};
use crate::algorithms::sorting::{BubbleSort, InsertionSort, SelectionSort};
use crate::algorithms::traversal::Traversal;
use crate::algorithms::{AlgorithmKind, Family, Steppable};
use crate::model::sequence::{parse_custom_values, sort_ascending};
use crate::model::{Graph, GraphError, InputGenerator, NodeId};
use crate::snapshot::{MergeStep, StepLog};
use log::{info, warn};
use std::sync::Arc;

pub struct Session {
    kind: AlgorithmKind,
    size: usize,
    generator: InputGenerator,
    values: Vec<f64>,
    graph: Graph,
    custom_values: Option<Vec<String>>,
    search_key: Option<f64>,
    start_node: Option<NodeId>,
    target_node: Option<NodeId>,
    controller: StepController,
    merge_log: Option<StepLog>,
}

impl Session {
    pub fn new(
        kind: AlgorithmKind,
        sink: Arc<dyn VisualizationSink>,
        generator: InputGenerator,
    ) -> Self {
        Self::from_controller(kind, StepController::new(sink), generator)
    }

    /// Session whose runs wait on `clock` instead of the wall clock
    pub fn with_clock(
        kind: AlgorithmKind,
        sink: Arc<dyn VisualizationSink>,
        clock: Arc<dyn Clock>,
        generator: InputGenerator,
    ) -> Self {
        Self::from_controller(kind, StepController::with_clock(sink, clock), generator)
    }

    fn from_controller(
        kind: AlgorithmKind,
        controller: StepController,
        generator: InputGenerator,
    ) -> Self {
        let mut session = Session {
            kind,
            size: DEFAULT_SIZE,
            generator,
            values: Vec::new(),
            graph: Graph::assemble(Vec::new(), Vec::new()),
            custom_values: None,
            search_key: None,
            start_node: None,
            target_node: None,
            controller,
            merge_log: None,
        };
        session.regenerate();
        session
    }

    // ========== Inputs ==========

    pub fn kind(&self) -> AlgorithmKind {
        self.kind
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The array shown when no run has published yet
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn custom_values(&self) -> Option<&[String]> {
        self.custom_values.as_deref()
    }

    pub fn search_key(&self) -> Option<f64> {
        self.search_key
    }

    pub fn start_node(&self) -> Option<NodeId> {
        self.start_node
    }

    pub fn target_node(&self) -> Option<NodeId> {
        self.target_node
    }

    /// Change the input size (clamped to the allowed range) and regenerate.
    /// Refused while a run is active.
    pub fn set_size(&mut self, size: usize) -> bool {
        if !self.can_replace_input("resize") {
            return false;
        }
        self.size = size.clamp(MIN_SIZE, MAX_SIZE);
        self.regenerate();
        true
    }

    /// Draw a fresh input of the current size. Refused while a run is active.
    pub fn randomize(&mut self) -> bool {
        if !self.can_replace_input("randomize") {
            return false;
        }
        self.regenerate();
        true
    }

    /// Replace the array wholesale. Binary search input is sorted on the way in.
    pub fn replace_values(&mut self, mut values: Vec<f64>) -> bool {
        if !self.can_replace_input("replace the array") {
            return false;
        }
        if self.kind == AlgorithmKind::BinarySearch {
            sort_ascending(&mut values);
        }
        self.controller.reset();
        self.merge_log = None;
        self.custom_values = None;
        self.values = values;
        true
    }

    /// Replace the graph wholesale; start and target move to its first and last node
    pub fn replace_graph(&mut self, graph: Graph) -> bool {
        if !self.can_replace_input("replace the graph") {
            return false;
        }
        self.controller.reset();
        self.start_node = graph.first();
        self.target_node = graph.last();
        self.graph = graph;
        true
    }

    /// Enter hand-typed values; they are validated when the run starts
    pub fn set_custom_values(&mut self, values: Vec<String>) -> bool {
        if !self.kind.supports_custom_values() {
            self.report(PreconditionError::CustomValuesUnsupported {
                algorithm: self.kind.name(),
            });
            return false;
        }
        if !self.can_replace_input("enter custom values") {
            return false;
        }
        self.custom_values = Some(values);
        true
    }

    pub fn clear_custom_values(&mut self) {
        self.custom_values = None;
    }

    pub fn set_search_key(&mut self, key: Option<f64>) {
        self.search_key = key;
    }

    /// Pick the traversal start; `false` if the node is not in the graph
    pub fn set_start_node(&mut self, node: Option<NodeId>) -> bool {
        match node {
            Some(n) if !self.graph.contains(n) => {
                warn!("Ignoring start node {}: not in the graph", n);
                false
            }
            _ => {
                self.start_node = node;
                true
            }
        }
    }

    /// Pick the traversal target; `false` if the node is not in the graph
    pub fn set_target_node(&mut self, node: Option<NodeId>) -> bool {
        match node {
            Some(n) if !self.graph.contains(n) => {
                warn!("Ignoring target node {}: not in the graph", n);
                false
            }
            _ => {
                self.target_node = node;
                true
            }
        }
    }

    fn can_replace_input(&self, intent: &str) -> bool {
        let state = self.controller.state();
        if state.is_active() {
            warn!("Cannot {} while a run is {}", intent, state);
            return false;
        }
        true
    }

    fn regenerate(&mut self) {
        self.controller.reset();
        self.merge_log = None;
        self.custom_values = None;

        match self.kind.family() {
            Family::Traversal => {
                self.graph = self.generator.graph(self.size);
                self.values.clear();
                self.start_node = self.graph.first();
                self.target_node = self.graph.last();
            }
            Family::Replay => {
                self.values = self.generator.values(self.size, MERGE_VALUE_UPPER);
            }
            Family::Search if self.kind == AlgorithmKind::BinarySearch => {
                self.values = self.generator.sorted_values(self.size, VALUE_UPPER);
            }
            Family::Sort | Family::Search => {
                self.values = self.generator.values(self.size, VALUE_UPPER);
            }
        }
    }

    // ========== Runs ==========

    pub fn state(&self) -> RunState {
        self.controller.state()
    }

    pub fn current_run(&self) -> u64 {
        self.controller.current_run()
    }

    pub fn speed(&self) -> SpeedLevel {
        self.controller.speed()
    }

    pub fn set_speed(&mut self, level: SpeedLevel) {
        self.controller.set_speed(level);
    }

    pub fn toggle_pause(&mut self) -> Option<RunState> {
        self.controller.toggle_pause()
    }

    /// Handle for pausing or re-speeding this session's runs from another thread
    pub fn handle(&self) -> ControllerHandle {
        self.controller.handle()
    }

    /// Stop any run, drop the merge log and return to Idle
    pub fn reset(&mut self) {
        self.controller.reset();
        self.merge_log = None;
    }

    /// Wait for the current worker to exit
    pub fn join(&mut self) {
        self.controller.join();
    }

    /// Validate parameters and start a run.
    ///
    /// Precondition failures are reported through the sink and returned as
    /// [`StartOutcome::Rejected`]; only a graph that does not contain the chosen nodes
    /// is an error.
    pub fn start(&mut self) -> Result<StartOutcome, GraphError> {
        if self.controller.state().is_active() {
            return Ok(StartOutcome::AlreadyActive);
        }

        match self.prepare() {
            Ok(Prepared::Live(algorithm)) => {
                Ok(self.controller.start(algorithm, self.kind.speed_table()))
            }
            Ok(Prepared::Replay(log)) => {
                info!("Recorded {} merge sort steps", log.len());
                self.merge_log = Some(log);
                Ok(StartOutcome::Started)
            }
            Err(PrepareError::Precondition(err)) => {
                self.report(err.clone());
                Ok(StartOutcome::Rejected(err))
            }
            Err(PrepareError::Graph(err)) => Err(err),
        }
    }

    fn prepare(&mut self) -> Result<Prepared, PrepareError> {
        let kind = self.kind;
        match kind.family() {
            Family::Sort => {
                let values = self.accept_custom_values()?;
                let algorithm: Box<dyn Steppable> = match kind {
                    AlgorithmKind::InsertionSort => Box::new(InsertionSort::new(values)),
                    AlgorithmKind::SelectionSort => Box::new(SelectionSort::new(values)),
                    _ => Box::new(BubbleSort::new(values)),
                };
                Ok(Prepared::Live(algorithm))
            }
            Family::Search => {
                let key = self
                    .search_key
                    .ok_or(PreconditionError::MissingSearchKey)?;
                let values = self.accept_custom_values()?;
                let algorithm: Box<dyn Steppable> = if kind == AlgorithmKind::BinarySearch {
                    Box::new(BinarySearch::new(values, key))
                } else {
                    Box::new(LinearSearch::new(values, key))
                };
                Ok(Prepared::Live(algorithm))
            }
            Family::Traversal => {
                let (Some(start), Some(target)) = (self.start_node, self.target_node) else {
                    return Err(PreconditionError::MissingEndpoints.into());
                };
                let traversal = if kind == AlgorithmKind::Dfs {
                    Traversal::dfs(self.graph.clone(), start, target)?
                } else {
                    Traversal::bfs(self.graph.clone(), start, target)?
                };
                Ok(Prepared::Live(Box::new(traversal)))
            }
            Family::Replay => {
                let values = self.accept_custom_values()?;
                Ok(Prepared::Replay(merge_sort::record(&values)))
            }
        }
    }

    /// Validate pending custom values and make them the working array.
    /// Without custom values the current array is used as is.
    fn accept_custom_values(&mut self) -> Result<Vec<f64>, PreconditionError> {
        if let Some(slots) = &self.custom_values {
            let mut values = parse_custom_values(slots)?;
            if self.kind == AlgorithmKind::BinarySearch {
                sort_ascending(&mut values);
            }
            self.values = values;
            self.custom_values = None;
        }
        Ok(self.values.clone())
    }

    fn report(&self, err: PreconditionError) {
        warn!("{}: {}", self.kind.name(), err);
        self.controller
            .sink()
            .on_transient_error(&err.to_string(), TRANSIENT_ERROR_DURATION);
    }

    // ========== Merge sort replay ==========

    pub fn merge_log(&self) -> Option<&StepLog> {
        self.merge_log.as_ref()
    }

    pub fn merge_step(&self) -> Option<&MergeStep> {
        self.merge_log.as_ref().and_then(StepLog::current)
    }

    pub fn merge_step_forward(&mut self) -> bool {
        self.merge_log.as_mut().is_some_and(StepLog::step_forward)
    }

    pub fn merge_step_backward(&mut self) -> bool {
        self.merge_log.as_mut().is_some_and(StepLog::step_backward)
    }

    pub fn merge_seek(&mut self, index: usize) -> bool {
        self.merge_log.as_mut().is_some_and(|log| log.seek(index))
    }

    pub fn merge_rewind(&mut self) {
        if let Some(log) = self.merge_log.as_mut() {
            log.rewind();
        }
    }

    pub fn merge_jump_to_end(&mut self) {
        if let Some(log) = self.merge_log.as_mut() {
            log.jump_to_end();
        }
    }
}

enum Prepared {
    Live(Box<dyn Steppable>),
    Replay(StepLog),
}

enum PrepareError {
    Precondition(PreconditionError),
    Graph(GraphError),
}

impl From<PreconditionError> for PrepareError {
    fn from(err: PreconditionError) -> Self {
        PrepareError::Precondition(err)
    }
}

impl From<GraphError> for PrepareError {
    fn from(err: GraphError) -> Self {
        PrepareError::Graph(err)
    }
}
