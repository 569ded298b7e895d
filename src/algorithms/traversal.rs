//! Frontier-based graph traversal
//!
//! BFS and DFS share one state machine and differ only in how the frontier is drained
//! and filled:
//!
//! | | removal | neighbor order | parent policy |
//! |-----|---------|----------------|---------------|
//! | BFS | front (FIFO) | declared | first discovery |
//! | DFS | top (LIFO) | reversed | latest push |
//!
//! DFS pushes neighbors in reverse so that popping visits them in declared order. BFS
//! keeps the first recorded parent of a node, which is what makes the reconstructed path
//! a shortest one; DFS keeps the parent from the push that will be popped first.

use super::{Outcome, Step, Steppable};
use crate::engine::constants::ENQUEUE_SETTLE;
use crate::model::{Graph, GraphError, NodeId};
use crate::snapshot::{FrontierAction, Snapshot, TraversalFrame};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Frontier discipline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    Queue,
    Stack,
}

impl Discipline {
    fn add_action(self) -> FrontierAction {
        match self {
            Discipline::Queue => FrontierAction::Enqueue,
            Discipline::Stack => FrontierAction::Push,
        }
    }

    fn remove_action(self) -> FrontierAction {
        match self {
            Discipline::Queue => FrontierAction::Dequeue,
            Discipline::Stack => FrontierAction::Pop,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Seed,
    Remove,
    Examine,
    Decide,
    Expand,
    Queued,
    Settle,
    Finished,
    Done,
}

/// A single BFS or DFS run from `start` looking for `target`
#[derive(Debug, Clone)]
pub struct Traversal {
    graph: Graph,
    discipline: Discipline,
    start: NodeId,
    target: NodeId,
    /// Front of the queue / bottom of the stack at index 0
    frontier: VecDeque<NodeId>,
    visited: FxHashSet<NodeId>,
    visit_order: Vec<NodeId>,
    parent: FxHashMap<NodeId, Option<NodeId>>,
    current: Option<NodeId>,
    /// Neighbors still to be added to the frontier for the node being expanded
    pending: VecDeque<NodeId>,
    found: bool,
    path: Vec<NodeId>,
    phase: Phase,
}

impl Traversal {
    pub fn new(
        graph: Graph,
        discipline: Discipline,
        start: NodeId,
        target: NodeId,
    ) -> Result<Self, GraphError> {
        graph.require(start)?;
        graph.require(target)?;

        let mut parent = FxHashMap::default();
        parent.insert(start, None);

        Ok(Traversal {
            graph,
            discipline,
            start,
            target,
            frontier: VecDeque::new(),
            visited: FxHashSet::default(),
            visit_order: Vec::new(),
            parent,
            current: None,
            pending: VecDeque::new(),
            found: false,
            path: Vec::new(),
            phase: Phase::Seed,
        })
    }

    /// Breadth-first search
    pub fn bfs(graph: Graph, start: NodeId, target: NodeId) -> Result<Self, GraphError> {
        Self::new(graph, Discipline::Queue, start, target)
    }

    /// Depth-first search
    pub fn dfs(graph: Graph, start: NodeId, target: NodeId) -> Result<Self, GraphError> {
        Self::new(graph, Discipline::Stack, start, target)
    }

    /// Nodes marked visited, in marking order
    pub fn visit_order(&self) -> &[NodeId] {
        &self.visit_order
    }

    fn frame(&self, action: Option<(FrontierAction, NodeId)>, note: String) -> Snapshot {
        Snapshot::Traversal(TraversalFrame {
            frontier: self.frontier.iter().copied().collect(),
            current: self.current,
            visited: self.visit_order.clone(),
            action,
            found: self.found,
            path: self.path.clone(),
            note,
        })
    }

    fn take_next(&mut self) -> Option<NodeId> {
        match self.discipline {
            Discipline::Queue => self.frontier.pop_front(),
            Discipline::Stack => self.frontier.pop_back(),
        }
    }

    fn peek_next(&self) -> Option<NodeId> {
        match self.discipline {
            Discipline::Queue => self.frontier.front().copied(),
            Discipline::Stack => self.frontier.back().copied(),
        }
    }

    fn record_parent(&mut self, node: NodeId, from: NodeId) {
        match self.discipline {
            Discipline::Queue => {
                self.parent.entry(node).or_insert(Some(from));
            }
            Discipline::Stack => {
                self.parent.insert(node, Some(from));
            }
        }
    }

    /// Walk parent links from the target back to the root
    fn reconstruct_path(&self) -> Vec<NodeId> {
        let mut path = vec![self.target];
        let mut node = self.target;
        while let Some(Some(prev)) = self.parent.get(&node) {
            path.push(*prev);
            node = *prev;
            if path.len() > self.graph.len() {
                break;
            }
        }
        path.reverse();
        path
    }
}

impl Steppable for Traversal {
    fn name(&self) -> &'static str {
        match self.discipline {
            Discipline::Queue => "breadth-first search",
            Discipline::Stack => "depth-first search",
        }
    }

    fn next_step(&mut self) -> Option<Step> {
        loop {
            match self.phase {
                Phase::Seed => {
                    self.frontier.push_back(self.start);
                    self.phase = Phase::Remove;
                    let action = self.discipline.add_action();
                    return Some(Step::full(self.frame(
                        Some((action, self.start)),
                        format!("Start at {}, {} {}", self.start, action.label(), self.start),
                    )));
                }
                Phase::Remove => {
                    let Some(node) = self.peek_next() else {
                        self.phase = Phase::Finished;
                        continue;
                    };
                    self.phase = Phase::Examine;
                    let action = self.discipline.remove_action();
                    return Some(Step::full(
                        self.frame(Some((action, node)), format!("{} {}", action.label(), node)),
                    ));
                }
                Phase::Examine => {
                    self.current = self.take_next();
                    self.phase = Phase::Decide;
                    let Some(node) = self.current else {
                        self.phase = Phase::Finished;
                        continue;
                    };
                    return Some(Step::full(self.frame(None, format!("Examining {}", node))));
                }
                Phase::Decide => {
                    let Some(node) = self.current else {
                        self.phase = Phase::Remove;
                        continue;
                    };
                    if node == self.target {
                        self.found = true;
                        self.path = self.reconstruct_path();
                        self.phase = Phase::Finished;
                        continue;
                    }
                    if !self.visited.insert(node) {
                        self.phase = Phase::Remove;
                        continue;
                    }
                    self.visit_order.push(node);

                    let neighbors = self.graph.successors(node).unwrap_or_default();
                    let mut pending: VecDeque<NodeId> = neighbors
                        .iter()
                        .copied()
                        .filter(|n| !self.visited.contains(n))
                        .collect();
                    if self.discipline == Discipline::Stack {
                        pending = pending.into_iter().rev().collect();
                    }
                    self.pending = pending;
                    self.phase = Phase::Expand;
                }
                Phase::Expand => {
                    let Some(from) = self.current else {
                        self.phase = Phase::Remove;
                        continue;
                    };
                    let Some(next) = self.pending.pop_front() else {
                        self.phase = Phase::Settle;
                        continue;
                    };
                    self.frontier.push_back(next);
                    self.record_parent(next, from);
                    if self.discipline == Discipline::Queue {
                        self.phase = Phase::Queued;
                    }
                    let action = self.discipline.add_action();
                    return Some(Step::full(self.frame(
                        Some((action, next)),
                        format!("{} {} (from {})", action.label(), next, from),
                    )));
                }
                Phase::Queued => {
                    self.phase = Phase::Expand;
                    let note = match self.frontier.back() {
                        Some(node) => format!("Queued {}", node),
                        None => String::new(),
                    };
                    return Some(Step::fixed(self.frame(None, note), ENQUEUE_SETTLE));
                }
                Phase::Settle => {
                    self.phase = Phase::Remove;
                    let note = match self.current {
                        Some(node) => format!("Visited {}", node),
                        None => String::new(),
                    };
                    return Some(Step::half(self.frame(None, note)));
                }
                Phase::Finished => {
                    self.phase = Phase::Done;
                    let note = if self.found {
                        let names: Vec<String> = self.path.iter().map(NodeId::to_string).collect();
                        format!("Reached {}: {}", self.target, names.join(" → "))
                    } else {
                        format!("{} is not reachable from {}", self.target, self.start)
                    };
                    return Some(Step::immediate(self.frame(None, note)));
                }
                Phase::Done => return None,
            }
        }
    }

    fn outcome(&self) -> Outcome {
        if self.found {
            Outcome::Path(self.path.clone())
        } else {
            Outcome::NoPath
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::collect_steps;
    use crate::engine::speed::Pace;

    fn n(c: char) -> NodeId {
        NodeId(c)
    }

    #[test]
    fn unknown_endpoint_is_a_hard_error() {
        let graph = Graph::new([(n('A'), vec![])]).unwrap();
        assert_eq!(
            Traversal::bfs(graph, n('A'), n('Z')).unwrap_err(),
            GraphError::UnknownNode(n('Z'))
        );
    }

    #[test]
    fn start_equal_to_target_is_a_one_node_path() {
        let graph = Graph::new([(n('A'), vec![n('B')]), (n('B'), vec![])]).unwrap();
        let mut bfs = Traversal::bfs(graph, n('A'), n('A')).unwrap();
        collect_steps(&mut bfs);
        assert_eq!(bfs.outcome(), Outcome::Path(vec![n('A')]));
        assert!(bfs.visit_order().is_empty());
    }

    #[test]
    fn bfs_settles_briefly_after_each_enqueue() {
        let graph = Graph::new([(n('A'), vec![n('B')]), (n('B'), vec![])]).unwrap();
        let mut bfs = Traversal::bfs(graph.clone(), n('A'), n('B')).unwrap();
        let paces: Vec<Pace> = collect_steps(&mut bfs).into_iter().map(|s| s.pace).collect();
        assert_eq!(
            paces,
            vec![
                Pace::Full,
                Pace::Full,
                Pace::Full,
                Pace::Full,
                Pace::Fixed(ENQUEUE_SETTLE),
                Pace::Half,
                Pace::Full,
                Pace::Full,
                Pace::Immediate,
            ]
        );

        let mut dfs = Traversal::dfs(graph, n('A'), n('B')).unwrap();
        assert!(collect_steps(&mut dfs)
            .iter()
            .all(|s| !matches!(s.pace, Pace::Fixed(_))));
    }

    #[test]
    fn unreachable_target_reports_no_path() {
        let graph = Graph::new([(n('A'), vec![n('B')]), (n('B'), vec![n('A')]), (n('C'), vec![])])
            .unwrap();
        let mut dfs = Traversal::dfs(graph, n('A'), n('C')).unwrap();
        collect_steps(&mut dfs);
        assert_eq!(dfs.outcome(), Outcome::NoPath);
        assert_eq!(dfs.visit_order(), &[n('A'), n('B')]);
    }
}
