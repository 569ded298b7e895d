//! Directed graph used by the traversal screens
//!
//! Nodes are single uppercase letters and keep their insertion order, which is also the
//! order the UI lists them in. Construction validates the adjacency list so that the
//! traversal code can index successors without re-checking them.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Identifier of a graph node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub char);

impl NodeId {
    /// The node for position `index` (0 => 'A'), if it fits in the alphabet
    pub fn from_index(index: usize) -> Option<Self> {
        if index < 26 {
            Some(NodeId((b'A' + index as u8) as char))
        } else {
            None
        }
    }

    /// Parse a user-entered node name (case-insensitive, surrounding whitespace ignored)
    pub fn parse(text: &str) -> Option<Self> {
        let mut chars = text.trim().chars();
        let c = chars.next()?;
        if chars.next().is_some() || !c.is_ascii_alphabetic() {
            return None;
        }
        Some(NodeId(c.to_ascii_uppercase()))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Structural problems in a graph; these are contract violations, not user mistakes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node {0} is declared more than once")]
    DuplicateNode(NodeId),

    #[error("node {0} has an edge to itself")]
    SelfLoop(NodeId),

    #[error("edge {from} -> {to} points at a node that does not exist")]
    DanglingEdge { from: NodeId, to: NodeId },

    #[error("node {0} is not part of the graph")]
    UnknownNode(NodeId),
}

/// Directed graph stored as an insertion-ordered adjacency list
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    nodes: Vec<NodeId>,
    successors: Vec<Vec<NodeId>>,
    index: FxHashMap<NodeId, usize>,
}

impl Graph {
    /// Build a graph from `(node, successors)` pairs, rejecting duplicates, self-loops
    /// and edges to undeclared nodes.
    pub fn new<I>(adjacency: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (NodeId, Vec<NodeId>)>,
    {
        let mut nodes = Vec::new();
        let mut successors = Vec::new();
        let mut index = FxHashMap::default();

        for (node, targets) in adjacency {
            if index.insert(node, nodes.len()).is_some() {
                return Err(GraphError::DuplicateNode(node));
            }
            nodes.push(node);
            successors.push(targets);
        }

        let graph = Graph {
            nodes,
            successors,
            index,
        };
        graph.validate()?;
        Ok(graph)
    }

    /// Assemble a graph whose shape the caller already guarantees (generator output)
    pub(crate) fn assemble(nodes: Vec<NodeId>, successors: Vec<Vec<NodeId>>) -> Self {
        let index = nodes.iter().enumerate().map(|(i, n)| (*n, i)).collect();
        let graph = Graph {
            nodes,
            successors,
            index,
        };
        debug_assert!(graph.validate().is_ok(), "generator produced an invalid graph");
        graph
    }

    fn validate(&self) -> Result<(), GraphError> {
        for (from, targets) in self.nodes.iter().zip(&self.successors) {
            for to in targets {
                if to == from {
                    return Err(GraphError::SelfLoop(*from));
                }
                if !self.contains(*to) {
                    return Err(GraphError::DanglingEdge {
                        from: *from,
                        to: *to,
                    });
                }
            }
        }
        Ok(())
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Outgoing edges of `node` in declared order
    pub fn successors(&self, node: NodeId) -> Option<&[NodeId]> {
        self.index
            .get(&node)
            .map(|&i| self.successors[i].as_slice())
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.index.contains_key(&node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn first(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn last(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }

    /// Require `node` to be present, for callers that received it from outside
    pub fn require(&self, node: NodeId) -> Result<(), GraphError> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(node))
        }
    }

    /// Iterate `(node, successors)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &[NodeId])> {
        self.nodes
            .iter()
            .copied()
            .zip(self.successors.iter().map(Vec::as_slice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(c: char) -> NodeId {
        NodeId(c)
    }

    #[test]
    fn rejects_dangling_edges() {
        let err = Graph::new([(n('A'), vec![n('B')])]).unwrap_err();
        assert_eq!(
            err,
            GraphError::DanglingEdge {
                from: n('A'),
                to: n('B')
            }
        );
    }

    #[test]
    fn rejects_self_loops_and_duplicates() {
        assert_eq!(
            Graph::new([(n('A'), vec![n('A')])]).unwrap_err(),
            GraphError::SelfLoop(n('A'))
        );
        assert_eq!(
            Graph::new([(n('A'), vec![]), (n('A'), vec![])]).unwrap_err(),
            GraphError::DuplicateNode(n('A'))
        );
    }

    #[test]
    fn keeps_insertion_order() {
        let graph = Graph::new([
            (n('C'), vec![n('A')]),
            (n('A'), vec![n('B'), n('C')]),
            (n('B'), vec![]),
        ])
        .unwrap();
        assert_eq!(graph.nodes(), &[n('C'), n('A'), n('B')]);
        assert_eq!(graph.successors(n('A')).unwrap(), &[n('B'), n('C')]);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.first(), Some(n('C')));
        assert_eq!(graph.last(), Some(n('B')));
    }

    #[test]
    fn parses_node_names() {
        assert_eq!(NodeId::parse(" d "), Some(n('D')));
        assert_eq!(NodeId::parse("AB"), None);
        assert_eq!(NodeId::parse("1"), None);
        assert_eq!(NodeId::parse(""), None);
        assert_eq!(NodeId::from_index(2), Some(n('C')));
        assert_eq!(NodeId::from_index(26), None);
    }
}
