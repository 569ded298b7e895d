//! Randomized input for the screens
//!
//! Every generator draws from a [`SmallRng`] so tests can pin a seed and assert exact
//! traces. The UI seeds from the OS unless `--seed` is given.

use super::graph::{Graph, NodeId};
use super::sequence::sort_ascending;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of random arrays and graphs
#[derive(Debug, Clone)]
pub struct InputGenerator {
    rng: SmallRng,
}

impl InputGenerator {
    /// Deterministic generator; the same seed always yields the same inputs
    pub fn seeded(seed: u64) -> Self {
        InputGenerator {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_os_rng() -> Self {
        InputGenerator {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// `len` whole numbers drawn uniformly from `0..upper`
    pub fn values(&mut self, len: usize, upper: u32) -> Vec<f64> {
        let upper = upper.max(1);
        (0..len)
            .map(|_| self.rng.random_range(0..upper) as f64)
            .collect()
    }

    /// Like [`values`](Self::values) but sorted ascending, as binary search requires
    pub fn sorted_values(&mut self, len: usize, upper: u32) -> Vec<f64> {
        let mut values = self.values(len, upper);
        sort_ascending(&mut values);
        values
    }

    /// Random directed graph over `len` nodes named from 'A'.
    ///
    /// Each node gets one edge to a random other node, then the chain
    /// `A -> B -> ... -> last` is added where missing, so the last node is always
    /// reachable from the first.
    pub fn graph(&mut self, len: usize) -> Graph {
        let nodes: Vec<NodeId> = (0..len.min(26)).filter_map(NodeId::from_index).collect();
        let mut successors: Vec<Vec<NodeId>> = vec![Vec::new(); nodes.len()];

        if nodes.len() > 1 {
            for (i, targets) in successors.iter_mut().enumerate() {
                // pick among the other nodes by skipping our own slot
                let mut pick = self.rng.random_range(0..nodes.len() - 1);
                if pick >= i {
                    pick += 1;
                }
                targets.push(nodes[pick]);
            }
        }

        for i in 1..nodes.len() {
            let next = nodes[i];
            if !successors[i - 1].contains(&next) {
                successors[i - 1].push(next);
            }
        }

        Graph::assemble(nodes, successors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sequence::is_sorted;

    #[test]
    fn same_seed_same_inputs() {
        let mut a = InputGenerator::seeded(7);
        let mut b = InputGenerator::seeded(7);
        assert_eq!(a.values(8, 100), b.values(8, 100));
        assert_eq!(a.graph(6), b.graph(6));
    }

    #[test]
    fn values_stay_in_range() {
        let mut generator = InputGenerator::seeded(1);
        let values = generator.values(200, 20);
        assert_eq!(values.len(), 200);
        assert!(values.iter().all(|v| (0.0..20.0).contains(v) && v.fract() == 0.0));
    }

    #[test]
    fn sorted_values_are_sorted() {
        let mut generator = InputGenerator::seeded(3);
        for len in 4..=8 {
            assert!(is_sorted(&generator.sorted_values(len, 100)));
        }
    }

    #[test]
    fn graphs_are_well_formed_and_chained() {
        let mut generator = InputGenerator::seeded(11);
        for len in 1..=8 {
            let graph = generator.graph(len);
            assert_eq!(graph.len(), len);
            assert!(Graph::new(graph.iter().map(|(n, s)| (n, s.to_vec()))).is_ok());
            for pair in graph.nodes().windows(2) {
                assert!(graph.successors(pair[0]).unwrap().contains(&pair[1]));
            }
        }
    }
}
