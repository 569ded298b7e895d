//! Position search over a numeric sequence
//!
//! Keys compare with strict `f64` equality. Binary search assumes ascending input and
//! uses `mid = floor((start + end) / 2)` over inclusive bounds, so on an even-length
//! interval the lower middle is probed first.

use super::{Outcome, Step, Steppable};
use crate::model::sequence::format_value;
use crate::snapshot::{BinaryProbe, SearchFrame, SearchStatus, Snapshot};

// ========== Linear search ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinearPhase {
    Probe,
    Decide,
    Done,
}

#[derive(Debug, Clone)]
pub struct LinearSearch {
    values: Vec<f64>,
    key: f64,
    index: usize,
    status: SearchStatus,
    phase: LinearPhase,
}

impl LinearSearch {
    pub fn new(values: Vec<f64>, key: f64) -> Self {
        LinearSearch {
            values,
            key,
            index: 0,
            status: SearchStatus::Probing,
            phase: LinearPhase::Probe,
        }
    }

    fn frame(&self, probe: Option<usize>, note: String) -> Snapshot {
        Snapshot::Search(SearchFrame {
            values: self.values.clone(),
            key: self.key,
            probe,
            bounds: None,
            status: self.status,
            history: Vec::new(),
            note,
        })
    }
}

impl Steppable for LinearSearch {
    fn name(&self) -> &'static str {
        "linear search"
    }

    fn next_step(&mut self) -> Option<Step> {
        match self.phase {
            LinearPhase::Probe => {
                if self.index >= self.values.len() {
                    self.status = SearchStatus::NotFound;
                    self.phase = LinearPhase::Done;
                    let note = format!("{} is not in the array", format_value(self.key));
                    return Some(Step::immediate(self.frame(None, note)));
                }
                self.phase = LinearPhase::Decide;
                let note = format!(
                    "Checking index {}: {}",
                    self.index,
                    format_value(self.values[self.index])
                );
                Some(Step::full(self.frame(Some(self.index), note)))
            }
            LinearPhase::Decide => {
                let index = self.index;
                if self.values[index] == self.key {
                    self.status = SearchStatus::Found(index);
                    self.phase = LinearPhase::Done;
                    let note = format!("Found {} at index {}", format_value(self.key), index);
                    return Some(Step::immediate(self.frame(Some(index), note)));
                }
                self.index += 1;
                self.phase = LinearPhase::Probe;
                self.next_step()
            }
            LinearPhase::Done => None,
        }
    }

    fn outcome(&self) -> Outcome {
        match self.status {
            SearchStatus::Found(index) => Outcome::Found { index },
            _ => Outcome::NotFound,
        }
    }
}

// ========== Binary search ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinaryPhase {
    Probe,
    Decide,
    Done,
}

/// Binary search keeping both live highlighting and an append-only probe history
#[derive(Debug, Clone)]
pub struct BinarySearch {
    values: Vec<f64>,
    key: f64,
    /// Inclusive lower bound
    start: usize,
    /// Exclusive upper bound; the inclusive `end` shown to users is `limit - 1`
    limit: usize,
    mid: usize,
    history: Vec<BinaryProbe>,
    status: SearchStatus,
    phase: BinaryPhase,
}

impl BinarySearch {
    /// `values` must be sorted ascending
    pub fn new(values: Vec<f64>, key: f64) -> Self {
        debug_assert!(crate::model::sequence::is_sorted(&values));
        let limit = values.len();
        BinarySearch {
            values,
            key,
            start: 0,
            limit,
            mid: 0,
            history: Vec::new(),
            status: SearchStatus::Probing,
            phase: BinaryPhase::Probe,
        }
    }

    /// Probes recorded so far
    pub fn history(&self) -> &[BinaryProbe] {
        &self.history
    }

    fn frame(&self, probe: Option<usize>, bounds: Option<(usize, usize)>, note: String) -> Snapshot {
        Snapshot::Search(SearchFrame {
            values: self.values.clone(),
            key: self.key,
            probe,
            bounds,
            status: self.status,
            history: self.history.clone(),
            note,
        })
    }
}

impl Steppable for BinarySearch {
    fn name(&self) -> &'static str {
        "binary search"
    }

    fn next_step(&mut self) -> Option<Step> {
        match self.phase {
            BinaryPhase::Probe => {
                if self.start >= self.limit {
                    self.status = SearchStatus::NotFound;
                    self.phase = BinaryPhase::Done;
                    let note = format!("{} is not in the array", format_value(self.key));
                    return Some(Step::immediate(self.frame(None, None, note)));
                }
                let end = self.limit - 1;
                self.mid = (self.start + end) / 2;
                let value_at_mid = self.values[self.mid];
                let comparison = format!(
                    "Comparing {} with {}",
                    format_value(self.key),
                    format_value(value_at_mid)
                );
                self.history.push(BinaryProbe {
                    start: self.start,
                    mid: self.mid,
                    end,
                    subrange: self.values[self.start..=end].to_vec(),
                    value_at_mid,
                    comparison: comparison.clone(),
                });
                self.phase = BinaryPhase::Decide;
                Some(Step::full(self.frame(
                    Some(self.mid),
                    Some((self.start, end)),
                    comparison,
                )))
            }
            BinaryPhase::Decide => {
                let value = self.values[self.mid];
                if value == self.key {
                    self.status = SearchStatus::Found(self.mid);
                    self.phase = BinaryPhase::Done;
                    let note = format!("Found {} at index {}", format_value(self.key), self.mid);
                    return Some(Step::immediate(self.frame(Some(self.mid), None, note)));
                }

                let note = if value < self.key {
                    self.start = self.mid + 1;
                    format!(
                        "{} < {}, searching the right half",
                        format_value(value),
                        format_value(self.key)
                    )
                } else {
                    self.limit = self.mid;
                    format!(
                        "{} > {}, searching the left half",
                        format_value(value),
                        format_value(self.key)
                    )
                };
                self.phase = BinaryPhase::Probe;

                let bounds = (self.start < self.limit).then(|| (self.start, self.limit - 1));
                Some(Step::half(self.frame(None, bounds, note)))
            }
            BinaryPhase::Done => None,
        }
    }

    fn outcome(&self) -> Outcome {
        match self.status {
            SearchStatus::Found(index) => Outcome::Found { index },
            _ => Outcome::NotFound,
        }
    }
}
