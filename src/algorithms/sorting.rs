//! Comparison sorts stepped one decision at a time
//!
//! Each sort owns its working array and a small phase enum. A phase either publishes a
//! frame (and the controller then waits) or falls through to the next phase without
//! publishing.

use super::{Outcome, Step, Steppable};
use crate::model::sequence::{format_value, format_values};
use crate::snapshot::{Role, SortFrame, Snapshot};

fn sort_frame(values: &[f64], highlights: Vec<(usize, Role)>, swaps: usize, note: String) -> Snapshot {
    Snapshot::Sort(SortFrame {
        values: values.to_vec(),
        highlights,
        swaps,
        note,
    })
}

fn finished_frame(values: &[f64], swaps: usize) -> Step {
    Step::immediate(sort_frame(
        values,
        Vec::new(),
        swaps,
        format!("Sorted: {}", format_values(values)),
    ))
}

// ========== Bubble sort ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BubblePhase {
    Compare,
    Decide,
    Swap,
    Finished,
    Done,
}

/// Bubble sort with a shrinking unsorted tail
#[derive(Debug, Clone)]
pub struct BubbleSort {
    values: Vec<f64>,
    pass: usize,
    j: usize,
    swaps: usize,
    phase: BubblePhase,
}

impl BubbleSort {
    pub fn new(values: Vec<f64>) -> Self {
        BubbleSort {
            values,
            pass: 0,
            j: 0,
            swaps: 0,
            phase: BubblePhase::Compare,
        }
    }
}

impl Steppable for BubbleSort {
    fn name(&self) -> &'static str {
        "bubble sort"
    }

    fn next_step(&mut self) -> Option<Step> {
        let n = self.values.len();
        loop {
            match self.phase {
                BubblePhase::Compare => {
                    if self.pass + 1 >= n {
                        self.phase = BubblePhase::Finished;
                        continue;
                    }
                    if self.j >= n - self.pass - 1 {
                        self.pass += 1;
                        self.j = 0;
                        continue;
                    }
                    let j = self.j;
                    self.phase = BubblePhase::Decide;
                    return Some(Step::full(sort_frame(
                        &self.values,
                        vec![(j, Role::Compare), (j + 1, Role::Compare)],
                        self.swaps,
                        format!(
                            "Pass {}: comparing {} and {}",
                            self.pass + 1,
                            format_value(self.values[j]),
                            format_value(self.values[j + 1])
                        ),
                    )));
                }
                BubblePhase::Decide => {
                    let j = self.j;
                    if self.values[j] > self.values[j + 1] {
                        self.phase = BubblePhase::Swap;
                        return Some(Step::full(sort_frame(
                            &self.values,
                            vec![(j, Role::Swap), (j + 1, Role::Swap)],
                            self.swaps,
                            format!(
                                "{} > {}, swapping",
                                format_value(self.values[j]),
                                format_value(self.values[j + 1])
                            ),
                        )));
                    }
                    self.j += 1;
                    self.phase = BubblePhase::Compare;
                }
                BubblePhase::Swap => {
                    let j = self.j;
                    self.values.swap(j, j + 1);
                    self.swaps += 1;
                    self.j += 1;
                    self.phase = BubblePhase::Compare;
                    return Some(Step::full(sort_frame(
                        &self.values,
                        vec![(j, Role::Swap), (j + 1, Role::Swap)],
                        self.swaps,
                        format!("Swapped: {}", format_values(&self.values)),
                    )));
                }
                BubblePhase::Finished => {
                    self.phase = BubblePhase::Done;
                    return Some(finished_frame(&self.values, self.swaps));
                }
                BubblePhase::Done => return None,
            }
        }
    }

    fn outcome(&self) -> Outcome {
        Outcome::Sorted {
            values: self.values.clone(),
            swaps: self.swaps,
        }
    }
}

// ========== Insertion sort ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InsertionPhase {
    PickKey,
    Probe,
    Shift,
    Insert,
    Finished,
    Done,
}

/// Insertion sort shifting larger elements right one position per step
#[derive(Debug, Clone)]
pub struct InsertionSort {
    values: Vec<f64>,
    i: usize,
    /// Index being compared against the key; `None` once the walk passed index 0
    j: Option<usize>,
    key: f64,
    swaps: usize,
    phase: InsertionPhase,
}

impl InsertionSort {
    pub fn new(values: Vec<f64>) -> Self {
        InsertionSort {
            values,
            i: 1,
            j: None,
            key: 0.0,
            swaps: 0,
            phase: InsertionPhase::PickKey,
        }
    }
}

impl Steppable for InsertionSort {
    fn name(&self) -> &'static str {
        "insertion sort"
    }

    fn next_step(&mut self) -> Option<Step> {
        loop {
            match self.phase {
                InsertionPhase::PickKey => {
                    if self.i >= self.values.len() {
                        self.phase = InsertionPhase::Finished;
                        continue;
                    }
                    self.key = self.values[self.i];
                    self.j = Some(self.i - 1);
                    self.phase = InsertionPhase::Probe;
                    return Some(Step::full(sort_frame(
                        &self.values,
                        vec![(self.i, Role::Key)],
                        self.swaps,
                        format!("Key = {}", format_value(self.key)),
                    )));
                }
                InsertionPhase::Probe => match self.j {
                    Some(j) if self.values[j] > self.key => {
                        self.phase = InsertionPhase::Shift;
                        return Some(Step::full(sort_frame(
                            &self.values,
                            vec![(self.i, Role::Key), (j, Role::Compare)],
                            self.swaps,
                            format!(
                                "{} > key {}",
                                format_value(self.values[j]),
                                format_value(self.key)
                            ),
                        )));
                    }
                    _ => self.phase = InsertionPhase::Insert,
                },
                InsertionPhase::Shift => {
                    let Some(j) = self.j else {
                        self.phase = InsertionPhase::Insert;
                        continue;
                    };
                    self.values[j + 1] = self.values[j];
                    self.swaps += 1;
                    self.j = j.checked_sub(1);
                    self.phase = InsertionPhase::Probe;
                    return Some(Step::full(sort_frame(
                        &self.values,
                        vec![(self.i, Role::Key), (j + 1, Role::Shift)],
                        self.swaps,
                        format!("Shifted {} right", format_value(self.values[j + 1])),
                    )));
                }
                InsertionPhase::Insert => {
                    let slot = self.j.map_or(0, |j| j + 1);
                    self.values[slot] = self.key;
                    self.i += 1;
                    self.phase = InsertionPhase::PickKey;
                    return Some(Step::immediate(sort_frame(
                        &self.values,
                        vec![(slot, Role::Key)],
                        self.swaps,
                        format!("Inserted {} at index {}", format_value(self.key), slot),
                    )));
                }
                InsertionPhase::Finished => {
                    self.phase = InsertionPhase::Done;
                    return Some(finished_frame(&self.values, self.swaps));
                }
                InsertionPhase::Done => return None,
            }
        }
    }

    fn outcome(&self) -> Outcome {
        Outcome::Sorted {
            values: self.values.clone(),
            swaps: self.swaps,
        }
    }
}

// ========== Selection sort ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectionPhase {
    StartPass,
    Compare,
    Decide,
    SwapPending,
    Swap,
    Finished,
    Done,
}

/// Selection sort tracking the running minimum of the unsorted suffix
#[derive(Debug, Clone)]
pub struct SelectionSort {
    values: Vec<f64>,
    i: usize,
    j: usize,
    min: usize,
    swaps: usize,
    phase: SelectionPhase,
}

impl SelectionSort {
    pub fn new(values: Vec<f64>) -> Self {
        SelectionSort {
            values,
            i: 0,
            j: 0,
            min: 0,
            swaps: 0,
            phase: SelectionPhase::StartPass,
        }
    }
}

impl Steppable for SelectionSort {
    fn name(&self) -> &'static str {
        "selection sort"
    }

    fn next_step(&mut self) -> Option<Step> {
        let n = self.values.len();
        loop {
            match self.phase {
                SelectionPhase::StartPass => {
                    if self.i + 1 >= n {
                        self.phase = SelectionPhase::Finished;
                        continue;
                    }
                    self.min = self.i;
                    self.j = self.i + 1;
                    self.phase = SelectionPhase::Compare;
                }
                SelectionPhase::Compare => {
                    if self.j >= n {
                        if self.min != self.i {
                            self.phase = SelectionPhase::SwapPending;
                        } else {
                            self.i += 1;
                            self.phase = SelectionPhase::StartPass;
                        }
                        continue;
                    }
                    self.phase = SelectionPhase::Decide;
                    return Some(Step::full(sort_frame(
                        &self.values,
                        vec![
                            (self.j, Role::Compare),
                            (self.i, Role::Compare),
                            (self.min, Role::Min),
                        ],
                        self.swaps,
                        format!(
                            "Comparing {} with current min {}",
                            format_value(self.values[self.j]),
                            format_value(self.values[self.min])
                        ),
                    )));
                }
                SelectionPhase::Decide => {
                    if self.values[self.j] < self.values[self.min] {
                        self.min = self.j;
                    }
                    self.j += 1;
                    self.phase = SelectionPhase::Compare;
                }
                SelectionPhase::SwapPending => {
                    self.phase = SelectionPhase::Swap;
                    return Some(Step::full(sort_frame(
                        &self.values,
                        vec![(self.i, Role::Swap), (self.min, Role::Swap)],
                        self.swaps,
                        format!(
                            "Moving min {} to index {}",
                            format_value(self.values[self.min]),
                            self.i
                        ),
                    )));
                }
                SelectionPhase::Swap => {
                    let (i, min) = (self.i, self.min);
                    self.values.swap(i, min);
                    self.swaps += 1;
                    self.i += 1;
                    self.phase = SelectionPhase::StartPass;
                    return Some(Step::full(sort_frame(
                        &self.values,
                        vec![(i, Role::Swap), (min, Role::Swap)],
                        self.swaps,
                        format!("Swapped: {}", format_values(&self.values)),
                    )));
                }
                SelectionPhase::Finished => {
                    self.phase = SelectionPhase::Done;
                    return Some(finished_frame(&self.values, self.swaps));
                }
                SelectionPhase::Done => return None,
            }
        }
    }

    fn outcome(&self) -> Outcome {
        Outcome::Sorted {
            values: self.values.clone(),
            swaps: self.swaps,
        }
    }
}
