// Merge sort recorded into a replayable step log

use crate::model::sequence::format_values;
use crate::snapshot::{MergeStep, MergeStepKind, StepLog};

/// Record the full merge-sort trace of `values`.
///
/// The log opens with an `Initial` entry, then for every range of two or more elements
/// a `Split` entry, the trace of the left half, the trace of the right half and a
/// `Merged` entry. Nothing is paced: the caller scrubs the log with its cursor.
pub fn record(values: &[f64]) -> StepLog {
    let mut working = values.to_vec();
    let mut steps = vec![MergeStep {
        kind: MergeStepKind::Initial,
        range: (0, values.len().saturating_sub(1)),
        segment: working.clone(),
        left: Vec::new(),
        right: Vec::new(),
        merged: Vec::new(),
        action: format!("Original array {}", format_values(values)),
    }];

    if !working.is_empty() {
        let end = working.len() - 1;
        split(&mut working, 0, end, &mut steps);
    }

    StepLog::new(steps)
}

fn split(values: &mut [f64], start: usize, end: usize, steps: &mut Vec<MergeStep>) {
    if start >= end {
        return;
    }

    let mid = (start + end) / 2;
    steps.push(MergeStep {
        kind: MergeStepKind::Split,
        range: (start, end),
        segment: values[start..=end].to_vec(),
        left: values[start..=mid].to_vec(),
        right: values[mid + 1..=end].to_vec(),
        merged: Vec::new(),
        action: format!(
            "Split [{}-{}] into [{}-{}] and [{}-{}]",
            start,
            end,
            start,
            mid,
            mid + 1,
            end
        ),
    });

    split(values, start, mid, steps);
    split(values, mid + 1, end, steps);

    let left = values[start..=mid].to_vec();
    let right = values[mid + 1..=end].to_vec();
    let merged = merge(&left, &right);
    values[start..=end].copy_from_slice(&merged);

    steps.push(MergeStep {
        kind: MergeStepKind::Merged,
        range: (start, end),
        segment: merged.clone(),
        left,
        right,
        merged,
        action: format!("Merged [{}-{}]", start, end),
    });
}

/// Stable two-pointer merge; on ties the left element goes first
pub fn merge(left: &[f64], right: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let (mut l, mut r) = (0, 0);

    while l < left.len() && r < right.len() {
        if left[l] <= right[r] {
            out.push(left[l]);
            l += 1;
        } else {
            out.push(right[r]);
            r += 1;
        }
    }
    out.extend_from_slice(&left[l..]);
    out.extend_from_slice(&right[r..]);
    out
}
