// Integration tests for the comparison sorts

mod common;

use algoviz::algorithms::sorting::{BubbleSort, InsertionSort, SelectionSort};
use algoviz::algorithms::{collect_steps, AlgorithmKind, Outcome, Steppable};
use algoviz::engine::{Pace, RunState, StartOutcome};
use algoviz::snapshot::{Role, Snapshot};

fn sorts(values: &[f64]) -> Vec<Box<dyn Steppable>> {
    vec![
        Box::new(BubbleSort::new(values.to_vec())),
        Box::new(InsertionSort::new(values.to_vec())),
        Box::new(SelectionSort::new(values.to_vec())),
    ]
}

#[test]
fn test_bubble_sort_known_input() {
    let mut sort = BubbleSort::new(vec![5.0, 3.0, 4.0, 1.0, 2.0]);
    let steps = collect_steps(&mut sort);

    match sort.outcome() {
        Outcome::Sorted { values, swaps } => {
            assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
            assert!(swaps >= 4, "expected at least 4 swaps, got {}", swaps);
        }
        other => panic!("unexpected outcome {:?}", other),
    }

    // the last frame shows the sorted array with nothing highlighted
    let last = steps.last().expect("no steps");
    assert_eq!(last.pace, Pace::Immediate);
    match &last.snapshot {
        Snapshot::Sort(frame) => {
            assert_eq!(frame.values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
            assert!(frame.highlights.is_empty());
        }
        other => panic!("unexpected snapshot {:?}", other),
    }
}

#[test]
fn test_every_sort_agrees_on_duplicates_and_negatives() {
    let input = [3.0, -1.5, 3.0, 0.0, 7.25, -1.5];
    let expected = vec![-1.5, -1.5, 0.0, 3.0, 3.0, 7.25];
    for mut sort in sorts(&input) {
        collect_steps(sort.as_mut());
        match sort.outcome() {
            Outcome::Sorted { values, .. } => assert_eq!(values, expected, "{}", sort.name()),
            other => panic!("{}: unexpected outcome {:?}", sort.name(), other),
        }
    }
}

#[test]
fn test_sorted_input_needs_no_swaps() {
    let input = [1.0, 2.0, 3.0, 4.0];
    for mut sort in sorts(&input) {
        let steps = collect_steps(sort.as_mut());
        assert!(
            steps.iter().all(|step| match &step.snapshot {
                Snapshot::Sort(frame) => frame.swaps == 0,
                _ => false,
            }),
            "{} swapped sorted input",
            sort.name()
        );
    }
}

#[test]
fn test_swap_counter_never_decreases() {
    let mut sort = SelectionSort::new(vec![4.0, 3.0, 2.0, 1.0]);
    let swaps: Vec<usize> = collect_steps(&mut sort)
        .into_iter()
        .map(|step| match step.snapshot {
            Snapshot::Sort(frame) => frame.swaps,
            other => panic!("unexpected snapshot {:?}", other),
        })
        .collect();
    assert!(swaps.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(swaps.last(), Some(&2));
}

#[test]
fn test_selection_highlights_running_minimum() {
    let mut sort = SelectionSort::new(vec![3.0, 1.0, 2.0]);
    let steps = collect_steps(&mut sort);
    let has_min = steps.iter().any(|step| match &step.snapshot {
        Snapshot::Sort(frame) => frame.role_of(1) == Some(Role::Min),
        _ => false,
    });
    assert!(has_min);
}

#[test]
fn test_sort_session_runs_custom_values() {
    let (mut session, sink, _clock) = common::session(AlgorithmKind::BubbleSort);
    let slots = ["5", "3", "4", "1", "2"].map(String::from).to_vec();
    assert!(session.set_custom_values(slots));

    assert_eq!(session.start(), Ok(StartOutcome::Started));
    session.join();

    assert_eq!(session.state(), RunState::Completed);
    assert_eq!(session.values(), &[5.0, 3.0, 4.0, 1.0, 2.0]);
    assert!(session.custom_values().is_none());
    match sink.last_outcome() {
        Some(Outcome::Sorted { values, swaps }) => {
            assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
            assert!(swaps >= 4);
        }
        other => panic!("unexpected outcome {:?}", other),
    }

    let snapshots = sink.snapshots();
    assert!(!snapshots.is_empty());
    assert!(snapshots.iter().all(|p| p.run == session.current_run()));
    assert_eq!(sink.states(), vec![RunState::Running, RunState::Completed]);
}
