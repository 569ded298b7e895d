// Integration tests for linear and binary search

mod common;

use algoviz::algorithms::searching::{BinarySearch, LinearSearch};
use algoviz::algorithms::{collect_steps, AlgorithmKind, Outcome, Steppable};
use algoviz::engine::{PreconditionError, RunState, StartOutcome};
use algoviz::snapshot::{SearchFrame, SearchStatus, Snapshot};
use std::time::Duration;

fn frames(steps: Vec<algoviz::algorithms::Step>) -> Vec<SearchFrame> {
    steps
        .into_iter()
        .map(|step| match step.snapshot {
            Snapshot::Search(frame) => frame,
            other => panic!("unexpected snapshot {:?}", other),
        })
        .collect()
}

#[test]
fn test_binary_search_probes_floor_mid() {
    let mut search = BinarySearch::new(vec![2.0, 4.0, 6.0, 8.0, 10.0], 8.0);
    collect_steps(&mut search);

    assert_eq!(search.outcome(), Outcome::Found { index: 3 });
    let mids: Vec<usize> = search.history().iter().map(|p| p.mid).collect();
    assert_eq!(mids, vec![2, 3]);

    let first = &search.history()[0];
    assert_eq!((first.start, first.end), (0, 4));
    assert_eq!(first.value_at_mid, 6.0);
    assert_eq!(first.subrange, vec![2.0, 4.0, 6.0, 8.0, 10.0]);
    let second = &search.history()[1];
    assert_eq!((second.start, second.end), (3, 4));
    assert_eq!(second.subrange, vec![8.0, 10.0]);
}

#[test]
fn test_binary_search_intervals_shrink() {
    let values: Vec<f64> = (0..8).map(|i| (i * 3) as f64).collect();
    let mut search = BinarySearch::new(values, 1.0);
    collect_steps(&mut search);

    assert_eq!(search.outcome(), Outcome::NotFound);
    let history = search.history();
    assert!(!history.is_empty());
    for pair in history.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        assert!(next.end - next.start < prev.end - prev.start);
        // an excluded index never comes back
        assert!(next.start >= prev.start && next.end <= prev.end);
        assert!(next.start > prev.mid || next.end < prev.mid);
    }
}

#[test]
fn test_binary_search_dims_discarded_half() {
    let mut search = BinarySearch::new(vec![1.0, 2.0, 3.0, 4.0, 5.0], 5.0);
    let frames = frames(collect_steps(&mut search));
    let bounds: Vec<(usize, usize)> = frames.iter().filter_map(|f| f.bounds).collect();
    assert_eq!(bounds.first(), Some(&(0, 4)));
    assert!(bounds.contains(&(3, 4)));
    assert_eq!(frames.last().map(|f| f.status), Some(SearchStatus::Found(4)));
}

#[test]
fn test_linear_search_absent_key_visits_every_index_once() {
    let values = vec![9.0, 1.0, 7.0, 3.0, 5.0];
    let mut search = LinearSearch::new(values.clone(), 4.0);
    let frames = frames(collect_steps(&mut search));

    let probes: Vec<usize> = frames.iter().filter_map(|f| f.probe).collect();
    assert_eq!(probes, (0..values.len()).collect::<Vec<_>>());
    assert_eq!(frames.last().map(|f| f.status), Some(SearchStatus::NotFound));
    assert_eq!(search.outcome(), Outcome::NotFound);
}

#[test]
fn test_linear_search_uses_strict_equality() {
    let mut search = LinearSearch::new(vec![0.1 + 0.2, 0.3], 0.3);
    collect_steps(&mut search);
    assert_eq!(search.outcome(), Outcome::Found { index: 1 });
}

#[test]
fn test_missing_key_is_rejected_without_touching_state() {
    let (mut session, sink, _clock) = common::session(AlgorithmKind::LinearSearch);
    let before = session.values().to_vec();

    let outcome = session.start().unwrap();
    assert_eq!(outcome, StartOutcome::Rejected(PreconditionError::MissingSearchKey));
    assert_eq!(session.state(), RunState::Idle);
    assert_eq!(session.values(), before.as_slice());
    assert_eq!(
        sink.errors(),
        vec![("Please enter a key to search".to_string(), Duration::from_secs(3))]
    );
    assert!(sink.snapshots().is_empty());
    assert!(sink.states().is_empty());
}

#[test]
fn test_binary_search_session_sorts_custom_values() {
    let (mut session, sink, _clock) = common::session(AlgorithmKind::BinarySearch);
    let slots = ["10", "2", "8", "4", "6"].map(String::from).to_vec();
    assert!(session.set_custom_values(slots));
    session.set_search_key(Some(8.0));

    assert_eq!(session.start(), Ok(StartOutcome::Started));
    session.join();

    assert_eq!(session.values(), &[2.0, 4.0, 6.0, 8.0, 10.0]);
    assert_eq!(sink.last_outcome(), Some(Outcome::Found { index: 3 }));
    assert_eq!(session.state(), RunState::Completed);
}

#[test]
fn test_invalid_custom_value_names_the_slot() {
    let (mut session, sink, _clock) = common::session(AlgorithmKind::LinearSearch);
    session.set_search_key(Some(1.0));
    assert!(session.set_custom_values(["1", "two", "3"].map(String::from).to_vec()));

    let outcome = session.start().unwrap();
    assert_eq!(
        outcome,
        StartOutcome::Rejected(PreconditionError::InvalidCustomValue {
            index: 1,
            text: "two".to_string(),
        })
    );
    let errors = sink.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].0, "Value \"two\" in slot 2 is not a number");
    // the pending values stay so the user can fix them
    assert!(session.custom_values().is_some());
}

#[test]
fn test_blank_custom_slot_is_incomplete() {
    let (mut session, sink, _clock) = common::session(AlgorithmKind::BubbleSort);
    assert!(session.set_custom_values(["4", " ", "2"].map(String::from).to_vec()));

    assert_eq!(
        session.start().unwrap(),
        StartOutcome::Rejected(PreconditionError::IncompleteCustomValues)
    );
    assert_eq!(sink.errors()[0].0, "Please fill all values");
}
