// Integration tests for the merge sort step log and its replay cursor

mod common;

use algoviz::algorithms::merge_sort::{merge, record};
use algoviz::algorithms::AlgorithmKind;
use algoviz::engine::{RunState, StartOutcome};
use algoviz::snapshot::MergeStepKind;

#[test]
fn test_last_merge_holds_sorted_input() {
    let log = record(&[5.0, 2.0, 9.0, 1.0, 5.0, 6.0]);
    let last = log.steps().last().expect("empty log");
    assert_eq!(last.kind, MergeStepKind::Merged);
    assert_eq!(last.range, (0, 5));
    assert_eq!(last.merged, vec![1.0, 2.0, 5.0, 5.0, 6.0, 9.0]);
}

#[test]
fn test_log_shape() {
    let log = record(&[4.0, 3.0, 2.0, 1.0]);
    let kinds: Vec<MergeStepKind> = log.steps().iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            MergeStepKind::Initial,
            MergeStepKind::Split,
            MergeStepKind::Split,
            MergeStepKind::Merged,
            MergeStepKind::Split,
            MergeStepKind::Merged,
            MergeStepKind::Merged,
        ]
    );
    assert_eq!(log.steps()[1].action, "Split [0-3] into [0-1] and [2-3]");
    assert_eq!(log.steps()[3].merged, vec![3.0, 4.0]);
}

#[test]
fn test_single_element_log_is_just_the_initial_entry() {
    let log = record(&[7.0]);
    assert_eq!(log.len(), 1);
    assert_eq!(log.steps()[0].kind, MergeStepKind::Initial);
    assert!(log.at_start() && log.at_end());
}

#[test]
fn test_merge_is_stable_and_prefers_left_on_ties() {
    assert_eq!(merge(&[1.0, 3.0], &[2.0, 3.0]), vec![1.0, 2.0, 3.0, 3.0]);
    assert_eq!(merge(&[], &[1.0]), vec![1.0]);
}

#[test]
fn test_back_then_forward_returns_same_step() {
    let mut log = record(&[8.0, 6.0, 7.0, 5.0, 3.0]);
    assert!(log.seek(3));
    let before = log.current().cloned();

    assert!(log.step_backward());
    assert!(log.step_forward());
    assert_eq!(log.current().cloned(), before);
}

#[test]
fn test_cursor_stays_in_bounds() {
    let mut log = record(&[2.0, 1.0]);
    assert!(!log.step_backward());
    assert_eq!(log.position(), 0);

    log.jump_to_end();
    assert!(log.at_end());
    assert!(!log.step_forward());
    assert_eq!(log.position(), log.len() - 1);

    assert!(!log.seek(log.len()));
    log.rewind();
    assert_eq!(log.position(), 0);
}

#[test]
fn test_merge_session_records_and_navigates() {
    let (mut session, sink, _clock) = common::session(AlgorithmKind::MergeSort);
    assert!(session.merge_log().is_none());
    assert!(session.set_custom_values(["3", "1", "2"].map(String::from).to_vec()));

    assert_eq!(session.start(), Ok(StartOutcome::Started));
    // the replay never touches the controller
    assert_eq!(session.state(), RunState::Idle);
    assert!(sink.snapshots().is_empty());

    let len = session.merge_log().map(|log| log.len()).unwrap_or_default();
    assert!(len > 1);
    assert!(session.merge_step_forward());
    assert!(session.merge_step_backward());
    assert!(!session.merge_step_backward());

    session.merge_jump_to_end();
    let last = session.merge_step().cloned().expect("no step");
    assert_eq!(last.merged, vec![1.0, 2.0, 3.0]);

    session.merge_rewind();
    assert_eq!(session.merge_step().map(|s| s.kind), Some(MergeStepKind::Initial));

    session.reset();
    assert!(session.merge_log().is_none());
}
