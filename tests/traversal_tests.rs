// Integration tests for breadth- and depth-first search

mod common;

use algoviz::algorithms::traversal::Traversal;
use algoviz::algorithms::{collect_steps, AlgorithmKind, Outcome, Steppable};
use algoviz::engine::{PreconditionError, RunState, StartOutcome};
use algoviz::model::{Graph, GraphError, InputGenerator, NodeId};
use algoviz::snapshot::{FrontierAction, Snapshot};

fn n(c: char) -> NodeId {
    NodeId(c)
}

fn chain() -> Graph {
    Graph::new([
        (n('A'), vec![n('B')]),
        (n('B'), vec![n('C')]),
        (n('C'), vec![n('D')]),
        (n('D'), vec![]),
    ])
    .unwrap()
}

/// A reaches D directly and through B and C
fn shortcut() -> Graph {
    Graph::new([
        (n('A'), vec![n('B'), n('D')]),
        (n('B'), vec![n('C')]),
        (n('C'), vec![n('D')]),
        (n('D'), vec![]),
    ])
    .unwrap()
}

#[test]
fn test_chain_path_is_the_same_for_bfs_and_dfs() {
    let expected = Outcome::Path(vec![n('A'), n('B'), n('C'), n('D')]);

    let mut bfs = Traversal::bfs(chain(), n('A'), n('D')).unwrap();
    collect_steps(&mut bfs);
    assert_eq!(bfs.outcome(), expected);

    let mut dfs = Traversal::dfs(chain(), n('A'), n('D')).unwrap();
    collect_steps(&mut dfs);
    assert_eq!(dfs.outcome(), expected);
}

#[test]
fn test_bfs_finds_shortest_path_dfs_goes_deep() {
    let mut bfs = Traversal::bfs(shortcut(), n('A'), n('D')).unwrap();
    collect_steps(&mut bfs);
    assert_eq!(bfs.outcome(), Outcome::Path(vec![n('A'), n('D')]));

    let mut dfs = Traversal::dfs(shortcut(), n('A'), n('D')).unwrap();
    collect_steps(&mut dfs);
    assert_eq!(dfs.outcome(), Outcome::Path(vec![n('A'), n('B'), n('C'), n('D')]));
    assert_eq!(dfs.visit_order(), &[n('A'), n('B'), n('C')]);
}

#[test]
fn test_nodes_are_visited_at_most_once() {
    // every node points back at A and at each other
    let graph = Graph::new([
        (n('A'), vec![n('B'), n('C')]),
        (n('B'), vec![n('A'), n('C')]),
        (n('C'), vec![n('A'), n('B')]),
        (n('D'), vec![]),
    ])
    .unwrap();

    for mut traversal in [
        Traversal::bfs(graph.clone(), n('A'), n('D')).unwrap(),
        Traversal::dfs(graph.clone(), n('A'), n('D')).unwrap(),
    ] {
        collect_steps(&mut traversal);
        assert_eq!(traversal.outcome(), Outcome::NoPath);
        let mut order = traversal.visit_order().to_vec();
        let len = order.len();
        order.sort();
        order.dedup();
        assert_eq!(order.len(), len, "{} revisited a node", traversal.name());
        assert_eq!(len, 3);
    }
}

#[test]
fn test_frames_carry_frontier_actions() {
    let mut bfs = Traversal::bfs(chain(), n('A'), n('D')).unwrap();
    let actions: Vec<FrontierAction> = collect_steps(&mut bfs)
        .into_iter()
        .filter_map(|step| match step.snapshot {
            Snapshot::Traversal(frame) => frame.action.map(|(action, _)| action),
            other => panic!("unexpected snapshot {:?}", other),
        })
        .collect();
    assert_eq!(actions.first(), Some(&FrontierAction::Enqueue));
    assert!(actions.contains(&FrontierAction::Dequeue));
    assert!(!actions.contains(&FrontierAction::Push));

    let mut dfs = Traversal::dfs(chain(), n('A'), n('D')).unwrap();
    let last = collect_steps(&mut dfs).pop().expect("no steps");
    match last.snapshot {
        Snapshot::Traversal(frame) => {
            assert!(frame.found);
            assert_eq!(frame.path, vec![n('A'), n('B'), n('C'), n('D')]);
        }
        other => panic!("unexpected snapshot {:?}", other),
    }
}

#[test]
fn test_malformed_graphs_are_rejected() {
    assert_eq!(
        Graph::new([(n('A'), vec![n('A')])]).unwrap_err(),
        GraphError::SelfLoop(n('A'))
    );
    assert_eq!(
        Graph::new([(n('A'), vec![n('Q')])]).unwrap_err(),
        GraphError::DanglingEdge {
            from: n('A'),
            to: n('Q')
        }
    );
    assert_eq!(
        Graph::new([(n('A'), vec![]), (n('A'), vec![])]).unwrap_err(),
        GraphError::DuplicateNode(n('A'))
    );
}

#[test]
fn test_generated_graph_reaches_last_node() {
    let mut generator = InputGenerator::seeded(42);
    for size in 4..=8 {
        let graph = generator.graph(size);
        let (first, last) = (graph.first().unwrap(), graph.last().unwrap());
        let mut bfs = Traversal::bfs(graph, first, last).unwrap();
        collect_steps(&mut bfs);
        match bfs.outcome() {
            Outcome::Path(path) => {
                assert_eq!(path.first(), Some(&first));
                assert_eq!(path.last(), Some(&last));
            }
            other => panic!("size {}: unexpected outcome {:?}", size, other),
        }
    }
}

#[test]
fn test_session_without_endpoints_is_rejected() {
    let (mut session, sink, _clock) = common::session(AlgorithmKind::Bfs);
    assert!(session.set_target_node(None));

    assert_eq!(
        session.start().unwrap(),
        StartOutcome::Rejected(PreconditionError::MissingEndpoints)
    );
    assert_eq!(sink.errors()[0].0, "Please select start and target nodes");
    assert_eq!(session.state(), RunState::Idle);
}

#[test]
fn test_session_runs_dfs_on_replaced_graph() {
    let (mut session, sink, _clock) = common::session(AlgorithmKind::Dfs);
    assert!(session.replace_graph(shortcut()));
    assert_eq!(session.start_node(), Some(n('A')));
    assert_eq!(session.target_node(), Some(n('D')));
    assert!(!session.set_start_node(Some(n('Z'))));

    assert_eq!(session.start(), Ok(StartOutcome::Started));
    session.join();
    assert_eq!(
        sink.last_outcome(),
        Some(Outcome::Path(vec![n('A'), n('B'), n('C'), n('D')]))
    );
}

#[test]
fn test_custom_values_are_refused_for_traversals() {
    let (mut session, sink, _clock) = common::session(AlgorithmKind::Bfs);
    assert!(!session.set_custom_values(vec!["1".to_string()]));
    assert!(session.custom_values().is_none());
    assert_eq!(sink.errors().len(), 1);
}
