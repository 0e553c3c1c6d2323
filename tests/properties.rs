use std::collections::BTreeSet;

use namedgraph::index::EntityIndex;
use namedgraph::{AddNodeError, Direction, Edge, EdgePolicy, Graph, NodeIndex};
use proptest::prelude::*;
use rstest::rstest;

fn edge_policy() -> impl Strategy<Value = EdgePolicy> {
    prop_oneof![Just(EdgePolicy::Directed), Just(EdgePolicy::Undirected)]
}

/// A set of distinct names together with edges between them given by position.
fn names_and_edges() -> impl Strategy<Value = (Vec<String>, Vec<(usize, usize, i64)>)> {
    prop::collection::btree_set("[a-z]{1,6}", 1..24).prop_flat_map(|names| {
        let count = names.len();
        let edges = prop::collection::vec((0..count, 0..count, any::<i64>()), 0..64);
        (Just(names.into_iter().collect::<Vec<_>>()), edges)
    })
}

fn all_edges(graph: &Graph, direction: Direction) -> Vec<Edge> {
    let mut edges: Vec<Edge> = (0..graph.node_count())
        .flat_map(|i| graph.node_edges(NodeIndex::new(i), direction).unwrap())
        .collect();
    edges.sort_by_key(|edge| (edge.source(), edge.target(), edge.weight()));
    edges
}

proptest! {
    #[test]
    fn names_and_indices_are_inverse(names in prop::collection::btree_set("[a-zA-Z0-9]{0,8}", 0..64)) {
        let mut graph = Graph::with_capacity(names.len());

        for (i, name) in names.iter().enumerate() {
            prop_assert_eq!(graph.add_node(name), Ok(NodeIndex::new(i)));
        }

        prop_assert_eq!(graph.node_count(), names.len());

        for i in 0..graph.node_count() {
            let node = NodeIndex::new(i);
            prop_assert_eq!(graph.node_index(graph.node_name(node).unwrap()), Ok(node));
        }

        for name in &names {
            prop_assert_eq!(graph.node_name(graph.node_index(name).unwrap()), Ok(name.as_str()));
        }
    }

    #[test]
    fn duplicates_never_change_the_count(names in prop::collection::vec("[ab]{1,2}", 0..32)) {
        let mut graph = Graph::new();
        let mut seen = BTreeSet::new();

        for name in &names {
            let result = graph.add_node(name);
            if seen.insert(name.clone()) {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(result, Err(AddNodeError::DuplicateNode(name.clone())));
            }
            prop_assert_eq!(graph.node_count(), seen.len());
        }
    }

    #[test]
    fn outgoing_and_incoming_agree((names, edges) in names_and_edges(), policy in edge_policy()) {
        let mut graph = Graph::with_policy(policy, names.len());
        for name in &names {
            graph.add_node(name).unwrap();
        }

        for &(source, target, weight) in &edges {
            graph.add_edge(&names[source], &names[target], weight).unwrap();
        }

        let outgoing = all_edges(&graph, Direction::Outgoing);
        let incoming = all_edges(&graph, Direction::Incoming);
        prop_assert_eq!(&outgoing, &incoming);

        let copies = match policy {
            EdgePolicy::Directed => 1,
            EdgePolicy::Undirected => 2,
        };
        prop_assert_eq!(outgoing.len(), edges.len() * copies);

        for i in 0..graph.node_count() {
            let node = NodeIndex::new(i);
            prop_assert!(graph.outgoing_edges(node).unwrap().all(|edge| edge.source() == node));
            prop_assert!(graph.incoming_edges(node).unwrap().all(|edge| edge.target() == node));
        }

        if policy == EdgePolicy::Undirected {
            for edge in &outgoing {
                prop_assert!(outgoing.contains(&edge.reversed()));
            }
        }
    }
}

#[rstest]
#[case::directed(EdgePolicy::Directed, 1)]
#[case::undirected(EdgePolicy::Undirected, 2)]
fn capacity_is_enforced(#[case] policy: EdgePolicy, #[case] capacity: usize) {
    let mut graph = Graph::with_policy(policy, capacity);

    for i in 0..capacity {
        graph.add_node(&format!("n{i}")).unwrap();
    }

    assert_eq!(
        graph.add_node("extra"),
        Err(AddNodeError::CapacityExceeded { capacity })
    );
    assert_eq!(graph.node_count(), capacity);
    assert!(!graph.contains_node("extra"));
}

#[rstest]
#[case::directed(EdgePolicy::Directed, vec![], vec![NodeIndex::new(1)])]
#[case::undirected(EdgePolicy::Undirected, vec![NodeIndex::new(0)], vec![NodeIndex::new(1)])]
fn neighbours_follow_policy(
    #[case] policy: EdgePolicy,
    #[case] from_b: Vec<NodeIndex>,
    #[case] from_a: Vec<NodeIndex>,
) {
    let mut graph = Graph::with_policy(policy, 2);
    let a = graph.add_node("A").unwrap();
    let b = graph.add_node("B").unwrap();
    graph.add_edge("A", "B", 5).unwrap();

    let outgoing = |node: NodeIndex| -> Vec<NodeIndex> {
        graph
            .neighbours(node, Direction::Outgoing)
            .unwrap()
            .collect()
    };

    assert_eq!(outgoing(a), from_a);
    assert_eq!(outgoing(b), from_b);
}
