use std::collections::BTreeSet;

use randnet_core::RngHandle;
use randnet_graph::{
    from_matrix, from_neighbour_pairs, neighbour_pairs, to_matrix, GraphContainer,
};

fn assert_indices_consistent(container: &GraphContainer) {
    let n = container.size();

    // histogram matches a from-scratch recount and sums to n
    let mut recount = vec![0usize; n];
    for i in 0..n {
        recount[container.degree(i)] += 1;
    }
    assert_eq!(container.degree_histogram(), recount.as_slice());
    assert_eq!(container.degree_histogram().iter().sum::<usize>(), n);

    // pools partition all C(n,2) pairs: the existing pool is exactly the set
    // of connected pairs and the counts leave no room for overlap
    let existing: BTreeSet<(usize, usize)> = container.existing_edges().iter().copied().collect();
    assert_eq!(existing.len(), container.edge_count());
    let all_pairs = n * n.saturating_sub(1) / 2;
    assert_eq!(
        container.edge_count() + container.non_existing_edge_count(),
        all_pairs
    );
    for i in 0..n {
        for j in (i + 1)..n {
            assert_eq!(container.are_connected(i, j), existing.contains(&(i, j)));
        }
    }
}

#[test]
fn sizing_resets_to_empty_graph() {
    let mut container = GraphContainer::new();
    container.set_size(5);
    container.connect(0, 1);
    container.connect(1, 2);
    assert_indices_consistent(&container);

    container.set_size(4);
    assert_eq!(container.size(), 4);
    assert_eq!(container.edge_count(), 0);
    assert_eq!(container.non_existing_edge_count(), 6);
    assert_eq!(container.degree_histogram()[0], 4);
    assert_indices_consistent(&container);
}

#[test]
fn connect_is_idempotent_and_symmetric() {
    let mut container = GraphContainer::with_size(4);
    assert!(container.connect(0, 1));
    assert!(!container.connect(0, 1));
    assert!(!container.connect(1, 0));
    assert!(!container.connect(2, 2));
    assert_eq!(container.edge_count(), 1);
    assert!(container.are_connected(1, 0));
    assert_indices_consistent(&container);
}

#[test]
fn disconnect_on_absent_edge_is_noop() {
    let mut container = GraphContainer::with_size(3);
    container.connect(0, 1);
    assert!(!container.disconnect(1, 2));
    assert!(container.disconnect(0, 1));
    assert!(!container.disconnect(0, 1));
    assert_eq!(container.edge_count(), 0);
    assert_indices_consistent(&container);
}

#[test]
fn add_vertex_grows_every_index() {
    let mut container = GraphContainer::with_size(3);
    container.connect(0, 1);
    let vertex = container.add_vertex();
    assert_eq!(vertex, 3);
    assert_eq!(container.size(), 4);
    assert_eq!(container.degree(vertex), 0);
    assert!(!container.is_active(vertex));
    assert_indices_consistent(&container);

    container.connect(vertex, 0);
    assert_indices_consistent(&container);
}

#[test]
fn clone_is_a_deep_independent_snapshot() {
    let mut container = GraphContainer::with_size(4);
    container.connect(0, 1);
    container.connect(2, 3);
    container.set_active(1, true);

    let snapshot = container.clone();
    container.disconnect(0, 1);
    container.connect(0, 2);
    container.set_active(1, false);

    assert!(snapshot.are_connected(0, 1));
    assert!(!snapshot.are_connected(0, 2));
    assert!(snapshot.is_active(1));
    assert_indices_consistent(&snapshot);
    assert_indices_consistent(&container);
}

#[test]
fn random_edge_picks_come_from_the_right_pool() {
    let mut container = GraphContainer::with_size(5);
    container.connect(0, 1);
    container.connect(3, 4);
    let mut rng = RngHandle::from_seed(11);

    for _ in 0..32 {
        let (i, j) = container.random_existing_edge(&mut rng).unwrap();
        assert!(container.are_connected(i, j));
        let (a, b) = container.random_non_existing_edge(&mut rng).unwrap();
        assert!(!container.are_connected(a, b));
    }

    let empty = GraphContainer::with_size(2);
    assert!(empty.random_existing_edge(&mut rng).is_none());

    let mut complete = GraphContainer::with_size(3);
    complete.connect(0, 1);
    complete.connect(0, 2);
    complete.connect(1, 2);
    assert!(complete.random_non_existing_edge(&mut rng).is_none());
}

#[test]
fn matrix_and_pair_conversions_are_mutually_consistent() {
    let mut container = GraphContainer::with_size(4);
    container.connect(0, 1);
    container.connect(1, 3);
    container.connect(2, 3);

    let matrix = to_matrix(&container);
    assert!(matrix[0][1] && matrix[1][0]);
    assert!(!matrix[0][2]);
    let from_m = from_matrix(&matrix).unwrap();
    assert_eq!(neighbour_pairs(&from_m), neighbour_pairs(&container));

    let pairs = neighbour_pairs(&container);
    let from_p = from_neighbour_pairs(4, &pairs).unwrap();
    assert_eq!(neighbour_pairs(&from_p), pairs);
}

#[test]
fn malformed_external_input_is_a_typed_error() {
    let ragged = vec![vec![false, false], vec![false]];
    let err = from_matrix(&ragged).unwrap_err();
    assert_eq!(err.info().code, "matrix-not-square");

    let err = from_neighbour_pairs(3, &[(0, 5)]).unwrap_err();
    assert_eq!(err.info().code, "pair-out-of-range");

    let err = from_neighbour_pairs(3, &[(1, 1)]).unwrap_err();
    assert_eq!(err.info().code, "self-loop");
}
