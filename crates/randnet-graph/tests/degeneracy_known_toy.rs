use randnet_graph::{core_decomposition, core_decomposition_of, GraphContainer};

#[test]
fn star_graph_peels_to_one() {
    let edges = [(0, 1), (0, 2), (0, 3)];
    let result = core_decomposition(4, &edges);

    assert_eq!(result.degeneracy, 1);
    assert_eq!(result.coreness, vec![1, 1, 1, 1]);
    assert_eq!(result.min_degree, 1);

    let descriptor = result.descriptors.get(&1).unwrap();
    assert_eq!(descriptor.cumulative_vertex_count, 4);
    assert_eq!(descriptor.cumulative_edge_count, 3);
}

#[test]
fn complete_graph_has_maximal_coreness() {
    let mut edges = Vec::new();
    for i in 0..5 {
        for j in (i + 1)..5 {
            edges.push((i, j));
        }
    }
    let result = core_decomposition(5, &edges);

    assert_eq!(result.degeneracy, 4);
    assert!(result.coreness.iter().all(|&c| c == 4));

    // every cumulative core is the whole graph
    for k in 1..=4 {
        let descriptor = result.descriptors.get(&k).unwrap();
        assert_eq!(descriptor.cumulative_vertex_count, 5);
        assert_eq!(descriptor.cumulative_edge_count, 10);
    }
}

#[test]
fn triangle_with_isolate_splits_corenesses() {
    let edges = [(0, 1), (1, 2), (0, 2)];
    let result = core_decomposition(4, &edges);

    assert_eq!(result.degeneracy, 2);
    assert_eq!(result.coreness, vec![2, 2, 2, 0]);
    assert_eq!(result.min_degree, 0);

    assert_eq!(result.collapse_sequence.get(&0), Some(&0.25));
    assert_eq!(result.collapse_sequence.get(&1), Some(&0.0));
    assert_eq!(result.collapse_sequence.get(&2), Some(&0.75));
}

#[test]
fn collapse_sequence_sums_to_one() {
    let edges = [(0, 1), (1, 2), (0, 2), (2, 3), (3, 4)];
    let result = core_decomposition(6, &edges);

    let total: f64 = result.collapse_sequence.values().sum();
    assert!((total - 1.0).abs() < 1e-9);
    for k in 0..=result.degeneracy {
        assert!(result.collapse_sequence.contains_key(&k));
    }
}

#[test]
fn edgeless_input_yields_an_empty_result() {
    let result = core_decomposition(3, &[]);
    assert_eq!(result.coreness, vec![0, 0, 0]);
    assert_eq!(result.degeneracy, 0);
    assert!(result.descriptors.is_empty());
    assert!(result.collapse_sequence.is_empty());

    let result = core_decomposition(0, &[]);
    assert!(result.coreness.is_empty());
}

#[test]
fn container_view_matches_explicit_edge_list() {
    let mut container = GraphContainer::with_size(4);
    container.connect(0, 1);
    container.connect(1, 2);
    container.connect(0, 2);

    let from_container = core_decomposition_of(&container);
    let from_edges = core_decomposition(4, &[(0, 1), (1, 2), (0, 2)]);
    assert_eq!(from_container, from_edges);
}
