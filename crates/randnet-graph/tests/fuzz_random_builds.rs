use randnet_core::RngHandle;
use randnet_graph::{
    canonical_hash, graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json,
    GraphContainer,
};
use proptest::prelude::*;

fn check_invariants(container: &GraphContainer) {
    let n = container.size();
    let mut recount = vec![0usize; n];
    for i in 0..n {
        recount[container.degree(i)] += 1;
    }
    assert_eq!(container.degree_histogram(), recount.as_slice());
    assert_eq!(
        container.edge_count() + container.non_existing_edge_count(),
        n * n.saturating_sub(1) / 2
    );
    for &(i, j) in container.existing_edges() {
        assert!(container.are_connected(i, j));
    }
}

proptest! {
    #[test]
    fn random_mutation_sequences_respect_invariants(
        seed in any::<u64>(),
        n in 2usize..12,
        steps in 1usize..64,
    ) {
        let mut rng = RngHandle::from_seed(seed);
        let mut container = GraphContainer::with_size(n);

        for _ in 0..steps {
            match rng.next_index(3) {
                0 => {
                    if let Some((i, j)) = container.random_non_existing_edge(&mut rng) {
                        container.connect(i, j);
                    }
                }
                1 => {
                    if let Some((i, j)) = container.random_existing_edge(&mut rng) {
                        container.disconnect(i, j);
                    }
                }
                _ => {
                    let vertex = rng.next_index(container.size());
                    container.set_active(vertex, !container.is_active(vertex));
                }
            }
            check_invariants(&container);
        }

        let bytes = graph_to_bytes(&container).unwrap();
        let restored = graph_from_bytes(&bytes).unwrap();
        prop_assert_eq!(canonical_hash(&container), canonical_hash(&restored));

        let json = graph_to_json(&container).unwrap();
        let restored = graph_from_json(&json).unwrap();
        prop_assert_eq!(canonical_hash(&container), canonical_hash(&restored));
    }
}
