use randnet_core::errors::{ErrorInfo, RandNetError};
use randnet_core::RngHandle;
use randnet_graph::{triangles_through_edge, GraphContainer};

/// Removes a uniform random existing edge and inserts a uniform random
/// non-existing pair, returning the signed triangle-count delta.
///
/// Both picks happen before any mutation, so the inserted pair can never be
/// the pair that was just removed. The degree sequence is not preserved:
/// four vertex degrees change per move.
pub fn edge_exchange(
    container: &mut GraphContainer,
    rng: &mut RngHandle,
) -> Result<i64, RandNetError> {
    let (u, v) = container.random_existing_edge(rng).ok_or_else(|| {
        RandNetError::Sampling(ErrorInfo::new("no-edges", "graph has no edge to remove"))
    })?;
    let (a, b) = container.random_non_existing_edge(rng).ok_or_else(|| {
        RandNetError::Sampling(ErrorInfo::new(
            "graph-complete",
            "graph has no absent pair to insert",
        ))
    })?;

    container.disconnect(u, v);
    let removed = triangles_through_edge(container, u, v) as i64;
    container.connect(a, b);
    let added = triangles_through_edge(container, a, b) as i64;
    Ok(added - removed)
}

/// Degree-preserving double-edge swap: removes two disjoint edges `(u, v)`
/// and `(w, x)` and adds the cross pairs `(u, w)` and `(v, x)`, returning
/// the signed triangle-count delta.
///
/// Candidates are rejection-sampled: the two edges must have four pairwise
/// distinct endpoints and neither cross pair may already be present. The
/// sampling loop is bounded by `max_attempts`; exhaustion surfaces a typed
/// error because small or dense graphs may admit no valid swap at all.
pub fn degree_preserving_swap(
    container: &mut GraphContainer,
    rng: &mut RngHandle,
    max_attempts: usize,
) -> Result<i64, RandNetError> {
    if container.edge_count() < 2 {
        return Err(RandNetError::Sampling(ErrorInfo::new(
            "insufficient-edges",
            "double-edge swap needs at least two edges",
        )));
    }

    for _ in 0..max_attempts {
        let Some((u, v)) = container.random_existing_edge(rng) else {
            break;
        };
        let Some((w, x)) = container.random_existing_edge(rng) else {
            break;
        };
        if u == w || u == x || v == w || v == x {
            continue;
        }
        if container.are_connected(u, w) || container.are_connected(v, x) {
            continue;
        }

        container.disconnect(u, v);
        container.disconnect(w, x);
        let removed = (triangles_through_edge(container, u, v)
            + triangles_through_edge(container, w, x)) as i64;
        container.connect(u, w);
        container.connect(v, x);
        let added = (triangles_through_edge(container, u, w)
            + triangles_through_edge(container, v, x)) as i64;
        return Ok(added - removed);
    }

    Err(RandNetError::Sampling(
        ErrorInfo::new(
            "swap-exhausted",
            "no valid double-edge-swap candidate found",
        )
        .with_context("max_attempts", max_attempts.to_string())
        .with_hint("dense or tiny graphs may admit no degree-preserving swap"),
    ))
}
