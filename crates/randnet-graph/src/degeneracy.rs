use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::container::GraphContainer;

/// Cumulative size of the k-core: vertices and edges whose coreness is at
/// least `k`. Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreDescriptor {
    /// Core threshold this descriptor belongs to.
    pub k: u32,
    /// Number of vertices with coreness ≥ k.
    pub cumulative_vertex_count: u64,
    /// Number of edges whose both endpoints have coreness ≥ k.
    pub cumulative_edge_count: u64,
}

/// Output of the k-core peeling decomposition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegeneracyResult {
    /// Coreness per vertex: the largest k such that the vertex lies in a
    /// subgraph where every vertex has degree ≥ k within that subgraph.
    pub coreness: Vec<u32>,
    /// Minimum vertex degree of the input graph.
    pub min_degree: u32,
    /// Maximum coreness over all vertices.
    pub degeneracy: u32,
    /// Core descriptors keyed by k, accumulated from the degeneracy down
    /// to 1.
    pub descriptors: BTreeMap<u32, CoreDescriptor>,
    /// Fraction of vertices with coreness exactly k, for every
    /// k ∈ [0, degeneracy]. Sums to 1 over that range.
    pub collapse_sequence: BTreeMap<u32, f64>,
}

/// Runs the decomposition over a container's current edge set.
pub fn core_decomposition_of(container: &GraphContainer) -> DegeneracyResult {
    core_decomposition(container.size(), container.existing_edges())
}

/// Bucket-queue k-core peeling, linear in V+E.
///
/// Vertices sit in buckets keyed by their remaining degree; the peel always
/// pops from the lowest non-empty bucket, assigns that bucket index as the
/// popped vertex's coreness, and demotes unprocessed neighbours one bucket.
/// The pick among same-bucket vertices is unspecified and callers must not
/// depend on it.
///
/// An edgeless input (including `vertex_count == 0`) produces a valid empty
/// result: all-zero coreness, empty descriptor map, empty collapse sequence.
pub fn core_decomposition(vertex_count: usize, edges: &[(usize, usize)]) -> DegeneracyResult {
    let n = vertex_count;
    if edges.is_empty() {
        return DegeneracyResult {
            coreness: vec![0; n],
            min_degree: 0,
            degeneracy: 0,
            descriptors: BTreeMap::new(),
            collapse_sequence: BTreeMap::new(),
        };
    }

    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
    for &(u, v) in edges {
        debug_assert!(u < n && v < n && u != v);
        adjacency[u].push(v);
        adjacency[v].push(u);
    }

    let mut degrees: Vec<usize> = adjacency.iter().map(|list| list.len()).collect();
    let initial_min_degree = degrees.iter().min().copied().unwrap_or(0);

    let mut buckets: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); n];
    for (vertex, &degree) in degrees.iter().enumerate() {
        buckets[degree].insert(vertex);
    }

    let mut coreness = vec![0u32; n];
    let mut processed = vec![false; n];
    let mut degeneracy = 0u32;
    let mut min_degree = initial_min_degree;
    let mut remaining = n;

    while remaining > 0 {
        let Some(vertex) = buckets[min_degree].pop_first() else {
            min_degree += 1;
            continue;
        };
        processed[vertex] = true;
        remaining -= 1;
        coreness[vertex] = min_degree as u32;
        degeneracy = degeneracy.max(min_degree as u32);
        for &neighbour in &adjacency[vertex] {
            if processed[neighbour] {
                continue;
            }
            let degree = degrees[neighbour];
            if degree > min_degree {
                buckets[degree].remove(&neighbour);
                degrees[neighbour] = degree - 1;
                buckets[degree - 1].insert(neighbour);
                min_degree = min_degree.min(degree - 1);
            }
        }
    }

    let mut vertices_at = vec![0u64; degeneracy as usize + 1];
    for &c in &coreness {
        vertices_at[c as usize] += 1;
    }
    let mut edges_at = vec![0u64; degeneracy as usize + 1];
    for &(u, v) in edges {
        let bucket = coreness[u].min(coreness[v]);
        edges_at[bucket as usize] += 1;
    }

    let mut descriptors = BTreeMap::new();
    let mut cumulative_vertices = 0u64;
    let mut cumulative_edges = 0u64;
    for k in (1..=degeneracy).rev() {
        cumulative_vertices += vertices_at[k as usize];
        cumulative_edges += edges_at[k as usize];
        descriptors.insert(
            k,
            CoreDescriptor {
                k,
                cumulative_vertex_count: cumulative_vertices,
                cumulative_edge_count: cumulative_edges,
            },
        );
    }

    let mut collapse_sequence = BTreeMap::new();
    for k in 0..=degeneracy {
        collapse_sequence.insert(k, vertices_at[k as usize] as f64 / n as f64);
    }

    DegeneracyResult {
        coreness,
        min_degree: initial_min_degree as u32,
        degeneracy,
        descriptors,
        collapse_sequence,
    }
}
