use std::collections::HashMap;

use rand::seq::SliceRandom;
use randnet_core::RngHandle;

/// Returns the unordered pair `(i, j)` with the smaller index first.
fn ordered_pair(i: usize, j: usize) -> (usize, usize) {
    if i < j {
        (i, j)
    } else {
        (j, i)
    }
}

/// Indexed pool of unordered vertex pairs supporting O(1) insert, remove and
/// uniform random pick.
#[derive(Debug, Clone, Default)]
struct EdgePool {
    pairs: Vec<(usize, usize)>,
    positions: HashMap<(usize, usize), usize>,
}

impl EdgePool {
    fn insert(&mut self, pair: (usize, usize)) {
        debug_assert!(!self.positions.contains_key(&pair));
        self.positions.insert(pair, self.pairs.len());
        self.pairs.push(pair);
    }

    fn remove(&mut self, pair: (usize, usize)) -> bool {
        match self.positions.remove(&pair) {
            Some(index) => {
                self.pairs.swap_remove(index);
                if index < self.pairs.len() {
                    self.positions.insert(self.pairs[index], index);
                }
                true
            }
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.pairs.len()
    }

    fn choose(&self, rng: &mut RngHandle) -> Option<(usize, usize)> {
        self.pairs.choose(rng).copied()
    }

    fn as_slice(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    fn clear(&mut self) {
        self.pairs.clear();
        self.positions.clear();
    }
}

/// Mutable undirected graph container with incremental indices.
///
/// Alongside the adjacency lists the container maintains a degree histogram
/// (`histogram[d]` = number of vertices whose degree is exactly `d`) and the
/// complementary existing/non-existing edge pools over all C(n,2) unordered
/// pairs. The pools are materialized so that a uniform random edge (or
/// non-edge) is an O(1) index pick; populating them costs O(n²) on sizing,
/// which is acceptable for the target graph sizes.
///
/// Vertex indices are in `[0, size)`. Out-of-range indices are caller bugs
/// and are only checked with debug assertions.
#[derive(Debug, Clone, Default)]
pub struct GraphContainer {
    size: usize,
    neighbours: Vec<Vec<usize>>,
    degree_histogram: Vec<usize>,
    existing: EdgePool,
    non_existing: EdgePool,
    active: Vec<bool>,
}

impl GraphContainer {
    /// Creates an empty container with no vertices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a container already sized to `n` isolated vertices.
    pub fn with_size(n: usize) -> Self {
        let mut container = Self::new();
        container.set_size(n);
        container
    }

    /// Resets the container to the empty graph on `n` vertices.
    ///
    /// All indices are rebuilt: every vertex starts at degree 0, the existing
    /// pool is empty and the non-existing pool holds every unordered pair.
    pub fn set_size(&mut self, n: usize) {
        self.size = n;
        self.neighbours = vec![Vec::new(); n];
        self.degree_histogram = vec![0; n];
        if n > 0 {
            self.degree_histogram[0] = n;
        }
        self.existing.clear();
        self.non_existing.clear();
        for i in 0..n {
            for j in (i + 1)..n {
                self.non_existing.insert((i, j));
            }
        }
        self.active = vec![false; n];
    }

    /// Appends an isolated vertex, growing every index by one.
    pub fn add_vertex(&mut self) -> usize {
        let vertex = self.size;
        self.size += 1;
        self.neighbours.push(Vec::new());
        self.degree_histogram.push(0);
        self.degree_histogram[0] += 1;
        for i in 0..vertex {
            self.non_existing.insert((i, vertex));
        }
        self.active.push(false);
        vertex
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of edges currently present.
    pub fn edge_count(&self) -> usize {
        self.existing.len()
    }

    /// Degree of vertex `i`.
    pub fn degree(&self, i: usize) -> usize {
        debug_assert!(i < self.size);
        self.neighbours[i].len()
    }

    /// Neighbour list of vertex `i`. Order is unspecified.
    pub fn neighbours(&self, i: usize) -> &[usize] {
        debug_assert!(i < self.size);
        &self.neighbours[i]
    }

    /// Returns whether an edge between `i` and `j` is present.
    pub fn are_connected(&self, i: usize, j: usize) -> bool {
        debug_assert!(i < self.size && j < self.size);
        self.neighbours[i].contains(&j)
    }

    /// Inserts the edge `(i, j)`. Returns `false` (and leaves every index
    /// untouched) for self-loops and already-present edges.
    pub fn connect(&mut self, i: usize, j: usize) -> bool {
        debug_assert!(i < self.size && j < self.size);
        if i == j || self.are_connected(i, j) {
            return false;
        }
        let degree_i = self.neighbours[i].len();
        let degree_j = self.neighbours[j].len();
        self.neighbours[i].push(j);
        self.neighbours[j].push(i);
        self.degree_histogram[degree_i] -= 1;
        self.degree_histogram[degree_i + 1] += 1;
        self.degree_histogram[degree_j] -= 1;
        self.degree_histogram[degree_j + 1] += 1;
        let pair = ordered_pair(i, j);
        let moved = self.non_existing.remove(pair);
        debug_assert!(moved);
        self.existing.insert(pair);
        true
    }

    /// Removes the edge `(i, j)`. Returns `false` if the edge was absent.
    pub fn disconnect(&mut self, i: usize, j: usize) -> bool {
        debug_assert!(i < self.size && j < self.size);
        if i == j || !self.are_connected(i, j) {
            return false;
        }
        let degree_i = self.neighbours[i].len();
        let degree_j = self.neighbours[j].len();
        remove_neighbour(&mut self.neighbours[i], j);
        remove_neighbour(&mut self.neighbours[j], i);
        self.degree_histogram[degree_i] -= 1;
        self.degree_histogram[degree_i - 1] += 1;
        self.degree_histogram[degree_j] -= 1;
        self.degree_histogram[degree_j - 1] += 1;
        let pair = ordered_pair(i, j);
        let moved = self.existing.remove(pair);
        debug_assert!(moved);
        self.non_existing.insert(pair);
        true
    }

    /// Degree histogram: `histogram[d]` counts vertices with degree exactly
    /// `d`. The entries sum to the vertex count.
    pub fn degree_histogram(&self) -> &[usize] {
        &self.degree_histogram
    }

    /// All present edges as `(i, j)` pairs with `i < j`. Order is
    /// unspecified.
    pub fn existing_edges(&self) -> &[(usize, usize)] {
        self.existing.as_slice()
    }

    /// Number of unordered pairs currently unconnected.
    pub fn non_existing_edge_count(&self) -> usize {
        self.non_existing.len()
    }

    /// Uniform random present edge, or `None` on an edgeless graph.
    pub fn random_existing_edge(&self, rng: &mut RngHandle) -> Option<(usize, usize)> {
        self.existing.choose(rng)
    }

    /// Uniform random absent pair, or `None` on a complete graph.
    pub fn random_non_existing_edge(&self, rng: &mut RngHandle) -> Option<(usize, usize)> {
        self.non_existing.choose(rng)
    }

    /// Sets the active flag of vertex `i`.
    pub fn set_active(&mut self, i: usize, active: bool) {
        debug_assert!(i < self.size);
        self.active[i] = active;
    }

    /// Returns the active flag of vertex `i`.
    pub fn is_active(&self, i: usize) -> bool {
        debug_assert!(i < self.size);
        self.active[i]
    }

    /// Per-vertex active flags.
    pub fn active_flags(&self) -> &[bool] {
        &self.active
    }
}

fn remove_neighbour(list: &mut Vec<usize>, vertex: usize) {
    if let Some(position) = list.iter().position(|&v| v == vertex) {
        list.swap_remove(position);
    }
}
