use std::collections::VecDeque;

use randnet_core::{Histogram, StatisticId, StatisticValue};

use crate::container::GraphContainer;

/// Counts the triangles attributable to the endpoint pair `(i, j)`: the
/// number of common neighbours of `i` and `j`. The count is independent of
/// whether the edge `(i, j)` itself is currently present, which lets the
/// rewiring engine evaluate a pair before inserting or after removing it.
pub fn triangles_through_edge(container: &GraphContainer, i: usize, j: usize) -> usize {
    let mut count = 0;
    for &t in container.neighbours(j) {
        if t != i && container.are_connected(t, i) {
            count += 1;
        }
    }
    count
}

#[derive(Debug, Clone)]
struct PathInfo {
    distance_distribution: Histogram,
    diameter: u32,
    average_path_length: f64,
    edges_between_neighbours: Vec<u64>,
}

/// BFS-based structural analyzer over a borrowed container.
///
/// One per-source BFS pass (O(n·(n+E)) overall) produces the pairwise
/// distance histogram, the diameter, the average path length and the
/// per-vertex edges-between-neighbours counts. The pass runs once and is
/// cached; triangle counts, clustering coefficients and their distributions
/// all reuse the cached counts instead of repeating the sweep.
///
/// The graph need not be connected: unreachable pairs are excluded from the
/// distance statistics, and empty aggregates evaluate to 0 rather than
/// failing.
#[derive(Debug)]
pub struct StructuralAnalyzer<'g> {
    container: &'g GraphContainer,
    paths: Option<PathInfo>,
    coefficients: Option<Vec<f64>>,
}

impl<'g> StructuralAnalyzer<'g> {
    /// Creates an analyzer over the provided container.
    pub fn new(container: &'g GraphContainer) -> Self {
        Self {
            container,
            paths: None,
            coefficients: None,
        }
    }

    /// Number of edges in the analyzed graph.
    pub fn edge_count(&self) -> usize {
        self.container.edge_count()
    }

    /// Average vertex degree, 2E/n. Zero for the empty vertex set.
    pub fn average_degree(&self) -> f64 {
        let n = self.container.size();
        if n == 0 {
            return 0.0;
        }
        2.0 * self.container.edge_count() as f64 / n as f64
    }

    /// Average shortest-path length over reachable pairs.
    pub fn average_path_length(&mut self) -> f64 {
        self.path_info().average_path_length
    }

    /// Maximum finite shortest-path length.
    pub fn diameter(&mut self) -> u32 {
        self.path_info().diameter
    }

    /// Histogram of pairwise shortest-path lengths (unordered pairs).
    pub fn distance_distribution(&mut self) -> Histogram {
        self.path_info().distance_distribution.clone()
    }

    /// Number of triangles vertex `i` participates in.
    pub fn triangles_of(&mut self, i: usize) -> u64 {
        self.path_info().edges_between_neighbours[i]
    }

    /// Global triangle count: Σ_v triangles(v) / 3.
    pub fn cycles3(&mut self) -> u64 {
        let total: u64 = self.path_info().edges_between_neighbours.iter().sum();
        total / 3
    }

    /// Global 4-cycle count.
    pub fn cycles4(&self) -> u64 {
        let n = self.container.size();
        let mut total = 0u64;
        for v in 0..n {
            total += self.four_cycles_of(v);
        }
        total / 4
    }

    /// Per-vertex clustering coefficients.
    ///
    /// triangles(v) / C(deg(v), 2) for deg(v) ≥ 2; denominator 1 when
    /// deg(v) = 1; 0 when deg(v) = 0.
    pub fn clustering_coefficients(&mut self) -> &[f64] {
        if self.coefficients.is_none() {
            let n = self.container.size();
            let between = self.path_info().edges_between_neighbours.clone();
            let mut coefficients = Vec::with_capacity(n);
            for i in 0..n {
                let degree = self.container.degree(i);
                let value = if degree == 0 {
                    0.0
                } else {
                    let possible = if degree == 1 {
                        1.0
                    } else {
                        (degree * (degree - 1)) as f64 / 2.0
                    };
                    between[i] as f64 / possible
                };
                coefficients.push(value);
            }
            self.coefficients = Some(coefficients);
        }
        self.coefficients.as_deref().expect("coefficients cached")
    }

    /// Mean of the per-vertex clustering coefficients. Zero for the empty
    /// vertex set.
    pub fn average_clustering_coefficient(&mut self) -> f64 {
        let coefficients = self.clustering_coefficients();
        if coefficients.is_empty() {
            return 0.0;
        }
        coefficients.iter().sum::<f64>() / coefficients.len() as f64
    }

    /// Histogram of clustering coefficient values over vertices.
    pub fn clustering_coefficient_distribution(&mut self) -> Histogram {
        let mut distribution = Histogram::new();
        let coefficients = self.clustering_coefficients().to_vec();
        for value in coefficients {
            distribution.increment(value);
        }
        distribution
    }

    /// Histogram of per-vertex triangle counts.
    pub fn triangle_by_vertex_distribution(&mut self) -> Histogram {
        let mut distribution = Histogram::new();
        let between = self.path_info().edges_between_neighbours.clone();
        for value in between {
            distribution.increment(value as u32);
        }
        distribution
    }

    /// Degree → vertex count, read from the container's incremental
    /// histogram. Empty buckets are omitted.
    pub fn degree_distribution(&self) -> Histogram {
        let mut distribution = Histogram::new();
        for (degree, &count) in self.container.degree_histogram().iter().enumerate() {
            if count > 0 {
                distribution.insert(degree as u32, count as f64);
            }
        }
        distribution
    }

    /// Connected component order → component count, via flood fill.
    pub fn connected_component_distribution(&self) -> Histogram {
        let n = self.container.size();
        let mut visited = vec![false; n];
        let mut distribution = Histogram::new();
        let mut queue = VecDeque::new();
        for start in 0..n {
            if visited[start] {
                continue;
            }
            visited[start] = true;
            queue.push_back(start);
            let mut order = 0u32;
            while let Some(u) = queue.pop_front() {
                order += 1;
                for &w in self.container.neighbours(u) {
                    if !visited[w] {
                        visited[w] = true;
                        queue.push_back(w);
                    }
                }
            }
            distribution.increment(order);
        }
        distribution
    }

    /// Per-vertex closeness centrality: 1 / Σ distances to reachable
    /// vertices, 0 for isolated vertices.
    pub fn closeness_centrality(&self) -> Vec<f64> {
        let n = self.container.size();
        let mut centralities = vec![0.0; n];
        let mut dist = vec![-1i64; n];
        for source in 0..n {
            self.bfs_levels(source, &mut dist);
            let far: i64 = dist.iter().filter(|&&d| d > 0).sum();
            if far > 0 {
                centralities[source] = 1.0 / far as f64;
            }
        }
        centralities
    }

    /// Per-vertex betweenness centrality (Brandes accumulation), halved for
    /// the undirected double count.
    pub fn betweenness_centrality(&self) -> Vec<f64> {
        let n = self.container.size();
        let mut centrality = vec![0.0; n];
        let mut dist = vec![-1i64; n];
        let mut sigma = vec![0.0f64; n];
        let mut delta = vec![0.0f64; n];
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];

        for source in 0..n {
            for i in 0..n {
                dist[i] = -1;
                sigma[i] = 0.0;
                delta[i] = 0.0;
                predecessors[i].clear();
            }
            dist[source] = 0;
            sigma[source] = 1.0;
            let mut order = Vec::with_capacity(n);
            let mut queue = VecDeque::new();
            queue.push_back(source);
            while let Some(v) = queue.pop_front() {
                order.push(v);
                for &w in self.container.neighbours(v) {
                    if dist[w] < 0 {
                        dist[w] = dist[v] + 1;
                        queue.push_back(w);
                    }
                    if dist[w] == dist[v] + 1 {
                        sigma[w] += sigma[v];
                        predecessors[w].push(v);
                    }
                }
            }
            while let Some(w) = order.pop() {
                for &v in &predecessors[w] {
                    delta[v] += (sigma[v] / sigma[w]) * (1.0 + delta[w]);
                }
                if w != source {
                    centrality[w] += delta[w];
                }
            }
        }

        for value in &mut centrality {
            *value /= 2.0;
        }
        centrality
    }

    /// Computes the statistic identified by `id`, dispatching exhaustively to
    /// the matching calculation. The returned value's shape always matches
    /// [`StatisticId::shape`].
    pub fn statistic(&mut self, id: StatisticId) -> StatisticValue {
        match id {
            StatisticId::EdgeCount => StatisticValue::Scalar(self.edge_count() as f64),
            StatisticId::AverageDegree => StatisticValue::Scalar(self.average_degree()),
            StatisticId::AveragePathLength => StatisticValue::Scalar(self.average_path_length()),
            StatisticId::Diameter => StatisticValue::Scalar(self.diameter() as f64),
            StatisticId::Cycles3 => StatisticValue::Scalar(self.cycles3() as f64),
            StatisticId::Cycles4 => StatisticValue::Scalar(self.cycles4() as f64),
            StatisticId::AverageClusteringCoefficient => {
                StatisticValue::Scalar(self.average_clustering_coefficient())
            }
            StatisticId::DegreeDistribution => {
                StatisticValue::Histogram(self.degree_distribution())
            }
            StatisticId::DistanceDistribution => {
                StatisticValue::Histogram(self.distance_distribution())
            }
            StatisticId::ClusteringCoefficientDistribution => {
                StatisticValue::Histogram(self.clustering_coefficient_distribution())
            }
            StatisticId::TriangleByVertexDistribution => {
                StatisticValue::Histogram(self.triangle_by_vertex_distribution())
            }
            StatisticId::ConnectedComponentDistribution => {
                StatisticValue::Histogram(self.connected_component_distribution())
            }
            StatisticId::ClosenessCentrality => {
                StatisticValue::ValueList(self.closeness_centrality())
            }
            StatisticId::BetweennessCentrality => {
                StatisticValue::ValueList(self.betweenness_centrality())
            }
        }
    }

    fn path_info(&mut self) -> &PathInfo {
        if self.paths.is_none() {
            self.paths = Some(self.compute_path_info());
        }
        self.paths.as_ref().expect("path info cached")
    }

    fn compute_path_info(&self) -> PathInfo {
        let n = self.container.size();
        let mut dist = vec![-1i64; n];
        let mut between = vec![0u64; n];
        let mut distance_distribution = Histogram::new();
        let mut diameter = 0u32;
        let mut sum = 0.0f64;
        let mut pairs = 0u64;

        for i in 0..n {
            between[i] = self.bfs_levels(i, &mut dist);
            for (j, &d) in dist.iter().enumerate().skip(i + 1) {
                if d < 0 {
                    continue;
                }
                let way = d as u32;
                distance_distribution.increment(way);
                if way > diameter {
                    diameter = way;
                }
                sum += way as f64;
                pairs += 1;
            }
        }

        let average_path_length = if pairs == 0 { 0.0 } else { sum / pairs as f64 };
        PathInfo {
            distance_distribution,
            diameter,
            average_path_length,
            edges_between_neighbours: between,
        }
    }

    /// BFS from `source`, filling `dist` with levels (-1 for unreachable).
    /// Returns the number of edges between the source's distance-1
    /// neighbours; every such edge closes a triangle through the source and
    /// is seen from both endpoints, hence the final halving.
    fn bfs_levels(&self, source: usize, dist: &mut [i64]) -> u64 {
        for d in dist.iter_mut() {
            *d = -1;
        }
        dist[source] = 0;
        let mut between = 0u64;
        let mut queue = VecDeque::new();
        queue.push_back(source);
        while let Some(u) = queue.pop_front() {
            for &w in self.container.neighbours(u) {
                if dist[w] < 0 {
                    dist[w] = dist[u] + 1;
                    queue.push_back(w);
                } else if dist[u] == 1 && dist[w] == 1 {
                    between += 1;
                }
            }
        }
        between / 2
    }

    fn four_cycles_of(&self, v: usize) -> u64 {
        let mut count = 0u64;
        for &a in self.container.neighbours(v) {
            for &b in self.container.neighbours(a) {
                if b == v {
                    continue;
                }
                for &c in self.container.neighbours(b) {
                    if c != a && self.container.are_connected(c, v) {
                        count += 1;
                    }
                }
            }
        }
        count / 2
    }
}
