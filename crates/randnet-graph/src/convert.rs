use randnet_core::errors::{ErrorInfo, RandNetError};

use crate::container::GraphContainer;

/// Dense boolean adjacency matrix of the container.
pub fn to_matrix(container: &GraphContainer) -> Vec<Vec<bool>> {
    let n = container.size();
    let mut matrix = vec![vec![false; n]; n];
    for i in 0..n {
        for &j in container.neighbours(i) {
            matrix[i][j] = true;
        }
    }
    matrix
}

/// Builds a container from a dense boolean adjacency matrix.
///
/// This surface is fed by the file-I/O collaborator, so malformed input is a
/// typed error rather than an assertion. Diagonal entries are ignored; an
/// asymmetric matrix connects the union of both triangles.
pub fn from_matrix(matrix: &[Vec<bool>]) -> Result<GraphContainer, RandNetError> {
    let n = matrix.len();
    for (index, row) in matrix.iter().enumerate() {
        if row.len() != n {
            return Err(RandNetError::Graph(
                ErrorInfo::new("matrix-not-square", "adjacency matrix rows must have length n")
                    .with_context("row", index.to_string())
                    .with_context("row_len", row.len().to_string())
                    .with_context("n", n.to_string()),
            ));
        }
    }
    let mut container = GraphContainer::with_size(n);
    for (i, row) in matrix.iter().enumerate() {
        for (j, &connected) in row.iter().enumerate() {
            if connected && i != j {
                container.connect(i, j);
            }
        }
    }
    Ok(container)
}

/// Flat neighbour-pair list of the container, each pair `(i, j)` with
/// `i < j`, sorted.
pub fn neighbour_pairs(container: &GraphContainer) -> Vec<(usize, usize)> {
    let mut pairs = container.existing_edges().to_vec();
    pairs.sort_unstable();
    pairs
}

/// Builds a container on `n` vertices from a flat neighbour-pair list.
///
/// Out-of-range and self-loop pairs are typed errors (external input).
/// Duplicate pairs collapse to a single edge.
pub fn from_neighbour_pairs(
    n: usize,
    pairs: &[(usize, usize)],
) -> Result<GraphContainer, RandNetError> {
    let mut container = GraphContainer::with_size(n);
    for &(i, j) in pairs {
        if i >= n || j >= n {
            return Err(RandNetError::Graph(
                ErrorInfo::new("pair-out-of-range", "neighbour pair references unknown vertex")
                    .with_context("pair", format!("({i}, {j})"))
                    .with_context("n", n.to_string()),
            ));
        }
        if i == j {
            return Err(RandNetError::Graph(
                ErrorInfo::new("self-loop", "self-loops are not representable")
                    .with_context("vertex", i.to_string()),
            ));
        }
        container.connect(i, j);
    }
    Ok(container)
}
