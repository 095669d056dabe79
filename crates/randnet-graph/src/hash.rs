use sha2::{Digest, Sha256};

use crate::container::GraphContainer;

/// Computes the canonical structural hash for the provided container.
///
/// The hash covers the vertex count, the sorted edge list and the per-vertex
/// active flags, so two containers hash equal exactly when they are
/// structurally identical.
pub fn canonical_hash(container: &GraphContainer) -> String {
    let mut hasher = Sha256::new();
    hasher.update((container.size() as u64).to_le_bytes());

    let mut edges = container.existing_edges().to_vec();
    edges.sort_unstable();
    hasher.update((edges.len() as u64).to_le_bytes());
    for (i, j) in edges {
        hasher.update((i as u64).to_le_bytes());
        hasher.update((j as u64).to_le_bytes());
    }

    for &flag in container.active_flags() {
        hasher.update([u8::from(flag)]);
    }

    format!("{:x}", hasher.finalize())
}
