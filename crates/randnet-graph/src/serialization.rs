use randnet_core::errors::{ErrorInfo, RandNetError};
use serde::{Deserialize, Serialize};

use crate::container::GraphContainer;
use crate::convert::from_neighbour_pairs;

/// Serializes the container to a compact binary representation using
/// `bincode`.
pub fn graph_to_bytes(container: &GraphContainer) -> Result<Vec<u8>, RandNetError> {
    let serializable = SerializableGraph::from_container(container);
    bincode::serialize(&serializable)
        .map_err(|err| RandNetError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a container from its binary representation.
pub fn graph_from_bytes(bytes: &[u8]) -> Result<GraphContainer, RandNetError> {
    let serializable: SerializableGraph = bincode::deserialize(bytes)
        .map_err(|err| RandNetError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    serializable.into_container()
}

/// Serializes the container to a JSON string.
pub fn graph_to_json(container: &GraphContainer) -> Result<String, RandNetError> {
    let serializable = SerializableGraph::from_container(container);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| RandNetError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a container from a JSON string.
pub fn graph_from_json(json: &str) -> Result<GraphContainer, RandNetError> {
    let serializable: SerializableGraph = serde_json::from_str(json)
        .map_err(|err| RandNetError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_container()
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableGraph {
    size: u64,
    edges: Vec<(u64, u64)>,
    active: Vec<bool>,
}

impl SerializableGraph {
    fn from_container(container: &GraphContainer) -> Self {
        let mut edges: Vec<(u64, u64)> = container
            .existing_edges()
            .iter()
            .map(|&(i, j)| (i as u64, j as u64))
            .collect();
        edges.sort_unstable();
        Self {
            size: container.size() as u64,
            edges,
            active: container.active_flags().to_vec(),
        }
    }

    fn into_container(self) -> Result<GraphContainer, RandNetError> {
        let size = self.size as usize;
        if self.active.len() != size {
            return Err(RandNetError::Serde(
                ErrorInfo::new("active-length-mismatch", "active flags must cover every vertex")
                    .with_context("size", size.to_string())
                    .with_context("active_len", self.active.len().to_string()),
            ));
        }
        let pairs: Vec<(usize, usize)> = self
            .edges
            .iter()
            .map(|&(i, j)| (i as usize, j as usize))
            .collect();
        let mut container = from_neighbour_pairs(size, &pairs)?;
        for (vertex, &flag) in self.active.iter().enumerate() {
            container.set_active(vertex, flag);
        }
        Ok(container)
    }
}
