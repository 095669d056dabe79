#![deny(missing_docs)]

//! Incremental undirected graph container and the structural analyses built
//! on it: BFS statistics, k-core decomposition, conversions, canonical
//! hashing and serialization.

mod analyzer;
mod container;
mod convert;
mod degeneracy;
mod hash;
mod serialization;

pub use analyzer::{triangles_through_edge, StructuralAnalyzer};
pub use container::GraphContainer;
pub use convert::{from_matrix, from_neighbour_pairs, neighbour_pairs, to_matrix};
pub use degeneracy::{core_decomposition, core_decomposition_of, CoreDescriptor, DegeneracyResult};
pub use hash::canonical_hash;
pub use serialization::{graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json};
