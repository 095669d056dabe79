#![deny(missing_docs)]

//! Markov-chain rewiring engine: edge-swap move primitives and a Metropolis
//! trajectory sampler recording triangle-count time series over evolving
//! graphs.

/// YAML configuration schema and defaults.
pub mod config;
/// Deterministic seed derivation helpers.
pub mod determinism;
/// Rewiring move primitives.
pub mod moves;
/// Trace-sink capability and snapshot payloads.
pub mod trace;
/// The Metropolis trajectory sampler and its run summary.
pub mod trajectory;

pub use config::{
    RewireStrategy, RunConfig, SamplingConfig, SeedPolicy, TraceConfig, TraceFormat,
};
pub use moves::{degree_preserving_swap, edge_exchange};
pub use trace::{JsonTraceSink, NullTraceSink, TracePayload, TraceRequest, TraceSink};
pub use trajectory::{run, CancelFlag, RunSummary, TrajectoryPoint};
