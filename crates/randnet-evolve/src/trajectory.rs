use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use indexmap::IndexSet;
use randnet_core::{RandNetError, RngHandle};
use randnet_graph::{canonical_hash, GraphContainer, StructuralAnalyzer};
use serde::{Deserialize, Serialize};

use crate::config::{RewireStrategy, RunConfig};
use crate::determinism;
use crate::moves;
use crate::trace::{TraceRequest, TraceSink};

/// Shared cancellation flag polled once per trajectory step.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Creates a flag in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. The sampler stops before its next step.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// One recorded trajectory sample: the post-decision triangle count at a
/// step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    /// Step index, 0 for the initial state.
    pub step: u32,
    /// Triangle count after the step's accept/reject decision.
    pub cycles3: i64,
}

/// Summary returned to callers after a trajectory run completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Ordered (step → triangle count) sequence, one entry per step plus the
    /// initial state.
    pub trajectory: Vec<TrajectoryPoint>,
    /// Steps whose move was accepted.
    pub accepted_steps: usize,
    /// Steps whose move was rejected and rolled back.
    pub rejected_steps: usize,
    /// Steps that failed unexpectedly and were hard-reset from the initial
    /// checkpoint.
    pub failed_steps: usize,
    /// Number of distinct structural states visited, by canonical hash.
    pub unique_state_hashes: usize,
    /// Triangle count of the final state.
    pub final_cycles3: i64,
    /// Whether the run stopped early on the cancellation flag.
    pub cancelled: bool,
    /// Snapshot files written by the trace sink.
    pub trace_files: Vec<PathBuf>,
}

/// Runs the Metropolis trajectory sampler.
///
/// The caller's container is never mutated: the sampler clones it as the
/// initial checkpoint and evolves the clone. Each step snapshots the working
/// state, applies the configured move to obtain a triangle delta Δ and
/// accepts outright when Δ > 0; otherwise the move is accepted with
/// probability exp(−ν·|Δ|) and rolled back to the pre-step snapshot on
/// rejection. The recorded count is always the post-decision value.
///
/// Unexpected mid-step failures (swap exhaustion, trace I/O) hard-reset the
/// working state from the initial checkpoint and the run continues; the
/// summary counts such steps so the recovery is visible to callers. Move and
/// acceptance randomness come from per-step substreams of `seed`, so a rerun
/// with the same configuration and seed reproduces the identical
/// accept/reject sequence.
pub fn run(
    config: &RunConfig,
    seed: u64,
    container: &GraphContainer,
    sink: &mut dyn TraceSink,
    cancel: &CancelFlag,
) -> RunSummary {
    let initial = container.clone();
    let mut working = container.clone();
    let initial_cycles3 = {
        let mut analyzer = StructuralAnalyzer::new(&working);
        analyzer.cycles3() as i64
    };

    let mut current = initial_cycles3;
    let mut trajectory = vec![TrajectoryPoint {
        step: 0,
        cycles3: current,
    }];
    let mut unique_hashes: IndexSet<String> = IndexSet::new();
    unique_hashes.insert(canonical_hash(&working));

    let mut accepted_steps = 0usize;
    let mut rejected_steps = 0usize;
    let mut failed_steps = 0usize;
    let mut trace_files = Vec::new();
    let mut cancelled = false;

    for step in 1..=config.step_count {
        if cancel.is_cancelled() {
            cancelled = true;
            break;
        }

        let previous = working.clone();
        let previous_count = current;
        let mut move_rng = RngHandle::from_seed(determinism::move_seed(seed, step));

        match apply_move(config, &mut working, &mut move_rng) {
            Ok(delta) => {
                let candidate = current + delta;
                let accept = if delta > 0 {
                    true
                } else {
                    let mut accept_rng =
                        RngHandle::from_seed(determinism::accept_seed(seed, step));
                    accept_rng.next_unit() < (-config.nu * delta.abs() as f64).exp()
                };
                if accept {
                    current = candidate;
                    accepted_steps += 1;
                    unique_hashes.insert(canonical_hash(&working));
                } else {
                    working = previous;
                    current = previous_count;
                    rejected_steps += 1;
                }
                trajectory.push(TrajectoryPoint {
                    step,
                    cycles3: current,
                });

                if config.trace.interval > 0 && step % config.trace.interval == 0 {
                    match sink.write_snapshot(&TraceRequest::from_container(
                        step,
                        config.trace.format,
                        &working,
                    )) {
                        Ok(Some(path)) => trace_files.push(path),
                        Ok(None) => {}
                        Err(_) => {
                            // transient persistence failure: hard reset from
                            // the initial checkpoint and keep going
                            working = initial.clone();
                            current = initial_cycles3;
                            failed_steps += 1;
                        }
                    }
                    sink.on_progress(step, config.step_count);
                }
            }
            Err(_) => {
                working = initial.clone();
                current = initial_cycles3;
                failed_steps += 1;
                trajectory.push(TrajectoryPoint {
                    step,
                    cycles3: current,
                });
            }
        }
    }

    RunSummary {
        trajectory,
        accepted_steps,
        rejected_steps,
        failed_steps,
        unique_state_hashes: unique_hashes.len(),
        final_cycles3: current,
        cancelled,
        trace_files,
    }
}

fn apply_move(
    config: &RunConfig,
    working: &mut GraphContainer,
    rng: &mut RngHandle,
) -> Result<i64, RandNetError> {
    match config.strategy {
        RewireStrategy::EdgeExchange => moves::edge_exchange(working, rng),
        RewireStrategy::DegreePreservingSwap => {
            moves::degree_preserving_swap(working, rng, config.sampling.max_swap_attempts)
        }
    }
}
