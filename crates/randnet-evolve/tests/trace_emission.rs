use std::path::PathBuf;

use randnet_core::errors::{ErrorInfo, RandNetError};
use randnet_evolve::{
    run, CancelFlag, JsonTraceSink, RewireStrategy, RunConfig, TraceFormat, TracePayload,
    TraceRequest, TraceSink,
};
use randnet_graph::GraphContainer;

fn seeded_graph() -> GraphContainer {
    let mut container = GraphContainer::with_size(6);
    container.connect(0, 1);
    container.connect(1, 2);
    container.connect(2, 0);
    container.connect(3, 4);
    container.connect(4, 5);
    container.set_active(0, true);
    container
}

fn traced_config(steps: u32, interval: u32, format: TraceFormat) -> RunConfig {
    let mut config = RunConfig::default();
    config.step_count = steps;
    config.strategy = RewireStrategy::DegreePreservingSwap;
    config.trace.interval = interval;
    config.trace.format = format;
    config
}

#[test]
fn snapshots_land_at_the_configured_interval() {
    let dir = tempfile::tempdir().unwrap();
    let container = seeded_graph();
    let config = traced_config(6, 2, TraceFormat::Matrix);
    let mut sink = JsonTraceSink::new(dir.path());

    let summary = run(&config, 77, &container, &mut sink, &CancelFlag::new());

    assert_eq!(summary.trace_files.len(), 3);
    for path in &summary.trace_files {
        let contents = std::fs::read_to_string(path).unwrap();
        let request: TraceRequest = serde_json::from_str(&contents).unwrap();
        assert_eq!(request.active.len(), 6);
        assert!(request.active[0]);
        match request.payload {
            TracePayload::Matrix(matrix) => {
                assert_eq!(matrix.len(), 6);
                assert!(matrix.iter().all(|row| row.len() == 6));
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }
}

#[test]
fn neighbour_pair_snapshots_carry_sorted_pairs() {
    let dir = tempfile::tempdir().unwrap();
    let container = seeded_graph();
    let config = traced_config(2, 2, TraceFormat::NeighbourPairs);
    let mut sink = JsonTraceSink::new(dir.path());

    let summary = run(&config, 9, &container, &mut sink, &CancelFlag::new());

    assert_eq!(summary.trace_files.len(), 1);
    let contents = std::fs::read_to_string(&summary.trace_files[0]).unwrap();
    let request: TraceRequest = serde_json::from_str(&contents).unwrap();
    match request.payload {
        TracePayload::NeighbourPairs(pairs) => {
            assert_eq!(pairs.len(), 5);
            assert!(pairs.windows(2).all(|w| w[0] < w[1]));
            assert!(pairs.iter().all(|&(i, j)| i < j));
        }
        other => panic!("unexpected payload: {other:?}"),
    }
}

struct CountingSink {
    progress_calls: Vec<u32>,
}

impl TraceSink for CountingSink {
    fn write_snapshot(&mut self, _request: &TraceRequest) -> Result<Option<PathBuf>, RandNetError> {
        Ok(None)
    }

    fn on_progress(&mut self, step: u32, _step_count: u32) {
        self.progress_calls.push(step);
    }
}

#[test]
fn progress_is_notified_once_per_interval() {
    let container = seeded_graph();
    let config = traced_config(9, 3, TraceFormat::Matrix);
    let mut sink = CountingSink {
        progress_calls: Vec::new(),
    };

    let _ = run(&config, 5, &container, &mut sink, &CancelFlag::new());

    assert_eq!(sink.progress_calls, vec![3, 6, 9]);
}

struct FailingSink;

impl TraceSink for FailingSink {
    fn write_snapshot(&mut self, _request: &TraceRequest) -> Result<Option<PathBuf>, RandNetError> {
        Err(RandNetError::Trace(ErrorInfo::new(
            "snapshot-write",
            "disk unavailable",
        )))
    }
}

#[test]
fn a_failing_sink_is_recovered_by_resetting_to_the_initial_state() {
    let container = seeded_graph();
    let config = traced_config(3, 3, TraceFormat::Matrix);
    let mut sink = FailingSink;

    let summary = run(&config, 21, &container, &mut sink, &CancelFlag::new());

    // the run completes; the failure is counted and the working state was
    // reset to the initial checkpoint at the traced step
    assert_eq!(summary.failed_steps, 1);
    assert_eq!(summary.trajectory.len(), 4);
    assert_eq!(summary.final_cycles3, 1);
    assert!(summary.trace_files.is_empty());
}
