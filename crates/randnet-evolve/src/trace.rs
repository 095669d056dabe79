use std::fs;
use std::path::PathBuf;

use randnet_core::errors::{ErrorInfo, RandNetError};
use randnet_graph::{neighbour_pairs, to_matrix, GraphContainer};
use serde::{Deserialize, Serialize};

use crate::config::TraceFormat;

/// Graph payload carried by a trace request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "format", content = "data", rename_all = "kebab-case")]
pub enum TracePayload {
    /// Dense boolean adjacency matrix.
    Matrix(Vec<Vec<bool>>),
    /// Flat neighbour-pair list.
    NeighbourPairs(Vec<(usize, usize)>),
}

/// Snapshot request handed to the trace sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceRequest {
    /// Step the snapshot was taken at.
    pub step: u32,
    /// Graph payload in the configured format.
    pub payload: TracePayload,
    /// Per-vertex active flags at snapshot time.
    pub active: Vec<bool>,
}

impl TraceRequest {
    /// Builds a request from the container state in the given format.
    pub fn from_container(step: u32, format: TraceFormat, container: &GraphContainer) -> Self {
        let payload = match format {
            TraceFormat::Matrix => TracePayload::Matrix(to_matrix(container)),
            TraceFormat::NeighbourPairs => TracePayload::NeighbourPairs(neighbour_pairs(container)),
        };
        Self {
            step,
            payload,
            active: container.active_flags().to_vec(),
        }
    }
}

/// Injected persistence capability for trajectory runs.
///
/// Writing is a blocking external call and the only I/O the engine performs;
/// the sampler treats sink failures as transient step failures.
pub trait TraceSink {
    /// Persists one snapshot. Returns the written path, if any.
    fn write_snapshot(&mut self, request: &TraceRequest) -> Result<Option<PathBuf>, RandNetError>;

    /// Progress notification, delivered once per trace interval.
    fn on_progress(&mut self, _step: u32, _step_count: u32) {}
}

/// Sink that drops every snapshot. Used when tracing is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTraceSink;

impl TraceSink for NullTraceSink {
    fn write_snapshot(&mut self, _request: &TraceRequest) -> Result<Option<PathBuf>, RandNetError> {
        Ok(None)
    }
}

/// Sink writing each snapshot as a JSON file into a directory.
#[derive(Debug, Clone)]
pub struct JsonTraceSink {
    directory: PathBuf,
}

impl JsonTraceSink {
    /// Creates a sink rooted at `directory`. The directory is created on the
    /// first write.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    fn snapshot_path(&self, step: u32) -> PathBuf {
        self.directory.join(format!("snapshot_{step:05}.json"))
    }
}

impl TraceSink for JsonTraceSink {
    fn write_snapshot(&mut self, request: &TraceRequest) -> Result<Option<PathBuf>, RandNetError> {
        fs::create_dir_all(&self.directory).map_err(|err| {
            RandNetError::Trace(
                ErrorInfo::new("trace-mkdir", err.to_string())
                    .with_context("path", self.directory.display().to_string()),
            )
        })?;
        let json = serde_json::to_string_pretty(request).map_err(|err| {
            RandNetError::Trace(ErrorInfo::new("snapshot-serialize", err.to_string()))
        })?;
        let path = self.snapshot_path(request.step);
        fs::write(&path, json).map_err(|err| {
            RandNetError::Trace(
                ErrorInfo::new("snapshot-write", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Ok(Some(path))
    }
}
