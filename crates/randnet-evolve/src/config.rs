use randnet_core::errors::{ErrorInfo, RandNetError};
use serde::{Deserialize, Serialize};

/// Move primitive driving a whole trajectory run.
///
/// The two strategies are deliberately separate: the edge exchange changes
/// four vertex degrees per step while the acceptance rule still weighs only
/// the triangle delta, giving it a larger state space than the
/// degree-preserving swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RewireStrategy {
    /// Remove a uniform random existing edge and insert a uniform random
    /// absent pair. Does not preserve the degree sequence.
    EdgeExchange,
    /// Double-edge swap: removes two disjoint edges and adds the two cross
    /// pairs, preserving every vertex degree.
    DegreePreservingSwap,
}

impl Default for RewireStrategy {
    fn default() -> Self {
        RewireStrategy::DegreePreservingSwap
    }
}

/// YAML-configurable parameters governing a trajectory run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of evolution steps to execute.
    pub step_count: u32,
    /// Metropolis control value ν: a triangle-decreasing move is accepted
    /// with probability exp(−ν·|Δ|). Larger values are greedier; ν → 0
    /// approaches an unweighted random walk.
    #[serde(default = "default_nu")]
    pub nu: f64,
    /// Move primitive used for the whole run.
    #[serde(default)]
    pub strategy: RewireStrategy,
    /// Rejection-sampling bounds.
    #[serde(default)]
    pub sampling: SamplingConfig,
    /// Trace snapshot behaviour.
    #[serde(default)]
    pub trace: TraceConfig,
    /// Master seed policy.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
}

fn default_nu() -> f64 {
    1.0
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            step_count: 128,
            nu: default_nu(),
            strategy: RewireStrategy::default(),
            sampling: SamplingConfig::default(),
            trace: TraceConfig::default(),
            seed_policy: SeedPolicy::default(),
        }
    }
}

impl RunConfig {
    /// Parses a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, RandNetError> {
        serde_yaml::from_str(yaml)
            .map_err(|err| RandNetError::Serde(ErrorInfo::new("config-parse", err.to_string())))
    }

    /// Serializes the configuration to YAML.
    pub fn to_yaml(&self) -> Result<String, RandNetError> {
        serde_yaml::to_string(self)
            .map_err(|err| RandNetError::Serde(ErrorInfo::new("config-serialize", err.to_string())))
    }
}

/// Bounds on the rejection sampling performed by the swap primitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Maximum candidate draws before the double-edge swap gives up with a
    /// typed exhaustion error. Small dense graphs may admit no valid swap,
    /// so the loop must not be unbounded.
    #[serde(default = "default_max_swap_attempts")]
    pub max_swap_attempts: usize,
}

fn default_max_swap_attempts() -> usize {
    10_000
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            max_swap_attempts: default_max_swap_attempts(),
        }
    }
}

/// Snapshot payload format written by the trace sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraceFormat {
    /// Dense boolean adjacency matrix.
    Matrix,
    /// Flat neighbour-pair list.
    NeighbourPairs,
}

impl Default for TraceFormat {
    fn default() -> Self {
        TraceFormat::Matrix
    }
}

/// Trace snapshot configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Steps between snapshots. 0 disables tracing.
    #[serde(default)]
    pub interval: u32,
    /// Payload format handed to the sink.
    #[serde(default)]
    pub format: TraceFormat,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            interval: 0,
            format: TraceFormat::default(),
        }
    }
}

/// Deterministic seeding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Master seed used for the run.
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,
}

fn default_master_seed() -> u64 {
    0x05EE_D5EE_DD15_5EED_u64
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            master_seed: default_master_seed(),
        }
    }
}
