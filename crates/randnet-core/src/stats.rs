//! Typed statistic identifiers and the result shapes they produce.
//!
//! The research layer aggregates per-realization results keyed by a statistic
//! identifier. Each identifier maps to exactly one result shape, resolved
//! through an exhaustive compile-time dispatch table instead of runtime
//! attribute lookup.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Total-ordered histogram key over `f64`.
///
/// Distribution keys span both integer domains (distances, degrees, component
/// orders) and fractional ones (clustering coefficient values), so the key is
/// an `f64` ordered by `total_cmp`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistogramKey(pub f64);

impl HistogramKey {
    /// Returns the raw key value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Eq for HistogramKey {}

impl Ord for HistogramKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for HistogramKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<f64> for HistogramKey {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<u32> for HistogramKey {
    fn from(value: u32) -> Self {
        Self(value as f64)
    }
}

/// Sparse key → value histogram used for distribution-shaped statistics.
///
/// Serialized as a sorted `(key, value)` pair list, since JSON maps cannot
/// carry fractional keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<(f64, f64)>", from = "Vec<(f64, f64)>")]
pub struct Histogram {
    entries: BTreeMap<HistogramKey, f64>,
}

impl Histogram {
    /// Creates an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the count stored under `key` by one.
    pub fn increment(&mut self, key: impl Into<HistogramKey>) {
        *self.entries.entry(key.into()).or_insert(0.0) += 1.0;
    }

    /// Sets the value stored under `key`.
    pub fn insert(&mut self, key: impl Into<HistogramKey>, value: f64) {
        self.entries.insert(key.into(), value);
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: impl Into<HistogramKey>) -> Option<f64> {
        self.entries.get(&key.into()).copied()
    }

    /// Iterates over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.entries.iter().map(|(key, value)| (key.0, *value))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the histogram holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum over all stored values.
    pub fn total(&self) -> f64 {
        self.entries.values().sum()
    }
}

impl FromIterator<(f64, f64)> for Histogram {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (HistogramKey(key), value))
                .collect(),
        }
    }
}

impl From<Histogram> for Vec<(f64, f64)> {
    fn from(histogram: Histogram) -> Self {
        histogram.iter().collect()
    }
}

impl From<Vec<(f64, f64)>> for Histogram {
    fn from(entries: Vec<(f64, f64)>) -> Self {
        entries.into_iter().collect()
    }
}

/// Shape of the value produced for a statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatisticShape {
    /// Single floating point value.
    Scalar,
    /// Ordered list of per-vertex (or externally supplied) values.
    ValueList,
    /// Sparse key → value histogram.
    Histogram,
}

/// Closed set of structural statistics computed by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatisticId {
    /// Number of edges in the graph.
    EdgeCount,
    /// Average vertex degree (2E/n).
    AverageDegree,
    /// Average shortest-path length over reachable pairs.
    AveragePathLength,
    /// Maximum finite shortest-path length.
    Diameter,
    /// Global triangle count.
    Cycles3,
    /// Global 4-cycle count.
    Cycles4,
    /// Mean of the per-vertex clustering coefficients.
    AverageClusteringCoefficient,
    /// Degree → vertex count.
    DegreeDistribution,
    /// Shortest-path length → pair count.
    DistanceDistribution,
    /// Clustering coefficient value → vertex count.
    ClusteringCoefficientDistribution,
    /// Per-vertex triangle count → vertex count.
    TriangleByVertexDistribution,
    /// Connected component order → component count.
    ConnectedComponentDistribution,
    /// Per-vertex closeness centrality.
    ClosenessCentrality,
    /// Per-vertex betweenness centrality.
    BetweennessCentrality,
}

impl StatisticId {
    /// Returns the result shape this statistic produces.
    pub fn shape(&self) -> StatisticShape {
        match self {
            StatisticId::EdgeCount
            | StatisticId::AverageDegree
            | StatisticId::AveragePathLength
            | StatisticId::Diameter
            | StatisticId::Cycles3
            | StatisticId::Cycles4
            | StatisticId::AverageClusteringCoefficient => StatisticShape::Scalar,
            StatisticId::ClosenessCentrality | StatisticId::BetweennessCentrality => {
                StatisticShape::ValueList
            }
            StatisticId::DegreeDistribution
            | StatisticId::DistanceDistribution
            | StatisticId::ClusteringCoefficientDistribution
            | StatisticId::TriangleByVertexDistribution
            | StatisticId::ConnectedComponentDistribution => StatisticShape::Histogram,
        }
    }
}

/// Value produced for a statistic, tagged by shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "value", rename_all = "kebab-case")]
pub enum StatisticValue {
    /// Single floating point value.
    Scalar(f64),
    /// Ordered list of values (per-vertex metrics, external eigenvalues).
    ValueList(Vec<f64>),
    /// Sparse key → value histogram.
    Histogram(Histogram),
}

impl StatisticValue {
    /// Returns the shape of the stored value.
    pub fn shape(&self) -> StatisticShape {
        match self {
            StatisticValue::Scalar(_) => StatisticShape::Scalar,
            StatisticValue::ValueList(_) => StatisticShape::ValueList,
            StatisticValue::Histogram(_) => StatisticShape::Histogram,
        }
    }

    /// Returns the scalar payload, if this is a scalar.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            StatisticValue::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the value list payload, if this is a value list.
    pub fn as_value_list(&self) -> Option<&[f64]> {
        match self {
            StatisticValue::ValueList(values) => Some(values),
            _ => None,
        }
    }

    /// Returns the histogram payload, if this is a histogram.
    pub fn as_histogram(&self) -> Option<&Histogram> {
        match self {
            StatisticValue::Histogram(histogram) => Some(histogram),
            _ => None,
        }
    }
}
