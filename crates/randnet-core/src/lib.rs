#![deny(missing_docs)]

//! Core error, RNG and statistic types shared by the randnet engine crates.

pub mod errors;
pub mod rng;
pub mod stats;

pub use errors::{ErrorInfo, RandNetError};
pub use rng::{derive_substream_seed, RngHandle};
pub use stats::{Histogram, HistogramKey, StatisticId, StatisticShape, StatisticValue};
