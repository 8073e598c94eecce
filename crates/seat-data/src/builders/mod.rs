//! Builders for assembling complete datasets.
//!
//! [`DatasetBuilder`] wires configuration, seat generation, and CSV export together.

mod dataset;

pub use dataset::{BuildError, DatasetBuilder, DatasetMetrics, DatasetResult};
