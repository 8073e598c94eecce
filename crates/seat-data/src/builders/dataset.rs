//! Fluent builder for constructing seat datasets.

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::info;

use crate::config::{ConfigError, DatasetConfig, VenueLayout};
use crate::export::{self, ExportError};
use crate::generators::{GeneratedDataset, Seat, SeatGenerator};

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

/// Result of building (and optionally exporting) a dataset.
#[derive(Debug)]
pub struct DatasetResult {
    pub seats: Vec<Seat>,
    pub unique_count: usize,
    pub duplicate_count: usize,
    /// Metrics from dataset generation (populated if metrics tracking enabled).
    pub metrics: Option<DatasetMetrics>,
}

impl DatasetResult {
    fn from_generated(dataset: GeneratedDataset) -> Self {
        Self {
            seats: dataset.seats,
            unique_count: dataset.unique_count,
            duplicate_count: dataset.duplicate_count,
            metrics: None,
        }
    }

    /// Total number of requests (data rows).
    pub fn total_count(&self) -> usize {
        self.seats.len()
    }

    /// Number of distinct seats across all requests.
    pub fn distinct_count(&self) -> usize {
        self.seats.iter().collect::<HashSet<_>>().len()
    }

    /// Operator-facing summary of the run.
    pub fn summary_line(&self) -> String {
        format!(
            "CSV Generated: total {} requests (include {} duplicate)",
            self.total_count(),
            self.duplicate_count
        )
    }
}

/// Performance metrics from dataset generation.
#[derive(Debug, Clone)]
pub struct DatasetMetrics {
    /// Time spent generating data (milliseconds).
    pub generation_time_ms: u64,
    /// Time spent writing the CSV file (milliseconds, 0 if build_data used).
    pub export_time_ms: u64,
    /// Number of unique seats enumerated.
    pub unique_count: usize,
    /// Number of duplicate requests injected.
    pub duplicate_count: usize,
}

/// Builder for seat request datasets.
///
/// # Example
///
/// ```rust,ignore
/// let result = DatasetBuilder::new()
///     .with_layout(VenueLayout::new(10, 5, 20))
///     .duplicate_ratio(0.5)
///     .output_path("seats.csv")
///     .build(&mut rand::thread_rng())?;
/// println!("{}", result.summary_line());
/// ```
#[derive(Debug, Clone)]
pub struct DatasetBuilder {
    config: DatasetConfig,
    seed: Option<u64>,
    track_metrics: bool,
}

impl DatasetBuilder {
    /// Creates a builder with the default venue (100 zones, A-Z rows, 30 columns) and ratio 1.1.
    pub fn new() -> Self {
        Self::from_config(DatasetConfig::default())
    }

    pub fn from_config(config: DatasetConfig) -> Self {
        Self {
            config,
            seed: None,
            track_metrics: false,
        }
    }

    pub fn with_layout(mut self, layout: VenueLayout) -> Self {
        self.config.layout = layout;
        self
    }

    pub fn duplicate_ratio(mut self, ratio: f64) -> Self {
        self.config.duplicate_ratio = ratio;
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    /// Sets a fixed seed. When set, the seed takes precedence over the RNG passed to build.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables timing metrics on the result.
    pub fn with_metrics(mut self) -> Self {
        self.track_metrics = true;
        self
    }

    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// Builds the dataset (generates data but doesn't write the file).
    pub fn build_data(&self, rng: &mut impl Rng) -> Result<DatasetResult, BuildError> {
        self.config.validate()?;

        let start = Instant::now();
        let seat_gen = SeatGenerator::with_config(&self.config);
        let dataset = match self.seed {
            Some(seed) => seat_gen.generate(&mut StdRng::seed_from_u64(seed)),
            None => seat_gen.generate(rng),
        };

        info!(
            "Generated {} requests ({} unique, {} duplicate)",
            dataset.len(),
            dataset.unique_count,
            dataset.duplicate_count
        );

        let mut result = DatasetResult::from_generated(dataset);
        if self.track_metrics {
            result.metrics = Some(DatasetMetrics {
                generation_time_ms: start.elapsed().as_millis() as u64,
                export_time_ms: 0, // Set by build() if the file is written
                unique_count: result.unique_count,
                duplicate_count: result.duplicate_count,
            });
        }

        Ok(result)
    }

    /// Builds the dataset and writes it to the configured output path.
    pub fn build(&self, rng: &mut impl Rng) -> Result<DatasetResult, BuildError> {
        let mut result = self.build_data(rng)?;

        let export_start = Instant::now();
        export::write_dataset(&self.config.output_path, &result.seats)?;

        if let Some(metrics) = result.metrics.as_mut() {
            metrics.export_time_ms = export_start.elapsed().as_millis() as u64;
        }

        Ok(result)
    }
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self::new()
    }
}
