//! Configuration types for seat dataset generation.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest row count a layout can have; rows are labelled 'A' through 'Z'.
pub const MAX_ROWS: u32 = 26;

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "seats_with_duplicates.csv";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Zone count must be at least 1")]
    NoZones,
    #[error("Row count must be between 1 and 26, got {0}")]
    RowCount(u32),
    #[error("Column count must be at least 1")]
    NoColumns,
    #[error("Layout of {0} zones x {1} rows x {2} columns has too many seats")]
    TooManySeats(u32, u32, u32),
    #[error("Duplicate ratio must be a finite non-negative number, got {0}")]
    DuplicateRatio(f64),
}

/// Seat grid of a venue: every zone has the same number of rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueLayout {
    /// Number of zones, numbered from 1.
    pub zone_count: u32,
    /// Number of rows per zone, lettered from 'A'.
    pub row_count: u32,
    /// Number of columns per row, numbered from 1.
    pub col_count: u32,
}

impl VenueLayout {
    pub const fn new(zone_count: u32, row_count: u32, col_count: u32) -> Self {
        Self {
            zone_count,
            row_count,
            col_count,
        }
    }

    /// Total number of distinct seats in the layout, saturating at `usize::MAX`.
    pub fn seat_count(&self) -> usize {
        self.checked_seat_count().unwrap_or(usize::MAX)
    }

    pub fn checked_seat_count(&self) -> Option<usize> {
        (self.zone_count as usize)
            .checked_mul(self.row_count as usize)?
            .checked_mul(self.col_count as usize)
    }

    /// Row labels in ascending order.
    pub fn row_labels(self) -> impl Iterator<Item = char> {
        ('A'..='Z').take(self.row_count as usize)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.zone_count == 0 {
            return Err(ConfigError::NoZones);
        }
        if self.row_count == 0 || self.row_count > MAX_ROWS {
            return Err(ConfigError::RowCount(self.row_count));
        }
        if self.col_count == 0 {
            return Err(ConfigError::NoColumns);
        }
        if self.checked_seat_count().is_none() {
            return Err(ConfigError::TooManySeats(
                self.zone_count,
                self.row_count,
                self.col_count,
            ));
        }
        Ok(())
    }
}

impl Default for VenueLayout {
    fn default() -> Self {
        // 100 zones, A-Z rows, 30 seats per row
        Self::new(100, MAX_ROWS, 30)
    }
}

/// Configuration for a dataset run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Seat grid the unique universe is enumerated from.
    pub layout: VenueLayout,

    /// Multiplier applied to the universe size to get the duplicate count.
    pub duplicate_ratio: f64,

    /// Destination CSV file.
    pub output_path: PathBuf,
}

impl DatasetConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout.validate()?;
        if !self.duplicate_ratio.is_finite() || self.duplicate_ratio < 0.0 {
            return Err(ConfigError::DuplicateRatio(self.duplicate_ratio));
        }
        Ok(())
    }

    /// Number of duplicate requests to inject: `floor(seat_count * duplicate_ratio)`.
    pub fn duplicate_count(&self) -> usize {
        duplicate_count(self.layout.seat_count(), self.duplicate_ratio)
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            layout: VenueLayout::default(),
            duplicate_ratio: 1.1,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Truncates, never rounds.
pub fn duplicate_count(unique_count: usize, ratio: f64) -> usize {
    (unique_count as f64 * ratio).floor() as usize
}
