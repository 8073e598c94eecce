//! Seat reservation test data for the ticketing platform.
//!
//! This crate generates load-test input for the purchase service: every seat of a venue
//! requested once, plus a batch of duplicate requests for seats drawn at random, shuffled
//! together and written as CSV.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seat_data::prelude::*;
//!
//! let result = DatasetBuilder::new()
//!     .with_layout(VenueLayout::new(100, 26, 30))
//!     .duplicate_ratio(1.1)
//!     .output_path("seats_with_duplicates.csv")
//!     .build(&mut rand::thread_rng())?;
//!
//! println!("{}", result.summary_line());
//! ```

pub mod builders;
pub mod config;
pub mod export;
pub mod generators;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{BuildError, DatasetBuilder, DatasetMetrics, DatasetResult};
    pub use crate::config::{ConfigError, DatasetConfig, VenueLayout};
    pub use crate::export::{ExportError, read_dataset, write_dataset};
    pub use crate::generators::{GeneratedDataset, Seat, SeatGenerator};
}
