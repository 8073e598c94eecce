//! Entity generators for seat reservation test data.
//!
//! - [`SeatGenerator`]: Enumerate a venue's seats and inject duplicate requests

pub mod seat;

pub use seat::{GeneratedDataset, Seat, SeatGenerator};
