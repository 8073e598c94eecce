//! CSV export of seat datasets.
//!
//! The file layout is what the load-test client reads as its data set:
//!
//! ```text
//! zoneId,row,column
//! 42,C,17
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::config::VenueLayout;
use crate::generators::Seat;

/// Header row of the exported file.
pub const HEADER: [&str; 3] = ["zoneId", "row", "column"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(csv::Error),
    #[error("Unexpected header: {0:?}")]
    Header(Vec<String>),
    #[error("Seat outside venue layout: {0:?}")]
    OutOfRange(Seat),
}

impl From<csv::Error> for ExportError {
    /// I/O failures surface as [`ExportError::Io`] whether the csv buffer or the final flush hit them.
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return Self::Csv(err);
        }
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => Self::Io(io_err),
            kind => Self::Io(io::Error::other(format!("{kind:?}"))),
        }
    }
}

/// Writes the header and one row per seat to `writer`, returning the number of data rows.
pub fn write_seats<W: Write>(writer: W, seats: &[Seat]) -> Result<usize, ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(HEADER)?;
    for seat in seats {
        csv_writer.serialize(seat)?;
    }
    csv_writer.flush()?;

    Ok(seats.len())
}

/// Creates or overwrites `path` with the dataset.
///
/// The file handle is owned by the writer and closed when it drops, including on error.
pub fn write_dataset(path: impl AsRef<Path>, seats: &[Seat]) -> Result<usize, ExportError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let rows = write_seats(BufWriter::new(file), seats)?;

    info!("Wrote {} rows to {}", rows, path.display());
    Ok(rows)
}

/// Reads seats back from CSV data, checking the header and that every seat fits `layout`.
pub fn read_seats<R: io::Read>(
    reader: R,
    layout: &VenueLayout,
) -> Result<Vec<Seat>, ExportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?;
    if headers.iter().ne(HEADER) {
        return Err(ExportError::Header(
            headers.iter().map(str::to_string).collect(),
        ));
    }

    let mut seats = Vec::new();
    for record in csv_reader.deserialize() {
        let seat: Seat = record?;
        if !seat.is_within(layout) {
            return Err(ExportError::OutOfRange(seat));
        }
        seats.push(seat);
    }

    Ok(seats)
}

/// Loads a previously exported dataset file.
pub fn read_dataset(
    path: impl AsRef<Path>,
    layout: &VenueLayout,
) -> Result<Vec<Seat>, ExportError> {
    let file = File::open(path)?;
    read_seats(io::BufReader::new(file), layout)
}
