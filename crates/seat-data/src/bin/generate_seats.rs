//! Generates the seat reservation load-test CSV
//!
//! Writes `seats_with_duplicates.csv` to the working directory. Stdout carries only the
//! summary line; logs go to stderr (`RUST_LOG` sets the level).
//!
//! Run with:
//! ```
//! cargo run -p seat-data --bin generate-seats
//! ```

use seat_data::builders::DatasetBuilder;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut rng = rand::thread_rng();

    let result = DatasetBuilder::new().with_metrics().build(&mut rng)?;

    if let Some(metrics) = &result.metrics {
        tracing::info!("  Unique seats: {}", metrics.unique_count);
        tracing::info!("  Duplicates: {}", metrics.duplicate_count);
        tracing::info!("  Generation: {} ms", metrics.generation_time_ms);
        tracing::info!("  Export: {} ms", metrics.export_time_ms);
    }

    println!("{}", result.summary_line());

    Ok(())
}
