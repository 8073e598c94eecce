//! Seat request generation with intentional duplicates.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{DatasetConfig, VenueLayout, duplicate_count};

/// A single seat in a venue, identified by value.
///
/// Field names match the CSV header consumed by the load-test client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Seat {
    #[serde(rename = "zoneId")]
    pub zone_id: u32,
    pub row: char,
    pub column: u32,
}

impl Seat {
    pub const fn new(zone_id: u32, row: char, column: u32) -> Self {
        Self {
            zone_id,
            row,
            column,
        }
    }

    /// Returns true if the seat exists in the given layout.
    pub fn is_within(&self, layout: &VenueLayout) -> bool {
        (1..=layout.zone_count).contains(&self.zone_id)
            && layout.row_labels().any(|r| r == self.row)
            && (1..=layout.col_count).contains(&self.column)
    }
}

/// Generated request dataset: the whole seat universe plus duplicate requests, shuffled.
#[derive(Debug, Clone)]
pub struct GeneratedDataset {
    pub seats: Vec<Seat>,
    pub unique_count: usize,
    pub duplicate_count: usize,
}

impl GeneratedDataset {
    /// Total number of requests (data rows).
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }
}

/// Generates seat requests for load testing.
pub struct SeatGenerator {
    layout: VenueLayout,
    duplicate_ratio: f64,
}

impl SeatGenerator {
    /// Creates a new seat generator with the default venue and ratio.
    pub fn new() -> Self {
        Self::with_config(&DatasetConfig::default())
    }

    /// Creates a generator from a dataset configuration.
    pub fn with_config(config: &DatasetConfig) -> Self {
        Self {
            layout: config.layout,
            duplicate_ratio: config.duplicate_ratio,
        }
    }

    pub fn layout(&self) -> &VenueLayout {
        &self.layout
    }

    /// Enumerates every seat exactly once.
    ///
    /// Order is zone ascending, then row ascending, then column ascending.
    pub fn unique_seats(&self) -> Vec<Seat> {
        let mut seats = Vec::with_capacity(self.layout.seat_count());

        for zone_id in 1..=self.layout.zone_count {
            for row in self.layout.row_labels() {
                for column in 1..=self.layout.col_count {
                    seats.push(Seat::new(zone_id, row, column));
                }
            }
        }

        seats
    }

    /// Number of duplicates injected for a universe of `unique_count` seats.
    pub fn duplicate_count(&self, unique_count: usize) -> usize {
        duplicate_count(unique_count, self.duplicate_ratio)
    }

    /// Draws `count` seats uniformly with replacement from `universe`.
    pub fn sample_duplicates(
        &self,
        universe: &[Seat],
        count: usize,
        rng: &mut impl Rng,
    ) -> Vec<Seat> {
        if universe.is_empty() {
            return Vec::new();
        }

        (0..count)
            .map(|_| universe[rng.gen_range(0..universe.len())])
            .collect()
    }

    /// Builds the shuffled dataset: universe followed by duplicates, then permuted.
    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedDataset {
        let mut seats = self.unique_seats();
        let unique_count = seats.len();
        debug!("Enumerated {} unique seats", unique_count);

        let duplicate_count = self.duplicate_count(unique_count);
        let duplicates = self.sample_duplicates(&seats, duplicate_count, rng);
        debug!("Sampled {} duplicate seats", duplicates.len());

        seats.extend(duplicates);
        seats.shuffle(rng);
        debug!("Shuffled {} requests", seats.len());

        GeneratedDataset {
            seats,
            unique_count,
            duplicate_count,
        }
    }
}

impl Default for SeatGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::{HashMap, HashSet};

    fn toy_generator() -> SeatGenerator {
        SeatGenerator::with_config(&DatasetConfig {
            layout: VenueLayout::new(2, 2, 2),
            duplicate_ratio: 1.0,
            ..DatasetConfig::default()
        })
    }

    fn counts(seats: &[Seat]) -> HashMap<Seat, usize> {
        let mut counts = HashMap::new();
        for seat in seats {
            *counts.entry(*seat).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_unique_seats_default_venue() {
        let seat_gen = SeatGenerator::new();
        let seats = seat_gen.unique_seats();

        assert_eq!(seats.len(), 78_000);

        let distinct: HashSet<_> = seats.iter().collect();
        assert_eq!(distinct.len(), 78_000);

        assert_eq!(seats[0], Seat::new(1, 'A', 1));
        assert_eq!(seats[29], Seat::new(1, 'A', 30));
        assert_eq!(seats[30], Seat::new(1, 'B', 1));
        assert_eq!(seats[26 * 30], Seat::new(2, 'A', 1));
        assert_eq!(seats[77_999], Seat::new(100, 'Z', 30));
    }

    #[test]
    fn test_unique_seats_sorted() {
        // Nested enumeration order matches the derived ordering of (zone, row, column)
        let seats = SeatGenerator::new().unique_seats();
        assert!(seats.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_toy_universe_order() {
        let seats = toy_generator().unique_seats();
        assert_eq!(
            seats,
            vec![
                Seat::new(1, 'A', 1),
                Seat::new(1, 'A', 2),
                Seat::new(1, 'B', 1),
                Seat::new(1, 'B', 2),
                Seat::new(2, 'A', 1),
                Seat::new(2, 'A', 2),
                Seat::new(2, 'B', 1),
                Seat::new(2, 'B', 2),
            ]
        );
    }

    #[test]
    fn test_duplicates_drawn_from_universe() {
        let seat_gen = SeatGenerator::new();
        let universe = seat_gen.unique_seats();
        let members: HashSet<_> = universe.iter().copied().collect();
        let mut rng = StdRng::seed_from_u64(12345);

        let duplicates = seat_gen.sample_duplicates(&universe, 85_800, &mut rng);

        assert_eq!(duplicates.len(), 85_800);
        assert!(duplicates.iter().all(|s| members.contains(s)));
    }

    #[test]
    fn test_sample_from_empty_universe() {
        let seat_gen = toy_generator();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(seat_gen.sample_duplicates(&[], 10, &mut rng).is_empty());
    }

    #[test]
    fn test_generate_default_dataset() {
        let seat_gen = SeatGenerator::new();
        let mut rng = rand::thread_rng();

        let dataset = seat_gen.generate(&mut rng);

        assert_eq!(dataset.len(), 163_800);
        assert_eq!(dataset.unique_count, 78_000);
        assert_eq!(dataset.duplicate_count, 85_800);

        // Every seat of the universe appears at least once
        let counts = counts(&dataset.seats);
        assert_eq!(counts.len(), 78_000);
        assert_eq!(counts.values().sum::<usize>(), 163_800);
        assert!(dataset.seats.iter().all(|s| s.is_within(seat_gen.layout())));
    }

    #[test]
    fn test_generate_toy_dataset() {
        let seat_gen = toy_generator();
        let universe: HashSet<_> = seat_gen.unique_seats().into_iter().collect();
        let mut rng = StdRng::seed_from_u64(42);

        let dataset = seat_gen.generate(&mut rng);

        assert_eq!(dataset.len(), 16);
        assert_eq!(dataset.duplicate_count, 8);
        assert!(dataset.seats.iter().all(|s| universe.contains(s)));
        assert!(counts(&dataset.seats).values().all(|&c| c >= 1));
    }

    #[test]
    fn test_generate_is_reproducible_with_seed() {
        let seat_gen = toy_generator();

        let first = seat_gen.generate(&mut StdRng::seed_from_u64(7));
        let second = seat_gen.generate(&mut StdRng::seed_from_u64(7));

        assert_eq!(first.seats, second.seats);
    }

    #[test]
    fn test_generate_shuffles() {
        let seat_gen = SeatGenerator::new();
        let mut rng = StdRng::seed_from_u64(99);

        let dataset = seat_gen.generate(&mut rng);
        let unique = seat_gen.unique_seats();

        assert_ne!(&dataset.seats[..unique.len()], &unique[..]);
    }

    #[test]
    fn test_is_within() {
        let layout = VenueLayout::new(2, 2, 2);
        assert!(Seat::new(2, 'B', 2).is_within(&layout));
        assert!(!Seat::new(0, 'A', 1).is_within(&layout));
        assert!(!Seat::new(1, 'C', 1).is_within(&layout));
        assert!(!Seat::new(1, 'A', 3).is_within(&layout));
        assert!(!Seat::new(1, 'a', 1).is_within(&layout));
    }
}
