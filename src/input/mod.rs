//! Module generating the reproducible, partially corrupted numeric input the benchmarks run on.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::domain::{ErrorRate, GeneratedRecord, MALFORMED_MARKER};


/// Generates `count` records from a generator seeded with `seed`.
///
/// The same `(seed, count, error_rate)` always yields the same sequence, which is what makes two
/// strategies timed at the same configuration comparable.
pub fn generate(seed: u64, count: usize, error_rate: ErrorRate) -> Vec<GeneratedRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_with(&mut rng, count, error_rate)
}

/// Generates `count` records drawing from the given random source.
///
/// Each record draws a non-negative integer first and the corruption roll second, so the
/// numeric part of a payload does not depend on the error rate.
pub fn generate_with(
    rng: &mut impl Rng,
    count: usize,
    error_rate: ErrorRate,
) -> Vec<GeneratedRecord> {
    (0..count)
        .map(|index| {
            let number = rng.random_range(0..i32::MAX);
            let roll: f64 = rng.random();

            let payload = if roll < error_rate.value() {
                format!("{MALFORMED_MARKER}{number}")
            } else {
                number.to_string()
            };
            GeneratedRecord::new(index, payload)
        })
        .collect()
}
