//! Input parity: every run at the same configuration sees byte-identical payloads.

use parse_strategy_bench::{ErrorRate, generate, sample_document};
use proptest::prelude::*;

proptest! {
    #[test]
    fn generation_is_reproducible(
        seed in any::<u64>(),
        count in 0usize..200,
        rate in 0.0f64..=1.0,
    ) {
        let rate = ErrorRate::new(rate).unwrap();
        prop_assert_eq!(generate(seed, count, rate), generate(seed, count, rate));
    }

    #[test]
    fn sample_document_is_reproducible(seed in any::<u64>(), count in 0usize..20) {
        let rate = ErrorRate::new(0.5).unwrap();
        prop_assert_eq!(
            sample_document(seed, count, rate).unwrap(),
            sample_document(seed, count, rate).unwrap()
        );
    }

    #[test]
    fn out_of_range_error_rates_are_rejected(rate in prop_oneof![-10.0f64..-0.0001, 1.0001f64..10.0]) {
        prop_assert!(ErrorRate::new(rate).is_err());
    }
}

#[test]
fn nan_error_rate_is_rejected() {
    assert!(ErrorRate::new(f64::NAN).is_err());
}

#[test]
fn sweep_points_cover_zero_to_ninety_percent() {
    let points: Vec<f64> = ErrorRate::sweep().map(ErrorRate::value).collect();
    assert_eq!(
        points,
        [0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9]
    );
}
