//! Both strategies must be observably identical; only the failure mechanism differs.

use parse_strategy_bench::{
    Convert, ErrorRate, RECORD_FALLBACK, StatusChecked, UnwindGuarded, from_record, generate,
    materialize, to_record,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn strategies_agree_with_strict_parsing(value in any::<i32>(), fallback in any::<i32>()) {
        let input = value.to_string();

        prop_assert_eq!(UnwindGuarded::new(fallback).convert(&input), value);
        prop_assert_eq!(StatusChecked::new(fallback).convert(&input), value);
    }

    #[test]
    fn strategies_agree_on_arbitrary_text(input in "[0-9X+ -]{0,12}", fallback in -1i32..=1) {
        let expected = input.parse::<i32>().unwrap_or(fallback);

        prop_assert_eq!(UnwindGuarded::new(fallback).convert(&input), expected);
        prop_assert_eq!(StatusChecked::new(fallback).convert(&input), expected);
    }

    #[test]
    fn marked_payloads_always_fall_back(value in 0i32..i32::MAX, fallback in any::<i32>()) {
        let input = format!("X{value}");

        prop_assert_eq!(UnwindGuarded::new(fallback).convert(&input), fallback);
        prop_assert_eq!(StatusChecked::new(fallback).convert(&input), fallback);
    }

    #[test]
    fn record_round_trip_preserves_the_converted_cost(
        seed in any::<u64>(),
        count in 0usize..40,
        rate in 0.0f64..=1.0,
    ) {
        let records = generate(seed, count, ErrorRate::new(rate).unwrap());
        let bags = materialize(&records).unwrap();
        prop_assert_eq!(bags.len(), records.len());

        let exception = UnwindGuarded::new(RECORD_FALLBACK);
        let status = StatusChecked::new(RECORD_FALLBACK);
        for (record, bag) in records.iter().zip(&bags) {
            prop_assert_eq!(bag, &to_record(record));

            let expected = Some(status.convert(record.payload()));
            prop_assert_eq!(from_record(bag, &exception).item_cost, expected);
            prop_assert_eq!(from_record(bag, &status).item_cost, expected);
        }
    }
}
