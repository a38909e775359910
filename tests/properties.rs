//! Property-based tests for the classifier and input helpers.

use proptest::prelude::*;

use complexity_oracle::input::{parse_sizes, InputGenerator, Shuffled};
use complexity_oracle::{classify, generate, DataPoint, GrowthModel, SizeStrategy};

const SIZES: [usize; 5] = [100, 200, 400, 800, 1600];

// Durations as a measurement could report them, plus the occasional
// non-finite value a hand-built point set might contain.
fn duration() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => 0.0..1_000.0f64,
        1 => Just(0.0),
        1 => prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY)],
    ]
}

fn points() -> impl Strategy<Value = Vec<DataPoint>> {
    prop::collection::vec((0..100_000usize, duration()), 2..12).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(n, d)| DataPoint::new(n, d))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn classify_never_fails_on_two_or_more_points(points in points()) {
        let result = classify(&points).unwrap();
        prop_assert!(result.confidence <= 100);
        prop_assert_eq!(result.fits.len(), 5);
        for model in GrowthModel::ALL {
            prop_assert!(result.fit_for(model).is_some());
        }
        for pair in result.fits.windows(2) {
            prop_assert!(pair[0].rmse.total_cmp(&pair[1].rmse).is_le());
        }
    }

    #[test]
    fn non_finite_series_is_constant_with_zero_confidence(points in points()) {
        prop_assume!(points.iter().any(|p| !p.duration.is_finite()));
        let result = classify(&points).unwrap();
        prop_assert_eq!(result.best_fit, GrowthModel::Constant);
        prop_assert_eq!(result.confidence, 0);
    }

    #[test]
    fn classify_is_deterministic(points in points()) {
        let first = classify(&points).unwrap();
        let second = classify(&points).unwrap();
        prop_assert_eq!(first.best_fit, second.best_fit);
        prop_assert_eq!(first.confidence, second.confidence);
    }

    #[test]
    fn flat_series_is_constant(level in 0.01..100.0f64) {
        let points: Vec<DataPoint> = SIZES.iter().map(|&n| DataPoint::new(n, level)).collect();
        let result = classify(&points).unwrap();
        prop_assert_eq!(result.best_fit, GrowthModel::Constant);
        prop_assert_eq!(result.confidence, 100);
    }

    #[test]
    fn exact_line_is_linear(intercept in 0.0..10.0f64, slope in 0.001..1.0f64) {
        let points: Vec<DataPoint> = SIZES
            .iter()
            .map(|&n| DataPoint::new(n, intercept + slope * n as f64))
            .collect();
        let result = classify(&points).unwrap();
        prop_assert_eq!(result.best_fit, GrowthModel::Linear);
        prop_assert_eq!(result.confidence, 100);
    }

    #[test]
    fn generate_is_ascending_range(n in 0..5_000usize) {
        let data = generate(n);
        prop_assert_eq!(data.len(), n);
        prop_assert!(data.iter().enumerate().all(|(i, &x)| x == i as u64));
    }

    #[test]
    fn shuffled_is_a_permutation(n in 0..2_000usize, seed in any::<u64>()) {
        let mut data = Shuffled::new(seed).generate(n);
        prop_assert_eq!(&data, &Shuffled::new(seed).generate(n));
        data.sort_unstable();
        prop_assert_eq!(data, generate(n));
    }

    #[test]
    fn parse_sizes_preserves_lists(sizes in prop::collection::vec(0..1_000_000usize, 1..20)) {
        let text = sizes.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(",");
        prop_assert_eq!(parse_sizes(&text).unwrap(), sizes);
    }

    #[test]
    fn linear_strategy_has_requested_count(
        start in 0..1_000usize,
        step in 1..1_000usize,
        count in 0..50usize,
    ) {
        let sizes = SizeStrategy::Linear { start, step, count }.sizes().unwrap();
        prop_assert_eq!(sizes.len(), count);
        prop_assert!(sizes.windows(2).all(|w| w[1] - w[0] == step));
    }
}
