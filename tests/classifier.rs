//! Classifier behavior on synthetic data points.
//!
//! No timing is involved: every test builds `DataPoint`s from a known
//! function of `n`, so verdicts are exact and deterministic.

use complexity_oracle::{
    classify, ConfidenceLevel, DataPoint, Error, GrowthModel, LOW_CONFIDENCE_THRESHOLD,
};

const SIZES: [usize; 5] = [100, 200, 400, 800, 1600];
const DECADES: [usize; 4] = [10, 100, 1_000, 10_000];

fn synthetic(sizes: &[usize], f: impl Fn(f64) -> f64) -> Vec<DataPoint> {
    sizes
        .iter()
        .map(|&n| DataPoint::new(n, f(n as f64)))
        .collect()
}

fn with_durations(durations: &[f64]) -> Vec<DataPoint> {
    SIZES
        .iter()
        .zip(durations)
        .map(|(&n, &d)| DataPoint::new(n, d))
        .collect()
}

#[test]
fn flat_data_is_constant_with_full_confidence() {
    let result = classify(&synthetic(&SIZES, |_| 2.0)).unwrap();
    assert_eq!(result.best_fit, GrowthModel::Constant);
    assert_eq!(result.confidence, 100);
    assert_eq!(result.confidence_level(), ConfidenceLevel::High);
}

#[test]
fn flat_decades_are_constant() {
    let result = classify(&synthetic(&DECADES, |_| 3.0)).unwrap();
    assert_eq!(result.best_fit, GrowthModel::Constant);
    assert_eq!(result.confidence, 100);
}

#[test]
fn linear_decades_are_linear() {
    let result = classify(&synthetic(&DECADES, |n| 0.001 * n)).unwrap();
    assert_eq!(result.best_fit, GrowthModel::Linear);
    assert_eq!(result.confidence, 100);
}

#[test]
fn linear_data_is_linear() {
    let result = classify(&synthetic(&SIZES, |n| 0.001 * n)).unwrap();
    assert_eq!(result.best_fit, GrowthModel::Linear);
    assert!(result.confidence >= 90);
}

#[test]
fn quadratic_data_is_quadratic() {
    let result = classify(&synthetic(&SIZES, |n| 1e-6 * n * n)).unwrap();
    assert_eq!(result.best_fit, GrowthModel::Quadratic);
    assert_eq!(result.confidence, 100);
}

#[test]
fn linearithmic_data_is_linearithmic() {
    let result = classify(&synthetic(&SIZES, |n| 2e-5 * n * n.ln() + 0.1)).unwrap();
    assert_eq!(result.best_fit, GrowthModel::Linearithmic);
}

#[test]
fn logarithmic_data_is_logarithmic() {
    let sizes = [10, 100, 1_000, 10_000, 100_000];
    let result = classify(&synthetic(&sizes, |n| 0.2 * n.ln() + 0.05)).unwrap();
    assert_eq!(result.best_fit, GrowthModel::Logarithmic);
}

#[test]
fn occam_prefers_linear_over_marginally_better_linearithmic() {
    // n log n fits slightly better, but not by enough to justify the extra
    // complexity.
    let points = with_durations(&[0.0884, 0.1713, 0.3766, 0.7734, 1.6262]);
    let result = classify(&points).unwrap();
    assert_eq!(result.fits[0].model, GrowthModel::Linearithmic);
    assert_eq!(result.best_fit, GrowthModel::Linear);

    // A clear margin keeps the more complex model.
    let points = with_durations(&[0.0827, 0.163, 0.3663, 0.7652, 1.6346]);
    assert_eq!(classify(&points).unwrap().best_fit, GrowthModel::Linearithmic);
}

#[test]
fn occam_prefers_linear_over_marginally_better_quadratic() {
    // Over a narrow size range n^2 is nearly linear; noise lets the quadratic
    // fit edge ahead by about 6%.
    let sizes = [1_000, 1_100, 1_200, 1_300, 1_400];
    let points: Vec<DataPoint> = sizes
        .iter()
        .zip([1.0, 1.109, 1.19, 1.294, 1.408])
        .map(|(&n, d)| DataPoint::new(n, d))
        .collect();
    let result = classify(&points).unwrap();
    assert_eq!(result.fits[0].model, GrowthModel::Quadratic);
    assert_eq!(result.best_fit, GrowthModel::Linear);
}

#[test]
fn fits_are_reported_for_every_model_in_rmse_order() {
    let result = classify(&synthetic(&SIZES, |n| 0.5 + 0.01 * n)).unwrap();
    assert_eq!(result.fits.len(), 5);
    for model in GrowthModel::ALL {
        assert!(result.fit_for(model).is_some(), "missing {}", model);
    }
    assert!(result.fits.windows(2).all(|w| w[0].rmse <= w[1].rmse));
}

#[test]
fn zero_size_does_not_break_log_models() {
    let points = synthetic(&[0, 100, 200, 400], |n| 0.01 * n + 1.0);
    let result = classify(&points).unwrap();
    assert_eq!(result.best_fit, GrowthModel::Linear);
    assert!(result.fits.iter().all(|fit| fit.rmse.is_finite()));
}

#[test]
fn too_few_points() {
    assert!(matches!(
        classify(&[]),
        Err(Error::InsufficientData { actual: 0, .. })
    ));
    assert!(matches!(
        classify(&[DataPoint::new(5, 0.3)]),
        Err(Error::InsufficientData { actual: 1, .. })
    ));
}

#[test]
fn all_non_finite_is_constant_with_zero_confidence() {
    let points = vec![
        DataPoint::new(10, f64::NAN),
        DataPoint::new(20, f64::NEG_INFINITY),
    ];
    let result = classify(&points).unwrap();
    assert_eq!(result.best_fit, GrowthModel::Constant);
    assert_eq!(result.confidence, 0);
    assert!(result.is_low_confidence());
    assert!(result.confidence < LOW_CONFIDENCE_THRESHOLD);
}

#[test]
fn one_non_finite_duration_makes_series_constant() {
    let mut points = synthetic(&[100, 200, 400, 800], |n| 0.001 * n);
    points.push(DataPoint::new(1_600, f64::NAN));
    let result = classify(&points).unwrap();
    assert_eq!(result.best_fit, GrowthModel::Constant);
    assert_eq!(result.confidence, 0);
    assert!(result.is_low_confidence());
}

#[test]
fn sub_microsecond_noise_is_constant() {
    let points = with_durations(&[2.0e-5, 2.6e-5, 3.1e-5, 3.9e-5, 4.4e-5]);
    let result = classify(&points).unwrap();
    assert_eq!(result.best_fit, GrowthModel::Constant);
}

#[test]
fn classification_is_idempotent() {
    let points = with_durations(&[0.11, 0.23, 0.38, 0.85, 1.59]);
    assert_eq!(classify(&points).unwrap(), classify(&points).unwrap());
}
