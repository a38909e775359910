//! Descriptive statistics over timing samples.
//!
//! All functions return `None` on empty input instead of panicking, since
//! sample sets can legitimately shrink to nothing after filtering.

/// Arithmetic mean.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

/// Population variance.
pub fn variance(data: &[f64]) -> Option<f64> {
    let m = mean(data)?;
    let sum_sq: f64 = data.iter().map(|x| (x - m) * (x - m)).sum();
    Some(sum_sq / data.len() as f64)
}

/// Index of dispersion (variance / mean).
///
/// Returns 0 when the mean is not positive, so that an all-zero series
/// counts as perfectly flat.
pub fn dispersion(data: &[f64]) -> Option<f64> {
    let m = mean(data)?;
    let v = variance(data)?;
    if m <= 0.0 {
        return Some(0.0);
    }
    Some(v / m)
}

/// Quantile at probability `p` using linear interpolation (R-7).
///
/// Uses `select_nth_unstable_by` for O(n) expected time; `data` is
/// partially reordered as a side effect. `p` is clamped to [0, 1].
pub fn quantile(data: &mut [f64], p: f64) -> Option<f64> {
    let n = data.len();
    match n {
        0 => return None,
        1 => return Some(data[0]),
        _ => {}
    }

    let h = (n - 1) as f64 * p.clamp(0.0, 1.0);
    let lower_idx = h.floor() as usize;
    let frac = h - h.floor();

    if lower_idx >= n - 1 {
        let (_, &mut max, _) = data.select_nth_unstable_by(n - 1, |a, b| a.total_cmp(b));
        return Some(max);
    }

    let (_, &mut lower, upper) = data.select_nth_unstable_by(lower_idx, |a, b| a.total_cmp(b));
    if frac == 0.0 {
        return Some(lower);
    }

    // The next order statistic is the minimum of the upper partition.
    let next = upper
        .iter()
        .copied()
        .min_by(|a, b| a.total_cmp(b))
        .unwrap_or(lower);

    Some(lower + frac * (next - lower))
}

/// Median of the samples, leaving the input untouched.
pub fn median(data: &[f64]) -> Option<f64> {
    let mut working = data.to_vec();
    quantile(&mut working, 0.5)
}
