use std::f64::consts::PI;

use crate::utils::errors::{DesignError, DesignResult};

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// `count` evenly spaced samples over `[start, end]`.
///
/// Both endpoints are reproduced exactly so that landmark searches on the
/// result can rely on them.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut samples: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            samples[count - 1] = end;
            samples
        }
    }
}

/// Index of the sample closest to `target`, provided it lies within `tolerance`.
///
/// The first index wins an exact tie.
pub fn nearest_index(samples: &[f64], target: f64, tolerance: f64) -> DesignResult<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &sample) in samples.iter().enumerate() {
        let distance = (sample - target).abs();
        // NaN distances never qualify
        if !(distance < tolerance) {
            continue;
        }
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((i, distance));
        }
    }

    best.map(|(i, _)| i).ok_or_else(|| {
        DesignError::NotFound(format!(
            "no sample within {} of {} among {} samples",
            tolerance,
            target,
            samples.len()
        ))
    })
}

/// Trapezoidal integral of `y` over `x`; the sign follows the direction of `x`.
pub fn trapezoid(x: &[f64], y: &[f64]) -> f64 {
    x.windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| 0.5 * (xs[1] - xs[0]) * (ys[0] + ys[1]))
        .sum()
}
