use nalgebra::Vector2;
use std::f64::consts::PI;

/// Position in the aircraft reference frame.
///
/// `x` is the longitudinal station measured aft of the datum, the second
/// component is the vertical station `z`.
pub type Position = Vector2<f64>;

/// Build a [`Position`] from its longitudinal and vertical stations.
#[inline]
pub fn position(x: f64, z: f64) -> Position {
    Vector2::new(x, z)
}

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Generates `n` linearly spaced samples in [start, stop].
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as f64 - 1.0);
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}
