use airframe::{CgCalculation, Position};
use approx::assert_relative_eq;

/// Assert that two stations are approximately equal
#[track_caller]
pub fn assert_position_eq(actual: &Position, expected: &Position, epsilon: f64) {
    assert_relative_eq!(
        actual.x,
        expected.x,
        epsilon = epsilon,
        max_relative = epsilon
    );
    assert_relative_eq!(
        actual.y,
        expected.y,
        epsilon = epsilon,
        max_relative = epsilon
    );
}

/// Assert that the CG lies inside the bounding box of the component stations
#[track_caller]
pub fn assert_cg_within_bounds(calc: &CgCalculation) {
    let cg = calc.compute_cg().expect("CG should be defined");
    for axis in 0..2 {
        let min = calc
            .components()
            .values()
            .map(|c| c.position[axis])
            .fold(f64::INFINITY, f64::min);
        let max = calc
            .components()
            .values()
            .map(|c| c.position[axis])
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(
            cg[axis] >= min - 1e-12 && cg[axis] <= max + 1e-12,
            "CG axis {} = {} outside [{}, {}]",
            axis,
            cg[axis],
            min,
            max
        );
    }
}
