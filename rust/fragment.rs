//! Per-fragment pattern evaluators.
//!
//! The three binary surface patterns, each a pure function from an
//! interpolated coordinate and the animation clock to an RGBA color.
//! Called once per pixel by the kernels in `patterns/` - hot path.
//!
//! Every evaluator returns either solid black or solid white with alpha
//! 1.0; there are no intermediate colors.

use pyo3::prelude::*;

/// Stripe frequency along the y axis.
const STRIPE_SCALE: f64 = 25.0;

/// Band frequency along the z axis.
const BAND_SCALE: f64 = 10.0;

/// Clock multiplier for the band pattern (bands scroll 10x faster).
const BAND_TIME_SCALE: f64 = 10.0;

/// Checker tile count across the unit range, per axis.
const CHECKER_SCALE: f64 = 60.0;

/// Threshold splitting each period into its dark and lit halves.
const THRESHOLD: f64 = 0.5;

const BLACK: [f64; 4] = [0.0, 0.0, 0.0, 1.0];
const WHITE: [f64; 4] = [1.0, 1.0, 1.0, 1.0];

/// Fractional part of `v`: `v - floor(v)`, always in `[0, 1)`.
#[inline]
pub fn fract(v: f64) -> f64 {
    v - v.floor()
}

#[inline]
fn binary(lit: bool) -> [f64; 4] {
    if lit {
        WHITE
    } else {
        BLACK
    }
}

/// Animated stripe pattern over the `(x, y)` plane.
///
/// Horizontal bands at 25 cycles per unit of y, perturbed by the distance
/// of x from the surface midline, scrolling as `time` advances. Lit where
/// `fract(y*25 + |0.5 - x| - time) > 0.5`.
///
/// Periodic in `time` with period 1.
#[inline]
pub fn stripe_fragment(coord: [f64; 3], time: f64) -> [f64; 4] {
    let [x, y, _] = coord;
    let f = fract(y * STRIPE_SCALE + (0.5 - x).abs() - time);
    binary(f > THRESHOLD)
}

/// Animated band pattern over the `(x, z)` plane.
///
/// Same rule as [`stripe_fragment`] read across the ground plane: 10
/// cycles per unit of z and a 10x clock, so the bands scroll an order of
/// magnitude faster. Lit where `fract(z*10 + |0.5 - x| - time*10) > 0.5`.
///
/// Periodic in `time` with period 0.1.
#[inline]
pub fn band_fragment(coord: [f64; 3], time: f64) -> [f64; 4] {
    let [x, _, z] = coord;
    let f = fract(z * BAND_SCALE + (0.5 - x).abs() - time * BAND_TIME_SCALE);
    binary(f > THRESHOLD)
}

/// Static checkerboard over the `(x, y)` plane, 60 tiles per axis.
///
/// Lit where exactly one of the two axis tiles is past its half period:
/// `(fract(x*60) > 0.5) != (fract(y*60) > 0.5)`.
///
/// The clock is part of the shared evaluator signature but does not
/// influence the pattern.
#[inline]
pub fn checker_fragment(coord: [f64; 3], _time: f64) -> [f64; 4] {
    let [x, y, _] = coord;
    let tile_x = fract(x * CHECKER_SCALE) > THRESHOLD;
    let tile_y = fract(y * CHECKER_SCALE) > THRESHOLD;
    binary(tile_x != tile_y)
}

/// Evaluate the stripe pattern at a single coordinate.
///
/// Spot-check entry point for the host; the bulk path is `draw_stripes`.
#[pyfunction]
pub fn shade_stripe(x: f64, y: f64, z: f64, time: f64) -> (f64, f64, f64, f64) {
    let [r, g, b, a] = stripe_fragment([x, y, z], time);
    (r, g, b, a)
}

/// Evaluate the band pattern at a single coordinate.
#[pyfunction]
pub fn shade_band(x: f64, y: f64, z: f64, time: f64) -> (f64, f64, f64, f64) {
    let [r, g, b, a] = band_fragment([x, y, z], time);
    (r, g, b, a)
}

/// Evaluate the checker pattern at a single coordinate.
#[pyfunction]
pub fn shade_checker(x: f64, y: f64, z: f64, time: f64) -> (f64, f64, f64, f64) {
    let [r, g, b, a] = checker_fragment([x, y, z], time);
    (r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_binary(c: [f64; 4]) -> bool {
        (c == BLACK) || (c == WHITE)
    }

    #[test]
    fn test_fract_range() {
        for v in [-2.7, -1.0, -0.5, 0.0, 0.3, 1.0, 7.25, 1234.56] {
            let f = fract(v);
            assert!((0.0..1.0).contains(&f), "fract({v}) = {f} out of range");
        }
    }

    #[test]
    fn test_stripe_origin_is_black() {
        // f = fract(0 + |0.5 - 0| - 0) = 0.5, not > 0.5
        assert_eq!(stripe_fragment([0.0, 0.0, 0.0], 0.0), BLACK);
    }

    #[test]
    fn test_stripe_matches_rule() {
        for &(x, y, t) in &[
            (0.1_f64, 0.2, 0.0),
            (0.7, 0.33, 1.5),
            (0.5, 0.01, 0.25),
            (-0.3, 2.0, 3.9),
        ] {
            let expected = fract(y * 25.0 + (0.5 - x).abs() - t) > 0.5;
            assert_eq!(stripe_fragment([x, y, 0.0], t), binary(expected));
        }
    }

    #[test]
    fn test_stripe_period_one_in_time() {
        // Binary decision is unchanged when the clock advances one period.
        for i in 0..40 {
            let x = i as f64 * 0.023;
            let y = i as f64 * 0.017;
            let t = i as f64 * 0.31;
            let c = [x, y, 0.0];
            assert_eq!(stripe_fragment(c, t), stripe_fragment(c, t + 1.0));
        }
    }

    #[test]
    fn test_band_reads_xz_plane() {
        // y must not matter
        let t = 0.4;
        for i in 0..20 {
            let x = i as f64 * 0.05;
            let z = i as f64 * 0.03;
            assert_eq!(
                band_fragment([x, 0.0, z], t),
                band_fragment([x, 99.0, z], t),
            );
        }
    }

    #[test]
    fn test_band_period_tenth_in_time() {
        for i in 0..40 {
            let x = i as f64 * 0.023;
            let z = i as f64 * 0.017;
            let t = i as f64 * 0.13;
            let c = [x, 0.0, z];
            assert_eq!(band_fragment(c, t), band_fragment(c, t + 0.1));
        }
    }

    #[test]
    fn test_band_matches_rule() {
        for &(x, z, t) in &[(0.0_f64, 0.0, 0.0), (0.25, 0.8, 0.07), (0.9, 0.04, 1.23)] {
            let expected = fract(z * 10.0 + (0.5 - x).abs() - t * 10.0) > 0.5;
            assert_eq!(band_fragment([x, 0.0, z], t), binary(expected));
        }
    }

    #[test]
    fn test_checker_ignores_time() {
        let c = [0.3, 0.7, 0.0];
        let reference = checker_fragment(c, 0.0);
        for i in 0..50 {
            assert_eq!(checker_fragment(c, i as f64 * 0.37), reference);
        }
    }

    #[test]
    fn test_checker_axis_swap_symmetry() {
        // XOR of the axis tiles is symmetric under swapping x and y.
        for i in 0..30 {
            let x = i as f64 * 0.013;
            let y = i as f64 * 0.029;
            assert_eq!(
                checker_fragment([x, y, 0.0], 0.0),
                checker_fragment([y, x, 0.0], 0.0),
            );
        }
    }

    #[test]
    fn test_checker_half_tile_is_white() {
        // fract(0.51 * 60) = 0.6 > 0.5, fract(0) = 0, XOR -> white
        assert_eq!(checker_fragment([0.51, 0.0, 0.0], 0.0), WHITE);
    }

    #[test]
    fn test_checker_tile_boundary_is_black() {
        // At x = y = 1/120 both fractional parts are exactly 0.5,
        // which does not pass the strict threshold.
        let edge = 1.0 / 120.0;
        assert_eq!(checker_fragment([edge, edge, 0.0], 0.0), BLACK);
    }

    #[test]
    fn test_all_outputs_binary() {
        for i in 0..100 {
            let x = (i as f64 * 0.618).sin() * 3.0;
            let y = (i as f64 * 0.414).cos() * 3.0;
            let z = (i as f64 * 0.271).sin() * 3.0;
            let t = i as f64 * 0.11;
            assert!(is_binary(stripe_fragment([x, y, z], t)));
            assert!(is_binary(band_fragment([x, y, z], t)));
            assert!(is_binary(checker_fragment([x, y, z], t)));
        }
    }
}
