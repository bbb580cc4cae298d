// Copyright (c) 2026 The ellipsoid-geodesy contributors

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The angle module contains the scalar angle arithmetic shared by every
//! computation in the library: degree/radian conversion, decimal rounding,
//! the quadrant-resolving arctangent and the reduced (auxiliary sphere)
//! latitude, together with the `Gon` angular unit.

#![allow(clippy::suboptimal_flops)]

use core::f64::consts::PI;

/// Radians per degree.
pub const RADIANS_PER_DEGREE: f64 = PI / 180.0;

/// Gon per degree: a full circle is 400 gon, so 1 gon is 0.9 degrees.
pub const GON_PER_DEGREE: f64 = 400.0 / 360.0;

/// The threshold below which `resolved_atan2` snaps its result to an
/// axis-aligned angle instead of resolving a quadrant from noise.
pub const AXIS_SNAP_THRESHOLD: f64 = 5e-9;

/// An angle measured in gon, the unit used for meridian convergence.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Gon(pub f64);

impl Gon {
    /// Convert an angle in degrees to `Gon`, the explicit unit conversion
    /// applied at the convergence boundary.
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        Self(degrees * GON_PER_DEGREE)
    }
}

/// Convert an angle in degrees to radians.
#[must_use]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * RADIANS_PER_DEGREE
}

/// Convert an angle in radians to degrees.
#[must_use]
pub fn to_degrees(radians: f64) -> f64 {
    radians / RADIANS_PER_DEGREE
}

/// Round a value to the given number of decimals, half away from zero.
/// * `value` - the value to round.
/// * `decimals` - the number of decimals to keep.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let pow = libm::pow(10.0, f64::from(decimals));
    libm::round(value * pow) / pow
}

/// The angle in `[0, 2π)` whose tangent is `t / n`, with the quadrant
/// resolved from the signs of `t` and `n`.
///
/// This is **not** a two-argument library arctangent: the branch table
/// matches the hand-drawn quadrant resolution the azimuth computations
/// were validated against.
/// For `t > 0, n > 0` the result is `atan(t/n)` in `[0, π/2)`; for `n < 0`
/// (either sign of `t`) `π` is added; otherwise `2π` is added. Inputs with
/// `|t|` or `|n|` below [`AXIS_SNAP_THRESHOLD`] snap to `0`, `π`, `π/2` or
/// `3π/2` instead of letting floating-point noise pick a quadrant.
/// * `t` - the numerator of the tangent.
/// * `n` - the denominator of the tangent.
#[must_use]
pub fn resolved_atan2(t: f64, n: f64) -> f64 {
    if libm::fabs(t) < AXIS_SNAP_THRESHOLD {
        return if n < 0.0 { PI } else { 0.0 };
    }
    if libm::fabs(n) < AXIS_SNAP_THRESHOLD {
        return if t > 0.0 { PI / 2.0 } else { 1.5 * PI };
    }

    let a1 = libm::atan(t / n);
    if t > 0.0 && n > 0.0 {
        a1
    } else if n < 0.0 {
        a1 + PI
    } else {
        a1 + 2.0 * PI
    }
}

/// The reduced-latitude mapping `atan(a·tan(v) / b)` between a geodetic
/// latitude and the corresponding angle on the auxiliary sphere.
///
/// Called with `(b, a, v)` it maps a geodetic latitude to the auxiliary
/// sphere; with `(a, b, v)` it maps back.
/// * `a`, `b` - the scaling pair.
/// * `v` - the angle in radians.
#[must_use]
pub fn reduced_latitude(a: f64, b: f64, v: f64) -> f64 {
    libm::atan(a * libm::tan(v) / b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_degree_radian_conversion() {
        assert_eq!(PI, to_radians(180.0));
        assert_eq!(180.0, to_degrees(PI));
        assert_eq!(-90.0, to_degrees(to_radians(-90.0)));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(1.235, round_to(1.23456, 3));
        assert_eq!(3.0, round_to(2.5, 0));
        assert_eq!(-3.0, round_to(-2.5, 0));
        assert_eq!(58.0, round_to(57.999_999_999_9, 9));
        assert_eq!(6_430_707.92, round_to(6_430_707.920_038_6, 3));
    }

    #[test]
    fn test_resolved_atan2_quadrants() {
        // tangent 1 in each quadrant
        assert_eq!(PI / 4.0, resolved_atan2(1.0, 1.0));
        assert_eq!(PI - PI / 4.0, resolved_atan2(1.0, -1.0));
        assert_eq!(PI + PI / 4.0, resolved_atan2(-1.0, -1.0));
        assert_eq!(2.0 * PI - PI / 4.0, resolved_atan2(-1.0, 1.0));
    }

    #[test]
    fn test_resolved_atan2_axis_snap() {
        assert_eq!(0.0, resolved_atan2(1e-12, 1.0));
        assert_eq!(PI, resolved_atan2(-1e-12, -1.0));
        assert_eq!(PI / 2.0, resolved_atan2(1.0, 1e-12));
        assert_eq!(1.5 * PI, resolved_atan2(-1.0, -1e-12));
        assert_eq!(0.0, resolved_atan2(0.0, 0.0));
    }

    #[test]
    fn test_resolved_atan2_range() {
        for i in 0..360 {
            let angle = to_radians(f64::from(i));
            let result = resolved_atan2(libm::sin(angle), libm::cos(angle));
            assert!((0.0..2.0 * PI).contains(&result));
            assert!(is_within_tolerance(angle, result, 1e-9));
        }
    }

    #[test]
    fn test_reduced_latitude_round_trip() {
        // WGS 84 axes
        let a = 6_378_137.0;
        let b = 6_356_752.314;

        for i in -89..90 {
            let geodetic = to_radians(f64::from(i));
            let reduced = reduced_latitude(b, a, geodetic);
            // the reduced latitude lies between the geodetic one and the Equator
            assert!(libm::fabs(reduced) <= libm::fabs(geodetic));
            let result = reduced_latitude(a, b, reduced);
            assert!(is_within_tolerance(geodetic, result, f64::EPSILON));
        }
    }

    #[test]
    fn test_gon_from_degrees() {
        assert_eq!(Gon(400.0), Gon::from_degrees(360.0));
        assert_eq!(Gon(100.0), Gon::from_degrees(90.0));
        assert_eq!(Gon(-50.0), Gon::from_degrees(-45.0));
    }
}
