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

//! The meridian module contains the meridian arc series: the arc length
//! along a meridian between two latitudes (closed series) and, inversely,
//! the latitude reached after a given arc length from a reference latitude
//! (fixed-point iteration over the same series).

#![allow(clippy::suboptimal_flops)]

use crate::angle::{round_to, to_degrees, to_radians};
use crate::error::Error;
use crate::{Degrees, Ellipsoid, Metres};

/// The tolerance of the inverse arc iteration, in metres.
pub const ARC_TOLERANCE: f64 = 1e-4;

/// The iteration ceiling of the inverse arc iteration.
///
/// The fixed-point iteration converges in a handful of steps on any
/// Earth-like ellipsoid; the ceiling bounds pathological custom axes.
pub const MAX_ITERATIONS: u32 = 100;

/// The coefficients of the meridian arc series, a pure function of the
/// ellipsoid axes. Derived per call and never cached.
#[derive(Clone, Copy, Debug)]
pub struct SeriesCoefficients {
    /// The third flattening of the ellipsoid.
    n: f64,
    /// The rectifying radius factor `a / (n + 1)`.
    k: f64,
    k1: f64,
    k2: f64,
    k3: f64,
}

impl SeriesCoefficients {
    /// Derive the series coefficients from an ellipsoid.
    #[must_use]
    pub fn new(ellipsoid: &Ellipsoid) -> Self {
        let a = ellipsoid.a().0;
        let n = ellipsoid.third_flattening();
        let k = a / (n + 1.0);
        let k1 = 1.0 + n * (n / 4.0) + n * n * n * n / 64.0;
        let k2 = (n - n * n * n / 8.0) * 3.0;
        let k3 = (n * n - n * n * n * n / 4.0) * 15.0 / 8.0;
        Self { n, k, k1, k2, k3 }
    }

    /// Evaluate the arc length series, in metres.
    /// * `db` - the latitude difference in radians.
    /// * `bm` - the mean latitude in radians.
    fn evaluate(&self, db: f64, bm: f64) -> f64 {
        let n3 = self.n * self.n * self.n;
        let n4 = n3 * self.n;
        self.k
            * (self.k1 * db - self.k2 * libm::cos(2.0 * bm) * libm::sin(db)
                + self.k3 * libm::cos(4.0 * bm) * libm::sin(2.0 * db))
            - self.k * (n3 * libm::cos(6.0 * bm) * libm::sin(3.0 * db) * 35.0 / 24.0)
            + self.k * (n4 * libm::cos(8.0 * bm) * libm::sin(4.0 * db) * 315.0) / 256.0
    }
}

/// The meridian arc from `lat1` to `lat2`, both in radians, in metres.
///
/// The arc is signed: positive northward, negative southward.
pub(crate) fn arc_radians(ellipsoid: &Ellipsoid, lat1: f64, lat2: f64) -> f64 {
    let coefficients = SeriesCoefficients::new(ellipsoid);
    let db = lat2 - lat1;
    let bm = lat2 - db / 2.0;
    coefficients.evaluate(db, bm)
}

/// The latitude in radians reached after travelling `arc` metres along the
/// meridian from the latitude `lat` in radians.
///
/// Iteratively refines the latitude difference until the forward series
/// reproduces `arc` to within [`ARC_TOLERANCE`].
pub(crate) fn footpoint(ellipsoid: &Ellipsoid, lat: f64, arc: f64) -> Result<f64, Error> {
    let coefficients = SeriesCoefficients::new(ellipsoid);
    let mut db = 0.0;
    let mut g1 = 0.0;
    let mut iterations = 0;
    while libm::fabs(arc - g1) > ARC_TOLERANCE {
        if iterations == MAX_ITERATIONS {
            return Err(Error::NonConvergent);
        }
        db += (arc - g1) / (coefficients.k * coefficients.k1);
        let bm = lat + db / 2.0;
        g1 = coefficients.evaluate(db, bm);
        iterations += 1;
    }
    Ok(lat + db)
}

/// Calculate the meridian arc length between two latitudes, rounded to
/// millimetres.
///
/// The arc is signed: `lat2 > lat1` gives a positive length, reversing the
/// latitudes negates it.
/// * `lat1`, `lat2` - the start and finish latitudes.
#[must_use]
pub fn arc_length(ellipsoid: &Ellipsoid, lat1: Degrees, lat2: Degrees) -> Metres {
    let arc = arc_radians(ellipsoid, to_radians(lat1.0), to_radians(lat2.0));
    Metres(round_to(arc, 3))
}

/// Calculate the latitude reached after travelling `arc` metres along the
/// meridian from `lat`, rounded to 9 decimals.
/// * `lat` - the reference latitude.
/// * `arc` - the signed meridian arc length.
///
/// returns the latitude or `Error::NonConvergent` if the iteration ceiling
/// is reached.
pub fn latitude_at_arc(ellipsoid: &Ellipsoid, lat: Degrees, arc: Metres) -> Result<Degrees, Error> {
    let lat2 = footpoint(ellipsoid, to_radians(lat.0), arc.0)?;
    Ok(Degrees(round_to(to_degrees(lat2), 9)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ellipsoid::{BESSEL, WGS84};
    use crate::Ellipsoid;

    #[test]
    fn test_arc_length_manual_example() {
        // Reference manual example on the Bessel ellipsoid
        assert_eq!(
            Metres(6_430_707.92),
            arc_length(&BESSEL, Degrees(0.0), Degrees(58.0))
        );
    }

    #[test]
    fn test_arc_length_is_signed() {
        let north = arc_length(&WGS84, Degrees(50.0), Degrees(60.0));
        let south = arc_length(&WGS84, Degrees(60.0), Degrees(50.0));
        assert_eq!(Metres(1_113_225.778), north);
        assert_eq!(Metres(-1_113_225.778), south);
    }

    #[test]
    fn test_latitude_at_arc_round_trip() {
        let arc = arc_length(&BESSEL, Degrees(0.0), Degrees(58.0));
        assert_eq!(
            Degrees(58.0),
            latitude_at_arc(&BESSEL, Degrees(0.0), arc).expect("converges")
        );

        let arc = arc_length(&WGS84, Degrees(50.0), Degrees(60.0));
        let lat = latitude_at_arc(&WGS84, Degrees(50.0), arc).expect("converges");
        assert!(angle_sc::is_within_tolerance(60.0, lat.0, 1e-8));
    }

    #[test]
    fn test_latitude_at_arc_southward() {
        let arc = arc_length(&WGS84, Degrees(10.0), Degrees(-20.0));
        assert!(arc.0 < 0.0);
        let lat = latitude_at_arc(&WGS84, Degrees(10.0), arc).expect("converges");
        assert!(angle_sc::is_within_tolerance(-20.0, lat.0, 1e-8));
    }

    #[test]
    fn test_latitude_at_arc_zero_arc() {
        // an arc below the tolerance returns the reference latitude at once
        assert_eq!(
            Degrees(45.0),
            latitude_at_arc(&WGS84, Degrees(45.0), Metres(0.0)).expect("converges")
        );
    }

    #[test]
    fn test_latitude_at_arc_non_convergent() {
        // a violently eccentric ellipsoid makes the series correction
        // overshoot forever
        let cigar = Ellipsoid::new(Metres(2.0), Metres(1.0)).expect("valid axes");
        assert_eq!(
            Err(Error::NonConvergent),
            latitude_at_arc(&cigar, Degrees(0.0), Metres(100.0))
        );
    }
}
