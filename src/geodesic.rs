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

//! The geodesic module contains the direct and inverse geodetic problems,
//! solved by Bessel's classical method on the auxiliary sphere.
//!
//! Latitudes are mapped to reduced latitudes, the geodesic is treated as a
//! great circle through its Equator crossing (the node), and distances are
//! measured by a truncated series in the angular distance from the node.
//! Quadrants are resolved throughout by `resolved_atan2`; the inverse
//! trigonometric functions alone cannot recover them.

#![allow(clippy::suboptimal_flops)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

use crate::angle::{reduced_latitude, resolved_atan2, round_to, to_degrees, to_radians};
use crate::error::Error;
use crate::{Degrees, Ellipsoid, Metres};
use core::f64::consts::PI;

/// The number of fixed-point corrections applied to the angular distance in
/// the direct problem. An empirical count the results were validated with,
/// not a tolerance loop.
pub const DIRECT_CORRECTION_STEPS: u32 = 5;

/// The number of refinement iterations of the spherical triangle in the
/// inverse problem. As empirical as [`DIRECT_CORRECTION_STEPS`].
pub const INVERSE_REFINEMENTS: u32 = 5;

/// The longitude difference in radians below which two points are treated
/// as lying on the same meridian.
pub const MERIDIAN_LIMIT: f64 = 2e-8;

/// The solution of the direct geodetic problem.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectSolution {
    /// The latitude of the destination point.
    pub lat2: Degrees,
    /// The longitude of the destination point, in `(-180°, 180°]`.
    pub lon2: Degrees,
    /// The azimuth at the destination point, in `[0°, 360°)`.
    pub azimuth2: Degrees,
}

/// The solution of the inverse geodetic problem.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InverseSolution {
    /// The azimuth at the first point.
    pub azimuth1: Degrees,
    /// The azimuth at the second point.
    pub azimuth2: Degrees,
    /// The geodesic distance between the points.
    pub distance: Metres,
}

/// The truncated series measuring distance along the geodesic from its
/// node, as a function of the angular distance `σ` on the auxiliary sphere.
#[derive(Clone, Copy, Debug)]
struct DistanceSeries {
    /// The series modulus `(1 - W₀) / (1 + W₀)` at the node.
    k1: f64,
    /// The scale of the series, in metres.
    c: f64,
    d1: f64,
    d2: f64,
    d3: f64,
}

impl DistanceSeries {
    /// Derive the series from the modulus `k1` and the Semiminor axis `b`.
    fn from_modulus(b: f64, k1: f64) -> Self {
        let c = b * (1.0 + k1 * k1 / 4.0) / (1.0 - k1);
        let d1 = k1 / 2.0 - (3.0 * (k1 * k1 * k1)) / 16.0;
        let d2 = k1 * k1 / 16.0;
        let d3 = k1 * k1 * k1 / 48.0;
        Self { k1, c, d1, d2, d3 }
    }

    /// Derive the series from the reduced latitude `rb0` of the node.
    /// * `e` - the square of the Eccentricity.
    fn at_node(a: f64, b: f64, e: f64, rb0: f64) -> Self {
        let b0 = reduced_latitude(a, b, rb0);
        let sin_b0 = libm::sin(b0);
        let w0 = libm::sqrt(1.0 - e * (sin_b0 * sin_b0));
        Self::from_modulus(b, (1.0 - w0) / (1.0 + w0))
    }

    /// The distance in metres from the node at angular distance `si`.
    fn distance(&self, si: f64) -> f64 {
        self.c
            * (si + self.d1 * libm::sin(2.0 * si) - self.d2 * libm::sin(4.0 * si)
                + self.d3 * libm::sin(6.0 * si))
    }
}

/// The coefficients of the longitude correction series: the difference
/// between the longitude swept on the auxiliary sphere and on the
/// ellipsoid, as a function of the angular distances from the node.
#[derive(Clone, Copy, Debug)]
struct LongitudeSeries {
    r: f64,
    r1: f64,
    r2: f64,
    r3: f64,
}

impl LongitudeSeries {
    /// Derive the series coefficients.
    /// * `e` - the square of the Eccentricity.
    /// * `n1` - the third flattening.
    /// * `k1` - the distance series modulus at the node.
    /// * `rb0` - the reduced latitude of the node.
    fn new(e: f64, n1: f64, k1: f64, rb0: f64) -> Self {
        Self {
            r: e * libm::cos(rb0) / 2.0,
            r1: 1.0 + n1 - k1 / 2.0 - k1 * k1 / 4.0,
            r2: k1 / 4.0,
            r3: k1 * k1 / 16.0,
        }
    }

    /// The longitude correction over `[si1, si2]` with `dsi = si2 - si1`.
    fn correction(&self, dsi: f64, si1: f64, si2: f64) -> f64 {
        self.r * (self.r1 * dsi - self.r2 * (libm::sin(2.0 * si2) - libm::sin(2.0 * si1)))
            + self.r * self.r3 * (libm::sin(4.0 * si2) - libm::sin(4.0 * si1))
    }
}

/// Solve the direct geodetic problem: from a start point, a distance and a
/// start azimuth, find the destination point and the azimuth there.
///
/// Works in both hemispheres and for azimuths across the full circle; the
/// destination longitude is wrapped into `(-180°, 180°]`.
/// * `lon1`, `lat1` - the start point.
/// * `distance` - the geodesic distance to travel.
/// * `azimuth` - the azimuth at the start point.
#[must_use]
pub fn direct(
    ellipsoid: &Ellipsoid,
    lon1: Degrees,
    lat1: Degrees,
    distance: Metres,
    azimuth: Degrees,
) -> DirectSolution {
    let a = ellipsoid.a().0;
    let b = ellipsoid.b().0;
    let lat = to_radians(lat1.0);
    let lon = to_radians(lon1.0);
    let azimuth = to_radians(azimuth.0);

    // the start point and the node on the auxiliary sphere
    let rb1 = reduced_latitude(b, a, lat);
    let si1 = resolved_atan2(-libm::cos(azimuth), libm::tan(rb1));
    let mut rb0 = resolved_atan2(1.0, -libm::sin(si1) * libm::tan(azimuth));
    if azimuth > PI {
        rb0 = PI - rb0;
    }
    let la1 = resolved_atan2(libm::tan(si1), libm::cos(rb0));

    let e = ellipsoid.sq_eccentricity();
    let series = DistanceSeries::at_node(a, b, e, rb0);

    // distance from the node to the start point, then to the destination
    let s1 = series.distance(si1);
    let s2 = s1 + distance.0;

    let mut si2 = 0.0;
    let mut s3 = 0.0;
    for _ in 0..DIRECT_CORRECTION_STEPS {
        si2 += (s2 - s3) / series.c;
        s3 = series.distance(si2);
    }

    let mut la2 = resolved_atan2(libm::tan(si2), libm::cos(rb0));
    let mut a2 = resolved_atan2(1.0, libm::sin(si2) * libm::tan(rb0));
    let rb2 = resolved_atan2(libm::cos(a2), libm::tan(si2));
    let b2 = reduced_latitude(a, b, rb2);

    if b2 < 0.0 {
        la2 -= PI;
    } else if lat < 0.0 {
        la2 += PI;
    }
    if la2 < la1 {
        la2 += 2.0 * PI;
    }

    let dla = la2 - la1;
    let dsi = si2 - si1;
    let n1 = ellipsoid.third_flattening();
    let longitude = LongitudeSeries::new(e, n1, series.k1, rb0);

    let mut dl = dla - longitude.correction(dsi, si1, si2);
    if dl > 2.0 * PI {
        dl -= 2.0 * PI;
    }

    let mut l2 = if azimuth > PI { lon - dl } else { lon + dl };
    if l2 > 2.0 * PI {
        l2 -= 2.0 * PI;
    }

    if azimuth < PI {
        a2 = 2.0 * PI - a2;
    }

    // both points south of the Equator: the node longitude flips sides
    if lat < 0.0 && b2 < 0.0 {
        if azimuth < PI {
            l2 -= PI;
        } else {
            l2 += PI;
        }
    }

    while l2 > PI {
        l2 -= 2.0 * PI;
    }
    while l2 <= -PI {
        l2 += 2.0 * PI;
    }

    DirectSolution {
        lat2: Degrees(round_to(to_degrees(b2), 9)),
        lon2: Degrees(round_to(to_degrees(l2), 9)),
        azimuth2: Degrees(round_to(to_degrees(a2), 9)),
    }
}

/// Solve the inverse geodetic problem: from two points, find the geodesic
/// distance and the azimuths at both points.
/// * `lon1`, `lat1` - the first point.
/// * `lon2`, `lat2` - the second point.
///
/// returns the solution or `Error::MeridianConvergence` if the points lie
/// on (effectively) the same meridian, where the node of the geodesic is
/// indeterminate; the meridian arc functions handle that case.
pub fn inverse(
    ellipsoid: &Ellipsoid,
    lon1: Degrees,
    lat1: Degrees,
    lon2: Degrees,
    lat2: Degrees,
) -> Result<InverseSolution, Error> {
    let a = ellipsoid.a().0;
    let b = ellipsoid.b().0;
    let lat1 = to_radians(lat1.0);
    let lat2 = to_radians(lat2.0);

    let rb1 = reduced_latitude(b, a, lat1);
    let rb2 = reduced_latitude(b, a, lat2);
    let rb3 = (rb1 + rb2) / 2.0;

    let e = ellipsoid.sq_eccentricity();

    let mut dl = to_radians(lon2.0) - to_radians(lon1.0);
    if libm::fabs(dl) < MERIDIAN_LIMIT {
        return Err(Error::MeridianConvergence);
    }
    // wrap the longitude difference into (-pi, pi]
    if dl < -PI {
        dl += 2.0 * PI;
    } else if dl > PI {
        dl -= 2.0 * PI;
    }

    // first estimate: the longitude difference on the auxiliary sphere
    let cos_rb3 = libm::cos(rb3);
    let mut dla = dl / libm::sqrt(1.0 - e * (cos_rb3 * cos_rb3));

    let mut k1 = 0.0;
    let mut rb0 = 0.0;
    let mut si1 = 0.0;
    let mut si2 = 0.0;
    for i in 0..INVERSE_REFINEMENTS {
        let la1 = resolved_atan2(
            libm::tan(rb1) * libm::cos(dla) - libm::tan(rb2),
            libm::tan(rb1) * libm::sin(dla),
        );
        let la2 = resolved_atan2(
            -libm::tan(rb2) * libm::cos(dla) + libm::tan(rb1),
            libm::tan(rb2) * libm::sin(dla),
        );

        rb0 = resolved_atan2(libm::tan(rb1), libm::cos(la1));

        si1 = resolved_atan2(libm::cos(rb0) * libm::tan(la1), 1.0);
        si2 = resolved_atan2(libm::cos(rb0) * libm::tan(la2), 1.0);

        if si2 < si1 {
            si2 += 2.0 * PI;
        }
        if lat2 < 0.0 {
            si2 -= PI;
        }
        if lat1 < 0.0 {
            si2 -= PI;
        }

        let dsi = si2 - si1;
        dla = la2 - la1;
        // all but the final pass re-derive the series from the new node
        if i + 1 < INVERSE_REFINEMENTS {
            let b0 = reduced_latitude(a, b, rb0);
            let sin_b0 = libm::sin(b0);
            let w0 = libm::sqrt(1.0 - e * (sin_b0 * sin_b0));
            k1 = (1.0 - w0) / (1.0 + w0);
            let n1 = ellipsoid.third_flattening();
            let longitude = LongitudeSeries::new(e, n1, k1, rb0);
            dla = dl + longitude.correction(dsi, si1, si2);
        }
    }

    let series = DistanceSeries::from_modulus(b, k1);
    let s1 = series.distance(si1);
    let s2 = series.distance(si2);
    let mut ds = s2 - s1;
    if ds < 0.0 {
        ds = -ds;
    }

    let mut a1 = resolved_atan2(1.0, -libm::sin(si1) * libm::tan(rb0));
    let mut a2 = resolved_atan2(1.0, -libm::sin(si2) * libm::tan(rb0));
    if dl > 0.0 {
        a2 += PI;
    } else if dl < 0.0 {
        a1 += PI;
    }

    Ok(InverseSolution {
        azimuth1: Degrees(round_to(to_degrees(a1), 9)),
        azimuth2: Degrees(round_to(to_degrees(a2), 9)),
        distance: Metres(round_to(ds, 3)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ellipsoid::{INTERNATIONAL, WGS84};
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_direct_manual_example() {
        // Reference manual example on the International ellipsoid
        let result = direct(
            &INTERNATIONAL,
            Degrees(10.0),
            Degrees(50.0),
            Metres(15_000_000.0),
            Degrees(140.0),
        );
        assert_eq!(Degrees(-62.950_889_964), result.lat2);
        assert_eq!(Degrees(105.093_972_133), result.lon2);
        assert_eq!(Degrees(294.778_189_969), result.azimuth2);
    }

    #[test]
    fn test_inverse_manual_example() {
        // round trip of the direct manual example
        let result = inverse(
            &INTERNATIONAL,
            Degrees(10.0),
            Degrees(50.0),
            Degrees(105.093_972_133),
            Degrees(-62.950_889_964),
        )
        .expect("points on distinct meridians");
        assert_eq!(Degrees(140.0), result.azimuth1);
        assert_eq!(Degrees(294.778_189_969), result.azimuth2);
        assert_eq!(Metres(15_000_000.0), result.distance);
    }

    #[test]
    fn test_direct_inverse_southern_hemisphere() {
        // start south of the Equator with a south-westerly azimuth
        let result = direct(
            &INTERNATIONAL,
            Degrees(10.0),
            Degrees(-50.0),
            Metres(5_000_000.0),
            Degrees(220.0),
        );
        assert_eq!(Degrees(-62.946_370_54), result.lat2);
        assert_eq!(Degrees(-74.676_786_551), result.lon2);
        assert_eq!(Degrees(114.797_327_612), result.azimuth2);

        let back = inverse(
            &INTERNATIONAL,
            Degrees(10.0),
            Degrees(-50.0),
            result.lon2,
            result.lat2,
        )
        .expect("points on distinct meridians");
        assert_eq!(Degrees(220.0), back.azimuth1);
        assert!(is_within_tolerance(
            result.azimuth2.0,
            back.azimuth2.0,
            1e-8
        ));
        assert!(is_within_tolerance(5_000_000.0, back.distance.0, 1e-3));
    }

    #[test]
    fn test_direct_inverse_western_start() {
        // start in the western hemisphere with an azimuth below 180 degrees
        let result = direct(
            &WGS84,
            Degrees(-70.0),
            Degrees(40.0),
            Metres(8_000_000.0),
            Degrees(75.0),
        );
        assert_eq!(Degrees(22.829_107_389), result.lat2);
        assert_eq!(Degrees(14.914_581_336), result.lon2);
        assert_eq!(Degrees(306.530_667_485), result.azimuth2);

        let back = inverse(&WGS84, Degrees(-70.0), Degrees(40.0), result.lon2, result.lat2)
            .expect("points on distinct meridians");
        assert_eq!(Degrees(75.0), back.azimuth1);
        assert_eq!(Degrees(306.530_667_485), back.azimuth2);
        assert_eq!(Metres(8_000_000.0), back.distance);
    }

    #[test]
    fn test_inverse_rejects_shared_meridian() {
        assert_eq!(
            Err(Error::MeridianConvergence),
            inverse(
                &INTERNATIONAL,
                Degrees(10.0),
                Degrees(50.0),
                Degrees(10.000_000_000_1),
                Degrees(-62.95),
            )
        );
    }
}
