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

//! The projection module implements the Gauss-Krüger transverse Mercator
//! projection between geographic coordinates and plane grid coordinates.
//!
//! The forward direction expands northing and easting in power series of
//! the longitude difference from the central meridian; the northing is
//! anchored on the meridian arc from the latitude origin. The reverse
//! direction starts from the footpoint latitude of the northing and expands
//! in powers of the easting. Scale factor and false easting of the grid are
//! applied by the selected [`CoordSystem`].

#![allow(clippy::suboptimal_flops)]
#![allow(clippy::similar_names)]

use crate::angle::{round_to, to_degrees, to_radians};
use crate::coord_system::CoordSystem;
use crate::error::Error;
use crate::{meridian, Degrees, Ellipsoid, Metres};

/// The number of decimal places plane grid coordinates are rounded to.
const PLANE_DECIMALS: i32 = 4;

/// The number of decimal places geographic coordinates are rounded to.
const GEOGRAPHIC_DECIMALS: i32 = 9;

/// A position in plane grid coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanePoint {
    /// The northing, measured from the latitude origin.
    pub x: Metres,
    /// The easting, measured from the central meridian.
    pub y: Metres,
}

/// A position in geographic coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeographicPoint {
    pub lat: Degrees,
    pub lon: Degrees,
}

/// Project a geographic position to plane grid coordinates.
/// * `lon`, `lat` - the position.
/// * `central_meridian` - the longitude of the projection's central meridian.
/// * `lat0` - the latitude origin the northing is measured from.
#[must_use]
pub fn geographic_to_plane(
    ellipsoid: &Ellipsoid,
    coord_system: &CoordSystem,
    lon: Degrees,
    lat: Degrees,
    central_meridian: Degrees,
    lat0: Degrees,
) -> PlanePoint {
    let a = ellipsoid.a().0;
    let b = ellipsoid.b().0;
    let l = to_radians(lon.0) - to_radians(central_meridian.0);
    let br = to_radians(lat.0);

    let cb = libm::cos(br);
    let t = libm::tan(br);
    let et = ellipsoid.sq_second_eccentricity() * (cb * cb);
    let n1 = a * a / (libm::sqrt(1.0 + et) * b);

    let a1 = n1 * cb;
    let a2 = -(n1 * t * (cb * cb)) / 2.0;
    let a3 = -(n1 * (cb * cb * cb)) * (1.0 - t * t + et) / 6.0;
    let a4 = n1 * t * (cb * cb * cb * cb) * (5.0 - t * t + 9.0 * et + 4.0 * et * et) / 24.0;
    let a5 = n1
        * (cb * cb * cb * cb * cb)
        * (5.0 - 18.0 * (t * t) + t * t * t * t + 14.0 * et - 58.0 * et * (t * t))
        / 120.0;
    let a6 = n1
        * t
        * (cb * cb * cb * cb * cb * cb)
        * (61.0 - 58.0 * (t * t) + t * t * t * t + 270.0 * et - 330.0 * et * (t * t))
        / 270.0;

    let arc = meridian::arc_radians(ellipsoid, to_radians(lat0.0), br);
    let x = arc - a2 * (l * l) + a4 * (l * l * l * l) + a6 * (l * l * l * l * l * l);
    let y = a1 * l - a3 * (l * l * l) + a5 * (l * l * l * l * l);

    let (x, y) = coord_system.to_grid(x, y);
    PlanePoint {
        x: Metres(round_to(x, PLANE_DECIMALS)),
        y: Metres(round_to(y, PLANE_DECIMALS)),
    }
}

/// Project plane grid coordinates back to a geographic position.
/// * `x`, `y` - the grid northing and easting.
/// * `central_meridian` - the longitude of the projection's central meridian.
/// * `lat0` - the latitude origin the northing is measured from.
///
/// returns the position or `Error::NonConvergent` if the footpoint latitude
/// iteration fails to settle.
pub fn plane_to_geographic(
    ellipsoid: &Ellipsoid,
    coord_system: &CoordSystem,
    x: Metres,
    y: Metres,
    central_meridian: Degrees,
    lat0: Degrees,
) -> Result<GeographicPoint, Error> {
    let a = ellipsoid.a().0;
    let b = ellipsoid.b().0;
    let (x, y) = coord_system.from_grid(x.0, y.0);

    let bf = meridian::footpoint(ellipsoid, to_radians(lat0.0), x)?;
    let cos_bf = libm::cos(bf);
    let tf = libm::tan(bf);
    let etf = ellipsoid.sq_second_eccentricity() * (cos_bf * cos_bf);
    let nf = a * a / (libm::sqrt(1.0 + etf) * b);

    let b1 = 1.0 / (nf * cos_bf);
    let b2 = tf * (1.0 + etf) / (2.0 * (nf * nf));
    let b3 = (1.0 + 2.0 * (tf * tf) * etf) / (6.0 * (nf * nf * nf) * cos_bf);
    let b4 = tf * (5.0 + 3.0 * (tf * tf) + 6.0 * etf * (tf * tf)) / (24.0 * (nf * nf * nf * nf));
    let b5 = (5.0 + 28.0 * (tf * tf) + 24.0 * (tf * tf * tf * tf))
        / (120.0 * (nf * nf * nf * nf * nf) * cos_bf);

    let br = bf - b2 * (y * y) + b4 * (y * y * y * y);
    let l = b1 * y - b3 * (y * y * y) + b5 * (y * y * y * y * y);

    Ok(GeographicPoint {
        lat: Degrees(round_to(to_degrees(br), GEOGRAPHIC_DECIMALS)),
        lon: Degrees(round_to(
            to_degrees(l + to_radians(central_meridian.0)),
            GEOGRAPHIC_DECIMALS,
        )),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord_system::{NGO, UTM};
    use crate::ellipsoid::{BESSEL, WGS84};

    #[test]
    fn test_geographic_to_plane_utm() {
        let p = geographic_to_plane(
            &WGS84,
            &UTM,
            Degrees(10.10),
            Degrees(63.10),
            Degrees(9.0),
            Degrees(0.0),
        );
        assert_eq!(Metres(6_997_206.352_8), p.x);
        assert_eq!(Metres(555_525.119_5), p.y);
    }

    #[test]
    fn test_plane_to_geographic_utm() {
        let p = plane_to_geographic(
            &WGS84,
            &UTM,
            Metres(6_997_206.352_8),
            Metres(555_525.119_5),
            Degrees(9.0),
            Degrees(0.0),
        )
        .expect("footpoint iteration converges");
        assert_eq!(Degrees(63.100_000_002), p.lat);
        assert_eq!(Degrees(10.100_107_399), p.lon);
    }

    #[test]
    fn test_round_trip_ngo() {
        let p = geographic_to_plane(
            &BESSEL,
            &NGO,
            Degrees(10.7),
            Degrees(59.9),
            Degrees(10.0),
            Degrees(58.0),
        );
        assert_eq!(Metres(211_834.209_4), p.x);
        assert_eq!(Metres(39_173.079_9), p.y);

        let g = plane_to_geographic(&BESSEL, &NGO, p.x, p.y, Degrees(10.0), Degrees(58.0))
            .expect("footpoint iteration converges");
        assert_eq!(Degrees(59.9), g.lat);
        assert_eq!(Degrees(10.700_026_035), g.lon);
    }
}
