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

//! The convergence module calculates the meridian convergence: the angle
//! between grid north and true north, expressed in gon (400 gon per circle,
//! the unit of classical survey instruments).
//!
//! Two forms are provided: from a geographic position against a chosen
//! central meridian, and from plane grid coordinates via the footpoint
//! latitude of the northing.

#![allow(clippy::suboptimal_flops)]

use crate::angle::{round_to, to_degrees, to_radians, Gon};
use crate::coord_system::CoordSystem;
use crate::error::Error;
use crate::{meridian, Degrees, Ellipsoid, Metres};

/// The number of decimal places convergence angles are rounded to.
const GON_DECIMALS: i32 = 7;

/// Calculate the meridian convergence at a geographic position.
/// * `lat`, `lon` - the position.
/// * `central_meridian` - the longitude of the projection's central meridian.
///
/// returns the convergence in gon, positive east of the central meridian
/// on the northern hemisphere.
#[must_use]
pub fn from_geographic(
    ellipsoid: &Ellipsoid,
    lat: Degrees,
    lon: Degrees,
    central_meridian: Degrees,
) -> Gon {
    let dl = to_radians(lon.0 - central_meridian.0);
    let lat = to_radians(lat.0);

    let t = libm::tan(lat);
    let si = libm::sin(lat);
    let co = libm::cos(lat);
    // second eccentricity squared, scaled by the latitude
    let e2 = ellipsoid.sq_second_eccentricity() * (co * co);

    let c = dl * si
        + dl * dl * dl * (co * co) * (1.0 + 3.0 * e2 + 2.0 * e2 * e2) * (si / 3.0)
        + dl * dl * dl * dl * dl * (co * co * co * co) * (2.0 - t * t) * (si / 15.0);

    Gon(round_to(Gon::from_degrees(to_degrees(c)).0, GON_DECIMALS))
}

/// Calculate the meridian convergence at a plane grid position.
/// * `x`, `y` - the grid northing and easting.
/// * `lat0` - the latitude origin of the projection.
///
/// returns the convergence in gon or `Error::NonConvergent` if the
/// footpoint latitude iteration fails to settle.
pub fn from_plane(
    ellipsoid: &Ellipsoid,
    coord_system: &CoordSystem,
    x: Metres,
    y: Metres,
    lat0: Degrees,
) -> Result<Gon, Error> {
    let a = ellipsoid.a().0;
    let b = ellipsoid.b().0;
    let (x, y) = coord_system.from_grid(x.0, y.0);

    let bf = meridian::footpoint(ellipsoid, to_radians(lat0.0), x)?;
    let cos_bf = libm::cos(bf);
    let et = ellipsoid.sq_second_eccentricity() * (cos_bf * cos_bf);
    let nf = a * a / (b * libm::sqrt(1.0 + et));
    let t = libm::tan(bf);

    let c = y * t / nf - (1.0 + t * t - et - 2.0 * et * et) * t * (y * y * y) / (3.0 * nf * nf * nf)
        + (2.0 + 5.0 * t * t + 3.0 * (t * t * t * t)) * t * (y * y * y * y * y)
            / (15.0 * (nf * nf * nf * nf * nf));

    Ok(Gon(round_to(
        Gon::from_degrees(to_degrees(c)).0,
        GON_DECIMALS,
    )))
}
