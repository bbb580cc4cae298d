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

//! The curvature module contains the radii of curvature of the ellipsoid
//! at a latitude: along the meridian, along the prime vertical, their
//! geometric mean, and in an arbitrary azimuth (Euler's theorem).

use crate::angle::{round_to, to_radians};
use crate::{Degrees, Ellipsoid, Metres};

/// The radii of curvature at a latitude, all rounded to millimetres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvatureRadii {
    /// `M`, the radius of curvature along the meridian.
    pub meridian: Metres,
    /// `N`, the radius of curvature along the prime vertical.
    pub normal: Metres,
    /// `MR = √(M·N)`, the mean radius of curvature.
    pub mean: Metres,
    /// `AR`, the radius of curvature in the requested azimuth.
    pub azimuthal: Metres,
}

/// Calculate the radii of curvature at a latitude.
///
/// For any ellipsoid with `a > b` the meridian radius `M` never exceeds
/// the prime vertical radius `N`.
/// * `lat` - the geodetic latitude.
/// * `azimuth` - the azimuth of the normal section for the `AR` radius.
#[must_use]
pub fn radii(ellipsoid: &Ellipsoid, lat: Degrees, azimuth: Degrees) -> CurvatureRadii {
    let lat = to_radians(lat.0);
    let azimuth = to_radians(azimuth.0);
    let a = ellipsoid.a().0;
    let e = ellipsoid.sq_eccentricity();

    let w = libm::sqrt(1.0 - e * (libm::sin(lat) * libm::sin(lat)));
    let n = a / w;
    let m = (1.0 - e) * a / (w * w * w);
    let mr = libm::sqrt(m * n);
    let cos_az = libm::cos(azimuth);
    let sin_az = libm::sin(azimuth);
    let ar = n * m / (n * cos_az * cos_az + m * sin_az * sin_az);

    CurvatureRadii {
        meridian: Metres(round_to(m, 3)),
        normal: Metres(round_to(n, 3)),
        mean: Metres(round_to(mr, 3)),
        azimuthal: Metres(round_to(ar, 3)),
    }
}
