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

//! The ellipsoid module contains the type and registry for defining a
//! reference ellipsoid by its Semimajor and Semiminor axes.
//!
//! Quantities derived from the axes (eccentricities, third flattening) are
//! recomputed on demand: they are cheap, and the active ellipsoid of a
//! `Session` can change between calls.

use crate::error::Error;
use crate::Metres;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// A reference ellipsoid defined by its Semimajor and Semiminor axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The Semiminor axis of the ellipsoid.
    b: Metres,
}

/// The Bessel 1841 ellipsoid.
pub const BESSEL: Ellipsoid = Ellipsoid {
    a: Metres(6_377_492.018),
    b: Metres(6_356_173.509),
};

/// The International (Hayford 1924) ellipsoid.
pub const INTERNATIONAL: Ellipsoid = Ellipsoid {
    a: Metres(6_378_388.0),
    b: Metres(6_356_911.946),
};

/// The WGS 84 ellipsoid.
pub const WGS84: Ellipsoid = Ellipsoid {
    a: Metres(6_378_137.0),
    b: Metres(6_356_752.314),
};

/// The registry of named ellipsoids.
pub static ELLIPSOIDS: Lazy<BTreeMap<&'static str, Ellipsoid>> = Lazy::new(|| {
    BTreeMap::from([
        ("bessel", BESSEL),
        ("international", INTERNATIONAL),
        ("wgs84", WGS84),
    ])
});

/// Look up an `Ellipsoid` by its registry name.
/// * `name` - one of `bessel`, `international` or `wgs84`.
///
/// returns the `Ellipsoid` or `Error::UnknownEllipsoid`.
pub fn lookup(name: &str) -> Result<Ellipsoid, Error> {
    ELLIPSOIDS
        .get(name)
        .copied()
        .ok_or_else(|| Error::UnknownEllipsoid(name.to_string()))
}

impl Ellipsoid {
    /// Construct an `Ellipsoid` from caller-supplied axes.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `b` - the Semiminor axis of the `Ellipsoid`.
    ///
    /// returns the `Ellipsoid` or `Error::InvalidEllipsoidShape` if either
    /// axis is not a finite positive number.
    pub fn new(a: Metres, b: Metres) -> Result<Self, Error> {
        if a.0.is_finite() && b.0.is_finite() && a.0 > 0.0 && b.0 > 0.0 {
            Ok(Self { a, b })
        } else {
            Err(Error::InvalidEllipsoidShape)
        }
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// The square of the Eccentricity of the ellipsoid: `(a² - b²) / a²`.
    #[must_use]
    pub fn sq_eccentricity(&self) -> f64 {
        (self.a.0 * self.a.0 - self.b.0 * self.b.0) / (self.a.0 * self.a.0)
    }

    /// The square of the second Eccentricity of the ellipsoid: `(a² - b²) / b²`.
    #[must_use]
    pub fn sq_second_eccentricity(&self) -> f64 {
        (self.a.0 * self.a.0 - self.b.0 * self.b.0) / (self.b.0 * self.b.0)
    }

    /// The third flattening of the ellipsoid: `(a - b) / (a + b)`.
    #[must_use]
    pub fn third_flattening(&self) -> f64 {
        (self.a.0 - self.b.0) / (self.a.0 + self.b.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        assert_eq!(BESSEL, lookup("bessel").expect("bessel is registered"));
        assert_eq!(
            INTERNATIONAL,
            lookup("international").expect("international is registered")
        );
        assert_eq!(WGS84, lookup("wgs84").expect("wgs84 is registered"));

        assert_eq!(
            Err(Error::UnknownEllipsoid("airy".to_string())),
            lookup("airy")
        );
        assert_eq!(3, ELLIPSOIDS.len());
    }

    #[test]
    fn test_custom_ellipsoid_validation() {
        let geoid =
            Ellipsoid::new(Metres(6_378_137.0), Metres(6_356_752.314)).expect("valid axes");
        assert_eq!(WGS84, geoid);

        assert_eq!(
            Err(Error::InvalidEllipsoidShape),
            Ellipsoid::new(Metres(f64::NAN), Metres(6_356_752.314))
        );
        assert_eq!(
            Err(Error::InvalidEllipsoidShape),
            Ellipsoid::new(Metres(6_378_137.0), Metres(f64::INFINITY))
        );
        assert_eq!(
            Err(Error::InvalidEllipsoidShape),
            Ellipsoid::new(Metres(0.0), Metres(6_356_752.314))
        );
        assert_eq!(
            Err(Error::InvalidEllipsoidShape),
            Ellipsoid::new(Metres(6_378_137.0), Metres(-1.0))
        );
    }

    #[test]
    fn test_derived_quantities() {
        let geoid = WGS84;
        assert!(geoid.sq_eccentricity() > 0.0066);
        assert!(geoid.sq_eccentricity() < 0.0067);
        assert!(geoid.sq_second_eccentricity() > geoid.sq_eccentricity());
        assert!(geoid.third_flattening() > 0.0016);
        assert!(geoid.third_flattening() < 0.0017);
    }
}
