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

//! [![License](https://img.shields.io/badge/License-MIT-blue)](https://opensource.org/license/mit/)
//!
//! A library of classical geodetic calculations on reference ellipsoids.
//!
//! The library implements the meridian arc and its inverse, the radii of
//! curvature, the direct and inverse geodetic problems by Bessel's method,
//! the meridian convergence in gon and the Gauss-Krüger projection between
//! geographic and plane grid coordinates.
//!
//! Calculations can be called as free functions against an [`Ellipsoid`]
//! (and a [`CoordSystem`] where a grid is involved), or through a
//! [`Session`] which holds the selected ellipsoid and coordinate system:
//!
//! ```
//! use ellipsoid_geodesy::{Degrees, Metres, Session};
//!
//! let mut session = Session::new();
//! session.select_ellipsoid("wgs84").unwrap();
//!
//! let arc = session
//!     .meridian_arc(Degrees(50.0), Degrees(60.0))
//!     .unwrap();
//! assert_eq!(Metres(1_113_225.778), arc);
//!
//! session.select_coord_system("UTM").unwrap();
//! let point = session
//!     .geographic_to_plane(Degrees(10.10), Degrees(63.10), Degrees(9.0), Degrees(0.0))
//!     .unwrap();
//! assert_eq!(Metres(6_997_206.352_8), point.x);
//! assert_eq!(Metres(555_525.119_5), point.y);
//! ```
//!
//! The library depends on the following crates:
//!
//! * [angle-sc](https://crates.io/crates/angle-sc) - the `Degrees` and
//!   `Radians` newtypes and angle tolerance testing;
//! * [icao-units](https://crates.io/crates/icao-units) - the `Metres`
//!   newtype;
//! * [libm](https://crates.io/crates/libm) - mathematical functions;
//! * [once_cell](https://crates.io/crates/once_cell) - the lazily
//!   initialised ellipsoid and coordinate system registries;
//! * [thiserror](https://crates.io/crates/thiserror) - the [`Error`] type.

pub mod angle;
pub mod convergence;
pub mod coord_system;
pub mod curvature;
pub mod ellipsoid;
pub mod error;
pub mod geodesic;
pub mod meridian;
pub mod projection;

pub use angle::Gon;
pub use angle_sc::{Degrees, Radians};
pub use coord_system::CoordSystem;
pub use curvature::CurvatureRadii;
pub use ellipsoid::Ellipsoid;
pub use error::Error;
pub use geodesic::{DirectSolution, InverseSolution};
pub use icao_units::si::Metres;
pub use projection::{GeographicPoint, PlanePoint};

/// A calculation session: the selected reference ellipsoid and plane
/// coordinate system.
///
/// Every calculation requires an ellipsoid and the grid calculations also
/// require a coordinate system; calling one before the corresponding
/// selection returns `Error::EllipsoidNotSet` or
/// `Error::CoordinateSystemNotSet`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Session {
    ellipsoid: Option<Ellipsoid>,
    coord_system: Option<CoordSystem>,
}

impl Session {
    /// Create a session with no ellipsoid or coordinate system selected.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ellipsoid: None,
            coord_system: None,
        }
    }

    /// Select a reference ellipsoid from the registry by name.
    ///
    /// returns `Error::UnknownEllipsoid` if the name is not registered.
    pub fn select_ellipsoid(&mut self, name: &str) -> Result<(), Error> {
        self.ellipsoid = Some(ellipsoid::lookup(name)?);
        Ok(())
    }

    /// Select a custom reference ellipsoid from its axes.
    /// * `a`, `b` - the Semimajor and Semiminor axes.
    ///
    /// returns `Error::InvalidEllipsoidShape` if the axes are not finite
    /// and positive.
    pub fn select_custom_ellipsoid(&mut self, a: Metres, b: Metres) -> Result<(), Error> {
        self.ellipsoid = Some(Ellipsoid::new(a, b)?);
        Ok(())
    }

    /// Select a plane coordinate system from the registry by name.
    ///
    /// returns `Error::UnknownCoordSystem` if the name is not registered.
    pub fn select_coord_system(&mut self, name: &str) -> Result<(), Error> {
        self.coord_system = Some(coord_system::lookup(name)?);
        Ok(())
    }

    /// Select a custom plane coordinate system.
    /// * `factor` - the grid scale factor.
    /// * `y_add` - the false easting.
    ///
    /// returns `Error::InvalidCoordSystemShape` if either value is not
    /// finite.
    pub fn select_custom_coord_system(&mut self, factor: f64, y_add: Metres) -> Result<(), Error> {
        self.coord_system = Some(CoordSystem::new(factor, y_add)?);
        Ok(())
    }

    /// The selected ellipsoid, if any.
    #[must_use]
    pub const fn ellipsoid(&self) -> Option<Ellipsoid> {
        self.ellipsoid
    }

    /// The selected coordinate system, if any.
    #[must_use]
    pub const fn coord_system(&self) -> Option<CoordSystem> {
        self.coord_system
    }

    fn require_ellipsoid(&self) -> Result<&Ellipsoid, Error> {
        self.ellipsoid.as_ref().ok_or(Error::EllipsoidNotSet)
    }

    fn require_coord_system(&self) -> Result<&CoordSystem, Error> {
        self.coord_system.as_ref().ok_or(Error::CoordinateSystemNotSet)
    }

    /// The meridian arc length from `lat1` to `lat2`, negative southward.
    ///
    /// See [`meridian::arc_length`].
    pub fn meridian_arc(&self, lat1: Degrees, lat2: Degrees) -> Result<Metres, Error> {
        Ok(meridian::arc_length(self.require_ellipsoid()?, lat1, lat2))
    }

    /// The latitude reached by travelling `arc` metres along the meridian
    /// from latitude `lat`.
    ///
    /// See [`meridian::latitude_at_arc`].
    pub fn meridian_arc_latitude(&self, lat: Degrees, arc: Metres) -> Result<Degrees, Error> {
        meridian::latitude_at_arc(self.require_ellipsoid()?, lat, arc)
    }

    /// The radii of curvature at latitude `lat` for a line at `azimuth`.
    ///
    /// See [`curvature::radii`].
    pub fn curvature_radii(&self, lat: Degrees, azimuth: Degrees) -> Result<CurvatureRadii, Error> {
        Ok(curvature::radii(self.require_ellipsoid()?, lat, azimuth))
    }

    /// Solve the direct geodetic problem from `(lon1, lat1)`.
    ///
    /// See [`geodesic::direct`].
    pub fn direct_problem(
        &self,
        lon1: Degrees,
        lat1: Degrees,
        distance: Metres,
        azimuth: Degrees,
    ) -> Result<DirectSolution, Error> {
        Ok(geodesic::direct(
            self.require_ellipsoid()?,
            lon1,
            lat1,
            distance,
            azimuth,
        ))
    }

    /// Solve the inverse geodetic problem between two points.
    ///
    /// See [`geodesic::inverse`].
    pub fn inverse_problem(
        &self,
        lon1: Degrees,
        lat1: Degrees,
        lon2: Degrees,
        lat2: Degrees,
    ) -> Result<InverseSolution, Error> {
        geodesic::inverse(self.require_ellipsoid()?, lon1, lat1, lon2, lat2)
    }

    /// The meridian convergence at a geographic position, in gon.
    ///
    /// See [`convergence::from_geographic`].
    pub fn convergence(
        &self,
        lat: Degrees,
        lon: Degrees,
        central_meridian: Degrees,
    ) -> Result<Gon, Error> {
        Ok(convergence::from_geographic(
            self.require_ellipsoid()?,
            lat,
            lon,
            central_meridian,
        ))
    }

    /// The meridian convergence at a plane grid position, in gon.
    ///
    /// See [`convergence::from_plane`].
    pub fn convergence_from_plane(
        &self,
        x: Metres,
        y: Metres,
        lat0: Degrees,
    ) -> Result<Gon, Error> {
        let ellipsoid = self.require_ellipsoid()?;
        let coord_system = self.require_coord_system()?;
        convergence::from_plane(ellipsoid, coord_system, x, y, lat0)
    }

    /// Project a geographic position to plane grid coordinates.
    ///
    /// See [`projection::geographic_to_plane`].
    pub fn geographic_to_plane(
        &self,
        lon: Degrees,
        lat: Degrees,
        central_meridian: Degrees,
        lat0: Degrees,
    ) -> Result<PlanePoint, Error> {
        let ellipsoid = self.require_ellipsoid()?;
        let coord_system = self.require_coord_system()?;
        Ok(projection::geographic_to_plane(
            ellipsoid,
            coord_system,
            lon,
            lat,
            central_meridian,
            lat0,
        ))
    }

    /// Project plane grid coordinates back to a geographic position.
    ///
    /// See [`projection::plane_to_geographic`].
    pub fn plane_to_geographic(
        &self,
        x: Metres,
        y: Metres,
        central_meridian: Degrees,
        lat0: Degrees,
    ) -> Result<GeographicPoint, Error> {
        let ellipsoid = self.require_ellipsoid()?;
        let coord_system = self.require_coord_system()?;
        projection::plane_to_geographic(ellipsoid, coord_system, x, y, central_meridian, lat0)
    }
}
