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

//! The `coord_system` module contains the projected plane coordinate system
//! parameters: a uniform scale factor and a false offset added to the
//! easting-like coordinate.

use crate::error::Error;
use crate::Metres;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// The scale factor and false offset of a projected plane coordinate system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordSystem {
    /// The uniform projection scale factor.
    factor: f64,
    /// The false offset added to the `y` coordinate.
    y_add: Metres,
}

/// The UTM coordinate system: scale factor 0.9996, false easting 500 km.
pub const UTM: CoordSystem = CoordSystem {
    factor: 0.9996,
    y_add: Metres(500_000.0),
};

/// The NGO (Norwegian national grid) coordinate system: unit scale, no offset.
pub const NGO: CoordSystem = CoordSystem {
    factor: 1.0,
    y_add: Metres(0.0),
};

/// The registry of named coordinate systems.
pub static COORD_SYSTEMS: Lazy<BTreeMap<&'static str, CoordSystem>> =
    Lazy::new(|| BTreeMap::from([("UTM", UTM), ("NGO", NGO)]));

/// Look up a `CoordSystem` by its registry name.
/// * `name` - one of `UTM` or `NGO`.
///
/// returns the `CoordSystem` or `Error::UnknownCoordSystem`.
pub fn lookup(name: &str) -> Result<CoordSystem, Error> {
    COORD_SYSTEMS
        .get(name)
        .copied()
        .ok_or_else(|| Error::UnknownCoordSystem(name.to_string()))
}

impl CoordSystem {
    /// Construct a `CoordSystem` from caller-supplied parameters.
    ///
    /// Zero values are valid (the NGO system has a unit factor and no
    /// offset); only non-finite values are rejected.
    /// * `factor` - the uniform projection scale factor.
    /// * `y_add` - the false offset added to the `y` coordinate.
    ///
    /// returns the `CoordSystem` or `Error::InvalidCoordSystemShape`.
    pub fn new(factor: f64, y_add: Metres) -> Result<Self, Error> {
        if factor.is_finite() && y_add.0.is_finite() {
            Ok(Self { factor, y_add })
        } else {
            Err(Error::InvalidCoordSystemShape)
        }
    }

    /// The uniform projection scale factor.
    #[must_use]
    pub const fn factor(&self) -> f64 {
        self.factor
    }

    /// The false offset added to the `y` coordinate.
    #[must_use]
    pub const fn y_add(&self) -> Metres {
        self.y_add
    }

    /// Apply the scale factor and false offset to unscaled plane coordinates.
    pub(crate) fn to_grid(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.factor, y * self.factor + self.y_add.0)
    }

    /// Remove the scale factor and false offset from grid coordinates.
    pub(crate) fn from_grid(&self, x: f64, y: f64) -> (f64, f64) {
        (x / self.factor, (y - self.y_add.0) / self.factor)
    }
}
