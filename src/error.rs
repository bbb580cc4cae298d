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

//! The error module defines the failure modes of the library.
//!
//! All errors are deterministic functions of the inputs: precondition
//! failures (a `Session` used before selecting an ellipsoid or coordinate
//! system), validation failures on the select operations, and the two
//! computational failures of the iterative routines.

use thiserror::Error;

/// The errors returned by the geodetic computations.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A computation requiring an ellipsoid was called on a `Session`
    /// without one selected.
    #[error("ellipsoid not set, call Session::select_ellipsoid first")]
    EllipsoidNotSet,

    /// A computation requiring a coordinate system was called on a
    /// `Session` without one selected.
    #[error("coordinate system not set, call Session::select_coord_system first")]
    CoordinateSystemNotSet,

    /// The named ellipsoid is not in the registry.
    #[error("unknown ellipsoid: {0}")]
    UnknownEllipsoid(String),

    /// The named coordinate system is not in the registry.
    #[error("unknown coordinate system: {0}")]
    UnknownCoordSystem(String),

    /// A custom ellipsoid was supplied with non-finite or non-positive axes.
    #[error("ellipsoid axes must be finite and positive")]
    InvalidEllipsoidShape,

    /// A custom coordinate system was supplied with non-finite parameters.
    #[error("coordinate system scale factor and offset must be finite")]
    InvalidCoordSystemShape,

    /// The inverse geodetic problem was called with both points on
    /// (effectively) the same meridian.
    #[error("points lie on the same meridian, use the meridian arc functions instead")]
    MeridianConvergence,

    /// The meridian arc inverse iteration did not reach its tolerance
    /// within the iteration ceiling.
    #[error("meridian arc iteration did not converge")]
    NonConvergent,
}
