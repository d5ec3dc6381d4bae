// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised while building a plane or a view.  Nothing in the
//! per-pixel path fails; these only come out of constructors.

/// Everything that can be wrong with the parameters of a render.
#[derive(Debug, Fail, PartialEq)]
pub enum MandelbrotError {
    /// Width and height were both zero, so there is no scale.
    #[fail(display = "The raster has no area to map onto the complex plane.")]
    EmptyRaster,

    /// Zoom must be a finite number greater than zero.
    #[fail(display = "Zoom must be finite and greater than zero, got {}", _0)]
    InvalidZoom(f64),

    /// One of the shifts was NaN or infinite.
    #[fail(display = "The shift must be a finite point on the complex plane.")]
    InvalidShift,

    /// An iteration limit of zero renders nothing.
    #[fail(display = "The iteration limit must be at least one.")]
    NoIterations,
}
