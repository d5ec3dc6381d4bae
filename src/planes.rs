// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a raster of pixels with an origin at 0,0 in the upper-left
//! corner, and a region of the complex plane centered on an arbitrary
//! point.  The center pixel of the raster always lands on that point;
//! the zoom decides how much of the plane one pixel covers.
use num::Complex;

use errors::MandelbrotError;

/// The width and height of a raster.  Pixels run from 0,0 up to but
/// not including these values.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Raster(pub u32, pub u32);

/// Describes the x, y of a pixel in a raster.  Rows grow downward.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub u32, pub u32);

/// Maps pixels onto the complex plane.  The base scale is an eighth
/// of the sum of the raster's dimensions, so an unzoomed 640x640
/// raster spans 4.0 on each axis, and both axes share one scale so
/// the image is never stretched.
#[derive(Debug, Clone, Copy)]
pub struct PlaneMapper {
    /// The size of the raster being mapped.
    pub raster: Raster,
    /// The point on the complex plane under the center of the raster.
    pub center: Complex<f64>,
    // Pixels per unit of the complex plane, zoom included.
    scale: f64,
}

impl Raster {
    /// The total number of pixels.  Used to size frame buffers.
    pub fn len(&self) -> usize {
        (self.0 as usize) * (self.1 as usize)
    }

    /// A raster with a zero dimension holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.0 == 0 || self.1 == 0
    }
}

impl PlaneMapper {
    /// Constructor.  Takes the raster, the point that should sit at its
    /// center, and the zoom.
    pub fn new(
        raster: Raster,
        center: Complex<f64>,
        zoom: f64,
    ) -> Result<PlaneMapper, MandelbrotError> {
        if raster.0 == 0 && raster.1 == 0 {
            return Err(MandelbrotError::EmptyRaster);
        }

        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(MandelbrotError::InvalidZoom(zoom));
        }

        if !(center.re.is_finite() && center.im.is_finite()) {
            return Err(MandelbrotError::InvalidShift);
        }

        let scale = (f64::from(raster.0) + f64::from(raster.1)) * 0.125 * zoom;
        Ok(PlaneMapper {
            raster,
            center,
            scale,
        })
    }

    /// How many pixels make up one unit of the complex plane.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Given a pixel on the raster, map it to the equivalent point on
    /// the complex plane.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            (f64::from(pixel.0) - f64::from(self.raster.0) / 2.0) / self.scale + self.center.re,
            (f64::from(pixel.1) - f64::from(self.raster.1) / 2.0) / self.scale + self.center.im,
        )
    }
}
