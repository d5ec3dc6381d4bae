// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turning iteration counts into colors.
//!
//! A palette is anything that can take an iteration count and the
//! limit it was computed against and hand back a `Color`.  The
//! renderer is generic over the palette, so swapping the gradient
//! never touches the iterator.  Plain closures work too:
//!
//! ```
//! use mandelbrot::{Color, Palette};
//!
//! let grey = |i: u32, max: u32| {
//!     let v = if max == 0 { 0 } else { (255 * u64::from(i) / u64::from(max)) as u8 };
//!     Color::new(v, v, v, 255)
//! };
//! assert_eq!(grey.color(0, 10), Color::new(0, 0, 0, 255));
//! ```

use color::Color;

/// The capability every coloring scheme provides.
pub trait Palette {
    /// Map an iteration count in [0, max_iterations] to a color.
    fn color(&self, iterations: u32, max_iterations: u32) -> Color;
}

impl<F> Palette for F
where
    F: Fn(u32, u32) -> Color,
{
    fn color(&self, iterations: u32, max_iterations: u32) -> Color {
        self(iterations, max_iterations)
    }
}

/// The default gradient: escaping points run from black through red
/// and orange to a pale yellow as they take longer to escape.  Points
/// inside the set are black.
#[derive(Copy, Clone, Debug, Default)]
pub struct Orange;

impl Palette for Orange {
    fn color(&self, iterations: u32, max_iterations: u32) -> Color {
        // Also covers a limit of zero, which would otherwise divide by zero.
        if iterations >= max_iterations {
            return Color::BLACK;
        }

        let v = band_value(iterations, max_iterations);
        let ramp = (v % 255) as u8;
        if v > 510 {
            Color::new(255, 255, ramp, 255)
        } else if v > 255 {
            Color::new(255, ramp, 0, 255)
        } else {
            Color::new(ramp, 0, 0, 255)
        }
    }
}

/// Position of an escaping point along the 765-step gradient, with
/// integer division.  Callers guarantee `iterations < max_iterations`.
pub fn band_value(iterations: u32, max_iterations: u32) -> u64 {
    765 * u64::from(iterations) / u64::from(max_iterations)
}
