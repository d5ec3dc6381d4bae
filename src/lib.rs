#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot evaluator
//!
//! The Mandelbrot set is the set of points c on the complex plane for
//! which repeatedly squaring z and adding c, starting from zero, never
//! runs off to infinity.  Once |z| passes 2 it never comes back, so
//! the number of steps it takes to get there (the "escape time") says
//! how far outside the set a point is.  Points that haven't escaped
//! by the iteration limit are treated as inside.
//!
//! This crate maps pixels onto the complex plane, computes their
//! escape times, and turns those into colors.  Everything in the
//! per-pixel path is a pure function: the same inputs always give the
//! same color, and no pixel depends on another.
//!
//! ```
//! use mandelbrot::{compute_iterations, iterations_to_color, Color};
//!
//! // The middle of an unshifted raster is the origin, which never escapes.
//! let i = compute_iterations(320, 240, 640, 480, 0.0, 0.0, 1.0, 256);
//! assert_eq!(i, 256);
//! assert_eq!(iterations_to_color(i, 256), Color::BLACK);
//! ```

extern crate image;
extern crate itertools;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate num;

pub mod color;
pub mod errors;
pub mod escape;
pub mod palette;
pub mod planes;
pub mod render;
pub mod view;

pub use color::Color;
pub use errors::MandelbrotError;
pub use palette::{Orange, Palette};
pub use planes::{Pixel, PlaneMapper, Raster};
pub use render::{compute_pixel_color, Renderer};
pub use view::{Direction, ViewParameters};

use num::Complex;

/// Escape time of pixel (x, y) of a width x height raster, viewed at
/// the given shift and zoom.  Always in [0, max_iterations].  Inputs
/// that describe no view at all (an empty raster, a zoom that isn't a
/// finite positive number, a non-finite shift) return 0.
#[allow(clippy::too_many_arguments)]
pub fn compute_iterations(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    shift_x: f64,
    shift_y: f64,
    zoom: f64,
    max_iterations: u32,
) -> u32 {
    match PlaneMapper::new(Raster(width, height), Complex::new(shift_x, shift_y), zoom) {
        Ok(plane) => escape::escape_time(plane.pixel_to_point(&Pixel(x, y)), max_iterations),
        Err(_) => 0,
    }
}

/// Color an escape time with the default orange gradient.
pub fn iterations_to_color(iterations: u32, max_iterations: u32) -> Color {
    Orange.color(iterations, max_iterations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_pixel_is_inside_for_any_limit() {
        for limit in &[1, 7, 1000] {
            assert_eq!(
                compute_iterations(50, 50, 100, 100, 0.0, 0.0, 1.0, *limit),
                *limit
            );
        }
    }

    #[test]
    fn pixel_over_two_escapes_at_two() {
        // 200x40 at zoom 1 has a scale of 30 pixels per unit.
        assert_eq!(compute_iterations(160, 20, 200, 40, 0.0, 0.0, 1.0, 50), 2);
        assert_eq!(compute_iterations(50, 50, 100, 100, 2.0, 0.0, 1.0, 50), 2);
    }

    #[test]
    fn result_is_bounded() {
        for x in 0..40 {
            for y in 0..30 {
                assert!(compute_iterations(x, y, 40, 30, -0.5, 0.0, 1.0, 30) <= 30);
            }
        }
    }

    #[test]
    fn degenerate_inputs_return_zero() {
        assert_eq!(compute_iterations(0, 0, 0, 0, 0.0, 0.0, 1.0, 10), 0);
        assert_eq!(compute_iterations(1, 1, 4, 4, 0.0, 0.0, 0.0, 10), 0);
        assert_eq!(compute_iterations(1, 1, 4, 4, 0.0, 0.0, -2.0, 10), 0);
        assert_eq!(compute_iterations(2, 2, 4, 4, 0.0, 0.0, 1.0, 0), 0);
    }

    #[test]
    fn repeated_calls_agree() {
        let a = compute_iterations(13, 7, 64, 48, -0.75, 0.1, 8.0, 500);
        let b = compute_iterations(13, 7, 64, 48, -0.75, 0.1, 8.0, 500);
        assert_eq!(a, b);
    }

    #[test]
    fn inside_and_zero_are_both_black() {
        assert_eq!(iterations_to_color(40, 40), Color::new(0, 0, 0, 255));
        assert_eq!(iterations_to_color(0, 40), Color::new(0, 0, 0, 255));
    }
}
