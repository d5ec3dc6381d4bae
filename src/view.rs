// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The view parameters a caller holds across frames, and the moves a
//! viewer makes on them.

use num::Complex;

use errors::MandelbrotError;

/// How much each zoom step magnifies.
pub const ZOOM_FACTOR: f64 = 1.2;

/// Deeper zooms need more iterations to resolve the boundary; each
/// zoom step grows the limit by this much.
pub const ITERATION_FACTOR: f64 = 1.03;

/// A pan moves the view by this many units of the complex plane,
/// divided by the zoom.
pub const PAN_STEP: f64 = 1.0;

/// Where to move the view.  Up and down follow the raster, so up
/// moves toward row zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Direction {
    /// Toward the top row.
    Up,
    /// Toward the bottom row.
    Down,
    /// Toward the first column.
    Left,
    /// Toward the last column.
    Right,
}

/// Shift, zoom and iteration limit for a render.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewParameters {
    /// Real part of the point under the center of the raster.
    pub shift_x: f64,
    /// Imaginary part of the point under the center of the raster.
    pub shift_y: f64,
    /// Magnification; 1.0 shows the whole set.
    pub zoom: f64,
    /// The most iterations any one pixel gets.
    pub max_iterations: u32,
}

impl Default for ViewParameters {
    fn default() -> Self {
        ViewParameters {
            shift_x: 0.0,
            shift_y: 0.0,
            zoom: 1.0,
            max_iterations: 100,
        }
    }
}

impl ViewParameters {
    /// Checked constructor.
    pub fn new(
        shift_x: f64,
        shift_y: f64,
        zoom: f64,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        if !(shift_x.is_finite() && shift_y.is_finite()) {
            return Err(MandelbrotError::InvalidShift);
        }
        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(MandelbrotError::InvalidZoom(zoom));
        }
        if max_iterations == 0 {
            return Err(MandelbrotError::NoIterations);
        }
        Ok(ViewParameters {
            shift_x,
            shift_y,
            zoom,
            max_iterations,
        })
    }

    /// The shift as a point on the complex plane.
    pub fn center(&self) -> Complex<f64> {
        Complex::new(self.shift_x, self.shift_y)
    }

    /// Magnify one step and raise the iteration limit to match.  At
    /// the largest representable zoom this does nothing.
    pub fn zoom_in(&mut self) {
        let zoom = self.zoom * ZOOM_FACTOR;
        if !zoom.is_finite() {
            trace!("zoom in refused at {}", self.zoom);
            return;
        }
        self.zoom = zoom;
        let grown = (f64::from(self.max_iterations) * ITERATION_FACTOR) as u32;
        self.max_iterations = grown.max(self.max_iterations.saturating_add(1));
        trace!("zoom in: {:?}", self);
    }

    /// Undo one step of magnification.  The iteration limit never
    /// drops below one.  The zoom stops shrinking before a pan step
    /// (the reciprocal of the zoom) would overflow.
    pub fn zoom_out(&mut self) {
        let zoom = self.zoom / ZOOM_FACTOR;
        if !(zoom >= ::std::f64::MIN_POSITIVE && (PAN_STEP / zoom).is_finite()) {
            trace!("zoom out refused at {}", self.zoom);
            return;
        }
        self.zoom = zoom;
        let shrunk = (f64::from(self.max_iterations) / ITERATION_FACTOR) as u32;
        self.max_iterations = shrunk.max(1);
        trace!("zoom out: {:?}", self);
    }

    /// Move the view one step.  The step shrinks as the zoom grows so
    /// that a pan always covers the same share of the screen.  A pan
    /// that would push the shift off the representable plane does
    /// nothing.
    pub fn pan(&mut self, direction: Direction) {
        let step = PAN_STEP / self.zoom;
        let (x, y) = match direction {
            Direction::Up => (self.shift_x, self.shift_y - step),
            Direction::Down => (self.shift_x, self.shift_y + step),
            Direction::Left => (self.shift_x - step, self.shift_y),
            Direction::Right => (self.shift_x + step, self.shift_y),
        };
        if !(x.is_finite() && y.is_finite()) {
            trace!("pan {:?} refused at {:?}", direction, self);
            return;
        }
        self.shift_x = x;
        self.shift_y = y;
        trace!("pan {:?}: {:?}", direction, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shows_the_whole_set() {
        let v = ViewParameters::default();
        assert_eq!(v.center(), Complex::new(0.0, 0.0));
        assert_eq!(v.zoom, 1.0);
        assert_eq!(v.max_iterations, 100);
    }

    #[test]
    fn new_rejects_bad_parameters() {
        assert_eq!(
            ViewParameters::new(0.0, 0.0, 0.0, 10),
            Err(MandelbrotError::InvalidZoom(0.0))
        );
        assert_eq!(
            ViewParameters::new(0.0, ::std::f64::INFINITY, 1.0, 10),
            Err(MandelbrotError::InvalidShift)
        );
        assert_eq!(
            ViewParameters::new(0.0, 0.0, 1.0, 0),
            Err(MandelbrotError::NoIterations)
        );
        assert!(ViewParameters::new(-0.5, 0.1, 2.0, 10).is_ok());
    }

    #[test]
    fn zoom_in_grows_the_limit() {
        let mut v = ViewParameters::default();
        v.zoom_in();
        assert_eq!(v.zoom, 1.2);
        assert_eq!(v.max_iterations, 103);
    }

    #[test]
    fn small_limits_still_grow() {
        let mut v = ViewParameters::new(0.0, 0.0, 1.0, 1).unwrap();
        v.zoom_in();
        assert_eq!(v.max_iterations, 2);
    }

    #[test]
    fn zoom_out_keeps_at_least_one_iteration() {
        let mut v = ViewParameters::new(0.0, 0.0, 1.0, 1).unwrap();
        v.zoom_out();
        assert_eq!(v.max_iterations, 1);
        assert!(v.zoom < 1.0);
    }

    #[test]
    fn pan_steps_shrink_with_zoom() {
        let mut v = ViewParameters::new(0.0, 0.0, 4.0, 10).unwrap();
        v.pan(Direction::Right);
        v.pan(Direction::Up);
        assert_eq!(v.center(), Complex::new(0.25, -0.25));
        v.pan(Direction::Left);
        v.pan(Direction::Down);
        assert_eq!(v.center(), Complex::new(0.0, 0.0));
    }

    fn still_valid(v: &ViewParameters) -> bool {
        ViewParameters::new(v.shift_x, v.shift_y, v.zoom, v.max_iterations).is_ok()
    }

    #[test]
    fn zooming_in_forever_stays_renderable() {
        let mut v = ViewParameters::default();
        for _ in 0..4000 {
            v.zoom_in();
        }
        assert!(still_valid(&v));
        assert!(v.zoom > 1.0e300);
        v.pan(Direction::Right);
        assert!(still_valid(&v));
        assert!(::render::Renderer::new(::planes::Raster(4, 4), &v).is_ok());
    }

    #[test]
    fn zooming_out_forever_stays_renderable() {
        let mut v = ViewParameters::default();
        for _ in 0..4000 {
            v.zoom_out();
        }
        assert!(still_valid(&v));
        assert!(v.zoom < 1.0e-300);
        assert_eq!(v.max_iterations, 1);
        for _ in 0..4000 {
            v.pan(Direction::Left);
            v.pan(Direction::Up);
        }
        assert!(still_valid(&v));
        assert!(::render::Renderer::new(::planes::Raster(4, 4), &v).is_ok());
    }
}
