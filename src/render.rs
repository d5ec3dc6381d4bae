// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Walks a raster one pixel at a time and fills a frame.  Every pixel
//! depends only on its own coordinates and the view, so a caller that
//! wants to split a frame across workers can call `pixel_color` from
//! each of them without coordination.

use image::RgbaImage;
use itertools::iproduct;

use color::Color;
use errors::MandelbrotError;
use escape::escape_time;
use palette::{Orange, Palette};
use planes::{Pixel, PlaneMapper, Raster};
use view::ViewParameters;

/// A raster, a view of the complex plane, and the palette used to
/// color it.  Once built it is immutable; change the view by building
/// a new one.
pub struct Renderer<P: Palette = Orange> {
    plane: PlaneMapper,
    max_iterations: u32,
    palette: P,
}

impl Renderer<Orange> {
    /// A renderer using the default orange gradient.
    pub fn new(raster: Raster, view: &ViewParameters) -> Result<Self, MandelbrotError> {
        Renderer::with_palette(raster, view, Orange)
    }
}

impl<P: Palette> Renderer<P> {
    /// A renderer using any palette.
    pub fn with_palette(
        raster: Raster,
        view: &ViewParameters,
        palette: P,
    ) -> Result<Self, MandelbrotError> {
        if view.max_iterations == 0 {
            return Err(MandelbrotError::NoIterations);
        }
        let plane = PlaneMapper::new(raster, view.center(), view.zoom)?;
        Ok(Renderer {
            plane,
            max_iterations: view.max_iterations,
            palette,
        })
    }

    /// The mapping from this renderer's raster to the complex plane.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// Escape time of a single pixel.
    pub fn pixel_iterations(&self, pixel: &Pixel) -> u32 {
        escape_time(self.plane.pixel_to_point(pixel), self.max_iterations)
    }

    /// Color of a single pixel.
    pub fn pixel_color(&self, pixel: &Pixel) -> Color {
        self.palette.color(self.pixel_iterations(pixel), self.max_iterations)
    }

    /// Escape times of the whole raster, row by row.
    pub fn iterations(&self) -> Vec<u32> {
        let Raster(width, height) = self.plane.raster;
        debug!("computing iterations for {}x{}", width, height);
        let mut buffer = Vec::with_capacity(self.plane.raster.len());
        for (row, column) in iproduct!(0..height, 0..width) {
            buffer.push(self.pixel_iterations(&Pixel(column, row)));
        }
        buffer
    }

    /// Color the whole raster into a framebuffer.
    pub fn render(&self) -> RgbaImage {
        let Raster(width, height) = self.plane.raster;
        debug!(
            "rendering {}x{} at zoom scale {} with {} iterations",
            width,
            height,
            self.plane.scale(),
            self.max_iterations
        );
        let mut frame = RgbaImage::new(width, height);
        for (row, column) in iproduct!(0..height, 0..width) {
            let color = self.pixel_color(&Pixel(column, row));
            frame.put_pixel(column, row, color.into());
        }
        debug!("frame complete");
        frame
    }
}

/// Compute the color of one pixel in a single call, using the palette
/// handed in.  Degenerate rasters and views, including an iteration
/// limit of zero, come out black without consulting the palette.
pub fn compute_pixel_color<P: Palette>(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    view: &ViewParameters,
    palette: &P,
) -> Color {
    if view.max_iterations == 0 {
        return Color::BLACK;
    }
    match PlaneMapper::new(Raster(width, height), view.center(), view.zoom) {
        Ok(plane) => {
            let iterations = escape_time(plane.pixel_to_point(&Pixel(x, y)), view.max_iterations);
            palette.color(iterations, view.max_iterations)
        }
        Err(_) => Color::BLACK,
    }
}
