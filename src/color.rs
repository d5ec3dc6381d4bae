// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A plain four-channel color, one byte per channel.

use image::{Pixel, Rgba};

/// Red, green, blue and alpha, each in [0, 255].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel; 255 is fully opaque.
    pub a: u8,
}

impl Color {
    /// Opaque black, the color of every point inside the set.
    pub const BLACK: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    /// Constructor.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Sum of the three color channels, 0 through 765.  Used by the
    /// terminal preview to pick a density character.
    pub fn brightness(&self) -> u16 {
        u16::from(self.r) + u16::from(self.g) + u16::from(self.b)
    }
}

impl From<Color> for Rgba<u8> {
    fn from(c: Color) -> Rgba<u8> {
        Rgba::from_channels(c.r, c.g, c.b, c.a)
    }
}

impl From<Rgba<u8>> for Color {
    fn from(p: Rgba<u8>) -> Color {
        let c = p.channels();
        Color::new(c[0], c[1], c[2], c[3])
    }
}
