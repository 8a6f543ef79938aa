//! Pixel classification and the rewrite to real transparency.

use image::{Rgba, RgbaImage};

use crate::color::Color;
use crate::sampling::Palette;

/// Default tolerance for matching a pixel against a checkerboard color.
pub const DEFAULT_MAX_DIST: f64 = 40.0;

/// Fully transparent black, emitted for every checkerboard pixel.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Whether `pixel` belongs to the checkerboard background.
///
/// Only the RGB channels are compared; a pixel that is already fully
/// transparent is classified by its color like any other.
#[must_use]
pub fn is_checkerboard(pixel: &Rgba<u8>, palette: &Palette, max_dist: f64) -> bool {
    palette.matches(Color::from(pixel), max_dist)
}

/// Produce a copy of `img` with every checkerboard pixel made transparent.
///
/// Pixels that do not match keep their original color and alpha.
#[must_use]
pub fn make_transparent(img: &RgbaImage, palette: &Palette, max_dist: f64) -> RgbaImage {
    RgbaImage::from_fn(img.width(), img.height(), |x, y| {
        let px = img.get_pixel(x, y);
        if is_checkerboard(px, palette, max_dist) {
            TRANSPARENT
        } else {
            *px
        }
    })
}
