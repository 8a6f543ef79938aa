//! Cropping to the bounding box of visible content.

use image::{imageops, RgbaImage};

/// Axis-aligned rectangle in pixel coordinates.
///
/// `left`/`top` are inclusive, `right`/`bottom` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// First column containing content.
    pub left: u32,
    /// First row containing content.
    pub top: u32,
    /// One past the last column containing content.
    pub right: u32,
    /// One past the last row containing content.
    pub bottom: u32,
}

impl Bounds {
    /// Width of the rectangle.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    /// Height of the rectangle.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Find the smallest rectangle containing every pixel with non-zero alpha.
///
/// Returns `None` when the whole image is fully transparent.
#[must_use]
pub fn content_bounds(img: &RgbaImage) -> Option<Bounds> {
    let mut bounds: Option<Bounds> = None;

    for (x, y, px) in img.enumerate_pixels() {
        if px[3] == 0 {
            continue;
        }
        let b = bounds.get_or_insert(Bounds {
            left: x,
            top: y,
            right: x + 1,
            bottom: y + 1,
        });
        b.left = b.left.min(x);
        b.top = b.top.min(y);
        b.right = b.right.max(x + 1);
        b.bottom = b.bottom.max(y + 1);
    }

    bounds
}

/// Crop `img` to its content bounds, or return it unchanged if it has none.
#[must_use]
pub fn crop_to_content(img: RgbaImage) -> RgbaImage {
    match content_bounds(&img) {
        Some(b) => imageops::crop_imm(&img, b.left, b.top, b.width(), b.height()).to_image(),
        None => img,
    }
}
