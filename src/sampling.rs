//! Corner sampling of the baked-in checkerboard colors.
//!
//! Checkerboards drawn by image tools alternate two near-grey tones. Logos are
//! usually centered, so the four corners of the image are assumed to show only
//! background. Every greyish color found there is treated as a checkerboard tone.

use std::collections::BTreeSet;

use image::RgbaImage;

use crate::color::Color;

/// Default edge length of each corner sample region, in pixels.
pub const DEFAULT_CORNER_SIZE: u32 = 20;

/// Common checkerboard greys used when the corners yield nothing usable.
pub const FALLBACK_COLORS: [Color; 4] = [
    Color::new(192, 192, 192),
    Color::new(128, 128, 128),
    Color::new(224, 224, 224),
    Color::new(204, 204, 204),
];

/// Collect the distinct greyish colors found in the four corner regions.
///
/// Each region is at most `corner_size` pixels along an axis and never more
/// than a quarter of the image on that axis. Images under 4 pixels on either
/// axis sample nothing.
#[must_use]
pub fn sample_checkerboard_colors(img: &RgbaImage, corner_size: u32) -> BTreeSet<Color> {
    let (width, height) = img.dimensions();
    let sample_w = corner_size.min(width / 4);
    let sample_h = corner_size.min(height / 4);

    let mut colors = BTreeSet::new();
    if sample_w == 0 || sample_h == 0 {
        return colors;
    }

    let xs = [0, width - sample_w];
    let ys = [0, height - sample_h];

    for &y0 in &ys {
        for &x0 in &xs {
            for y in y0..y0 + sample_h {
                for x in x0..x0 + sample_w {
                    let color = Color::from(img.get_pixel(x, y));
                    if color.is_greyish() {
                        colors.insert(color);
                    }
                }
            }
        }
    }

    colors
}

/// The set of colors treated as checkerboard background for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: BTreeSet<Color>,
    fallback: bool,
}

impl Palette {
    /// Learn the palette from the image corners, falling back to
    /// [`FALLBACK_COLORS`] when no greyish corner pixel exists.
    #[must_use]
    pub fn sample(img: &RgbaImage, corner_size: u32) -> Self {
        let colors = sample_checkerboard_colors(img, corner_size);
        if colors.is_empty() {
            Self::fallback()
        } else {
            Self {
                colors,
                fallback: false,
            }
        }
    }

    /// The fixed set of four common checkerboard greys.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            colors: FALLBACK_COLORS.into_iter().collect(),
            fallback: true,
        }
    }

    /// Build a palette from explicit colors.
    pub fn from_colors<I: IntoIterator<Item = Color>>(colors: I) -> Self {
        Self {
            colors: colors.into_iter().collect(),
            fallback: false,
        }
    }

    /// True if any palette color lies within `max_dist` of `color`.
    #[must_use]
    pub fn matches(&self, color: Color, max_dist: f64) -> bool {
        self.colors.iter().any(|&c| color.distance(c) <= max_dist)
    }

    /// Whether the palette is the built-in fallback rather than a sample.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Iterate the colors in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }

    /// Number of distinct colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True when the palette holds no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn filled(width: u32, height: u32, px: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(px))
    }

    #[test]
    fn grey_corners_with_red_center_yield_single_color() {
        let mut img = filled(100, 100, [128, 128, 128, 255]);
        // Center block lies outside every 20x20 corner region
        for y in 30..70 {
            for x in 30..70 {
                img.put_pixel(x, y, Rgba([255, 0, 0, 255]));
            }
        }

        let colors = sample_checkerboard_colors(&img, DEFAULT_CORNER_SIZE);
        assert_eq!(colors.into_iter().collect::<Vec<_>>(), vec![Color::new(128, 128, 128)]);
    }

    #[test]
    fn both_checkerboard_tones_are_collected() {
        let img = RgbaImage::from_fn(64, 64, |x, y| {
            if (x / 8 + y / 8) % 2 == 0 {
                Rgba([204, 204, 204, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        });

        let colors = sample_checkerboard_colors(&img, DEFAULT_CORNER_SIZE);
        assert_eq!(colors.len(), 2);
        assert!(colors.contains(&Color::new(204, 204, 204)));
        assert!(colors.contains(&Color::new(255, 255, 255)));
    }

    #[test]
    fn each_corner_is_sampled() {
        let mut img = filled(40, 40, [255, 0, 0, 255]);
        img.put_pixel(0, 0, Rgba([10, 10, 10, 255]));
        img.put_pixel(39, 0, Rgba([20, 20, 20, 255]));
        img.put_pixel(0, 39, Rgba([30, 30, 30, 255]));
        img.put_pixel(39, 39, Rgba([40, 40, 40, 255]));

        let colors = sample_checkerboard_colors(&img, DEFAULT_CORNER_SIZE);
        assert_eq!(colors.len(), 4);
    }

    #[test]
    fn region_is_clamped_to_quarter_of_image() {
        // 40px wide: region is 10px, so x = 15 is never sampled
        let mut img = filled(40, 40, [255, 0, 0, 255]);
        img.put_pixel(15, 0, Rgba([90, 90, 90, 255]));
        assert!(sample_checkerboard_colors(&img, DEFAULT_CORNER_SIZE).is_empty());

        img.put_pixel(9, 9, Rgba([90, 90, 90, 255]));
        assert_eq!(sample_checkerboard_colors(&img, DEFAULT_CORNER_SIZE).len(), 1);
    }

    #[test]
    fn tiny_images_sample_nothing() {
        let img = filled(3, 100, [128, 128, 128, 255]);
        assert!(sample_checkerboard_colors(&img, DEFAULT_CORNER_SIZE).is_empty());
        assert!(Palette::sample(&img, DEFAULT_CORNER_SIZE).is_fallback());
    }

    #[test]
    fn zero_corner_size_samples_nothing() {
        let img = filled(100, 100, [128, 128, 128, 255]);
        assert!(sample_checkerboard_colors(&img, 0).is_empty());
    }

    #[test]
    fn saturated_corners_activate_fallback() {
        let img = filled(100, 100, [255, 0, 0, 255]);
        assert!(sample_checkerboard_colors(&img, DEFAULT_CORNER_SIZE).is_empty());

        let palette = Palette::sample(&img, DEFAULT_CORNER_SIZE);
        assert!(palette.is_fallback());
        assert_eq!(palette.len(), 4);
        for c in FALLBACK_COLORS {
            assert!(palette.iter().any(|&p| p == c));
        }
    }

    #[test]
    fn sampled_palette_is_not_fallback() {
        let img = filled(100, 100, [200, 200, 200, 255]);
        let palette = Palette::sample(&img, DEFAULT_CORNER_SIZE);
        assert!(!palette.is_fallback());
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn matches_uses_inclusive_distance() {
        let palette = Palette::from_colors([Color::new(100, 100, 100)]);
        // distance exactly 40
        assert!(palette.matches(Color::new(140, 100, 100), 40.0));
        assert!(!palette.matches(Color::new(141, 100, 100), 40.0));
    }
}
