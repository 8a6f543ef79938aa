//! End-to-end restoration pipeline: load, sample, rewrite, crop, save.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, ImageFormat, RgbaImage};

use crate::crop::{self, Bounds};
use crate::error::{Error, Result};
use crate::sampling::{Palette, DEFAULT_CORNER_SIZE};
use crate::transparency::{self, DEFAULT_MAX_DIST};

/// Input path used when none is given; the output defaults to the same file.
pub const DEFAULT_INPUT: &str = "assets/logo.png";

/// Tuning parameters for checkerboard removal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestoreOptions {
    /// Edge length of each corner sample region, in pixels.
    pub corner_size: u32,
    /// Maximum RGB distance at which a pixel matches a checkerboard color.
    pub max_dist: f64,
}

impl Default for RestoreOptions {
    fn default() -> Self {
        Self {
            corner_size: DEFAULT_CORNER_SIZE,
            max_dist: DEFAULT_MAX_DIST,
        }
    }
}

/// Output of an in-memory restoration.
#[derive(Debug, Clone)]
pub struct Restored {
    /// The transparent, cropped image.
    pub image: RgbaImage,
    /// Colors that were treated as checkerboard.
    pub palette: Palette,
    /// Content bounds the image was cropped to, or `None` if nothing remained.
    pub bounds: Option<Bounds>,
}

/// Summary of processing a single image file.
#[derive(Debug, Clone)]
pub struct ProcessReport {
    /// File that was read.
    pub input: PathBuf,
    /// File that was written.
    pub output: PathBuf,
    /// Dimensions of the decoded input.
    pub original_size: (u32, u32),
    /// Dimensions of the written output.
    pub final_size: (u32, u32),
    /// Number of checkerboard colors matched against.
    pub palette_len: usize,
    /// Whether the fallback greys were used.
    pub used_fallback: bool,
    /// Crop rectangle, if any content survived.
    pub bounds: Option<Bounds>,
}

/// Turns baked-in checkerboard backgrounds into real transparency.
///
/// Holds only its options, so it is cheap to create and reuse.
#[derive(Debug, Clone, Default)]
pub struct TransparencyRestorer {
    options: RestoreOptions,
}

impl TransparencyRestorer {
    /// Create a restorer with the given options.
    #[must_use]
    pub fn new(options: RestoreOptions) -> Self {
        Self { options }
    }

    /// The options this restorer runs with.
    #[must_use]
    pub fn options(&self) -> &RestoreOptions {
        &self.options
    }

    /// Learn the checkerboard palette of `image`.
    #[must_use]
    pub fn palette(&self, image: &RgbaImage) -> Palette {
        Palette::sample(image, self.options.corner_size)
    }

    /// Run the full transform in memory.
    ///
    /// Never fails: an image that turns fully transparent is returned
    /// uncropped with `bounds == None`.
    #[must_use]
    pub fn restore(&self, image: &RgbaImage) -> Restored {
        let palette = self.palette(image);
        let rewritten = transparency::make_transparent(image, &palette, self.options.max_dist);
        let bounds = crop::content_bounds(&rewritten);

        Restored {
            image: crop::crop_to_content(rewritten),
            palette,
            bounds,
        }
    }

    /// Process a single image file: load, restore, save as PNG.
    ///
    /// `input` and `output` may be the same path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputNotFound`] if `input` does not exist, and
    /// propagates decode, encode, and I/O failures.
    pub fn process_file(&self, input: &Path, output: &Path) -> Result<ProcessReport> {
        if !input.exists() {
            return Err(Error::InputNotFound(input.to_path_buf()));
        }

        let rgba = image::open(input)?.to_rgba8();
        let original_size = rgba.dimensions();

        let restored = self.restore(&rgba);
        save_png(&restored.image, output)?;

        Ok(ProcessReport {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            original_size,
            final_size: restored.image.dimensions(),
            palette_len: restored.palette.len(),
            used_fallback: restored.palette.is_fallback(),
            bounds: restored.bounds,
        })
    }
}

/// Save an RGBA image as a maximally compressed PNG.
///
/// Parent directories are created as needed. A path without an extension is
/// written as PNG all the same.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] if the extension names another
/// format, or an error if encoding or writing fails.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(ext) = path.extension() {
        if ImageFormat::from_extension(ext) != Some(ImageFormat::Png) {
            return Err(Error::UnsupportedFormat(ext.to_string_lossy().into_owned()));
        }
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = BufWriter::new(File::create(path)?);
    let encoder =
        PngEncoder::new_with_quality(&mut writer, CompressionType::Best, FilterType::Adaptive);
    encoder.write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::Rgba8,
    )?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn default_options() {
        let opts = RestoreOptions::default();
        assert_eq!(opts.corner_size, 20);
        assert!((opts.max_dist - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn restore_crops_logo_out_of_checkerboard() {
        let mut img = RgbaImage::from_fn(120, 80, |x, y| {
            if (x / 10 + y / 10) % 2 == 0 {
                Rgba([204, 204, 204, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        });
        for y in 30..50 {
            for x in 45..75 {
                img.put_pixel(x, y, Rgba([20, 90, 200, 255]));
            }
        }

        let restored = TransparencyRestorer::default().restore(&img);

        assert!(!restored.palette.is_fallback());
        assert_eq!(restored.palette.len(), 2);
        assert_eq!(restored.image.dimensions(), (30, 20));
        assert!(restored
            .image
            .pixels()
            .all(|px| *px == Rgba([20, 90, 200, 255])));
    }

    #[test]
    fn restore_leaves_fully_transparent_result_uncropped() {
        let img = RgbaImage::from_pixel(50, 40, Rgba([200, 200, 200, 255]));
        let restored = TransparencyRestorer::default().restore(&img);

        assert!(restored.bounds.is_none());
        assert_eq!(restored.image.dimensions(), (50, 40));
        assert!(restored.image.pixels().all(|px| px[3] == 0));
    }

    #[test]
    fn restore_uses_fallback_for_saturated_corners() {
        let mut img = RgbaImage::from_pixel(60, 60, Rgba([255, 0, 0, 255]));
        img.put_pixel(30, 30, Rgba([192, 192, 192, 255]));

        let restored = TransparencyRestorer::default().restore(&img);

        assert!(restored.palette.is_fallback());
        // the grey pixel is cleared, the red field stays and bounds cover it all
        assert_eq!(restored.image.dimensions(), (60, 60));
        assert_eq!(*restored.image.get_pixel(30, 30), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn save_png_rejects_other_formats() {
        let img = RgbaImage::new(2, 2);
        let path = std::env::temp_dir().join("checkerboard_alpha_reject.jpg");
        let err = save_png(&img, &path).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(ref e) if e == "jpg"));
        assert!(!path.exists());
    }
}
