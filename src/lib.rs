//! Restore real transparency to logos with a baked-in checkerboard background.
//!
//! Some export and screenshot pipelines flatten a transparent background into
//! the grey checkerboard that editors draw behind transparent pixels. This
//! crate samples the image corners to learn the checkerboard tones, turns every
//! pixel close to one of them into fully transparent black, and crops the result
//! to the bounding box of whatever is left.
//!
//! # Quick Start
//!
//! ```no_run
//! use checkerboard_alpha::{RestoreOptions, TransparencyRestorer};
//!
//! let restorer = TransparencyRestorer::new(RestoreOptions::default());
//! let report = restorer
//!     .process_file("assets/logo.png".as_ref(), "assets/logo.png".as_ref())
//!     .expect("failed to restore logo");
//! println!("Saved: {}", report.output.display());
//! ```
//!
//! # In memory
//!
//! ```
//! use checkerboard_alpha::{TransparencyRestorer, image::{Rgba, RgbaImage}};
//!
//! let mut img = RgbaImage::from_pixel(64, 64, Rgba([204, 204, 204, 255]));
//! img.put_pixel(32, 32, Rgba([255, 0, 0, 255]));
//!
//! let restored = TransparencyRestorer::default().restore(&img);
//! assert_eq!(restored.image.dimensions(), (1, 1));
//! ```

#![deny(missing_docs)]

pub mod color;
pub mod crop;
mod engine;
pub mod error;
pub mod sampling;
pub mod transparency;

pub use image;

pub use color::Color;
pub use crop::Bounds;
pub use engine::{
    save_png, ProcessReport, RestoreOptions, Restored, TransparencyRestorer, DEFAULT_INPUT,
};
pub use error::{Error, Result};
pub use sampling::{Palette, DEFAULT_CORNER_SIZE, FALLBACK_COLORS};
pub use transparency::DEFAULT_MAX_DIST;
