//! # qr-composer
//!
//! Turns a link and a label into a branded QR code image: the link is encoded at
//! version 4 with the highest error correction level, a logo is placed in the
//! center and the label is drawn as a caption under the code. The result is
//! saved as `<label>.png` in a folder picked by the user.
//!
//! ## Quick Start
//!
//! ```rust
//! use qr_composer::{CaptionStyle, Composer, LabelFont, QrSettings};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let composer = Composer::new(
//!     QrSettings::default(),
//!     CaptionStyle::default(),
//!     LabelFont::bitmap_for(18.0),
//! );
//! let img = composer.generate("https://example.com", "MyQR")?;
//! assert_eq!(img.dimensions(), (410, 410));
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline
//!
//! 1. [`validate`]: the link must look like a URL, the label must not be empty.
//! 2. [`encode`]: the link becomes a module grid, rasterized black on white at
//!    10 px per module with a 4 module quiet zone.
//! 3. [`compose`]: the logo (shrunk to fit 120 x 120) is alpha-blended over the
//!    center and the caption is drawn 10 px above the bottom edge.
//! 4. [`save`]: the image is written as PNG.
//!
//! [`app::App`] ties the steps to a [`dialogs::Dialogs`] implementation that asks
//! for the output folder and reports success or failure.
//!
//! ## Version
//!
//! The version is fixed at 4 by default, which holds at most 34 bytes at error
//! correction level H. Longer links fail with [`ComposeError::Encoding`] unless
//! [`VersionPolicy::Fit`] is selected.

pub mod app;
pub mod cli;
pub mod compose;
pub mod dialogs;
pub mod encode;
pub mod error;
pub mod font;
pub mod resource;
pub mod save;
pub mod validate;

pub use compose::{CaptionStyle, Composer};
pub use encode::{QrMatrix, QrSettings, VersionPolicy};
pub use error::{ComposeError, ComposeResult};
pub use font::LabelFont;
pub use save::save_png;
pub use validate::{validate_label, validate_url};
