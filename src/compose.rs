use image::{imageops, Rgba, RgbaImage};
use tracing::debug;

use crate::encode::{QrMatrix, QrSettings, DARK};
use crate::error::{ComposeError, ComposeResult};
use crate::font::LabelFont;
use crate::validate::{validate_label, validate_url};

pub const LOGO_MAX: u32 = 120;

// Caption style
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptionStyle {
    /// Pixel height requested from the font.
    pub px: f32,
    /// Gap between the bottom of the text and the bottom edge.
    pub margin: u32,
    pub color: Rgba<u8>,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self { px: 18.0, margin: 10, color: DARK }
    }
}

// Composer
//------------------------------------------------------------------------------

/// Turns a link and a label into the finished QR image. Holds the logo and
/// font loaded at startup so every generation reuses them.
pub struct Composer {
    settings: QrSettings,
    caption: CaptionStyle,
    logo: Option<RgbaImage>,
    font: LabelFont,
}

impl Composer {
    pub fn new(settings: QrSettings, caption: CaptionStyle, font: LabelFont) -> Self {
        Self { settings, caption, logo: None, font }
    }

    /// Logo is expected to already fit the logo box, see [`crate::resource::load_logo`].
    pub fn with_logo(mut self, logo: RgbaImage) -> Self {
        self.logo = Some(logo);
        self
    }

    pub fn has_logo(&self) -> bool {
        self.logo.is_some()
    }

    pub fn generate(&self, url: &str, label: &str) -> ComposeResult<RgbaImage> {
        if !validate_url(url) {
            return Err(ComposeError::InvalidUrl);
        }
        if !validate_label(label) {
            return Err(ComposeError::EmptyLabel);
        }

        let qr = QrMatrix::encode(url, &self.settings)?;
        debug!("Rendering version {} matrix, {} dark modules...", qr.version(), qr.count_dark_modules());
        let mut img = qr.render(self.settings.box_size, self.settings.border);

        if let Some(logo) = &self.logo {
            debug!("Overlaying {}x{} logo...", logo.width(), logo.height());
            overlay_centered(&mut img, logo);
        }

        debug!("Drawing caption {label:?}...");
        self.draw_caption(&mut img, label);

        Ok(img)
    }

    fn draw_caption(&self, img: &mut RgbaImage, label: &str) {
        let (w, h) = img.dimensions();
        let (tw, _) = self.font.text_size(label);
        let x = (w as i32 - tw as i32) / 2;
        let y = h as i32 - self.font.ink_bottom(label) - self.caption.margin as i32;
        self.font.draw(img, self.caption.color, x, y, label);
    }
}

/// Alpha-blends `top` over the center of `base`.
fn overlay_centered(base: &mut RgbaImage, top: &RgbaImage) {
    let x = (base.width() as i64 - top.width() as i64) / 2;
    let y = (base.height() as i64 - top.height() as i64) / 2;
    imageops::overlay(base, top, x, y);
}
