use image::{Rgba, RgbaImage};
use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode, Version};
use tracing::debug;

use crate::error::ComposeResult;

pub(crate) const DARK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub(crate) const LIGHT: Rgba<u8> = Rgba([255, 255, 255, 255]);

const MAX_VERSION: i16 = 40;

// Settings
//------------------------------------------------------------------------------

/// How the symbol version is chosen for the encoded data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionPolicy {
    /// Always use the configured version. Data that does not fit is an error.
    #[default]
    Fixed,
    /// Start at the configured version and grow until the data fits.
    Fit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrSettings {
    pub version: i16,
    pub ec_level: EcLevel,
    pub box_size: u32,
    pub border: u32,
    pub policy: VersionPolicy,
}

impl Default for QrSettings {
    fn default() -> Self {
        Self { version: 4, ec_level: EcLevel::H, box_size: 10, border: 4, policy: VersionPolicy::Fixed }
    }
}

// QR matrix
//------------------------------------------------------------------------------

/// Module grid produced by the encoder. Immutable once built.
pub struct QrMatrix {
    code: QrCode,
}

impl QrMatrix {
    pub fn encode(data: &str, settings: &QrSettings) -> ComposeResult<Self> {
        debug!(
            "Encoding {} bytes at version {} ({:?}, {:?})...",
            data.len(),
            settings.version,
            settings.ec_level,
            settings.policy
        );
        let code = match settings.policy {
            VersionPolicy::Fixed => {
                QrCode::with_version(data, Version::Normal(settings.version), settings.ec_level)?
            }
            VersionPolicy::Fit => Self::encode_fit(data, settings)?,
        };
        Ok(Self { code })
    }

    fn encode_fit(data: &str, settings: &QrSettings) -> Result<QrCode, QrError> {
        for v in settings.version..=MAX_VERSION {
            match QrCode::with_version(data, Version::Normal(v), settings.ec_level) {
                Err(QrError::DataTooLong) => continue,
                res => return res,
            }
        }
        Err(QrError::DataTooLong)
    }

    pub fn version(&self) -> i16 {
        match self.code.version() {
            Version::Normal(v) | Version::Micro(v) => v,
        }
    }

    /// Width in modules, quiet zone excluded.
    pub fn width(&self) -> usize {
        self.code.width()
    }

    pub fn is_dark(&self, r: usize, c: usize) -> bool {
        self.code[(c, r)] == Color::Dark
    }

    pub fn count_dark_modules(&self) -> usize {
        self.code.to_colors().iter().filter(|&&c| c == Color::Dark).count()
    }
}

// Render
//------------------------------------------------------------------------------

impl QrMatrix {
    /// Rasterizes the grid black on white, `box_size` pixels per module and
    /// `border` light modules of quiet zone on every side.
    pub fn render(&self, box_size: u32, border: u32) -> RgbaImage {
        let qz_sz = border * box_size;
        let qr_sz = self.width() as u32 * box_size;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = RgbaImage::from_pixel(total_sz, total_sz, LIGHT);
        for i in qz_sz..qz_sz + qr_sz {
            for j in qz_sz..qz_sz + qr_sz {
                let r = ((i - qz_sz) / box_size) as usize;
                let c = ((j - qz_sz) / box_size) as usize;
                if self.is_dark(r, c) {
                    canvas.put_pixel(j, i, DARK);
                }
            }
        }

        canvas
    }
}
