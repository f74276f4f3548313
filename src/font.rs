use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::{point, Font, FontVec, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use tracing::{debug, warn};

// Caption font
//------------------------------------------------------------------------------

/// Font used to draw the caption under the QR code.
pub enum LabelFont {
    /// TrueType/OpenType font rendered at `scale` pixels.
    Scalable { font: FontVec, scale: PxScale },
    /// Built-in 5x7 bitmap font, every dot drawn as a `scale` x `scale` square.
    Bitmap { scale: u32 },
}

impl LabelFont {
    /// Returns the first candidate that parses as a font, else the bitmap font.
    pub fn load(candidates: &[PathBuf], px: f32) -> Self {
        for path in candidates {
            if let Some(font) = Self::from_file(path, px) {
                debug!("Using caption font {}", path.display());
                return font;
            }
        }
        debug!("No scalable font found, using the built-in bitmap font");
        Self::bitmap_for(px)
    }

    pub fn from_file(path: &Path, px: f32) -> Option<Self> {
        let data = fs::read(path).ok()?;
        let font = Self::from_bytes(data, px);
        if font.is_none() {
            warn!("Skipping unreadable font {}", path.display());
        }
        font
    }

    pub fn from_bytes(data: Vec<u8>, px: f32) -> Option<Self> {
        let font = FontVec::try_from_vec(data).ok()?;
        Some(Self::Scalable { font, scale: PxScale::from(px) })
    }

    /// Bitmap font scaled to the nearest whole multiple of its 7 px height.
    pub fn bitmap_for(px: f32) -> Self {
        let scale = (px / GLYPH_H as f32).round().max(1.0) as u32;
        Self::Bitmap { scale }
    }

    /// Width and height in pixels of `text` drawn with this font.
    pub fn text_size(&self, text: &str) -> (u32, u32) {
        match self {
            Self::Scalable { font, scale } => text_size(*scale, font, text),
            Self::Bitmap { scale } => {
                let n = text.chars().count() as u32;
                if n == 0 {
                    return (0, 0);
                }
                ((n * GLYPH_ADVANCE - 1) * scale, GLYPH_H * scale)
            }
        }
    }

    /// Offset from the `y` passed to [`LabelFont::draw`] to one past the lowest
    /// row the text can ink.
    pub fn ink_bottom(&self, text: &str) -> i32 {
        match self {
            Self::Scalable { font, scale } => scalable_ink_bottom(font, *scale, text),
            Self::Bitmap { scale } if !text.is_empty() => (GLYPH_H * scale) as i32,
            Self::Bitmap { .. } => 0,
        }
    }

    /// Draws `text` with its top-left corner at `(x, y)`. Pixels outside the
    /// image are clipped.
    pub fn draw(&self, img: &mut RgbaImage, color: Rgba<u8>, x: i32, y: i32, text: &str) {
        match self {
            Self::Scalable { font, scale } => draw_text_mut(img, color, x, y, *scale, font, text),
            Self::Bitmap { scale } => draw_bitmap_text(img, color, x, y, *scale, text),
        }
    }
}

// Glyphs hang from the ascent line, so descenders reach below the tallest
// glyph's height. Same layout as `imageproc::drawing::draw_text_mut`.
fn scalable_ink_bottom(font: &FontVec, scale: PxScale, text: &str) -> i32 {
    let scaled = font.as_scaled(scale);
    let mut x = 0.0;
    let mut bottom = 0;
    for c in text.chars() {
        let id = scaled.glyph_id(c);
        let glyph = id.with_scale_and_position(scale, point(x, scaled.ascent()));
        x += scaled.h_advance(id);
        if let Some(g) = scaled.outline_glyph(glyph) {
            bottom = bottom.max(g.px_bounds().max.y.round() as i32);
        }
    }
    bottom
}

// Bitmap font
//------------------------------------------------------------------------------

const GLYPH_W: u32 = 5;
const GLYPH_H: u32 = 7;
const GLYPH_ADVANCE: u32 = GLYPH_W + 1;

fn draw_bitmap_text(img: &mut RgbaImage, color: Rgba<u8>, x: i32, y: i32, scale: u32, text: &str) {
    let s = scale as i32;
    for (i, ch) in text.chars().enumerate() {
        let gx = x + (i as u32 * GLYPH_ADVANCE) as i32 * s;
        for (col, bits) in glyph(ch).iter().enumerate() {
            for row in 0..GLYPH_H {
                if bits >> row & 1 == 1 {
                    let rect = Rect::at(gx + col as i32 * s, y + row as i32 * s).of_size(scale, scale);
                    draw_filled_rect_mut(img, rect, color);
                }
            }
        }
    }
}

/// Column-major glyph, bit 0 is the top row. Characters outside printable
/// ASCII are drawn as `?`.
fn glyph(ch: char) -> &'static [u8; 5] {
    let idx = match ch {
        ' '..='~' => ch as usize - ' ' as usize,
        _ => '?' as usize - ' ' as usize,
    };
    &GLYPHS[idx]
}

#[rustfmt::skip]
static GLYPHS: [[u8; 5]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // !
    [0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // #
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
    [0x23, 0x13, 0x08, 0x64, 0x62], // %
    [0x36, 0x49, 0x56, 0x20, 0x50], // &
    [0x00, 0x05, 0x03, 0x00, 0x00], // '
    [0x00, 0x1C, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1C, 0x00], // )
    [0x2A, 0x1C, 0x7F, 0x1C, 0x2A], // *
    [0x08, 0x08, 0x3E, 0x08, 0x08], // +
    [0x00, 0x50, 0x30, 0x00, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x60, 0x60, 0x00, 0x00], // .
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x36, 0x36, 0x00, 0x00], // :
    [0x00, 0x56, 0x36, 0x00, 0x00], // ;
    [0x08, 0x14, 0x22, 0x41, 0x00], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x00, 0x41, 0x22, 0x14, 0x08], // >
    [0x02, 0x01, 0x51, 0x09, 0x06], // ?
    [0x32, 0x49, 0x79, 0x41, 0x3E], // @
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x09, 0x01], // F
    [0x3E, 0x41, 0x49, 0x49, 0x7A], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x46, 0x49, 0x49, 0x49, 0x31], // S
    [0x01, 0x01, 0x7F, 0x01, 0x01], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x07, 0x08, 0x70, 0x08, 0x07], // Y
    [0x61, 0x51, 0x49, 0x45, 0x43], // Z
    [0x00, 0x7F, 0x41, 0x41, 0x00], // [
    [0x02, 0x04, 0x08, 0x10, 0x20], // \
    [0x00, 0x41, 0x41, 0x7F, 0x00], // ]
    [0x04, 0x02, 0x01, 0x02, 0x04], // ^
    [0x40, 0x40, 0x40, 0x40, 0x40], // _
    [0x00, 0x01, 0x02, 0x04, 0x00], // `
    [0x20, 0x54, 0x54, 0x54, 0x78], // a
    [0x7F, 0x48, 0x44, 0x44, 0x38], // b
    [0x38, 0x44, 0x44, 0x44, 0x20], // c
    [0x38, 0x44, 0x44, 0x48, 0x7F], // d
    [0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x08, 0x7E, 0x09, 0x01, 0x02], // f
    [0x0C, 0x52, 0x52, 0x52, 0x3E], // g
    [0x7F, 0x08, 0x04, 0x04, 0x78], // h
    [0x00, 0x44, 0x7D, 0x40, 0x00], // i
    [0x20, 0x40, 0x44, 0x3D, 0x00], // j
    [0x7F, 0x10, 0x28, 0x44, 0x00], // k
    [0x00, 0x41, 0x7F, 0x40, 0x00], // l
    [0x7C, 0x04, 0x18, 0x04, 0x78], // m
    [0x7C, 0x08, 0x04, 0x04, 0x78], // n
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0x7C, 0x14, 0x14, 0x14, 0x08], // p
    [0x08, 0x14, 0x14, 0x18, 0x7C], // q
    [0x7C, 0x08, 0x04, 0x04, 0x08], // r
    [0x48, 0x54, 0x54, 0x54, 0x20], // s
    [0x04, 0x3F, 0x44, 0x40, 0x20], // t
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // u
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // v
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // w
    [0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // y
    [0x44, 0x64, 0x54, 0x4C, 0x44], // z
    [0x00, 0x08, 0x36, 0x41, 0x00], // {
    [0x00, 0x00, 0x7F, 0x00, 0x00], // |
    [0x00, 0x41, 0x36, 0x08, 0x00], // }
    [0x08, 0x04, 0x08, 0x10, 0x08], // ~
];
