//! 8x8 bitmap text
//!
//! Glyphs are 8 rows of one byte each, most significant bit leftmost. Text is
//! opaque: clear glyph bits paint the inverse color, so strings can be
//! redrawn over old content without clearing first.

use font8x8::legacy::{BASIC_LEGACY, LATIN_LEGACY};

use crate::color::Color;
use crate::framebuffer::Framebuffer;

/// Glyph cell size in pixels at scale 1
pub const GLYPH_SIZE: i32 = 8;

/// Integer up-scaling of glyphs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontScale {
    /// 8x8 cells
    #[default]
    X1 = 1,
    /// 16x16 cells
    X2 = 2,
    /// 32x32 cells
    X4 = 4,
    /// 64x64 cells
    X8 = 8,
}

impl FontScale {
    /// Pixels per glyph bit along each axis
    pub fn factor(self) -> i32 {
        self as i32
    }

    /// Horizontal advance per character
    pub fn advance(self) -> i32 {
        GLYPH_SIZE * self.factor()
    }
}

/// Source of 8x8 glyphs indexed by character code
pub trait Font {
    /// Rows of the glyph for `code`, top first, MSB leftmost
    fn glyph(&self, code: u8) -> [u8; 8];
}

/// Built-in font
///
/// Codes 0x00..=0x7F are ASCII, 0xA0..=0xFF are Latin-1; the control range
/// 0x80..=0x9F renders blank.
#[derive(Clone, Copy, Debug, Default)]
pub struct Font8x8;

impl Font for Font8x8 {
    fn glyph(&self, code: u8) -> [u8; 8] {
        // font8x8 stores bit 0 as the leftmost pixel
        let source = match code {
            0x00..=0x7F => BASIC_LEGACY[code as usize],
            0xA0..=0xFF => LATIN_LEGACY[(code - 0xA0) as usize],
            _ => [0; 8],
        };
        source.map(u8::reverse_bits)
    }
}

/// Font table supplied by the caller, 8 bytes per glyph starting at code 0
///
/// Codes past the end of the table render blank.
#[derive(Clone, Copy, Debug)]
pub struct RawFont<'a> {
    data: &'a [u8],
}

impl<'a> RawFont<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }
}

impl Font for RawFont<'_> {
    fn glyph(&self, code: u8) -> [u8; 8] {
        let start = code as usize * 8;
        self.data
            .get(start..start + 8)
            .and_then(|rows| rows.try_into().ok())
            .unwrap_or([0; 8])
    }
}

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Draw one glyph of `font` with its top-left corner at `(x, y)`
    pub fn draw_glyph<F: Font + ?Sized>(
        &mut self,
        font: &F,
        x: i32,
        y: i32,
        code: u8,
        color: Color,
        scale: FontScale,
    ) {
        let factor = scale.factor();
        for (row, bits) in (0..).zip(font.glyph(code)) {
            for col in 0..GLYPH_SIZE {
                let pixel = if bits & (0x80 >> col) != 0 {
                    color
                } else {
                    color.invert()
                };
                let px = x.saturating_add(col * factor);
                let py = y.saturating_add(row * factor);
                for k in 0..factor {
                    for l in 0..factor {
                        self.set_pixel(px.saturating_add(k), py.saturating_add(l), pixel);
                    }
                }
            }
        }
    }

    /// Draw `text` left to right on one line
    ///
    /// Characters up to U+00FF use their Latin-1 code; anything above draws
    /// as `?`. Each character advances the cursor by `8 * scale`. Once the cursor
    /// passes the last position where a whole glyph fits, the remaining
    /// characters are dropped; there is no wrapping. The first character is
    /// always drawn, clipped if needed.
    pub fn draw_text<F: Font + ?Sized>(
        &mut self,
        font: &F,
        x: i32,
        y: i32,
        text: &str,
        color: Color,
        scale: FontScale,
    ) {
        let last_fit = self.width() - scale.advance();
        let mut cursor = x;
        for ch in text.chars() {
            let code = u8::try_from(ch).unwrap_or(b'?');
            self.draw_glyph(font, cursor, y, code, color, scale);
            cursor = cursor.saturating_add(scale.advance());
            if cursor > last_fit {
                break;
            }
        }
    }

    /// Draw one character of the built-in font
    pub fn draw_char(&mut self, x: i32, y: i32, code: u8, color: Color) {
        self.draw_glyph(&Font8x8, x, y, code, color, FontScale::X1);
    }

    /// Draw one scaled character of the built-in font
    pub fn draw_char_scaled(&mut self, x: i32, y: i32, code: u8, color: Color, scale: FontScale) {
        self.draw_glyph(&Font8x8, x, y, code, color, scale);
    }

    /// Draw a string in the built-in font
    pub fn draw_str(&mut self, x: i32, y: i32, text: &str, color: Color) {
        self.draw_text(&Font8x8, x, y, text, color, FontScale::X1);
    }

    /// Draw a scaled string in the built-in font
    pub fn draw_str_scaled(&mut self, x: i32, y: i32, text: &str, color: Color, scale: FontScale) {
        self.draw_text(&Font8x8, x, y, text, color, scale);
    }
}
