//! 1-bpp bitmap blitting with layering modes
//!
//! Source bitmaps are row-major, `width / 8` bytes per row. The controller
//! RAM is column-major within a page, so every source bit is written on its
//! own into the destination strip byte.
//!
//! ## Placement
//!
//! Byte `b` of a row (out of `n = width / 8`) lands `8 * (n - b)` columns to
//! the right of `x`, and bit `p` of that byte (bit 0 first) lands `p`
//! columns further. The first byte of a row is therefore drawn rightmost and
//! the whole image covers columns `x + 8 ..= x + width + 7`. Assets drawn for
//! this driver are prepared in that order, so it is kept bit-exact.
//!
//! ## Example
//!
//! ```
//! use ssd1306::{Bitmap, BlendMode, Dimensions, Framebuffer};
//!
//! const ARROW: [u8; 8] = [0x10, 0x30, 0x7F, 0xFF, 0x7F, 0x30, 0x10, 0x00];
//!
//! let mut fb = Framebuffer::new(Dimensions::W128_H64, [0u8; 1024]).unwrap();
//! let arrow = Bitmap::new(&ARROW, 8, 8).unwrap();
//! fb.draw_image(0, 0, &arrow, BlendMode::Overlay);
//! ```

use crate::color::Color;
use crate::error::BitmapError;
use crate::framebuffer::Framebuffer;

/// How source bits combine with what is already in the framebuffer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    /// Destination takes the source bit
    #[default]
    Overwrite,
    /// Destination takes the inverted source bit
    Inverted,
    /// Source 0 clears, source 1 keeps (AND)
    Mask,
    /// Source 1 sets, source 0 keeps (OR)
    Overlay,
    /// Source 0 sets, source 1 keeps
    InvertedOverlay,
    /// Source 1 clears, source 0 keeps
    InvertedMask,
}

impl BlendMode {
    /// New state of a destination pixel, `None` to leave it alone
    fn apply(self, source: bool) -> Option<Color> {
        match (self, source) {
            (BlendMode::Overwrite, bit) => Some(Color::from(bit)),
            (BlendMode::Inverted, bit) => Some(Color::from(!bit)),
            (BlendMode::Mask, false) => Some(Color::Off),
            (BlendMode::Overlay, true) => Some(Color::On),
            (BlendMode::InvertedOverlay, false) => Some(Color::On),
            (BlendMode::InvertedMask, true) => Some(Color::Off),
            _ => None,
        }
    }
}

/// Raw mode numbers 0..=5
impl TryFrom<u8> for BlendMode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => BlendMode::Overwrite,
            1 => BlendMode::Inverted,
            2 => BlendMode::Mask,
            3 => BlendMode::Overlay,
            4 => BlendMode::InvertedOverlay,
            5 => BlendMode::InvertedMask,
            other => return Err(other),
        })
    }
}

/// Borrowed 1-bpp image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bitmap<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> Bitmap<'a> {
    /// Wrap `data` as a `width` x `height` bitmap
    ///
    /// # Errors
    ///
    /// Returns `BitmapError::UnalignedWidth` if `width` is not a multiple of
    /// 8 and `BitmapError::DataTooShort` if `data` does not cover every row.
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Result<Self, BitmapError> {
        if width % 8 != 0 {
            return Err(BitmapError::UnalignedWidth(width));
        }
        let required = (width / 8) as usize * height as usize;
        if data.len() < required {
            return Err(BitmapError::DataTooShort {
                required,
                provided: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Width in pixels, a multiple of 8
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes of one source row
    fn row(&self, line: u32) -> &'a [u8] {
        let stride = (self.width / 8) as usize;
        let start = line as usize * stride;
        &self.data[start..start + stride]
    }
}

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Blit `bitmap` at `(x, y)` using `mode`
    ///
    /// Rows past the bottom edge end the blit. Within each source byte, bits
    /// are dropped from the first one that lands past the right edge.
    pub fn draw_image(&mut self, x: i32, y: i32, bitmap: &Bitmap<'_>, mode: BlendMode) {
        let bytes_per_row = (bitmap.width / 8) as i32;

        for line in 0..bitmap.height {
            let y_abs = y.saturating_add(line as i32);
            if y_abs >= self.height() {
                break;
            }
            if y_abs < 0 {
                continue;
            }

            for (byte, &input) in bitmap.row(line).iter().enumerate() {
                let group_x = x.saturating_add(8 * (bytes_per_row - byte as i32));
                for bit in 0..8 {
                    let x_abs = group_x.saturating_add(bit);
                    if x_abs >= self.width() {
                        break;
                    }
                    if x_abs < 0 {
                        continue;
                    }
                    if let Some(color) = mode.apply(input & (1 << bit) != 0) {
                        self.set_pixel(x_abs, y_abs, color);
                    }
                }
            }
        }
    }
}
