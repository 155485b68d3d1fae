//! Page-packed framebuffer and pixel accessor
//!
//! The controller's graphic RAM is organised in pages of 8 rows. Within a
//! page each column is one byte, bit 0 being the top row of the page:
//!
//! ```text
//!            col 0   col 1   ...   col W-1
//! page 0   [byte 0][byte 1]  ...  [byte W-1]      rows 0..8
//! page 1   [byte W][ ... ]   ...  [byte 2W-1]     rows 8..16
//! ```
//!
//! So pixel `(x, y)` lives in byte `x + W * (y / 8)`, bit `y & 7`. The buffer
//! is sent to the panel unchanged, in this order.
//!
//! All writes clip: coordinates outside the panel are ignored.

use crate::color::Color;
use crate::config::Dimensions;
use crate::error::BuilderError;

/// Framebuffer over caller-provided storage
///
/// `B` is any byte storage, typically a `[u8; N]` array with static or stack
/// lifetime, so the driver never allocates.
///
/// ## Example
///
/// ```
/// use ssd1306::{Color, Dimensions, Framebuffer};
///
/// let mut fb = Framebuffer::new(Dimensions::W128_H64, [0u8; 1024]).unwrap();
/// fb.set_pixel(3, 10, Color::On);
/// assert_eq!(fb.as_bytes()[3 + 128], 0b0000_0100);
/// ```
pub struct Framebuffer<B> {
    dimensions: Dimensions,
    buffer: B,
}

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Wrap `buffer` as a framebuffer of the given dimensions
    ///
    /// Bytes past `dimensions.buffer_size()` are left alone. Existing
    /// content is kept; call [`clear`](Self::clear) before first use.
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::BufferTooSmall` if the buffer is too short.
    pub fn new(dimensions: Dimensions, buffer: B) -> Result<Self, BuilderError> {
        let required = dimensions.buffer_size();
        let provided = buffer.as_ref().len();
        if provided < required {
            return Err(BuilderError::BufferTooSmall { required, provided });
        }
        Ok(Self { dimensions, buffer })
    }

    /// Panel dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Width in pixels
    pub fn width(&self) -> i32 {
        self.dimensions.width as i32
    }

    /// Height in pixels
    pub fn height(&self) -> i32 {
        self.dimensions.height as i32
    }

    /// Frame bytes in transfer order
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer.as_ref()[..self.dimensions.buffer_size()]
    }

    /// Mutable frame bytes, for callers that render strip bytes directly
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let len = self.dimensions.buffer_size();
        &mut self.buffer.as_mut()[..len]
    }

    /// Give back the storage
    pub fn release(self) -> B {
        self.buffer
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Color) {
        self.as_bytes_mut().fill(color.fill_byte());
    }

    /// Clear the frame to dark
    pub fn clear(&mut self) {
        self.fill(Color::Off);
    }

    /// Byte index and bit mask of an on-panel pixel
    #[inline]
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        let index = x as usize + self.dimensions.width as usize * (y as usize / 8);
        Some((index, 1 << (y & 7)))
    }

    /// Set or clear one pixel
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let Some((index, mask)) = self.locate(x, y) else {
            return;
        };
        let byte = &mut self.buffer.as_mut()[index];
        match color {
            Color::On => *byte |= mask,
            Color::Off => *byte &= !mask,
        }
    }

    /// Flip one pixel
    pub fn toggle_pixel(&mut self, x: i32, y: i32) {
        if let Some((index, mask)) = self.locate(x, y) {
            self.buffer.as_mut()[index] ^= mask;
        }
    }

    /// Read one pixel, `None` off-panel
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.locate(x, y)
            .map(|(index, mask)| Color::from(self.buffer.as_ref()[index] & mask != 0))
    }
}
