//! Display with an owned framebuffer
//!
//! This module provides the [`GraphicDisplay`] struct which pairs a
//! [`Display`](crate::display::Display) with a [`Framebuffer`]. Drawing goes to
//! the framebuffer; [`GraphicDisplay::refresh`] pushes it to the panel.
//!
//! With the `graphics` feature, both [`Framebuffer`] and [`GraphicDisplay`]
//! implement the [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget)
//! trait from the embedded-graphics ecosystem.
//!
//! ## Example
//!
//! ```rust,ignore
//! use ssd1306::{Builder, Color, Dimensions, Display, GraphicDisplay, I2cInterface};
//!
//! let config = Builder::new().dimensions(Dimensions::W128_H64).build()?;
//! let display = Display::new(I2cInterface::new(i2c), config);
//! let mut oled = GraphicDisplay::new(display, [0u8; 1024])?;
//! oled.init()?;
//!
//! let fb = oled.framebuffer_mut();
//! fb.draw_str(0, 0, "Hello", Color::On);
//! fb.circle(64, 40, 12, Color::On);
//! oled.refresh()?;
//! ```

use crate::color::Color;
use crate::display::Display;
use crate::error::{BuilderError, Error};
use crate::framebuffer::Framebuffer;
use crate::interface::DisplayInterface;

/// Display with a framebuffer
///
/// ## Type Parameters
///
/// * `I` - Interface type implementing [`DisplayInterface`](crate::interface::DisplayInterface)
/// * `B` - Byte storage for the frame, at least `width * height / 8` long
pub struct GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// The underlying display driver
    display: Display<I>,
    /// Frame in controller RAM order
    framebuffer: Framebuffer<B>,
}

impl<I, B> GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a new GraphicDisplay
    ///
    /// The buffer is used as-is; [`init`](Self::init) clears it.
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::BufferTooSmall` if `buffer` cannot hold a frame
    /// of the display's dimensions.
    pub fn new(display: Display<I>, buffer: B) -> Result<Self, BuilderError> {
        let framebuffer = Framebuffer::new(*display.dimensions(), buffer)?;
        Ok(Self {
            display,
            framebuffer,
        })
    }

    /// Bring the panel up
    ///
    /// Clears the framebuffer, sends the controller's init table, then
    /// pushes the blank frame.
    pub fn init(&mut self) -> Result<(), Error<I>> {
        self.framebuffer.clear();
        self.display.init()?;
        self.refresh()?;
        log::debug!("display initialised");
        Ok(())
    }

    /// Push the framebuffer to the panel
    pub fn refresh(&mut self) -> Result<(), Error<I>> {
        self.display.write_frame(self.framebuffer.as_bytes())
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Color) {
        self.framebuffer.fill(color);
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.framebuffer.clear();
    }

    /// Get a reference to the framebuffer
    pub fn framebuffer(&self) -> &Framebuffer<B> {
        &self.framebuffer
    }

    /// Get a mutable reference to the framebuffer for drawing
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer<B> {
        &mut self.framebuffer
    }

    /// Get a reference to the underlying display
    pub fn display(&self) -> &Display<I> {
        &self.display
    }

    /// Get a mutable reference to the underlying display
    ///
    /// Used for the control commands:
    ///
    /// ```rust,ignore
    /// oled.display_mut().set_contrast(0x20)?;
    /// ```
    pub fn display_mut(&mut self) -> &mut Display<I> {
        &mut self.display
    }

    /// Give back the interface and the frame storage
    pub fn release(self) -> (I, B) {
        (self.display.release(), self.framebuffer.release())
    }
}

#[cfg(feature = "graphics")]
mod draw_target {
    use core::convert::Infallible;

    use embedded_graphics_core::{
        Pixel,
        draw_target::DrawTarget,
        geometry::{OriginDimensions, Point, Size},
        pixelcolor::BinaryColor,
    };

    use super::GraphicDisplay;
    use crate::framebuffer::Framebuffer;
    use crate::interface::DisplayInterface;

    impl<B> DrawTarget for Framebuffer<B>
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
        where
            Iter: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(Point { x, y }, color) in pixels {
                self.set_pixel(x, y, color.into());
            }
            Ok(())
        }

        fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
            self.fill(color.into());
            Ok(())
        }
    }

    impl<B> OriginDimensions for Framebuffer<B>
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        fn size(&self) -> Size {
            let dims = self.dimensions();
            Size::new(dims.width as u32, dims.height as u32)
        }
    }

    impl<I, B> DrawTarget for GraphicDisplay<I, B>
    where
        I: DisplayInterface,
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
        where
            Iter: IntoIterator<Item = Pixel<Self::Color>>,
        {
            self.framebuffer_mut().draw_iter(pixels)
        }

        fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
            self.fill(color.into());
            Ok(())
        }
    }

    impl<I, B> OriginDimensions for GraphicDisplay<I, B>
    where
        I: DisplayInterface,
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        fn size(&self) -> Size {
            self.framebuffer().size()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, Config, Dimensions};
    use crate::init::init_sequence;
    use crate::mock::{MockError, MockInterface};

    fn config() -> Config {
        Builder::new()
            .dimensions(Dimensions::W128_H64)
            .build()
            .unwrap()
    }

    fn oled(fail_at: Option<usize>) -> GraphicDisplay<MockInterface, [u8; 1024]> {
        let mock = MockInterface {
            fail_at,
            ..Default::default()
        };
        GraphicDisplay::new(Display::new(mock, config()), [0xAAu8; 1024]).unwrap()
    }

    #[test]
    fn test_new_rejects_short_buffer() {
        let display = Display::new(MockInterface::default(), config());
        let result = GraphicDisplay::new(display, [0u8; 512]);
        assert!(matches!(
            result,
            Err(BuilderError::BufferTooSmall {
                required: 1024,
                provided: 512
            })
        ));
    }

    #[test]
    fn test_init_clears_then_refreshes() {
        let mut oled = oled(None);
        oled.init().unwrap();
        assert!(oled.framebuffer().as_bytes().iter().all(|&b| b == 0));

        let (mock, _) = oled.release();
        let table = init_sequence(&config());
        let commands = mock.commands();
        assert_eq!(&commands[..table.len()], table.as_slice());
        assert_eq!(&commands[table.len()..], &[0x21, 0, 127, 0x22, 0, 7]);
        assert_eq!(mock.packets().len(), 32);
        assert!(mock.packets().iter().all(|p| p.iter().all(|&b| b == 0)));
    }

    #[test]
    fn test_init_failure_skips_refresh() {
        let mut oled = oled(Some(0));
        assert!(matches!(oled.init(), Err(Error::Interface(MockError(0)))));
        let (mock, _) = oled.release();
        assert!(mock.log.is_empty());
    }

    #[test]
    fn test_refresh_sends_drawn_frame() {
        let mut oled = oled(None);
        oled.clear();
        oled.framebuffer_mut().set_pixel(5, 9, Color::On);
        oled.refresh().unwrap();
        let (mock, buffer) = oled.release();
        let sent = mock.packets().concat();
        assert_eq!(sent, buffer);
        assert_eq!(sent[5 + 128], 0b0000_0010);
    }

    #[test]
    fn test_fill_and_control_passthrough() {
        let mut oled = oled(None);
        oled.fill(Color::On);
        assert!(oled.framebuffer().as_bytes().iter().all(|&b| b == 0xFF));
        oled.display_mut().set_inverted(true).unwrap();
        assert_eq!(oled.display().dimensions().width, 128);
        let (mock, _) = oled.release();
        assert_eq!(mock.commands(), vec![0xA7]);
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn test_draw_target_clips_and_maps_color() {
        use embedded_graphics_core::{
            Pixel,
            draw_target::DrawTarget,
            geometry::{OriginDimensions, Point, Size},
            pixelcolor::BinaryColor,
        };

        let mut oled = oled(None);
        DrawTarget::clear(&mut oled, BinaryColor::Off).unwrap();
        assert_eq!(oled.size(), Size::new(128, 64));
        oled.draw_iter([
            Pixel(Point::new(1, 1), BinaryColor::On),
            Pixel(Point::new(-1, 3), BinaryColor::On),
            Pixel(Point::new(128, 3), BinaryColor::On),
            Pixel(Point::new(7, 64), BinaryColor::On),
        ])
        .unwrap();
        let fb = oled.framebuffer();
        assert_eq!(fb.pixel(1, 1), Some(Color::On));
        assert_eq!(fb.as_bytes().iter().filter(|&&b| b != 0).count(), 1);
    }
}
