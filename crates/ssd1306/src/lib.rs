//! Driver for SSD1306 and SH1107 monochrome OLED controllers
//!
//! The panel is driven over I2C through any [`embedded_hal::i2c::I2c`] bus.
//! Drawing happens in a RAM [`Framebuffer`] laid out exactly like the
//! controller's graphic RAM; [`GraphicDisplay::refresh`] streams it to the
//! panel in bounded packets.
//!
//! ## Layers
//!
//! - [`I2cInterface`] frames command bytes and data packets for the bus.
//! - [`Display`] sends the init table, frame transfers and control commands.
//! - [`Framebuffer`] holds the pixels and carries the drawing operations:
//!   pixels, lines, circles, rectangles, bitmaps and 8x8 text.
//! - [`GraphicDisplay`] owns one of each and is what applications use.
//!
//! With the default `graphics` feature, [`Framebuffer`] and [`GraphicDisplay`]
//! are embedded-graphics draw targets.
//!
//! ## Example
//!
//! ```rust,ignore
//! use ssd1306::{Builder, Color, Dimensions, Display, GraphicDisplay, I2cInterface};
//!
//! let config = Builder::new()
//!     .dimensions(Dimensions::W128_H64)
//!     .build()?;
//! let display = Display::new(I2cInterface::new(i2c), config);
//! let mut oled = GraphicDisplay::new(display, [0u8; 1024])?;
//! oled.init()?;
//!
//! let fb = oled.framebuffer_mut();
//! fb.rect(0, 0, 128, 64, Color::On);
//! fb.draw_str(8, 8, "ready", Color::On);
//! oled.refresh()?;
//! ```
//!
//! ## Drawing without hardware
//!
//! ```
//! use ssd1306::{Color, Dimensions, Framebuffer};
//!
//! let mut fb = Framebuffer::new(Dimensions::W128_H32, [0u8; 512]).unwrap();
//! fb.line(0, 0, 127, 31, Color::On);
//! assert_eq!(fb.pixel(127, 31), Some(Color::On));
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod color;
pub mod command;
mod config;
mod display;
mod error;
mod framebuffer;
mod graphics;
mod image;
mod init;
mod interface;
mod primitives;
mod text;

#[cfg(test)]
mod mock;

pub use color::Color;
pub use config::{Builder, Config, DEFAULT_PACKET_SIZE, Dimensions, Variant};
pub use display::{AddressWindow, Display};
pub use error::{BitmapError, BuilderError, Error, MAX_PACKET_SIZE};
pub use framebuffer::Framebuffer;
pub use graphics::GraphicDisplay;
pub use image::{Bitmap, BlendMode};
pub use init::{CommandList, init_sequence};
pub use interface::{DEFAULT_ADDRESS, DisplayInterface, I2cInterface, InterfaceError};
pub use text::{Font, Font8x8, FontScale, GLYPH_SIZE, RawFont};
