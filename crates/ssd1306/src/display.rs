//! Core display operations

use crate::command::*;
use crate::config::{Config, Dimensions};
use crate::error::Error;
use crate::init::init_sequence;
use crate::interface::DisplayInterface;

/// Column and page range covering the whole panel
///
/// Sent before every frame so the controller's write pointer starts at the
/// top-left pixel and wraps exactly at the panel edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressWindow([u8; 6]);

impl AddressWindow {
    /// Window for `dims`
    ///
    /// Dimensions that never went through [`Dimensions::new`] still give a
    /// window; the ends saturate instead of wrapping.
    pub fn new(dims: &Dimensions) -> Self {
        let first_column = dims.offset.min(u8::MAX as u16) as u8;
        let last_column = dims
            .offset
            .saturating_add(dims.width)
            .saturating_sub(1)
            .min(u8::MAX as u16) as u8;
        let last_page = dims.pages().saturating_sub(1) as u8;
        Self([
            COLUMN_ADDR,
            first_column,
            last_column,
            PAGE_ADDR,
            0,
            last_page,
        ])
    }

    /// Command bytes, one transaction each
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

/// Core display driver for SSD1306 / SH1107
///
/// This struct provides the command channel and the frame transfer. For a
/// framebuffer with drawing operations, use `GraphicDisplay`.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Addressing commands sent before each frame
    window: AddressWindow,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    pub fn new(interface: I, config: Config) -> Self {
        let window = AddressWindow::new(config.dimensions());
        Self {
            interface,
            config,
            window,
        }
    }

    /// Send the controller's power-on command table
    ///
    /// Stops at the first rejected command.
    pub fn init(&mut self) -> Result<(), Error<I>> {
        let sequence = init_sequence(&self.config);
        log::debug!(
            "init: {:?} {}x{}, {} command bytes",
            self.config.variant(),
            self.config.dimensions().width,
            self.config.dimensions().height,
            sequence.len()
        );
        for &byte in sequence.as_slice() {
            self.send_command(byte)?;
        }
        Ok(())
    }

    /// Transfer a whole frame
    ///
    /// Sends the address window, then `frame` in packets of at most
    /// `config.packet_size()` bytes. The last packet carries the remainder.
    /// Only the first `dimensions.buffer_size()` bytes of `frame` are sent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`] if the frame is shorter than the
    /// panel, or [`Error::Interface`] for the first rejected transaction; the
    /// panel then holds a partial frame until the next successful transfer.
    pub fn write_frame(&mut self, frame: &[u8]) -> Result<(), Error<I>> {
        let required = self.config.dimensions().buffer_size();
        if frame.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                provided: frame.len(),
            });
        }

        let window = self.window;
        for &byte in window.as_bytes() {
            self.send_command(byte)?;
        }

        let packets = frame[..required].chunks(self.config.packet_size());
        log::trace!("frame: {} bytes in {} packets", required, packets.len());
        for packet in packets {
            self.send_data(packet)?;
        }

        Ok(())
    }

    /// Set contrast (brightness), 0x00..=0xFF
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Error<I>> {
        self.send_command(SET_CONTRAST)?;
        self.send_command(contrast)
    }

    /// Show RAM bits inverted (0 = lit)
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), Error<I>> {
        self.send_command(if inverted {
            INVERT_DISPLAY
        } else {
            NORMAL_DISPLAY
        })
    }

    /// Turn the panel on or put it to sleep; RAM is retained
    pub fn set_display_on(&mut self, on: bool) -> Result<(), Error<I>> {
        self.send_command(if on { DISPLAY_ON } else { DISPLAY_OFF })
    }

    /// Light every pixel regardless of RAM, or go back to showing RAM
    pub fn set_entire_display_on(&mut self, on: bool) -> Result<(), Error<I>> {
        self.send_command(if on {
            DISPLAY_ALL_ON
        } else {
            DISPLAY_ALL_ON_RESUME
        })
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> Result<(), Error<I>> {
        self.interface.send_command(cmd).map_err(|e| {
            log::warn!("command {cmd:#04x} rejected: {e:?}");
            Error::Interface(e)
        })
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> Result<(), Error<I>> {
        self.interface.send_data(data).map_err(|e| {
            log::warn!("data packet of {} bytes rejected: {e:?}", data.len());
            Error::Interface(e)
        })
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        self.config.dimensions()
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Addressing commands sent before each frame
    pub fn address_window(&self) -> &AddressWindow {
        &self.window
    }

    /// Give back the interface
    pub fn release(self) -> I {
        self.interface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, Variant};
    use crate::mock::{MockError, MockInterface, Transaction};

    fn display(dims: Dimensions, packet_size: usize) -> Display<MockInterface> {
        let config = Builder::new()
            .dimensions(dims)
            .packet_size(packet_size)
            .build()
            .unwrap();
        Display::new(MockInterface::default(), config)
    }

    fn frame(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 251) as u8).collect()
    }

    #[test]
    fn test_address_window_uses_offset_and_pages() {
        assert_eq!(
            AddressWindow::new(&Dimensions::W128_H64).as_bytes(),
            &[0x21, 0, 127, 0x22, 0, 7]
        );
        assert_eq!(
            AddressWindow::new(&Dimensions::W64_H32).as_bytes(),
            &[0x21, 32, 95, 0x22, 0, 3]
        );
        assert_eq!(
            AddressWindow::new(&Dimensions::W72_H40).as_bytes(),
            &[0x21, 28, 99, 0x22, 0, 4]
        );
    }

    #[test]
    fn test_address_window_of_unchecked_dimensions() {
        let empty = Dimensions {
            width: 0,
            height: 0,
            offset: 0,
        };
        assert_eq!(
            AddressWindow::new(&empty).as_bytes(),
            &[0x21, 0, 0, 0x22, 0, 0]
        );
        let wide = Dimensions {
            width: u16::MAX,
            height: 8,
            offset: u16::MAX,
        };
        assert_eq!(
            AddressWindow::new(&wide).as_bytes(),
            &[0x21, 255, 255, 0x22, 0, 0]
        );
    }

    #[test]
    fn test_packet_size_comes_from_validated_config() {
        let mut display = display(Dimensions::W128_H64, 1);
        assert_eq!(display.config().packet_size(), 1);
        display.write_frame(&frame(1024)).unwrap();
        assert_eq!(display.release().packets().len(), 1024);
    }

    #[test]
    fn test_write_frame_packets() {
        let mut display = display(Dimensions::W128_H64, 32);
        let data = frame(1024);
        display.write_frame(&data).unwrap();

        let mock = display.release();
        assert_eq!(mock.commands(), vec![0x21, 0, 127, 0x22, 0, 7]);
        let packets = mock.packets();
        assert_eq!(packets.len(), 1024 / 32);
        assert!(packets.iter().all(|p| p.len() == 32));
        assert_eq!(packets.concat(), data);
        // Addressing strictly precedes data
        assert!(matches!(mock.log[5], Transaction::Command(7)));
        assert!(matches!(mock.log[6], Transaction::Data(_)));
    }

    #[test]
    fn test_last_packet_holds_remainder() {
        // 72x40 = 360 bytes, 32 byte packets: 11 full + 8
        let mut display = display(Dimensions::W72_H40, 32);
        let data = frame(360);
        display.write_frame(&data).unwrap();

        let mock = display.release();
        let packets = mock.packets();
        assert_eq!(packets.len(), 360_usize.div_ceil(32));
        assert_eq!(packets.last().map(|p| p.len()), Some(360 % 32));
        assert_eq!(packets.concat(), data);
    }

    #[test]
    fn test_write_frame_ignores_trailing_bytes() {
        let mut display = display(Dimensions::W128_H32, 128);
        let data = frame(600);
        display.write_frame(&data).unwrap();
        let mock = display.release();
        assert_eq!(mock.packets().concat(), &data[..512]);
    }

    #[test]
    fn test_write_frame_rejects_short_frame() {
        let mut display = display(Dimensions::W128_H64, 32);
        let result = display.write_frame(&[0u8; 100]);
        assert!(matches!(
            result,
            Err(Error::BufferTooSmall {
                required: 1024,
                provided: 100
            })
        ));
        assert!(display.release().log.is_empty());
    }

    #[test]
    fn test_write_frame_stops_at_failed_packet() {
        let config = Builder::new()
            .dimensions(Dimensions::W128_H64)
            .build()
            .unwrap();
        // 6 commands, then packets; fail the third packet
        let mut display = Display::new(MockInterface::failing_at(8), config);
        let result = display.write_frame(&frame(1024));
        assert!(matches!(result, Err(Error::Interface(MockError(8)))));
        let mock = display.release();
        assert_eq!(mock.packets().len(), 2);
    }

    #[test]
    fn test_init_sends_table_bytes_as_commands() {
        let config = Builder::new()
            .dimensions(Dimensions::W128_H64)
            .variant(Variant::Ssd1306)
            .build()
            .unwrap();
        let expected = init_sequence(&config);
        let mut display = Display::new(MockInterface::default(), config);
        display.init().unwrap();
        let mock = display.release();
        assert_eq!(mock.commands(), expected.as_slice());
        assert!(mock.packets().is_empty());
    }

    #[test]
    fn test_init_aborts_on_first_failure() {
        let config = Builder::new()
            .dimensions(Dimensions::W128_H64)
            .build()
            .unwrap();
        let mut display = Display::new(MockInterface::failing_at(3), config);
        assert!(matches!(display.init(), Err(Error::Interface(MockError(3)))));
        assert_eq!(display.release().log.len(), 3);
    }

    #[test]
    fn test_display_control_commands() {
        let mut display = display(Dimensions::W128_H64, 32);
        display.set_contrast(0x42).unwrap();
        display.set_inverted(true).unwrap();
        display.set_inverted(false).unwrap();
        display.set_display_on(false).unwrap();
        display.set_display_on(true).unwrap();
        display.set_entire_display_on(true).unwrap();
        display.set_entire_display_on(false).unwrap();
        assert_eq!(
            display.release().commands(),
            vec![0x81, 0x42, 0xA7, 0xA6, 0xAE, 0xAF, 0xA5, 0xA4]
        );
    }
}
