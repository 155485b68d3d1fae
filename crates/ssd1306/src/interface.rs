//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`I2cInterface`]
//! struct for communicating with the controller over a two-wire bus.
//!
//! ## Wire format
//!
//! Every I2C transaction starts with a control byte:
//! - `0x00`: the following byte is a command
//! - `0x40`: all following bytes are display data
//!
//! The SSD1306 family has no busy line and no reset on the I2C variants, so
//! the interface only moves bytes.
//!
//! ## Example
//!
//! ```rust,ignore
//! use ssd1306::I2cInterface;
//!
//! // Default address 0x3C
//! let mut interface = I2cInterface::new(i2c);
//!
//! // Panels strapped to the alternate address
//! let mut interface = I2cInterface::with_address(i2c, 0x3D);
//!
//! interface.send_command(0xAF)?; // Display on
//! interface.send_data(&[0xFF, 0x00, 0xFF])?;
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::I2c;

use crate::command::{CONTROL_COMMAND, CONTROL_DATA};
use crate::error::MAX_PACKET_SIZE;

/// Default 7-bit bus address of SSD1306 modules
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Trait for the transport to the controller
///
/// This trait abstracts over different bus implementations, allowing
/// [`Display`](crate::display::Display) to work with any transport, and
/// tests to substitute a recording mock.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a single command byte to the controller
    ///
    /// # Errors
    ///
    /// Returns an error if the bus rejects the transfer.
    fn send_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Send one packet of display data to the controller
    ///
    /// Callers keep `data` at or below the configured packet size; the
    /// implementation may split larger slices.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus rejects the transfer.
    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T: DisplayInterface + ?Sized> DisplayInterface for &mut T {
    type Error = T::Error;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        (**self).send_command(command)
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        (**self).send_data(data)
    }
}

/// Errors that can occur at the interface level
#[derive(Debug)]
pub enum InterfaceError<E> {
    /// I2C bus error (NACK, arbitration loss, timeout, ...)
    I2c(E),
}

impl<E: Debug> core::fmt::Display for InterfaceError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InterfaceError::I2c(e) => write!(f, "I2C error: {e:?}"),
        }
    }
}

impl<E: Debug> core::error::Error for InterfaceError<E> {}

/// I2C implementation of [`DisplayInterface`]
///
/// Works with any bus implementing the embedded-hal v1.0 [`I2c`] trait.
#[derive(Debug)]
pub struct I2cInterface<I2C> {
    /// Bus handle
    i2c: I2C,
    /// 7-bit device address
    address: u8,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create an interface talking to [`DEFAULT_ADDRESS`]
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Create an interface talking to `address`
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Device address in use
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give back the bus handle
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = InterfaceError<I2C::Error>;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, command])
            .map_err(InterfaceError::I2c)
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        // +1 for the control byte
        let mut packet = [0u8; MAX_PACKET_SIZE + 1];
        packet[0] = CONTROL_DATA;

        for chunk in data.chunks(MAX_PACKET_SIZE) {
            packet[1..=chunk.len()].copy_from_slice(chunk);
            self.i2c
                .write(self.address, &packet[..=chunk.len()])
                .map_err(InterfaceError::I2c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};
    use std::vec::Vec;

    /// Bus that records every write as (address, bytes)
    #[derive(Default)]
    struct RecordingBus {
        writes: Vec<(u8, Vec<u8>)>,
        fail: bool,
    }

    impl ErrorType for RecordingBus {
        type Error = ErrorKind;
    }

    impl I2c for RecordingBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            for op in operations {
                if let Operation::Write(bytes) = op {
                    self.writes.push((address, bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_command_is_prefixed_with_control_byte() {
        let mut interface = I2cInterface::new(RecordingBus::default());
        interface.send_command(0xAF).unwrap();
        let bus = interface.release();
        assert_eq!(bus.writes, vec![(0x3C, vec![0x00, 0xAF])]);
    }

    #[test]
    fn test_data_is_prefixed_with_data_marker() {
        let mut interface = I2cInterface::with_address(RecordingBus::default(), 0x3D);
        interface.send_data(&[1, 2, 3]).unwrap();
        let bus = interface.release();
        assert_eq!(bus.writes, vec![(0x3D, vec![0x40, 1, 2, 3])]);
    }

    #[test]
    fn test_oversized_data_is_split() {
        let mut interface = I2cInterface::new(RecordingBus::default());
        let data = [0xAAu8; MAX_PACKET_SIZE + 5];
        interface.send_data(&data).unwrap();
        let bus = interface.release();
        assert_eq!(bus.writes.len(), 2);
        assert_eq!(bus.writes[0].1.len(), MAX_PACKET_SIZE + 1);
        assert_eq!(bus.writes[1].1, vec![0x40, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA]);
    }

    #[test]
    fn test_bus_error_is_wrapped() {
        let bus = RecordingBus {
            fail: true,
            ..Default::default()
        };
        let mut interface = I2cInterface::new(bus);
        assert!(matches!(
            interface.send_command(0xAE),
            Err(InterfaceError::I2c(ErrorKind::Other))
        ));
    }
}
