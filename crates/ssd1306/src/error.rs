//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! bitmap validation ([`BitmapError`]) and bus operations ([`Error`]).
//!
//! Drawing never fails: coordinates outside the panel are clipped silently.
//! Only the bus and up-front validation can produce errors.
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`BitmapError`] - Bitmap geometry that does not match its data
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level bus errors
//!
//! ## Example
//!
//! ```
//! use ssd1306::{Builder, BuilderError, Dimensions};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Height must be a whole number of pages
//! let result = Dimensions::new(128, 30, 0);
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Maximum segment outputs (columns) a panel may use
pub const MAX_COLUMNS: u16 = 128;

/// Column RAM size of the controller, including unmapped columns
///
/// Panels narrower than the RAM are placed with a column offset.
pub const COLUMN_RAM: u16 = 132;

/// Maximum common outputs (rows) supported by the controller family
pub const MAX_ROWS: u16 = 128;

/// Largest payload of a single data packet
pub const MAX_PACKET_SIZE: usize = 128;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (bus write rejected or timed out)
    ///
    /// Wraps the underlying error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// Frame passed to the transfer engine is shorter than the panel
    ///
    /// Frames must be at least `dimensions.buffer_size()` bytes.
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Interface(e) => write!(f, "Interface error: {e:?}"),
            Error::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width in pixels
        width: u16,
        /// Height in pixels
        height: u16,
        /// First physical column used by the panel
        offset: u16,
    },
    /// Packet size outside `1..=MAX_PACKET_SIZE`
    InvalidPacketSize(usize),
    /// Framebuffer storage is too small for the configured dimensions
    ///
    /// The provided buffer must be at least `dimensions.buffer_size()` bytes.
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BuilderError::MissingDimensions => write!(f, "Dimensions must be specified"),
            BuilderError::InvalidDimensions {
                width,
                height,
                offset,
            } => write!(
                f,
                "Invalid dimensions {width}x{height}+{offset} (max {MAX_COLUMNS}x{MAX_ROWS}, height must be multiple of 8, offset+width <= {COLUMN_RAM})"
            ),
            BuilderError::InvalidPacketSize(size) => {
                write!(f, "Invalid packet size {size} (1..={MAX_PACKET_SIZE})")
            }
            BuilderError::BufferTooSmall { required, provided } => write!(
                f,
                "Buffer too small: required {required} bytes, provided {provided}"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

/// Errors from [`Bitmap::new`](crate::image::Bitmap::new)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitmapError {
    /// Width is not a multiple of 8
    UnalignedWidth(u32),
    /// Data holds fewer bytes than `width / 8 * height`
    DataTooShort {
        /// Bytes needed for the declared geometry
        required: usize,
        /// Bytes supplied
        provided: usize,
    },
}

impl core::fmt::Display for BitmapError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitmapError::UnalignedWidth(width) => {
                write!(f, "Bitmap width {width} is not a multiple of 8")
            }
            BitmapError::DataTooShort { required, provided } => write!(
                f,
                "Bitmap data too short: required {required} bytes, provided {provided}"
            ),
        }
    }
}

impl core::error::Error for BitmapError {}
