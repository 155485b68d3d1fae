//! Display configuration types and builder

pub use crate::error::{BuilderError, COLUMN_RAM, MAX_COLUMNS, MAX_PACKET_SIZE, MAX_ROWS};

/// Default payload size of one data packet
///
/// 32 bytes keeps each I2C write inside the transmit FIFO of most MCUs.
pub const DEFAULT_PACKET_SIZE: usize = 32;

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels (segment outputs in use)
    pub width: u16,
    /// Height in pixels (common outputs in use), a multiple of 8
    pub height: u16,
    /// First physical column of the panel in controller RAM
    pub offset: u16,
}

impl Dimensions {
    /// 64x32 panel, mapped to the middle of column RAM
    pub const W64_H32: Dimensions = Dimensions {
        width: 64,
        height: 32,
        offset: 32,
    };
    /// 72x40 panel
    pub const W72_H40: Dimensions = Dimensions {
        width: 72,
        height: 40,
        offset: 28,
    };
    /// 128x32 panel
    pub const W128_H32: Dimensions = Dimensions {
        width: 128,
        height: 32,
        offset: 0,
    };
    /// 128x64 panel
    pub const W128_H64: Dimensions = Dimensions {
        width: 128,
        height: 64,
        offset: 0,
    };
    /// 128x128 panel (SH1107)
    pub const W128_H128: Dimensions = Dimensions {
        width: 128,
        height: 128,
        offset: 0,
    };

    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width == 0 or width > MAX_COLUMNS
    /// - height == 0, height > MAX_ROWS or height % 8 != 0 (rows are packed in pages)
    /// - offset + width > COLUMN_RAM
    pub fn new(width: u16, height: u16, offset: u16) -> Result<Self, BuilderError> {
        let invalid = BuilderError::InvalidDimensions {
            width,
            height,
            offset,
        };
        if width == 0 || width > MAX_COLUMNS {
            return Err(invalid);
        }
        if height == 0 || height > MAX_ROWS || height % 8 != 0 {
            return Err(invalid);
        }
        if offset as u32 + width as u32 > COLUMN_RAM as u32 {
            return Err(invalid);
        }
        Ok(Self {
            width,
            height,
            offset,
        })
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> u16 {
        self.height / 8
    }

    /// Calculate required buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        self.width as usize * self.height as usize / 8
    }
}

/// Controller family, selects the initialization table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// SSD1306 and register-compatible controllers
    #[default]
    Ssd1306,
    /// SH1107 (128x128 panels)
    Sh1107,
}

/// Display configuration
///
/// Only [`Builder::build`] creates one, so every `Config` in circulation has
/// been validated.
///
/// ```compile_fail
/// use ssd1306::{Config, Dimensions, Variant};
///
/// let config = Config {
///     dimensions: Dimensions::W128_H64,
///     variant: Variant::Ssd1306,
///     packet_size: 0,
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    dimensions: Dimensions,
    variant: Variant,
    packet_size: usize,
}

impl Config {
    /// Display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Controller family
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Largest payload per data packet, `1..=MAX_PACKET_SIZE`
    pub fn packet_size(&self) -> usize {
        self.packet_size
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use ssd1306::{Builder, Dimensions, Variant};
///
/// let config = Builder::new()
///     .dimensions(Dimensions::W128_H64)
///     .variant(Variant::Ssd1306)
///     .packet_size(16)
///     .build()
///     .expect("valid configuration");
/// assert_eq!(config.dimensions().buffer_size(), 1024);
/// ```
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// Controller family
    variant: Variant,
    /// Largest payload per data packet
    packet_size: usize,
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            dimensions: None,
            variant: Variant::Ssd1306,
            packet_size: DEFAULT_PACKET_SIZE,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set controller family
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the largest payload per data packet
    pub fn packet_size(mut self, size: usize) -> Self {
        self.packet_size = size;
        self
    }

    /// Build the configuration
    ///
    /// Dimensions are re-validated here, since the public fields of
    /// [`Dimensions`] allow constructing it without [`Dimensions::new`].
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set,
    /// `BuilderError::InvalidDimensions` if they are out of range and
    /// `BuilderError::InvalidPacketSize` for a zero or oversized packet.
    pub fn build(self) -> Result<Config, BuilderError> {
        let dims = self.dimensions.ok_or(BuilderError::MissingDimensions)?;
        let dimensions = Dimensions::new(dims.width, dims.height, dims.offset)?;
        if self.packet_size == 0 || self.packet_size > MAX_PACKET_SIZE {
            return Err(BuilderError::InvalidPacketSize(self.packet_size));
        }
        Ok(Config {
            dimensions,
            variant: self.variant,
            packet_size: self.packet_size,
        })
    }
}
