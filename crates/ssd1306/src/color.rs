//! Binary drawing color

/// Pixel state on a monochrome panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    /// Pixel cleared (dark)
    #[default]
    Off,
    /// Pixel set (lit)
    On,
}

impl Color {
    /// The opposite color
    pub fn invert(self) -> Self {
        match self {
            Color::Off => Color::On,
            Color::On => Color::Off,
        }
    }

    /// Byte value that paints a whole strip byte in this color
    pub fn fill_byte(self) -> u8 {
        match self {
            Color::Off => 0x00,
            Color::On => 0xFF,
        }
    }

    /// True for a lit pixel
    pub fn is_on(self) -> bool {
        self == Color::On
    }
}

impl From<bool> for Color {
    fn from(on: bool) -> Self {
        if on { Color::On } else { Color::Off }
    }
}

/// Any nonzero value is lit
impl From<u8> for Color {
    fn from(value: u8) -> Self {
        Color::from(value != 0)
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        Color::from(color.is_on())
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for embedded_graphics_core::pixelcolor::BinaryColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Off => embedded_graphics_core::pixelcolor::BinaryColor::Off,
            Color::On => embedded_graphics_core::pixelcolor::BinaryColor::On,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonzero_is_on() {
        assert_eq!(Color::from(0u8), Color::Off);
        assert_eq!(Color::from(1u8), Color::On);
        assert_eq!(Color::from(0x80u8), Color::On);
    }

    #[test]
    fn test_invert() {
        assert_eq!(Color::On.invert(), Color::Off);
        assert_eq!(Color::Off.invert(), Color::On);
    }
}
