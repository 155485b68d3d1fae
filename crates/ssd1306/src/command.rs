// SSD1306 / SH1107 command definitions

// I2C control bytes (first byte of every transaction)
pub const CONTROL_COMMAND: u8 = 0x00; // Next byte is a command
pub const CONTROL_DATA: u8 = 0x40; // All following bytes are display data

// Display control
pub const DISPLAY_OFF: u8 = 0xAE; // Turn panel off (sleep)
pub const DISPLAY_ON: u8 = 0xAF; // Turn panel on
pub const NORMAL_DISPLAY: u8 = 0xA6; // RAM bit 1 = lit
pub const INVERT_DISPLAY: u8 = 0xA7; // RAM bit 0 = lit
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4; // Output follows RAM
pub const DISPLAY_ALL_ON: u8 = 0xA5; // Output ignores RAM, all lit

// Contrast
pub const SET_CONTRAST: u8 = 0x81; // Contrast control, 1 argument

// Memory addressing
pub const MEMORY_MODE: u8 = 0x20; // Addressing mode, 1 argument
pub const COLUMN_ADDR: u8 = 0x21; // Column range, start + end
pub const PAGE_ADDR: u8 = 0x22; // Page range, start + end
pub const SET_LOW_COLUMN: u8 = 0x00; // Lower nibble of column start
pub const SET_HIGH_COLUMN: u8 = 0x10; // Upper nibble of column start
pub const SET_PAGE_START: u8 = 0xB0; // Page start (page addressing mode)
pub const SET_START_LINE: u8 = 0x40; // OR'd with line number

// Hardware configuration
pub const SEG_REMAP: u8 = 0xA0; // OR'd with remap bit
pub const SET_MULTIPLEX: u8 = 0xA8; // Multiplex ratio, 1 argument
pub const SET_DISPLAY_OFFSET: u8 = 0xD3; // Vertical shift, 1 argument
pub const SET_COM_PINS: u8 = 0xDA; // COM pin configuration, 1 argument
pub const COM_SCAN_INC: u8 = 0xC0; // COM scan direction normal
pub const COM_SCAN_DEC: u8 = 0xC8; // COM scan direction remapped
pub const SH1107_START_LINE: u8 = 0xDC; // SH1107 display start line, 1 argument

// Timing and driving
pub const SET_DISPLAY_CLOCK_DIV: u8 = 0xD5; // Clock divide ratio, 1 argument
pub const SET_PRECHARGE: u8 = 0xD9; // Pre-charge period, 1 argument
pub const SET_VCOM_DETECT: u8 = 0xDB; // VCOMH deselect level, 1 argument
pub const CHARGE_PUMP: u8 = 0x8D; // SSD1306 charge pump, 1 argument
pub const SH1107_DC_DC: u8 = 0xAD; // SH1107 DC-DC control, 1 argument

// Charge pump argument
pub const CHARGE_PUMP_ENABLE: u8 = 0x14; // Internal charge pump on (switched cap VCC)
