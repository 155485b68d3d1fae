//! Power-on command tables
//!
//! Each controller variant gets a fixed register programming sequence,
//! parametrised only by the panel geometry. Tables are plain data so the
//! rendering code never has to know which controller it drives.

use crate::command::*;
use crate::config::{Config, Dimensions, Variant};

/// Room for the longest table
const CAPACITY: usize = 48;

/// Flat sequence of command bytes built from (command, arguments) steps
///
/// The controller takes arguments through the command channel, so every
/// byte is sent as its own command transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandList {
    bytes: [u8; CAPACITY],
    len: usize,
}

impl CommandList {
    const fn new() -> Self {
        Self {
            bytes: [0; CAPACITY],
            len: 0,
        }
    }

    /// Append one command and its arguments
    ///
    /// Tables are fixed at compile time and sized to fit, so overflowing
    /// the capacity is a programming error.
    fn push(&mut self, command: u8, args: &[u8]) -> &mut Self {
        let end = self.len + 1 + args.len();
        assert!(end <= CAPACITY, "init table exceeds {CAPACITY} bytes");
        self.bytes[self.len] = command;
        self.bytes[self.len + 1..end].copy_from_slice(args);
        self.len = end;
        self
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Init sequence for the configured controller
pub fn init_sequence(config: &Config) -> CommandList {
    match config.variant() {
        Variant::Ssd1306 => ssd1306_sequence(config.dimensions()),
        Variant::Sh1107 => sh1107_sequence(config.dimensions()),
    }
}

fn multiplex(dims: &Dimensions) -> u8 {
    (dims.height - 1) as u8
}

fn ssd1306_sequence(dims: &Dimensions) -> CommandList {
    let com_pins = if dims.width == 128 && dims.height == 32 {
        0x22
    } else {
        0x12
    };
    let contrast = if *dims == Dimensions::W72_H40 {
        0xAF
    } else {
        0x8F
    };

    let mut list = CommandList::new();
    list.push(DISPLAY_OFF, &[])
        .push(SET_DISPLAY_CLOCK_DIV, &[0x80])
        .push(SET_MULTIPLEX, &[multiplex(dims)])
        .push(SET_DISPLAY_OFFSET, &[0x00])
        .push(SET_START_LINE, &[])
        .push(CHARGE_PUMP, &[CHARGE_PUMP_ENABLE])
        // Horizontal addressing: the column/page window wraps row by row
        .push(MEMORY_MODE, &[0x00])
        .push(SEG_REMAP | 0x01, &[])
        .push(COM_SCAN_DEC, &[])
        .push(SET_COM_PINS, &[com_pins])
        .push(SET_CONTRAST, &[contrast])
        .push(SET_PRECHARGE, &[0xF1])
        .push(SET_VCOM_DETECT, &[0x40])
        .push(DISPLAY_ALL_ON_RESUME, &[])
        .push(NORMAL_DISPLAY, &[])
        .push(DISPLAY_ON, &[]);
    list
}

fn sh1107_sequence(dims: &Dimensions) -> CommandList {
    let mut list = CommandList::new();
    list.push(DISPLAY_OFF, &[])
        .push(SET_LOW_COLUMN, &[])
        .push(SET_HIGH_COLUMN, &[])
        .push(SET_PAGE_START, &[])
        .push(SH1107_START_LINE, &[0x00])
        .push(SET_CONTRAST, &[0x6F])
        .push(COLUMN_ADDR, &[])
        .push(DISPLAY_ALL_ON_RESUME, &[])
        .push(SET_MULTIPLEX, &[multiplex(dims)])
        .push(SET_DISPLAY_OFFSET, &[0x00])
        .push(SET_DISPLAY_CLOCK_DIV, &[0xF0])
        .push(SET_PRECHARGE, &[0x1D])
        .push(SET_VCOM_DETECT, &[0x35])
        .push(SET_START_LINE, &[])
        .push(SH1107_DC_DC, &[0x80])
        .push(SEG_REMAP, &[0x01])
        .push(SET_PRECHARGE, &[0x06])
        .push(SET_CONTRAST, &[0xFE])
        .push(SET_VCOM_DETECT, &[0xFE])
        .push(SET_MULTIPLEX, &[multiplex(dims)])
        .push(DISPLAY_ON, &[]);
    list
}
