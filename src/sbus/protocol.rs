//! # SBUS Protocol Constants and Types
//!
//! Core protocol definitions for SBUS (Futaba S.Bus) frames.

use serde::{Deserialize, Serialize};

/// SBUS frame start byte (always 0x0F)
pub const SBUS_START_BYTE: u8 = 0x0F;

/// SBUS frame end byte (always 0x00)
pub const SBUS_END_BYTE: u8 = 0x00;

/// Total frame size
/// Frame structure: start(1) + payload(22) + flags(1) + end(1)
pub const SBUS_FRAME_SIZE: usize = 25;

/// Channel payload size (22 bytes for 16 channels × 11 bits)
pub const SBUS_PAYLOAD_SIZE: usize = 22;

/// Offset of the first payload byte
pub const SBUS_PAYLOAD_OFFSET: usize = 1;

/// Offset of the flag byte
pub const SBUS_FLAGS_OFFSET: usize = 23;

/// Offset of the end byte
pub const SBUS_END_OFFSET: usize = 24;

/// Number of proportional channels
pub const SBUS_NUM_CHANNELS: usize = 16;

/// Bits per channel on the wire
pub const SBUS_CHANNEL_BITS: usize = 11;

/// Mask selecting the 11 meaningful bits of a channel value
pub const SBUS_CHANNEL_MASK: u16 = 0x07FF;

/// Channel value range (11-bit: 0-2047)
pub const SBUS_CHANNEL_VALUE_MIN: u16 = 0;
pub const SBUS_CHANNEL_VALUE_MAX: u16 = 2047;
pub const SBUS_CHANNEL_VALUE_CENTER: u16 = 1024;

/// Flag byte bits
pub const SBUS_FLAG_CH17: u8 = 0x80;
pub const SBUS_FLAG_CH18: u8 = 0x40;
pub const SBUS_FLAG_FRAME_LOST: u8 = 0x20;
pub const SBUS_FLAG_FAILSAFE: u8 = 0x10;

/// Complete wire frame
pub type SbusFrame = [u8; SBUS_FRAME_SIZE];

/// Channel array type (16 channels, 11-bit values)
pub type Channels = [u16; SBUS_NUM_CHANNELS];

/// Reduce a channel value to its low 11 bits
///
/// Out-of-range values are truncated, not clamped: `0x0800` becomes `0`.
#[inline]
pub const fn mask_channel_value(value: u16) -> u16 {
    value & SBUS_CHANNEL_MASK
}

/// SBUS status flags carried in byte 23
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flags {
    /// Digital channel 17
    pub ch17: bool,

    /// Digital channel 18
    pub ch18: bool,

    /// Receiver missed a frame
    pub frame_lost: bool,

    /// Failsafe active
    pub failsafe: bool,
}

impl Flags {
    /// No flags set
    pub const NONE: Self = Self {
        ch17: false,
        ch18: false,
        frame_lost: false,
        failsafe: false,
    };

    /// Pack the flags into the wire flag byte (reserved bits 3-0 are zero)
    pub const fn to_byte(&self) -> u8 {
        let mut byte = 0;
        if self.ch17 {
            byte |= SBUS_FLAG_CH17;
        }
        if self.ch18 {
            byte |= SBUS_FLAG_CH18;
        }
        if self.frame_lost {
            byte |= SBUS_FLAG_FRAME_LOST;
        }
        if self.failsafe {
            byte |= SBUS_FLAG_FAILSAFE;
        }
        byte
    }

    /// Unpack a wire flag byte, ignoring the reserved bits
    pub const fn from_byte(byte: u8) -> Self {
        Self {
            ch17: byte & SBUS_FLAG_CH17 != 0,
            ch18: byte & SBUS_FLAG_CH18 != 0,
            frame_lost: byte & SBUS_FLAG_FRAME_LOST != 0,
            failsafe: byte & SBUS_FLAG_FAILSAFE != 0,
        }
    }
}

/// SBUS frame: 16 proportional channels plus status flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame {
    /// Channel values, only the low 11 bits are transmitted
    pub channels: Channels,

    /// Status flags
    pub flags: Flags,
}

impl Frame {
    /// Create a new frame from channel values and flags
    ///
    /// Values are stored as given; masking to 11 bits happens on encode.
    pub const fn new(channels: Channels, flags: Flags) -> Self {
        Self { channels, flags }
    }

    /// Frame with every channel at center and no flags set
    pub const fn centered() -> Self {
        Self::new([SBUS_CHANNEL_VALUE_CENTER; SBUS_NUM_CHANNELS], Flags::NONE)
    }

    /// Copy of this frame with every channel reduced to 11 bits
    pub fn masked(&self) -> Self {
        let mut channels = self.channels;
        for value in channels.iter_mut() {
            *value = mask_channel_value(*value);
        }
        Self::new(channels, self.flags)
    }

    /// Encode this frame to its 25-byte wire form
    pub fn encode(&self) -> SbusFrame {
        super::encoder::encode_frame(self)
    }

    /// Decode a frame from its 25-byte wire form
    pub fn decode(data: &SbusFrame) -> std::result::Result<Self, crate::error::FrameFormatError> {
        super::decoder::decode_frame(data)
    }
}
