//! # SBUS Frame Decoder
//!
//! Decodes 25-byte SBUS frames into channel values and flags.

use super::protocol::*;
use crate::error::{FrameFormatError, Result, SbusError};

/// Decode a complete SBUS frame
///
/// # Arguments
///
/// * `data` - Complete SBUS frame bytes (start, payload, flags, end)
///
/// # Returns
///
/// * `Result<Frame, FrameFormatError>` - Decoded frame, or the first marker error
///
/// # Errors
///
/// Returns error if:
/// - Start byte is not 0x0F (checked first)
/// - End byte is not 0x00
///
/// # Examples
///
/// ```
/// use sbus_frame::sbus::decoder::decode_frame;
///
/// let mut data = [0u8; 25];
/// data[0] = 0x0F;
/// data[1] = 0xFF;
/// data[2] = 0x07;
///
/// let frame = decode_frame(&data).unwrap();
/// assert_eq!(frame.channels[0], 0x7FF);
/// ```
pub fn decode_frame(data: &SbusFrame) -> std::result::Result<Frame, FrameFormatError> {
    if data[0] != SBUS_START_BYTE {
        return Err(FrameFormatError::InvalidStartByte(data[0]));
    }

    if data[SBUS_END_OFFSET] != SBUS_END_BYTE {
        return Err(FrameFormatError::InvalidEndByte(data[SBUS_END_OFFSET]));
    }

    let mut payload = [0u8; SBUS_PAYLOAD_SIZE];
    payload.copy_from_slice(&data[SBUS_PAYLOAD_OFFSET..SBUS_FLAGS_OFFSET]);

    Ok(Frame::new(
        decode_channels_payload(&payload),
        Flags::from_byte(data[SBUS_FLAGS_OFFSET]),
    ))
}

/// Decode a frame from a borrowed slice
///
/// The slice must be exactly `SBUS_FRAME_SIZE` bytes; locating the frame in
/// a byte stream is the caller's job.
///
/// # Errors
///
/// Returns `SbusError::InvalidLength` for any other length, otherwise the
/// marker errors of [`decode_frame`].
pub fn decode_slice(data: &[u8]) -> Result<Frame> {
    let data: &SbusFrame = data.try_into().map_err(|_| SbusError::InvalidLength {
        expected: SBUS_FRAME_SIZE,
        actual: data.len(),
    })?;

    Ok(decode_frame(data)?)
}

/// Decode channels from payload (22 bytes)
///
/// Reads 16 consecutive 11-bit values from the LSB-first bitstream.
/// Every returned value lies in 0-2047.
pub fn decode_channels_payload(payload: &[u8; SBUS_PAYLOAD_SIZE]) -> Channels {
    let mut channels = [0u16; SBUS_NUM_CHANNELS];
    let mut bit_index = 0;

    for channel in channels.iter_mut() {
        let mut value = 0u16;

        for bit in 0..SBUS_CHANNEL_BITS {
            if (payload[bit_index / 8] >> (bit_index % 8)) & 1 == 1 {
                value |= 1 << bit;
            }
            bit_index += 1;
        }

        *channel = mask_channel_value(value);
    }

    channels
}
