//! # SBUS Frame Encoder
//!
//! Encodes channel values and flags into 25-byte SBUS frames.

use bytes::BufMut;

use super::protocol::*;

/// Encode a frame into its 25-byte wire form
///
/// # Arguments
///
/// * `frame` - Channel values (masked to 11 bits) and flags
///
/// # Returns
///
/// * `SbusFrame` - start(1) + payload(22) + flags(1) + end(1)
///
/// # Examples
///
/// ```
/// use sbus_frame::sbus::encoder::encode_frame;
/// use sbus_frame::sbus::protocol::{Frame, SBUS_END_BYTE, SBUS_START_BYTE};
///
/// let data = encode_frame(&Frame::centered());
/// assert_eq!(data[0], SBUS_START_BYTE);
/// assert_eq!(data[24], SBUS_END_BYTE);
/// ```
pub fn encode_frame(frame: &Frame) -> SbusFrame {
    let mut data = [0u8; SBUS_FRAME_SIZE];

    data[0] = SBUS_START_BYTE;
    data[SBUS_PAYLOAD_OFFSET..SBUS_FLAGS_OFFSET]
        .copy_from_slice(&encode_channels_payload(&frame.channels));
    data[SBUS_FLAGS_OFFSET] = frame.flags.to_byte();
    data[SBUS_END_OFFSET] = SBUS_END_BYTE;

    data
}

/// Append an encoded frame to a caller-owned buffer
///
/// Writes exactly `SBUS_FRAME_SIZE` bytes.
pub fn encode_into<B: BufMut>(frame: &Frame, buf: &mut B) {
    buf.put_slice(&encode_frame(frame));
}

/// Encode channels into payload (22 bytes)
///
/// Packs 16 channels (11 bits each) into 22 bytes using bit packing.
/// Channels are packed as a continuous bitstream, LSB first.
///
/// # Algorithm
///
/// Each channel is masked to 11 bits (0-2047). Channels are packed LSB-first:
/// ```text
/// Byte 0: Ch0[0:7]
/// Byte 1: Ch0[8:10] | Ch1[0:4]
/// Byte 2: Ch1[5:10] | Ch2[0:1]
/// ...
/// ```
pub fn encode_channels_payload(channels: &Channels) -> [u8; SBUS_PAYLOAD_SIZE] {
    let mut payload = [0u8; SBUS_PAYLOAD_SIZE];
    let mut bit_index = 0;

    for &channel in channels.iter() {
        let value = mask_channel_value(channel);

        for bit in 0..SBUS_CHANNEL_BITS {
            if (value >> bit) & 1 == 1 {
                payload[bit_index / 8] |= 1 << (bit_index % 8);
            }
            bit_index += 1;
        }
    }

    payload
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_with_flags(flags: Flags) -> Frame {
        Frame::new([0; SBUS_NUM_CHANNELS], flags)
    }

    fn blank_with_flag_byte(flag_byte: u8) -> SbusFrame {
        let mut expected = [0u8; SBUS_FRAME_SIZE];
        expected[0] = 0x0F;
        expected[23] = flag_byte;
        expected
    }

    #[test]
    fn test_encode_blank_frame() {
        let data = encode_frame(&Frame::default());

        let mut expected = [0u8; 25];
        expected[0] = 0x0F;
        assert_eq!(data, expected);
    }

    #[test]
    fn test_encode_flags() {
        let cases = [
            (Flags { failsafe: true, ..Default::default() }, 0x10),
            (Flags { frame_lost: true, ..Default::default() }, 0x20),
            (Flags { ch18: true, ..Default::default() }, 0x40),
            (Flags { ch17: true, ..Default::default() }, 0x80),
        ];

        for (flags, flag_byte) in cases {
            assert_eq!(
                encode_frame(&frame_with_flags(flags)),
                blank_with_flag_byte(flag_byte),
                "flags {:?}",
                flags
            );
        }
    }

    #[test]
    fn test_encode_channel_0_max() {
        let mut channels = [0u16; SBUS_NUM_CHANNELS];
        channels[0] = 0x7FF;

        let data = encode_frame(&Frame::new(channels, Flags::default()));

        assert_eq!(data[1], 0xFF);
        assert_eq!(data[2], 0x07);
        assert!(data[3..23].iter().all(|&b| b == 0));
        assert_eq!(data[23], 0x00);
    }

    #[test]
    fn test_encode_channels_all_zeros() {
        let payload = encode_channels_payload(&[0u16; SBUS_NUM_CHANNELS]);
        assert_eq!(payload, [0u8; 22]);
    }

    #[test]
    fn test_encode_channels_all_max() {
        let payload = encode_channels_payload(&[SBUS_CHANNEL_VALUE_MAX; SBUS_NUM_CHANNELS]);

        // 16 channels × 11 bits = 176 bits = 22 bytes, all set
        assert_eq!(payload, [0xFFu8; 22]);
    }

    #[test]
    fn test_encode_channel_straddles_three_bytes() {
        // Channel 2 occupies stream bits 22..=32: bytes 2 (bits 6-7), 3, 4 (bit 0)
        let mut channels = [0u16; SBUS_NUM_CHANNELS];
        channels[2] = 0x7FF;

        let payload = encode_channels_payload(&channels);

        assert_eq!(payload[2], 0xC0);
        assert_eq!(payload[3], 0xFF);
        assert_eq!(payload[4], 0x01);
        assert_eq!(payload.iter().filter(|&&b| b != 0).count(), 3);
    }

    #[test]
    fn test_encode_last_channel() {
        // Channel 15 occupies stream bits 165..=175: byte 20 (bits 5-7), byte 21
        let mut channels = [0u16; SBUS_NUM_CHANNELS];
        channels[15] = 0x7FF;

        let payload = encode_channels_payload(&channels);

        assert_eq!(payload[20], 0xE0);
        assert_eq!(payload[21], 0xFF);
    }

    #[test]
    fn test_encode_masks_out_of_range_values() {
        let mut over = [0u16; SBUS_NUM_CHANNELS];
        over[0] = 0xFFFF;
        let mut max = [0u16; SBUS_NUM_CHANNELS];
        max[0] = 0x07FF;

        assert_eq!(
            encode_frame(&Frame::new(over, Flags::default())),
            encode_frame(&Frame::new(max, Flags::default()))
        );
    }

    #[test]
    fn test_encode_masked_bits_do_not_leak_into_neighbour() {
        // Bit 11 of channel 0 would otherwise land in channel 1's first bit
        let mut channels = [0u16; SBUS_NUM_CHANNELS];
        channels[0] = 0x0800;

        let payload = encode_channels_payload(&channels);
        assert_eq!(payload, [0u8; 22]);
    }

    #[test]
    fn test_encode_known_pattern() {
        let mut channels = [0u16; SBUS_NUM_CHANNELS];
        channels[2] = 0x7FF;
        channels[7] = 0x400;
        channels[10] = 0x720;
        channels[13] = 0x0FF;
        let flags = Flags { ch17: true, failsafe: true, ..Default::default() };

        let data = encode_frame(&Frame::new(channels, flags));

        let expected: SbusFrame = [
            0x0F, 0x00, 0x00, 0xC0, 0xFF, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x00,
            0x00, 0x00, 0xC8, 0x01, 0x00, 0x80, 0x7F, 0x00, 0x00, 0x00, 0x90, 0x00,
        ];
        assert_eq!(data, expected);
    }

    #[test]
    fn test_encode_into_appends() {
        let mut buf = Vec::new();
        buf.push(0xAA);

        encode_into(&Frame::centered(), &mut buf);

        assert_eq!(buf.len(), 1 + SBUS_FRAME_SIZE);
        assert_eq!(buf[0], 0xAA);
        assert_eq!(&buf[1..], &encode_frame(&Frame::centered())[..]);
    }
}
