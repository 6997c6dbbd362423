//! Binary-digit rendering of frames for diagnostics.

use std::fmt;

use super::protocol::{Channels, Flags, Frame, SBUS_CHANNEL_BITS};

/// Render channel values as space-separated 11-digit binary words
pub fn format_channels_binary(channels: &Channels) -> String {
    channels
        .iter()
        .map(|value| format!("{:0width$b}", value, width = SBUS_CHANNEL_BITS))
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08b}", self.to_byte())
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", format_channels_binary(&self.channels), self.flags)
    }
}
