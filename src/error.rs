//! # Error Types
//!
//! Custom error types for SBUS Frame using `thiserror`.

use thiserror::Error;

/// Frame marker validation errors returned by the decoder
///
/// Each variant carries the actual byte found at the marker offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrameFormatError {
    /// Byte 0 was not the start marker (0x0F)
    #[error("invalid start byte: 0x{0:02X} (expected 0x0F)")]
    InvalidStartByte(u8),

    /// Byte 24 was not the end marker (0x00)
    #[error("invalid end byte: 0x{0:02X} (expected 0x00)")]
    InvalidEndByte(u8),
}

/// Main error type for SBUS Frame
#[derive(Debug, Error)]
pub enum SbusError {
    /// Frame marker errors
    #[error("SBUS frame error: {0}")]
    Frame(#[from] FrameFormatError),

    /// Input slice is not exactly one frame long
    #[error("invalid frame length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Malformed hex text
    #[error("invalid hex input: {0}")]
    InvalidHex(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for SBUS Frame
pub type Result<T> = std::result::Result<T, SbusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_error_messages() {
        assert_eq!(
            FrameFormatError::InvalidStartByte(0x05).to_string(),
            "invalid start byte: 0x05 (expected 0x0F)"
        );
        assert_eq!(
            FrameFormatError::InvalidEndByte(0x44).to_string(),
            "invalid end byte: 0x44 (expected 0x00)"
        );
    }

    #[test]
    fn test_frame_error_converts() {
        let err: SbusError = FrameFormatError::InvalidEndByte(0xFF).into();
        assert!(matches!(
            err,
            SbusError::Frame(FrameFormatError::InvalidEndByte(0xFF))
        ));
    }
}
