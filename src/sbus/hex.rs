//! # Hex Conversion
//!
//! Text form of raw frames for logs and the command line.

use crate::error::{Result, SbusError};

/// Render bytes as space-separated uppercase hex pairs
///
/// # Examples
///
/// ```
/// use sbus_frame::sbus::hex::to_hex;
///
/// assert_eq!(to_hex(&[0x0F, 0xFF, 0x07]), "0F FF 07");
/// ```
pub fn to_hex(data: &[u8]) -> String {
    let digits = ::hex::encode_upper(data);

    digits
        .as_bytes()
        .chunks(2)
        .map(|pair| String::from_utf8_lossy(pair))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse hex text into bytes
///
/// Accepts tokens separated by whitespace or commas, each with an optional
/// `0x` prefix. A single-digit token is one byte (`f` is `0x0F`); a longer
/// token is read as consecutive byte pairs, so `0f ff 07` and `0fff07`
/// parse the same.
///
/// # Errors
///
/// Returns `SbusError::InvalidHex` for non-hex characters (including signs)
/// or an odd digit count in a multi-digit token.
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();

    for token in input.split(|c: char| c.is_whitespace() || c == ',') {
        let digits = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);

        if digits.is_empty() {
            continue;
        }

        let decoded = if digits.len() == 1 {
            ::hex::decode(format!("0{}", digits))
        } else {
            ::hex::decode(digits)
        };

        let decoded =
            decoded.map_err(|e| SbusError::InvalidHex(format!("'{}': {}", token, e)))?;
        bytes.extend_from_slice(&decoded);
    }

    Ok(bytes)
}
