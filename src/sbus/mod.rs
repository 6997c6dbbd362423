//! # SBUS Protocol Module
//!
//! Implementation of the Futaba S.Bus frame format.
//!
//! This module handles:
//! - Frame encoding (16 channels, 11-bit resolution, 4 flags)
//! - Frame decoding with start/end marker validation
//! - Binary rendering of frames for diagnostics
//! - Hex text conversion for frame dumps

pub mod protocol;
pub mod encoder;
pub mod decoder;
pub mod display;
pub mod hex;

pub use decoder::{decode_frame, decode_slice};
pub use encoder::{encode_frame, encode_into};
pub use protocol::{Channels, Flags, Frame, SbusFrame};
