//! # SBUS Frame Library
//!
//! Encode and decode Futaba S.Bus frames.
//!
//! This library provides the 25-byte SBUS frame codec: sixteen 11-bit
//! proportional channels and four status flags, bit-packed between fixed
//! start and end markers.

pub mod config;
pub mod error;
pub mod sbus;
