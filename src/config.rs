//! # Configuration Module
//!
//! Handles loading and validating frame configuration from TOML files.

use clap::ValueEnum;
use serde::de::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{Result, SbusError};
use crate::sbus::protocol::{
    mask_channel_value, Flags, Frame, SBUS_CHANNEL_VALUE_CENTER, SBUS_CHANNEL_VALUE_MAX,
    SBUS_NUM_CHANNELS,
};

/// Output format for encoded bytes and decoded frames
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Hex bytes (encode) or decimal channel values (decode)
    #[default]
    Text,
    /// Binary digits
    Binary,
    /// JSON
    Json,
}

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub frame: FrameConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Frame contents to encode
#[derive(Debug, Deserialize, Clone)]
pub struct FrameConfig {
    #[serde(default = "default_channels")]
    pub channels: Vec<u16>,

    #[serde(default)]
    pub ch17: bool,

    #[serde(default)]
    pub ch18: bool,

    #[serde(default)]
    pub frame_lost: bool,

    #[serde(default)]
    pub failsafe: bool,
}

/// Output configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

// Default value functions
fn default_channels() -> Vec<u16> { vec![SBUS_CHANNEL_VALUE_CENTER; SBUS_NUM_CHANNELS] }

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            channels: default_channels(),
            ch17: false,
            ch18: false,
            frame_lost: false,
            failsafe: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// * `Result<Config>` - Loaded and validated configuration
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sbus_frame::config::Config;
    ///
    /// let config = Config::load("config/default.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());

        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// Unknown output formats are already rejected while parsing.
    ///
    /// # Errors
    ///
    /// Returns error if the channel list is not exactly 16 entries
    fn validate(&self) -> Result<()> {
        self.frame.validate()
    }
}

impl FrameConfig {
    /// Check that exactly one value per channel is configured
    fn validate(&self) -> Result<()> {
        if self.channels.len() != SBUS_NUM_CHANNELS {
            return Err(SbusError::Config(toml::de::Error::custom(format!(
                "frame.channels must have exactly {} entries, got {}",
                SBUS_NUM_CHANNELS,
                self.channels.len()
            ))));
        }

        Ok(())
    }

    /// Build the configured frame
    ///
    /// Channel values above 2047 are masked to 11 bits with a warning.
    ///
    /// # Errors
    ///
    /// Returns error if the channel list is not exactly 16 entries
    pub fn to_frame(&self) -> Result<Frame> {
        self.validate()?;

        let mut channels = [0u16; SBUS_NUM_CHANNELS];

        for (index, (slot, &value)) in channels.iter_mut().zip(&self.channels).enumerate() {
            if value > SBUS_CHANNEL_VALUE_MAX {
                warn!(
                    "Channel {} value {} exceeds {}, masking to {}",
                    index,
                    value,
                    SBUS_CHANNEL_VALUE_MAX,
                    mask_channel_value(value)
                );
            }
            *slot = mask_channel_value(value);
        }

        Ok(Frame::new(
            channels,
            Flags {
                ch17: self.ch17,
                ch18: self.ch18,
                frame_lost: self.frame_lost,
                failsafe: self.failsafe,
            },
        ))
    }
}
