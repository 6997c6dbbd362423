//! # SBUS Frame
//!
//! Command-line front end for the SBUS frame codec.
//!
//! `encode` builds a frame from a TOML configuration (or defaults) and prints
//! the 25 wire bytes; `decode` parses 25 hex bytes and prints the frame.
//!
//! # Examples
//!
//! ```bash
//! sbus-frame encode --config config/default.toml
//! sbus-frame decode "0F FF 07 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 10 00" --format json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use sbus_frame::config::{Config, OutputFormat};
use sbus_frame::sbus::display::format_channels_binary;
use sbus_frame::sbus::hex::{parse_hex, to_hex};
use sbus_frame::sbus::{decode_slice, encode_frame, Frame};

#[derive(Parser, Debug)]
#[command(name = "sbus-frame", version, about = "Encode and decode SBUS frames")]
struct Cli {
    /// Minimum log level (stderr), used when RUST_LOG is unset
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a frame described by a TOML configuration
    Encode {
        /// Configuration file (defaults: all channels centered, no flags)
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Output format (overrides the configuration)
        #[arg(long, short)]
        format: Option<OutputFormat>,
    },

    /// Decode a frame given as 25 hex bytes
    Decode {
        /// Frame bytes, e.g. "0F FF 07 ..." or "0fff07..."
        hex: String,

        /// Output format
        #[arg(long, short, default_value = "text")]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(cli.log_level, rust_log.as_deref()))
        .init();

    debug!("SBUS Frame v{} starting...", env!("CARGO_PKG_VERSION"));

    let output = run(cli.command)?;
    println!("{}", output);
    Ok(())
}

/// RUST_LOG directives when set, otherwise the `--log-level` level
fn env_filter(level: tracing::Level, rust_log: Option<&str>) -> EnvFilter {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::default().add_directive(level.into()),
    }
}

fn run(command: Command) -> Result<String> {
    match command {
        Command::Encode { config, format } => {
            let config = match config {
                Some(path) => Config::load(&path)
                    .with_context(|| format!("failed to load {}", path.display()))?,
                None => Config::default(),
            };
            let format = format.unwrap_or(config.output.format);

            let frame = config.frame.to_frame()?;
            info!("Encoding frame (flags {})", frame.flags);
            render_encoded(&frame, format)
        }

        Command::Decode { hex, format } => {
            let data = parse_hex(&hex).context("failed to parse frame bytes")?;
            let frame = decode_slice(&data).context("failed to decode frame")?;
            info!("Decoded frame (flags {})", frame.flags);
            render_decoded(&frame, format)
        }
    }
}

fn render_encoded(frame: &Frame, format: OutputFormat) -> Result<String> {
    let data = encode_frame(frame);

    Ok(match format {
        OutputFormat::Text => to_hex(&data),
        OutputFormat::Binary => data
            .iter()
            .map(|byte| format!("{:08b}", byte))
            .collect::<Vec<_>>()
            .join(" "),
        OutputFormat::Json => serde_json::to_string(&data.to_vec())?,
    })
}

fn render_decoded(frame: &Frame, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => {
            let channels = frame
                .channels
                .iter()
                .map(|value| value.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            format!(
                "channels: {}\nch17: {} ch18: {} frame_lost: {} failsafe: {}",
                channels,
                frame.flags.ch17,
                frame.flags.ch18,
                frame.flags.frame_lost,
                frame.flags.failsafe
            )
        }
        OutputFormat::Binary => format!(
            "channels: {}\nflags: {}",
            format_channels_binary(&frame.channels),
            frame.flags
        ),
        OutputFormat::Json => serde_json::to_string_pretty(frame)?,
    })
}
