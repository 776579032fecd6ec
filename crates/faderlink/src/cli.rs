//! Command-line interface

use std::time::Duration;

use clap::Parser;
use faderlink_control::bridge::{BridgeConfig, DEFAULT_CHANNEL_COUNT};

#[derive(Parser, Debug)]
#[command(name = "faderlink")]
#[command(version)]
#[command(about = "Mirror mixing console faders onto Art-Net DMX channels")]
#[command(after_help = "Example: faderlink 192.168.1.65:10023 2.0.0.1:6454 0 0")]
pub struct Cli {
    /// Mixer OSC endpoint (host:port)
    #[arg(value_name = "MIXER_ADDR")]
    pub mixer_addr: String,

    /// Art-Net node (host:port)
    #[arg(value_name = "ARTNET_ADDR")]
    pub artnet_addr: String,

    /// Art-Net universe (0-255)
    #[arg(value_name = "UNIVERSE")]
    pub universe: u8,

    /// Added to every channel before it is written into the universe
    #[arg(value_name = "CHANNEL_OFFSET")]
    pub channel_offset: u16,

    /// Number of mixer channels to mirror, starting at channel 1
    #[arg(long, default_value_t = DEFAULT_CHANNEL_COUNT, value_parser = clap::value_parser!(u8).range(1..=99))]
    pub channels: u8,

    /// Pause between frames in milliseconds
    #[arg(long, default_value_t = 16)]
    pub interval_ms: u64,

    /// How long to wait for each mixer reply; 0 waits forever
    #[arg(long, default_value_t = 1000)]
    pub read_timeout_ms: u64,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn bridge_config(&self) -> BridgeConfig {
        BridgeConfig {
            channel_count: self.channels,
            interval: Duration::from_millis(self.interval_ms),
        }
    }

    pub fn read_timeout(&self) -> Option<Duration> {
        (self.read_timeout_ms > 0).then(|| Duration::from_millis(self.read_timeout_ms))
    }
}
