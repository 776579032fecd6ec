//! FaderLink Control - console faders to Art-Net
//!
//! This crate mirrors the fader levels of a digital mixing console onto DMX
//! channels:
//! - **OSC**: request/response client reading `/ch/{nn}/mix/fader`
//! - **DMX**: Art-Net `ArtDmx` output of one 512-slot universe
//! - **Bridge**: the poll-scale-transmit loop tying both together
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use faderlink_control::{shutdown_channel, ArtNetSender, BridgeConfig, FaderBridge, MixerClient};
//! use std::time::Duration;
//!
//! # fn main() -> faderlink_control::Result<()> {
//! let mut mixer = MixerClient::connect("192.168.1.65:10023", Some(Duration::from_secs(1)))?;
//! let mut artnet = ArtNetSender::connect("2.0.0.1:6454", 0, 0)?;
//! let (_trigger, shutdown) = shutdown_channel();
//!
//! FaderBridge::new(BridgeConfig::default()).run(&mut mixer, &mut artnet, &shutdown)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`osc`] - Mixer query client
//! - [`dmx`] - Art-Net sender and universe buffer
//! - [`bridge`] - Translation loop
//! - [`shutdown`] - Cooperative cancellation
//! - [`error`] - Error types

#![allow(missing_docs)]

/// Error types
pub mod error;

/// Translation loop
pub mod bridge;
/// DMX output (Art-Net)
pub mod dmx;
/// OSC mixer client
pub mod osc;
/// Cooperative cancellation
pub mod shutdown;
/// Connected UDP sockets
pub mod transport;

// Re-exports
pub use bridge::{scale_fader, BridgeConfig, BridgeStats, FaderBridge, FaderSource, FrameSink};
pub use dmx::{ArtNetSender, DmxUniverse};
pub use error::{ControlError, Result};
pub use osc::MixerClient;
pub use shutdown::{shutdown_channel, Shutdown, ShutdownTrigger};
