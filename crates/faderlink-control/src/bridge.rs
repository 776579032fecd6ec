//! Fader-to-DMX translation loop
//!
//! Each cycle reads every configured fader from a [`FaderSource`], scales the
//! levels to DMX bytes, writes them into a [`FrameSink`] and transmits one
//! frame. Any error ends the loop immediately; there is no partial frame and
//! no retry.

use std::time::Duration;

use tracing::{debug, info};

use crate::osc::MAX_FADER_CHANNEL;
use crate::shutdown::Shutdown;
use crate::{dmx::UNIVERSE_SIZE, error::ControlError, Result};

/// Channels mirrored by default (one full input bank)
pub const DEFAULT_CHANNEL_COUNT: u8 = 32;
/// Default pause between cycles
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(16);

/// Highest byte [`scale_fader`] produces
pub const MAX_LEVEL: u8 = 254;

/// Something that can report a fader level
pub trait FaderSource {
    /// Level of a 1-based mixer channel, normally in 0.0-1.0
    fn query_fader(&mut self, channel: u8) -> Result<f32>;
}

/// Something that accumulates slot values and sends them as one frame
pub trait FrameSink {
    /// Write a 0-based logical channel
    fn set_channel(&mut self, index: usize, value: u8) -> Result<()>;

    /// Send the complete frame
    fn transmit(&mut self) -> Result<()>;
}

/// Scale a fader level into a DMX byte
///
/// Multiplies by 255 and truncates, giving 255 evenly sized steps from
/// 0 to 254. A fully open fader (1.0) maps to 254, not 255. Levels outside
/// 0.0-1.0 are clamped first; NaN maps to 0.
pub fn scale_fader(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }

    let level = (value.clamp(0.0, 1.0) * 255.0) as u8;
    level.min(MAX_LEVEL)
}

/// Loop parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Faders read per cycle, mixer channels 1..=channel_count
    pub channel_count: u8,
    /// Pause after each transmitted frame
    pub interval: Duration,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            channel_count: DEFAULT_CHANNEL_COUNT,
            interval: DEFAULT_INTERVAL,
        }
    }
}

impl BridgeConfig {
    /// Check that every channel fits both the mixer address space and the
    /// universe once `channel_offset` is applied
    pub fn validate(&self, channel_offset: u16) -> Result<()> {
        if self.channel_count == 0 || self.channel_count > MAX_FADER_CHANNEL {
            return Err(ControlError::InvalidArgument(format!(
                "Channel count must be 1-{}, got {}",
                MAX_FADER_CHANNEL, self.channel_count
            )));
        }

        let last = channel_offset as usize + self.channel_count as usize;
        if last > UNIVERSE_SIZE {
            return Err(ControlError::InvalidArgument(format!(
                "Channel offset {} with {} channels exceeds the {}-slot universe",
                channel_offset, self.channel_count, UNIVERSE_SIZE
            )));
        }

        Ok(())
    }
}

/// Counters reported when the loop stops gracefully
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BridgeStats {
    /// Completed cycles (each one transmitted frame)
    pub cycles: u64,
}

/// The translation loop
#[derive(Debug, Clone)]
pub struct FaderBridge {
    config: BridgeConfig,
}

impl FaderBridge {
    pub fn new(config: BridgeConfig) -> Self {
        Self { config }
    }

    /// Query, scale and write every channel, then transmit once
    pub fn run_cycle<S, K>(&self, source: &mut S, sink: &mut K) -> Result<()>
    where
        S: FaderSource + ?Sized,
        K: FrameSink + ?Sized,
    {
        for index in 0..self.config.channel_count {
            let channel = index + 1;
            let level = source.query_fader(channel)?;
            sink.set_channel(index as usize, scale_fader(level))?;
        }

        sink.transmit()
    }

    /// Run cycles until `shutdown` is requested or a step fails
    ///
    /// Shutdown is honoured between cycles only; a cycle in progress always
    /// completes or fails first.
    pub fn run<S, K>(
        &self,
        source: &mut S,
        sink: &mut K,
        shutdown: &Shutdown,
    ) -> Result<BridgeStats>
    where
        S: FaderSource + ?Sized,
        K: FrameSink + ?Sized,
    {
        info!(
            "Bridge running: {} channels every {:?}",
            self.config.channel_count, self.config.interval
        );

        let mut stats = BridgeStats::default();

        loop {
            self.run_cycle(source, sink)?;
            stats.cycles += 1;
            debug!("Cycle {} transmitted", stats.cycles);

            if shutdown.is_requested() || shutdown.wait(self.config.interval) {
                break;
            }
        }

        info!("Bridge stopped after {} cycles", stats.cycles);
        Ok(stats)
    }
}
