//! 512-slot DMX universe buffer

use crate::{error::ControlError, Result};

/// Number of slots in one DMX512 universe
pub const UNIVERSE_SIZE: usize = 512;

/// Slot values of one universe
///
/// Writes land in place and persist until overwritten; nothing is cleared
/// between frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DmxUniverse {
    slots: [u8; UNIVERSE_SIZE],
}

impl Default for DmxUniverse {
    fn default() -> Self {
        Self {
            slots: [0u8; UNIVERSE_SIZE],
        }
    }
}

impl DmxUniverse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a slot (0-based)
    pub fn set(&mut self, position: usize, value: u8) -> Result<()> {
        let slot = self
            .slots
            .get_mut(position)
            .ok_or(ControlError::ChannelOutOfRange { position })?;
        *slot = value;
        Ok(())
    }

    /// Read a slot (0-based)
    pub fn get(&self, position: usize) -> Option<u8> {
        self.slots.get(position).copied()
    }

    /// All 512 slots
    pub fn as_slice(&self) -> &[u8; UNIVERSE_SIZE] {
        &self.slots
    }
}
