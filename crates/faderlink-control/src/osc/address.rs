//! OSC address space for mixer faders
//!
//! Fader levels live at `/ch/{nn}/mix/fader`, with the input channel number
//! zero-padded to two digits.

use crate::{error::ControlError, Result};

/// Highest channel number a two-digit fader address can carry
pub const MAX_FADER_CHANNEL: u8 = 99;

/// Build the fader address for a 1-based mixer channel
pub fn fader_address(channel: u8) -> Result<String> {
    if channel == 0 || channel > MAX_FADER_CHANNEL {
        return Err(ControlError::Query(format!(
            "Mixer channel {} is outside 1-{}",
            channel, MAX_FADER_CHANNEL
        )));
    }

    Ok(format!("/ch/{:02}/mix/fader", channel))
}

/// Parse a fader address back into its mixer channel
///
/// Returns `None` for anything that is not exactly `/ch/{nn}/mix/fader`.
pub fn parse_fader_address(address: &str) -> Option<u8> {
    let parts: Vec<&str> = address.strip_prefix('/')?.split('/').collect();

    match parts.as_slice() {
        ["ch", number, "mix", "fader"]
            if number.len() == 2 && number.bytes().all(|b| b.is_ascii_digit()) =>
        {
            let channel: u8 = number.parse().ok()?;
            (channel >= 1).then_some(channel)
        }
        _ => None,
    }
}
