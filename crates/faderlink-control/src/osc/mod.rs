//! OSC side of the bridge
//!
//! Console faders are read with a synchronous query per channel: an
//! argument-less message to the fader's address is answered by the console
//! with a message on the same address carrying the current level as a float.
//!
//! ```rust,no_run
//! use faderlink_control::osc::MixerClient;
//! use std::time::Duration;
//!
//! # fn main() -> faderlink_control::Result<()> {
//! let mut mixer = MixerClient::connect("192.168.1.65:10023", Some(Duration::from_secs(1)))?;
//! let level = mixer.query_fader(7)?; // /ch/07/mix/fader
//! println!("channel 7 at {}", level);
//! mixer.close();
//! # Ok(())
//! # }
//! ```

pub mod address;
pub mod client;
pub mod types;

pub use address::{fader_address, parse_fader_address, MAX_FADER_CHANNEL};
pub use client::MixerClient;
