//! DMX output system
//!
//! This module provides DMX512 output via Art-Net.
//!
//! ## Art-Net
//!
//! Art-Net carries DMX over UDP (port 6454). Each `ArtDmx` frame holds a
//! full universe snapshot, addressed by its Net and SubUni fields.
//! - The sender keeps one 512-slot universe and always transmits all of it
//! - Unset slots keep their last value between frames
//! - Sequencing is disabled (sequence 0 on every frame)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use faderlink_control::dmx::ArtNetSender;
//!
//! # fn main() -> faderlink_control::Result<()> {
//! // Universe 0, logical channel 0 lands on slot 5
//! let mut sender = ArtNetSender::connect("2.0.0.1:6454", 0, 5)?;
//!
//! sender.set_channel(0, 255)?;
//! sender.transmit()?;
//! sender.close();
//! # Ok(())
//! # }
//! ```

pub mod artnet;
pub mod universe;

pub use artnet::{ArtDmxFrame, ArtNetSender};
pub use universe::{DmxUniverse, UNIVERSE_SIZE};
