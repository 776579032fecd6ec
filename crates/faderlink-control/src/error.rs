//! Error types for the fader bridge
use thiserror::Error;

/// Bridge errors
#[derive(Error, Debug)]
pub enum ControlError {
    /// Malformed or inconsistent startup parameter
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A socket could not be resolved, bound or connected
    #[error("Connection to {addr} failed: {source}")]
    Connection {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Mixer query failed (send, read, decode or reply contents)
    #[error("OSC query error: {0}")]
    Query(String),

    /// Mixer replied with something other than a single OSC message
    #[error("Unexpected OSC reply type: {0}")]
    UnexpectedReplyType(String),

    /// Art-Net frame could not be built
    #[error("Art-Net serialization error: {0}")]
    Serialization(String),

    /// Art-Net frame could not be sent
    #[error("Art-Net send error: {0}")]
    Transmit(#[source] std::io::Error),

    /// A channel write landed outside the 512-slot universe
    #[error("DMX slot {position} is outside the universe (0-511)")]
    ChannelOutOfRange { position: usize },
}

impl ControlError {
    pub(crate) fn connection(addr: &str, source: std::io::Error) -> Self {
        ControlError::Connection {
            addr: addr.to_string(),
            source,
        }
    }
}

/// Result type for bridge operations
pub type Result<T> = std::result::Result<T, ControlError>;
