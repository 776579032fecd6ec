//! Request/response OSC client for reading console faders

use std::io::ErrorKind;
use std::net::UdpSocket;
use std::time::Duration;

use rosc::{OscMessage, OscPacket};
use tracing::{debug, info, trace};

use super::address::{fader_address, parse_fader_address};
use super::types::{fader_value, packet_kind};
use crate::bridge::FaderSource;
use crate::{error::ControlError, transport, Result};

/// Largest datagram a reply may occupy
const MAX_REPLY_SIZE: usize = 65_535;

/// OSC client bound to one mixer
pub struct MixerClient {
    socket: UdpSocket,
    addr: String,
    read_timeout: Option<Duration>,
    recv_buf: Vec<u8>,
}

impl MixerClient {
    /// Connect to a mixer's OSC endpoint
    ///
    /// # Arguments
    /// * `addr` - Mixer address as host:port (e.g. "192.168.1.65:10023")
    /// * `read_timeout` - Upper bound on each reply wait; `None` blocks until a reply arrives
    pub fn connect(addr: &str, read_timeout: Option<Duration>) -> Result<Self> {
        let socket = transport::connect_udp(addr)?;
        socket
            .set_read_timeout(read_timeout)
            .map_err(|e| ControlError::connection(addr, e))?;

        info!(
            "OSC mixer client connected to {} (read timeout: {:?})",
            addr, read_timeout
        );

        Ok(Self {
            socket,
            addr: addr.to_string(),
            read_timeout,
            recv_buf: vec![0u8; MAX_REPLY_SIZE],
        })
    }

    /// Read the current fader level of a 1-based mixer channel
    ///
    /// Sends one argument-less query to `/ch/{nn}/mix/fader` and waits for
    /// exactly one reply datagram. Nothing is retried.
    pub fn query_fader(&mut self, channel: u8) -> Result<f32> {
        let address = fader_address(channel)?;

        let query = OscPacket::Message(OscMessage {
            addr: address.clone(),
            args: vec![],
        });
        let data = rosc::encoder::encode(&query)
            .map_err(|e| ControlError::Query(format!("Failed to encode {}: {:?}", address, e)))?;

        self.socket
            .send(&data)
            .map_err(|e| ControlError::Query(format!("Failed to send {}: {}", address, e)))?;

        let len = self.socket.recv(&mut self.recv_buf).map_err(|e| match e.kind() {
            ErrorKind::WouldBlock | ErrorKind::TimedOut => ControlError::Query(format!(
                "No reply to {} within {:?}",
                address, self.read_timeout
            )),
            _ => ControlError::Query(format!("Failed to read reply to {}: {}", address, e)),
        })?;

        let (_, packet) = rosc::decoder::decode_udp(&self.recv_buf[..len]).map_err(|e| {
            ControlError::Query(format!("Malformed reply to {}: {:?}", address, e))
        })?;

        match packet {
            OscPacket::Message(msg) => {
                if parse_fader_address(&msg.addr) != Some(channel) {
                    debug!("Reply to {} arrived on address {}", address, msg.addr);
                }
                let value = fader_value(&msg.args)?;
                trace!("{} = {}", address, value);
                Ok(value)
            }
            other => Err(ControlError::UnexpectedReplyType(format!(
                "{} in reply to {}",
                packet_kind(&other),
                address
            ))),
        }
    }

    /// Release the connection
    pub fn close(self) {
        info!("OSC mixer client for {} closed", self.addr);
    }
}

impl FaderSource for MixerClient {
    fn query_fader(&mut self, channel: u8) -> Result<f32> {
        MixerClient::query_fader(self, channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_invalid_address() {
        let client = MixerClient::connect("invalid:address", None);
        assert!(matches!(client, Err(ControlError::Connection { .. })));
    }

    #[test]
    fn test_query_rejects_channel_zero() {
        let peer = UdpSocket::bind("127.0.0.1:0").unwrap();
        let mut client =
            MixerClient::connect(&peer.local_addr().unwrap().to_string(), None).unwrap();

        assert!(matches!(client.query_fader(0), Err(ControlError::Query(_))));
    }

    #[test]
    fn test_query_times_out() {
        let peer = UdpSocket::bind("127.0.0.1:0").unwrap();
        let mut client = MixerClient::connect(
            &peer.local_addr().unwrap().to_string(),
            Some(Duration::from_millis(50)),
        )
        .unwrap();

        let result = client.query_fader(1);
        assert!(matches!(result, Err(ControlError::Query(_))));
    }
}
