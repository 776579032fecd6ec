//! Art-Net protocol implementation (ArtDmx only)
//!
//! Art-Net is a UDP-based protocol for transmitting DMX512 over Ethernet.

use std::net::UdpSocket;

use tracing::{info, trace};

use super::universe::{DmxUniverse, UNIVERSE_SIZE};
use crate::bridge::FrameSink;
use crate::{error::ControlError, transport, Result};

/// Packet ID that opens every Art-Net packet
pub const ARTNET_ID: &[u8; 8] = b"Art-Net\0";
/// OpCode for OpDmx
pub const OP_DMX: u16 = 0x5000;
/// Protocol revision carried in ArtDmx
pub const PROTOCOL_VERSION: u16 = 14;
/// ArtDmx header length, up to the first data byte
pub const HEADER_LEN: usize = 18;
/// Sequence value sent on every frame; 0 tells nodes sequencing is disabled
pub const SEQUENCE_DISABLED: u8 = 0;

const MAX_NET: u8 = 0x7F;

/// One ArtDmx frame, borrowing its slot data
#[derive(Debug, Clone, Copy)]
pub struct ArtDmxFrame<'a> {
    pub sequence: u8,
    pub physical: u8,
    pub sub_uni: u8,
    pub net: u8,
    pub data: &'a [u8],
}

impl ArtDmxFrame<'_> {
    /// Serialize to wire format
    ///
    /// Data length must be even and within 2-512; Net is 7 bits.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let length = self.data.len();
        if !(2..=UNIVERSE_SIZE).contains(&length) || length % 2 != 0 {
            return Err(ControlError::Serialization(format!(
                "ArtDmx data length must be an even number in 2-512, got {}",
                length
            )));
        }
        if self.net > MAX_NET {
            return Err(ControlError::Serialization(format!(
                "ArtDmx net {} exceeds {}",
                self.net, MAX_NET
            )));
        }

        let mut packet = vec![0u8; HEADER_LEN + length];

        // Header: "Art-Net\0"
        packet[0..8].copy_from_slice(ARTNET_ID);

        // OpCode (little-endian)
        packet[8..10].copy_from_slice(&OP_DMX.to_le_bytes());

        // Protocol version (big-endian)
        packet[10..12].copy_from_slice(&PROTOCOL_VERSION.to_be_bytes());

        packet[12] = self.sequence;
        packet[13] = self.physical;

        // Port-Address: SubUni, then Net
        packet[14] = self.sub_uni;
        packet[15] = self.net;

        // Length (big-endian)
        packet[16..18].copy_from_slice(&(length as u16).to_be_bytes());

        packet[HEADER_LEN..].copy_from_slice(self.data);

        Ok(packet)
    }
}

/// Art-Net sender holding one universe of DMX data
pub struct ArtNetSender {
    socket: UdpSocket,
    addr: String,
    universe: u8,
    channel_offset: u16,
    channels: DmxUniverse,
}

impl ArtNetSender {
    /// Connect to an Art-Net node
    ///
    /// # Arguments
    /// * `addr` - Node address as host:port (e.g. "2.0.0.1:6454"); broadcast addresses are allowed
    /// * `universe` - Universe carried in the SubUni field of every frame
    /// * `channel_offset` - Added to every logical channel before it is written
    pub fn connect(addr: &str, universe: u8, channel_offset: u16) -> Result<Self> {
        let socket = transport::connect_udp(addr)?;
        socket
            .set_broadcast(true)
            .map_err(|e| ControlError::connection(addr, e))?;

        info!(
            "Art-Net sender connected to {} (universe {}, channel offset {})",
            addr, universe, channel_offset
        );

        Ok(Self {
            socket,
            addr: addr.to_string(),
            universe,
            channel_offset,
            channels: DmxUniverse::new(),
        })
    }

    /// Write a logical channel (0-based) at `index + channel_offset`
    pub fn set_channel(&mut self, index: usize, value: u8) -> Result<()> {
        self.channels.set(index + self.channel_offset as usize, value)
    }

    /// Send the whole universe as one ArtDmx frame
    pub fn transmit(&mut self) -> Result<()> {
        let packet = self.build_artnet_packet()?;

        let sent = self.socket.send(&packet).map_err(ControlError::Transmit)?;
        if sent != packet.len() {
            return Err(ControlError::Transmit(std::io::Error::new(
                std::io::ErrorKind::WriteZero,
                format!("sent {} of {} bytes", sent, packet.len()),
            )));
        }

        trace!("Sent Art-Net DMX packet for universe {}", self.universe);

        Ok(())
    }

    /// Build the ArtDmx packet for the current buffer
    pub fn build_artnet_packet(&self) -> Result<Vec<u8>> {
        ArtDmxFrame {
            sequence: SEQUENCE_DISABLED,
            physical: 0,
            sub_uni: self.universe,
            net: 0,
            data: self.channels.as_slice(),
        }
        .to_bytes()
    }

    /// Current slot values
    pub fn channels(&self) -> &DmxUniverse {
        &self.channels
    }

    /// Get the universe
    pub fn universe(&self) -> u8 {
        self.universe
    }

    /// Release the connection
    pub fn close(self) {
        info!("Art-Net sender for {} closed", self.addr);
    }
}

impl FrameSink for ArtNetSender {
    fn set_channel(&mut self, index: usize, value: u8) -> Result<()> {
        ArtNetSender::set_channel(self, index, value)
    }

    fn transmit(&mut self) -> Result<()> {
        ArtNetSender::transmit(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_sender(universe: u8, channel_offset: u16) -> (ArtNetSender, UdpSocket) {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        let addr = receiver.local_addr().unwrap().to_string();
        let sender = ArtNetSender::connect(&addr, universe, channel_offset).unwrap();
        (sender, receiver)
    }

    #[test]
    fn test_artnet_packet_structure() {
        let (sender, _receiver) = local_sender(0, 0);
        let packet = sender.build_artnet_packet().unwrap();

        // Check header
        assert_eq!(&packet[0..8], b"Art-Net\0");

        // Check OpCode (little-endian)
        assert_eq!(packet[8], 0x00);
        assert_eq!(packet[9], 0x50);

        // Check protocol version (big-endian)
        assert_eq!(packet[10], 0);
        assert_eq!(packet[11], 14);

        // Check length (big-endian)
        assert_eq!(packet[16], 0x02);
        assert_eq!(packet[17], 0x00);

        // Total packet size
        assert_eq!(packet.len(), 18 + 512);
    }

    #[test]
    fn test_universe_in_sub_uni() {
        let (sender, _receiver) = local_sender(7, 0);
        let packet = sender.build_artnet_packet().unwrap();

        assert_eq!(packet[14], 7);
        assert_eq!(packet[15], 0);
        assert_eq!(sender.universe(), 7);
    }

    #[test]
    fn test_sequence_stays_constant() {
        let (mut sender, _receiver) = local_sender(0, 0);

        let packet1 = sender.build_artnet_packet().unwrap();
        sender.transmit().unwrap();
        sender.transmit().unwrap();
        let packet2 = sender.build_artnet_packet().unwrap();

        assert_eq!(packet1[12], SEQUENCE_DISABLED);
        assert_eq!(packet2[12], SEQUENCE_DISABLED);
    }

    #[test]
    fn test_channel_offset_applied() {
        let (mut sender, _receiver) = local_sender(0, 5);
        sender.set_channel(0, 10).unwrap();

        assert_eq!(sender.channels().get(5), Some(10));
        assert_eq!(sender.channels().get(0), Some(0));

        let packet = sender.build_artnet_packet().unwrap();
        assert_eq!(packet[HEADER_LEN + 5], 10);
        assert_eq!(packet[HEADER_LEN], 0);
    }

    #[test]
    fn test_set_channel_out_of_range() {
        let (mut sender, _receiver) = local_sender(0, 500);

        sender.set_channel(11, 1).unwrap();
        let result = sender.set_channel(12, 1);
        assert!(matches!(
            result,
            Err(ControlError::ChannelOutOfRange { position: 512 })
        ));
    }

    #[test]
    fn test_frame_rejects_odd_length() {
        let data = [0u8; 3];
        let frame = ArtDmxFrame {
            sequence: 0,
            physical: 0,
            sub_uni: 0,
            net: 0,
            data: &data,
        };
        assert!(matches!(
            frame.to_bytes(),
            Err(ControlError::Serialization(_))
        ));
    }

    #[test]
    fn test_frame_rejects_empty_and_oversized() {
        let empty: [u8; 0] = [];
        let oversized = [0u8; 514];

        for data in [&empty[..], &oversized[..]] {
            let frame = ArtDmxFrame {
                sequence: 0,
                physical: 0,
                sub_uni: 0,
                net: 0,
                data,
            };
            assert!(frame.to_bytes().is_err());
        }
    }

    #[test]
    fn test_frame_rejects_wide_net() {
        let data = [0u8; 2];
        let frame = ArtDmxFrame {
            sequence: 0,
            physical: 0,
            sub_uni: 0,
            net: 0x80,
            data: &data,
        };
        assert!(matches!(
            frame.to_bytes(),
            Err(ControlError::Serialization(_))
        ));
    }

    #[test]
    fn test_short_frame_length_field() {
        let data = [1u8, 2, 3, 4];
        let packet = ArtDmxFrame {
            sequence: 3,
            physical: 1,
            sub_uni: 2,
            net: 1,
            data: &data,
        }
        .to_bytes()
        .unwrap();

        assert_eq!(packet.len(), HEADER_LEN + 4);
        assert_eq!(&packet[12..18], &[3, 1, 2, 1, 0, 4]);
        assert_eq!(&packet[HEADER_LEN..], &data);
    }

    #[test]
    fn test_invalid_target() {
        let sender = ArtNetSender::connect("invalid:address", 0, 0);
        assert!(matches!(sender, Err(ControlError::Connection { .. })));
    }
}
