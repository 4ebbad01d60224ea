//! UDP datagram construction and parsing
//!
//! The checksum field is always emitted as zero — the "not computed"
//! sentinel — and is never verified on decode.

use bytes::{BufMut, BytesMut};
use netframe_core::{Error, Layer, Result};

/// UDP port number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UdpPort(pub u16);

impl UdpPort {
    pub fn new(port: u16) -> Self {
        UdpPort(port)
    }

    pub fn to_u16(self) -> u16 {
        self.0
    }
}

impl From<u16> for UdpPort {
    fn from(port: u16) -> Self {
        UdpPort(port)
    }
}

impl From<UdpPort> for u16 {
    fn from(port: UdpPort) -> Self {
        port.0
    }
}

/// UDP datagram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UdpDatagram {
    /// Source port
    pub source_port: UdpPort,
    /// Destination port
    pub destination_port: UdpPort,
    /// Length (header + payload)
    pub length: u16,
    /// Checksum (always 0: not computed)
    pub checksum: u16,
    /// Payload data
    pub payload: Vec<u8>,
}

impl UdpDatagram {
    /// UDP header size in bytes
    pub const HEADER_SIZE: usize = 8;

    /// Create a new UDP datagram.
    ///
    /// The length field is derived from the payload and the checksum is left
    /// at zero.
    pub fn new(source_port: UdpPort, destination_port: UdpPort, payload: Vec<u8>) -> Self {
        let length = (Self::HEADER_SIZE + payload.len()) as u16;

        UdpDatagram {
            source_port,
            destination_port,
            length,
            checksum: 0,
            payload,
        }
    }

    /// Convert the datagram to wire bytes:
    /// srcPort(2) ‖ dstPort(2) ‖ length(2) ‖ checksum(2) ‖ payload
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buffer = BytesMut::with_capacity(Self::HEADER_SIZE + self.payload.len());

        buffer.put_u16(self.source_port.to_u16());
        buffer.put_u16(self.destination_port.to_u16());
        buffer.put_u16(self.length);
        buffer.put_u16(self.checksum);
        buffer.put_slice(&self.payload);

        buffer.to_vec()
    }

    /// Parse a UDP datagram from bytes.
    ///
    /// The payload is truncated to the declared length field; trailing bytes
    /// beyond it (such as link-layer padding) are ignored.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < Self::HEADER_SIZE {
            return Err(Error::too_short(Layer::Udp, Self::HEADER_SIZE, data.len()));
        }

        let source_port = UdpPort::new(u16::from_be_bytes([data[0], data[1]]));
        let destination_port = UdpPort::new(u16::from_be_bytes([data[2], data[3]]));
        let length = u16::from_be_bytes([data[4], data[5]]);
        let checksum = u16::from_be_bytes([data[6], data[7]]);

        if usize::from(length) < Self::HEADER_SIZE || usize::from(length) > data.len() {
            return Err(Error::InvalidLength(length));
        }

        let payload = data[Self::HEADER_SIZE..usize::from(length)].to_vec();

        Ok(UdpDatagram {
            source_port,
            destination_port,
            length,
            checksum,
            payload,
        })
    }

    /// Payload length in bytes
    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }
}
