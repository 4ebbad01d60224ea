//! Ethernet frame construction and parsing
//!
//! This module provides functionality for building and parsing Ethernet II
//! frames. The emitted wire format is exact: 14 header bytes followed by the
//! payload, with no minimum-size padding (the simulated frame is a byte
//! buffer, not a transmit unit).

use bytes::{BufMut, BytesMut};
use netframe_core::{ethertypes, Error, Layer, MacAddr, Result};
use std::fmt;

/// EtherType values recognized by the simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EtherType {
    /// IPv4 (0x0800)
    IPv4,
    /// ARP (0x0806)
    Arp,
    /// IPv6 (0x86DD)
    Ipv6,
    /// Any other EtherType
    Custom(u16),
}

impl EtherType {
    /// Convert EtherType to its u16 wire value
    pub fn to_u16(self) -> u16 {
        match self {
            EtherType::IPv4 => ethertypes::IPV4,
            EtherType::Arp => ethertypes::ARP,
            EtherType::Ipv6 => ethertypes::IPV6,
            EtherType::Custom(val) => val,
        }
    }

    /// Create EtherType from a u16 wire value
    pub fn from_u16(value: u16) -> Self {
        match value {
            ethertypes::IPV4 => EtherType::IPv4,
            ethertypes::ARP => EtherType::Arp,
            ethertypes::IPV6 => EtherType::Ipv6,
            val => EtherType::Custom(val),
        }
    }
}

impl fmt::Display for EtherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EtherType::IPv4 => write!(f, "IPv4"),
            EtherType::Arp => write!(f, "ARP"),
            EtherType::Ipv6 => write!(f, "IPv6"),
            EtherType::Custom(val) => write!(f, "0x{:04X}", val),
        }
    }
}

/// Ethernet II frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EthernetFrame {
    /// Destination MAC address
    pub destination: MacAddr,
    /// Source MAC address
    pub source: MacAddr,
    /// EtherType field
    pub ethertype: EtherType,
    /// Payload data
    pub payload: Vec<u8>,
}

impl EthernetFrame {
    /// Ethernet header size (dst + src + type)
    pub const HEADER_SIZE: usize = 14;

    /// Create a new Ethernet frame
    pub fn new(
        destination: MacAddr,
        source: MacAddr,
        ethertype: EtherType,
        payload: Vec<u8>,
    ) -> Self {
        EthernetFrame {
            destination,
            source,
            ethertype,
            payload,
        }
    }

    /// Convert the frame to wire bytes: dst(6) ‖ src(6) ‖ ethertype(2) ‖ payload
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buffer = BytesMut::with_capacity(Self::HEADER_SIZE + self.payload.len());

        buffer.put_slice(self.destination.as_bytes());
        buffer.put_slice(self.source.as_bytes());
        buffer.put_u16(self.ethertype.to_u16());
        buffer.put_slice(&self.payload);

        buffer.to_vec()
    }

    /// Parse an Ethernet frame from bytes.
    ///
    /// Everything after the 14-byte header is payload; the EtherType is not
    /// cross-checked against the payload contents.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < Self::HEADER_SIZE {
            return Err(Error::too_short(Layer::Ethernet, Self::HEADER_SIZE, data.len()));
        }

        let destination = MacAddr::from_slice(&data[0..6])?;
        let source = MacAddr::from_slice(&data[6..12])?;
        let ethertype = EtherType::from_u16(u16::from_be_bytes([data[12], data[13]]));
        let payload = data[Self::HEADER_SIZE..].to_vec();

        Ok(EthernetFrame {
            destination,
            source,
            ethertype,
            payload,
        })
    }

    /// Check if the frame carries IPv4
    pub fn is_ipv4(&self) -> bool {
        self.ethertype == EtherType::IPv4
    }
}
