//! Frame builder for constructing layered frames with a fluent API
//!
//! This module provides a high-level builder interface for composing a
//! complete frame from layer 2 (Ethernet) to layer 4 (UDP).

use crate::ethernet::{EtherType, EthernetFrame};
use crate::ip::{IpProtocol, Ipv4Packet};
use crate::udp::{UdpDatagram, UdpPort};
use netframe_core::{Error, MacAddr, Result};
use std::net::Ipv4Addr;

#[derive(Debug, Clone)]
enum Layer2 {
    Ethernet {
        src: MacAddr,
        dst: MacAddr,
        ethertype: EtherType,
    },
}

#[derive(Debug, Clone)]
enum Layer3 {
    Ipv4 {
        src: Ipv4Addr,
        dst: Ipv4Addr,
        ttl: u8,
        identification: u16,
    },
}

#[derive(Debug, Clone, Copy)]
enum Layer4 {
    Udp { src_port: u16, dst_port: u16 },
}

/// Fluent builder for layered frames
///
/// # Examples
///
/// ```
/// use std::net::Ipv4Addr;
/// use netframe_core::MacAddr;
/// use netframe_packet::FrameBuilder;
/// use netframe_packet::ethernet::EtherType;
///
/// let frame = FrameBuilder::new()
///     .ethernet(
///         MacAddr::new([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]),
///         MacAddr::new([0x66, 0x77, 0x88, 0x99, 0xAA, 0xBB]),
///         EtherType::IPv4,
///     )
///     .ipv4(Ipv4Addr::new(192, 168, 1, 100), Ipv4Addr::new(192, 168, 1, 1))
///     .udp(12345, 80)
///     .payload(b"hello".to_vec())
///     .build()
///     .unwrap();
/// ```
pub struct FrameBuilder {
    layer2: Option<Layer2>,
    layer3: Option<Layer3>,
    layer4: Option<Layer4>,
    payload: Vec<u8>,
}

impl FrameBuilder {
    /// Create a new frame builder
    pub fn new() -> Self {
        FrameBuilder {
            layer2: None,
            layer3: None,
            layer4: None,
            payload: Vec::new(),
        }
    }

    /// Add an Ethernet layer
    pub fn ethernet(mut self, src: MacAddr, dst: MacAddr, ethertype: EtherType) -> Self {
        self.layer2 = Some(Layer2::Ethernet {
            src,
            dst,
            ethertype,
        });
        self
    }

    /// Add an IPv4 layer
    pub fn ipv4(mut self, src: Ipv4Addr, dst: Ipv4Addr) -> Self {
        self.layer3 = Some(Layer3::Ipv4 {
            src,
            dst,
            ttl: Ipv4Packet::DEFAULT_TTL,
            identification: 0,
        });
        self
    }

    /// Set the TTL for the IPv4 layer.
    ///
    /// Must be called after `ipv4()`.
    pub fn ttl(mut self, new_ttl: u8) -> Self {
        if let Some(Layer3::Ipv4 { ref mut ttl, .. }) = self.layer3 {
            *ttl = new_ttl;
        }
        self
    }

    /// Set the identification field for the IPv4 layer.
    ///
    /// Must be called after `ipv4()`.
    pub fn identification(mut self, id: u16) -> Self {
        if let Some(Layer3::Ipv4 {
            ref mut identification,
            ..
        }) = self.layer3
        {
            *identification = id;
        }
        self
    }

    /// Add a UDP layer
    pub fn udp(mut self, src_port: u16, dst_port: u16) -> Self {
        self.layer4 = Some(Layer4::Udp { src_port, dst_port });
        self
    }

    /// Set the payload data
    pub fn payload(mut self, data: Vec<u8>) -> Self {
        self.payload = data;
        self
    }

    /// Build the complete frame, innermost layer first.
    ///
    /// # Errors
    ///
    /// Returns an error if the layer configuration is invalid (layer 4
    /// without layer 3, or a missing layer 2).
    pub fn build(self) -> Result<Vec<u8>> {
        let mut frame_data = self.payload;

        if let Some(Layer4::Udp { src_port, dst_port }) = self.layer4 {
            if self.layer3.is_none() {
                return Err(Error::construction("UDP layer requires an IPv4 layer"));
            }
            let datagram =
                UdpDatagram::new(UdpPort::new(src_port), UdpPort::new(dst_port), frame_data);
            frame_data = datagram.to_bytes();
        }

        if let Some(Layer3::Ipv4 {
            src,
            dst,
            ttl,
            identification,
        }) = self.layer3
        {
            let protocol = match self.layer4 {
                Some(Layer4::Udp { .. }) => IpProtocol::Udp,
                None => IpProtocol::Custom(0),
            };

            let packet = Ipv4Packet::new(src, dst, protocol, frame_data)
                .with_ttl(ttl)
                .with_identification(identification);
            frame_data = packet.to_bytes();
        }

        let Some(Layer2::Ethernet {
            src,
            dst,
            ethertype,
        }) = self.layer2
        else {
            return Err(Error::construction("Ethernet layer is required"));
        };

        let frame = EthernetFrame::new(dst, src, ethertype, frame_data);
        Ok(frame.to_bytes())
    }
}

impl Default for FrameBuilder {
    fn default() -> Self {
        Self::new()
    }
}
