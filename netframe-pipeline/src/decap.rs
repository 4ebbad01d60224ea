//! Decapsulation pipeline
//!
//! Walks a frame buffer back down through the layers in reverse order:
//! Ethernet, then IPv4, then UDP, then the application payload. Each
//! descent is gated by the outer layer's selector field, and the first
//! failure aborts the whole pass — no partial result is returned.

use crate::store::FrameStore;
use netframe_core::{Error, Result};
use netframe_packet::application::ApplicationPayload;
use netframe_packet::ethernet::EthernetFrame;
use netframe_packet::ip::Ipv4Packet;
use netframe_packet::udp::UdpDatagram;
use tracing::debug;

/// Result of a full decapsulation pass.
///
/// All four layers are retained for inspection, not just the terminal
/// payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPacket {
    /// The link-layer frame
    pub ethernet: EthernetFrame,
    /// The network-layer packet carried by the frame
    pub ipv4: Ipv4Packet,
    /// The transport-layer datagram carried by the packet
    pub udp: UdpDatagram,
    /// The recovered application payload
    pub payload: ApplicationPayload,
}

/// Decapsulation driver
#[derive(Debug, Clone, Copy, Default)]
pub struct Decapsulator;

impl Decapsulator {
    /// Create a decapsulator
    pub fn new() -> Self {
        Self
    }

    /// Unwrap a frame buffer down to the application payload.
    ///
    /// The selector gates fire before the next layer's bytes are touched:
    /// a non-IPv4 EtherType rejects the frame without inspecting the
    /// Ethernet payload, and a non-UDP protocol rejects the packet without
    /// inspecting the IPv4 payload.
    pub fn decapsulate(&self, data: &[u8]) -> Result<ParsedPacket> {
        debug!(bytes = data.len(), "starting decapsulation");

        let ethernet = EthernetFrame::from_bytes(data)?;
        debug!(
            src = %ethernet.source,
            dst = %ethernet.destination,
            ethertype = %ethernet.ethertype,
            "link layer (Ethernet II)"
        );
        if !ethernet.is_ipv4() {
            return Err(Error::UnsupportedEtherType(ethernet.ethertype.to_u16()));
        }

        let ipv4 = Ipv4Packet::from_bytes(&ethernet.payload)?;
        debug!(
            src = %ipv4.source,
            dst = %ipv4.destination,
            total_length = ipv4.total_length,
            ttl = ipv4.ttl,
            protocol = ipv4.protocol.to_u8(),
            "network layer (IPv4)"
        );
        if !ipv4.is_udp() {
            return Err(Error::UnsupportedProtocol(ipv4.protocol.to_u8()));
        }

        let udp = UdpDatagram::from_bytes(&ipv4.payload)?;
        debug!(
            src_port = udp.source_port.to_u16(),
            dst_port = udp.destination_port.to_u16(),
            length = udp.length,
            "transport layer (UDP)"
        );

        let payload = ApplicationPayload::new(udp.payload.clone());
        debug!(size = payload.len(), "application layer recovered");

        Ok(ParsedPacket {
            ethernet,
            ipv4,
            udp,
            payload,
        })
    }

    /// Read a frame from the store boundary and decapsulate it
    pub fn decapsulate_from_store(
        &self,
        store: &dyn FrameStore,
        name: &str,
    ) -> Result<ParsedPacket> {
        let data = store.read(name)?;
        debug!(name, bytes = data.len(), "frame loaded");
        self.decapsulate(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PipelineConfig;
    use crate::encap::Encapsulator;
    use crate::store::MemoryStore;
    use netframe_core::{Layer, MacAddr};
    use netframe_packet::ethernet::EtherType;
    use netframe_packet::ip::IpProtocol;
    use std::net::Ipv4Addr;

    fn encapsulate(message: &str) -> Vec<u8> {
        Encapsulator::new(PipelineConfig::default())
            .encapsulate(&ApplicationPayload::from_text(message))
    }

    #[test]
    fn test_roundtrip_recovers_payload() {
        let frame = encapsulate("Hello Teacher");
        let parsed = Decapsulator::new().decapsulate(&frame).unwrap();

        assert_eq!(parsed.payload.to_text(), "Hello Teacher");
        assert_eq!(parsed.ipv4.total_length, 41);
        assert_eq!(parsed.udp.length, 21);
        assert_eq!(parsed.ethernet.source.to_string(), "00:11:22:33:44:55");
    }

    #[test]
    fn test_roundtrip_empty_payload() {
        let frame = encapsulate("");
        let parsed = Decapsulator::new().decapsulate(&frame).unwrap();
        assert!(parsed.payload.is_empty());
    }

    #[test]
    fn test_roundtrip_arbitrary_config() {
        let config = PipelineConfig {
            source_port: 9,
            destination_port: 65535,
            source_ip: Ipv4Addr::new(10, 1, 2, 3),
            destination_ip: Ipv4Addr::new(172, 16, 0, 1),
            source_mac: MacAddr::broadcast(),
            destination_mac: MacAddr::zero(),
        };
        let payload = ApplicationPayload::new(vec![0x00, 0xFF, 0x7F, 0x80]);

        let frame = Encapsulator::new(config.clone()).encapsulate(&payload);
        let parsed = Decapsulator::new().decapsulate(&frame).unwrap();

        assert_eq!(parsed.payload, payload);
        assert_eq!(parsed.udp.source_port.to_u16(), config.source_port);
        assert_eq!(parsed.ipv4.destination, config.destination_ip);
        assert_eq!(parsed.ethernet.destination, config.destination_mac);
    }

    #[test]
    fn test_decode_is_idempotent() {
        let frame = encapsulate("same twice");
        let decap = Decapsulator::new();

        let first = decap.decapsulate(&frame).unwrap();
        let second = decap.decapsulate(&frame).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_truncated_frame_rejected() {
        let err = Decapsulator::new().decapsulate(&[0u8; 10]).unwrap_err();
        assert!(matches!(
            err,
            Error::TooShort {
                layer: Layer::Ethernet,
                ..
            }
        ));
    }

    #[test]
    fn test_non_ipv4_frame_gated_before_payload_inspection() {
        // ARP EtherType over garbage bytes that would not parse as IPv4:
        // the gate must fire without touching them
        let frame = EthernetFrame::new(
            MacAddr::zero(),
            MacAddr::broadcast(),
            EtherType::Arp,
            vec![0xFF; 5],
        );

        let err = Decapsulator::new().decapsulate(&frame.to_bytes()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedEtherType(0x0806)));
    }

    #[test]
    fn test_non_udp_packet_gated_before_payload_inspection() {
        // TCP protocol over bytes too short for any UDP header
        let packet = Ipv4Packet::new(
            Ipv4Addr::new(10, 0, 0, 1),
            Ipv4Addr::new(10, 0, 0, 2),
            IpProtocol::Tcp,
            vec![0xAA, 0xBB],
        );
        let frame = EthernetFrame::new(
            MacAddr::zero(),
            MacAddr::broadcast(),
            EtherType::IPv4,
            packet.to_bytes(),
        );

        let err = Decapsulator::new().decapsulate(&frame.to_bytes()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedProtocol(6)));
    }

    #[test]
    fn test_corrupt_inner_layer_aborts() {
        let mut frame = encapsulate("payload");
        // Corrupt the UDP length field (bytes 38-39 of the frame)
        frame[38] = 0xFF;
        frame[39] = 0xFF;

        let err = Decapsulator::new().decapsulate(&frame).unwrap_err();
        assert!(matches!(err, Error::InvalidLength(0xFFFF)));
    }

    #[test]
    fn test_roundtrip_through_store() {
        let store = MemoryStore::new();
        let encap = Encapsulator::new(PipelineConfig::default());
        let payload = ApplicationPayload::from_text("stored message");

        encap
            .encapsulate_to_store(&payload, &store, "frame.bin")
            .unwrap();
        let parsed = Decapsulator::new()
            .decapsulate_from_store(&store, "frame.bin")
            .unwrap();

        assert_eq!(parsed.payload, payload);
    }

    #[test]
    fn test_missing_frame_surfaces_io_error() {
        let store = MemoryStore::new();
        let err = Decapsulator::new()
            .decapsulate_from_store(&store, "absent.bin")
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
