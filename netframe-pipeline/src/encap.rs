//! Encapsulation pipeline
//!
//! Drives the four layers in strict order — application payload into UDP,
//! UDP into IPv4, IPv4 into Ethernet — producing one contiguous frame
//! buffer. The forward pass itself cannot fail; only persisting the result
//! through the [`FrameStore`] boundary can.

use crate::config::PipelineConfig;
use crate::store::FrameStore;
use netframe_core::Result;
use netframe_packet::application::ApplicationPayload;
use netframe_packet::ethernet::{EtherType, EthernetFrame};
use netframe_packet::ip::{IpProtocol, Ipv4Packet};
use netframe_packet::udp::{UdpDatagram, UdpPort};
use tracing::debug;

/// Encapsulation driver
#[derive(Debug, Clone)]
pub struct Encapsulator {
    config: PipelineConfig,
}

impl Encapsulator {
    /// Create an encapsulator for the given addressing configuration
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// The addressing configuration in use
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Wrap an application payload into a complete link-layer frame buffer
    pub fn encapsulate(&self, payload: &ApplicationPayload) -> Vec<u8> {
        debug!(size = payload.len(), "application layer");

        let datagram = UdpDatagram::new(
            UdpPort::new(self.config.source_port),
            UdpPort::new(self.config.destination_port),
            payload.as_bytes().to_vec(),
        );
        let udp_bytes = datagram.to_bytes();
        debug!(
            src_port = self.config.source_port,
            dst_port = self.config.destination_port,
            len = udp_bytes.len(),
            "transport layer (UDP)"
        );

        let packet = Ipv4Packet::new(
            self.config.source_ip,
            self.config.destination_ip,
            IpProtocol::Udp,
            udp_bytes,
        );
        let total_length = packet.total_length;
        let ip_bytes = packet.to_bytes();
        debug!(
            src = %self.config.source_ip,
            dst = %self.config.destination_ip,
            total_length,
            "network layer (IPv4)"
        );

        let frame = EthernetFrame::new(
            self.config.destination_mac,
            self.config.source_mac,
            EtherType::IPv4,
            ip_bytes,
        );
        let frame_bytes = frame.to_bytes();
        debug!(
            src = %self.config.source_mac,
            dst = %self.config.destination_mac,
            len = frame_bytes.len(),
            "link layer (Ethernet II)"
        );

        frame_bytes
    }

    /// Encapsulate and persist the frame through the store boundary.
    ///
    /// Returns the number of bytes written.
    pub fn encapsulate_to_store(
        &self,
        payload: &ApplicationPayload,
        store: &dyn FrameStore,
        name: &str,
    ) -> Result<usize> {
        let frame = self.encapsulate(payload);
        store.write(name, &frame)?;
        debug!(name, bytes = frame.len(), "frame persisted");
        Ok(frame.len())
    }
}
