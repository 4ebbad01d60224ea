//! Frame construction and parsing library for netframe
//!
//! This crate provides the codecs for one link-layer frame carrying a UDP
//! datagram: an opaque application payload wrapped in UDP, wrapped in IPv4,
//! wrapped in an Ethernet II frame. Each codec is bidirectional — it can
//! emit canonical wire bytes and reconstruct structured fields from them,
//! validating as it goes.
//!
//! # Modules
//!
//! - [`application`] - Opaque application-layer payload
//! - [`udp`] - UDP datagram construction and parsing
//! - [`ip`] - IPv4 packet construction, parsing, and header checksumming
//! - [`ethernet`] - Ethernet II frame construction and parsing
//! - [`checksum`] - Internet checksum (RFC 1071) utilities
//! - [`builder`] - High-level fluent API for frame construction
//!
//! # Quick Start
//!
//! ```rust
//! use std::net::Ipv4Addr;
//! use netframe_core::MacAddr;
//! use netframe_packet::FrameBuilder;
//! use netframe_packet::ethernet::EtherType;
//!
//! let frame = FrameBuilder::new()
//!     .ethernet(
//!         MacAddr::new([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]),
//!         MacAddr::new([0x66, 0x77, 0x88, 0x99, 0xAA, 0xBB]),
//!         EtherType::IPv4,
//!     )
//!     .ipv4(Ipv4Addr::new(192, 168, 1, 100), Ipv4Addr::new(192, 168, 1, 1))
//!     .udp(12345, 80)
//!     .payload(b"Hello Teacher".to_vec())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(frame.len(), 14 + 20 + 8 + 13);
//! ```
//!
//! For more control, the individual codec types can be used directly:
//!
//! ```rust
//! use netframe_packet::ethernet::{EtherType, EthernetFrame};
//! use netframe_core::MacAddr;
//!
//! let frame = EthernetFrame::new(
//!     MacAddr::broadcast(),
//!     MacAddr::new([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]),
//!     EtherType::IPv4,
//!     vec![0x01, 0x02, 0x03, 0x04],
//! );
//! let bytes = frame.to_bytes();
//! let parsed = EthernetFrame::from_bytes(&bytes).unwrap();
//! assert_eq!(parsed, frame);
//! ```

pub mod application;
pub mod builder;
pub mod checksum;
pub mod ethernet;
pub mod ip;
pub mod udp;

// Re-export commonly used types for convenience
pub use application::ApplicationPayload;
pub use builder::FrameBuilder;
pub use checksum::internet_checksum;
pub use ethernet::{EtherType, EthernetFrame};
pub use ip::{IpProtocol, Ipv4Packet};
pub use udp::{UdpDatagram, UdpPort};
