//! Error types for netframe

use std::fmt;
use thiserror::Error;

/// Result type alias for netframe operations
pub type Result<T> = std::result::Result<T, Error>;

/// Protocol layer a decode error originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Ethernet II link layer
    Ethernet,
    /// IPv4 network layer
    Ipv4,
    /// UDP transport layer
    Udp,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::Ethernet => write!(f, "Ethernet"),
            Layer::Ipv4 => write!(f, "IPv4"),
            Layer::Udp => write!(f, "UDP"),
        }
    }
}

/// Main error type for netframe
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error from the frame sink/source boundary
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Buffer smaller than the layer's fixed header size
    #[error("{layer} buffer too short: need at least {needed} bytes, got {got}")]
    TooShort {
        layer: Layer,
        needed: usize,
        got: usize,
    },

    /// IP version nibble is not 4
    #[error("invalid IP version: expected 4, got {0}")]
    InvalidVersion(u8),

    /// IHL implies a header shorter than 20 bytes or longer than the buffer
    #[error("invalid IP header length: {0} bytes")]
    InvalidHeaderLength(usize),

    /// IP total length field inconsistent with the buffer
    #[error("invalid IP total length: {declared} declared, {available} bytes available")]
    InvalidTotalLength { declared: u16, available: usize },

    /// UDP length field inconsistent with the buffer
    #[error("invalid UDP length field: {0}")]
    InvalidLength(u16),

    /// Frame does not carry IPv4
    #[error("unsupported EtherType 0x{0:04X}, expected IPv4 (0x0800)")]
    UnsupportedEtherType(u16),

    /// Packet does not carry UDP
    #[error("unsupported IP protocol {0}, expected UDP (17)")]
    UnsupportedProtocol(u8),

    /// Address slice of the wrong size
    #[error("invalid {kind} address length: expected {expected} bytes, got {got}")]
    InvalidAddressLength {
        kind: &'static str,
        expected: usize,
        got: usize,
    },

    /// MAC address text that does not parse
    #[error("invalid MAC address '{0}'")]
    InvalidMacAddr(String),

    /// Frame construction error (layer ordering misuse)
    #[error("frame construction error: {0}")]
    Construction(String),
}

impl Error {
    /// Create a too-short error for the given layer
    pub fn too_short(layer: Layer, needed: usize, got: usize) -> Self {
        Error::TooShort { layer, needed, got }
    }

    /// Create a frame construction error with a custom message
    pub fn construction<S: Into<String>>(msg: S) -> Self {
        Error::Construction(msg.into())
    }
}
