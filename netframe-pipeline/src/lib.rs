//! Encapsulation and decapsulation pipelines for netframe
//!
//! This crate drives the netframe-packet codecs end to end: the
//! [`Encapsulator`] wraps an application payload into a complete
//! Ethernet/IPv4/UDP frame buffer, and the [`Decapsulator`] walks a frame
//! buffer back down to the payload, validating each layer's selector field
//! before descending. Frames cross the process boundary through the
//! [`FrameStore`] seam.

pub mod config;
pub mod decap;
pub mod encap;
pub mod store;

// Re-export commonly used types
pub use config::PipelineConfig;
pub use decap::{Decapsulator, ParsedPacket};
pub use encap::Encapsulator;
pub use store::{FileStore, FrameStore, MemoryStore};
