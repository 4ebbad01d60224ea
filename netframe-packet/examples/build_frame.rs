//! Example: Building a complete UDP-over-IPv4-over-Ethernet frame
//!
//! This example demonstrates how to use the netframe-packet crate to build
//! one link-layer frame and inspect its wire layout.

use netframe_core::MacAddr;
use netframe_packet::ethernet::EtherType;
use netframe_packet::FrameBuilder;
use std::net::Ipv4Addr;

fn main() {
    let src_mac = MacAddr::new([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
    let dst_mac = MacAddr::new([0x66, 0x77, 0x88, 0x99, 0xAA, 0xBB]);
    let src_ip = Ipv4Addr::new(192, 168, 1, 100);
    let dst_ip = Ipv4Addr::new(192, 168, 1, 1);

    let message = b"Hello Teacher".to_vec();

    let frame = FrameBuilder::new()
        .ethernet(src_mac, dst_mac, EtherType::IPv4)
        .ipv4(src_ip, dst_ip)
        .udp(12345, 80)
        .payload(message)
        .build()
        .expect("failed to build frame");

    println!("Frame built successfully!");
    println!("Total size: {} bytes", frame.len());
    println!("Ethernet header: {:02X?}", &frame[..14]);
    println!("IP version and header length: 0x{:02X}", frame[14]);
    println!(
        "IP total length: {}",
        u16::from_be_bytes([frame[16], frame[17]])
    );
    println!("IP protocol: {} (UDP)", frame[23]);
    println!(
        "UDP source port: {}",
        u16::from_be_bytes([frame[34], frame[35]])
    );
    println!(
        "UDP dest port: {}",
        u16::from_be_bytes([frame[36], frame[37]])
    );
    println!("Payload: {}", String::from_utf8_lossy(&frame[42..]));
}
