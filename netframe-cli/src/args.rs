//! CLI argument parsing

use clap::{Parser, Subcommand};
use netframe_core::MacAddr;
use netframe_pipeline::PipelineConfig;
use std::net::Ipv4Addr;
use std::path::PathBuf;

pub const DEFAULT_MESSAGE: &str = "Hello Teacher";
pub const DEFAULT_FRAME_FILE: &str = "packet.bin";

#[derive(Parser, Debug)]
#[command(name = "netframe")]
#[command(version, about = "Layered Ethernet/IPv4/UDP frame simulator", long_about = None)]
pub struct Cli {
    /// Verbose output (-v, -vv, -vvv for increasing verbosity)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// UDP source port
    #[arg(long, global = true, value_name = "PORT")]
    pub src_port: Option<u16>,

    /// UDP destination port
    #[arg(long, global = true, value_name = "PORT")]
    pub dst_port: Option<u16>,

    /// IPv4 source address
    #[arg(long, global = true, value_name = "ADDR")]
    pub src_ip: Option<Ipv4Addr>,

    /// IPv4 destination address
    #[arg(long, global = true, value_name = "ADDR")]
    pub dst_ip: Option<Ipv4Addr>,

    /// Ethernet source MAC (aa:bb:cc:dd:ee:ff)
    #[arg(long, global = true, value_name = "MAC")]
    pub src_mac: Option<MacAddr>,

    /// Ethernet destination MAC (aa:bb:cc:dd:ee:ff)
    #[arg(long, global = true, value_name = "MAC")]
    pub dst_mac: Option<MacAddr>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encapsulate a message and persist the frame buffer
    Send {
        /// Message to encapsulate
        #[arg(default_value = DEFAULT_MESSAGE)]
        message: String,

        /// Frame file to write
        #[arg(short, long, default_value = DEFAULT_FRAME_FILE)]
        file: PathBuf,
    },

    /// Read a frame buffer and decapsulate it
    Receive {
        /// Frame file to read
        #[arg(short, long, default_value = DEFAULT_FRAME_FILE)]
        file: PathBuf,
    },

    /// Round-trip a message through a frame file and verify it
    Demo {
        /// Message to round-trip
        #[arg(default_value = DEFAULT_MESSAGE)]
        message: String,

        /// Frame file to use
        #[arg(short, long, default_value = DEFAULT_FRAME_FILE)]
        file: PathBuf,
    },
}

impl Cli {
    /// Build the pipeline configuration, applying any overrides on top of
    /// the defaults
    pub fn pipeline_config(&self) -> PipelineConfig {
        let mut config = PipelineConfig::default();
        if let Some(port) = self.src_port {
            config.source_port = port;
        }
        if let Some(port) = self.dst_port {
            config.destination_port = port;
        }
        if let Some(addr) = self.src_ip {
            config.source_ip = addr;
        }
        if let Some(addr) = self.dst_ip {
            config.destination_ip = addr;
        }
        if let Some(mac) = self.src_mac {
            config.source_mac = mac;
        }
        if let Some(mac) = self.dst_mac {
            config.destination_mac = mac;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["netframe", "demo"]);
        let config = cli.pipeline_config();
        assert_eq!(config, PipelineConfig::default());

        match cli.command {
            Commands::Demo { message, file } => {
                assert_eq!(message, DEFAULT_MESSAGE);
                assert_eq!(file, PathBuf::from(DEFAULT_FRAME_FILE));
            }
            _ => panic!("expected demo subcommand"),
        }
    }

    #[test]
    fn test_config_overrides() {
        let cli = Cli::parse_from([
            "netframe",
            "--src-port",
            "4000",
            "--dst-ip",
            "10.0.0.7",
            "--dst-mac",
            "de:ad:be:ef:00:01",
            "send",
            "hi",
        ]);
        let config = cli.pipeline_config();
        assert_eq!(config.source_port, 4000);
        assert_eq!(config.destination_port, 80);
        assert_eq!(config.destination_ip, Ipv4Addr::new(10, 0, 0, 7));
        assert_eq!(
            config.destination_mac,
            MacAddr::new([0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x01])
        );
    }

    #[test]
    fn test_send_message_argument() {
        let cli = Cli::parse_from(["netframe", "send", "custom message", "--file", "out.bin"]);
        match cli.command {
            Commands::Send { message, file } => {
                assert_eq!(message, "custom message");
                assert_eq!(file, PathBuf::from("out.bin"));
            }
            _ => panic!("expected send subcommand"),
        }
    }
}
