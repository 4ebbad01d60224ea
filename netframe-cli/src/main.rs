//! netframe binary entry point

mod args;

use args::{Cli, Commands};
use clap::Parser;
use netframe_core::Result;
use netframe_packet::ApplicationPayload;
use netframe_pipeline::{Decapsulator, Encapsulator, FileStore};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.pipeline_config();
    let store = FileStore::default();

    match &cli.command {
        Commands::Send { message, file } => {
            let payload = ApplicationPayload::from_text(message);
            let encapsulator = Encapsulator::new(config);
            let written =
                encapsulator.encapsulate_to_store(&payload, &store, &store_name(file))?;
            println!(
                "Encapsulated {} payload bytes into a {written}-byte frame at {}",
                payload.len(),
                file.display()
            );
        }
        Commands::Receive { file } => {
            let parsed = Decapsulator::new().decapsulate_from_store(&store, &store_name(file))?;
            print_summary(&parsed);
        }
        Commands::Demo { message, file } => {
            let payload = ApplicationPayload::from_text(message);
            let encapsulator = Encapsulator::new(config);
            let written =
                encapsulator.encapsulate_to_store(&payload, &store, &store_name(file))?;
            println!("Encapsulated \"{message}\" into a {written}-byte frame");

            let parsed = Decapsulator::new().decapsulate_from_store(&store, &store_name(file))?;
            print_summary(&parsed);

            if parsed.payload.as_bytes() == message.as_bytes() {
                println!("Round-trip OK: messages match");
            } else {
                println!("Round-trip FAILED: messages differ");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn print_summary(parsed: &netframe_pipeline::ParsedPacket) {
    println!(
        "Ethernet  {} -> {}  ({})",
        parsed.ethernet.source, parsed.ethernet.destination, parsed.ethernet.ethertype
    );
    println!(
        "IPv4      {} -> {}  total_length={} ttl={}",
        parsed.ipv4.source, parsed.ipv4.destination, parsed.ipv4.total_length, parsed.ipv4.ttl
    );
    println!(
        "UDP       {} -> {}  length={}",
        parsed.udp.source_port.to_u16(),
        parsed.udp.destination_port.to_u16(),
        parsed.udp.length
    );
    println!("Message   {}", parsed.payload.to_text());
}

fn store_name(file: &Path) -> String {
    file.to_string_lossy().into_owned()
}

fn init_tracing(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}
