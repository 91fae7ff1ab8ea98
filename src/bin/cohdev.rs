// CLASSIFICATION: COMMUNITY
// Filename: cohdev.rs v0.2
// Author: Lukas Bower
// Date Modified: 2027-09-04

//! Smoke-test CLI for the cohdev device.
//!
//! Runs the classic chardev ritual in-process: register, read the
//! greeting, write a payload, read it back, tear down.

use clap::{Parser, Subcommand, ValueEnum};
use cohdev::{DeviceConfig, DeviceRegistry, WritePolicy};

#[derive(Parser)]
#[command(about = "Byte device smoke utilities")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Clone, Copy, ValueEnum)]
enum Policy {
    Replace,
    Append,
}

impl From<Policy> for WritePolicy {
    fn from(p: Policy) -> Self {
        match p {
            Policy::Replace => WritePolicy::Replace,
            Policy::Append => WritePolicy::Append,
        }
    }
}

#[derive(Subcommand)]
enum Cmd {
    /// Register a device, echo a payload through it, read it back
    Smoke {
        /// Payload to write after the greeting is drained
        #[arg(default_value = "echo through the device")]
        payload: String,
        /// Write policy for the device
        #[arg(long, value_enum, default_value = "replace")]
        policy: Policy,
    },
    /// Register a device and print its bookkeeping
    Stat,
}

fn cmd_smoke(payload: String, policy: Policy) -> anyhow::Result<()> {
    let mut registry = DeviceRegistry::new();
    let config = DeviceConfig {
        policy: policy.into(),
        ..DeviceConfig::default()
    };
    let device = registry.register(config)?;

    let mut session = device.open()?;
    let greeting = session.read_buf(1024)?;
    println!("greeting: {}", String::from_utf8_lossy(&greeting));

    let written = session.write_buf(payload.as_bytes())?;
    println!("wrote {written} of {} bytes", payload.len());

    // fresh session, fresh cursor
    let mut reader = device.open()?;
    let back = reader.read_buf(1024)?;
    println!("read back: {}", String::from_utf8_lossy(&back));

    reader.release();
    session.release();
    registry.unregister()?;
    Ok(())
}

fn cmd_stat() -> anyhow::Result<()> {
    let mut registry = DeviceRegistry::new();
    let device = registry.register(DeviceConfig::default())?;
    println!("node: {}", device.node());
    println!("major: {}", device.major());
    println!("policy: {:?}", device.policy());
    println!("capacity: {}", device.capacity()?);
    println!("valid bytes: {}", device.valid_len()?);
    registry.unregister()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Smoke { payload, policy } => cmd_smoke(payload, policy)?,
        Cmd::Stat => cmd_stat()?,
    }
    Ok(())
}
