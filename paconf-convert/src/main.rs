use anyhow::{Context, Result};
use clap::Parser;
use paconf_convert::convert::DeviceType;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{default_output, Cli, Device};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output(&cli.input));
    let device = match cli.device {
        Device::Paloalto => DeviceType::PaloAlto,
        Device::Fortigate => DeviceType::FortiGate,
    };

    device
        .convert(&cli.input, &output)
        .with_context(|| format!("failed to convert {}", cli.input.display()))
}
