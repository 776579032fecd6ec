//! FaderLink - mirrors mixing console faders onto Art-Net
//!
//! Reads fader levels over OSC on a fixed cycle and republishes them as DMX
//! intensity channels. Any connection, query or transmit failure is fatal;
//! a supervisor is expected to restart the process.

#![warn(missing_docs)]

mod cli;
mod logging_setup;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use faderlink_control::{shutdown_channel, ArtNetSender, FaderBridge, MixerClient};
use tracing::{error, info};

use crate::cli::Cli;
use crate::logging_setup::LogConfig;

fn main() -> ExitCode {
    // Usage errors exit with code 2 here
    let cli = Cli::parse();

    if let Err(e) = logging_setup::init(&LogConfig {
        level: cli.log_level.clone(),
    }) {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.bridge_config();
    config
        .validate(cli.channel_offset)
        .context("Invalid channel layout")?;

    let (trigger, shutdown) = shutdown_channel();
    ctrlc::set_handler(move || {
        // ctrlc does not report which signal fired, so SIGINT and SIGTERM log alike
        info!("Received interrupt/termination signal, exiting after the current cycle");
        trigger.trigger();
    })
    .context("Failed to install signal handler")?;

    let mut mixer = MixerClient::connect(&cli.mixer_addr, cli.read_timeout())
        .with_context(|| format!("Failed to connect to mixer at {}", cli.mixer_addr))?;

    let mut artnet = ArtNetSender::connect(&cli.artnet_addr, cli.universe, cli.channel_offset)
        .with_context(|| format!("Failed to connect to Art-Net node at {}", cli.artnet_addr))?;

    let result = FaderBridge::new(config).run(&mut mixer, &mut artnet, &shutdown);

    artnet.close();
    mixer.close();

    let stats = result.context("Bridge stopped")?;
    info!("Shut down cleanly after {} frames", stats.cycles);

    Ok(())
}
