use std::process::ExitCode;

use anyhow::Context;
use hello_triangle::{
    app,
    logging::init_logging,
    window::{SdlPlatform, WindowConfig},
};

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = WindowConfig::default();
    let mut platform = SdlPlatform::init().context("failed to start the windowing system")?;

    let frames = app::run(&mut platform, &config)
        .with_context(|| format!("failed to run \"{}\"", config.title))?;
    log::debug!("exiting after {frames} frames");
    Ok(())
}
