//! Offline frame generator
//!
//! Renders a scene into a series of screenshot files, moving the camera between frames.
//! Example: `cargo run --release --bin frame_gen -- -g random --seed 3 -n 10 -o out/frame`

mod args;
mod config;
mod generate;

use anyhow::Result;
use raytracer_lib::logging::{init_logging, LoggingConfig};

use crate::{args::get_command, config::Config};

pub fn main() -> Result<()> {
    let args = get_command().get_matches();
    let cfg = Config::from_args(&args)?;

    init_logging(LoggingConfig {
        filter: cfg.log_filter.clone(),
        ..LoggingConfig::default()
    });
    log::debug!("{:?}", cfg);

    let written = generate::generate_frames(&cfg)?;
    log::info!("Wrote {} frames", written.len());

    Ok(())
}
