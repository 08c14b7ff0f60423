//! Interactive ray tracer window
//!
//! Launch without arguments for the demo scene, for example:
//! `cargo run --release --bin rt_app -- --size=800,600 -p 4`

mod app;
mod args;
mod config;

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

    app::run(cfg)
}
