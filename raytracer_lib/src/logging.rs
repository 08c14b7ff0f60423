//! Logger setup for the binaries
//!
//! The library itself only talks to the `log` facade.

use std::sync::Once;

use log::LevelFilter;

/// `filter` uses `env_logger` syntax, e.g. `"info"` or
/// `"raytracer_lib=debug,rt_app=info"`.
/// Without it `RUST_LOG` is consulted, then `info` is used.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    /// Prefix lines with a timestamp
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            timestamps: true,
        }
    }
}

static INIT: Once = Once::new();

/// Install global logger, later calls do nothing
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(LevelFilter::Info);
            }
        }

        if !config.timestamps {
            builder.format_timestamp(None);
        }

        // another logger may already be installed, e.g. by a test harness
        if builder.try_init().is_err() {
            log::warn!("logger already installed, keeping it");
            return;
        }

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn init_twice() {
        init_logging(LoggingConfig {
            filter: Some("warn".into()),
            timestamps: false,
        });
        init_logging(LoggingConfig::default());
    }
}
