use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;

fn parse_value<T>(args: &ArgMatches, key: &str) -> Result<T>
where
    T: std::str::FromStr,
{
    let raw = args
        .value_of(key)
        .ok_or_else(|| anyhow!("missing value for `{}`", key))?;
    raw.parse()
        .map_err(|_| anyhow!("invalid value `{}` for `{}`", raw, key))
}

/// App configuration
/// Config is built from args parsed by `clap`
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub pixel_size: u32,
    pub frame_delay_ms: u64,
    /// Command script run on startup
    pub script: Option<PathBuf>,
    /// Skip the demo scene
    pub empty_scene: bool,
    pub screenshot_prefix: PathBuf,
    pub log_filter: Option<String>,
}

impl Config {
    pub fn from_args(args: &ArgMatches) -> Result<Config> {
        let size: Vec<usize> = args
            .values_of("size")
            .context("missing window size")?
            .map(|v| v.parse::<usize>())
            .collect::<Result<_, _>>()
            .context("window size must be two numbers")?;
        let (width, height) = match size[..] {
            [w, h] => (w, h),
            _ => return Err(anyhow!("window size must be two numbers")),
        };

        let screenshot_prefix = args
            .value_of_os("screenshot-prefix")
            .context("missing screenshot prefix")?
            .into();

        Ok(Config {
            width,
            height,
            pixel_size: parse_value(args, "pixel-size")?,
            frame_delay_ms: parse_value(args, "delay")?,
            script: args.value_of_os("script").map(PathBuf::from),
            empty_scene: args.is_present("empty"),
            screenshot_prefix,
            log_filter: args.value_of("log").map(String::from),
        })
    }
}

#[cfg(test)]
mod test {

    use crate::{app::defaults, args::get_command};

    use super::*;

    fn config_of(argv: &[&str]) -> Config {
        let matches = get_command().try_get_matches_from(argv).unwrap();
        Config::from_args(&matches).unwrap()
    }

    #[test]
    fn defaults_apply() {
        let cfg = config_of(&["rt_app"]);

        assert_eq!((cfg.width, cfg.height), (defaults::WIDTH, defaults::HEIGHT));
        assert_eq!(cfg.pixel_size, defaults::PIXEL_SIZE);
        assert_eq!(cfg.frame_delay_ms, defaults::FRAME_DELAY_MS);
        assert_eq!(cfg.script, None);
        assert!(!cfg.empty_scene);
        assert_eq!(cfg.log_filter, None);
    }

    #[test]
    fn explicit_values() {
        let cfg = config_of(&[
            "rt_app",
            "--size=640,480",
            "-p",
            "8",
            "--delay",
            "0",
            "--script",
            "scene.txt",
            "--empty",
            "--log",
            "debug",
        ]);

        assert_eq!((cfg.width, cfg.height), (640, 480));
        assert_eq!(cfg.pixel_size, 8);
        assert_eq!(cfg.frame_delay_ms, 0);
        assert_eq!(cfg.script, Some(PathBuf::from("scene.txt")));
        assert!(cfg.empty_scene);
        assert_eq!(cfg.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn bad_pixel_size_rejected() {
        assert!(get_command()
            .try_get_matches_from(["rt_app", "-p", "0"])
            .is_err());
    }
}
