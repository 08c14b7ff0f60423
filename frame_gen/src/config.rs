use std::{
    path::PathBuf,
    str::FromStr,
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use raytracer_lib::vector::{point, Vec4};

/// Parse all values of `key`
fn values_of<T>(args: &ArgMatches, key: &str) -> Result<Vec<T>>
where
    T: FromStr,
{
    args.values_of(key)
        .with_context(|| format!("missing `{}`", key))?
        .map(|v| {
            v.parse::<T>()
                .map_err(|_| anyhow!("invalid value `{}` for `{}`", v, key))
        })
        .collect()
}

fn value_of<T>(args: &ArgMatches, key: &str) -> Result<T>
where
    T: FromStr,
{
    values_of(args, key)?
        .into_iter()
        .next()
        .with_context(|| format!("missing `{}`", key))
}

/// Seed used when none was given
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Settings specific to scene variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorConfig {
    /// Premade demo scene
    Demo,
    /// Random spheres and boxes
    Random { objects: usize, seed: u64 },
}

impl GeneratorConfig {
    pub fn from_args(args: &ArgMatches) -> Result<GeneratorConfig> {
        let name: String = value_of(args, "generator")?;
        match name.as_str() {
            "demo" => Ok(GeneratorConfig::Demo),
            "random" => {
                let objects = value_of(args, "objects")?;
                let seed = match args.value_of("seed") {
                    Some(_) => value_of(args, "seed")?,
                    None => time_seed(),
                };
                Ok(GeneratorConfig::Random { objects, seed })
            }
            other => Err(anyhow!("unknown generator `{}`", other)),
        }
    }
}

/// App configuration
/// Config is built from args parsed by `clap`
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub pixel_size: u32,
    pub frames: usize,
    /// Camera movement after every frame
    pub step: Vec4,
    pub generator: GeneratorConfig,
    pub output_prefix: PathBuf,
    /// Hide progress bar
    pub quiet: bool,
    pub log_filter: Option<String>,
}

impl Config {
    pub fn from_args(args: &ArgMatches) -> Result<Config> {
        let size: Vec<usize> = values_of(args, "size")?;
        let step: Vec<f32> = values_of(args, "step")?;

        let (width, height) = match size[..] {
            [w, h] => (w, h),
            _ => return Err(anyhow!("size needs 2 values")),
        };
        let step = match step[..] {
            [x, y, z] => point(x, y, z),
            _ => return Err(anyhow!("step needs 3 values")),
        };

        let output_prefix = args
            .value_of_os("output-prefix")
            .context("missing output prefix")?
            .into();

        Ok(Config {
            width,
            height,
            pixel_size: value_of(args, "pixel-size")?,
            frames: value_of(args, "frames")?,
            step,
            generator: GeneratorConfig::from_args(args)?,
            output_prefix,
            quiet: args.is_present("quiet"),
            log_filter: args.value_of("log").map(String::from),
        })
    }
}

#[cfg(test)]
mod test {

    use crate::args::get_command;

    use super::*;

    fn config_of(argv: &[&str]) -> Config {
        let matches = get_command().try_get_matches_from(argv).unwrap();
        Config::from_args(&matches).unwrap()
    }

    #[test]
    fn defaults() {
        let cfg = config_of(&["frame_gen"]);

        assert_eq!((cfg.width, cfg.height), (320, 240));
        assert_eq!(cfg.pixel_size, 1);
        assert_eq!(cfg.frames, 1);
        assert_eq!(cfg.step, point(0.0, 0.0, 0.1));
        assert_eq!(cfg.generator, GeneratorConfig::Demo);
        assert_eq!(cfg.output_prefix, PathBuf::from("frame"));
        assert!(!cfg.quiet);
    }

    #[test]
    fn random_generator() {
        let cfg = config_of(&[
            "frame_gen",
            "-g",
            "random",
            "--objects",
            "5",
            "--seed",
            "99",
            "--step=-1,0,0.5",
            "-n",
            "3",
            "-o",
            "out/f",
            "-q",
        ]);

        assert_eq!(
            cfg.generator,
            GeneratorConfig::Random {
                objects: 5,
                seed: 99
            }
        );
        assert_eq!(cfg.step, point(-1.0, 0.0, 0.5));
        assert_eq!(cfg.frames, 3);
        assert_eq!(cfg.output_prefix, PathBuf::from("out/f"));
        assert!(cfg.quiet);
    }

    #[test]
    fn unknown_generator_rejected() {
        assert!(get_command()
            .try_get_matches_from(["frame_gen", "-g", "noise"])
            .is_err());
    }
}
