//! Argument parsing and validation
//! Uses library `clap`

use std::ffi::OsStr;

use clap::{Arg, Command, ValueHint};

// up to 32bit value
pub fn is_positive_number(num: &str) -> Result<(), String> {
    match num.parse::<u32>() {
        Ok(n) if n > 0 => Ok(()),
        Ok(_) => Err("Number must be greater than 0".into()),
        Err(_) => Err("Number required".into()),
    }
}

pub fn is_float_number(num: &str) -> Result<(), String> {
    match num.parse::<f32>() {
        Ok(n) if n.is_finite() => Ok(()),
        _ => Err("Finite number required".into()),
    }
}

pub fn is_seed(num: &str) -> Result<(), String> {
    num.parse::<u64>()
        .map(|_| ())
        .map_err(|_| "Seed must be a non-negative 64bit number".into())
}

pub fn get_command<'a>() -> Command<'a> {
    Command::new("frame_gen")
        .version("0.1.0")
        .about("Renders scenes to screenshot files")
        .arg(
            Arg::new("size")
                .help("Frame size in pixels")
                .long("size")
                .number_of_values(2)
                .value_names(&["WIDTH", "HEIGHT"])
                .use_value_delimiter(true)
                .require_value_delimiter(true)
                .require_equals(true)
                .default_values(&["320", "240"])
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("pixel-size")
                .help("Edge of the block traced with one ray")
                .long("pixel-size")
                .short('p')
                .value_name("N")
                .default_value("1")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("frames")
                .help("Number of frames")
                .long("frames")
                .short('n')
                .value_name("N")
                .default_value("1")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("step")
                .help("Camera movement between frames")
                .long("step")
                .number_of_values(3)
                .value_names(&["X", "Y", "Z"])
                .use_value_delimiter(true)
                .require_value_delimiter(true)
                .require_equals(true)
                .allow_hyphen_values(true)
                .default_values(&["0", "0", "0.1"])
                .validator(is_float_number),
        )
        .arg(
            Arg::new("generator")
                .help("Scene to render")
                .long("generator")
                .short('g')
                .takes_value(true)
                .value_name("NAME")
                .default_value("demo")
                .possible_values(["demo", "random"]),
        )
        .arg(
            Arg::new("objects")
                .help("Number of objects of the random scene")
                .long("objects")
                .value_name("N")
                .default_value("16")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("seed")
                .help("Seed for RNG, leave out for random seed")
                .long("seed")
                .value_name("SEED")
                .validator(is_seed),
        )
        .arg(
            Arg::new("output-prefix")
                .help("Frames are saved as <PREFIX>_<N>.shot")
                .long("output-prefix")
                .short('o')
                .value_name("PREFIX")
                .allow_invalid_utf8(true)
                .value_hint(ValueHint::FilePath)
                .default_value_os(OsStr::new("frame")),
        )
        .arg(
            Arg::new("quiet")
                .help("Do not draw progress bar")
                .long("quiet")
                .short('q'),
        )
        .arg(
            Arg::new("log")
                .help("Log filter, e.g. `debug`")
                .long("log")
                .value_name("FILTER"),
        )
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn validators() {
        assert!(is_float_number("-0.5").is_ok());
        assert!(is_float_number("inf").is_err());
        assert!(is_seed("0").is_ok());
        assert!(is_seed("-1").is_err());
    }

    #[test]
    fn command_is_valid() {
        get_command().debug_assert();
    }
}
