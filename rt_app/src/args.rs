//! Argument parsing and validation
//! Uses library `clap`

use clap::{Arg, Command, ValueHint};

use crate::app::defaults;

pub fn is_positive_number(num: &str) -> Result<(), String> {
    match num.parse::<u32>() {
        Ok(n) if n > 0 => Ok(()),
        Ok(_) => Err("Number must be greater than 0".into()),
        Err(_) => Err("Number required".into()),
    }
}

pub fn is_pixel_size(num: &str) -> Result<(), String> {
    is_positive_number(num)?;
    match num.parse::<u32>() {
        Ok(n) if n <= defaults::MAX_PIXEL_SIZE => Ok(()),
        _ => Err(format!(
            "Pixel size must be in range <{};{}>",
            defaults::MIN_PIXEL_SIZE,
            defaults::MAX_PIXEL_SIZE
        )),
    }
}

pub fn is_whole_number(num: &str) -> Result<(), String> {
    num.parse::<u64>()
        .map(|_| ())
        .map_err(|_| "Number required".into())
}

pub fn get_command<'a>() -> Command<'a> {
    Command::new("rt_app")
        .version("0.1.0")
        .about("Interactive ray tracer")
        .after_help(
            "Keys: W/S/A/D/Q/E move, +/- pixel size, Left/Right light intensity,\n\
             1-4 toggle ambient/directional/point/shadows, P screenshot, Esc quit",
        )
        .arg(
            Arg::new("size")
                .help("Window size in pixels")
                .long("size")
                .number_of_values(2)
                .value_names(&["WIDTH", "HEIGHT"])
                .use_value_delimiter(true)
                .require_value_delimiter(true)
                .require_equals(true)
                .default_values(&[defaults::WIDTH_STR, defaults::HEIGHT_STR])
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("pixel-size")
                .help("Initial edge of the block traced with one ray")
                .long("pixel-size")
                .short('p')
                .value_name("N")
                .default_value(defaults::PIXEL_SIZE_STR)
                .validator(is_pixel_size),
        )
        .arg(
            Arg::new("delay")
                .help("Pause after every frame, in milliseconds")
                .long("delay")
                .short('d')
                .value_name("MS")
                .default_value(defaults::FRAME_DELAY_MS_STR)
                .validator(is_whole_number),
        )
        .arg(
            Arg::new("script")
                .help("Scene commands run before the first frame")
                .long("script")
                .short('s')
                .value_name("FILE")
                .value_hint(ValueHint::FilePath)
                .allow_invalid_utf8(true),
        )
        .arg(
            Arg::new("empty")
                .help("Start with an empty scene instead of the demo scene")
                .long("empty"),
        )
        .arg(
            Arg::new("screenshot-prefix")
                .help("Screenshots are saved as <PREFIX>_<N>.shot")
                .long("screenshot-prefix")
                .value_name("PREFIX")
                .default_value(defaults::SCREENSHOT_PREFIX)
                .value_hint(ValueHint::FilePath)
                .allow_invalid_utf8(true),
        )
        .arg(
            Arg::new("log")
                .help("Log filter, e.g. `debug` or `raytracer_lib=debug`")
                .long("log")
                .value_name("FILTER"),
        )
}
