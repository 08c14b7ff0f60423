//! Scene command language
//!
//! One command per line, words separated by spaces:
//!
//! ```text
//! object sphere|box
//! light ambient|directional|point
//! set object <id> <field> <value..>
//! set light <id> <field> <value..>
//! get object|light <id> <field>
//! camera position <x> <y> <z>
//! camera move <dx> <dy> <dz>
//! camera viewport <left> <right> <top> <bottom> <front> <depth> <fov>
//! pixelsize <n>
//! ```
//!
//! Object colors are hex (`#RRGGBB` or `0xRRGGBB`), light colors are three
//! channels in `<0;1>`. Lines starting with `#` are comments.
//!
//! The output of `get` can be pasted back after `set <target> <id>`.

use std::fmt;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{digit1, hex_digit1, space0, space1},
    combinator::{map, map_opt, map_res},
    number::complete::float,
    sequence::{preceded, tuple},
    IResult, Parser,
};

use crate::{
    color::{self, Color32},
    error::CommandError,
    scene::{LightField, LightKind, LightValue, ObjectField, ObjectKind, ObjectValue, Scene},
    vector::{point, Vec4},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    CreateObject(ObjectKind),
    CreateLight(LightKind),
    SetObject(usize, ObjectValue),
    SetLight(usize, LightValue),
    GetObject(usize, ObjectField),
    GetLight(usize, LightField),
    CameraPosition(Vec4),
    CameraMove(Vec4),
    CameraViewport {
        left: f32,
        right: f32,
        top: f32,
        bottom: f32,
        front: f32,
        depth: f32,
        fov: f32,
    },
    PixelSize(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Id of new object or light
    Created(usize),
    /// Answer to `get`
    Value(String),
    Done,
}

type Res<'a, T> = IResult<&'a str, T>;

/// Parser preceded by mandatory whitespace
fn arg<'a, O, P>(parser: P) -> impl FnMut(&'a str) -> Res<'a, O>
where
    P: Parser<&'a str, O, nom::error::Error<&'a str>>,
{
    preceded(space1, parser)
}

fn word(input: &str) -> Res<&str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(input)
}

fn index(input: &str) -> Res<usize> {
    map_res(digit1, str::parse::<usize>)(input)
}

fn number(input: &str) -> Res<f32> {
    float(input)
}

fn hex_color(input: &str) -> Res<Color32> {
    preceded(
        alt((tag("#"), tag("0x"), tag("0X"))),
        map_res(hex_digit1, |hex| u32::from_str_radix(hex, 16)),
    )(input)
}

fn vec3(input: &str) -> Res<Vec4> {
    map(tuple((number, arg(number), arg(number))), |(x, y, z)| {
        point(x, y, z)
    })(input)
}

fn object_value(field: ObjectField, input: &str) -> Res<ObjectValue> {
    match field {
        ObjectField::Position => map(arg(vec3), ObjectValue::Position)(input),
        ObjectField::Color => map(arg(hex_color), ObjectValue::Color)(input),
        ObjectField::Albedo => map(arg(number), ObjectValue::Albedo)(input),
        ObjectField::Radius => map(arg(number), ObjectValue::Radius)(input),
        ObjectField::Width => map(arg(number), ObjectValue::Width)(input),
        ObjectField::Height => map(arg(number), ObjectValue::Height)(input),
        ObjectField::Depth => map(arg(number), ObjectValue::Depth)(input),
    }
}

fn light_value(field: LightField, input: &str) -> Res<LightValue> {
    match field {
        LightField::Kind => map(map_opt(arg(word), LightKind::from_name), LightValue::Kind)(input),
        LightField::Position => map(arg(vec3), LightValue::Position)(input),
        LightField::Direction => map(arg(vec3), LightValue::Direction)(input),
        LightField::Color => map(arg(vec3), |c| {
            LightValue::Color(color::new(c.x, c.y, c.z, 1.0))
        })(input),
        LightField::Intensity => map(arg(number), LightValue::Intensity)(input),
        LightField::Range => map(arg(number), LightValue::Range)(input),
    }
}

fn parse_error(line: &str) -> CommandError {
    CommandError::Parse(line.to_string())
}

/// Whole rest of the line has to be consumed
fn finish<O>(line: &str, res: Res<O>) -> Result<O, CommandError> {
    match res {
        Ok((rest, out)) if rest.trim().is_empty() => Ok(out),
        _ => Err(parse_error(line)),
    }
}

fn object_field(name: &str) -> Result<ObjectField, CommandError> {
    ObjectField::from_name(name).ok_or_else(|| CommandError::UnknownField(name.to_string()))
}

fn light_field(name: &str) -> Result<LightField, CommandError> {
    LightField::from_name(name).ok_or_else(|| CommandError::UnknownField(name.to_string()))
}

/// `set` and `get`, `rest` starts after the keyword
fn parse_field_access(line: &str, keyword: &str, rest: &str) -> Result<Command, CommandError> {
    let (rest, (target, id, field)) = tuple((arg(word), arg(index), arg(word)))(rest)
        .map_err(|_| parse_error(line))?;

    let command = match (keyword, target) {
        ("set", "object") => {
            let value = finish(line, object_value(object_field(field)?, rest))?;
            Command::SetObject(id, value)
        }
        ("set", "light") => {
            let value = finish(line, light_value(light_field(field)?, rest))?;
            Command::SetLight(id, value)
        }
        ("get", "object") => {
            let field = object_field(field)?;
            finish(line, Ok((rest, ())))?;
            Command::GetObject(id, field)
        }
        ("get", "light") => {
            let field = light_field(field)?;
            finish(line, Ok((rest, ())))?;
            Command::GetLight(id, field)
        }
        _ => return Err(parse_error(line)),
    };
    Ok(command)
}

fn parse_camera(line: &str, rest: &str) -> Result<Command, CommandError> {
    let (rest, what) = arg(word)(rest).map_err(|_| parse_error(line))?;

    let command = match what {
        "position" => Command::CameraPosition(finish(line, arg(vec3)(rest))?),
        "move" => Command::CameraMove(finish(line, arg(vec3)(rest))?),
        "viewport" => {
            let (left, right, top, bottom, front, depth, fov) = finish(
                line,
                tuple((
                    arg(number),
                    arg(number),
                    arg(number),
                    arg(number),
                    arg(number),
                    arg(number),
                    arg(number),
                ))(rest),
            )?;
            Command::CameraViewport {
                left,
                right,
                top,
                bottom,
                front,
                depth,
                fov,
            }
        }
        _ => return Err(parse_error(line)),
    };
    Ok(command)
}

/// Parse one line. Blank lines and comments give `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (rest, keyword) = preceded(space0, word)(line).map_err(|_| parse_error(line))?;

    let command = match keyword {
        "object" => {
            let kind = finish(line, map_opt(arg(word), ObjectKind::from_name)(rest))?;
            Command::CreateObject(kind)
        }
        "light" => {
            let kind = finish(line, map_opt(arg(word), LightKind::from_name)(rest))?;
            Command::CreateLight(kind)
        }
        "set" | "get" => parse_field_access(line, keyword, rest)?,
        "camera" => parse_camera(line, rest)?,
        "pixelsize" => {
            let size = finish(line, arg(map_res(digit1, str::parse::<u32>))(rest))?;
            Command::PixelSize(size)
        }
        _ => return Err(parse_error(line)),
    };
    Ok(Some(command))
}

pub fn apply(scene: &mut Scene, command: &Command) -> Result<CommandOutput, CommandError> {
    let output = match *command {
        Command::CreateObject(kind) => CommandOutput::Created(scene.create_object(kind)),
        Command::CreateLight(kind) => CommandOutput::Created(scene.create_light(kind)),
        Command::SetObject(id, value) => {
            scene.set_object_field(id, value)?;
            CommandOutput::Done
        }
        Command::SetLight(id, value) => {
            scene.set_light_field(id, value)?;
            CommandOutput::Done
        }
        Command::GetObject(id, field) => {
            CommandOutput::Value(scene.get_object_field(id, field)?.to_string())
        }
        Command::GetLight(id, field) => {
            CommandOutput::Value(scene.get_light_field(id, field)?.to_string())
        }
        Command::CameraPosition(position) => {
            scene.set_camera_position(position);
            CommandOutput::Done
        }
        Command::CameraMove(delta) => {
            scene.move_camera(delta);
            CommandOutput::Done
        }
        Command::CameraViewport {
            left,
            right,
            top,
            bottom,
            front,
            depth,
            fov,
        } => {
            scene.set_camera_viewport(left, right, top, bottom, front, depth, fov);
            CommandOutput::Done
        }
        Command::PixelSize(size) => {
            scene.set_pixel_size(size);
            CommandOutput::Done
        }
    };
    Ok(output)
}

/// Parse and apply one line
pub fn execute(scene: &mut Scene, line: &str) -> Result<CommandOutput, CommandError> {
    match parse(line)? {
        Some(command) => apply(scene, &command),
        None => Ok(CommandOutput::Done),
    }
}

/// Run every line of `script`, failed lines are logged and skipped.
/// Returns number of failed lines.
pub fn run_script(scene: &mut Scene, script: &str) -> usize {
    let mut failed = 0;
    for (number, line) in script.lines().enumerate() {
        match execute(scene, line) {
            Ok(CommandOutput::Value(value)) => log::info!("{}", value),
            Ok(output) => log::trace!("line {}: {:?}", number + 1, output),
            Err(e) => {
                log::warn!("line {}: {}", number + 1, e);
                failed += 1;
            }
        }
    }
    failed
}

impl fmt::Display for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.field().name();
        match self {
            ObjectValue::Position(p) => write!(f, "{} {} {} {}", name, p.x, p.y, p.z),
            ObjectValue::Color(c) => write!(f, "{} #{:06X}", name, c),
            ObjectValue::Albedo(v)
            | ObjectValue::Radius(v)
            | ObjectValue::Width(v)
            | ObjectValue::Height(v)
            | ObjectValue::Depth(v) => write!(f, "{} {}", name, v),
        }
    }
}

impl fmt::Display for LightValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.field().name();
        match self {
            LightValue::Kind(kind) => write!(f, "{} {}", name, kind.name()),
            LightValue::Position(v) | LightValue::Direction(v) | LightValue::Color(v) => {
                write!(f, "{} {} {} {}", name, v.x, v.y, v.z)
            }
            LightValue::Intensity(v) | LightValue::Range(v) => write!(f, "{} {}", name, v),
        }
    }
}

#[cfg(test)]
mod test {

    use crate::{error::SceneError, scene::Shape};

    use super::*;

    #[test]
    fn create_and_set() {
        let mut scene = Scene::new();

        let script = "
            # red ball
            object sphere
            set object 0 position 0 -1 3
            set object 0 color #FF0000
            set object 0 radius 0.5
            object box
            set object 1 width 4
            set object 1 color 0x00ff00
        ";

        assert_eq!(run_script(&mut scene, script), 0);

        let ball = scene.object(0).unwrap();
        assert_eq!(ball.position, point(0.0, -1.0, 3.0));
        assert_eq!(ball.color, 0xFF0000);
        assert_eq!(ball.shape, Shape::Sphere { radius: 0.5 });
        assert_eq!(scene.object(1).unwrap().color, 0x00FF00);
    }

    #[test]
    fn outputs() {
        let mut scene = Scene::new();

        assert_eq!(
            execute(&mut scene, "light point"),
            Ok(CommandOutput::Created(0))
        );
        assert_eq!(
            execute(&mut scene, "set light 0 range 2.5"),
            Ok(CommandOutput::Done)
        );
        assert_eq!(
            execute(&mut scene, "get light 0 range"),
            Ok(CommandOutput::Value("range 2.5".into()))
        );
        assert_eq!(
            execute(&mut scene, "get light 0 type"),
            Ok(CommandOutput::Value("type point".into()))
        );
        assert_eq!(execute(&mut scene, "   "), Ok(CommandOutput::Done));
    }

    #[test]
    fn get_output_is_valid_set_argument() {
        let mut scene = Scene::new();
        run_script(
            &mut scene,
            "object sphere\nset object 0 color #0A0B0C\nset object 0 position 1.5 2 -3",
        );

        for field in ["color", "position", "albedo", "radius"] {
            let value = match execute(&mut scene, &format!("get object 0 {}", field)) {
                Ok(CommandOutput::Value(v)) => v,
                other => panic!("unexpected {:?}", other),
            };
            let before = scene.clone();
            execute(&mut scene, &format!("set object 0 {}", value)).unwrap();
            assert_eq!(scene, before, "{}", value);
        }
    }

    #[test]
    fn unknown_field() {
        let mut scene = Scene::new();
        run_script(&mut scene, "object sphere");
        let before = scene.clone();

        assert_eq!(
            execute(&mut scene, "set object 0 colour #FFFFFF"),
            Err(CommandError::UnknownField("colour".into()))
        );
        assert_eq!(scene, before);
    }

    #[test]
    fn scene_errors_pass_through() {
        let mut scene = Scene::new();
        run_script(&mut scene, "object box\nlight directional");

        assert_eq!(
            execute(&mut scene, "set object 5 albedo 2"),
            Err(CommandError::Scene(SceneError::UnknownObject(5)))
        );
        assert!(matches!(
            execute(&mut scene, "set object 0 radius 2"),
            Err(CommandError::Scene(SceneError::FieldNotApplicable { .. }))
        ));
        assert_eq!(
            execute(&mut scene, "set light 0 direction 0 0 0"),
            Err(CommandError::Scene(SceneError::DegenerateDirection))
        );
    }

    #[test]
    fn malformed_lines() {
        let bad = [
            "object cone",
            "set object 0 position 1 2",
            "set object 0 position 1 2 3 4",
            "set object x radius 1",
            "set camera 0 radius 1",
            "camera zoom 2",
            "pixelsize -1",
            "teleport",
        ];

        for line in bad {
            assert!(
                matches!(parse(line), Err(CommandError::Parse(_))),
                "{}",
                line
            );
        }
    }

    #[test]
    fn camera_commands() {
        let mut scene = Scene::new();

        let failed = run_script(
            &mut scene,
            "camera position 0 1 -5\ncamera move 1 0 0\ncamera viewport -2 2 1 -1 1 50 60\npixelsize 4",
        );

        assert_eq!(failed, 0);
        assert_eq!(scene.get_camera_position(), point(1.0, 1.0, -5.0));
        assert_eq!(scene.camera().viewport.left, -2.0);
        assert_eq!(scene.camera().back, 51.0);
        assert_eq!(scene.camera().fov, 60.0);
        assert_eq!(scene.get_pixel_size(), 4);
    }

    #[test]
    fn script_counts_failures() {
        let mut scene = Scene::new();

        let failed = run_script(&mut scene, "light ambient\nbogus\nset light 0 range 1\nlight ambient");

        assert_eq!(failed, 2);
        assert_eq!(scene.lights().len(), 2);
    }

    #[test]
    fn light_kind_change() {
        let mut scene = Scene::new();

        let failed = run_script(
            &mut scene,
            "light ambient\nset light 0 type directional\nset light 0 color 1 0.5 0",
        );

        assert_eq!(failed, 0);
        assert_eq!(
            scene.light(0).unwrap().color(),
            color::new(1.0, 0.5, 0.0, 1.0)
        );
    }
}
