//! Error types
//!
//! None of these abort a frame. Scene and command errors are reported and
//! the offending operation is skipped.

use thiserror::Error;

use crate::scene::{LightKind, ObjectKind};

#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("no object with id {0}")]
    UnknownObject(usize),
    #[error("no light with id {0}")]
    UnknownLight(usize),
    #[error("field `{field}` does not exist on {kind}")]
    FieldNotApplicable { field: &'static str, kind: String },
    #[error("direction vector has zero length")]
    DegenerateDirection,
}

impl SceneError {
    pub(crate) fn object_field(field: &'static str, kind: ObjectKind) -> SceneError {
        SceneError::FieldNotApplicable {
            field,
            kind: format!("{} object", kind.name()),
        }
    }

    pub(crate) fn light_field(field: &'static str, kind: LightKind) -> SceneError {
        SceneError::FieldNotApplicable {
            field,
            kind: format!("{} light", kind.name()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ScreenshotError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("bad format tag {0:#06x}")]
    BadTag(u16),
    #[error("file is truncated")]
    Truncated,
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },
    #[error("pixel count does not match dimensions")]
    SizeMismatch,
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("cannot parse command `{0}`")]
    Parse(String),
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error(transparent)]
    Scene(#[from] SceneError),
}
