use crate::{
    color::{self, RGBA},
    error::SceneError,
    vector::{self, point, Vec4},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    Ambient,
    Directional,
    Point,
}

impl LightKind {
    pub const ALL: [LightKind; 3] = [LightKind::Ambient, LightKind::Directional, LightKind::Point];

    pub fn from_name(name: &str) -> Option<LightKind> {
        LightKind::ALL.into_iter().find(|k| k.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            LightKind::Ambient => "ambient",
            LightKind::Directional => "directional",
            LightKind::Point => "point",
        }
    }
}

/// Light source
///
/// Directions are always unit vectors, they point *from* the light.
/// Colors have channels in `<0;1>`.
#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    /// Flat light floor
    Ambient { intensity: f32 },
    Directional {
        direction: Vec4,
        color: RGBA,
        intensity: f32,
    },
    /// Linear falloff, reaches zero at `range`
    Point {
        position: Vec4,
        color: RGBA,
        intensity: f32,
        range: f32,
    },
}

/// Field tags of [`Light`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightField {
    Kind,
    Position,
    Direction,
    Color,
    Intensity,
    Range,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightValue {
    Kind(LightKind),
    Position(Vec4),
    Direction(Vec4),
    Color(RGBA),
    Intensity(f32),
    Range(f32),
}

impl LightField {
    pub const ALL: [LightField; 6] = [
        LightField::Kind,
        LightField::Position,
        LightField::Direction,
        LightField::Color,
        LightField::Intensity,
        LightField::Range,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LightField::Kind => "type",
            LightField::Position => "position",
            LightField::Direction => "direction",
            LightField::Color => "color",
            LightField::Intensity => "intensity",
            LightField::Range => "range",
        }
    }

    pub fn from_name(name: &str) -> Option<LightField> {
        LightField::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl LightValue {
    pub fn field(&self) -> LightField {
        match self {
            LightValue::Kind(_) => LightField::Kind,
            LightValue::Position(_) => LightField::Position,
            LightValue::Direction(_) => LightField::Direction,
            LightValue::Color(_) => LightField::Color,
            LightValue::Intensity(_) => LightField::Intensity,
            LightValue::Range(_) => LightField::Range,
        }
    }
}

pub fn default_direction() -> Vec4 {
    point(0.0, -1.0, 0.0)
}

impl Light {
    /// Intensity 1, range 1, pointing down, white
    pub fn new(kind: LightKind) -> Light {
        match kind {
            LightKind::Ambient => Light::Ambient { intensity: 1.0 },
            LightKind::Directional => Light::Directional {
                direction: default_direction(),
                color: color::white(),
                intensity: 1.0,
            },
            LightKind::Point => Light::Point {
                position: point(0.0, 0.0, 0.0),
                color: color::white(),
                intensity: 1.0,
                range: 1.0,
            },
        }
    }

    pub fn kind(&self) -> LightKind {
        match self {
            Light::Ambient { .. } => LightKind::Ambient,
            Light::Directional { .. } => LightKind::Directional,
            Light::Point { .. } => LightKind::Point,
        }
    }

    pub fn intensity(&self) -> f32 {
        match self {
            Light::Ambient { intensity }
            | Light::Directional { intensity, .. }
            | Light::Point { intensity, .. } => *intensity,
        }
    }

    /// Ambient light has no color, reads as white
    pub fn color(&self) -> RGBA {
        match self {
            Light::Ambient { .. } => color::white(),
            Light::Directional { color, .. } | Light::Point { color, .. } => *color,
        }
    }

    /// Turn into another kind.
    /// Intensity and color survive, the rest gets defaults.
    fn convert(&self, kind: LightKind) -> Light {
        let intensity = self.intensity();
        let color = self.color();
        match Light::new(kind) {
            Light::Ambient { .. } => Light::Ambient { intensity },
            Light::Directional { direction, .. } => Light::Directional {
                direction,
                color,
                intensity,
            },
            Light::Point {
                position, range, ..
            } => Light::Point {
                position,
                color,
                intensity,
                range,
            },
        }
    }

    /// Overwrite one field, unknown field for this kind leaves light unchanged
    pub fn set_field(&mut self, value: LightValue) -> Result<(), SceneError> {
        let kind = self.kind();
        let field = value.field();
        match (value, &mut *self) {
            (LightValue::Kind(new_kind), light) => {
                if new_kind != kind {
                    *light = light.convert(new_kind);
                }
            }
            (LightValue::Intensity(v), Light::Ambient { intensity })
            | (LightValue::Intensity(v), Light::Directional { intensity, .. })
            | (LightValue::Intensity(v), Light::Point { intensity, .. }) => *intensity = v,
            (LightValue::Color(c), Light::Directional { color, .. })
            | (LightValue::Color(c), Light::Point { color, .. }) => *color = c,
            (LightValue::Direction(d), Light::Directional { direction, .. }) => {
                let mut d = vector::normalize(&d).ok_or(SceneError::DegenerateDirection)?;
                d.w = 0.0;
                *direction = d;
            }
            (LightValue::Position(p), Light::Point { position, .. }) => {
                *position = point(p.x, p.y, p.z)
            }
            (LightValue::Range(r), Light::Point { range, .. }) => *range = r,
            _ => return Err(SceneError::light_field(field.name(), kind)),
        }
        Ok(())
    }

    pub fn get_field(&self, field: LightField) -> Result<LightValue, SceneError> {
        let value = match (field, self) {
            (LightField::Kind, light) => LightValue::Kind(light.kind()),
            (LightField::Intensity, light) => LightValue::Intensity(light.intensity()),
            (LightField::Color, Light::Directional { color, .. })
            | (LightField::Color, Light::Point { color, .. }) => LightValue::Color(*color),
            (LightField::Direction, Light::Directional { direction, .. }) => {
                LightValue::Direction(*direction)
            }
            (LightField::Position, Light::Point { position, .. }) => {
                LightValue::Position(*position)
            }
            (LightField::Range, Light::Point { range, .. }) => LightValue::Range(*range),
            _ => return Err(SceneError::light_field(field.name(), self.kind())),
        };
        Ok(value)
    }
}

/// Sparse update of light fields, see [`super::ObjectUpdate`].
///
/// `kind` is applied first, so fields of the new kind can be set in the
/// same update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LightUpdate {
    pub kind: Option<LightKind>,
    pub position: Option<Vec4>,
    pub direction: Option<Vec4>,
    pub color: Option<RGBA>,
    pub intensity: Option<f32>,
    pub range: Option<f32>,
}

impl LightUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: LightKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn position(mut self, position: Vec4) -> Self {
        self.position = Some(position);
        self
    }

    pub fn direction(mut self, direction: Vec4) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn color(mut self, color: RGBA) -> Self {
        self.color = Some(color);
        self
    }

    pub fn intensity(mut self, intensity: f32) -> Self {
        self.intensity = Some(intensity);
        self
    }

    pub fn range(mut self, range: f32) -> Self {
        self.range = Some(range);
        self
    }

    pub fn values(&self) -> Vec<LightValue> {
        [
            self.kind.map(LightValue::Kind),
            self.position.map(LightValue::Position),
            self.direction.map(LightValue::Direction),
            self.color.map(LightValue::Color),
            self.intensity.map(LightValue::Intensity),
            self.range.map(LightValue::Range),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
