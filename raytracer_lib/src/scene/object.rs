use crate::{
    color::{self, Color32},
    common::BoundBox,
    error::SceneError,
    vector::{point, Vec4},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Sphere,
    Box,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 2] = [ObjectKind::Sphere, ObjectKind::Box];

    pub fn name(&self) -> &'static str {
        match self {
            ObjectKind::Sphere => "sphere",
            ObjectKind::Box => "box",
        }
    }

    pub fn from_name(name: &str) -> Option<ObjectKind> {
        ObjectKind::ALL.into_iter().find(|k| k.name() == name)
    }
}

/// Geometry of an object, only the fields that variant needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere { radius: f32 },
    /// Full extents, centered at object position
    Box { width: f32, height: f32, depth: f32 },
}

/// Renderable primitive
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub position: Vec4,
    pub color: Color32,
    /// Specular exponent
    pub albedo: f32,
    pub shape: Shape,
}

/// Field tags of [`SceneObject`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectField {
    Position,
    Color,
    Albedo,
    Radius,
    Width,
    Height,
    Depth,
}

/// Field tag with its value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectValue {
    Position(Vec4),
    Color(Color32),
    Albedo(f32),
    Radius(f32),
    Width(f32),
    Height(f32),
    Depth(f32),
}

impl ObjectField {
    pub const ALL: [ObjectField; 7] = [
        ObjectField::Position,
        ObjectField::Color,
        ObjectField::Albedo,
        ObjectField::Radius,
        ObjectField::Width,
        ObjectField::Height,
        ObjectField::Depth,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ObjectField::Position => "position",
            ObjectField::Color => "color",
            ObjectField::Albedo => "albedo",
            ObjectField::Radius => "radius",
            ObjectField::Width => "width",
            ObjectField::Height => "height",
            ObjectField::Depth => "depth",
        }
    }

    pub fn from_name(name: &str) -> Option<ObjectField> {
        ObjectField::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl ObjectValue {
    pub fn field(&self) -> ObjectField {
        match self {
            ObjectValue::Position(_) => ObjectField::Position,
            ObjectValue::Color(_) => ObjectField::Color,
            ObjectValue::Albedo(_) => ObjectField::Albedo,
            ObjectValue::Radius(_) => ObjectField::Radius,
            ObjectValue::Width(_) => ObjectField::Width,
            ObjectValue::Height(_) => ObjectField::Height,
            ObjectValue::Depth(_) => ObjectField::Depth,
        }
    }
}

impl SceneObject {
    /// Unit sized object at origin, white, albedo 1
    pub fn new(kind: ObjectKind) -> SceneObject {
        let shape = match kind {
            ObjectKind::Sphere => Shape::Sphere { radius: 1.0 },
            ObjectKind::Box => Shape::Box {
                width: 1.0,
                height: 1.0,
                depth: 1.0,
            },
        };
        SceneObject {
            position: point(0.0, 0.0, 0.0),
            color: color::WHITE,
            albedo: 1.0,
            shape,
        }
    }

    pub fn kind(&self) -> ObjectKind {
        match self.shape {
            Shape::Sphere { .. } => ObjectKind::Sphere,
            Shape::Box { .. } => ObjectKind::Box,
        }
    }

    /// Overwrite one field.
    /// Fields of the other variant are rejected, object stays unchanged.
    pub fn set_field(&mut self, value: ObjectValue) -> Result<(), SceneError> {
        let kind = self.kind();
        let field = value.field();
        match (value, &mut self.shape) {
            (ObjectValue::Position(p), _) => self.position = point(p.x, p.y, p.z),
            (ObjectValue::Color(c), _) => self.color = c & 0xFFFFFF,
            (ObjectValue::Albedo(a), _) => self.albedo = a,
            (ObjectValue::Radius(r), Shape::Sphere { radius }) => *radius = r,
            (ObjectValue::Width(v), Shape::Box { width, .. }) => *width = v,
            (ObjectValue::Height(v), Shape::Box { height, .. }) => *height = v,
            (ObjectValue::Depth(v), Shape::Box { depth, .. }) => *depth = v,
            _ => return Err(SceneError::object_field(field.name(), kind)),
        }
        Ok(())
    }

    pub fn get_field(&self, field: ObjectField) -> Result<ObjectValue, SceneError> {
        let value = match (field, &self.shape) {
            (ObjectField::Position, _) => ObjectValue::Position(self.position),
            (ObjectField::Color, _) => ObjectValue::Color(self.color),
            (ObjectField::Albedo, _) => ObjectValue::Albedo(self.albedo),
            (ObjectField::Radius, Shape::Sphere { radius }) => ObjectValue::Radius(*radius),
            (ObjectField::Width, Shape::Box { width, .. }) => ObjectValue::Width(*width),
            (ObjectField::Height, Shape::Box { height, .. }) => ObjectValue::Height(*height),
            (ObjectField::Depth, Shape::Box { depth, .. }) => ObjectValue::Depth(*depth),
            _ => return Err(SceneError::object_field(field.name(), self.kind())),
        };
        Ok(value)
    }

    /// Box objects only
    pub fn bound_box(&self) -> Option<BoundBox> {
        match self.shape {
            Shape::Box {
                width,
                height,
                depth,
            } => Some(BoundBox::from_center_dims(
                self.position,
                point(width, height, depth),
            )),
            Shape::Sphere { .. } => None,
        }
    }
}

/// Sparse update of object fields.
///
/// Fields left as `None` are not touched.
/// ```
/// # use raytracer_lib::scene::ObjectUpdate;
/// # use raytracer_lib::vector::point;
/// let update = ObjectUpdate::new()
///     .position(point(0.0, -1.0, 3.0))
///     .color(0xFF0000)
///     .radius(0.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectUpdate {
    pub position: Option<Vec4>,
    pub color: Option<Color32>,
    pub albedo: Option<f32>,
    pub radius: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub depth: Option<f32>,
}

impl ObjectUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: Vec4) -> Self {
        self.position = Some(position);
        self
    }

    pub fn color(mut self, color: Color32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn albedo(mut self, albedo: f32) -> Self {
        self.albedo = Some(albedo);
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn extents(mut self, width: f32, height: f32, depth: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self.depth = Some(depth);
        self
    }

    /// Present values, in the order they are applied
    pub fn values(&self) -> Vec<ObjectValue> {
        [
            self.position.map(ObjectValue::Position),
            self.color.map(ObjectValue::Color),
            self.albedo.map(ObjectValue::Albedo),
            self.radius.map(ObjectValue::Radius),
            self.width.map(ObjectValue::Width),
            self.height.map(ObjectValue::Height),
            self.depth.map(ObjectValue::Depth),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
