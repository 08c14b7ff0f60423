//! Scene model
//!
//! Owns the camera, lights and objects. Objects and lights are only ever
//! appended, so an id handed out once stays valid for the whole session.
//!
//! Setters never panic on bad input. A rejected field is logged at `warn`
//! level, the scene is left as it was and the error is returned to the caller.

mod light;
mod object;

pub use light::{Light, LightField, LightKind, LightUpdate, LightValue};
pub use object::{ObjectField, ObjectKind, ObjectUpdate, ObjectValue, SceneObject, Shape};

use crate::{camera::Camera, color::Color32, error::SceneError, vector::Vec4};

pub const DEFAULT_PIXEL_SIZE: u32 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    camera: Camera,
    lights: Vec<Light>,
    objects: Vec<SceneObject>,
    pixel_size: u32,
}

fn report<T>(res: Result<T, SceneError>) -> Result<T, SceneError> {
    if let Err(e) = &res {
        log::warn!("scene: {}", e);
    }
    res
}

impl Scene {
    pub fn new() -> Scene {
        Scene {
            camera: Camera::new(),
            lights: vec![],
            objects: vec![],
            pixel_size: DEFAULT_PIXEL_SIZE,
        }
    }

    //
    // Objects
    //

    /// Append default object, returns its id
    pub fn create_object(&mut self, kind: ObjectKind) -> usize {
        let id = self.objects.len();
        self.objects.push(SceneObject::new(kind));
        log::debug!("created {:?} object {}", kind, id);
        id
    }

    /// Shorthand for creating a sphere with given fields
    pub fn add_sphere(&mut self, position: Vec4, radius: f32, color: Color32) -> usize {
        let id = self.create_object(ObjectKind::Sphere);
        let obj = &mut self.objects[id];
        obj.position = position;
        obj.color = color & 0xFFFFFF;
        obj.shape = Shape::Sphere { radius };
        id
    }

    /// Shorthand for creating a box with given fields
    pub fn add_box(&mut self, position: Vec4, extents: (f32, f32, f32), color: Color32) -> usize {
        let id = self.create_object(ObjectKind::Box);
        let obj = &mut self.objects[id];
        obj.position = position;
        obj.color = color & 0xFFFFFF;
        obj.shape = Shape::Box {
            width: extents.0,
            height: extents.1,
            depth: extents.2,
        };
        id
    }

    pub fn object(&self, id: usize) -> Option<&SceneObject> {
        self.objects.get(id)
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    fn object_mut(&mut self, id: usize) -> Result<&mut SceneObject, SceneError> {
        self.objects.get_mut(id).ok_or(SceneError::UnknownObject(id))
    }

    pub fn set_object_field(&mut self, id: usize, value: ObjectValue) -> Result<(), SceneError> {
        report(self.object_mut(id).and_then(|obj| obj.set_field(value)))
    }

    pub fn get_object_field(&self, id: usize, field: ObjectField) -> Result<ObjectValue, SceneError> {
        report(
            self.object(id)
                .ok_or(SceneError::UnknownObject(id))
                .and_then(|obj| obj.get_field(field)),
        )
    }

    /// Apply all fields present in `update`.
    ///
    /// Inapplicable fields are skipped, the rest is still applied.
    /// Returns the first error.
    pub fn update_object(&mut self, id: usize, update: &ObjectUpdate) -> Result<(), SceneError> {
        let mut first_err = None;
        for value in update.values() {
            if let Err(e) = self.set_object_field(id, value) {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    //
    // Lights
    //

    pub fn create_light(&mut self, kind: LightKind) -> usize {
        let id = self.lights.len();
        self.lights.push(Light::new(kind));
        log::debug!("created {:?} light {}", kind, id);
        id
    }

    pub fn light(&self, id: usize) -> Option<&Light> {
        self.lights.get(id)
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    fn light_mut(&mut self, id: usize) -> Result<&mut Light, SceneError> {
        self.lights.get_mut(id).ok_or(SceneError::UnknownLight(id))
    }

    pub fn set_light_field(&mut self, id: usize, value: LightValue) -> Result<(), SceneError> {
        report(self.light_mut(id).and_then(|light| light.set_field(value)))
    }

    pub fn get_light_field(&self, id: usize, field: LightField) -> Result<LightValue, SceneError> {
        report(
            self.light(id)
                .ok_or(SceneError::UnknownLight(id))
                .and_then(|light| light.get_field(field)),
        )
    }

    /// Same rules as [`Scene::update_object`]
    pub fn update_light(&mut self, id: usize, update: &LightUpdate) -> Result<(), SceneError> {
        let mut first_err = None;
        for value in update.values() {
            if let Err(e) = self.set_light_field(id, value) {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    /// Id of first light of given kind
    pub fn find_light(&self, kind: LightKind) -> Option<usize> {
        self.lights.iter().position(|l| l.kind() == kind)
    }

    //
    // Camera
    //

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    #[allow(clippy::too_many_arguments)]
    pub fn set_camera_viewport(
        &mut self,
        left: f32,
        right: f32,
        top: f32,
        bottom: f32,
        front: f32,
        depth: f32,
        fov: f32,
    ) {
        self.camera
            .set_viewport(left, right, top, bottom, front, depth, fov);
    }

    pub fn set_camera_position(&mut self, position: Vec4) {
        self.camera.set_pos(position);
    }

    pub fn get_camera_position(&self) -> Vec4 {
        self.camera.get_position()
    }

    pub fn move_camera(&mut self, delta: Vec4) {
        self.camera.change_pos(delta);
    }

    pub fn set_camera_direction(&mut self, direction: Vec4) -> Result<(), SceneError> {
        report(self.camera.set_direction(direction))
    }

    //
    // Render granularity
    //

    /// Not clamped here, input handling keeps it at least 1
    pub fn set_pixel_size(&mut self, size: u32) {
        self.pixel_size = size;
    }

    pub fn get_pixel_size(&self) -> u32 {
        self.pixel_size
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {

    use crate::{color, vector::point};

    use super::*;

    #[test]
    fn ids_are_stable() {
        let mut scene = Scene::new();

        let a = scene.create_object(ObjectKind::Sphere);
        let b = scene.create_object(ObjectKind::Box);
        let l = scene.create_light(LightKind::Ambient);

        assert_eq!((a, b, l), (0, 1, 0));

        scene
            .set_object_field(a, ObjectValue::Color(0xFF0000))
            .unwrap();
        let c = scene.create_object(ObjectKind::Sphere);

        assert_eq!(c, 2);
        assert_eq!(scene.object(a).unwrap().color, 0xFF0000);
        assert_eq!(scene.object(b).unwrap().kind(), ObjectKind::Box);
    }

    #[test]
    fn unknown_ids() {
        let mut scene = Scene::new();

        assert_eq!(
            scene.set_object_field(3, ObjectValue::Albedo(2.0)),
            Err(SceneError::UnknownObject(3))
        );
        assert_eq!(
            scene.get_light_field(0, LightField::Intensity),
            Err(SceneError::UnknownLight(0))
        );
    }

    #[test]
    fn setting_twice_is_idempotent() {
        let mut once = Scene::new();
        let mut twice = Scene::new();

        for scene in [&mut once, &mut twice] {
            scene.create_object(ObjectKind::Sphere);
            scene.create_light(LightKind::Directional);
        }

        let obj_value = ObjectValue::Position(point(1.0, 2.0, 3.0));
        let light_value = LightValue::Direction(point(1.0, -1.0, 0.0));

        once.set_object_field(0, obj_value).unwrap();
        once.set_light_field(0, light_value).unwrap();

        for _ in 0..2 {
            twice.set_object_field(0, obj_value).unwrap();
            twice.set_light_field(0, light_value).unwrap();
        }

        assert_eq!(once, twice);
    }

    #[test]
    fn batch_update_skips_bad_fields() {
        let mut scene = Scene::new();
        let id = scene.create_object(ObjectKind::Box);

        let update = ObjectUpdate::new()
            .color(0x00FF00)
            .radius(5.0)
            .extents(2.0, 3.0, 4.0);

        let res = scene.update_object(id, &update);

        assert!(matches!(
            res,
            Err(SceneError::FieldNotApplicable { field: "radius", .. })
        ));
        let obj = scene.object(id).unwrap();
        assert_eq!(obj.color, 0x00FF00);
        assert_eq!(
            obj.shape,
            Shape::Box {
                width: 2.0,
                height: 3.0,
                depth: 4.0
            }
        );
    }

    #[test]
    fn light_update_with_kind_change() {
        let mut scene = Scene::new();
        let id = scene.create_light(LightKind::Ambient);

        let update = LightUpdate::new()
            .kind(LightKind::Point)
            .position(point(0.0, 5.0, 0.0))
            .range(10.0)
            .color(color::new(0.0, 0.0, 1.0, 1.0));

        scene.update_light(id, &update).unwrap();

        assert_eq!(
            scene.light(id),
            Some(&Light::Point {
                position: point(0.0, 5.0, 0.0),
                color: color::new(0.0, 0.0, 1.0, 1.0),
                intensity: 1.0,
                range: 10.0,
            })
        );
        assert_eq!(scene.find_light(LightKind::Point), Some(id));
        assert_eq!(scene.find_light(LightKind::Ambient), None);
    }

    #[test]
    fn camera_and_pixel_size() {
        let mut scene = Scene::new();

        scene.set_camera_position(point(0.0, 1.0, -5.0));
        scene.move_camera(point(1.0, 0.0, 0.0));
        assert_eq!(scene.get_camera_position(), point(1.0, 1.0, -5.0));

        scene.set_camera_viewport(-2.0, 2.0, 1.0, -1.0, 1.5, 10.0, 70.0);
        assert_eq!(scene.camera().back, 11.5);

        assert_eq!(scene.get_pixel_size(), 1);
        scene.set_pixel_size(8);
        assert_eq!(scene.get_pixel_size(), 8);
    }
}
