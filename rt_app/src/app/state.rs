use std::{path::PathBuf, time::Duration};

use raytracer_lib::{
    render::{FrameStats, Renderer},
    scene::{LightKind, LightValue, Scene},
};

use super::{
    defaults::{MAX_PIXEL_SIZE, MIN_PIXEL_SIZE, TITLE},
    input::{Action, Toggle},
};

/// Application state, everything the frame loop mutates
pub struct State {
    pub scene: Scene,
    pub renderer: Renderer,
    pub running: bool,
    /// Save the next finished frame
    pub screenshot_requested: bool,
    screenshots_taken: usize,
    screenshot_prefix: PathBuf,
    last_frame: FrameStats,
}

impl State {
    pub fn new(scene: Scene, renderer: Renderer, screenshot_prefix: PathBuf) -> State {
        State {
            scene,
            renderer,
            running: true,
            screenshot_requested: false,
            screenshots_taken: 0,
            screenshot_prefix,
            last_frame: FrameStats::default(),
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::MoveCamera(delta) => self.scene.move_camera(delta),
            Action::PixelSize(delta) => self.change_pixel_size(delta),
            Action::LightIntensity(delta) => self.change_light_intensity(delta),
            Action::Toggle(toggle) => self.toggle(toggle),
            Action::Screenshot => self.screenshot_requested = true,
            Action::Quit => self.running = false,
        }
    }

    fn change_pixel_size(&mut self, delta: i32) {
        let size = self.scene.get_pixel_size() as i64 + delta as i64;
        let size = size.clamp(MIN_PIXEL_SIZE as i64, MAX_PIXEL_SIZE as i64) as u32;
        self.scene.set_pixel_size(size);
        log::debug!("pixel size {}", size);
    }

    fn change_light_intensity(&mut self, delta: f32) {
        let id = match self.scene.find_light(LightKind::Directional) {
            Some(id) => id,
            None => {
                log::info!("no directional light in scene");
                return;
            }
        };
        let current = self.scene.light(id).map_or(0.0, |l| l.intensity());
        // snap to tenths so repeated steps land on 0 and 1 exactly
        let intensity = (((current + delta) * 10.0).round() / 10.0).clamp(0.0, 1.0);

        if self
            .scene
            .set_light_field(id, LightValue::Intensity(intensity))
            .is_ok()
        {
            log::debug!("light {} intensity {}", id, intensity);
        }
    }

    fn toggle(&mut self, toggle: Toggle) {
        let opts = self.renderer.render_options_mut();
        let flag = match toggle {
            Toggle::Ambient => &mut opts.ambient_lighting,
            Toggle::Directional => &mut opts.directional_lighting,
            Toggle::Point => &mut opts.point_lighting,
            Toggle::Shadows => &mut opts.shadows,
        };
        *flag = !*flag;
        log::debug!("{:?} {}", toggle, if *flag { "on" } else { "off" });
    }

    /// Path for the next screenshot, counts taken screenshots
    pub fn next_screenshot_path(&mut self) -> PathBuf {
        let mut name = self.screenshot_prefix.clone().into_os_string();
        name.push(format!("_{}.shot", self.screenshots_taken));
        self.screenshots_taken += 1;
        PathBuf::from(name)
    }

    pub fn frame_done(&mut self, stats: FrameStats) {
        self.last_frame = stats;
    }

    pub fn last_frame_time(&self) -> Duration {
        self.last_frame.duration
    }

    /// Window title doubling as the status line
    pub fn title(&self) -> String {
        let opts = self.renderer.render_options();
        let flag = |on: bool, c: char| if on { c } else { '-' };
        format!(
            "{} | {:.1} ms | pixel size {} | lights [{}{}{}] shadows {}",
            TITLE,
            self.last_frame_time().as_secs_f64() * 1000.0,
            self.scene.get_pixel_size(),
            flag(opts.ambient_lighting, 'A'),
            flag(opts.directional_lighting, 'D'),
            flag(opts.point_lighting, 'P'),
            if opts.shadows { "on" } else { "off" },
        )
    }
}

#[cfg(test)]
mod test {

    use nalgebra::vector;
    use raytracer_lib::{premade::demo_scene, vector::point};

    use super::*;

    fn demo_state() -> State {
        State::new(demo_scene(), Renderer::default(), "shot".into())
    }

    fn sun_intensity(state: &State) -> f32 {
        let id = state.scene.find_light(LightKind::Directional).unwrap();
        state.scene.light(id).unwrap().intensity()
    }

    #[test]
    fn pixel_size_is_clamped() {
        let mut state = demo_state();
        state.scene.set_pixel_size(1);

        state.apply(Action::PixelSize(-1));
        assert_eq!(state.scene.get_pixel_size(), 1);

        for _ in 0..100 {
            state.apply(Action::PixelSize(1));
        }
        assert_eq!(state.scene.get_pixel_size(), MAX_PIXEL_SIZE);
    }

    #[test]
    fn light_intensity_steps_and_clamps() {
        let mut state = demo_state();

        for _ in 0..20 {
            state.apply(Action::LightIntensity(-0.1));
        }
        assert_eq!(sun_intensity(&state), 0.0);

        for _ in 0..3 {
            state.apply(Action::LightIntensity(0.1));
        }
        assert!((sun_intensity(&state) - 0.3).abs() < 1e-6);

        for _ in 0..20 {
            state.apply(Action::LightIntensity(0.1));
        }
        assert_eq!(sun_intensity(&state), 1.0);
    }

    #[test]
    fn light_change_without_light() {
        let mut state = State::new(Scene::new(), Renderer::default(), "shot".into());

        state.apply(Action::LightIntensity(0.1));

        assert!(state.scene.lights().is_empty());
    }

    #[test]
    fn toggles_flip_options() {
        let mut state = demo_state();

        state.apply(Action::Toggle(Toggle::Shadows));
        state.apply(Action::Toggle(Toggle::Ambient));
        state.apply(Action::Toggle(Toggle::Ambient));

        let opts = state.renderer.render_options();
        assert!(!opts.shadows);
        assert!(opts.ambient_lighting);
        assert!(state.title().contains("shadows off"));
    }

    #[test]
    fn camera_moves() {
        let mut state = demo_state();

        state.apply(Action::MoveCamera(vector![0.5, 0.0, -1.0, 0.0]));

        assert_eq!(state.scene.get_camera_position(), point(0.5, 0.0, -1.0));
    }

    #[test]
    fn screenshot_and_quit() {
        let mut state = demo_state();

        state.apply(Action::Screenshot);
        assert!(state.screenshot_requested);
        assert_eq!(state.next_screenshot_path(), PathBuf::from("shot_0.shot"));
        assert_eq!(state.next_screenshot_path(), PathBuf::from("shot_1.shot"));

        state.apply(Action::Quit);
        assert!(!state.running);
    }
}
