use raytracer_lib::{
    command::{self, CommandOutput},
    mapping::{screen_to_world, world_to_screen},
    premade::demo_scene,
    render_frame,
    scene::{LightKind, LightValue},
    screenshot::Screenshot,
    vector::point,
    FrameBuffer, RenderOptions, Renderer, Scene, Surface,
};

pub const WIDTH: usize = 64;
pub const HEIGHT: usize = 48;

#[test]
fn single_thread_api() {
    let scene = demo_scene();

    let buffer = render_frame(&scene, WIDTH, HEIGHT);

    assert_eq!(buffer.pixels().len(), WIDTH * HEIGHT);
    // red sphere right below the center of view
    let center = buffer.get_pixel(WIDTH / 2, HEIGHT * 3 / 4).unwrap();
    assert!(center >> 16 > (center >> 8) & 0xFF);
}

#[test]
fn script_built_scene_matches_api_built_scene() {
    let mut scripted = Scene::new();
    let failed = command::run_script(
        &mut scripted,
        "
        object sphere
        set object 0 position 0 0 5
        set object 0 color #FF8000
        light ambient
        set light 0 intensity 0.5
        light directional
        set light 1 direction 0 0 1
        ",
    );
    assert_eq!(failed, 0);

    let mut direct = Scene::new();
    direct.add_sphere(point(0.0, 0.0, 5.0), 1.0, 0xFF8000);
    let ambient = direct.create_light(LightKind::Ambient);
    direct
        .set_light_field(ambient, LightValue::Intensity(0.5))
        .unwrap();
    let sun = direct.create_light(LightKind::Directional);
    direct
        .set_light_field(sun, LightValue::Direction(point(0.0, 0.0, 1.0)))
        .unwrap();

    assert_eq!(scripted, direct);
    assert_eq!(render_frame(&scripted, 16, 16), render_frame(&direct, 16, 16));
}

#[test]
fn mapping_round_trip_with_moved_camera() {
    let mut scene = demo_scene();
    scene.set_camera_position(point(1.5, -0.5, 2.0));
    scene.set_camera_viewport(-2.0, 2.0, 1.5, -1.5, 1.0, 100.0, 90.0);

    for y in 0..HEIGHT as i32 {
        for x in 0..WIDTH as i32 {
            let world = screen_to_world(scene.camera(), WIDTH, HEIGHT, x, y);
            let (sx, sy) = world_to_screen(scene.camera(), WIDTH, HEIGHT, &world);
            assert!((sx - x).abs() <= 1 && (sy - y).abs() <= 1);
        }
    }
}

#[test]
fn screenshot_of_rendered_frame() {
    let scene = demo_scene();
    let mut buffer = FrameBuffer::new(WIDTH, HEIGHT);
    Renderer::new(RenderOptions::default()).render_frame(&scene, &mut buffer);

    let shot = Screenshot::from_buffer(&buffer);
    let mut bytes = vec![];
    shot.write_to(&mut bytes).unwrap();

    let loaded = Screenshot::read_from(&bytes).unwrap();
    let mut restored = FrameBuffer::new(WIDTH, HEIGHT);
    loaded.blit(&mut restored);

    assert_eq!(restored, buffer);
}

#[test]
fn toggles_change_the_image() {
    let scene = demo_scene();
    let mut lit = FrameBuffer::new(WIDTH, HEIGHT);
    let mut dark = FrameBuffer::new(WIDTH, HEIGHT);

    Renderer::default().render(&scene, &mut lit);
    Renderer::new(RenderOptions {
        ambient_lighting: false,
        directional_lighting: false,
        point_lighting: false,
        ..Default::default()
    })
    .render(&scene, &mut dark);

    assert_ne!(lit, dark);
    assert!(dark.pixels().iter().all(|&p| p == 0));
    assert_eq!(dark.width(), WIDTH);
}

#[test]
fn get_reports_values() {
    let mut scene = demo_scene();

    assert_eq!(
        command::execute(&mut scene, "get object 1 color"),
        Ok(CommandOutput::Value("color #00FFFF".into()))
    );
    assert_eq!(
        command::execute(&mut scene, "get light 1 type"),
        Ok(CommandOutput::Value("type directional".into()))
    );
}
