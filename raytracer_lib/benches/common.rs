pub use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

pub use raytracer_lib::{
    premade::{demo_scene, random_scene},
    render::{RenderOptions, Renderer},
    FrameBuffer, Scene,
};

pub const WIDTH: usize = 320;
pub const HEIGHT: usize = 240;

pub const PIXEL_SIZES: [u32; 4] = [1, 2, 4, 8];

pub const RANDOM_OBJECTS: usize = 32;
pub const SEED: u64 = 42;

/// Benchmark full frames of `scene` at every pixel size
pub fn bench_scene(c: &mut Criterion, group_name: &str, mut scene: Scene, options: RenderOptions) {
    let renderer = Renderer::new(options);
    let mut buffer = FrameBuffer::new(WIDTH, HEIGHT);

    let mut group = c.benchmark_group(group_name);
    for size in PIXEL_SIZES {
        scene.set_pixel_size(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| renderer.render(&scene, &mut buffer));
        });
    }
    group.finish();
}
