// Bench target: exempt from the library's `missing_docs`/`unused_results`
// denies (criterion_group! expands to undocumented items, and Criterion's
// builder methods return `&mut Self` by design).
#![allow(missing_docs, unused_results)]

use assort::animation::TransitionDriver;
use assort::classify::{classify_color, classify_shape};
use assort::layout::{Arrangement, Layout};
use assort::options::{LayoutOptions, TransitionOptions};
use assort::scene::{Aabb, Part, Scene};
use assort::util::easing::EasingFunction;
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use glam::{Quat, Vec3};

fn demo_scene(count: usize) -> Scene {
    let palette = [
        [0.9, 0.1, 0.1],
        [0.1, 0.9, 0.1],
        [0.1, 0.1, 0.9],
        [0.9, 0.9, 0.1],
        [0.5, 0.5, 0.5],
    ];
    let sizes = [
        Vec3::ONE,
        Vec3::new(10.0, 1.0, 1.0),
        Vec3::new(1.0, 2.5, 1.0),
        Vec3::new(4.0, 3.0, 0.5),
    ];
    let mut scene = Scene::new();
    let _ = scene.add_parts((0..count).map(|i| {
        Part::new(
            format!("part_{i}"),
            Aabb::from_size(sizes[i % sizes.len()]),
            palette[i % palette.len()],
            Vec3::new((i % 10) as f32 * 2.0, (i / 10) as f32 * 2.0, 0.0),
            Quat::IDENTITY,
        )
    }));
    scene
}

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
    c.bench_function("cubic_hermite_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))))
    });
}

fn classification_benchmark(c: &mut Criterion) {
    c.bench_function("classify_part", |b| {
        b.iter(|| {
            let bucket = classify_color(black_box([0.8, 0.3, 0.1]));
            let category =
                classify_shape(black_box(Vec3::new(4.0, 3.0, 0.5)));
            black_box((bucket, category))
        })
    });
}

fn layout_build_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_build");

    for count in [10, 50, 100, 500].iter() {
        let scene = demo_scene(*count);
        let options = LayoutOptions::default();
        group.bench_function(format!("{count}_parts"), |b| {
            b.iter(|| black_box(Layout::build(&scene, &options)))
        });
    }
    group.finish();
}

fn advance_benchmark(c: &mut Criterion) {
    let mut scene = demo_scene(500);
    let layout = Layout::build(&scene, &LayoutOptions::default());
    let options = TransitionOptions::default();

    c.bench_function("advance_500_parts", |b| {
        b.iter(|| {
            let mut driver = TransitionDriver::new();
            driver.select(Arrangement::ByColor);
            driver.advance(&mut scene, &layout, &options, 0.016);
        })
    });
}

criterion_group!(
    benches,
    easing_benchmark,
    classification_benchmark,
    layout_build_benchmark,
    advance_benchmark
);
criterion_main!(benches);
