//! Benchmarks for the outpost-assets pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::tempdir;

use outpost_assets::output::Printer;
use outpost_assets::{generate, scale_canvas, sprites, write_png, Canvas};

// -- Drawing benchmarks --

fn bench_drawing(c: &mut Criterion) {
    let mut group = c.benchmark_group("drawing");

    let wall = sprites::find("terrain_wall").unwrap();

    group.bench_function("draw_terrain_wall", |b| b.iter(|| black_box(wall).render().unwrap()));

    group.bench_function("draw_all", |b| {
        b.iter(|| {
            sprites::all()
                .map(|s| s.render().unwrap())
                .collect::<Vec<Canvas>>()
        })
    });

    group.finish();
}

// -- Scaling benchmarks --

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    let canvas = sprites::find("creature_dwarf").unwrap().render().unwrap();

    for scale in [1, 2, 3] {
        group.bench_function(format!("scale_{}x", scale), |b| {
            b.iter(|| scale_canvas(black_box(&canvas), scale))
        });
    }

    group.finish();
}

// -- Encoding benchmarks --

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");
    group.sample_size(20);

    let dir = tempdir().unwrap();
    let canvas = sprites::find("item_barrel").unwrap().render().unwrap();
    let path = dir.path().join("item_barrel@3x.png");

    group.bench_function("write_png_3x", |b| {
        b.iter(|| write_png(black_box(&canvas), &path, 3).unwrap())
    });

    let printer = Printer::new().quiet(true);
    group.bench_function("generate_catalog", |b| {
        b.iter(|| generate(dir.path(), &printer).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_drawing, bench_scaling, bench_encoding);
criterion_main!(benches);
