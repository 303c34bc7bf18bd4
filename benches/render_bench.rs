use criterion::{criterion_group, criterion_main, Criterion};

use notelogo::rendering::layout::layout_logo;
use notelogo::rendering::paint::{paint_logo, Palette};
use notelogo::rendering::raster::{encode_png, rasterize};

fn bench_layout(c: &mut Criterion) {
    c.bench_function("layout_logo_1024", |b| {
        b.iter(|| layout_logo(criterion::black_box(1024)))
    });
}

fn bench_rasterize(c: &mut Criterion) {
    let palette = Palette::default();
    for size in [128u32, 1024] {
        let commands = paint_logo(&layout_logo(size), &palette);
        c.bench_function(&format!("rasterize_{}", size), |b| {
            b.iter(|| rasterize(size, &commands))
        });
    }
}

fn bench_encode_png(c: &mut Criterion) {
    let canvas = notelogo::render(1024).expect("render");
    c.bench_function("encode_png_1024", |b| {
        b.iter(|| encode_png(&canvas).unwrap())
    });
}

criterion_group!(benches, bench_layout, bench_rasterize, bench_encode_png);
criterion_main!(benches);
