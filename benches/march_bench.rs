//! Benchmarks marching a sphere volume for each sample kind.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use volume_marching_cubes::{
    MarchingCubesConfig, Sample, SurfaceMesh, VolumeChunk, march, march_slabs, types::Vector,
};

const SIZE: usize = 64;

/// Sphere field in `[0, 200]`, crossing 100 at radius `SIZE / 3`.
fn sphere_field() -> Vec<f32> {
    let c = SIZE as f32 / 2.;
    let r = SIZE as f32 / 3.;
    (0..SIZE * SIZE * SIZE)
        .map(|i| {
            let (x, y, z) = (i % SIZE, (i / SIZE) % SIZE, i / (SIZE * SIZE));
            let d = ((x as f32 - c).powi(2) + (y as f32 - c).powi(2) + (z as f32 - c).powi(2)).sqrt();
            (100. + (r - d) * 10.).clamp(0., 200.).round()
        })
        .collect()
}

fn bench_kind<T: Sample>(c: &mut Criterion, name: &str, samples: &[T], iso_level: T) {
    let chunk = VolumeChunk::new(samples, SIZE, SIZE, SIZE).unwrap();
    let config = MarchingCubesConfig::default();
    c.bench_with_input(BenchmarkId::new("march", name), &chunk, |b, chunk| {
        b.iter(|| march(black_box(chunk), iso_level, &config))
    });
}

fn bench_march(c: &mut Criterion) {
    let field = sphere_field();
    let as_u8: Vec<u8> = field.iter().map(|&v| v as u8).collect();
    let as_i16: Vec<i16> = field.iter().map(|&v| v as i16).collect();
    let as_i32: Vec<i32> = field.iter().map(|&v| v as i32).collect();
    let as_f64: Vec<f64> = field.iter().map(|&v| f64::from(v)).collect();

    bench_kind(c, "u8", &as_u8, 100);
    bench_kind(c, "i16", &as_i16, 100);
    bench_kind(c, "i32", &as_i32, 100);
    bench_kind(c, "f32", &field, 100.);
    bench_kind(c, "f64", &as_f64, 100.);
}

fn bench_slabs(c: &mut Criterion) {
    let field = sphere_field();
    let config = MarchingCubesConfig::default();
    c.bench_function("march_slabs (64³, 8-plane slabs)", |b| {
        b.iter(|| {
            march_slabs(
                black_box(&field),
                [SIZE; 3],
                Vector::new(1., 1., 1.),
                100.,
                &config,
                8,
            )
        })
    });
}

fn bench_post_process(c: &mut Criterion) {
    let field = sphere_field();
    let chunk = VolumeChunk::new(&field, SIZE, SIZE, SIZE).unwrap();
    let vertices = march(&chunk, 100., &MarchingCubesConfig::default());
    c.bench_function("SurfaceMesh build + filter", |b| {
        b.iter(|| {
            SurfaceMesh::build(black_box(vertices.clone()))
                .map(SurfaceMesh::without_degenerates)
        })
    });
}

criterion_group!(benches, bench_march, bench_slabs, bench_post_process);
criterion_main!(benches);
