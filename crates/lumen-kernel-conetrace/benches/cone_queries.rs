use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lumen_kernel_conetrace::{intersect_cone, intersect_cone_bbox, Cone, ConeSampling};
use lumen_kernel_geom::{Aabb3, Triangle};
use lumen_kernel_math::{Point3, Vec3};

const NUM_BOXES: usize = 1000;

fn boxes() -> Vec<Aabb3> {
    (0..NUM_BOXES)
        .map(|i| {
            let v = i as f32 / NUM_BOXES as f32;
            let min = Point3::new(v * 20.0 - 10.0, (v * 37.0).sin() * 8.0, v * 30.0 - 5.0);
            Aabb3::new(min, min + Vec3::new(1.0, 0.5, 2.0))
        })
        .collect()
}

fn benchmark_cone_bbox(c: &mut Criterion) {
    let boxes = boxes();
    let cone = Cone::new(Point3::origin(), Vec3::new(0.1, 0.2, 1.0), 0.15);

    c.bench_function(&format!("cone_bbox_{}_boxes", NUM_BOXES), |b| {
        b.iter(|| {
            boxes
                .iter()
                .filter(|bbox| intersect_cone_bbox(black_box(&cone), bbox))
                .count()
        })
    });
}

fn benchmark_cone_triangle(c: &mut Criterion) {
    let cone = Cone::new(Point3::origin(), Vec3::z(), 0.1);
    let tri = Triangle::new(
        Point3::new(-1.0, -1.0, 5.0),
        Point3::new(1.0, -1.0, 5.0),
        Point3::new(0.0, 1.0, 5.0),
    );

    for samples in [16, 64, 256] {
        let sampling = ConeSampling {
            samples,
            ..Default::default()
        };
        c.bench_function(&format!("cone_triangle_{}_samples", samples), |b| {
            b.iter(|| intersect_cone(black_box(&cone), black_box(&tri), &sampling))
        });
    }
}

criterion_group!(benches, benchmark_cone_bbox, benchmark_cone_triangle);
criterion_main!(benches);
