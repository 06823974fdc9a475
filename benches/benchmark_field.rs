use criterion::Criterion;
use criterion::{criterion_group, criterion_main};
use swirlgen::{FlowField, Grid, InletShape, Kernel, LambOseen, VortexSet};

const SIZES: [usize; 3] = [64, 128, 256];

pub fn bench_compute_domain(c: &mut Criterion) {
    let mut group = c.benchmark_group("FlowField");
    group.significance_level(0.1).sample_size(10);
    for n in SIZES.iter() {
        let grid = Grid::new(
            InletShape::Rect {
                x_side: 10.,
                y_side: 10.,
            },
            *n,
            *n,
        )
        .unwrap();
        let vortices = VortexSet::new(
            Kernel::from(LambOseen),
            vec![[-2., 0.], [2., 0.]],
            vec![-5., 5.],
            vec![1., 1.],
            None,
        )
        .unwrap();
        let mut field = FlowField::new(grid);
        let name = format!("Size: {}", *n);
        group.bench_function(&name, |b| {
            b.iter(|| field.compute_domain(&vortices, 1.0).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute_domain);
criterion_main!(benches);
