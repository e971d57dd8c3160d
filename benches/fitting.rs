use criterion::{criterion_group, criterion_main, Criterion};
use polyreg::PolyFit;
use std::hint::black_box;

fn gen_sample_data(n: usize) -> (Vec<f64>, Vec<f64>) {
    let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let ys: Vec<f64> = xs.iter().map(|x| 5.3 * x * x + 3.0 * x + 1.0).collect();
    (xs, ys)
}

fn criterion_benchmark(c: &mut Criterion) {
    //
    // First, how the solver scales with data size (degree fixed at 2)
    let mut group = c.benchmark_group("fit_vs_n");
    for n in [100_usize, 1_000, 10_000] {
        let (xs, ys) = gen_sample_data(n);
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| PolyFit::new(black_box(&xs), black_box(&ys), 2).expect("Failed to fit data"));
        });
    }
    group.finish();

    //
    // Then, how it scales with degree (n fixed at 1000)
    let (xs, ys) = gen_sample_data(1_000);
    let mut group = c.benchmark_group("fit_vs_degree");
    for degree in [1_usize, 3, 6, 10] {
        group.bench_function(format!("degree={degree}"), |b| {
            b.iter(|| {
                PolyFit::new(black_box(&xs), black_box(&ys), degree).expect("Failed to fit data")
            });
        });
    }
    group.finish();

    //
    // Finally, the dense curve evaluation used for plotting
    let (xs, ys) = gen_sample_data(100);
    let fit = PolyFit::new(&xs, &ys, 4).expect("Failed to fit data");
    c.bench_function("dense_curve_500", |b| {
        b.iter(|| black_box(&fit).dense_curve(500));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
