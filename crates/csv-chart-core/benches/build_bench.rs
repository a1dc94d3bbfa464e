use csv_chart_core::{build, ChartType, StyleOptions, TabularInput};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn survey_table(rows: usize) -> TabularInput {
    let headers = ["concelhos", "Sim", "Não", "Ns/Nr"].map(String::from).to_vec();
    let rows = (0..rows)
        .map(|i| {
            let sim = (i * 7 % 100) as f64;
            let nao = (100.0 - sim) * 0.6;
            vec![format!("c{i}"), sim.to_string(), nao.to_string(), (100.0 - sim - nao).to_string()]
        })
        .collect();
    TabularInput::new("bench.csv", headers, rows)
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_chart");
    for &n in &[300usize, 5_000usize] {
        let table = survey_table(n);
        for ct in [ChartType::Bar, ChartType::Area] {
            let opts = StyleOptions::default().with_chart_type(ct);
            group.bench_function(format!("{ct}_{n}"), |b| {
                b.iter(|| black_box(build(&table, &opts, Some("bench.csv")).expect("build")));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
