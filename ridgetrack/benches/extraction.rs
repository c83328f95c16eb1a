use criterion::{BenchmarkId, Criterion, black_box, criterion_group};
use rand::prelude::*;
use ridgetrack::{EnergyMatrix, TrackExtractor};

/// Chirp-like ridges over uniform noise, `links` time bins by `searches` frequency bins.
fn synthetic_tfd(links: usize, searches: usize) -> EnergyMatrix {
    let mut rng = StdRng::seed_from_u64(7);
    let mut rows: Vec<Vec<f64>> = (0..links)
        .map(|_| (0..searches).map(|_| rng.random_range(0.0..1.0)).collect())
        .collect();

    for (t, row) in rows.iter_mut().enumerate() {
        let sweep = t * (searches / 2) / links.max(1);
        row[(searches / 8 + sweep).min(searches - 1)] = 20.0;
        row[searches * 3 / 4] = 15.0;
    }

    EnergyMatrix::from_rows(&rows).unwrap()
}

fn extraction_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_tracks");
    for &(links, searches) in &[(256, 128), (1024, 512)] {
        let matrix = synthetic_tfd(links, searches);
        let extractor = TrackExtractor::new().with_min_length(10);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", links, searches)),
            &matrix,
            |b, matrix| b.iter(|| extractor.extract(black_box(matrix)).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(benches, extraction_benchmarks);

fn main() {
    common::log_setup::setup_logging("warn");
    benches();
    Criterion::default().configure_from_args().final_summary();
}
