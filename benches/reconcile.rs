//! Benchmark for the reconciliation core
//!
//! Measures reconcile() over record sets of increasing size, with the two
//! sides overlapping so all three phases (add, remove, modify) do work.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rdd::{reconcile, CellValue, Record};
use serde_json::json;

fn create_records(count: usize, offset: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let id = i + offset;
            let raw = json!({
                "id": id,
                "name": format!("name{}", id),
                "amount": (id as f64) / 4.0,
                "active": id % 2 == 0,
            });
            raw.as_object()
                .unwrap()
                .iter()
                .map(|(column, value)| (column.clone(), CellValue::from_json(value)))
                .collect()
        })
        .collect()
}

fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile");
    let key_columns = vec!["id".to_string()];

    // Test different record counts
    for size in [100, 1_000, 10_000].iter() {
        // Offset the target by 10% so each side has exclusive keys
        let source = create_records(*size, 0);
        let target = create_records(*size, size / 10);

        group.bench_with_input(
            BenchmarkId::new("overlapping", size),
            &(&source, &target),
            |b, (source, target)| {
                b.iter(|| {
                    reconcile(
                        &key_columns,
                        std::hint::black_box(source),
                        std::hint::black_box(target),
                        &[],
                    )
                    .unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_reconcile);
criterion_main!(benches);
