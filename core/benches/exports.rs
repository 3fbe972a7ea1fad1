//! Performance benchmarks for clientbook-core exporters

use chrono::NaiveDate;
use clientbook_core::{export, Client, ClientDraft, ExportFormat, ExportOptions, MemoryStore};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn snapshot(size: usize) -> Vec<Client> {
    let created = NaiveDate::from_ymd_opt(2025, 12, 15)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    (1..=size)
        .map(|i| {
            ClientDraft::new(format!("Client {}", i), format!("client{}@example.test", i))
                .with_phone("+79991234567")
                .with_company("Example Ltd")
                .into_client(i as i64, created)
        })
        .collect()
}

fn bench_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");

    group.bench_function("insert", |b| {
        let store = MemoryStore::new();
        b.iter(|| store.insert(black_box(ClientDraft::new("Bench", "bench@example.test"))))
    });

    group.bench_function("snapshot_1000", |b| {
        let store = MemoryStore::new();
        for i in 0..1000 {
            store.insert(ClientDraft::new(format!("Client {}", i), "bulk@example.test"));
        }
        b.iter(|| black_box(store.snapshot()))
    });

    group.finish();
}

fn bench_exports(c: &mut Criterion) {
    let mut group = c.benchmark_group("exports");
    let options = ExportOptions::default();
    let generated_at = clientbook_core::now();

    for size in [10usize, 100, 1000] {
        let records = snapshot(size);
        for format in ExportFormat::ALL {
            group.bench_with_input(
                BenchmarkId::new(format.as_str(), size),
                &records,
                |b, records| {
                    b.iter(|| export(black_box(format), black_box(records), &options, generated_at))
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_store, bench_exports);
criterion_main!(benches);
