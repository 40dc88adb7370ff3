use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use partdelta::{
    multiset_eq, resolve_record, BalanceRecord, PartRef, RecordKind, ResolverPool, RuntimeConfig,
    SlotData, WeightedPart,
};

fn slot(prefix: &str, count: usize) -> SlotData {
    SlotData::enabled(
        (0..count)
            .map(|i| WeightedPart::new(format!("{prefix}.Part{i}"), 1.0))
            .collect(),
    )
}

fn make_record(id: usize, base: &Arc<BalanceRecord>) -> BalanceRecord {
    let mut record = BalanceRecord::new(format!("GD_Weap.Bench.R{id}"), RecordKind::Weapon)
        .with_base(Arc::clone(base));
    for &name in RecordKind::Weapon.slot_order() {
        record = record.with_slot(name, SlotData::disabled());
    }
    // One additive slot, one escalating slot.
    record
        .with_slot("grip", slot("GD_Weap.Grip", 17))
        .with_slot("body", slot("GD_Weap.Body", 7))
}

fn make_base() -> Arc<BalanceRecord> {
    let mut base = BalanceRecord::new("GD_Weap.Bench.Base", RecordKind::Weapon);
    for &name in RecordKind::Weapon.slot_order() {
        base = base.with_slot(name, SlotData::disabled());
    }
    Arc::new(
        base.with_slot("grip", slot("GD_Weap.Grip", 16))
            .with_slot("body", slot("GD_Weap.Body", 8)),
    )
}

fn bench_resolve_record(c: &mut Criterion) {
    let base = make_base();
    let record = make_record(0, &base);

    let mut group = c.benchmark_group("resolve");
    group.throughput(Throughput::Elements(1));
    group.bench_function("resolve/record", |b| {
        b.iter(|| resolve_record(std::hint::black_box(&record)).unwrap());
    });
    group.finish();
}

fn bench_resolve_batch(c: &mut Criterion) {
    let base = make_base();
    let records: Vec<BalanceRecord> = (0..256).map(|i| make_record(i, &base)).collect();

    let mut group = c.benchmark_group("resolve_batch");
    group.throughput(Throughput::Elements(records.len() as u64));
    group.bench_function("resolve/batch_256", |b| {
        b.iter_custom(|iters| {
            let pool = ResolverPool::new(RuntimeConfig {
                workers: 4,
                queue_capacity: 64,
            });
            let started = std::time::Instant::now();
            for _ in 0..iters {
                let results = pool.resolve_batch(records.clone());
                assert!(results.iter().all(Result::is_ok));
            }
            started.elapsed()
        });
    });
    group.finish();
}

fn bench_multiset_eq(c: &mut Criterion) {
    let a: Vec<Option<PartRef>> = (0..64)
        .map(|i| Some(PartRef::new(format!("GD_Weap.Grip.Part{i}"))))
        .collect();
    let mut b = a.clone();
    b.reverse();

    c.bench_function("multiset/eq_64", |bench| {
        bench.iter(|| multiset_eq(std::hint::black_box(&a), std::hint::black_box(&b)));
    });
}

criterion_group!(
    benches,
    bench_resolve_record,
    bench_resolve_batch,
    bench_multiset_eq
);
criterion_main!(benches);
