use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use navtxt::records::{Airport, RecordKind, Records, Runway};

const AIRPORT: &str = "A,KJFK,JOHN F KENNEDY INTL,40.63993,-73.77869,13,18000";
const RUNWAY: &str = "R,04L,044,12079,144,550,0.0,0.0,40.62021,-73.78608,13";

/// Benchmark individual record parsing
fn bench_records(c: &mut Criterion) {
    c.bench_function("airport", |b| {
        b.iter(|| Airport::try_from(black_box(AIRPORT)))
    });

    c.bench_function("runway", |b| b.iter(|| Runway::try_from(black_box(RUNWAY))));
}

/// Benchmark scanning a synthetic airport file
fn bench_scan(c: &mut Criterion) {
    let mut data = String::new();
    for i in 0..1000 {
        data.push_str(&format!("A,X{i:03},SYNTHETIC FIELD {i},53.0,9.0,53,18000\n"));
        data.push_str("R,09,087,8000,150,550,0.0,0.0,53.1,9.1,53\n");
        data.push_str("R,27,267,8000,150,550,0.0,0.0,53.2,9.2,53\n");
    }

    let mut group = c.benchmark_group("scan");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("airports", |b| {
        b.iter(|| {
            let mut count = 0;
            for (kind, line) in Records::new(black_box(&data)) {
                if let RecordKind::Airport = kind {
                    if Airport::try_from(line).is_ok() {
                        count += 1;
                    }
                }
            }
            black_box(count)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_records, bench_scan);
criterion_main!(benches);
