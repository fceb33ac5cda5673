use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mstring::MString;

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");

    for size in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::new("from_empty", size), size, |b, &size| {
            b.iter(|| {
                let mut s = MString::new().unwrap();

                for i in 0..size {
                    black_box(s.push(b'a' + (i % 26) as u8).unwrap());
                }

                black_box(s.len())
            });
        });
    }
    group.finish();
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("small_chunks", size), size, |b, &size| {
            b.iter(|| {
                let mut s = MString::new().unwrap();

                for i in 0..size {
                    let data = format!("element_{}", i);
                    black_box(s.append(data.as_bytes()).unwrap());
                }

                black_box(s.len())
            });
        });
        group.bench_with_input(BenchmarkId::new("reserved", size), size, |b, &size| {
            b.iter(|| {
                let mut s = MString::with_capacity(size * 16).unwrap();

                for i in 0..size {
                    let data = format!("element_{}", i);
                    black_box(s.append(data.as_bytes()).unwrap());
                }

                black_box(s.len())
            });
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [1000, 10000].iter() {
        let mut s = MString::new().unwrap();
        for _ in 0..*size {
            s.push(b'a').unwrap();
        }
        s.push_str("needle").unwrap();

        group.throughput(Throughput::Bytes(s.len() as u64));
        group.bench_with_input(BenchmarkId::new("find_char", size), &s, |b, s| {
            b.iter(|| black_box(s.find_char(black_box(b'n'))));
        });
        group.bench_with_input(BenchmarkId::new("find", size), &s, |b, s| {
            b.iter(|| black_box(s.find(black_box(b"needle"))));
        });
    }
    group.finish();
}

fn bench_resize_clear(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize_clear");

    for size in [1024, 65536].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::new("cycle", size), size, |b, &size| {
            let mut s = MString::new().unwrap();
            b.iter(|| {
                s.resize(size).unwrap();
                black_box(s.len());
                s.clear();
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_push,
    bench_append,
    bench_search,
    bench_resize_clear
);
criterion_main!(benches);
