use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use json_codec::{parse, stringify};

fn build_document(records: usize) -> String {
    let mut out = String::from("[");

    for i in 0..records {
        if i > 0 {
            out.push(',');
        }

        out.push_str(&format!(
            r#"{{"id":{},"name":"record {}","score":{}.5,"tags":["a","b","c"],"active":{},"parent":null}}"#,
            i,
            i,
            i,
            i % 2 == 0
        ));
    }

    out.push(']');
    out
}

fn codec_benchmark(c: &mut Criterion) {
    let sizes: [usize; 2] = [100, 10_000];
    let mut group = c.benchmark_group("Codec");

    group.sample_size(10);

    for size in sizes {
        let json = build_document(size);

        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("parse", size),
            &json,
            |b, data| {
                b.iter(|| {
                    let _ = parse(black_box(data)).unwrap();
                })
            },
        );

        let value = parse(&json).unwrap();

        group.bench_with_input(
            BenchmarkId::new("stringify", size),
            &value,
            |b, data| {
                b.iter(|| {
                    let _ = stringify(black_box(data));
                })
            },
        );
    }
}

criterion_group!(benches, codec_benchmark);
criterion_main!(benches);
