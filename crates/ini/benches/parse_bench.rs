use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

use ini::{Options, load_from_str};

fn make_ini(sections: usize, keys_per_section: usize) -> String {
    let mut s = String::new();
    s.push_str("; generated benchmark input\n");
    for section in 0..sections {
        s.push_str(&format!("[section_{section}]\n"));
        for key in 0..keys_per_section {
            s.push_str(&format!("key_{key} = value_{section}_{key} ; noise\n"));
        }
    }
    s
}

pub fn parse_benchmarks(c: &mut Criterion) {
    let cases = [
        ("small", make_ini(4, 8)),
        ("medium", make_ini(64, 32)),
        ("large", make_ini(512, 64)),
    ];

    let mut group = c.benchmark_group("parse_ini");
    for (name, doc) in &cases {
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_function(format!("default::{name}"), |b| {
            b.iter_batched(
                || doc.clone(),
                |s| load_from_str(s, &Options::default()),
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("no_warnings::{name}"), |b| {
            let options = Options {
                disable_warnings: true,
                ..Options::default()
            };
            b.iter_batched(
                || doc.clone(),
                |s| load_from_str(s, &options),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();

    let mut group = c.benchmark_group("lookup");
    let doc = load_from_str(make_ini(64, 32), &Options::default());
    group.bench_function("scoped", |b| {
        b.iter(|| doc.get_from(black_box("section_32"), black_box("key_16")))
    });
    group.bench_function("global", |b| b.iter(|| doc.get(black_box("key_31"))));
    group.finish();
}

criterion_group!(benches, parse_benchmarks);
criterion_main!(benches);
