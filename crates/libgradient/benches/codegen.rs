#[path = "../tests/common.rs"]
mod common;

use criterion::{criterion_group, criterion_main, Criterion};
use libgradient::{generate, parse, OutputFormat};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let specs = common::assorted_specs();

    for format in OutputFormat::ALL {
        group.bench_with_input(format.as_str(), &specs, |b, specs| {
            b.iter(|| {
                specs
                    .iter()
                    .map(|spec| generate(format, spec))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let sources = common::assorted_specs()
        .iter()
        .map(|spec| generate(OutputFormat::Css, spec).unwrap())
        .collect::<Vec<_>>();

    c.bench_function("parse css", |b| {
        b.iter(|| sources.iter().map(|css| parse(css)).collect::<Vec<_>>())
    });
}

criterion_group!(benches, bench_generate, bench_parse);
criterion_main!(benches);
