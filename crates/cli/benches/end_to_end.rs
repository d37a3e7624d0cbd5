use clap::Parser;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use text_stats_cli::args::Args;
use text_stats_cli::config::Config;
use text_stats_cli::presentation::render;

fn benchmark_cli_parsing(c: &mut Criterion) {
    c.bench_function("parse_args_simple", |b| {
        b.iter(|| {
            let args = Args::try_parse_from(black_box(["text_stats", "--format", "json"])).unwrap();
            black_box(args);
        });
    });
}

fn benchmark_render_table(c: &mut Criterion) {
    let config = Config::default();
    let text = "Lorem ipsum dolor sit amet. ".repeat(150);
    let report = text_stats_engine::analyze(&config, &text).unwrap();

    c.bench_function("render_table", |b| {
        b.iter(|| render(black_box(&report), config.format).unwrap());
    });
}

criterion_group!(benches, benchmark_cli_parsing, benchmark_render_table);
criterion_main!(benches);
