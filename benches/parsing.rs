//! Benchmarks for msnpack parsing and processing operations.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- msn_parsing`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use msnpack::Message;
use msnpack::config::{ChunkConfig, MsnConfig};
use msnpack::core::output::to_json;
use msnpack::core::{FilterConfig, OutputConfig, apply_filters, build_conversations};
use msnpack::parser::Parser;
use msnpack::parsers::MsnParser;
use msnpack::parsing::{ParticipantMap, heavy_normalize};

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_log_html(count: usize) -> String {
    let mut rows = Vec::with_capacity(count);
    for i in 0..count {
        let sender = if i % 2 == 0 { "Jane D. - away" } else { "Me [b]:)[/b]" };
        let content = if i % 10 == 0 {
            format!("https://example.com/{i}")
        } else {
            format!("Message numéro {i}")
        };
        rows.push(format!(
            r#"<tr><th><span class="time">({:02}:{:02})</span> {sender} :</th><td>{content}</td></tr>"#,
            i % 24,
            i % 60
        ));
    }
    format!(
        r#"<html><body><div class="mplsession">
<h2>Session démarrée le 1 mai 2009</h2>
<ul><li>Jane Doe - away (jane.doe@example.com)</li><li>Me (me@example.com)</li></ul>
<table>{}</table>
</div></body></html>"#,
        rows.join("\n")
    )
}

fn parse_messages(html: &str) -> Vec<Message> {
    MsnParser::with_config(MsnConfig::new("me@example.com"))
        .parse_str(html)
        .unwrap()
        .into_iter()
        .flat_map(|s| s.messages)
        .collect()
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_msn_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("msn_parsing");
    let parser = MsnParser::with_config(MsnConfig::new("me@example.com"));

    for size in [100_usize, 1_000, 10_000] {
        let html = generate_log_html(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &html, |b, html| {
            b.iter(|| {
                let sessions = parser.parse_str(black_box(html)).unwrap();
                black_box(sessions)
            });
        });
    }
    group.finish();
}

fn bench_name_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("name_resolution");
    let map = ParticipantMap::from_entries([
        "Jane Doe - away (jane.doe@example.com)",
        "Me (me@example.com)",
        "Bob [busy] (bob@example.com)",
        "Nobody In Particular",
    ]);

    for sender in ["Jane Doe", "Jane D.", "bob", "Stranger"] {
        group.bench_with_input(BenchmarkId::from_parameter(sender), &sender, |b, sender| {
            b.iter(|| black_box(map.resolve(black_box(sender))));
        });
    }
    group.bench_function("heavy_normalize", |b| {
        b.iter(|| black_box(heavy_normalize(black_box("  ♥ Jane [b]D.[/b] - en pause :"))));
    });
    group.finish();
}

// =============================================================================
// Processing Benchmarks
// =============================================================================

fn bench_filter_and_chunk(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_and_chunk");
    let filter = FilterConfig::new();
    let chunking = ChunkConfig::default();

    for size in [1_000_usize, 10_000] {
        let messages = parse_messages(&generate_log_html(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &messages,
            |b, messages| {
                b.iter(|| {
                    let kept = apply_filters(messages.clone(), &filter);
                    black_box(build_conversations(&kept, &chunking))
                });
            },
        );
    }
    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let output_config = OutputConfig::new();

    for size in [1_000_usize, 10_000] {
        let html = generate_log_html(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &html, |b, html| {
            b.iter(|| {
                let messages = parse_messages(black_box(html));
                let kept = apply_filters(messages, &FilterConfig::new());
                let json: Vec<String> = build_conversations(&kept, &ChunkConfig::default())
                    .iter()
                    .map(|c| to_json(c, &output_config).unwrap())
                    .collect();
                black_box(json)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_msn_parsing,
    bench_name_resolution,
    bench_filter_and_chunk,
    bench_full_pipeline,
);

criterion_main!(benches);
