//! Performance benchmarks for page-metadata.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - A small article page for microbenchmarks
//! - Synthetic pages with growing meta tag counts for throughput

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use page_metadata::{parse, parse_default, Options};

const PAGE_URL: &str = "https://example.com/2024/05/sample-article";

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article | Example News</title>
    <meta name="author" content="John Doe">
    <meta name="description" content="A sample article for benchmarking.">
    <meta property="og:type" content="article">
    <meta property="og:title" content="Sample Article">
    <meta property="og:image" content="http://example.com/cover.jpg">
    <meta property="og:image:secure_url" content="https://example.com/cover.jpg">
    <meta property="article:published_time" content="2024-05-01T10:00:00Z">
    <meta name="twitter:card" content="summary_large_image">
    <link rel="canonical" href="/2024/05/sample-article">
</head>
<body>
    <article>
        <h1>Sample Article</h1>
        <p>Body text is irrelevant to metadata parsing but present for realism.</p>
    </article>
</body>
</html>
"#;

fn bench_parse_default(c: &mut Criterion) {
    c.bench_function("parse_default", |b| {
        b.iter(|| parse_default(black_box(PAGE_URL), black_box(SAMPLE_HTML)));
    });
}

fn bench_parse_with_options(c: &mut Criterion) {
    let options = Options {
        encode_fields: true,
        ensure_secure_image_request: true,
        ..Options::default()
    };

    c.bench_function("parse_with_options", |b| {
        b.iter(|| parse(black_box(PAGE_URL), black_box(SAMPLE_HTML), black_box(&options)));
    });
}

/// Pages with many meta tags, as served by tag-heavy CMS templates
fn bench_meta_heavy_pages(c: &mut Criterion) {
    let mut group = c.benchmark_group("meta_heavy");

    for count in [10_usize, 100, 1_000] {
        let mut html = String::from("<html><head>");
        for i in 0..count {
            html.push_str(&format!(r#"<meta name="custom-{i}" content="value {i}">"#));
        }
        html.push_str("</head><body></body></html>");

        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse", count), &html, |b, html| {
            b.iter(|| parse_default(black_box(PAGE_URL), black_box(html)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_default,
    bench_parse_with_options,
    bench_meta_heavy_pages
);
criterion_main!(benches);
