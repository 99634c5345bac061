//! Performance benchmarks for the contact export path.
//!
//! These benchmarks measure:
//! - Parsing a card page
//! - Extracting the contact record
//! - Rendering the vCard in each dialect
//! - Building the navigation data URI

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ecard::delivery::data_uri;
use ecard::{render_vcard, HtmlPage, ProfileExtractor, VCardDialect};
use std::sync::Arc;
use std::time::Duration;

const CARD_HTML: &str = r#"
<html><body>
  <div class="ecard-bg-pattern"></div>
  <button id="darkModeToggle"><i class="fas fa-moon"></i></button>
  <h1 id="ecard-name" class="animate-element" data-delay="100">John Smith</h1>
  <p id="ecard-role" class="animate-element" data-delay="200">Sales Director at ABC Corp</p>
  <p id="ecard-department">Regional Lead at ABC West</p>
  <span id="ecard-office-phone">Office: +1 (555) 010-0000</span>
  <span id="ecard-personal-phone">Personal: +1 (555) 010-0199</span>
  <a id="ecard-email">john@abc.example</a>
  <a id="ecard-website" href="https://abc.example">abc.example</a>
  <p id="ecard-address">1 Main St, Suite 5; Springfield</p>
  <a id="ecard-linkedin" class="ecard-social-btn" href="https://linkedin.com/in/jsmith"></a>
  <a id="ecard-facebook" class="ecard-social-btn" href="https://facebook.com/jsmith"></a>
</body></html>
"#;

/// Benchmark parsing the card page into a snapshot.
fn bench_parse_page(c: &mut Criterion) {
    c.bench_function("parse_page", |b| {
        b.iter(|| HtmlPage::parse(black_box(CARD_HTML)));
    });
}

/// Benchmark reading the contact record from a parsed page.
fn bench_extract(c: &mut Criterion) {
    let extractor = ProfileExtractor::new(Arc::new(HtmlPage::parse(CARD_HTML)));

    c.bench_function("extract_contact", |b| {
        b.iter(|| black_box(extractor.extract()));
    });
}

/// Benchmark vCard rendering in both dialects.
fn bench_render(c: &mut Criterion) {
    let record = ProfileExtractor::new(Arc::new(HtmlPage::parse(CARD_HTML))).extract();
    let mut group = c.benchmark_group("render_vcard");

    for dialect in [VCardDialect::Strict, VCardDialect::Legacy] {
        group.bench_with_input(
            BenchmarkId::from_parameter(dialect),
            &dialect,
            |b, &dialect| {
                b.iter(|| render_vcard(black_box(&record), dialect));
            },
        );
    }

    group.finish();
}

/// Benchmark the full page-to-data-URI path used for navigation delivery.
fn bench_page_to_data_uri(c: &mut Criterion) {
    c.bench_function("page_to_data_uri", |b| {
        b.iter(|| {
            let page = Arc::new(HtmlPage::parse(black_box(CARD_HTML)));
            let record = ProfileExtractor::new(page).extract();
            data_uri(&render_vcard(&record, VCardDialect::Strict))
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    targets = bench_parse_page, bench_extract, bench_render, bench_page_to_data_uri
}

criterion_main!(benches);
