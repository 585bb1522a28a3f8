//! Benchmarks for the parse/serialize round trip.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use veneer::dom::find_element;
use veneer::{parse_fragment, serialize};

/// A body fragment with moderate depth and plenty of attributes.
fn sample_fragment(paragraphs: usize) -> String {
    let mut out = String::from("<div class=\"chapter\">\n");
    for i in 0..paragraphs {
        out.push_str(&format!(
            "  <section id=\"s{i}\">\n    <p class=\"body\">Lorem ipsum dolor sit \
             <em>amet</em>, consectetur <strong>adipiscing</strong> elit.</p>\n  </section>\n"
        ));
    }
    out.push_str("</div>\n");
    out
}

fn bench_serialize(c: &mut Criterion) {
    let source = sample_fragment(200);
    let fragment = parse_fragment(&source);

    c.bench_function("serialize_fragment", |b| {
        b.iter(|| black_box(serialize(&fragment)));
    });

    c.bench_function("parse_fragment", |b| {
        b.iter(|| black_box(parse_fragment(&source)));
    });

    c.bench_function("roundtrip", |b| {
        b.iter(|| black_box(serialize(&parse_fragment(&source))));
    });
}

fn bench_serialize_decorated(c: &mut Criterion) {
    let source = sample_fragment(200);
    let fragment = parse_fragment(&source);
    let p = find_element(&fragment, "p").expect("fragment should contain a p");
    p.set_lead_text(Some("{#if chapter.visible}".to_string()));
    p.set_trail_text(Some("{/if}".to_string()));

    c.bench_function("serialize_decorated", |b| {
        b.iter(|| black_box(serialize(&fragment)));
    });
}

criterion_group!(benches, bench_serialize, bench_serialize_decorated);
criterion_main!(benches);
