// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt::Write as _;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use formlay_definitions::{JsonDefinitionSource, XmlDefinitionSource};
use serde_json::json;

fn document(len: usize) -> String {
    let fields: Vec<_> = (0..len)
        .map(|i| {
            json!({
                "field_id": format!("f{i}"),
                "type": "combo_box",
                "x": (i % 6) * 100,
                "y": (i / 6) * 40,
                "width": 90,
                "height": 30,
                "bold": "yes",
                "alignment": "center",
                "options": ["a", "b", "c"],
                "default_text": "b",
            })
        })
        .collect();
    json!({ "fields": fields }).to_string()
}

fn xml_document(len: usize) -> String {
    let mut text = String::from("<fields>");
    for i in 0..len {
        let _ = write!(
            text,
            "<field><field_id>f{i}</field_id><type>combo_box</type>\
             <x>{}</x><y>{}</y><width>90</width><height>30</height>\
             <bold>yes</bold><alignment>center</alignment>\
             <options><option>a</option><option>b</option><option>c</option></options>\
             <default_text>b</default_text></field>",
            (i % 6) * 100,
            (i / 6) * 40,
        );
    }
    text.push_str("</fields>");
    text
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("definitions/parse");

    for len in [16_usize, 256, 4_096] {
        let text = document(len);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| black_box(JsonDefinitionSource::parse_definitions(black_box(text)).unwrap()));
        });
    }

    group.finish();
}

fn bench_parse_xml(c: &mut Criterion) {
    let mut group = c.benchmark_group("definitions/parse_xml");

    for len in [16_usize, 256, 4_096] {
        let text = xml_document(len);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| black_box(XmlDefinitionSource::parse_definitions(black_box(text)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_parse_xml);
criterion_main!(benches);
