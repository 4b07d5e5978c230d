// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use formlay_fields::{
    ControlKind, FieldDescriptor, FieldLayout, FieldPlacement, HeadlessControlFactory,
};
use formlay_view::{BackgroundSource, ScrollRange, ViewportTransform, derive_range};
use kurbo::{Point, Size};

/// A background known only by its size.
#[derive(Clone, Copy)]
struct Scan(Size);

impl BackgroundSource for Scan {
    fn natural_size(&self) -> Size {
        self.0
    }

    fn scaled_to(&self, size: Size) -> Self {
        Self(size)
    }
}

fn form(len: usize) -> Vec<FieldDescriptor> {
    (0..len)
        .map(|i| {
            let kind = match i % 4 {
                0 => ControlKind::Label,
                1 => ControlKind::LineEdit,
                2 => ControlKind::Checkbox,
                _ => ControlKind::ComboBox,
            };
            let x = (i % 6) as f64 * 100.0;
            let y = (i / 6) as f64 * 40.0;
            FieldDescriptor::new(FieldPlacement::new(format!("f{i}"), x, y, 90.0, 30.0), kind)
        })
        .collect()
}

fn loaded(len: usize) -> FieldLayout {
    let mut layout = FieldLayout::new();
    layout
        .load_placements(form(len), &mut HeadlessControlFactory)
        .unwrap();
    layout
}

fn bench_update_all_positions(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/update_all_positions");

    for len in [16_usize, 128, 1_024] {
        group.throughput(Throughput::Elements(len as u64));
        let mut layout = loaded(len);
        let mut offset = 0.0;
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter(|| {
                offset = (offset + 7.0) % 900.0;
                layout.update_all_positions(black_box(Point::new(100.0, -offset)), offset);
            });
        });
    }

    group.finish();
}

fn bench_load_placements(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/load_placements");

    for len in [16_usize, 128, 1_024] {
        group.throughput(Throughput::Elements(len as u64));
        let descriptors = form(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &descriptors, |b, d| {
            b.iter_batched(
                || (FieldLayout::new(), d.clone()),
                |(mut layout, d)| {
                    layout
                        .load_placements(d, &mut HeadlessControlFactory)
                        .unwrap();
                    black_box(layout);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_field_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/field_at");
    let layout = loaded(1_024);
    let origin = Point::new(100.0, -200.0);

    group.bench_function("hit_last", |b| {
        b.iter(|| black_box(layout.field_at(black_box(Point::new(650.0, 6_620.0)), origin, 200.0)));
    });
    group.bench_function("miss", |b| {
        b.iter(|| black_box(layout.field_at(black_box(Point::new(5.0, 5.0)), origin, 200.0)));
    });

    group.finish();
}

/// One scroll step as the surface performs it: clamp, move, re-lay out.
fn bench_scroll_pass(c: &mut Criterion) {
    let mut transform = ViewportTransform::new(600.0);
    transform.set_background_image(Scan(Size::new(1000.0, 2000.0))).unwrap();
    transform.set_viewport_size(Size::new(800.0, 800.0));
    let mut range = ScrollRange::new();
    let (max_offset, page_step) = derive_range(transform.scaled_size().height, 800.0);
    range.set_range(max_offset, page_step);
    let mut layout = loaded(128);
    let mut delta = -40.0;

    c.bench_function("layout/scroll_pass_128", |b| {
        b.iter(|| {
            if range.offset() >= range.max_offset() || range.offset() <= 0.0 {
                delta = -delta;
            }
            if let Some(offset) = range.scroll_by(delta) {
                transform.set_scroll_offset(offset);
                layout.update_all_positions(transform.background_origin(), offset);
            }
        });
    });
}

criterion_group!(
    benches,
    bench_update_all_positions,
    bench_load_placements,
    bench_field_at,
    bench_scroll_pass
);
criterion_main!(benches);
