// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end behavior of a headless surface.

use std::fs;

use formlay_definitions::JsonDefinitionSource;
use formlay_fields::{ControlKind, FieldDescriptor, FieldPlacement, FieldValue};
use formlay_surface::{
    BackgroundImage, PaintOp, PaintRecorder, Renderable, Surface, SurfaceConfig, SurfaceError,
};
use formlay_view::ScrollState;
use image::RgbaImage;
use kurbo::{Point, Rect, Size};
use proptest::prelude::*;

fn background(width: u32, height: u32) -> BackgroundImage {
    BackgroundImage::from(RgbaImage::new(width, height))
}

fn surface(fixed_width: f64, viewport: Size) -> Surface {
    let mut surface = Surface::headless(SurfaceConfig::default().with_fixed_width(fixed_width));
    surface.resize(viewport);
    surface
}

#[test]
fn scenario_a_tall_background_scrolls_and_clamps() {
    let mut surface = surface(600.0, Size::new(600.0, 800.0));
    surface.set_background_image(background(1000, 2000)).unwrap();

    assert_eq!(surface.transform().scaled_size(), Size::new(600.0, 1200.0));
    assert_eq!(surface.max_offset(), 400.0);
    assert_eq!(surface.page_step(), 400.0);
    assert_eq!(surface.scroll_state(), ScrollState::Active);

    assert_eq!(surface.scroll_to(500.0), Some(400.0));
    assert_eq!(surface.scroll_offset(), 400.0);
    assert_eq!(surface.indicator().value(), 400.0);
    assert_eq!(surface.indicator().max_offset(), 400.0);
    assert_eq!(surface.indicator().page_step(), 400.0);
}

#[test]
fn scenario_b_narrow_background_is_centered() {
    let mut surface = surface(600.0, Size::new(800.0, 800.0));
    surface.set_background_image(background(1000, 2000)).unwrap();

    assert_eq!(surface.transform().center_x(), 100.0);
    assert_eq!(surface.transform().background_origin(), Point::new(100.0, 0.0));
}

#[test]
fn scenario_e_growing_viewport_deactivates_scrolling() {
    let mut surface = surface(600.0, Size::new(600.0, 800.0));
    surface.set_background_image(background(1000, 2000)).unwrap();
    surface
        .load_fields(vec![FieldDescriptor::new(
            FieldPlacement::new("sig", 20.0, 1100.0, 200.0, 40.0),
            ControlKind::LineEdit,
        )])
        .unwrap();
    surface.scroll_to(300.0);
    assert!(surface.indicator().is_visible());

    surface.resize(Size::new(600.0, 1200.0));

    assert_eq!(surface.scroll_state(), ScrollState::Inactive);
    assert_eq!(surface.scroll_offset(), 0.0);
    assert_eq!(surface.max_offset(), 0.0);
    assert!(!surface.indicator().is_visible());
    assert_eq!(surface.indicator().value(), 0.0);
    assert_eq!(surface.transform().scroll_offset(), 0.0);
    assert_eq!(
        surface.fields().control("sig").unwrap().geometry(),
        Rect::new(20.0, 1100.0, 220.0, 1140.0)
    );
}

#[test]
fn shrinking_viewport_reclamps_offset_and_moves_fields() {
    let mut surface = surface(600.0, Size::new(600.0, 400.0));
    surface.set_background_image(background(1000, 2000)).unwrap();
    surface
        .load_fields(vec![FieldDescriptor::new(
            FieldPlacement::new("a", 0.0, 900.0, 50.0, 20.0),
            ControlKind::Label,
        )])
        .unwrap();
    surface.scroll_to(800.0);

    surface.resize(Size::new(600.0, 600.0));

    assert_eq!(surface.max_offset(), 600.0);
    assert_eq!(surface.scroll_offset(), 600.0);
    assert_eq!(surface.indicator().value(), 600.0);
    assert_eq!(
        surface.fields().control("a").unwrap().geometry(),
        Rect::new(0.0, 300.0, 50.0, 320.0)
    );
    assert_eq!(
        surface.indicator().geometry(),
        Rect::new(582.0, 0.0, 600.0, 600.0)
    );
}

#[test]
fn fields_loaded_before_background_follow_it() {
    let mut surface = surface(600.0, Size::new(800.0, 800.0));
    surface
        .load_fields(vec![FieldDescriptor::new(
            FieldPlacement::new("name", 50.0, 300.0, 120.0, 24.0),
            ControlKind::LineEdit,
        )])
        .unwrap();
    assert_eq!(
        surface.field_rect("name").unwrap(),
        Rect::new(50.0, 300.0, 170.0, 324.0)
    );

    surface.set_background_image(background(1000, 2000)).unwrap();
    surface.scroll_to(150.0);

    let rect = Rect::new(150.0, 150.0, 270.0, 174.0);
    assert_eq!(surface.field_rect("name").unwrap(), rect);
    assert_eq!(surface.fields().control("name").unwrap().geometry(), rect);
    assert_eq!(surface.field_at(Point::new(160.0, 160.0)), Some("name"));
}

#[test]
fn rejected_background_keeps_previous_state() {
    let mut surface = surface(600.0, Size::new(600.0, 800.0));
    surface.set_background_image(background(1000, 2000)).unwrap();
    surface.scroll_to(100.0);

    let err = surface.set_background_image(background(0, 0)).unwrap_err();
    assert!(matches!(err, SurfaceError::InvalidImage(_)));

    let missing = std::env::temp_dir().join("formlay-missing-background.png");
    let err = surface.load_background(&missing).unwrap_err();
    assert!(matches!(err, SurfaceError::Decode(_)));

    assert_eq!(surface.transform().scaled_size(), Size::new(600.0, 1200.0));
    assert_eq!(surface.scroll_offset(), 100.0);
}

#[test]
fn duplicate_definitions_keep_previous_fields() {
    let mut surface = surface(600.0, Size::new(600.0, 800.0));
    surface
        .load_fields(vec![FieldDescriptor::new(
            FieldPlacement::new("old", 0.0, 0.0, 10.0, 10.0),
            ControlKind::Label,
        )])
        .unwrap();

    let dup = |y| {
        FieldDescriptor::new(
            FieldPlacement::new("name", 0.0, y, 10.0, 10.0),
            ControlKind::LineEdit,
        )
    };
    let err = surface.load_fields(vec![dup(0.0), dup(40.0)]).unwrap_err();
    assert!(matches!(err, SurfaceError::Definition(_)));
    assert!(surface.fields().contains("old"));
    assert!(!surface.fields().contains("name"));
}

#[test]
fn fields_load_from_a_definition_file() {
    let path = std::env::temp_dir().join(format!("formlay-surface-{}.json", std::process::id()));
    fs::write(
        &path,
        r#"{ "fields": [
            { "field_id": "city", "type": "combo_box", "x": 10, "y": 10,
              "options": ["Oslo", "Bergen"], "default_text": "Oslo" },
            { "field_id": "gauge", "type": "dial" }
        ] }"#,
    )
    .unwrap();
    let mut surface = surface(600.0, Size::new(600.0, 800.0));
    let report = surface
        .load_fields_from(&JsonDefinitionSource::new(), &path)
        .unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(report.loaded, 2);
    assert_eq!(report.placeholders, ["gauge"]);
    surface
        .set_field_value("city", FieldValue::Text("Bergen".into()))
        .unwrap();
    assert_eq!(
        surface.field_value("city").unwrap(),
        FieldValue::Selection("Bergen".into())
    );
}

#[test]
fn indicator_echo_does_not_loop() {
    let mut surface = surface(600.0, Size::new(600.0, 800.0));
    surface.set_background_image(background(1000, 2000)).unwrap();
    let before = surface.indicator().value_updates();

    assert_eq!(surface.indicator_moved(250.0), Some(250.0));
    // A toolkit scroll bar reports the value it was just given.
    let echoed = surface.indicator().value();
    assert_eq!(surface.indicator_moved(echoed), None);

    assert_eq!(surface.indicator().value_updates(), before + 1);
}

#[test]
fn render_draws_background_then_overlay() {
    let mut surface = surface(600.0, Size::new(800.0, 800.0));
    surface.set_background_image(background(1000, 2000)).unwrap();
    surface.set_debug_mode(true);
    surface.pointer_moved(Point::new(350.0, 240.0));

    let mut frame = PaintRecorder::new();
    surface.render(&mut frame);
    let ops = frame.ops();
    assert_eq!(ops.len(), 5);
    match &ops[0] {
        PaintOp::Image { origin, size } => {
            assert_eq!(*origin, Point::new(100.0, 0.0));
            assert_eq!(*size, Size::new(600.0, 1200.0));
        }
        other => panic!("expected background image, got {other:?}"),
    }
    match &ops[4] {
        PaintOp::Text { text, .. } => assert_eq!(text, "X: 250, Y: 240\nWidget: 350, 240"),
        other => panic!("expected readout, got {other:?}"),
    }
}

#[test]
fn debug_readout_tracks_scrolling() {
    let mut surface = surface(600.0, Size::new(800.0, 800.0));
    surface.set_background_image(background(1000, 2000)).unwrap();
    surface.set_debug_mode(true);
    surface.pointer_moved(Point::new(350.0, 240.0));
    surface.scroll_to(100.0);
    assert_eq!(
        surface.debug_overlay().background_point(),
        Point::new(250.0, 340.0)
    );
}

proptest! {
    // Every case resamples a full background.
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn background_space_round_trips(
        viewport_w in 100_u32..2_000,
        viewport_h in 100_u32..2_000,
        offset in -500_i32..3_000,
        px in -1_000_i32..3_000,
        py in -1_000_i32..3_000,
    ) {
        let viewport = Size::new(f64::from(viewport_w), f64::from(viewport_h));
        let mut surface = surface(600.0, viewport);
        surface.set_background_image(background(1000, 2000)).unwrap();
        surface.scroll_to(f64::from(offset));

        let p = Point::new(f64::from(px), f64::from(py));
        let b = surface.point_to_background_space(p);
        prop_assert_eq!(surface.transform().background_to_viewport(b), p);
    }

    #[test]
    fn offset_stays_in_range_after_any_resize(
        start_h in 100_u32..3_000,
        end_h in 100_u32..3_000,
        offset in 0_u32..3_000,
    ) {
        let mut surface = surface(600.0, Size::new(600.0, f64::from(start_h)));
        surface.set_background_image(background(1000, 2000)).unwrap();
        surface.scroll_to(f64::from(offset));
        surface.resize(Size::new(600.0, f64::from(end_h)));

        let max = (1200.0 - f64::from(end_h)).max(0.0);
        prop_assert!(surface.scroll_offset() >= 0.0);
        prop_assert!(surface.scroll_offset() <= max);
        prop_assert_eq!(surface.scroll_state().is_active(), max > 0.0);
        prop_assert_eq!(surface.indicator().value(), surface.scroll_offset());
    }
}
