// File: crates/chart-core/tests/interaction.rs
// Purpose: Hover state keeps at most one tooltip and hit tests markers in content space.

use chart_core::scene::Element;
use chart_core::{classify, render, ChartView, Dataset, Layer, PointerEvent, RawPoint, RenderOptions};

fn view(points: Vec<RawPoint>) -> ChartView {
    ChartView::new(render(&classify(&Dataset::new("hover", points)), &RenderOptions::default()))
}

fn tooltip_texts(overlay: &[Element]) -> Vec<String> {
    overlay
        .iter()
        .filter_map(|e| match e {
            Element::Text { layer: Layer::Tooltip, text } => Some(text.content.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn enter_replaces_previous_tooltip() {
    let mut v = view(vec![RawPoint::scalar(0.0, Some(1.0)), RawPoint::scalar(1.0, None), RawPoint::scalar(2.0, Some(3.25))]);
    assert!(v.overlay().is_empty());

    assert!(v.handle(PointerEvent::Enter(0)));
    assert!(v.handle(PointerEvent::Enter(1)));
    assert_eq!(v.active(), Some(1));

    let overlay = v.overlay();
    let boxes = overlay.iter().filter(|e| matches!(e, Element::Rect { layer: Layer::Tooltip, .. })).count();
    assert_eq!(boxes, 1);
    assert_eq!(tooltip_texts(&overlay), vec!["3.250"]);
    assert!(overlay.iter().any(|e| matches!(e, Element::Circle { opacity, .. } if *opacity == 1.0)));

    // leaving a marker that is not active changes nothing
    assert!(!v.handle(PointerEvent::Leave(0)));
    assert!(v.handle(PointerEvent::Leave(1)));
    assert_eq!(v.active(), None);
    assert!(v.overlay().is_empty());
}

#[test]
fn tooltip_sits_above_marker() {
    let mut v = view(vec![RawPoint::scalar(0.0, Some(1.0)), RawPoint::scalar(2.0, Some(3.0))]);
    v.handle(PointerEvent::Enter(0));
    let center = v.scene().markers[0].center;
    let rect = v.overlay().into_iter().find_map(|e| match e {
        Element::Rect { rect, .. } => Some(rect),
        _ => None,
    });
    let rect = rect.expect("tooltip box");
    assert_eq!(rect.left, center.x - 25.0);
    assert_eq!(rect.top, center.y - 30.0);
    assert_eq!(rect.width(), 50.0);
    assert_eq!(rect.height(), 15.0);
}

#[test]
fn multi_series_tooltip_names_series() {
    let mut v = view(vec![
        RawPoint::bundle(0.0, vec![Some(1.0), None, Some(5.0)]),
        RawPoint::bundle(1.0, vec![Some(2.0), Some(3.0), None]),
    ]);
    let i = v.scene().markers.iter().position(|m| m.series == Some(1)).expect("series 1 marker");
    v.handle(PointerEvent::Enter(i));
    assert_eq!(tooltip_texts(&v.overlay()), vec!["Series 2", "3.000"]);
}

#[test]
fn pointer_moves_are_hit_tested() {
    let mut v = view(vec![RawPoint::scalar(0.0, Some(1.0)), RawPoint::scalar(2.0, Some(3.0))]);
    // marker 0 is at plot (0, 340); the plot origin is (50, 20)
    assert!(v.handle(PointerEvent::Move { x: 52.0, y: 361.0 }));
    assert_eq!(v.active(), Some(0));
    assert!(!v.handle(PointerEvent::Move { x: 51.0, y: 360.0 }));
    assert!(v.handle(PointerEvent::Move { x: 400.0, y: 200.0 }));
    assert_eq!(v.active(), None);

    v.handle(PointerEvent::Enter(1));
    assert!(v.handle(PointerEvent::Exit));
    assert_eq!(v.active(), None);
}

#[test]
fn out_of_range_enter_is_ignored_and_redraw_resets() {
    let mut v = view(vec![RawPoint::scalar(0.0, Some(1.0))]);
    assert!(!v.handle(PointerEvent::Enter(9)));
    v.handle(PointerEvent::Enter(0));
    let scene = v.scene().clone();
    v.replace_scene(scene);
    assert_eq!(v.active(), None);
}
