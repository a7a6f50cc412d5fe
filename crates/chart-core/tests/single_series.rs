// File: crates/chart-core/tests/single_series.rs
// Purpose: Single-series scene geometry: domains, gaps, markers and chrome.

use chart_core::scene::{Element, Fill};
use chart_core::series::SingleSeries;
use chart_core::single::render_single;
use chart_core::{Layer, RenderOptions};

fn series(points: Vec<(f64, Option<f64>)>) -> SingleSeries {
    SingleSeries { title: "test".into(), points }
}

fn axis_labels(scene: &chart_core::Scene) -> Vec<String> {
    scene
        .elements
        .iter()
        .filter_map(|e| match e {
            Element::Text { layer: Layer::Axis, text } => Some(text.content.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn null_breaks_line_once_and_markers_skip_it() {
    let scene = render_single(&series(vec![(0.0, Some(1.0)), (1.0, None), (2.0, Some(3.0))]), &RenderOptions::default());

    let lines: Vec<_> = scene.paths(Layer::Series).collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].subpath_count(), 2, "exactly one break around x=1");

    let xs: Vec<f64> = scene.markers.iter().map(|m| m.x).collect();
    assert_eq!(xs, vec![0.0, 2.0]);
    assert!(scene.markers.iter().all(|m| m.series.is_none()));

    // x spans the plot width, y is inverted (max at the top)
    assert_eq!(scene.markers[0].center.x, 0.0);
    assert_eq!(scene.markers[0].center.y, 340.0);
    assert_eq!(scene.markers[1].center.x, 720.0);
    assert_eq!(scene.markers[1].center.y, 0.0);
}

#[test]
fn area_shares_gaps_and_uses_gradient() {
    let scene = render_single(&series(vec![(0.0, Some(1.0)), (1.0, Some(2.0)), (2.0, None), (3.0, Some(2.0))]), &RenderOptions::default());
    let areas: Vec<_> = scene.paths(Layer::Area).collect();
    assert_eq!(areas.len(), 1);
    assert_eq!(areas[0].subpath_count(), 2);
    assert_eq!(scene.gradients.len(), 1);
    assert!(scene.elements.iter().any(|e| matches!(e, Element::Path { layer: Layer::Area, fill: Fill::Gradient(0), .. })));
}

#[test]
fn x_domain_covers_all_points_in_any_order() {
    // trailing null at the largest x still widens the x-domain
    let scene = render_single(&series(vec![(5.0, Some(2.0)), (0.0, Some(4.0)), (10.0, None)]), &RenderOptions::default());
    let by_x = |x: f64| scene.markers.iter().find(|m| m.x == x).map(|m| m.center.x);
    assert_eq!(by_x(0.0), Some(0.0));
    assert_eq!(by_x(5.0), Some(360.0));
}

#[test]
fn y_domain_is_niced() {
    let scene = render_single(&series(vec![(0.0, Some(1.3)), (1.0, Some(4.7))]), &RenderOptions::default());
    let labels = axis_labels(&scene);
    // left axis runs over the niced domain [1, 5] in steps of 0.5
    assert!(labels.contains(&"1.0".to_string()));
    assert!(labels.contains(&"5.0".to_string()));
    let low = scene.markers.iter().find(|m| m.y == 1.3).map(|m| m.center.y).unwrap_or_default();
    assert!(low < 340.0, "1.3 sits above the niced floor");
}

#[test]
fn grid_and_axes_follow_ticks() {
    let scene = render_single(&series(vec![(0.0, Some(1.0)), (2.0, Some(3.0))]), &RenderOptions::default());
    // x: 0.0..2.0 step 0.2 (11 ticks), y: 1.0..3.0 step 0.2 (11 ticks)
    assert_eq!(scene.count_layer(Layer::Grid), 22);
    let labels = axis_labels(&scene);
    assert_eq!(labels.first().map(String::as_str), Some("0.0"));
    assert_eq!(labels.len(), 22);
    assert!(scene.elements.iter().all(|e| match e {
        Element::Line { layer: Layer::Grid, opacity, stroke, .. } => *opacity == 0.3 && stroke.width == 0.5,
        _ => true,
    }));
}

#[test]
fn single_point_renders_without_nan() {
    let scene = render_single(&series(vec![(3.0, Some(7.0))]), &RenderOptions::default());
    assert_eq!(scene.markers.len(), 1);
    let c = scene.markers[0].center;
    assert!(c.x.is_finite() && c.y.is_finite());
    assert_eq!((c.x, c.y), (360.0, 170.0));
}
