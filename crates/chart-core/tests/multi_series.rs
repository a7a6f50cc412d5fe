// File: crates/chart-core/tests/multi_series.rs
// Purpose: Multi-series scenes: per-series filtering, shared y-domain, legend.

use chart_core::multi::render_multi;
use chart_core::scene::Element;
use chart_core::series::MultiSeries;
use chart_core::{Layer, RenderOptions};

fn chart(points: Vec<(f64, Vec<Option<f64>>)>) -> MultiSeries {
    MultiSeries { title: "multi".into(), points }
}

#[test]
fn series_filter_independently_over_shared_domain() {
    let m = chart(vec![(0.0, vec![Some(1.0), None, Some(5.0)]), (1.0, vec![Some(2.0), Some(3.0), None])]);
    assert_eq!(m.series(1), vec![(1.0, 3.0)]);

    let scene = render_multi(&m, &RenderOptions::default());
    let s1: Vec<_> = scene.markers.iter().filter(|mk| mk.series == Some(1)).collect();
    assert_eq!(s1.len(), 1);
    assert_eq!((s1[0].x, s1[0].y), (1.0, 3.0));

    // shared domain is [1, 5]: 1 at the floor, 5 at the top, 3 halfway
    let y_of = |v: f64| scene.markers.iter().find(|mk| mk.y == v).map(|mk| mk.center.y);
    assert_eq!(y_of(1.0), Some(340.0));
    assert_eq!(y_of(5.0), Some(0.0));
    assert_eq!(y_of(3.0), Some(170.0));
}

#[test]
fn each_series_gets_color_gradient_area_and_line() {
    let m = chart(vec![
        (0.0, vec![Some(1.0), Some(2.0), Some(3.0)]),
        (1.0, vec![Some(2.0), Some(3.0), Some(4.0)]),
    ]);
    let opts = RenderOptions::default();
    let scene = render_multi(&m, &opts);
    assert_eq!(scene.paths(Layer::Area).count(), 3);
    assert_eq!(scene.paths(Layer::Series).count(), 3);
    assert_eq!(scene.gradients.len(), 3);
    let ids: Vec<&str> = scene.gradients.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, vec!["line-gradient-0", "line-gradient-1", "line-gradient-2"]);
    for (i, color) in opts.theme.series.iter().enumerate() {
        assert!(scene.markers.iter().filter(|mk| mk.series == Some(i)).all(|mk| mk.color == *color));
    }
    // plot is narrower to make room for the legend
    assert_eq!(scene.origin.x, 50.0);
    assert_eq!(scene.markers.iter().map(|mk| mk.center.x).fold(0.0f32, f32::max), 630.0);
}

#[test]
fn empty_series_is_skipped_but_legend_and_axes_stay() {
    let m = chart(vec![(0.0, vec![Some(1.0), None, Some(2.0)]), (1.0, vec![Some(3.0), None, Some(4.0)])]);
    let scene = render_multi(&m, &RenderOptions::default());
    assert_eq!(scene.paths(Layer::Series).count(), 2);
    assert_eq!(scene.paths(Layer::Area).count(), 2);
    assert_eq!(scene.markers.len(), 4);
    assert!(scene.markers.iter().all(|mk| mk.series != Some(1)));
    assert!(scene.count_layer(Layer::Axis) > 0);

    let legend: Vec<String> = scene
        .elements
        .iter()
        .filter_map(|e| match e {
            Element::Text { layer: Layer::Legend, text } => Some(text.content.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(legend, vec!["Series 1", "Series 2", "Series 3"]);
    // legend sits right of the plot
    assert!(scene.elements.iter().all(|e| match e {
        Element::Line { layer: Layer::Legend, from, .. } => from.x == 650.0,
        _ => true,
    }));
}

#[test]
fn gaps_inside_a_series_are_bridged() {
    // values are filtered per series before the path is built, so no break
    let m = chart(vec![
        (0.0, vec![Some(1.0)]),
        (1.0, vec![None]),
        (2.0, vec![Some(3.0)]),
    ]);
    let scene = render_multi(&m, &RenderOptions::default());
    let line = scene.paths(Layer::Series).next().expect("series 0 line");
    assert_eq!(line.subpath_count(), 1);
}
