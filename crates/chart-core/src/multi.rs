// File: crates/chart-core/src/multi.rs
// Summary: Multi-series renderer: three colored line + area series on one shared frame, with legend.

use tracing::debug;

use crate::chart::{build_frame, scene_with_chrome, RenderOptions};
use crate::geometry::Point;
use crate::path::{area, line};
use crate::scale::ScaleTransform;
use crate::scene::{Anchor, Baseline, Element, Fill, Gradient, Layer, Marker, Scene, Stroke, Text};
use crate::series::MultiSeries;
use crate::types::{Insets, MARKER_RADIUS, SERIES_COUNT, SERIES_NAMES};

const LINE_WIDTH: f32 = 3.0;
const AREA_OPACITY: f32 = 0.15;
const LEGEND_ROW: f32 = 25.0;

pub fn render_multi(chart: &MultiSeries, opts: &RenderOptions) -> Scene {
    let series: Vec<Vec<(f64, f64)>> = (0..SERIES_COUNT).map(|i| chart.series(i)).collect();
    if series.iter().all(Vec::is_empty) {
        debug!(title = %chart.title, points = chart.points.len(), "no valid values in any series; nothing to draw");
        return Scene::empty(opts.width, opts.height, opts.theme);
    }

    let insets = Insets::multi();
    // One y-domain over the union of all series keeps them comparable.
    let Some(frame) = build_frame(
        chart.points.iter().map(|(x, _)| *x),
        series.iter().flatten().map(|&(_, y)| y),
        insets,
        opts,
    ) else {
        return Scene::empty(opts.width, opts.height, opts.theme);
    };
    let mut scene = scene_with_chrome(&frame, insets, opts);
    let theme = opts.theme;

    for (index, data) in series.iter().enumerate() {
        if data.is_empty() {
            debug!(title = %chart.title, series = index, "series has no values; skipped");
            continue;
        }
        let color = theme.series[index];
        let gradient = scene.gradients.len();
        scene.gradients.push(Gradient::vertical(format!("line-gradient-{index}"), frame.height(), color, 0.3, 0.6));

        let samples: Vec<(f32, Option<f32>)> =
            data.iter().map(|&(x, y)| (frame.to_screen_x(x), Some(frame.to_screen_y(y)))).collect();
        scene.elements.push(Element::Path {
            layer: Layer::Area,
            path: area(&samples, frame.height(), opts.curve),
            fill: Fill::Gradient(gradient),
            stroke: None,
            opacity: AREA_OPACITY,
        });
        scene.elements.push(Element::Path {
            layer: Layer::Series,
            path: line(&samples, opts.curve),
            fill: Fill::None,
            stroke: Some(Stroke::new(color, LINE_WIDTH).round()),
            opacity: 1.0,
        });
        scene.markers.extend(data.iter().map(|&(x, y)| Marker {
            series: Some(index),
            x,
            y,
            center: frame.to_screen(x, y),
            radius: MARKER_RADIUS,
            color,
        }));
    }

    let legend = Point::new(frame.width() + 20.0, 20.0);
    for (index, name) in SERIES_NAMES.iter().enumerate() {
        let row = legend.offset(0.0, index as f32 * LEGEND_ROW);
        scene.elements.push(Element::Line {
            layer: Layer::Legend,
            from: row,
            to: row.offset(20.0, 0.0),
            stroke: Stroke::new(theme.series[index], LINE_WIDTH),
            opacity: 1.0,
        });
        scene.elements.push(Element::Text {
            layer: Layer::Legend,
            text: Text {
                at: row.offset(25.0, 0.0),
                content: name.to_string(),
                size: 14.0,
                color: theme.foreground,
                anchor: Anchor::Start,
                baseline: Baseline::Middle,
            },
        });
    }

    debug!(title = %chart.title, markers = scene.markers.len(), elements = scene.elements.len(), "multi-series scene built");
    scene
}
