// File: crates/chart-core/src/single.rs
// Summary: Single-series line + area renderer; gaps break the line instead of interpolating.

use tracing::debug;

use crate::chart::{build_frame, scene_with_chrome, RenderOptions};
use crate::path::{area, line};
use crate::scale::ScaleTransform;
use crate::scene::{Element, Fill, Gradient, Layer, Marker, Scene, Stroke};
use crate::series::SingleSeries;
use crate::types::{Insets, MARKER_RADIUS};

const LINE_WIDTH: f32 = 3.0;
const AREA_OPACITY: f32 = 0.2;

pub fn render_single(series: &SingleSeries, opts: &RenderOptions) -> Scene {
    let valid = series.valid_points();
    if valid.is_empty() {
        debug!(title = %series.title, points = series.points.len(), "no valid points; nothing to draw");
        return Scene::empty(opts.width, opts.height, opts.theme);
    }

    let insets = Insets::single();
    let Some(frame) = build_frame(
        series.points.iter().map(|&(x, _)| x),
        valid.iter().map(|&(_, y)| y),
        insets,
        opts,
    ) else {
        return Scene::empty(opts.width, opts.height, opts.theme);
    };
    let mut scene = scene_with_chrome(&frame, insets, opts);
    let color = opts.theme.line_stroke();

    scene.gradients.push(Gradient::vertical("line-gradient", frame.height(), color, 0.6, 1.0));

    // Screen samples over every point; gaps stay as `None` so both paths break there.
    let samples: Vec<(f32, Option<f32>)> = series
        .points
        .iter()
        .map(|&(x, y)| (frame.to_screen_x(x), y.map(|y| frame.to_screen_y(y))))
        .collect();

    scene.elements.push(Element::Path {
        layer: Layer::Area,
        path: area(&samples, frame.height(), opts.curve),
        fill: Fill::Gradient(0),
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

    scene.markers = valid
        .iter()
        .map(|&(x, y)| Marker { series: None, x, y, center: frame.to_screen(x, y), radius: MARKER_RADIUS, color })
        .collect();

    debug!(title = %series.title, markers = scene.markers.len(), elements = scene.elements.len(), "single-series scene built");
    scene
}
