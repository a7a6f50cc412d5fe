// File: crates/chart-core/src/grid.rs
// Summary: Background grid lines at every tick of both scales.

use crate::geometry::Point;
use crate::scale::Frame;
use crate::scene::{Element, Layer, Stroke};
use crate::theme::Theme;
use crate::types::TICK_COUNT;

const GRID_WIDTH: f32 = 0.5;
const GRID_OPACITY: f32 = 0.3;

pub fn grid_lines(frame: &Frame, theme: &Theme) -> Vec<Element> {
    let stroke = Stroke::new(theme.border, GRID_WIDTH);
    let (w, h) = (frame.width(), frame.height());
    let verticals = frame.x.ticks(TICK_COUNT).into_iter().map(|v| {
        let x = frame.x.map(v);
        (Point::new(x, 0.0), Point::new(x, h))
    });
    let horizontals = frame.y.ticks(TICK_COUNT).into_iter().map(|v| {
        let y = frame.y.map(v);
        (Point::new(0.0, y), Point::new(w, y))
    });
    verticals
        .chain(horizontals)
        .map(|(from, to)| Element::Line { layer: Layer::Grid, from, to, stroke, opacity: GRID_OPACITY })
        .collect()
}
