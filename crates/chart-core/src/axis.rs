// File: crates/chart-core/src/axis.rs
// Summary: Bottom/left axis layout: domain line, tick marks and formatted tick labels.

use crate::geometry::Point;
use crate::scale::{format_tick, LinearScale};
use crate::scene::{Anchor, Baseline, Element, Fill, Layer, Stroke, Text};
use crate::path::Path;
use crate::theme::Theme;
use crate::types::TICK_COUNT;

const TICK_SIZE: f32 = 6.0;
const TICK_PADDING: f32 = 3.0;
const LABEL_SIZE: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Position along the axis in plot-local units.
    pub position: f32,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub orient: Orient,
    pub range: (f32, f32),
    /// Perpendicular offset of the axis line (plot height for a bottom axis).
    pub offset: f32,
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub fn new(orient: Orient, scale: &LinearScale, offset: f32) -> Self {
        let step = scale.tick_step(TICK_COUNT);
        let ticks = scale
            .ticks(TICK_COUNT)
            .into_iter()
            .map(|value| Tick { value, position: scale.map(value), label: format_tick(value, step) })
            .collect();
        Self { orient, range: scale.range, offset, ticks }
    }

    pub fn bottom(scale: &LinearScale, plot_height: f32) -> Self {
        Self::new(Orient::Bottom, scale, plot_height)
    }

    pub fn left(scale: &LinearScale) -> Self {
        Self::new(Orient::Left, scale, 0.0)
    }

    /// Domain path, one tick line and one label per tick.
    pub fn elements(&self, theme: &Theme) -> Vec<Element> {
        let stroke = Stroke::new(theme.border, 1.0);
        let (r0, r1) = self.range;
        let mut out = Vec::with_capacity(1 + self.ticks.len() * 2);

        let mut domain = Path::new();
        match self.orient {
            Orient::Bottom => {
                let y = self.offset;
                domain.move_to(r0, y + TICK_SIZE);
                domain.line_to(r0, y);
                domain.line_to(r1, y);
                domain.line_to(r1, y + TICK_SIZE);
            }
            Orient::Left => {
                let x = self.offset;
                domain.move_to(x - TICK_SIZE, r0);
                domain.line_to(x, r0);
                domain.line_to(x, r1);
                domain.line_to(x - TICK_SIZE, r1);
            }
        }
        out.push(Element::Path { layer: Layer::Axis, path: domain, fill: Fill::None, stroke: Some(stroke), opacity: 1.0 });

        for tick in &self.ticks {
            let (from, to, at, anchor, baseline) = match self.orient {
                Orient::Bottom => {
                    let y = self.offset;
                    (
                        Point::new(tick.position, y),
                        Point::new(tick.position, y + TICK_SIZE),
                        Point::new(tick.position, y + TICK_SIZE + TICK_PADDING),
                        Anchor::Middle,
                        Baseline::Hanging,
                    )
                }
                Orient::Left => {
                    let x = self.offset;
                    (
                        Point::new(x, tick.position),
                        Point::new(x - TICK_SIZE, tick.position),
                        Point::new(x - TICK_SIZE - TICK_PADDING, tick.position),
                        Anchor::End,
                        Baseline::Middle,
                    )
                }
            };
            out.push(Element::Line { layer: Layer::Axis, from, to, stroke, opacity: 1.0 });
            out.push(Element::Text {
                layer: Layer::Axis,
                text: Text { at, content: tick.label.clone(), size: LABEL_SIZE, color: theme.muted, anchor, baseline },
            });
        }
        out
    }
}
