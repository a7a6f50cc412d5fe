// File: crates/chart-core/src/scene.rs
// Summary: Declarative draw commands produced by the renderers and consumed by adapters.
// Notes:
// - All element coordinates are plot-local; adapters translate by `Scene::origin`.
// - Markers are kept apart from `elements` because hover state decides how they draw.

use crate::geometry::{Point, Rect};
use crate::path::Path;
use crate::theme::{Color, Theme};
use crate::types::SERIES_NAMES;

/// Semantic tag of an element; used by adapters for class names and by tests for counting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Grid,
    Axis,
    Area,
    Series,
    Legend,
    Tooltip,
}

impl Layer {
    pub fn class_name(&self) -> &'static str {
        match self {
            Layer::Grid => "grid",
            Layer::Axis => "axis",
            Layer::Area => "area",
            Layer::Series => "line",
            Layer::Legend => "legend",
            Layer::Tooltip => "tooltip",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    pub round_cap: bool,
}

impl Stroke {
    pub fn new(color: Color, width: f32) -> Self { Self { color, width, round_cap: false } }
    pub fn round(mut self) -> Self { self.round_cap = true; self }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fill {
    None,
    /// Index into `Scene::gradients`.
    Gradient(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// Vertical placement of text relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Baseline {
    Alphabetic,
    /// Centered on the point.
    Middle,
    /// Top of the glyphs at the point.
    Hanging,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub at: Point,
    pub content: String,
    pub size: f32,
    pub color: Color,
    pub anchor: Anchor,
    pub baseline: Baseline,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Line { layer: Layer, from: Point, to: Point, stroke: Stroke, opacity: f32 },
    Path { layer: Layer, path: Path, fill: Fill, stroke: Option<Stroke>, opacity: f32 },
    Text { layer: Layer, text: Text },
    Rect { layer: Layer, rect: Rect, corner: f32, fill: Color, stroke: Option<Stroke> },
    Circle { layer: Layer, center: Point, radius: f32, fill: Color, stroke: Option<Stroke>, opacity: f32 },
}

impl Element {
    pub fn layer(&self) -> Layer {
        match self {
            Element::Line { layer, .. }
            | Element::Path { layer, .. }
            | Element::Text { layer, .. }
            | Element::Rect { layer, .. }
            | Element::Circle { layer, .. } => *layer,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
    pub opacity: f32,
}

/// Linear gradient in plot-local user space.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    pub id: String,
    pub from: Point,
    pub to: Point,
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    /// Bottom-to-top fade of one color over a plot of height `height`.
    pub fn vertical(id: impl Into<String>, height: f32, color: Color, bottom_opacity: f32, top_opacity: f32) -> Self {
        Self {
            id: id.into(),
            from: Point::new(0.0, height),
            to: Point::new(0.0, 0.0),
            stops: vec![
                GradientStop { offset: 0.0, color, opacity: bottom_opacity },
                GradientStop { offset: 1.0, color, opacity: top_opacity },
            ],
        }
    }
}

/// Interactive point marker for one valid sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    /// Series index for multi-series charts; `None` for single-series.
    pub series: Option<usize>,
    pub x: f64,
    pub y: f64,
    pub center: Point,
    pub radius: f32,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    /// Translation from content origin to plot origin.
    pub origin: Point,
    pub theme: Theme,
    pub gradients: Vec<Gradient>,
    pub elements: Vec<Element>,
    pub markers: Vec<Marker>,
}

impl Scene {
    /// A cleared surface: size only, nothing drawn.
    pub fn empty(width: f32, height: f32, theme: Theme) -> Self {
        Self {
            width,
            height,
            origin: Point::default(),
            theme,
            gradients: Vec::new(),
            elements: Vec::new(),
            markers: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.markers.is_empty()
    }

    /// Total drawable items, markers included.
    pub fn element_count(&self) -> usize {
        self.elements.len() + self.markers.len()
    }

    pub fn count_layer(&self, layer: Layer) -> usize {
        self.elements.iter().filter(|e| e.layer() == layer).count()
    }

    pub fn paths(&self, layer: Layer) -> impl Iterator<Item = &Path> {
        self.elements.iter().filter_map(move |e| match e {
            Element::Path { layer: l, path, .. } if *l == layer => Some(path),
            _ => None,
        })
    }

    /// Circle for marker `index`; hidden markers draw fully transparent.
    pub fn marker_element(&self, index: usize, revealed: bool) -> Option<Element> {
        let m = self.markers.get(index)?;
        Some(Element::Circle {
            layer: Layer::Series,
            center: m.center,
            radius: m.radius,
            fill: m.color,
            stroke: Some(Stroke::new(self.theme.background, 2.0)),
            opacity: if revealed { 1.0 } else { 0.0 },
        })
    }

    /// Floating label above marker `index`; multi-series labels also name the series.
    pub fn tooltip_elements(&self, index: usize) -> Vec<Element> {
        let Some(m) = self.markers.get(index) else { return Vec::new() };
        let anchor = m.center.offset(0.0, -10.0);
        let value = format!("{:.3}", m.y);
        let text = |dy: f32, content: String, size: f32| Element::Text {
            layer: Layer::Tooltip,
            text: Text {
                at: anchor.offset(0.0, dy),
                content,
                size,
                color: self.theme.popover_text,
                anchor: Anchor::Middle,
                baseline: Baseline::Alphabetic,
            },
        };
        let boxed = |x: f32, y: f32, w: f32, h: f32| Element::Rect {
            layer: Layer::Tooltip,
            rect: Rect::from_ltwh(anchor.x + x, anchor.y + y, w, h),
            corner: 3.0,
            fill: self.theme.popover,
            stroke: Some(Stroke::new(self.theme.border, 1.0)),
        };
        match m.series {
            None => vec![boxed(-25.0, -20.0, 50.0, 15.0), text(-10.0, value, 12.0)],
            Some(i) => {
                let name = SERIES_NAMES.get(i).map_or_else(|| format!("Series {}", i + 1), |s| s.to_string());
                vec![boxed(-30.0, -35.0, 60.0, 30.0), text(-25.0, name, 10.0), text(-12.0, value, 12.0)]
            }
        }
    }
}
