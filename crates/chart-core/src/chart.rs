// File: crates/chart-core/src/chart.rs
// Summary: Render options, shared chart chrome (frame, grid, axes) and dispatch to the series renderers.

use crate::axis::Axis;
use crate::geometry::{Point, Rect};
use crate::grid::grid_lines;
use crate::multi::render_multi;
use crate::path::Curve;
use crate::scale::{extent, Frame, LinearScale};
use crate::scene::{Element, Scene};
use crate::series::Classified;
use crate::single::render_single;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, TICK_COUNT, WIDTH};

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: f32,
    pub height: f32,
    pub theme: Theme,
    pub curve: Curve,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, theme: Theme::default(), curve: Curve::MonotoneX }
    }
}

/// Draw one classified dataset. Every call starts from an empty scene.
pub fn render(chart: &Classified, opts: &RenderOptions) -> Scene {
    match chart {
        Classified::Single(s) => render_single(s, opts),
        Classified::Multi(m) => render_multi(m, opts),
    }
}

/// Build the coordinate frame: x over the raw extent of `xs`, y over the niced extent of `ys`.
pub(crate) fn build_frame(
    xs: impl IntoIterator<Item = f64>,
    ys: impl IntoIterator<Item = f64>,
    insets: Insets,
    opts: &RenderOptions,
) -> Option<Frame> {
    let w = opts.width - insets.hsum() as f32;
    let h = opts.height - insets.vsum() as f32;
    let x = LinearScale::new(extent(xs)?, (0.0, w));
    let y = LinearScale::new(extent(ys)?, (h, 0.0)).nice(TICK_COUNT);
    Some(Frame { x, y, plot: Rect::from_ltwh(0.0, 0.0, w, h) })
}

/// Scene sized from `opts` with the grid and both axes already drawn.
pub(crate) fn scene_with_chrome(frame: &Frame, insets: Insets, opts: &RenderOptions) -> Scene {
    let theme = opts.theme;
    let mut elements: Vec<Element> = grid_lines(frame, &theme);
    elements.extend(Axis::bottom(&frame.x, frame.height()).elements(&theme));
    elements.extend(Axis::left(&frame.y).elements(&theme));
    Scene {
        width: opts.width,
        height: opts.height,
        origin: Point::new(insets.left as f32, insets.top as f32),
        theme,
        gradients: Vec::new(),
        elements,
        markers: Vec::new(),
    }
}
