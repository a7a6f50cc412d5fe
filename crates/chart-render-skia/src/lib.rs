// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia raster adapter; draws chart-core scenes (plus hover overlay) on a CPU surface.

pub mod text;

use std::path::Path as FsPath;

use chart_core::path::PathCmd;
use chart_core::scene::{Element, Fill, Gradient, Scene, Stroke};
use chart_core::theme::Color;
use chart_core::ChartView;
use skia_safe as skia;
use thiserror::Error;
use tracing::debug;

pub use text::TextShaper;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create raster surface {0}x{1}")]
    Surface(i32, i32),
    #[error("encode PNG failed")]
    Encode,
    #[error("reading surface pixels failed")]
    ReadPixels,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// CPU raster renderer. `scale` multiplies content units into device pixels.
pub struct SkiaRenderer {
    pub scale: f32,
    text: TextShaper,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { scale: 1.0, text: TextShaper::new() }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale.max(0.1);
        self
    }

    fn surface_size(&self, scene: &Scene) -> (i32, i32) {
        ((scene.width * self.scale).ceil() as i32, (scene.height * self.scale).ceil() as i32)
    }

    fn draw(&self, scene: &Scene, overlay: &[Element]) -> Result<skia::Surface> {
        let (w, h) = self.surface_size(scene);
        let mut surface = skia::surfaces::raster_n32_premul((w, h)).ok_or(RenderError::Surface(w, h))?;
        let canvas = surface.canvas();
        canvas.clear(to_skia_color(scene.theme.background, 1.0));
        canvas.scale((self.scale, self.scale));

        if !scene.is_empty() {
            canvas.save();
            canvas.translate((scene.origin.x, scene.origin.y));
            for e in &scene.elements {
                self.draw_element(canvas, scene, e);
            }
            // Hidden markers are fully transparent; only overlay elements become visible.
            for e in overlay {
                self.draw_element(canvas, scene, e);
            }
            canvas.restore();
        }
        debug!(width = w, height = h, elements = scene.elements.len(), overlay = overlay.len(), "scene rasterized");
        Ok(surface)
    }

    /// Render to a tightly packed RGBA8 buffer: (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, scene: &Scene, overlay: &[Element]) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.draw(scene, overlay)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    /// Render to PNG bytes.
    pub fn render_to_png_bytes(&self, scene: &Scene, overlay: &[Element]) -> Result<Vec<u8>> {
        let mut surface = self.draw(scene, overlay)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image.encode_to_data(skia::EncodedImageFormat::PNG).ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render a chart view including its active tooltip.
    pub fn render_view_png(&self, view: &ChartView) -> Result<Vec<u8>> {
        self.render_to_png_bytes(view.scene(), &view.overlay())
    }

    /// Render the scene to a PNG file at `output_png_path`.
    pub fn render_to_png(&self, scene: &Scene, output_png_path: impl AsRef<FsPath>) -> Result<()> {
        let bytes = self.render_to_png_bytes(scene, &[])?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn draw_element(&self, canvas: &skia::Canvas, scene: &Scene, e: &Element) {
        match e {
            Element::Line { from, to, stroke, opacity, .. } => {
                let paint = stroke_paint(stroke, *opacity);
                canvas.draw_line((from.x, from.y), (to.x, to.y), &paint);
            }
            Element::Path { path, fill, stroke, opacity, .. } => {
                let sk_path = to_skia_path(path);
                match fill {
                    Fill::None => {}
                    Fill::Gradient(i) => {
                        if let Some(g) = scene.gradients.get(*i) {
                            let mut paint = skia::Paint::default();
                            paint.set_anti_alias(true);
                            paint.set_style(skia::paint::Style::Fill);
                            paint.set_shader(gradient_shader(g));
                            paint.set_alpha_f(*opacity);
                            canvas.draw_path(&sk_path, &paint);
                        }
                    }
                }
                if let Some(s) = stroke {
                    canvas.draw_path(&sk_path, &stroke_paint(s, *opacity));
                }
            }
            Element::Text { text, .. } => self.text.draw(canvas, text),
            Element::Rect { rect, corner, fill, stroke, .. } => {
                let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
                let rr = skia::RRect::new_rect_xy(r, *corner, *corner);
                canvas.draw_rrect(rr, &fill_paint(*fill, 1.0));
                if let Some(s) = stroke {
                    canvas.draw_rrect(rr, &stroke_paint(s, 1.0));
                }
            }
            Element::Circle { center, radius, fill, stroke, opacity, .. } => {
                if *opacity <= 0.0 {
                    return;
                }
                canvas.draw_circle((center.x, center.y), *radius, &fill_paint(*fill, *opacity));
                if let Some(s) = stroke {
                    canvas.draw_circle((center.x, center.y), *radius, &stroke_paint(s, *opacity));
                }
            }
        }
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new() }
}

pub(crate) fn to_skia_color(c: Color, opacity: f32) -> skia::Color {
    let a = (c.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
    skia::Color::from_argb(a, c.r, c.g, c.b)
}

fn stroke_paint(s: &Stroke, opacity: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(s.width);
    paint.set_color(to_skia_color(s.color, opacity));
    if s.round_cap {
        paint.set_stroke_cap(skia::paint::Cap::Round);
    }
    paint
}

fn fill_paint(c: Color, opacity: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia_color(c, opacity));
    paint
}

fn gradient_shader(g: &Gradient) -> Option<skia::Shader> {
    let colors: Vec<skia::Color> = g.stops.iter().map(|s| to_skia_color(s.color, s.opacity)).collect();
    let positions: Vec<f32> = g.stops.iter().map(|s| s.offset).collect();
    skia::gradient_shader::linear(
        ((g.from.x, g.from.y), (g.to.x, g.to.y)),
        colors.as_slice(),
        positions.as_slice(),
        skia::TileMode::Clamp,
        None,
        None,
    )
}

fn to_skia_path(path: &chart_core::path::Path) -> skia::Path {
    let mut out = skia::Path::new();
    for cmd in path.commands() {
        match *cmd {
            PathCmd::MoveTo(p) => { out.move_to((p.x, p.y)); }
            PathCmd::LineTo(p) => { out.line_to((p.x, p.y)); }
            PathCmd::CubicTo(a, b, p) => { out.cubic_to((a.x, a.y), (b.x, b.y), (p.x, p.y)); }
            PathCmd::Close => { out.close(); }
        }
    }
    out
}
