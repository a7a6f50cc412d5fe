// File: crates/chart-render-skia/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; places scene labels by anchor and baseline.

use chart_core::scene::{Anchor, Baseline, Text};
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use skia_safe as skia;

use crate::to_skia_color;

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Inter", "Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw a scene label so that its anchor point lands where the SVG adapter would put it.
    pub fn draw(&self, canvas: &skia::Canvas, text: &Text) {
        let mut p = self.layout(&text.content, text.size, to_skia_color(text.color, 1.0));
        let width = p.longest_line();
        let x = match text.anchor {
            Anchor::Start => text.at.x,
            Anchor::Middle => text.at.x - width * 0.5,
            Anchor::End => text.at.x - width,
        };
        // Paragraph paints from its top-left corner.
        let y = match text.baseline {
            Baseline::Alphabetic => text.at.y - p.alphabetic_baseline(),
            Baseline::Middle => text.at.y - p.height() * 0.5,
            Baseline::Hanging => text.at.y,
        };
        p.paint(canvas, (x, y));
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
