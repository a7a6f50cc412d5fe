// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark palettes for chart elements; series hues are fixed per palette.

use crate::types::SERIES_COUNT;

/// Straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// CSS notation; alpha is carried separately through opacity attributes.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub foreground: Color,
    /// Grid lines, axis domain lines and tick marks.
    pub border: Color,
    /// Tick labels.
    pub muted: Color,
    pub popover: Color,
    pub popover_text: Color,
    /// Blue, green, red.
    pub series: [Color; SERIES_COUNT],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::rgb(255, 255, 255),
            foreground: Color::rgb(15, 23, 42),
            border: Color::rgb(226, 232, 240),
            muted: Color::rgb(100, 116, 139),
            popover: Color::rgb(255, 255, 255),
            popover_text: Color::rgb(15, 23, 42),
            series: [Color::rgb(59, 130, 246), Color::rgb(34, 197, 94), Color::rgb(239, 68, 68)],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            foreground: Color::rgb(235, 235, 245),
            border: Color::rgb(63, 63, 70),
            muted: Color::rgb(150, 150, 160),
            popover: Color::rgb(30, 30, 34),
            popover_text: Color::rgb(235, 235, 245),
            series: [Color::rgb(64, 160, 255), Color::rgb(40, 200, 120), Color::rgb(220, 80, 80)],
        }
    }

    /// Hue of the single-series chart.
    pub fn line_stroke(&self) -> Color { self.series[0] }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
