// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, styling numbers).

/// Intrinsic drawing width in content units.
pub const WIDTH: f32 = 800.0;
/// Intrinsic drawing height in content units.
pub const HEIGHT: f32 = 400.0;

/// Number of series drawn by the multi-series renderer.
pub const SERIES_COUNT: usize = 3;
/// Display names for the multi-series legend and tooltips.
pub const SERIES_NAMES: [&str; SERIES_COUNT] = ["Series 1", "Series 2", "Series 3"];

/// Requested tick count for both axes and the grid.
pub const TICK_COUNT: usize = 10;
/// Marker circle radius.
pub const MARKER_RADIUS: f32 = 4.0;

/// Screen margins around the plot area, in content units.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Margins for a single-series chart.
    pub const fn single() -> Self { Self::new(50, 30, 20, 40) }
    /// Margins for a multi-series chart; the wide right edge holds the legend.
    pub const fn multi() -> Self { Self::new(50, 120, 20, 40) }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::single()
    }
}
