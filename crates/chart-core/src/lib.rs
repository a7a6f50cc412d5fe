// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; dataset model, classifier and host-agnostic chart scenes.

pub mod axis;
pub mod chart;
pub mod geometry;
pub mod grid;
pub mod interaction;
pub mod multi;
pub mod path;
pub mod scale;
pub mod scene;
pub mod series;
pub mod single;
pub mod svg;
pub mod theme;
pub mod types;

pub use chart::{render, RenderOptions};
pub use interaction::{ChartView, PointerEvent};
pub use path::Curve;
pub use scale::{Frame, LinearScale, ScaleTransform};
pub use scene::{Element, Layer, Marker, Scene};
pub use series::{classify, Classified, Dataset, MultiSeries, RawPoint, RawValue, SingleSeries};
pub use theme::Theme;
