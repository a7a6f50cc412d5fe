// File: crates/chart-dashboard/src/lib.rs
// Summary: Dashboard controller: fetch data.json once, validate it, render every chart into one HTML page.

pub mod dashboard;
pub mod error;
pub mod page;
pub mod payload;
pub mod source;

pub use dashboard::{load, ChartPanel, Dashboard, DashboardState};
pub use error::{ErrorKind, LoadError};
pub use page::render_page;
pub use payload::parse_payload;
pub use source::{source_for, DataSource, FileSource, HttpSource};
