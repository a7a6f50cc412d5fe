// File: crates/chart-dashboard/src/dashboard.rs
// Summary: Dashboard controller: Loading -> Loaded | Failed, one fetch per mount, panels rebuilt from state.

use chart_core::{classify, render, ChartView, Dataset, RenderOptions};
use tracing::{error, info, warn};

use crate::error::LoadError;
use crate::payload::parse_payload;
use crate::source::DataSource;

#[derive(Clone, Debug, PartialEq)]
pub enum DashboardState {
    Loading,
    Loaded(Vec<Dataset>),
    /// Human-readable message shown verbatim on the error page.
    Failed(String),
}

/// One rendered chart: title, kind label and its hoverable view.
#[derive(Clone, Debug)]
pub struct ChartPanel {
    pub title: String,
    pub multi: bool,
    pub view: ChartView,
}

impl ChartPanel {
    pub fn kind(&self) -> &'static str {
        if self.multi { "multi-series" } else { "single-series" }
    }
}

/// Fetch and validate in one step.
pub fn load(source: &dyn DataSource) -> Result<Vec<Dataset>, LoadError> {
    let bytes = source.fetch()?;
    parse_payload(&bytes)
}

pub struct Dashboard {
    source: Box<dyn DataSource>,
    state: DashboardState,
}

impl Dashboard {
    pub fn new(source: Box<dyn DataSource>) -> Self {
        Self { source, state: DashboardState::Loading }
    }

    pub fn state(&self) -> &DashboardState { &self.state }

    /// Performs the load if it has not happened yet. Later calls leave the state alone.
    pub fn mount(&mut self) -> &DashboardState {
        if self.state != DashboardState::Loading {
            return &self.state;
        }
        self.state = match load(self.source.as_ref()) {
            Ok(datasets) => {
                info!(source = %self.source.describe(), charts = datasets.len(), "data loaded");
                DashboardState::Loaded(datasets)
            }
            Err(e) => {
                error!(source = %self.source.describe(), kind = ?e.kind(), "data load failed: {e}");
                DashboardState::Failed(e.to_string())
            }
        };
        &self.state
    }

    /// One panel per dataset, in payload order. Empty unless loaded.
    pub fn panels(&self, opts: &RenderOptions) -> Vec<ChartPanel> {
        let DashboardState::Loaded(datasets) = &self.state else {
            return Vec::new();
        };
        datasets
            .iter()
            .map(|dataset| {
                if dataset.has_mixed_shapes() {
                    warn!(title = %dataset.title, "dataset mixes scalar and multi-value points");
                }
                let chart = classify(dataset);
                ChartPanel {
                    title: chart.title().to_string(),
                    multi: chart.is_multi(),
                    view: ChartView::new(render(&chart, opts)),
                }
            })
            .collect()
    }
}
