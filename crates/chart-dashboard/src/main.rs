// File: crates/chart-dashboard/src/main.rs
// Summary: CLI: load data.json (file or URL), write dashboard.html and optionally one PNG per chart.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chart_core::{theme, RenderOptions};
use chart_dashboard::page::{render_page, slug};
use chart_dashboard::{source_for, Dashboard, DashboardState};
use chart_render_skia::SkiaRenderer;
use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "chart-dashboard", about = "Render every chart in a data.json payload into one HTML page")]
struct Cli {
    /// Path or http(s) URL of the JSON payload
    #[arg(long, default_value = "data.json")]
    source: String,
    /// Output directory
    #[arg(long, default_value = "target/out")]
    out: PathBuf,
    /// Colour theme: light or dark
    #[arg(long, default_value = "light")]
    theme: String,
    /// Also rasterize each chart to PNG
    #[arg(long)]
    png: bool,
    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cli = Cli::parse();

    let opts = RenderOptions { theme: theme::find(&cli.theme), ..Default::default() };
    let mut dashboard = Dashboard::new(source_for(&cli.source, Duration::from_secs(cli.timeout_secs)));
    dashboard.mount();
    let panels = dashboard.panels(&opts);

    fs::create_dir_all(&cli.out).with_context(|| format!("failed to create '{}'", cli.out.display()))?;
    let page_path = cli.out.join("dashboard.html");
    let html = render_page(dashboard.state(), &panels, &opts.theme, Utc::now());
    fs::write(&page_path, html).with_context(|| format!("failed to write '{}'", page_path.display()))?;
    info!(path = %page_path.display(), charts = panels.len(), "wrote dashboard");

    if cli.png {
        let renderer = SkiaRenderer::new();
        for (i, panel) in panels.iter().enumerate() {
            let png = cli.out.join(format!("chart_{i}_{}.png", slug(&panel.title)));
            renderer
                .render_to_png(panel.view.scene(), &png)
                .with_context(|| format!("failed to rasterize '{}'", panel.title))?;
            info!(path = %png.display(), "wrote png");
        }
    }

    if let DashboardState::Failed(message) = dashboard.state() {
        anyhow::bail!("data load failed: {message}");
    }
    Ok(())
}
