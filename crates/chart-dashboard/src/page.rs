// File: crates/chart-dashboard/src/page.rs
// Summary: Static HTML page for each dashboard state; charts are inline SVG with CSS hover tooltips.

use std::fmt::Write;

use chart_core::svg::{escape, view_to_svg};
use chart_core::Theme;
use chrono::{DateTime, Utc};

use crate::dashboard::{ChartPanel, DashboardState};

const FEATURES: &[&str] = &[
    "Monotone curve interpolation",
    "Gradient area fills",
    "Hover tooltips on data points",
    "Gaps for missing values",
    "Up to three series per chart",
];

pub fn render_page(state: &DashboardState, panels: &[ChartPanel], theme: &Theme, generated_at: DateTime<Utc>) -> String {
    let mut body = String::new();
    match state {
        DashboardState::Loading => {
            body.push_str("<div class=\"centered\"><p class=\"muted\">Loading chart data...</p></div>\n");
        }
        DashboardState::Failed(message) => {
            let _ = write!(
                body,
                "<div class=\"centered\"><div class=\"error\"><h2>Error Loading Data</h2><p>{}</p></div></div>\n",
                escape(message)
            );
        }
        DashboardState::Loaded(_) => loaded_body(&mut body, panels, generated_at),
    }
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>Chart Dashboard</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        stylesheet(theme),
        body
    )
}

fn loaded_body(out: &mut String, panels: &[ChartPanel], generated_at: DateTime<Utc>) {
    let n = panels.len();
    let _ = write!(
        out,
        "<header><h1>Chart Dashboard</h1><span class=\"count\">{n} Chart{} Loaded</span></header>\n",
        if n == 1 { "" } else { "s" }
    );
    if panels.is_empty() {
        out.push_str("<div class=\"centered\"><div class=\"empty\"><h2>No Charts Found</h2><p class=\"muted\">The data source contains an empty list. Add chart entries to data.json to see them here.</p></div></div>\n");
        return;
    }
    out.push_str("<main>\n<section class=\"intro\"><h2>Data Visualization</h2><p class=\"muted\">Charts generated from the data source. Hover over a point to see its value.</p></section>\n");
    for (i, panel) in panels.iter().enumerate() {
        let _ = write!(
            out,
            "<section class=\"panel\"><h3>{}</h3><p class=\"muted\">{}</p><div class=\"scroll\">{}</div></section>\n",
            escape(&panel.title),
            panel.kind(),
            view_to_svg(&panel.view, &format!("chart-{i}"))
        );
    }
    out.push_str("<footer><h4>Features</h4><ul>");
    for f in FEATURES {
        let _ = write!(out, "<li>{f}</li>");
    }
    let _ = write!(
        out,
        "</ul><p class=\"muted\">Generated {}</p></footer>\n</main>\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
}

fn stylesheet(theme: &Theme) -> String {
    format!(
        "body{{margin:0;font-family:sans-serif;background:{bg};color:{fg};}}\
header{{display:flex;justify-content:space-between;align-items:center;padding:16px 24px;border-bottom:1px solid {border};}}\
main{{max-width:1100px;margin:0 auto;padding:24px;}}\
.muted{{color:{muted};}}\
.centered{{display:flex;min-height:100vh;align-items:center;justify-content:center;}}\
.error{{border:1px solid #dc2626;border-radius:8px;padding:24px;}}\
.error h2{{color:#dc2626;}}\
.panel{{border:1px solid {border};border-radius:8px;padding:16px;margin-bottom:24px;}}\
.scroll{{overflow-x:auto;}}\
.scroll svg{{min-width:800px;}}",
        bg = theme.background.to_hex(),
        fg = theme.foreground.to_hex(),
        border = theme.border.to_hex(),
        muted = theme.muted.to_hex(),
    )
}

/// File-name friendly form of a chart title.
pub fn slug(title: &str) -> String {
    let mut out = String::new();
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }
    let trimmed = out.trim_end_matches('-');
    if trimmed.is_empty() { "chart".to_string() } else { trimmed.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_punctuation() {
        assert_eq!(slug("Temperature (°C) / Day"), "temperature-c-day");
        assert_eq!(slug("???"), "chart");
    }
}
