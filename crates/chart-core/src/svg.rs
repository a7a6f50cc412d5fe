// File: crates/chart-core/src/svg.rs
// Summary: SVG adapter: serializes a scene into a standalone <svg> element.
// Notes:
// - Each marker is emitted with its tooltip in one group; CSS :hover reveals both.
//   A pre-activated marker yields to whichever marker is hovered, so at most one tooltip shows.

use std::fmt::Write as _;

use crate::geometry::round3;
use crate::interaction::ChartView;
use crate::scene::{Anchor, Baseline, Element, Fill, Scene, Stroke};

const HOVER_CSS: &str = ".marker circle{opacity:0}.marker:hover circle{opacity:1}\
.marker .tooltip{display:none;pointer-events:none}.marker:hover .tooltip,.marker.active .tooltip{display:inline}\
.marker.active circle{opacity:1}\
.markers:hover .marker.active:not(:hover) circle{opacity:0}.markers:hover .marker.active:not(:hover) .tooltip{display:none}";

/// Serialize `scene`; `id` prefixes gradient ids so several charts can share one page.
pub fn to_svg(scene: &Scene, id: &str) -> String {
    write_svg(scene, id, None)
}

/// Serialize a view, drawing the active marker's tooltip as visible.
pub fn view_to_svg(view: &ChartView, id: &str) -> String {
    write_svg(view.scene(), id, view.active())
}

fn write_svg(scene: &Scene, id: &str, active: Option<usize>) -> String {
    let mut out = String::with_capacity(4096);
    let (w, h) = (n(scene.width), n(scene.height));
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="chart" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    if scene.is_empty() {
        out.push_str("</svg>");
        return out;
    }
    let _ = write!(out, "<style>{HOVER_CSS}</style>");

    if !scene.gradients.is_empty() {
        out.push_str("<defs>");
        for g in &scene.gradients {
            let _ = write!(
                out,
                r#"<linearGradient id="{}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">"#,
                gradient_id(id, &g.id),
                n(g.from.x),
                n(g.from.y),
                n(g.to.x),
                n(g.to.y)
            );
            for stop in &g.stops {
                let _ = write!(
                    out,
                    r#"<stop offset="{}%" stop-color="{}" stop-opacity="{}"/>"#,
                    n(stop.offset * 100.0),
                    stop.color.to_hex(),
                    n(stop.opacity)
                );
            }
            out.push_str("</linearGradient>");
        }
        out.push_str("</defs>");
    }

    let _ = write!(out, r#"<g transform="translate({},{})">"#, n(scene.origin.x), n(scene.origin.y));
    for e in &scene.elements {
        write_element(&mut out, e, scene, id);
    }

    out.push_str(r#"<g class="markers">"#);
    for i in 0..scene.markers.len() {
        let class = if active == Some(i) { "marker active" } else { "marker" };
        let _ = write!(out, r#"<g class="{class}">"#);
        if let Some(circle) = scene.marker_element(i, false) {
            write_element(&mut out, &circle, scene, id);
        }
        out.push_str(r#"<g class="tooltip">"#);
        for e in scene.tooltip_elements(i) {
            write_element(&mut out, &e, scene, id);
        }
        out.push_str("</g></g>");
    }
    out.push_str("</g></g></svg>");
    out
}

fn write_element(out: &mut String, e: &Element, scene: &Scene, id: &str) {
    let class = e.layer().class_name();
    match e {
        Element::Line { from, to, stroke, opacity, .. } => {
            let _ = write!(
                out,
                r#"<line class="{class}" x1="{}" y1="{}" x2="{}" y2="{}"{}{}/>"#,
                n(from.x),
                n(from.y),
                n(to.x),
                n(to.y),
                stroke_attrs(stroke),
                opacity_attr(*opacity)
            );
        }
        Element::Path { path, fill, stroke, opacity, .. } => {
            let fill = match fill {
                Fill::None => "none".to_string(),
                Fill::Gradient(i) => scene
                    .gradients
                    .get(*i)
                    .map_or_else(|| "none".to_string(), |g| format!("url(#{})", gradient_id(id, &g.id))),
            };
            let _ = write!(
                out,
                r#"<path class="{class}" d="{}" fill="{fill}"{}{}/>"#,
                path.to_svg_data(),
                stroke.as_ref().map(stroke_attrs).unwrap_or_default(),
                opacity_attr(*opacity)
            );
        }
        Element::Text { text, .. } => {
            let anchor = match text.anchor {
                Anchor::Start => "start",
                Anchor::Middle => "middle",
                Anchor::End => "end",
            };
            let dy = match text.baseline {
                Baseline::Alphabetic => "",
                Baseline::Middle => r#" dy="0.32em""#,
                Baseline::Hanging => r#" dy="0.71em""#,
            };
            let _ = write!(
                out,
                r#"<text class="{class}" x="{}" y="{}"{dy} text-anchor="{anchor}" font-size="{}" fill="{}">{}</text>"#,
                n(text.at.x),
                n(text.at.y),
                n(text.size),
                text.color.to_hex(),
                escape(&text.content)
            );
        }
        Element::Rect { rect, corner, fill, stroke, .. } => {
            let _ = write!(
                out,
                r#"<rect class="{class}" x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}"{}/>"#,
                n(rect.left),
                n(rect.top),
                n(rect.width()),
                n(rect.height()),
                n(*corner),
                fill.to_hex(),
                stroke.as_ref().map(stroke_attrs).unwrap_or_default()
            );
        }
        Element::Circle { center, radius, fill, stroke, opacity, .. } => {
            let _ = write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}"{}{}/>"#,
                n(center.x),
                n(center.y),
                n(*radius),
                fill.to_hex(),
                stroke.as_ref().map(stroke_attrs).unwrap_or_default(),
                // hidden markers rely on the stylesheet so :hover can override them
                if *opacity > 0.0 { opacity_attr(*opacity) } else { String::new() }
            );
        }
    }
}

fn gradient_id(prefix: &str, local: &str) -> String {
    if prefix.is_empty() { local.to_string() } else { format!("{prefix}-{local}") }
}

fn stroke_attrs(s: &Stroke) -> String {
    let cap = if s.round_cap { r#" stroke-linecap="round""# } else { "" };
    format!(r#" stroke="{}" stroke-width="{}"{cap}"#, s.color.to_hex(), n(s.width))
}

fn opacity_attr(opacity: f32) -> String {
    if opacity >= 1.0 { String::new() } else { format!(r#" opacity="{}""#, n(opacity)) }
}

fn n(v: f32) -> f32 {
    let r = round3(v);
    if r == 0.0 { 0.0 } else { r }
}

/// Escape text for XML/HTML content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
