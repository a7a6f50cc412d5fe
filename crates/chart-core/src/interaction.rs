// File: crates/chart-core/src/interaction.rs
// Summary: Per-chart hover state: pointer events, marker hit testing and the tooltip overlay.

use crate::geometry::Point;
use crate::scene::{Element, Scene};

/// Pointer input in content units (the same space as `Scene::width`/`height`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Pointer entered marker `i`.
    Enter(usize),
    /// Pointer left marker `i`.
    Leave(usize),
    /// Raw pointer position; resolved to Enter/Leave by hit testing.
    Move { x: f32, y: f32 },
    /// Pointer left the chart surface.
    Exit,
}

/// A rendered chart plus which marker (if any) currently shows its tooltip.
#[derive(Clone, Debug)]
pub struct ChartView {
    scene: Scene,
    active: Option<usize>,
}

impl ChartView {
    pub fn new(scene: Scene) -> Self {
        Self { scene, active: None }
    }

    pub fn scene(&self) -> &Scene { &self.scene }

    pub fn active(&self) -> Option<usize> { self.active }

    /// Swap in a freshly rendered scene; any tooltip from the old one is dropped.
    pub fn replace_scene(&mut self, scene: Scene) {
        self.scene = scene;
        self.active = None;
    }

    /// Apply one input event. Returns true when the visible overlay changed.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        let next = match event {
            PointerEvent::Enter(i) if i < self.scene.markers.len() => Some(i),
            PointerEvent::Enter(_) => self.active,
            PointerEvent::Leave(i) if self.active == Some(i) => None,
            PointerEvent::Leave(_) => self.active,
            PointerEvent::Move { x, y } => self.hit_test(x, y),
            PointerEvent::Exit => None,
        };
        let changed = next != self.active;
        self.active = next;
        changed
    }

    /// Nearest marker whose circle contains the content-space point.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        let local = Point::new(x - self.scene.origin.x, y - self.scene.origin.y);
        self.scene
            .markers
            .iter()
            .enumerate()
            .map(|(i, m)| (i, m.center.distance_sq(local), m.radius))
            .filter(|&(_, d, r)| d <= r * r)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _, _)| i)
    }

    /// Revealed marker and its tooltip, or nothing when no marker is hovered.
    pub fn overlay(&self) -> Vec<Element> {
        let Some(i) = self.active else { return Vec::new() };
        let mut out: Vec<Element> = self.scene.marker_element(i, true).into_iter().collect();
        out.extend(self.scene.tooltip_elements(i));
        out
    }
}
