// File: crates/chart-core/src/scale.rs
// Summary: Linear scales with nice domains and tick generation, plus the per-chart coordinate frame.

use crate::geometry::{Point, Rect};

/// Logical X coordinate (e.g., timestamp or sample index).
pub type Logical = f64;
/// Value Y coordinate.
pub type Value = f64;

/// Coordinate transform between data space and content units.
/// Renderers and hit testing only see a chart through this trait.
pub trait ScaleTransform {
    fn to_screen_x(&self, x: Logical) -> f32;
    fn to_screen_y(&self, y: Value) -> f32;
    fn from_screen_x(&self, px: f32) -> Logical;
    fn from_screen_y(&self, py: f32) -> Value;

    fn to_screen(&self, x: Logical, y: Value) -> Point {
        Point::new(self.to_screen_x(x), self.to_screen_y(y))
    }
}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Continuous linear map from `domain` to `range`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    #[inline]
    pub fn map(&self, v: f64) -> f32 {
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        let t = if span == 0.0 { if v.is_nan() { f64::NAN } else { 0.5 } } else { (v - d0) / span };
        let (r0, r1) = self.range;
        r0 + (t as f32) * (r1 - r0)
    }

    #[inline]
    pub fn invert(&self, px: f32) -> f64 {
        let (r0, r1) = self.range;
        let span = (r1 - r0) as f64;
        let t = if span == 0.0 { 0.5 } else { (px - r0) as f64 / span };
        let (d0, d1) = self.domain;
        d0 + t * (d1 - d0)
    }

    /// Extend the domain to round multiples of the tick step.
    /// The domain is only replaced once the step stops changing.
    pub fn nice(mut self, count: usize) -> Self {
        let (mut start, mut stop) = self.domain;
        let reversed = stop < start;
        if reversed { std::mem::swap(&mut start, &mut stop); }
        if !(start.is_finite() && stop.is_finite()) || start == stop {
            return self;
        }
        let mut prestep: Option<f64> = None;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count as f64);
            if prestep == Some(step) {
                self.domain = if reversed { (stop, start) } else { (start, stop) };
                return self;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = Some(step);
        }
        self
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count as f64)
    }

    /// Signed distance between adjacent ticks for `count`.
    pub fn tick_step(&self, count: usize) -> f64 {
        tick_step(self.domain.0, self.domain.1, count as f64)
    }
}

/// Per-chart coordinate frame: x/y scales plus the plot rectangle they map into.
/// Screen coordinates are plot-local (the plot origin is at `(0, 0)`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub x: LinearScale,
    pub y: LinearScale,
    pub plot: Rect,
}

impl Frame {
    pub fn width(&self) -> f32 { self.plot.width() }
    pub fn height(&self) -> f32 { self.plot.height() }
}

impl ScaleTransform for Frame {
    fn to_screen_x(&self, x: Logical) -> f32 { self.x.map(x) }
    fn to_screen_y(&self, y: Value) -> f32 { self.y.map(y) }
    fn from_screen_x(&self, px: f32) -> Logical { self.x.invert(px) }
    fn from_screen_y(&self, py: f32) -> Value { self.y.invert(py) }
}

/// Min/max over `values`, ignoring NaN; `None` for an empty input.
/// An all-NaN input yields a NaN extent so degenerate data stays degenerate.
pub fn extent<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    let mut seen = false;
    let mut any_number = false;
    for v in values {
        seen = true;
        if v.is_nan() { continue; }
        any_number = true;
        lo = lo.min(v);
        hi = hi.max(v);
    }
    match (seen, any_number) {
        (false, _) => None,
        (true, false) => Some((f64::NAN, f64::NAN)),
        (true, true) => Some((lo, hi)),
    }
}

fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 { 10.0 } else if error >= E5 { 5.0 } else if error >= E2 { 2.0 } else { 1.0 };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let k = 10f64.powf(-power) / factor;
        i1 = (start * k).round();
        i2 = (stop * k).round();
        if i1 / k < start { i1 += 1.0; }
        if i2 / k > stop { i2 -= 1.0; }
        inc = -k;
    } else {
        let k = 10f64.powf(power) * factor;
        i1 = (start / k).round();
        i2 = (stop / k).round();
        if i1 * k < start { i1 += 1.0; }
        if i2 * k > stop { i2 -= 1.0; }
        inc = k;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Tick increment: positive means a whole step, negative means `1 / -inc`.
pub fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    tick_spec(start, stop, count).2
}

pub fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let reverse = stop < start;
    let inc = if reverse { tick_increment(stop, start, count) } else { tick_increment(start, stop, count) };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse { -step } else { step }
}

/// Uniformly spaced, human-friendly values (1, 2 or 5 times a power of ten) inside `[start, stop]`.
pub fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) || start.is_nan() || stop.is_nan() { return Vec::new(); }
    if start == stop { return vec![start]; }
    let reverse = stop < start;
    let (i1, i2, inc) = if reverse { tick_spec(stop, start, count) } else { tick_spec(start, stop, count) };
    if !(i2 >= i1) || !inc.is_finite() { return Vec::new(); }
    let n = (i2 - i1 + 1.0) as usize;
    let at = |i: usize| {
        let k = i1 + i as f64;
        if inc < 0.0 { k / -inc } else { k * inc }
    };
    if reverse {
        (0..n).map(|i| at(n - 1 - i)).collect()
    } else {
        (0..n).map(at).collect()
    }
}

/// Tick label for `value` with precision derived from the tick `step`,
/// grouped thousands and a typographic minus sign.
pub fn format_tick(value: f64, step: f64) -> String {
    let step = step.abs();
    let precision = if step > 0.0 && step.is_finite() { (-step.log10().floor()).max(0.0) as usize } else { 0 };
    format_grouped(value, precision)
}

pub fn format_grouped(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return if value.is_nan() { "NaN".to_string() } else if value > 0.0 { "Infinity".to_string() } else { "\u{2212}Infinity".to_string() };
    }
    let body = format!("{:.*}", precision, value.abs());
    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body.as_str(), None),
    };
    let mut grouped = String::with_capacity(body.len() + int_part.len() / 3 + 1);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 { grouped.push(','); }
        grouped.push(ch);
    }
    if let Some(f) = frac_part {
        grouped.push('.');
        grouped.push_str(f);
    }
    let negative = value < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0');
    if negative { format!("\u{2212}{grouped}") } else { grouped }
}
