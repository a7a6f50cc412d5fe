// File: crates/chart-core/src/path.rs
// Summary: Line and area generators with gap handling and monotone-x cubic interpolation.

use std::fmt::Write as _;

use crate::geometry::{round3, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
    Close,
}

/// Renderer-agnostic path geometry in content units.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    cmds: Vec<PathCmd>,
}

impl Path {
    pub fn new() -> Self { Self::default() }

    pub fn move_to(&mut self, x: f32, y: f32) { self.cmds.push(PathCmd::MoveTo(Point::new(x, y))); }
    pub fn line_to(&mut self, x: f32, y: f32) { self.cmds.push(PathCmd::LineTo(Point::new(x, y))); }
    pub fn cubic_to(&mut self, c1: Point, c2: Point, to: Point) { self.cmds.push(PathCmd::CubicTo(c1, c2, to)); }
    pub fn close(&mut self) { self.cmds.push(PathCmd::Close); }

    pub fn commands(&self) -> &[PathCmd] { &self.cmds }
    pub fn is_empty(&self) -> bool { self.cmds.is_empty() }

    /// Number of disjoint runs; a line with `n` gaps between defined runs has `n + 1`.
    pub fn subpath_count(&self) -> usize {
        self.cmds.iter().filter(|c| matches!(c, PathCmd::MoveTo(_))).count()
    }

    /// SVG path data with coordinates rounded to three decimals.
    pub fn to_svg_data(&self) -> String {
        let mut out = String::new();
        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo(p) => { let _ = write!(out, "M{},{}", num(p.x), num(p.y)); }
                PathCmd::LineTo(p) => { let _ = write!(out, "L{},{}", num(p.x), num(p.y)); }
                PathCmd::CubicTo(a, b, p) => {
                    let _ = write!(out, "C{},{},{},{},{},{}", num(a.x), num(a.y), num(b.x), num(b.y), num(p.x), num(p.y));
                }
                PathCmd::Close => out.push('Z'),
            }
        }
        out
    }
}

fn num(v: f32) -> f32 {
    let r = round3(v);
    if r == 0.0 { 0.0 } else { r }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Curve {
    Linear,
    #[default]
    MonotoneX,
}

/// Line through `samples`; `None` y-values are undefined and break the line.
pub fn line(samples: &[(f32, Option<f32>)], curve: Curve) -> Path {
    let mut path = Path::new();
    {
        let mut w = writer(curve, &mut path);
        let mut open = false;
        for &(x, y) in samples {
            match y {
                Some(y) => {
                    if !open { w.line_start(); open = true; }
                    w.point(x, y);
                }
                None if open => { w.line_end(); open = false; }
                None => {}
            }
        }
        if open { w.line_end(); }
    }
    path
}

/// Filled area between each defined run of `samples` and the horizontal `floor`.
pub fn area(samples: &[(f32, Option<f32>)], floor: f32, curve: Curve) -> Path {
    let mut path = Path::new();
    {
        let mut w = writer(curve, &mut path);
        let mut run: Vec<f32> = Vec::new();
        for &(x, y) in samples {
            match y {
                Some(y) => {
                    if run.is_empty() { w.area_start(); w.line_start(); }
                    run.push(x);
                    w.point(x, y);
                }
                None => close_area_run(w.as_mut(), &mut run, floor),
            }
        }
        close_area_run(w.as_mut(), &mut run, floor);
    }
    path
}

// Walk the run back along the floor and close it.
fn close_area_run(w: &mut dyn CurveWriter, run: &mut Vec<f32>, floor: f32) {
    if run.is_empty() { return; }
    w.line_end();
    w.line_start();
    for &x in run.iter().rev() { w.point(x, floor); }
    w.line_end();
    w.area_end();
    run.clear();
}

trait CurveWriter {
    fn area_start(&mut self);
    fn area_end(&mut self);
    fn line_start(&mut self);
    fn line_end(&mut self);
    fn point(&mut self, x: f32, y: f32);
}

fn writer<'a>(curve: Curve, path: &'a mut Path) -> Box<dyn CurveWriter + 'a> {
    match curve {
        Curve::Linear => Box::new(LinearWriter { path, line: None, point: 0 }),
        Curve::MonotoneX => Box::new(MonotoneWriter::new(path)),
    }
}

// Area state: None outside an area, Some(false) on the top edge, Some(true) on the baseline.
// A lone point outside an area closes immediately so round caps still draw a dot.
fn should_close(line: Option<bool>, point: u8) -> bool {
    line == Some(true) || (line != Some(false) && point == 1)
}

struct LinearWriter<'a> {
    path: &'a mut Path,
    line: Option<bool>,
    point: u8,
}

impl CurveWriter for LinearWriter<'_> {
    fn area_start(&mut self) { self.line = Some(false); }
    fn area_end(&mut self) { self.line = None; }
    fn line_start(&mut self) { self.point = 0; }
    fn line_end(&mut self) {
        if should_close(self.line, self.point) { self.path.close(); }
        self.line = self.line.map(|l| !l);
    }
    fn point(&mut self, x: f32, y: f32) {
        if self.point == 0 {
            self.point = 1;
            if self.line == Some(true) { self.path.line_to(x, y) } else { self.path.move_to(x, y) }
        } else {
            self.point = 2;
            self.path.line_to(x, y);
        }
    }
}

struct MonotoneWriter<'a> {
    path: &'a mut Path,
    line: Option<bool>,
    point: u8,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    t0: f32,
}

impl<'a> MonotoneWriter<'a> {
    fn new(path: &'a mut Path) -> Self {
        Self { path, line: None, point: 0, x0: f32::NAN, y0: f32::NAN, x1: f32::NAN, y1: f32::NAN, t0: f32::NAN }
    }

    // Tangent at the current point from both neighbouring secants, clamped to stay monotone.
    fn slope3(&self, x2: f32, y2: f32) -> f32 {
        let h0 = self.x1 - self.x0;
        let h1 = x2 - self.x1;
        let d0 = if h0 != 0.0 { h0 } else if h1 < 0.0 { -0.0 } else { 0.0 };
        let d1 = if h1 != 0.0 { h1 } else if h0 < 0.0 { -0.0 } else { 0.0 };
        let s0 = (self.y1 - self.y0) / d0;
        let s1 = (y2 - self.y1) / d1;
        let p = (s0 * h1 + s1 * h0) / (h0 + h1);
        // Any NaN bound (h0 + h1 == 0 on a reversal) yields a flat tangent.
        let bounds = [s0.abs(), s1.abs(), 0.5 * p.abs()];
        if bounds.iter().any(|b| b.is_nan()) {
            return 0.0;
        }
        let t = (sign(s0) + sign(s1)) * bounds[0].min(bounds[1]).min(bounds[2]);
        if t.is_nan() { 0.0 } else { t }
    }

    // One-sided tangent at an end point.
    fn slope2(&self, t: f32) -> f32 {
        let h = self.x1 - self.x0;
        if h != 0.0 { (3.0 * (self.y1 - self.y0) / h - t) / 2.0 } else { t }
    }

    fn bezier(&mut self, t0: f32, t1: f32) {
        let dx = (self.x1 - self.x0) / 3.0;
        self.path.cubic_to(
            Point::new(self.x0 + dx, self.y0 + dx * t0),
            Point::new(self.x1 - dx, self.y1 - dx * t1),
            Point::new(self.x1, self.y1),
        );
    }
}

fn sign(v: f32) -> f32 { if v < 0.0 { -1.0 } else { 1.0 } }

impl CurveWriter for MonotoneWriter<'_> {
    fn area_start(&mut self) { self.line = Some(false); }
    fn area_end(&mut self) { self.line = None; }

    fn line_start(&mut self) {
        self.x0 = f32::NAN;
        self.x1 = f32::NAN;
        self.y0 = f32::NAN;
        self.y1 = f32::NAN;
        self.t0 = f32::NAN;
        self.point = 0;
    }

    fn line_end(&mut self) {
        match self.point {
            2 => self.path.line_to(self.x1, self.y1),
            3 => {
                let t1 = self.slope2(self.t0);
                self.bezier(self.t0, t1);
            }
            _ => {}
        }
        if should_close(self.line, self.point) { self.path.close(); }
        self.line = self.line.map(|l| !l);
    }

    fn point(&mut self, x: f32, y: f32) {
        let mut t1 = f32::NAN;
        if x == self.x1 && y == self.y1 { return; }
        match self.point {
            0 => {
                self.point = 1;
                if self.line == Some(true) { self.path.line_to(x, y) } else { self.path.move_to(x, y) }
            }
            1 => self.point = 2,
            2 => {
                self.point = 3;
                t1 = self.slope3(x, y);
                let t0 = self.slope2(t1);
                self.bezier(t0, t1);
            }
            _ => {
                t1 = self.slope3(x, y);
                self.bezier(self.t0, t1);
            }
        }
        self.x0 = self.x1;
        self.x1 = x;
        self.y0 = self.y1;
        self.y1 = y;
        self.t0 = t1;
    }
}
