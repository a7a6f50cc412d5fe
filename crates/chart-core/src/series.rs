// File: crates/chart-core/src/series.rs
// Summary: Dataset model as received, and the single/multi series classifier.
// Notes:
// - A dataset is multi-series when ANY point carries a bundle of values.
//   Scalar or null points inside such a dataset are read as an all-absent
//   bundle: their x still counts toward the x-domain but they draw nothing.

/// One raw y-value as found in the payload.
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue {
    Scalar(f64),
    Missing,
    Bundle(Vec<Option<f64>>),
}

impl RawValue {
    pub fn is_bundle(&self) -> bool { matches!(self, RawValue::Bundle(_)) }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RawPoint {
    pub x: f64,
    pub value: RawValue,
}

impl RawPoint {
    pub fn scalar(x: f64, y: Option<f64>) -> Self {
        Self { x, value: y.map_or(RawValue::Missing, RawValue::Scalar) }
    }
    pub fn bundle(x: f64, ys: Vec<Option<f64>>) -> Self {
        Self { x, value: RawValue::Bundle(ys) }
    }
}

/// A titled point list, immutable once loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub title: String,
    pub points: Vec<RawPoint>,
}

impl Dataset {
    pub fn new(title: impl Into<String>, points: Vec<RawPoint>) -> Self {
        Self { title: title.into(), points }
    }

    /// True when bundles and scalar/null values are mixed in one dataset.
    pub fn has_mixed_shapes(&self) -> bool {
        let bundles = self.points.iter().filter(|p| p.value.is_bundle()).count();
        bundles > 0 && bundles < self.points.len()
    }
}

/// Ordered `(x, y)` samples where `None` marks a gap.
#[derive(Clone, Debug, PartialEq)]
pub struct SingleSeries {
    pub title: String,
    pub points: Vec<(f64, Option<f64>)>,
}

impl SingleSeries {
    /// Points with a present y-value, in input order.
    pub fn valid_points(&self) -> Vec<(f64, f64)> {
        self.points.iter().filter_map(|&(x, y)| y.map(|y| (x, y))).collect()
    }
}

/// Ordered `(x, ys)` samples; index `i` of `ys` belongs to series `i`.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiSeries {
    pub title: String,
    pub points: Vec<(f64, Vec<Option<f64>>)>,
}

impl MultiSeries {
    /// Present values of series `index`, in input order. Each series filters its own gaps.
    pub fn series(&self, index: usize) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .filter_map(|(x, ys)| ys.get(index).copied().flatten().map(|y| (*x, y)))
            .collect()
    }

    /// Widest bundle seen in the dataset.
    pub fn arity(&self) -> usize {
        self.points.iter().map(|(_, ys)| ys.len()).max().unwrap_or(0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Classified {
    Single(SingleSeries),
    Multi(MultiSeries),
}

impl Classified {
    pub fn title(&self) -> &str {
        match self {
            Classified::Single(s) => &s.title,
            Classified::Multi(m) => &m.title,
        }
    }

    pub fn is_multi(&self) -> bool { matches!(self, Classified::Multi(_)) }
}

/// Decide single vs multi once per dataset and convert every point to that shape.
pub fn classify(dataset: &Dataset) -> Classified {
    let title = dataset.title.clone();
    if dataset.points.iter().any(|p| p.value.is_bundle()) {
        let points = dataset
            .points
            .iter()
            .map(|p| match &p.value {
                RawValue::Bundle(ys) => (p.x, ys.clone()),
                RawValue::Scalar(_) | RawValue::Missing => (p.x, Vec::new()),
            })
            .collect();
        Classified::Multi(MultiSeries { title, points })
    } else {
        let points = dataset
            .points
            .iter()
            .map(|p| match p.value {
                RawValue::Scalar(y) => (p.x, Some(y)),
                _ => (p.x, None),
            })
            .collect();
        Classified::Single(SingleSeries { title, points })
    }
}
