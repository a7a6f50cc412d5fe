// File: crates/chart-dashboard/src/payload.rs
// Summary: Payload validation: JSON array of {title, data}, converted to datasets; the first bad element aborts.
// Notes:
// - Element shape: { "title": string, "data": [[x, y | null | [y | null, ...]], ...] }
// - Only `title` and `data` are read; other keys are ignored.

use chart_core::{Dataset, RawPoint, RawValue};
use serde_json::Value;

use crate::error::LoadError;

pub fn parse_payload(bytes: &[u8]) -> Result<Vec<Dataset>, LoadError> {
    let value: Value = serde_json::from_slice(bytes)?;
    let Value::Array(items) = value else {
        return Err(LoadError::NotAnArray);
    };
    items.iter().enumerate().map(|(index, item)| parse_chart(index, item)).collect()
}

fn parse_chart(index: usize, item: &Value) -> Result<Dataset, LoadError> {
    let title = item
        .get("title")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .ok_or(LoadError::InvalidChart(index))?;
    let data = item.get("data").and_then(Value::as_array).ok_or(LoadError::InvalidChart(index))?;
    let points = data
        .iter()
        .enumerate()
        .map(|(point, raw)| parse_point(raw).ok_or(LoadError::InvalidPoint { index, point }))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Dataset::new(title, points))
}

fn parse_point(raw: &Value) -> Option<RawPoint> {
    let pair = raw.as_array()?;
    let x = pair.first()?.as_f64()?;
    let value = match pair.get(1)? {
        Value::Null => RawValue::Missing,
        Value::Number(n) => RawValue::Scalar(n.as_f64()?),
        Value::Array(ys) => RawValue::Bundle(
            ys.iter()
                .map(|y| match y {
                    Value::Null => Some(None),
                    Value::Number(n) => n.as_f64().map(Some),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()?,
        ),
        _ => return None,
    };
    Some(RawPoint { x, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scalar_null_and_bundle_values() {
        let ds = parse_payload(br#"[{"title":"A","data":[[0,1],[1,null],[2,[1,null,3]]]}]"#).expect("valid");
        assert_eq!(ds.len(), 1);
        assert_eq!(ds[0].title, "A");
        assert_eq!(ds[0].points, vec![
            RawPoint::scalar(0.0, Some(1.0)),
            RawPoint::scalar(1.0, None),
            RawPoint::bundle(2.0, vec![Some(1.0), None, Some(3.0)]),
        ]);
    }

    #[test]
    fn extra_keys_and_trailing_entries_are_ignored() {
        let ds = parse_payload(br#"[{"title":"A","unit":"C","data":[[0,1,"note"]]}]"#).expect("valid");
        assert_eq!(ds[0].points, vec![RawPoint::scalar(0.0, Some(1.0))]);
    }

    #[test]
    fn bad_points_are_located() {
        let err = parse_payload(br#"[{"title":"A","data":[[0,1]]},{"title":"B","data":[[0,1],[1,"x"]]}]"#).unwrap_err();
        assert_eq!(err.to_string(), "Invalid data point at index 1, point 1");
        let err = parse_payload(br#"[{"title":"A","data":[[0,[1,true]]]}]"#).unwrap_err();
        assert!(matches!(err, LoadError::InvalidPoint { index: 0, point: 0 }));
        let err = parse_payload(br#"[{"title":"A","data":[[0]]}]"#).unwrap_err();
        assert!(matches!(err, LoadError::InvalidPoint { index: 0, point: 0 }));
    }
}
