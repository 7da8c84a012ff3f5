//! Bridging between FEEL values and JSON
//!
//! Process data usually arrives as JSON; results are printed as JSON by the
//! command-line tool. Temporal values travel as their ISO strings, ranges as
//! `{start, end, startIncluded, endIncluded}` objects, functions as `null`.

use crate::Value;
use serde_json::{Map, Number, Value as Json};

impl Value {
    /// Convert a JSON document to a FEEL value
    ///
    /// Strings stay strings; no temporal detection is attempted.
    pub fn from_json(json: &Json) -> Value {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Boolean(*b),
            Json::Number(n) => n.as_f64().map(Value::number).unwrap_or(Value::Null),
            Json::String(s) => Value::String(s.clone()),
            Json::Array(items) => Value::List(items.iter().map(Value::from_json).collect()),
            Json::Object(map) => Value::Context(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::from_json(v)))
                    .collect(),
            ),
        }
    }

    pub fn to_json(&self) -> Json {
        match self {
            Value::Null | Value::Function(_) => Json::Null,
            Value::Boolean(b) => Json::Bool(*b),
            Value::Number(n) => number_to_json(*n),
            Value::String(s) => Json::String(s.clone()),
            Value::Date(_)
            | Value::Time(_)
            | Value::DateTime(_)
            | Value::DayTimeDuration(_)
            | Value::YearMonthDuration(_) => Json::String(self.to_string()),
            Value::List(items) => Json::Array(items.iter().map(Value::to_json).collect()),
            Value::Context(ctx) => Json::Object(
                ctx.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect::<Map<_, _>>(),
            ),
            Value::Range(r) => {
                let mut map = Map::new();
                map.insert("start".into(), r.start.to_json());
                map.insert("end".into(), r.end.to_json());
                map.insert("startIncluded".into(), Json::Bool(r.start_included));
                map.insert("endIncluded".into(), Json::Bool(r.end_included));
                Json::Object(map)
            }
        }
    }
}

fn number_to_json(n: f64) -> Json {
    if n.fract() == 0.0 && n.abs() < 9.0e15 {
        Json::Number(Number::from(n as i64))
    } else {
        Number::from_f64(n).map(Json::Number).unwrap_or(Json::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FeelDate, FeelRange};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_from_json_preserves_order() {
        let value = Value::from_json(&json!({"b": 1, "a": [true, null, "x"], "c": 2.5}));
        let ctx = value.as_context().unwrap();
        assert_eq!(ctx.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(ctx["c"], Value::number(2.5));
    }

    #[test]
    fn test_to_json() {
        let value = Value::context([
            ("n", Value::number(3.0)),
            ("d", Value::Date(FeelDate::new(2024, 1, 2).unwrap())),
            ("r", Value::range(FeelRange::new(Value::number(1.0), false, Value::number(2.0), true))),
        ]);
        assert_eq!(
            value.to_json(),
            json!({
                "n": 3,
                "d": "2024-01-02",
                "r": {"start": 1, "end": 2, "startIncluded": false, "endIncluded": true}
            })
        );
    }
}
