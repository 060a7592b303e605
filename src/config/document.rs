//! Document normalization and the scalar type contract.

use serde_json::{Map, Number, Value};

/// A normalized project document.
///
/// Mapping keys are always strings and scalars are restricted to integers,
/// floats, booleans, and strings. Produced by the load path in this module's
/// parent; `serde_json::Map` keeps keys sorted, which is what makes dumps
/// deterministic.
pub type Document = Value;

/// Deep-normalize a parsed YAML value into a [`Document`].
///
/// Mapping keys are coerced to strings (numeric and boolean keys take their
/// display form); sequences and mappings recurse.
///
/// # Panics
///
/// Panics if the value contains a scalar outside the permitted set: `null`,
/// a tagged value, a non-finite float, or a non-scalar mapping key. These
/// are contract violations in the input data, not recoverable parse errors.
pub fn normalize(value: serde_yaml::Value) -> Document {
    match value {
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => Value::Number(convert_number(&n)),
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(seq) => Value::Array(seq.into_iter().map(normalize).collect()),
        serde_yaml::Value::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, item) in mapping {
                map.insert(key_string(key), normalize(item));
            }
            Value::Object(map)
        }
        serde_yaml::Value::Null => {
            panic!(
                "project documents may not contain null: \
                 scalars must be integer, float, boolean, or string"
            )
        }
        serde_yaml::Value::Tagged(tagged) => {
            panic!(
                "project documents may not contain the tagged value '{}'",
                tagged.tag
            )
        }
    }
}

/// Coerce a mapping key to a string.
fn key_string(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        _ => panic!("project mapping keys must be scalars"),
    }
}

fn convert_number(n: &serde_yaml::Number) -> Number {
    if let Some(i) = n.as_i64() {
        Number::from(i)
    } else if let Some(u) = n.as_u64() {
        Number::from(u)
    } else {
        n.as_f64()
            .and_then(Number::from_f64)
            .unwrap_or_else(|| {
                panic!("project documents may not contain the non-finite float '{n}'")
            })
    }
}
