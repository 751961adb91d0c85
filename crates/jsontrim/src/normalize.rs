use serde_json::{Map, Value};

use crate::filter::{trim_str, trim_string};

pub(crate) const RED_ZONE: usize = 64 * 1024;
pub(crate) const STACK_SEGMENT: usize = 1024 * 1024;

/// Recursively normalize a JSON value.
///
/// Containers keep their shape: objects keep their keys in order, arrays keep
/// their length. Strings are filtered to printable ASCII, and numbers,
/// booleans and null become their JSON text as string leaves.
pub fn normalize_value(v: Value) -> Value {
    stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, move || match v {
        Value::Null => Value::String(String::from("null")),
        Value::Bool(b) => Value::String(b.to_string()),
        Value::Number(n) => Value::String(n.to_string()),
        Value::String(s) => Value::String(trim_string(s)),
        Value::Array(a) => Value::Array(a.into_iter().map(normalize_value).collect()),
        Value::Object(m) => Value::Object(
            m.into_iter()
                .map(|(k, vv)| (k, normalize_value(vv)))
                .collect(),
        ),
    })
}

/// Borrowing variant of [`normalize_value`].
pub fn normalize_ref(v: &Value) -> Value {
    stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, || match v {
        Value::String(s) => Value::String(trim_str(s)),
        Value::Array(a) => Value::Array(a.iter().map(normalize_ref).collect()),
        Value::Object(m) => {
            let mut out = Map::with_capacity(m.len());
            for (k, vv) in m.iter() {
                out.insert(k.clone(), normalize_ref(vv));
            }
            Value::Object(out)
        }
        scalar => normalize_value(scalar.clone()),
    })
}

/// Drop a value without recursing, so arbitrarily deep trees cannot exhaust
/// the stack on the way out.
pub fn drop_value(v: Value) {
    let mut pending = vec![v];
    while let Some(v) = pending.pop() {
        match v {
            Value::Array(a) => pending.extend(a),
            Value::Object(m) => pending.extend(m.into_iter().map(|(_, vv)| vv)),
            _ => {}
        }
    }
}
