#![no_main]
use jsontrim::writer::{DeepValue, to_string_pretty};
use jsontrim::{Options, normalize_value, parse_document};
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

fn same_shape(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| same_shape(l, r))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter().zip(y).all(|((kl, l), (kr, r))| kl == kr && same_shape(l, r))
        }
        (Value::Array(_) | Value::Object(_), _) | (_, Value::Array(_) | Value::Object(_)) => false,
        _ => true,
    }
}

fuzz_target!(|data: &[u8]| {
    if let Ok(original) = parse_document(data) {
        let once = normalize_value(original.clone());
        if !same_shape(&original, &once) {
            panic!(
                "Shape mismatch!\nOriginal: {}\nNormalized: {}",
                serde_json::to_string_pretty(&original).unwrap(),
                serde_json::to_string_pretty(&once).unwrap()
            );
        }

        let twice = normalize_value(once.clone());
        assert_eq!(once, twice, "normalization is not idempotent");

        let text = to_string_pretty(&DeepValue(&once), &Options::default()).unwrap();
        assert!(text.is_ascii());
        let back = parse_document(text.as_bytes()).unwrap();
        assert_eq!(back, once);
    }
});
