#![no_main]
use arbitrary::Arbitrary;
use jsontrim::{normalize_ref, normalize_value};
use libfuzzer_sys::{arbitrary, fuzz_target};
use serde_json::{Number, Value};

const MAX_DEPTH: usize = 8;
const MAX_ARRAY_SIZE: usize = 20;
const MAX_OBJECT_SIZE: usize = 20;

#[derive(Arbitrary, Debug)]
struct FuzzValue {
    choice: u8,
}

impl FuzzValue {
    fn to_json_value(
        &self,
        u: &mut arbitrary::Unstructured,
        depth: usize,
    ) -> arbitrary::Result<Value> {
        if depth >= MAX_DEPTH {
            return Ok(Value::Null);
        }

        Ok(match self.choice % 10 {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: i64 = u.arbitrary()?;
                Value::Number(Number::from(n))
            }
            3 => {
                let n: f64 = u.arbitrary()?;
                Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
            }
            4 => {
                let s: String = u.arbitrary()?;
                Value::String(s)
            }
            5..=7 => {
                let size = u.int_in_range(0..=MAX_ARRAY_SIZE)?;
                let mut arr = Vec::with_capacity(size);
                for _ in 0..size {
                    let fv: FuzzValue = u.arbitrary()?;
                    arr.push(fv.to_json_value(u, depth + 1)?);
                }
                Value::Array(arr)
            }
            _ => {
                let size = u.int_in_range(0..=MAX_OBJECT_SIZE)?;
                let mut obj = serde_json::Map::new();
                for _ in 0..size {
                    let key: String = u.arbitrary()?;
                    let fv: FuzzValue = u.arbitrary()?;
                    obj.insert(key, fv.to_json_value(u, depth + 1)?);
                }
                Value::Object(obj)
            }
        })
    }
}

fn check_leaves(original: &Value, normalized: &Value) {
    match (original, normalized) {
        (Value::Array(x), Value::Array(y)) => {
            assert_eq!(x.len(), y.len());
            for (l, r) in x.iter().zip(y) {
                check_leaves(l, r);
            }
        }
        (Value::Object(x), Value::Object(y)) => {
            assert!(x.keys().eq(y.keys()), "key order changed");
            for (l, r) in x.values().zip(y.values()) {
                check_leaves(l, r);
            }
        }
        (Value::String(s), Value::String(t)) => {
            let expected: String = s.chars().filter(|c| (' '..='~').contains(c)).collect();
            assert_eq!(&expected, t);
        }
        (Value::Null, Value::String(t)) => assert_eq!(t, "null"),
        (Value::Bool(b), Value::String(t)) => assert_eq!(t, &b.to_string()),
        (Value::Number(n), Value::String(t)) => assert_eq!(t, &n.to_string()),
        (o, n) => panic!("Unexpected leaf pair!\nOriginal: {:?}\nNormalized: {:?}", o, n),
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);

    if let Ok(fv) = u.arbitrary::<FuzzValue>() {
        if let Ok(value) = fv.to_json_value(&mut u, 0) {
            let normalized = normalize_value(value.clone());
            check_leaves(&value, &normalized);
            assert_eq!(normalize_ref(&value), normalized);
        }
    }
});
