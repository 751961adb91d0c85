//! Document parsing without a nesting limit.

use serde::Deserialize;
use serde_json::Value;

/// Parse one JSON document from `bytes`.
///
/// Nesting depth is bounded only by memory: the recursion limit is disabled
/// and the stack grows on demand. Numbers keep their source text.
pub fn parse_document(bytes: &[u8]) -> serde_json::Result<Value> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}
