use jsontrim::Options;
use jsontrim::writer::{to_string_pretty, to_writer_pretty};
use serde_json::json;

#[test]
fn two_space_indent_by_default() -> Result<(), Box<dyn std::error::Error>> {
    let v = json!({"a": "1", "b": ["true", "x"]});
    let out = to_string_pretty(&v, &Options::default())?;
    assert_eq!(out, "{\n  \"a\": \"1\",\n  \"b\": [\n    \"true\",\n    \"x\"\n  ]\n}");
    Ok(())
}

#[test]
fn empty_containers_print_compact() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options::default();
    assert_eq!(to_string_pretty(&json!([]), &opts)?, "[]");
    assert_eq!(to_string_pretty(&json!({}), &opts)?, "{}");
    assert_eq!(
        to_string_pretty(&json!({"a": []}), &opts)?,
        "{\n  \"a\": []\n}"
    );
    Ok(())
}

#[test]
fn custom_indent_width() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options {
        indent: 4,
        ..Options::default()
    };
    let out = to_string_pretty(&json!(["x"]), &opts)?;
    assert_eq!(out, "[\n    \"x\"\n]");
    Ok(())
}

#[test]
fn non_ascii_keys_escaped_by_default() -> Result<(), Box<dyn std::error::Error>> {
    let v = json!({"caf\u{e9}\u{1F600}": "x"});
    let out = to_string_pretty(&v, &Options::default())?;
    assert_eq!(out, "{\n  \"caf\\u00e9\\ud83d\\ude00\": \"x\"\n}");
    assert!(out.is_ascii());
    let back: serde_json::Value = serde_json::from_str(&out)?;
    assert_eq!(back, v);
    Ok(())
}

#[test]
fn utf8_keys_when_ascii_only_disabled() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options {
        ascii_only: false,
        ..Options::default()
    };
    let out = to_string_pretty(&json!({"caf\u{e9}": "x"}), &opts)?;
    assert_eq!(out, "{\n  \"caf\u{e9}\": \"x\"\n}");
    Ok(())
}

#[test]
fn control_chars_in_keys_use_json_escapes() -> Result<(), Box<dyn std::error::Error>> {
    let out = to_string_pretty(&json!({"a\tb\"": "x"}), &Options::default())?;
    assert_eq!(out, "{\n  \"a\\tb\\\"\": \"x\"\n}");
    Ok(())
}

#[test]
fn writer_output_matches_string_output() -> Result<(), Box<dyn std::error::Error>> {
    let v = json!({"k": ["a", {"n": "b"}]});
    let opts = Options::default();
    let mut buf = Vec::new();
    to_writer_pretty(&mut buf, &v, &opts)?;
    assert_eq!(String::from_utf8(buf)?, to_string_pretty(&v, &opts)?);
    Ok(())
}

#[test]
fn trim_json_str_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let input = r#"{"a": 1, "b": [true, null, "héllo"]}"#;
    let out = jsontrim::trim_json_str(input, &Options::default())?;
    assert_eq!(
        out,
        "{\n  \"a\": \"1\",\n  \"b\": [\n    \"true\",\n    \"null\",\n    \"hllo\"\n  ]\n}"
    );
    Ok(())
}

#[test]
fn trim_json_str_rejects_malformed_input() {
    let err = jsontrim::trim_json_str("{\"a\": ", &Options::default()).unwrap_err();
    assert!(matches!(err, jsontrim::Error::SerdeJson(_)));
}

#[test]
fn del_in_keys_is_escaped_when_ascii_only() -> Result<(), Box<dyn std::error::Error>> {
    let v = json!({"a\u{7f}b": "x"});
    let out = to_string_pretty(&v, &Options::default())?;
    assert_eq!(out, "{\n  \"a\\u007fb\": \"x\"\n}");

    let raw = Options {
        ascii_only: false,
        ..Options::default()
    };
    assert_eq!(to_string_pretty(&v, &raw)?, "{\n  \"a\u{7f}b\": \"x\"\n}");
    Ok(())
}

#[test]
fn deeply_nested_document_renders() -> Result<(), Box<dyn std::error::Error>> {
    let depth = 1_000;
    let text = format!("{}true{}", "[".repeat(depth), "]".repeat(depth));
    let out = jsontrim::trim_json_str(&text, &Options::default())?;
    assert!(out.contains("\"true\""));
    assert_eq!(out.matches('[').count(), depth);
    assert_eq!(out.matches(']').count(), depth);
    Ok(())
}

#[test]
fn large_integers_render_exactly() -> Result<(), Box<dyn std::error::Error>> {
    let out = jsontrim::trim_json_str(
        r#"{"big": 123456789012345678901234567890, "zero": -0}"#,
        &Options::default(),
    )?;
    assert_eq!(
        out,
        "{\n  \"big\": \"123456789012345678901234567890\",\n  \"zero\": \"-0\"\n}"
    );
    Ok(())
}
