//! Pretty JSON output with configurable indent and optional ASCII escaping.

use std::io::{self, Write};

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Value;
use serde_json::ser::{Formatter, PrettyFormatter};

use crate::normalize::{RED_ZONE, STACK_SEGMENT};
use crate::{Result, options::Options};

/// Serializes a `Value`, growing the stack at each container level so nesting
/// depth is not limited by the thread's stack size.
pub struct DeepValue<'a>(pub &'a Value);

impl Serialize for DeepValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, || match self.0 {
            Value::Array(a) => {
                let mut seq = serializer.serialize_seq(Some(a.len()))?;
                for v in a {
                    seq.serialize_element(&DeepValue(v))?;
                }
                seq.end()
            }
            Value::Object(m) => {
                let mut map = serializer.serialize_map(Some(m.len()))?;
                for (k, v) in m {
                    map.serialize_entry(k, &DeepValue(v))?;
                }
                map.end()
            }
            leaf => leaf.serialize(serializer),
        })
    }
}

/// `PrettyFormatter` that can additionally escape every non-ASCII character
/// and DEL as `\uXXXX`, using surrogate pairs above U+FFFF.
pub struct AsciiPrettyFormatter<'a> {
    inner: PrettyFormatter<'a>,
    ascii_only: bool,
}

impl<'a> AsciiPrettyFormatter<'a> {
    pub fn new(indent: &'a [u8], ascii_only: bool) -> Self {
        Self {
            inner: PrettyFormatter::with_indent(indent),
            ascii_only,
        }
    }
}

fn needs_escape(ch: char) -> bool {
    !ch.is_ascii() || ch == '\u{7f}'
}

fn write_escaped<W: ?Sized + Write>(writer: &mut W, fragment: &str) -> io::Result<()> {
    let mut start = 0;
    for (i, ch) in fragment.char_indices() {
        if !needs_escape(ch) {
            continue;
        }
        if start < i {
            writer.write_all(fragment[start..i].as_bytes())?;
        }
        let mut units = [0u16; 2];
        for unit in ch.encode_utf16(&mut units).iter() {
            write!(writer, "\\u{:04x}", unit)?;
        }
        start = i + ch.len_utf8();
    }
    if start < fragment.len() {
        writer.write_all(fragment[start..].as_bytes())?;
    }
    Ok(())
}

impl Formatter for AsciiPrettyFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        if self.ascii_only && fragment.chars().any(needs_escape) {
            write_escaped(writer, fragment)
        } else {
            writer.write_all(fragment.as_bytes())
        }
    }
}

pub fn to_writer_pretty<W: Write, T: ?Sized + Serialize>(
    writer: W,
    value: &T,
    options: &Options,
) -> Result<()> {
    let indent = vec![b' '; options.indent];
    let formatter = AsciiPrettyFormatter::new(&indent, options.ascii_only);
    let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut ser)?;
    Ok(())
}

pub fn to_vec_pretty<T: ?Sized + Serialize>(value: &T, options: &Options) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(128);
    to_writer_pretty(&mut out, value, options)?;
    Ok(out)
}

pub fn to_string_pretty<T: ?Sized + Serialize>(value: &T, options: &Options) -> Result<String> {
    let bytes = to_vec_pretty(value, options)?;
    // The serializer only ever emits valid UTF-8.
    String::from_utf8(bytes).map_err(|e| crate::Error::Message(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_bmp_and_astral_chars() {
        let mut out = Vec::new();
        write_escaped(&mut out, "a\u{e9}b\u{1F600}c").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a\\u00e9b\\ud83d\\ude00c");
    }

    #[test]
    fn ascii_fragment_written_verbatim() {
        let mut out = Vec::new();
        write_escaped(&mut out, "plain").unwrap();
        assert_eq!(out, b"plain");
    }
}
