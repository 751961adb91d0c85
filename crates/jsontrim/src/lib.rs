#![doc = include_str!("../README.md")]

pub mod batch;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod options;
pub mod parse;
pub mod writer;

pub use crate::batch::{
    Report, Skipped, list_inputs, process_dir, process_dir_with, process_file, trimmed_file_name,
};
pub use crate::error::{Error, FileError, Result};
pub use crate::normalize::{normalize_ref, normalize_value};
pub use crate::options::Options;
pub use crate::parse::parse_document;

/// Parse a JSON document, normalize it and render it with `options`.
pub fn trim_json_str(s: &str, options: &Options) -> Result<String> {
    let v = normalize_value(parse_document(s.as_bytes())?);
    let rendered = writer::to_string_pretty(&writer::DeepValue(&v), options);
    normalize::drop_value(v);
    rendered
}
