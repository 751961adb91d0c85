//! Directory driver: every `X.json` in a source directory becomes
//! `X_trimmed.json` in a destination directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, FileError, Result};
use crate::normalize::{drop_value, normalize_value};
use crate::options::Options;
use crate::parse::parse_document;
use crate::writer;

const INPUT_SUFFIX: &str = ".json";
const OUTPUT_SUFFIX: &str = "_trimmed.json";

/// Map `X.json` to `X_trimmed.json`. Only the trailing suffix is rewritten.
pub fn trimmed_file_name(name: &str) -> Option<String> {
    let stem = name.strip_suffix(INPUT_SUFFIX)?;
    Some(format!("{stem}{OUTPUT_SUFFIX}"))
}

/// List the `.json` entries of `source`, sorted by name. Subdirectories are
/// neither descended into nor listed, and names that are not valid UTF-8 are
/// ignored.
pub fn list_inputs(source: &Path) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in fs::read_dir(source).map_err(|e| Error::at(source, e))? {
        let entry = entry.map_err(|e| Error::at(source, e))?;
        let path = entry.path();
        let is_json = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(INPUT_SUFFIX));
        if is_json && !path.is_dir() {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

/// Normalize one file into `dest_dir`, returning the path written.
pub fn process_file(
    input: &Path,
    dest_dir: &Path,
    options: &Options,
) -> core::result::Result<PathBuf, FileError> {
    let out_name = input
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(trimmed_file_name)
        .ok_or_else(|| Error::Message(format!("not a .json file: {}", input.display())))?;

    let bytes = match fs::read(input) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(FileError::NotFound {
                path: input.to_path_buf(),
            });
        }
        Err(e) => return Err(Error::at(input, e).into()),
    };
    let value = parse_document(&bytes).map_err(|source| FileError::Parse {
        path: input.to_path_buf(),
        source,
    })?;

    let normalized = normalize_value(value);
    let rendered = writer::to_vec_pretty(&writer::DeepValue(&normalized), options);
    drop_value(normalized);
    let rendered = rendered?;
    let out_path = dest_dir.join(out_name);
    fs::write(&out_path, rendered).map_err(|e| Error::at(&out_path, e))?;
    Ok(out_path)
}

#[derive(Debug)]
pub struct Skipped {
    pub path: PathBuf,
    pub reason: FileError,
}

#[derive(Debug, Default)]
pub struct Report {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<Skipped>,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Process every input of `source` into `dest`.
///
/// Missing and malformed files are recorded in the report and the run
/// continues. Any other failure aborts the run.
pub fn process_dir(source: &Path, dest: &Path, options: &Options) -> Result<Report> {
    process_dir_with(source, dest, options, |_, _| {})
}

/// Like [`process_dir`], calling `observe` after each file with its input path
/// and outcome, before the next file is read.
pub fn process_dir_with<F>(
    source: &Path,
    dest: &Path,
    options: &Options,
    mut observe: F,
) -> Result<Report>
where
    F: FnMut(&Path, core::result::Result<&Path, &FileError>),
{
    if options.create_dest {
        fs::create_dir_all(dest).map_err(|e| Error::at(dest, e))?;
    }

    let mut report = Report::default();
    for input in list_inputs(source)? {
        match process_file(&input, dest, options) {
            Ok(out) => {
                observe(&input, Ok(&out));
                report.written.push(out);
            }
            Err(FileError::Fatal(e)) => return Err(e),
            Err(reason) => {
                observe(&input, Err(&reason));
                report.skipped.push(Skipped { path: input, reason });
            }
        }
    }
    Ok(report)
}
