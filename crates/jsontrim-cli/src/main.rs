use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "jsontrim-cli",
    about = "Normalize every X.json in SOURCE into DEST/X_trimmed.json",
    version
)]
struct Args {
    /// Directory to read .json files from
    #[arg(default_value = "raw")]
    source: PathBuf,

    /// Directory to write *_trimmed.json files to
    #[arg(default_value = "processed")]
    dest: PathBuf,

    /// Spaces per indentation level
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Write non-ASCII characters in keys as raw UTF-8 instead of \u escapes
    #[arg(long, default_value_t = false)]
    utf8_keys: bool,

    /// Create DEST if it does not exist
    #[arg(long, default_value_t = false)]
    create_dest: bool,

    /// Read one document from stdin and print it trimmed to stdout
    #[arg(long, default_value_t = false)]
    stdin: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let options = jsontrim::Options {
        indent: args.indent,
        ascii_only: !args.utf8_keys,
        create_dest: args.create_dest,
    };

    if args.stdin {
        let mut buf = String::new();
        stdin().read_to_string(&mut buf)?;
        println!("{}", jsontrim::trim_json_str(&buf, &options)?);
        return Ok(());
    }

    let report =
        jsontrim::process_dir_with(&args.source, &args.dest, &options, |_, outcome| match outcome {
            Ok(out) => println!("wrote {}", out.display()),
            Err(reason) => eprintln!("{}", reason),
        })
        .with_context(|| {
            format!(
                "trimming {} into {}",
                args.source.display(),
                args.dest.display()
            )
        })?;

    println!(
        "{} written, {} skipped",
        report.written.len(),
        report.skipped.len()
    );
    Ok(())
}
