//! Command-line driver for the masonry layout engine.
//!
//! Reads a JSON layout document, runs one placement pass and writes the
//! result as JSON to stdout.

use anyhow::{Result, anyhow};
use serde_json::to_string_pretty;
use std::env;
use std::fs::read;
use std::io::{Write as _, stderr, stdout};
use std::path::PathBuf;

mod document;
use document::LayoutDocument;

/// Options accepted by the `layout` command.
#[derive(Debug, Default)]
struct LayoutArgs {
    /// Path of the JSON layout document.
    config: Option<PathBuf>,
    /// Column count overriding the document.
    columns: Option<usize>,
    /// Container width overriding the document.
    width: Option<f32>,
}

/// Parse the arguments following the `layout` command.
///
/// # Errors
/// Returns an error if a flag is missing its value or a value does not parse.
fn parse_layout_args(args: &[String]) -> Result<LayoutArgs> {
    let mut parsed = LayoutArgs::default();
    let mut index = 0;
    while index < args.len() {
        let flag = args[index].as_str();
        let value = args
            .get(index + 1)
            .ok_or_else(|| anyhow!("{flag} needs a value"));
        match flag {
            "--config" => parsed.config = Some(PathBuf::from(value?)),
            "--columns" => parsed.columns = Some(value?.parse()?),
            "--width" => parsed.width = Some(value?.parse()?),
            other => return Err(anyhow!("unknown option '{other}'")),
        }
        index += 2;
    }
    Ok(parsed)
}

/// Run the `layout` command.
///
/// # Errors
/// Returns an error if the document cannot be read or laid out.
fn cmd_layout(args: &LayoutArgs) -> Result<()> {
    let path = args
        .config
        .as_ref()
        .ok_or_else(|| anyhow!("--config is required"))?;
    let mut document = LayoutDocument::from_json(&read(path)?)?;
    if let Some(columns) = args.columns {
        document.column_count = columns;
    }
    if let Some(width) = args.width {
        document.container_width = width;
    }

    log::debug!(
        "Laying out {} with {} columns at {:.1}px",
        path.display(),
        document.column_count,
        document.container_width
    );

    let report = document.run()?;
    writeln!(stdout(), "{}", to_string_pretty(&report)?)?;
    Ok(())
}

/// Print usage information to stderr.
fn print_usage() {
    drop(writeln!(
        stderr(),
        "Usage:\n  masonry layout --config <FILE> [--columns <N>] [--width <PX>]"
    ));
}

/// Main entry point for the masonry CLI tool.
///
/// # Errors
/// Returns an error if command parsing or execution fails.
fn main() -> Result<()> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        print_usage();
        return Err(anyhow!("missing command"));
    }
    let cmd = args.remove(0);
    match cmd.as_str() {
        "layout" => cmd_layout(&parse_layout_args(&args)?),
        _ => {
            print_usage();
            Err(anyhow!("unknown command"))
        }
    }
}
