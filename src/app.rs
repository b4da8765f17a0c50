// src/app.rs
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use cpdir_core::{CopyReport, copy_directory_with};
use log::info;

use crate::cli::ReportFormat;
use crate::config::Config;
use crate::error::{AppError, Result};

/// Run one copy as configured.
///
/// Failures collected under keep-going are printed to stderr in the
/// `cpdir: <path>: <description>` form before `AppError::Incomplete` is returned.
///
/// # Errors
/// Returns the first copy failure in abort mode, `Incomplete` when a
/// keep-going run recorded failures, or `Overlap` when the destination sits
/// inside the source tree.
pub fn run(config: &Config) -> Result<CopyReport> {
    check_overlap(&config.source, &config.destination)?;

    info!(
        "copying {} into {}",
        config.source.display(),
        config.destination.display()
    );
    let report = copy_directory_with(&config.source, &config.destination, &config.copy)?;

    for failure in &report.errors {
        eprintln!("cpdir: {}", failure.message);
    }
    print_report(&report, config.report)?;
    info!("done: {report}");

    if report.is_success() {
        Ok(report)
    } else {
        Err(AppError::Incomplete {
            failed: report.errors.len(),
        })
    }
}

fn print_report(report: &CopyReport, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::None => {}
        ReportFormat::Text => println!("{report}"),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}

/// Refuse to copy a tree into itself, which would recurse without end.
fn check_overlap(source: &Path, destination: &Path) -> Result<()> {
    // An unreadable source is reported by the walk itself.
    let Ok(source_dir) = fs::canonicalize(source) else {
        return Ok(());
    };
    let Ok(destination_dir) = resolve_lexically(destination) else {
        return Ok(());
    };

    let Ok(below) = destination_dir.strip_prefix(&source_dir) else {
        return Ok(());
    };
    // Hidden directories are never walked, so nesting under one is safe.
    let under_hidden = matches!(
        below.components().next(),
        Some(Component::Normal(name)) if name.as_encoded_bytes().starts_with(b".")
    );
    if !under_hidden {
        return Err(AppError::Overlap {
            source_dir: source.to_path_buf(),
            destination_dir: destination.to_path_buf(),
        });
    }
    Ok(())
}

/// Canonicalize the longest existing ancestor and append the rest.
fn resolve_lexically(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    for ancestor in absolute.ancestors() {
        if let Ok(resolved) = fs::canonicalize(ancestor) {
            let rest = absolute.strip_prefix(ancestor).unwrap_or(Path::new(""));
            return Ok(resolved.join(rest));
        }
    }
    Ok(absolute)
}
