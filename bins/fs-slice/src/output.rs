//! Terminal output for fs-slice.
//!
//! Results go to stdout in text or JSON; status lines use the same
//! symbols as the other Foodshare CLIs.

use anyhow::Result;
use clap::ValueEnum;
use foodshare_slice::{Separator, StripResult};
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::PathBuf;

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }
}

/// Writes command results in the selected format.
pub struct Output {
    format: OutputFormat,
    separator: Separator,
}

impl Output {
    pub fn new(format: OutputFormat, separator: Separator) -> Self {
        Self { format, separator }
    }

    /// Print a match result.
    pub fn boolean(&self, value: bool) -> Result<()> {
        match self.format {
            OutputFormat::Text => println!("{value}"),
            OutputFormat::Json => println!("{}", serde_json::to_string(&json!({ "result": value }))?),
        }
        Ok(())
    }

    /// Print a trimmed element list, re-joined with the input separator.
    pub fn elements<S: AsRef<str> + Serialize>(&self, elements: &[S]) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                if !elements.is_empty() {
                    println!("{}", self.separator.join(elements));
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(&json!({ "result": elements }))?);
            }
        }
        Ok(())
    }

    /// Print the outcome of a batch strip.
    pub fn strip_report(&self, files: &[PathBuf], results: &[StripResult<&str>], written: bool) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                for (path, result) in files.iter().zip(results) {
                    if result.is_changed() {
                        let verb = if written { "stripped" } else { "would strip" };
                        Status::success(&format!(
                            "{}: {} {} element(s)",
                            path.display(),
                            verb,
                            result.removed
                        ));
                    } else {
                        Status::info(&format!("{}: unchanged", path.display()));
                    }
                }
                let changed = results.iter().filter(|r| r.is_changed()).count();
                println!("\n{} of {} files {}", changed, results.len(), if written { "updated" } else { "would change" });
            }
            OutputFormat::Json => {
                let report: Vec<_> = files
                    .iter()
                    .zip(results)
                    .map(|(path, result)| {
                        json!({
                            "path": path.to_string_lossy(),
                            "prefix_matched": result.prefix_matched,
                            "suffix_matched": result.suffix_matched,
                            "removed": result.removed,
                            "written": written && result.is_changed(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
        Ok(())
    }
}
