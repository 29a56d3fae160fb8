//! fs-slice: prefix/suffix matching and trimming for text element lists.
//!
//! Input text is split into elements (lines by default) and the operations
//! from `foodshare-slice` are applied to the resulting sequence.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use foodshare_slice::{ends_with_iter, starts_with_iter, strip_all, SequenceExt, Separator};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod config;
mod output;

use config::Config;
use output::{Output, OutputFormat, Status};

/// Exit code when a starts-with/ends-with check does not match.
const EXIT_NO_MATCH: u8 = 1;
/// Exit code for usage and I/O errors.
const EXIT_ERROR: u8 = 2;

/// Prefix/suffix matching and trimming for line, comma and word lists
#[derive(Parser)]
#[command(name = "fs-slice")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// How input is split into elements (line, comma, whitespace, or a single character)
    #[arg(short, long, global = true)]
    separator: Option<Separator>,

    /// Path to a config file
    #[arg(long, global = true, env = "FS_SLICE_CONFIG")]
    config: Option<PathBuf>,

    /// Input file (reads stdin if not specified)
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether the input starts with the given elements
    StartsWith {
        /// Elements expected at the head
        #[arg(allow_hyphen_values = true)]
        pattern: Vec<String>,
    },

    /// Check whether the input ends with the given elements
    EndsWith {
        /// Elements expected at the tail
        #[arg(allow_hyphen_values = true)]
        pattern: Vec<String>,
    },

    /// Drop the first N elements
    DropFirst {
        /// Number of elements to drop
        #[arg(default_value_t = 1, allow_negative_numbers = true)]
        count: i64,
    },

    /// Drop the last N elements
    DropLast {
        /// Number of elements to drop
        #[arg(default_value_t = 1, allow_negative_numbers = true)]
        count: i64,
    },

    /// Remove the given elements from the head, once, if present
    DropPrefix {
        /// Elements to remove
        #[arg(allow_hyphen_values = true)]
        pattern: Vec<String>,
    },

    /// Remove the given elements from the tail, once, if present
    DropSuffix {
        /// Elements to remove
        #[arg(allow_hyphen_values = true)]
        pattern: Vec<String>,
    },

    /// Strip a header and/or footer from many files
    Strip {
        /// File holding the header to remove
        #[arg(long)]
        prefix_file: Option<PathBuf>,

        /// File holding the footer to remove
        #[arg(long)]
        suffix_file: Option<PathBuf>,

        /// Rewrite changed files in place (dry-run if not specified)
        #[arg(short, long)]
        write: bool,

        /// Files to process
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            Status::error(&format!("{e:#}"));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load(cli.config.as_deref())?;
    init_logging(cli.verbose, &config.settings.log_level);

    if let Some(path) = &config.path {
        debug!(path = %path.display(), "Loaded config");
    }

    let separator = cli.separator.unwrap_or(config.settings.separator);
    let format = cli.format.unwrap_or(config.settings.format);
    let out = Output::new(format, separator);
    debug!(%separator, ?format, "Resolved settings");

    match cli.command {
        Commands::StartsWith { pattern } => {
            let text = read_input(cli.input.as_deref())?;
            let matched = starts_with_iter(&separator.split(&text), pattern.iter().map(String::as_str));
            out.boolean(matched)?;
            Ok(match_exit_code(matched))
        }

        Commands::EndsWith { pattern } => {
            let text = read_input(cli.input.as_deref())?;
            let matched = ends_with_iter(&separator.split(&text), pattern.iter().map(String::as_str));
            out.boolean(matched)?;
            Ok(match_exit_code(matched))
        }

        Commands::DropFirst { count } => {
            let text = read_input(cli.input.as_deref())?;
            out.elements(&separator.split(&text).drop_first(count)?)?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::DropLast { count } => {
            let text = read_input(cli.input.as_deref())?;
            out.elements(&separator.split(&text).drop_last(count)?)?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::DropPrefix { pattern } => {
            let text = read_input(cli.input.as_deref())?;
            let elements = separator.split(&text);
            out.elements(&elements.drop_prefix_iter(pattern.iter().map(String::as_str)))?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::DropSuffix { pattern } => {
            let text = read_input(cli.input.as_deref())?;
            let elements = separator.split(&text);
            out.elements(&elements.drop_suffix_iter(pattern.iter().map(String::as_str)))?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Strip { prefix_file, suffix_file, write, files } => {
            run_strip(&out, separator, prefix_file.as_deref(), suffix_file.as_deref(), write, &files)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_strip(
    out: &Output,
    separator: Separator,
    prefix_file: Option<&Path>,
    suffix_file: Option<&Path>,
    write: bool,
    files: &[PathBuf],
) -> Result<()> {
    if prefix_file.is_none() && suffix_file.is_none() {
        anyhow::bail!("Nothing to strip: pass --prefix-file and/or --suffix-file");
    }

    let prefix_text = prefix_file.map(read_file).transpose()?.unwrap_or_default();
    let suffix_text = suffix_file.map(read_file).transpose()?.unwrap_or_default();
    let prefix = separator.split(&prefix_text);
    let suffix = separator.split(&suffix_text);

    let contents = files
        .iter()
        .map(|path| read_file(path))
        .collect::<Result<Vec<_>>>()?;
    let sequences: Vec<Vec<&str>> = contents.iter().map(|text| separator.split(text)).collect();

    let results = strip_all(&sequences, &prefix, &suffix);
    debug!(files = files.len(), prefix = prefix.len(), suffix = suffix.len(), "Stripped files");

    if write {
        for ((path, original), result) in files.iter().zip(&contents).zip(&results) {
            if !result.is_changed() {
                continue;
            }
            let head = if result.prefix_matched { prefix.len() } else { 0 };
            let text = separator.retain(original, head..head + result.elements.len());
            std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
            debug!(path = %path.display(), removed = result.removed, "Rewrote file");
        }
    }

    out.strip_report(files, &results, write)
}

fn init_logging(verbose: bool, log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("fs_slice=debug,foodshare_slice=debug")
        } else {
            EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("warn"))
        }
    });

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => read_file(path),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn match_exit_code(matched: bool) -> ExitCode {
    if matched {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_NO_MATCH)
    }
}
