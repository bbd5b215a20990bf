use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::error::{Error, Result};
use crate::options::{BundleOptions, LanguageFilter};
use crate::rsp::create_response_file;
use crate::writer::{bundle, BundleOutcome};

#[derive(Parser, Debug)]
#[command(version, about)]
/// Bundles the code files of the current directory into a single file.
///
/// Arguments can be read from a response file with `@file`.
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bundle code files to a single file
    Bundle(BundleArgs),
    /// Interactively create a response file for the bundle command
    CreateRsp,
}

#[derive(Args, Debug)]
pub struct BundleArgs {
    /// File path and name of the bundle
    #[arg(short, long)]
    pub output: PathBuf,

    /// Add the source folder path to the bundle
    #[arg(short, long)]
    pub source: bool,

    /// Add an author line to the bundle
    #[arg(short, long)]
    pub author: Option<String>,

    /// Extensions of the files to include, or `all`
    #[arg(short, long, num_args = 1.., required = true)]
    pub language: Vec<String>,

    /// Sort files by extension, then path
    #[arg(long)]
    pub sort: bool,

    /// Remove empty lines from the bundled files
    #[arg(short, long)]
    pub remove: bool,
}

impl From<BundleArgs> for BundleOptions {
    fn from(args: BundleArgs) -> Self {
        BundleOptions {
            output: args.output,
            include_source: args.source,
            author: args.author.filter(|author| !author.is_empty()),
            languages: LanguageFilter::from_values(&args.language),
            sort: args.sort,
            remove_empty_lines: args.remove,
        }
    }
}

/// Runs a parsed command against `dir`. Failures are reported on `out` and
/// never returned, only a broken `out` is.
pub fn run<R, W>(cli: Cli, dir: &Path, input: &mut R, out: &mut W) -> std::io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let result = match cli.command {
        Command::Bundle(args) => run_bundle(BundleOptions::from(args), dir, out),
        Command::CreateRsp => create_response_file(dir, input, out).map(|_| ()),
    };

    match result {
        Ok(()) => Ok(()),
        Err(Error::Prompt(error)) => Err(error),
        Err(err) => {
            debug!(%err, "Command failed");
            report(&err, out)
        }
    }
}

fn run_bundle<W: Write>(options: BundleOptions, dir: &Path, out: &mut W) -> Result<()> {
    let output = options.output_path(dir);
    if output.exists() {
        writeln!(
            out,
            "Warning: The file {} already exists and will be overwritten.",
            output.display()
        )
        .map_err(Error::Prompt)?;
    }

    let reported = match bundle(dir, &options)? {
        BundleOutcome::Written { path, .. } => {
            writeln!(out, "File bundled successfully into {}", path.display())
        }
        BundleOutcome::NoMatchingFiles => writeln!(out, "No matching files found"),
    };
    reported.map_err(Error::Prompt)
}

fn report<W: Write>(err: &Error, out: &mut W) -> std::io::Result<()> {
    match err {
        Error::Io { .. } | Error::Read { .. } => {
            writeln!(out, "{}", capitalize(&err.to_string()))
        }
        _ => writeln!(out, "Error: {err}"),
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
