use std::ffi::OsString;
use std::fmt::Debug;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, trace};

use crate::error::{Error, Result};

pub const RESPONSE_FILE_NAME: &str = "response.rsp";

/// Answers gathered by `create-rsp`, one per prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFile {
    pub languages: String,
    pub output: String,
    pub include_source: bool,
    pub sort: bool,
    pub remove_empty_lines: bool,
    pub author: Option<String>,
}

impl ResponseFile {
    /// Asks each question on `out` and reads one answer per line from
    /// `input`. Running out of input falls back to the defaults.
    pub fn prompt<R, W>(input: &mut R, out: &mut W) -> Result<Self>
    where
        R: BufRead,
        W: Write,
    {
        let languages = ask(
            input,
            out,
            "Enter the programming languages (comma-separated or 'all'):",
        )?;
        let output = ask(input, out, "Enter the output file name (e.g., bundle.txt):")?;
        let include_source = confirm(input, out, "Include source path in the bundle? (y/n):")?;
        let sort = confirm(input, out, "Sort files by type? (y/n):")?;
        let remove_empty_lines = confirm(input, out, "Remove empty lines? (y/n):")?;
        let author = ask(input, out, "Enter the author name (optional):")?;

        Ok(ResponseFile {
            languages: normalize_languages(languages.as_deref().unwrap_or_default()),
            output: output
                .filter(|output| !output.is_empty())
                .unwrap_or_else(|| "bundle.txt".to_string()),
            include_source,
            sort,
            remove_empty_lines,
            author: author.filter(|author| !author.is_empty()),
        })
    }

    /// Renders the equivalent `bundle` invocation. Every flag slot keeps its
    /// separating space even when empty.
    pub fn command_line(&self) -> String {
        format!(
            "bundle --language {} --output {} {} {} {} {}",
            self.languages,
            quote_if_spaced(&self.output),
            if self.include_source { "-s" } else { "" },
            if self.sort { "--sort" } else { "" },
            if self.remove_empty_lines { "--remove" } else { "" },
            self.author
                .as_deref()
                .map(|author| format!("--author \"{author}\""))
                .unwrap_or_default(),
        )
    }
}

/// Runs the interactive prompts and writes the resulting command line into
/// `dir`, returning the path of the written file.
#[instrument(level = "debug", skip(input, out))]
pub fn create_response_file<P, R, W>(dir: P, input: &mut R, out: &mut W) -> Result<PathBuf>
where
    P: AsRef<Path> + Debug,
    R: BufRead,
    W: Write,
{
    let response = ResponseFile::prompt(input, out)?;
    let path = dir.as_ref().join(RESPONSE_FILE_NAME);
    let command_line = response.command_line();
    debug!(?path, command_line, "Writing response file");
    fs::write(&path, command_line).map_err(|error| Error::from_io(&path, error))?;

    writeln!(out, "Response file '{RESPONSE_FILE_NAME}' created successfully!")
        .map_err(Error::Prompt)?;
    writeln!(
        out,
        "To use it, run: {} @{RESPONSE_FILE_NAME}",
        env!("CARGO_PKG_NAME")
    )
    .map_err(Error::Prompt)?;
    Ok(path)
}

/// Replaces every `@file` argument after the program name with the tokens
/// stored in that file.
pub fn expand_args<I, T>(args: I) -> Result<Vec<OsString>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut expanded = Vec::new();
    for (index, arg) in args.into_iter().enumerate() {
        let arg = arg.into();
        match arg.to_str().and_then(|arg| arg.strip_prefix('@')) {
            Some(path) if index > 0 && !path.is_empty() => {
                let content = fs::read_to_string(path).map_err(|source| Error::ResponseFile {
                    path: PathBuf::from(path),
                    source,
                })?;
                let tokens = tokenize(&content);
                trace!(path, ?tokens, "Expanded response file");
                expanded.extend(tokens.into_iter().map(OsString::from));
            }
            _ => expanded.push(arg),
        }
    }
    Ok(expanded)
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<Option<String>> {
    writeln!(out, "{question}").map_err(Error::Prompt)?;
    out.flush().map_err(Error::Prompt)?;

    let mut answer = String::new();
    if input.read_line(&mut answer).map_err(Error::Prompt)? == 0 {
        return Ok(None);
    }
    Ok(Some(answer.trim().to_string()))
}

fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<bool> {
    Ok(ask(input, out, question)?.is_some_and(|answer| answer.eq_ignore_ascii_case("y")))
}

fn normalize_languages(answer: &str) -> String {
    let languages: Vec<&str> = answer
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|language| !language.is_empty())
        .collect();
    if languages.is_empty()
        || languages
            .iter()
            .any(|language| language.eq_ignore_ascii_case("all"))
    {
        "all".to_string()
    } else {
        languages.join(" ")
    }
}

fn quote_if_spaced(value: &str) -> String {
    if value.contains(char::is_whitespace) {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

// Whitespace separates tokens, double quotes group them, `#` lines are comments.
fn tokenize(content: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for line in content.lines().filter(|line| !line.trim_start().starts_with('#')) {
        let mut current = String::new();
        let mut in_token = false;
        let mut quoted = false;
        for c in line.chars() {
            match c {
                '"' => {
                    quoted = !quoted;
                    in_token = true;
                }
                c if c.is_whitespace() && !quoted => {
                    if in_token {
                        tokens.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                }
                c => {
                    current.push(c);
                    in_token = true;
                }
            }
        }
        if in_token {
            tokens.push(current);
        }
    }
    tokens
}
