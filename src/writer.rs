use std::fmt::Debug;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, trace};

use crate::collector::{file_name, Collector};
use crate::error::{Error, Result};
use crate::options::BundleOptions;

#[derive(Debug, PartialEq, Eq)]
pub enum BundleOutcome {
    Written { path: PathBuf, file_count: usize },
    /// Nothing matched; the output was left untouched.
    NoMatchingFiles,
}

/// Collects the files under `root` and writes them into the configured
/// output, truncating it first.
#[instrument(level = "debug", skip(options))]
pub fn bundle<P>(root: P, options: &BundleOptions) -> Result<BundleOutcome>
where
    P: AsRef<Path> + Debug,
{
    let root = root.as_ref();
    let files = Collector::new(options).collect(root)?;
    if files.is_empty() {
        debug!("No matching files, output not written");
        return Ok(BundleOutcome::NoMatchingFiles);
    }

    let root = root
        .canonicalize()
        .map_err(|error| Error::from_read(root, error))?;
    let output = options.output_path(&root);

    let file = File::create(&output).map_err(|error| Error::from_io(&output, error))?;
    let mut out = BufWriter::new(file);
    write_bundle(&mut out, &output, &root, &files, options)?;
    out.flush().map_err(|error| Error::from_io(&output, error))?;

    debug!(?output, file_count = files.len(), "Bundle written");
    Ok(BundleOutcome::Written {
        path: output,
        file_count: files.len(),
    })
}

/// Writes the annotations followed by one section per file. Failures on
/// `out` are attributed to `output`, read failures to the source file.
pub fn write_bundle<W: Write>(
    out: &mut W,
    output: &Path,
    root: &Path,
    files: &[PathBuf],
    options: &BundleOptions,
) -> Result<()> {
    write_header(out, root, options).map_err(|error| Error::from_io(output, error))?;

    for path in files {
        let bytes = fs::read(path).map_err(|error| Error::from_read(path, error))?;
        let content = String::from_utf8_lossy(&bytes);
        trace!(?path, len = bytes.len(), "Appending file");
        write_section(out, &file_name(path), &content, options.remove_empty_lines)
            .map_err(|error| Error::from_io(output, error))?;
    }
    Ok(())
}

fn write_header<W: Write>(out: &mut W, root: &Path, options: &BundleOptions) -> io::Result<()> {
    if let Some(author) = &options.author {
        writeln!(out, "author folder: {author}")?;
    }
    if options.include_source {
        writeln!(out, "Source folder: {}", root.display())?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_section<W: Write>(
    out: &mut W,
    name: &str,
    content: &str,
    remove_empty_lines: bool,
) -> io::Result<()> {
    writeln!(out, "// Source file {name}")?;
    writeln!(out)?;
    for line in content
        .lines()
        .filter(|line| !remove_empty_lines || !line.trim().is_empty())
    {
        writeln!(out, "{line}")?;
    }
    writeln!(out)
}
