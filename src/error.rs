use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The bundle root or the output's parent directory does not exist.
    #[error("file path is invalid: {}", .0.display())]
    InvalidPath(PathBuf),

    /// Only raised for the file being written; read failures are `Read`.
    #[error("no permissions to write {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("error reading file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing to file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from stdin or writing to stdout failed.
    #[error("{0}")]
    Prompt(#[source] io::Error),

    #[error("cannot access the current directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("cannot read response file {}: {source}", path.display())]
    ResponseFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Classifies a failure to create or write `path` by its kind.
    pub fn from_io<P: AsRef<Path>>(path: P, error: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match error.kind() {
            io::ErrorKind::NotFound => Error::InvalidPath(path),
            io::ErrorKind::PermissionDenied => Error::PermissionDenied(path),
            _ => Error::Io {
                path,
                source: error,
            },
        }
    }

    /// Wraps a failure to read `path`, whatever its kind.
    pub fn from_read<P: AsRef<Path>>(path: P, error: io::Error) -> Self {
        Error::Read {
            path: path.as_ref().to_path_buf(),
            source: error,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
