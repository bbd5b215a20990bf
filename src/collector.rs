use std::fmt::Debug;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, trace, warn};

use crate::error::{Error, Result};
use crate::options::BundleOptions;

/// Folder names whose direct children never take part in a bundle.
pub const EXCLUDED_FOLDERS: [&str; 7] = [
    "bin",
    "debug",
    "obj",
    "node_modules",
    "config",
    ".git",
    ".vs",
];

#[derive(Debug)]
pub struct Collector<'a> {
    options: &'a BundleOptions,
}

impl<'a> Collector<'a> {
    pub fn new(options: &'a BundleOptions) -> Self {
        Collector { options }
    }

    /// Lists the files directly inside `root` that belong in the bundle,
    /// already ordered for writing.
    #[instrument(level = "debug", skip(self))]
    pub fn collect<P>(&self, root: P) -> Result<Vec<PathBuf>>
    where
        P: AsRef<Path> + Debug,
    {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::InvalidPath(root.to_path_buf()));
        }
        let root = root
            .canonicalize()
            .map_err(|error| Error::from_read(root, error))?;
        let output = self.options.output_path(&root);

        let mut files = Vec::new();
        ignore::WalkBuilder::new(&root)
            .standard_filters(false)
            .follow_links(true)
            .max_depth(Some(1))
            .build()
            .for_each(|entry| match entry {
                Ok(entry) => {
                    let path = entry.path();
                    match entry.file_type() {
                        Some(file_type) if file_type.is_file() => {
                            if path == output.as_path() {
                                trace!(?path, "Skipping bundle output");
                            } else if is_in_excluded_folder(path) {
                                trace!(?path, "Skipping file in excluded folder");
                            } else if !self.options.languages.matches(&file_name(path)) {
                                trace!(
                                    ?path,
                                    extension = ?path.extension(),
                                    "Skipping unmatched language"
                                );
                            } else {
                                trace!(?path, "Collected file");
                                files.push(path.to_path_buf());
                            }
                        }
                        _ => {
                            trace!(?path, "Skipping non-file");
                        }
                    }
                }
                Err(error) => {
                    warn!(%error, "Error reading directory entry");
                }
            });

        sort_files(&mut files, self.options.sort);
        debug!(file_count = files.len(), "Collected files");
        Ok(files)
    }
}

/// Orders by extension then full path when `by_extension` is set, by file
/// name otherwise.
pub fn sort_files(files: &mut [PathBuf], by_extension: bool) {
    if by_extension {
        files.sort_by(|a, b| extension_of(a).cmp(&extension_of(b)).then_with(|| a.cmp(b)));
    } else {
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }
}

pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

// From the last dot of the file name, empty when there is none.
fn extension_of(path: &Path) -> String {
    let name = file_name(path);
    name.rfind('.')
        .map(|dot| name[dot..].to_string())
        .unwrap_or_default()
}

fn is_in_excluded_folder(path: &Path) -> bool {
    path.parent()
        .and_then(Path::file_name)
        .map(|folder| folder.to_string_lossy().to_lowercase())
        .is_some_and(|folder| EXCLUDED_FOLDERS.contains(&folder.as_str()))
}
