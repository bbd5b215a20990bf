use std::path::{Path, PathBuf};

/// Selects which files take part in a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageFilter {
    All,
    Extensions(Vec<String>),
}

impl LanguageFilter {
    /// Builds a filter from the raw `--language` values.
    ///
    /// `all` in any position (any case) selects every file. Leading dots are
    /// stripped so `.rs` and `rs` mean the same thing.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut extensions = Vec::new();
        for value in values {
            let value = value.as_ref().trim();
            if value.eq_ignore_ascii_case("all") {
                return LanguageFilter::All;
            }
            let extension = value.trim_start_matches('.');
            if !extension.is_empty() {
                extensions.push(extension.to_lowercase());
            }
        }
        LanguageFilter::Extensions(extensions)
    }

    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            LanguageFilter::All => true,
            LanguageFilter::Extensions(extensions) => {
                let file_name = file_name.to_lowercase();
                extensions
                    .iter()
                    .any(|extension| file_name.ends_with(&format!(".{extension}")))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct BundleOptions {
    pub output: PathBuf,
    pub include_source: bool,
    pub author: Option<String>,
    pub languages: LanguageFilter,
    pub sort: bool,
    pub remove_empty_lines: bool,
}

impl BundleOptions {
    /// Resolves the output against `root` when it is relative.
    pub fn output_path(&self, root: &Path) -> PathBuf {
        let path = if self.output.is_absolute() {
            self.output.clone()
        } else {
            root.join(&self.output)
        };
        path.canonicalize().unwrap_or(path)
    }
}
