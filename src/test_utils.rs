use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

use crate::options::{BundleOptions, LanguageFilter};

/// Scratch directory for a single test, with tracing routed to the test
/// output.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        TestContext {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).unwrap()
    }
}

pub fn bundle_options(languages: LanguageFilter) -> BundleOptions {
    BundleOptions {
        output: PathBuf::from("out.txt"),
        include_source: false,
        author: None,
        languages,
        sort: false,
        remove_empty_lines: false,
    }
}
