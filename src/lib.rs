pub use cli::{run, BundleArgs, Cli, Command};
pub use collector::{sort_files, Collector, EXCLUDED_FOLDERS};
pub use error::{Error, Result};
pub use options::{BundleOptions, LanguageFilter};
pub use rsp::{create_response_file, expand_args, ResponseFile, RESPONSE_FILE_NAME};
pub use writer::{bundle, write_bundle, BundleOutcome};

mod cli;
mod collector;
mod error;
mod options;
mod rsp;
#[cfg(test)]
mod test_utils;
mod writer;
