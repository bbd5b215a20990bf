pub mod bundle_files;
pub mod remove_empty_lines;
