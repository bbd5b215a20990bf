use std::fs;
use std::path::{Path, PathBuf};

use criterion::{BenchmarkId, Criterion, Throughput};
use tempfile::TempDir;

use codebundle::{bundle, BundleOptions, BundleOutcome, LanguageFilter};

fn generate_directory(file_count: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    let body = "fn generated() {\n    let value = 42;\n\n    println!(\"{value}\");\n}\n";
    let body = body.repeat(20);
    for index in 0..file_count {
        let extension = ["rs", "toml", "md"][index % 3];
        fs::write(dir.path().join(format!("file_{index}.{extension}")), &body).unwrap();
    }
    dir
}

fn options(sort: bool) -> BundleOptions {
    BundleOptions {
        output: PathBuf::from("bundle.out"),
        include_source: true,
        author: Some("bench".to_string()),
        languages: LanguageFilter::from_values(["rs", "toml"]),
        sort,
        remove_empty_lines: false,
    }
}

fn execute_bundle(root: &Path, options: &BundleOptions) -> usize {
    match bundle(root, options).unwrap() {
        BundleOutcome::Written { file_count, .. } => file_count,
        BundleOutcome::NoMatchingFiles => 0,
    }
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("bundle_files");

    for file_count in [10, 100, 1_000] {
        let dir = generate_directory(file_count);
        let bundled = execute_bundle(dir.path(), &options(false));
        assert!(bundled > 0, "Expected at least one bundled file");

        group.throughput(Throughput::Elements(bundled as u64));
        for sort in [false, true] {
            let options = options(sort);
            let name = if sort { "by_extension" } else { "by_name" };
            group.bench_with_input(BenchmarkId::new(name, file_count), dir.path(), |b, root| {
                b.iter(|| execute_bundle(root, &options))
            });
        }
    }

    group.finish();
}
