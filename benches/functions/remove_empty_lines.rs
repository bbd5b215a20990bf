use std::path::{Path, PathBuf};

use criterion::{BenchmarkId, Criterion, Throughput};

use codebundle::{write_bundle, BundleOptions, LanguageFilter};

fn generate_file(size: usize) -> tempfile::NamedTempFile {
    let base = "let line = 1;\n\n    \n";
    let mut content = String::with_capacity(size);
    while content.len() < size {
        content.push_str(base);
    }
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), content).unwrap();
    file
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_empty_lines");

    for (name, size) in [("small", 1_000), ("medium", 100_000), ("large", 1_000_000)] {
        let file = generate_file(size);
        let files = [file.path().to_path_buf()];
        group.throughput(Throughput::Bytes(size as u64));

        for remove_empty_lines in [false, true] {
            let options = BundleOptions {
                output: PathBuf::from("unused"),
                include_source: false,
                author: None,
                languages: LanguageFilter::All,
                sort: false,
                remove_empty_lines,
            };
            let id = if remove_empty_lines { "remove" } else { "keep" };
            group.bench_with_input(BenchmarkId::new(id, name), &files, |b, files| {
                b.iter(|| {
                    let mut out = Vec::with_capacity(size);
                    let root = Path::new(".");
                    write_bundle(&mut out, &options.output, root, files, &options).unwrap();
                    out
                })
            });
        }
    }

    group.finish();
}
