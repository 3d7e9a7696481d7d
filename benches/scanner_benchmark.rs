use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use patlens::scanner::Scanner;
use patlens::utils::Language;
use std::fs;
use tempfile::TempDir;

// Helper function to create a source tree with various file structures
fn create_test_repo(size: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    match size {
        "small" => {
            // 10 files in simple structure
            fs::create_dir_all(root.join("src")).unwrap();
            for i in 0..5 {
                fs::write(
                    root.join(format!("src/file{}.py", i)),
                    format!("def handler{i}():\n    return {i}\n"),
                )
                .unwrap();
            }
            fs::write(root.join("README.md"), "# Demo Project").unwrap();
            fs::write(root.join("setup.py"), "from setuptools import setup\n").unwrap();
            fs::write(root.join(".gitignore"), "dist/\n*.log").unwrap();
            fs::write(root.join("LICENSE"), "MIT License").unwrap();
            fs::write(root.join("config.env"), "API_URL=http://localhost\n").unwrap();
        }
        "medium" => {
            // ~50 files with nested directories and prunable noise
            fs::create_dir_all(root.join("src/auth")).unwrap();
            fs::create_dir_all(root.join("src/api")).unwrap();
            fs::create_dir_all(root.join("web")).unwrap();
            fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
            fs::create_dir_all(root.join(".git/objects")).unwrap();

            for i in 0..15 {
                fs::write(
                    root.join(format!("src/handler{}.py", i)),
                    format!("def process{i}(data):\n    return data\n"),
                )
                .unwrap();
            }
            for i in 0..10 {
                fs::write(
                    root.join(format!("src/auth/auth{}.py", i)),
                    format!("class Auth{i}:\n    pass\n"),
                )
                .unwrap();
            }
            for i in 0..10 {
                fs::write(
                    root.join(format!("web/view{}.js", i)),
                    format!("export function render{i}() {{\n  return null;\n}}\n"),
                )
                .unwrap();
            }
            for i in 0..5 {
                fs::write(
                    root.join(format!("src/api/route{}.ts", i)),
                    format!("export const route{i} = '/api/{i}';\n"),
                )
                .unwrap();
            }

            // Noise the walk has to skip
            for i in 0..5 {
                fs::write(
                    root.join(format!("node_modules/pkg/dep{}.js", i)),
                    "module.exports = {};\n",
                )
                .unwrap();
            }
            fs::write(root.join(".git/objects/pack"), "binary\n").unwrap();
            fs::write(root.join("logo.png"), [0x89u8, 0x50, 0x4e, 0x47]).unwrap();

            fs::write(root.join("README.md"), "# Medium Project\n").unwrap();
        }
        "large" => {
            // ~300 files with deep nesting
            for module in 0..10 {
                fs::create_dir_all(root.join(format!("src/module{module}"))).unwrap();
                for i in 0..20 {
                    fs::write(
                        root.join(format!("src/module{module}/file{i}.py")),
                        format!("def fn_{module}_{i}(value):\n    return value * {i}\n"),
                    )
                    .unwrap();
                }
            }
            fs::create_dir_all(root.join("web/components")).unwrap();
            for i in 0..50 {
                fs::write(
                    root.join(format!("web/components/component{i}.tsx")),
                    format!("export const Component{i} = () => null;\n"),
                )
                .unwrap();
            }
            fs::create_dir_all(root.join("vendor/lib")).unwrap();
            for i in 0..50 {
                fs::write(
                    root.join(format!("vendor/lib/vendored{i}.js")),
                    "module.exports = {};\n",
                )
                .unwrap();
            }
            fs::write(root.join("README.md"), "# Large Project\n").unwrap();
        }
        _ => panic!("Unknown size: {}", size),
    }

    temp_dir
}

fn benchmark_candidate_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("candidate_selection");

    for size in &["small", "medium", "large"] {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let temp_dir = create_test_repo(size);
            let scanner = Scanner::new(temp_dir.path().to_path_buf());

            b.iter(|| {
                let files = scanner.candidate_files().unwrap();
                black_box(files);
            });
        });
    }

    group.finish();
}

fn benchmark_candidate_selection_with_exclude(c: &mut Criterion) {
    let mut group = c.benchmark_group("candidate_selection_with_exclude");

    for size in &["small", "medium", "large"] {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let temp_dir = create_test_repo(size);
            let scanner = Scanner::new(temp_dir.path().to_path_buf())
                .with_exclude(Some(r"^src/auth/"))
                .unwrap();

            b.iter(|| {
                let files = scanner.candidate_files().unwrap();
                black_box(files);
            });
        });
    }

    group.finish();
}

fn benchmark_candidate_selection_with_language(c: &mut Criterion) {
    let mut group = c.benchmark_group("candidate_selection_with_language");

    for size in &["small", "medium", "large"] {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let temp_dir = create_test_repo(size);
            let scanner =
                Scanner::new(temp_dir.path().to_path_buf()).with_language(Some(Language::Python));

            b.iter(|| {
                let files = scanner.candidate_files().unwrap();
                black_box(files);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_candidate_selection,
    benchmark_candidate_selection_with_exclude,
    benchmark_candidate_selection_with_language,
);
criterion_main!(benches);
