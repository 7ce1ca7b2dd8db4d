//! Benchmarks for phpgen rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks render synthetic classes of increasing size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use phpgen::{
    doc_comment, function_call, indent, lines, statement, Code, Document,
    FullyQualified, Group, NamespaceName,
};

/// Builds a class body with the given number of methods.
fn build_class(document: &Document, method_count: usize) -> Code<'_> {
    Code::lazy(move || {
        let methods: Vec<Code> = (0..method_count)
            .map(|i| {
                let dependency = document.import(
                    FullyQualified::new(&format!("App\\Domain\\Module{}\\Service{}", i % 7, i))
                        .unwrap(),
                );
                let merge = function_call("array_merge", ["$this->state", "$service->run()"]);
                lines![
                    doc_comment(format!("Handles step {}.", i)),
                    format!("public function step{}({} $service): array", i, dependency),
                    "{",
                    Group::indent(1, statement(merge)),
                    "}",
                    "",
                ]
            })
            .collect();

        lines![
            "final class Pipeline",
            "{",
            indent(lines![statement("private array $state = []"), "", methods]),
            "}",
        ]
    })
}

/// Benchmark full file rendering at various sizes.
fn bench_render_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_file");

    for method_count in [1, 10, 100].iter() {
        group.bench_function(format!("{}_methods", method_count), |b| {
            b.iter(|| {
                let document = Document::new()
                    .with_namespace(NamespaceName::new("App\\Generated").unwrap());
                let code = build_class(&document, black_box(*method_count));
                document.render_file(code)
            });
        });
    }

    group.finish();
}

/// Benchmark import registration with many conflicting names.
fn bench_import_conflicts(c: &mut Criterion) {
    let paths: Vec<FullyQualified> = (0..200)
        .map(|i| FullyQualified::new(&format!("Vendor{}\\Model", i)).unwrap())
        .collect();

    c.bench_function("import_conflicts", |b| {
        b.iter(|| {
            let document = Document::new();
            for path in &paths {
                document.import(black_box(path.clone()));
            }
            document.declarations()
        });
    });
}

criterion_group!(benches, bench_render_file, bench_import_conflicts);
criterion_main!(benches);
