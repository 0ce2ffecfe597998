//! Benchmarks for navigation building.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use vdocs_nav::{SiteNavigation, derive_title};
use vdocs_store::{Document, DocumentStore, Metadata};

const DOC_PREFIXES: [&str; 8] = [
    "start-", "core-", "native-", "advanced-", "performance-", "workflow-", "help-", "zzz-",
];

/// Create a store with `count` documents spread across all trees.
fn create_store(count: usize) -> DocumentStore {
    DocumentStore::from_documents((0..count).map(|i| {
        let slug = match i % 3 {
            0 => format!("docs/{}page-{i}", DOC_PREFIXES[i % DOC_PREFIXES.len()]),
            1 => format!("api/api-section-{}", i % 10),
            _ => format!("codelabs/lab_{}/{}-step", i % 4, i),
        };
        Document::new(slug, Metadata::new(), "")
    }))
}

fn bench_site_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("site_navigation");

    for count in [100, 1_000, 10_000] {
        let store = create_store(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &store, |b, store| {
            b.iter(|| SiteNavigation::build(store));
        });
    }

    group.finish();
}

fn bench_derive_title(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_title");

    group.bench_function("semantic_prefix", |b| {
        b.iter(|| derive_title("client-libraries-getting-set-up"));
    });

    group.bench_function("numeric_prefix", |b| {
        b.iter(|| derive_title("42-advanced-networking"));
    });

    group.finish();
}

criterion_group!(benches, bench_site_navigation, bench_derive_title);
criterion_main!(benches);
