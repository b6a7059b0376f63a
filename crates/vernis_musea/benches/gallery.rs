//! Benchmarks for gallery and documentation generation.
//!
//! Run with: cargo bench -p vernis_musea

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use vernis_musea::docs::{generate_catalog, generate_component_doc, CatalogEntry, DocOptions};
use vernis_musea::{builtin_arts, render_gallery, GalleryOptions};

fn bench_builtin_arts(c: &mut Criterion) {
    c.bench_function("builtin_arts", |b| b.iter(|| black_box(builtin_arts())));
}

fn bench_gallery(c: &mut Criterion) {
    let arts = builtin_arts();
    let variants: usize = arts.iter().map(|a| a.variants.len()).sum();

    let mut group = c.benchmark_group("gallery");
    group.throughput(Throughput::Elements(variants as u64));
    group.bench_function("render_all", |b| {
        b.iter(|| black_box(render_gallery(black_box(&arts), &GalleryOptions::default())))
    });
    group.finish();
}

fn bench_docs(c: &mut Criterion) {
    let arts = builtin_arts();
    let options = DocOptions::default();

    let mut group = c.benchmark_group("docs");
    group.throughput(Throughput::Elements(arts.len() as u64));
    group.bench_function("component_docs", |b| {
        b.iter(|| {
            for art in &arts {
                black_box(generate_component_doc(art, &options));
            }
        })
    });
    group.bench_function("catalog", |b| {
        b.iter(|| {
            let entries: Vec<_> = arts.iter().map(|a| CatalogEntry::from_art(a, "")).collect();
            black_box(generate_catalog(&entries, &options))
        })
    });
    group.finish();
}

criterion_group!(benches, bench_builtin_arts, bench_gallery, bench_docs);
criterion_main!(benches);
