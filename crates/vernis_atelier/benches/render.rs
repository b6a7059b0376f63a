//! Benchmarks for variant resolution and wrapper rendering.
//!
//! Run with: cargo bench -p vernis_atelier

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use vernis_atelier::components::{Button, ButtonSize, ButtonVariant, BUTTON_TABLE};
use vernis_atelier::{
    sanitize, ComponentKind, FooterLayout, HeroLayout, LandingPage, NavLayout, PageContent,
};
use vernis_relief::{render_to_string, Props};
use vernis_tint::{resolve_class, VariantConfig};

// =============================================================================
// Test Data
// =============================================================================

fn noisy_props() -> Props {
    Props::new()
        .with("id", "save")
        .with("loading", true)
        .with("open", false)
        .with("disabled", true)
        .with("aria-label", "Save changes")
        .with("dot", true)
        .with("data-testid", "save-button")
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let combos = ButtonVariant::ALL.len() * ButtonSize::ALL.len();
    group.throughput(Throughput::Elements(combos as u64));

    group.bench_function("button_all_combinations", |b| {
        b.iter(|| {
            for variant in ButtonVariant::ALL {
                for size in ButtonSize::ALL {
                    let config = VariantConfig::new()
                        .with("variant", variant.as_str())
                        .with("size", size.as_str())
                        .modifier("loading", true);
                    black_box(resolve_class(&BUTTON_TABLE, &config, Some("w-full")));
                }
            }
        })
    });

    group.finish();
}

fn bench_sanitize(c: &mut Criterion) {
    let props = noisy_props();
    c.bench_function("sanitize/noisy_props", |b| {
        b.iter(|| black_box(sanitize(black_box(&props))))
    });
}

fn bench_render_button(c: &mut Criterion) {
    c.bench_function("render/button", |b| {
        b.iter(|| {
            let button = Button::new()
                .variant(ButtonVariant::Destructive)
                .size(ButtonSize::Lg)
                .loading(true)
                .child("Delete");
            black_box(render_to_string(&button.into_node()))
        })
    });
}

fn bench_render_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Elements(ComponentKind::ALL.len() as u64));
    let props = Props::new().with("open", true);

    group.bench_function("every_component", |b| {
        b.iter(|| {
            for kind in ComponentKind::ALL {
                black_box(render_to_string(&kind.build(&props, Some("Hello"))));
            }
        })
    });

    group.finish();
}

fn bench_render_page(c: &mut Criterion) {
    let content = PageContent::default();
    let mut keys = Vec::new();
    for nav in NavLayout::ALL {
        for hero in HeroLayout::ALL {
            keys.push((*nav, *hero));
        }
    }

    let mut group = c.benchmark_group("page");
    group.throughput(Throughput::Elements(keys.len() as u64));
    group.bench_function("layout_matrix", |b| {
        b.iter(|| {
            for (nav, hero) in &keys {
                let page = LandingPage {
                    nav: *nav,
                    hero: *hero,
                    footer: FooterLayout::Columns,
                    content: content.clone(),
                };
                black_box(render_to_string(&page.into_node()));
            }
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_resolve,
    bench_sanitize,
    bench_render_button,
    bench_render_registry,
    bench_render_page,
);
criterion_main!(benches);
