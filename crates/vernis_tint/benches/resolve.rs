//! Benchmarks for variant resolution.
//!
//! Run with: cargo bench -p vernis_tint

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vernis_tint::{merge_classes, resolve_class, Axis, CompoundVariant, Modifier, VariantConfig, VariantTable};

static TABLE: VariantTable = VariantTable {
    name: "bench",
    base: "inline-flex items-center justify-center rounded-md text-sm font-medium",
    axes: &[
        Axis {
            name: "variant",
            default: "default",
            values: &[
                ("default", "bg-primary text-primary-foreground hover:bg-primary/90"),
                ("destructive", "bg-destructive text-destructive-foreground"),
                ("outline", "border border-input bg-background"),
                ("secondary", "bg-secondary text-secondary-foreground"),
                ("ghost", "hover:bg-accent hover:text-accent-foreground"),
                ("link", "text-primary underline-offset-4 hover:underline"),
            ],
        },
        Axis {
            name: "size",
            default: "default",
            values: &[
                ("default", "h-10 px-4 py-2"),
                ("sm", "h-9 rounded-md px-3"),
                ("lg", "h-11 rounded-md px-8"),
                ("icon", "h-10 w-10"),
            ],
        },
    ],
    modifiers: &[
        Modifier {
            name: "loading",
            fragment: "cursor-wait opacity-80",
        },
        Modifier {
            name: "disabled",
            fragment: "pointer-events-none opacity-50",
        },
    ],
    compounds: &[CompoundVariant {
        when: &[("variant", "link"), ("size", "sm")],
        modifiers: &[],
        fragment: "px-0",
    }],
};

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    group.bench_function("defaults", |b| {
        b.iter(|| resolve_class(black_box(&TABLE), &VariantConfig::new(), None))
    });

    group.bench_function("full", |b| {
        b.iter(|| {
            let config = VariantConfig::new()
                .with("variant", black_box("destructive"))
                .with("size", black_box("lg"))
                .modifier("loading", true)
                .modifier("disabled", true);
            resolve_class(&TABLE, &config, Some("w-full"))
        })
    });

    group.bench_function("unknown_values", |b| {
        b.iter(|| {
            let config = VariantConfig::new()
                .with("variant", black_box("neon"))
                .with("size", black_box("xxl"));
            resolve_class(&TABLE, &config, None)
        })
    });

    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    c.bench_function("merge_classes", |b| {
        b.iter(|| {
            merge_classes(black_box([
                "flex items-center gap-2",
                "px-4 py-2 flex",
                "",
                "items-center text-sm",
            ]))
        })
    });
}

criterion_group!(benches, bench_resolve, bench_merge);
criterion_main!(benches);
