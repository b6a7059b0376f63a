//! Variant resolution.

use crate::{merge::ClassList, VariantConfig, VariantTable};
use vernis_carton::SmallVec;

/// Where a resolved fragment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartSource {
    Base,
    /// Effective (default-resolved) value of an axis
    Axis {
        axis: &'static str,
        value: &'static str,
    },
    Modifier(&'static str),
    /// Index into [`VariantTable::compounds`]
    Compound(usize),
}

/// One fragment of a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPart {
    pub source: PartSource,
    pub fragment: &'static str,
}

/// Ordered fragments produced by [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    parts: SmallVec<[ResolvedPart; 8]>,
}

impl Resolution {
    /// All parts, in emission order.
    #[inline]
    pub fn parts(&self) -> &[ResolvedPart] {
        &self.parts
    }

    /// Effective value of an axis.
    pub fn axis_value(&self, axis: &str) -> Option<&'static str> {
        self.parts.iter().find_map(|part| match part.source {
            PartSource::Axis { axis: a, value } if a == axis => Some(value),
            _ => None,
        })
    }

    /// Fragments contributed by one axis. Always exactly one for a declared axis.
    pub fn axis_fragments<'s>(&'s self, axis: &'s str) -> impl Iterator<Item = &'static str> + 's {
        self.parts.iter().filter_map(move |part| match part.source {
            PartSource::Axis { axis: a, .. } if a == axis => Some(part.fragment),
            _ => None,
        })
    }

    /// Whether a modifier contributed a fragment.
    pub fn has_modifier(&self, name: &str) -> bool {
        self.parts
            .iter()
            .any(|part| matches!(part.source, PartSource::Modifier(m) if m == name))
    }

    /// Join fragments into a class string.
    pub fn to_class(&self) -> String {
        let mut list = ClassList::new();
        for part in &self.parts {
            list.push(part.fragment);
        }
        list.finish()
    }
}

/// Resolve a configuration against a table.
///
/// Never fails: absent and unknown axis values use the axis default, unknown
/// modifiers are ignored.
pub fn resolve(table: &VariantTable, config: &VariantConfig<'_>) -> Resolution {
    let mut parts = SmallVec::new();

    if !table.base.is_empty() {
        parts.push(ResolvedPart {
            source: PartSource::Base,
            fragment: table.base,
        });
    }

    for axis in table.axes {
        let requested = config.value(axis.name);
        let (value, fragment) = match requested.and_then(|v| axis.value(v).zip(axis.fragment(v))) {
            Some(found) => found,
            None => {
                if let Some(unknown) = requested {
                    tracing::trace!(
                        table = table.name,
                        axis = axis.name,
                        value = unknown,
                        "unknown variant value, using default"
                    );
                }
                (axis.default, axis.default_fragment())
            }
        };
        parts.push(ResolvedPart {
            source: PartSource::Axis {
                axis: axis.name,
                value,
            },
            fragment,
        });
    }

    for modifier in table.modifiers {
        if config.is_on(modifier.name) {
            parts.push(ResolvedPart {
                source: PartSource::Modifier(modifier.name),
                fragment: modifier.fragment,
            });
        }
    }

    for name in config.modifiers() {
        if table.modifier(name).is_none() {
            tracing::trace!(table = table.name, modifier = name, "unknown modifier ignored");
        }
    }

    let resolution = Resolution { parts };
    let mut compounds = SmallVec::<[ResolvedPart; 2]>::new();
    for (index, compound) in table.compounds.iter().enumerate() {
        let axes_hold = compound
            .when
            .iter()
            .all(|(axis, value)| resolution.axis_value(axis) == Some(*value));
        let modifiers_hold = compound.modifiers.iter().all(|m| config.is_on(m));
        if axes_hold && modifiers_hold {
            compounds.push(ResolvedPart {
                source: PartSource::Compound(index),
                fragment: compound.fragment,
            });
        }
    }

    let mut parts = resolution.parts;
    parts.extend(compounds);
    Resolution { parts }
}

/// Resolve and join, appending a caller-supplied class last.
pub fn resolve_class(table: &VariantTable, config: &VariantConfig<'_>, extra: Option<&str>) -> String {
    let resolution = resolve(table, config);
    match extra {
        Some(extra) if !extra.trim().is_empty() => {
            let mut list = ClassList::new();
            for part in resolution.parts() {
                list.push(part.fragment);
            }
            list.push(extra);
            list.finish()
        }
        _ => resolution.to_class(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Axis, CompoundVariant, Modifier};

    static BUTTON: VariantTable = VariantTable {
        name: "button",
        base: "btn",
        axes: &[
            Axis {
                name: "variant",
                default: "default",
                values: &[
                    ("default", "bg-primary"),
                    ("destructive", "bg-destructive"),
                    ("ghost", "hover:bg-accent"),
                ],
            },
            Axis {
                name: "size",
                default: "default",
                values: &[("default", "h-10"), ("sm", "h-9"), ("lg", "h-11")],
            },
        ],
        modifiers: &[
            Modifier {
                name: "loading",
                fragment: "cursor-wait",
            },
            Modifier {
                name: "disabled",
                fragment: "opacity-50",
            },
        ],
        compounds: &[CompoundVariant {
            when: &[("variant", "ghost"), ("size", "sm")],
            modifiers: &[],
            fragment: "px-2",
        }],
    };

    #[test]
    fn test_every_combination_has_one_fragment_per_axis() {
        let variants = BUTTON.axis("variant").unwrap();
        let sizes = BUTTON.axis("size").unwrap();
        for v in variants.value_names() {
            for s in sizes.value_names() {
                let config = VariantConfig::new().with("variant", v).with("size", s);
                let resolution = resolve(&BUTTON, &config);
                let vf: Vec<_> = resolution.axis_fragments("variant").collect();
                let sf: Vec<_> = resolution.axis_fragments("size").collect();
                assert_eq!(vf, vec![variants.fragment(v).unwrap()]);
                assert_eq!(sf, vec![sizes.fragment(s).unwrap()]);
            }
        }
    }

    #[test]
    fn test_unknown_equals_omitted() {
        let omitted = resolve_class(&BUTTON, &VariantConfig::new(), None);
        for bogus in ["", "DESTRUCTIVE", "primary", "xl"] {
            let config = VariantConfig::new().with("variant", bogus).with("size", bogus);
            assert_eq!(resolve_class(&BUTTON, &config, None), omitted);
        }
        assert_eq!(omitted, "btn bg-primary h-10");
    }

    #[test]
    fn test_modifier_declaration_order() {
        let a = VariantConfig::new()
            .modifier("disabled", true)
            .modifier("loading", true);
        let b = VariantConfig::new()
            .modifier("loading", true)
            .modifier("disabled", true);
        let expected = "btn bg-primary h-10 cursor-wait opacity-50";
        assert_eq!(resolve_class(&BUTTON, &a, None), expected);
        assert_eq!(resolve_class(&BUTTON, &b, None), expected);
    }

    #[test]
    fn test_unknown_modifier_ignored() {
        let config = VariantConfig::new().modifier("sparkle", true);
        assert_eq!(resolve_class(&BUTTON, &config, None), "btn bg-primary h-10");
    }

    #[test]
    fn test_compound_variant() {
        let config = VariantConfig::new().with("variant", "ghost").with("size", "sm");
        let resolution = resolve(&BUTTON, &config);
        assert_eq!(
            resolution.parts().last().map(|p| p.source),
            Some(PartSource::Compound(0))
        );
        insta::assert_snapshot!(resolution.to_class(), @"btn hover:bg-accent h-9 px-2");
    }

    #[test]
    fn test_extra_class_last() {
        let config = VariantConfig::new().with("size", "lg");
        assert_eq!(
            resolve_class(&BUTTON, &config, Some("w-full btn")),
            "btn bg-primary h-11 w-full"
        );
        assert_eq!(resolve_class(&BUTTON, &config, Some("  ")), "btn bg-primary h-11");
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let config = VariantConfig::new()
            .with("variant", "destructive")
            .modifier("loading", true);
        assert_eq!(resolve(&BUTTON, &config), resolve(&BUTTON, &config));
        assert!(resolve(&BUTTON, &config).has_modifier("loading"));
        assert_eq!(
            resolve(&BUTTON, &config).axis_value("variant"),
            Some("destructive")
        );
    }
}
