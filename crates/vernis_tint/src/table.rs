//! Static variant tables.

use vernis_carton::FxHashSet;

/// A style axis: a closed set of values, each mapped to one class fragment.
#[derive(Debug, Clone, Copy)]
pub struct Axis {
    /// Axis name (`variant`, `size`, ...)
    pub name: &'static str,
    /// Value used when the configuration omits the axis or names an unknown value
    pub default: &'static str,
    /// `(value, fragment)` pairs
    pub values: &'static [(&'static str, &'static str)],
}

/// A boolean modifier, emitted when enabled.
#[derive(Debug, Clone, Copy)]
pub struct Modifier {
    pub name: &'static str,
    pub fragment: &'static str,
}

/// Extra fragment emitted when a combination of axis values and modifiers holds.
///
/// Conditions are evaluated against the effective (default-resolved) values.
#[derive(Debug, Clone, Copy)]
pub struct CompoundVariant {
    /// `(axis, value)` conditions; all must hold
    pub when: &'static [(&'static str, &'static str)],
    /// Modifiers that must be enabled
    pub modifiers: &'static [&'static str],
    pub fragment: &'static str,
}

/// Mapping from axis name to value to class fragment, plus modifiers.
#[derive(Debug, Clone, Copy)]
pub struct VariantTable {
    /// Table name, used in diagnostics
    pub name: &'static str,
    /// Always emitted first
    pub base: &'static str,
    pub axes: &'static [Axis],
    /// Emitted in declaration order, so later rules override earlier ones
    pub modifiers: &'static [Modifier],
    pub compounds: &'static [CompoundVariant],
}

/// Structural problem in a [`VariantTable`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("table '{table}': default '{default}' of axis '{axis}' is not one of its values")]
    DefaultMissing {
        table: &'static str,
        axis: &'static str,
        default: &'static str,
    },

    #[error("table '{table}': axis '{axis}' is declared twice")]
    DuplicateAxis {
        table: &'static str,
        axis: &'static str,
    },

    #[error("table '{table}': axis '{axis}' declares value '{value}' twice")]
    DuplicateValue {
        table: &'static str,
        axis: &'static str,
        value: &'static str,
    },

    #[error("table '{table}': axis '{axis}' has no values")]
    EmptyAxis {
        table: &'static str,
        axis: &'static str,
    },

    #[error("table '{table}': modifier '{modifier}' is declared twice or shadows an axis")]
    DuplicateModifier {
        table: &'static str,
        modifier: &'static str,
    },

    #[error("table '{table}': compound variant #{index} references unknown '{name}'")]
    UnknownCompoundReference {
        table: &'static str,
        index: usize,
        name: &'static str,
    },
}

impl Axis {
    /// Look up the fragment for a value.
    #[inline]
    pub fn fragment(&self, value: &str) -> Option<&'static str> {
        self.values
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, fragment)| *fragment)
    }

    /// Look up the canonical `'static` spelling of a value.
    #[inline]
    pub fn value(&self, value: &str) -> Option<&'static str> {
        self.values.iter().find(|(v, _)| *v == value).map(|(v, _)| *v)
    }

    /// Fragment of the default value. Empty if the table is malformed.
    #[inline]
    pub fn default_fragment(&self) -> &'static str {
        self.fragment(self.default).unwrap_or("")
    }

    /// All declared values, in order.
    pub fn value_names(&self) -> impl Iterator<Item = &'static str> {
        self.values.iter().map(|(v, _)| *v)
    }
}

impl VariantTable {
    /// Find an axis by name.
    #[inline]
    pub fn axis(&self, name: &str) -> Option<&Axis> {
        self.axes.iter().find(|a| a.name == name)
    }

    /// Find a modifier by name.
    #[inline]
    pub fn modifier(&self, name: &str) -> Option<&Modifier> {
        self.modifiers.iter().find(|m| m.name == name)
    }

    /// Fragment for `(axis, value)`, if both exist.
    pub fn fragment(&self, axis: &str, value: &str) -> Option<&'static str> {
        self.axis(axis).and_then(|a| a.fragment(value))
    }

    /// Check the table's structural invariants.
    ///
    /// Resolution never calls this; every shipped table is checked by tests.
    pub fn validate(&self) -> Result<(), TableError> {
        let table = self.name;
        let mut axis_names = FxHashSet::default();

        for axis in self.axes {
            if !axis_names.insert(axis.name) {
                return Err(TableError::DuplicateAxis {
                    table,
                    axis: axis.name,
                });
            }
            if axis.values.is_empty() {
                return Err(TableError::EmptyAxis {
                    table,
                    axis: axis.name,
                });
            }

            let mut values = FxHashSet::default();
            for &(value, _) in axis.values {
                if !values.insert(value) {
                    return Err(TableError::DuplicateValue {
                        table,
                        axis: axis.name,
                        value,
                    });
                }
            }

            if axis.fragment(axis.default).is_none() {
                return Err(TableError::DefaultMissing {
                    table,
                    axis: axis.name,
                    default: axis.default,
                });
            }
        }

        let mut modifier_names = FxHashSet::default();
        for modifier in self.modifiers {
            if axis_names.contains(modifier.name) || !modifier_names.insert(modifier.name) {
                return Err(TableError::DuplicateModifier {
                    table,
                    modifier: modifier.name,
                });
            }
        }

        for (index, compound) in self.compounds.iter().enumerate() {
            for &(axis, value) in compound.when {
                match self.axis(axis) {
                    None => {
                        return Err(TableError::UnknownCompoundReference {
                            table,
                            index,
                            name: axis,
                        })
                    }
                    Some(a) if a.fragment(value).is_none() => {
                        return Err(TableError::UnknownCompoundReference {
                            table,
                            index,
                            name: value,
                        })
                    }
                    Some(_) => {}
                }
            }
            for &name in compound.modifiers {
                if !modifier_names.contains(name) {
                    return Err(TableError::UnknownCompoundReference {
                        table,
                        index,
                        name,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static GOOD: VariantTable = VariantTable {
        name: "good",
        base: "base",
        axes: &[
            Axis {
                name: "variant",
                default: "default",
                values: &[("default", "v-default"), ("ghost", "v-ghost")],
            },
            Axis {
                name: "size",
                default: "md",
                values: &[("sm", "s-sm"), ("md", "s-md")],
            },
        ],
        modifiers: &[Modifier {
            name: "loading",
            fragment: "is-loading",
        }],
        compounds: &[CompoundVariant {
            when: &[("variant", "ghost")],
            modifiers: &["loading"],
            fragment: "ghost-loading",
        }],
    };

    #[test]
    fn test_valid_table() {
        assert_eq!(GOOD.validate(), Ok(()));
        assert_eq!(GOOD.fragment("size", "sm"), Some("s-sm"));
        assert_eq!(GOOD.fragment("size", "xl"), None);
        assert_eq!(GOOD.axis("size").map(|a| a.default_fragment()), Some("s-md"));
    }

    #[test]
    fn test_default_missing() {
        static BAD: VariantTable = VariantTable {
            name: "bad",
            base: "",
            axes: &[Axis {
                name: "size",
                default: "md",
                values: &[("sm", "s-sm")],
            }],
            modifiers: &[],
            compounds: &[],
        };
        assert!(matches!(
            BAD.validate(),
            Err(TableError::DefaultMissing { axis: "size", .. })
        ));
    }

    #[test]
    fn test_duplicate_value() {
        static BAD: VariantTable = VariantTable {
            name: "bad",
            base: "",
            axes: &[Axis {
                name: "size",
                default: "sm",
                values: &[("sm", "a"), ("sm", "b")],
            }],
            modifiers: &[],
            compounds: &[],
        };
        assert!(matches!(
            BAD.validate(),
            Err(TableError::DuplicateValue { value: "sm", .. })
        ));
    }

    #[test]
    fn test_modifier_shadows_axis() {
        static BAD: VariantTable = VariantTable {
            name: "bad",
            base: "",
            axes: &[Axis {
                name: "size",
                default: "sm",
                values: &[("sm", "a")],
            }],
            modifiers: &[Modifier {
                name: "size",
                fragment: "x",
            }],
            compounds: &[],
        };
        assert!(matches!(
            BAD.validate(),
            Err(TableError::DuplicateModifier { modifier: "size", .. })
        ));
    }

    #[test]
    fn test_unknown_compound_reference() {
        static BAD: VariantTable = VariantTable {
            name: "bad",
            base: "",
            axes: &[Axis {
                name: "size",
                default: "sm",
                values: &[("sm", "a")],
            }],
            modifiers: &[],
            compounds: &[CompoundVariant {
                when: &[("size", "xl")],
                modifiers: &[],
                fragment: "never",
            }],
        };
        let err = BAD.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "table 'bad': compound variant #0 references unknown 'xl'"
        );
    }
}
