//! Prop sanitizer.
//!
//! Wrappers consume a handful of presentation-only props (`loading`, `open`,
//! `dot`, ...). Those names are not valid HTML attributes, so they are removed
//! before the remaining props are spread onto the host element.
//!
//! The denylist is a single exported constant. Every wrapper's required
//! pass-through props are checked against it in the tests below.
//!
//! `checked` is stripped everywhere, including on native checkbox and radio
//! inputs that would need it. The [`crate::components::Input`] wrapper logs a
//! warning when that happens.

use vernis_carton::{phf_set, PhfSet};
use vernis_relief::Props;

/// Props consumed by wrappers and never forwarded to the DOM.
///
/// Must never contain `disabled`, `selected`, or any other semantic attribute.
pub static PRESENTATION_ONLY_PROPS: PhfSet<&'static str> = phf_set! {
    "active",
    "hover",
    "focused",
    "pressed",
    "loading",
    "open",
    "error",
    "expanded",
    "checked",
    "indeterminate",
    "dot",
    "removable",
    "asChild",
};

/// Whether a prop name is presentation-only.
#[inline]
pub fn is_presentation_only(name: &str) -> bool {
    PRESENTATION_ONLY_PROPS.contains(name)
}

/// Copy of `props` without presentation-only keys. `props` is not modified.
///
/// Keys are removed whatever their value, `null` included.
pub fn sanitize(props: &Props) -> Props {
    props.filtered(|name, _| !is_presentation_only(name))
}

/// Split `props` into `(presentation_only, pass_through)`.
pub fn partition_props(props: Props) -> (Props, Props) {
    props.partition(is_presentation_only)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::WRAPPER_CONTRACTS;
    use vernis_carton::is_semantic_attr;
    use vernis_relief::PropValue;

    fn sample_bag() -> Props {
        Props::new()
            .with("id", "save")
            .with("loading", true)
            .with("open", PropValue::Null)
            .with("checked", false)
            .with("disabled", true)
            .with("selected", "yes")
            .with("aria-label", "Save")
            .with("hover", 1)
            .with("data-track", "cta")
    }

    #[test]
    fn test_strips_denylisted_regardless_of_value() {
        let clean = sanitize(&sample_bag());
        for key in ["loading", "open", "checked", "hover"] {
            assert!(!clean.contains_key(key), "{key} should be stripped");
        }
        assert_eq!(
            clean.keys().collect::<Vec<_>>(),
            vec!["id", "disabled", "selected", "aria-label", "data-track"]
        );
    }

    #[test]
    fn test_every_denylisted_key_removed() {
        for key in PRESENTATION_ONLY_PROPS.iter() {
            for value in [
                PropValue::Null,
                PropValue::Bool(false),
                PropValue::Bool(true),
                PropValue::from("x"),
                PropValue::from(0),
            ] {
                let props = Props::new().with(*key, value);
                assert!(sanitize(&props).is_empty(), "{key} survived");
            }
        }
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let once = sanitize(&sample_bag());
        assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn test_input_not_mutated() {
        let bag = sample_bag();
        let before = bag.clone();
        let _ = sanitize(&bag);
        assert_eq!(bag, before);
    }

    #[test]
    fn test_disabled_and_selected_survive_unchanged() {
        for value in [
            PropValue::Null,
            PropValue::Bool(true),
            PropValue::Bool(false),
            PropValue::from("disabled"),
            PropValue::from(1),
        ] {
            let props = Props::new()
                .with("disabled", value.clone())
                .with("selected", value.clone());
            let clean = sanitize(&props);
            assert_eq!(clean.get("disabled"), Some(&value));
            assert_eq!(clean.get("selected"), Some(&value));
        }
    }

    #[test]
    fn test_denylist_excludes_semantic_attributes() {
        for key in PRESENTATION_ONLY_PROPS.iter() {
            assert!(!is_semantic_attr(key), "{key} is a semantic attribute");
        }
        assert!(!is_presentation_only("disabled"));
        assert!(!is_presentation_only("selected"));
    }

    #[test]
    fn test_wrapper_pass_through_props_not_denylisted() {
        for contract in WRAPPER_CONTRACTS {
            for prop in contract.pass_through {
                assert!(
                    !is_presentation_only(prop),
                    "{} requires '{}' to reach <{}>, but it is denylisted",
                    contract.display_name,
                    prop,
                    contract.tag
                );
            }
        }
    }

    #[test]
    fn test_checked_stripped_even_for_form_controls() {
        let props = Props::new().with("type", "checkbox").with("checked", true);
        let clean = sanitize(&props);
        assert!(!clean.contains_key("checked"));
        assert_eq!(clean.get_str("type"), Some("checkbox"));
    }

    #[test]
    fn test_partition() {
        let (consumed, rest) = partition_props(sample_bag());
        assert_eq!(consumed.len(), 4);
        assert_eq!(rest, sanitize(&sample_bag()));
    }
}
