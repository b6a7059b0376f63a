//! `asChild` slot merging.

use crate::{Element, Props};
use vernis_tint::merge_classes;

/// Merge slot attributes into the child element.
///
/// The child's own attributes win, except `class`, which is joined with the
/// slot's classes first.
pub fn merge_slot_attrs(slot: &Props, child: &mut Element) {
    for (name, value) in slot.iter() {
        if name == "class" {
            let slot_class = value.as_str().unwrap_or("");
            let merged = merge_classes([slot_class, child.class()]);
            if !merged.is_empty() {
                child.attrs.set("class", merged);
            }
        } else {
            child.attrs.set_default(name, value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PropValue;

    #[test]
    fn test_child_attrs_win() {
        let slot = Props::new()
            .with("class", "btn btn-primary")
            .with("data-slot", "button")
            .with("href", "/slot");
        let mut child = Element::new("a")
            .with_attr("href", "/child")
            .with_class("underline");
        merge_slot_attrs(&slot, &mut child);
        assert_eq!(child.class(), "btn btn-primary underline");
        assert_eq!(child.attr("href"), Some(&PropValue::from("/child")));
        assert_eq!(child.slot(), Some("button"));
    }
}
