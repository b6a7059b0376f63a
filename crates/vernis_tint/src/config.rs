//! Variant configuration supplied at render time.

use vernis_carton::SmallVec;

/// The named axes and modifiers a component was rendered with.
///
/// Built fresh for each render and consumed by [`crate::resolve`]. Values are
/// borrowed; nothing is validated here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantConfig<'a> {
    axes: SmallVec<[(&'a str, &'a str); 4]>,
    modifiers: SmallVec<[&'a str; 4]>,
}

impl<'a> VariantConfig<'a> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an axis value, replacing any earlier value for the same axis.
    pub fn with(mut self, axis: &'a str, value: &'a str) -> Self {
        match self.axes.iter_mut().find(|(a, _)| *a == axis) {
            Some(slot) => slot.1 = value,
            None => self.axes.push((axis, value)),
        }
        self
    }

    /// Set an axis value when present; `None` leaves the axis unset.
    pub fn with_opt(self, axis: &'a str, value: Option<&'a str>) -> Self {
        match value {
            Some(value) => self.with(axis, value),
            None => self,
        }
    }

    /// Enable or disable a boolean modifier.
    pub fn modifier(mut self, name: &'a str, on: bool) -> Self {
        let present = self.modifiers.contains(&name);
        if on && !present {
            self.modifiers.push(name);
        } else if !on && present {
            self.modifiers.retain(|m| *m != name);
        }
        self
    }

    /// Value supplied for an axis, if any.
    #[inline]
    pub fn value(&self, axis: &str) -> Option<&'a str> {
        self.axes.iter().find(|(a, _)| *a == axis).map(|(_, v)| *v)
    }

    /// Whether a modifier is enabled.
    #[inline]
    pub fn is_on(&self, modifier: &str) -> bool {
        self.modifiers.contains(&modifier)
    }

    /// Supplied axes, in insertion order.
    pub fn axes(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.axes.iter().copied()
    }

    /// Enabled modifiers, in insertion order.
    pub fn modifiers(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.modifiers.iter().copied()
    }
}
