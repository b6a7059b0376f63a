//! Prop bags.
//!
//! A [`Props`] is the key/value bag handed to a component or an element.
//! Keys are unique and keep insertion order, so attribute output is stable.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;
use std::fmt;
use vernis_carton::{format_compact, CompactString};

/// A single prop value.
///
/// `Null` stands for both `null` and `undefined`. Numbers keep the exact
/// JSON representation they were parsed from, so `3` stays `3` and integers
/// beyond `2^53` are not rounded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    Str(CompactString),
}

impl PropValue {
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            Self::Str(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Loose truthiness: `true`, `"true"`, non-empty strings other than
    /// `"false"`, and non-zero numbers.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
            Self::Str(s) => !s.is_empty() && s != "false",
        }
    }

    /// Attribute text for non-boolean output. `None` for `Null`.
    pub fn to_attr_text(&self) -> Option<CompactString> {
        match self {
            Self::Null => None,
            Self::Bool(b) => Some(if *b { "true".into() } else { "false".into() }),
            Self::Number(n) => Some(format_compact!("{}", n)),
            Self::Str(s) => Some(s.clone()),
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Whole floats are stored as integers so `50.0` renders as `50`.
/// Non-finite values have no attribute form and become `Null`.
impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
        if value.fract() == 0.0 && value.abs() <= MAX_EXACT {
            return Self::Number(Number::from(value as i64));
        }
        Number::from_f64(value).map_or(Self::Null, Self::Number)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for PropValue {
                fn from(value: $ty) -> Self {
                    Self::Number(Number::from(value))
                }
            }
        )+
    };
}

impl_from_int!(i32, u32, i64, u64);

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Str(value.into())
    }
}

impl From<CompactString> for PropValue {
    fn from(value: CompactString) -> Self {
        Self::Str(value)
    }
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

/// Error building a prop bag from external input.
#[derive(Debug, thiserror::Error)]
pub enum PropsError {
    #[error("prop bag must be a JSON object of scalar values: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Insertion-ordered prop bag with unique keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    entries: Vec<(CompactString, PropValue)>,
}

impl Props {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object such as `{"variant":"ghost","disabled":true}`.
    pub fn from_json(source: &str) -> Result<Self, PropsError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Builder form of [`Props::set`].
    pub fn with(mut self, key: impl Into<CompactString>, value: impl Into<PropValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or replace a value, keeping the original position on replace.
    pub fn set(&mut self, key: impl Into<CompactString>, value: impl Into<PropValue>) -> Option<PropValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Insert only when the key is absent.
    pub fn set_default(&mut self, key: impl Into<CompactString>, value: impl Into<PropValue>) {
        let key = key.into();
        if !self.contains_key(&key) {
            self.entries.push((key, value.into()));
        }
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[inline]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PropValue::as_str)
    }

    /// Loose truthiness of a key; absent keys are false.
    #[inline]
    pub fn is_truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(PropValue::is_truthy)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// New bag with only the entries `keep` accepts. `self` is untouched.
    pub fn filtered(&self, mut keep: impl FnMut(&str, &PropValue) -> bool) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(k, v)| keep(k, v))
                .cloned()
                .collect(),
        }
    }

    /// Split into `(matching, rest)` by key.
    pub fn partition(self, mut pred: impl FnMut(&str) -> bool) -> (Self, Self) {
        let (matching, rest) = self.entries.into_iter().partition(|(k, _)| pred(k));
        (Self { entries: matching }, Self { entries: rest })
    }

    /// Apply every entry of `other`, overriding existing keys.
    pub fn merge(&mut self, other: &Props) {
        for (k, v) in other.iter() {
            self.set(k, v.clone());
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<CompactString>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut props = Props::new();
        for (k, v) in iter {
            props.set(k, v);
        }
        props
    }
}

impl Serialize for Props {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k.as_str(), v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Props {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PropsVisitor;

        impl<'de> Visitor<'de> for PropsVisitor {
            type Value = Props;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of prop names to scalar values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Props, A::Error> {
                let mut props = Props::new();
                while let Some((key, value)) = access.next_entry::<CompactString, PropValue>()? {
                    props.set(key, value);
                }
                Ok(props)
            }
        }

        deserializer.deserialize_map(PropsVisitor)
    }
}
