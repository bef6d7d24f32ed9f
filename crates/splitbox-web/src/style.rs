//! Inline styles and class-name composition.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Inline CSS declarations keyed by property name (kebab-case).
///
/// Later writes win, mirroring how object spread composes React styles.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InlineStyle(BTreeMap<String, String>);

impl InlineStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`InlineStyle::set`].
    #[must_use]
    pub fn with(mut self, property: &str, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn set(&mut self, property: &str, value: impl Into<String>) {
        self.0.insert(property.to_owned(), value.into());
    }

    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        self.0.remove(property)
    }

    /// Overlay `other` onto `self`.
    pub fn merge(&mut self, other: &InlineStyle) {
        for (property, value) in &other.0 {
            self.0.insert(property.clone(), value.clone());
        }
    }

    /// `self` overlaid with `other`.
    #[must_use]
    pub fn merged(mut self, other: &InlineStyle) -> Self {
        self.merge(other);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Serializes as a `style` attribute value: `a: b; c: d`.
impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (property, value)) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{property}: {value}")?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InlineStyle {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Join the enabled class names with single spaces.
#[must_use]
pub fn class_names<'a>(classes: impl IntoIterator<Item = (&'a str, bool)>) -> String {
    classes
        .into_iter()
        .filter(|(name, enabled)| *enabled && !name.is_empty())
        .map(|(name, _)| name)
        .collect::<Vec<_>>()
        .join(" ")
}
