use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A set of font family names. Case-sensitive; order irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSet(BTreeSet<String>);

impl FontSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, family: impl Into<String>) -> bool {
        self.0.insert(family.into())
    }

    pub fn contains(&self, family: &str) -> bool {
        self.0.contains(family)
    }

    pub fn is_subset(&self, other: &FontSet) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Families in `self` that are not in `other`, in ascending order.
    pub fn difference<'a>(&'a self, other: &'a FontSet) -> Vec<&'a str> {
        self.0.difference(&other.0).map(String::as_str).collect()
    }

    /// Add every family of `other`.
    pub fn union_with(&mut self, other: FontSet) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for FontSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
