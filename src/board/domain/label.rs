//! Card labels and the static label catalog.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// De-duplicated set of label names attached to a card.
///
/// Names are trimmed on insertion and blank names are ignored. Labels are
/// free text: a label does not need a matching [`LabelCatalog`] entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelSet(BTreeSet<String>);

impl LabelSet {
    /// Creates an empty label set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Builds a label set from arbitrary names, dropping duplicates and blanks.
    #[must_use]
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            labels
                .into_iter()
                .filter_map(|label| normalize_label(label.as_ref()))
                .collect(),
        )
    }

    /// Returns a copy with `label` added if absent or removed if present.
    ///
    /// Toggling the same label twice yields the original set. A blank label
    /// leaves the set unchanged.
    #[must_use]
    pub fn toggled(&self, label: &str) -> Self {
        let mut next = self.clone();
        next.toggle(label);
        next
    }

    /// Adds `label` if absent or removes it if present.
    pub fn toggle(&mut self, label: &str) {
        let Some(name) = normalize_label(label) else {
            return;
        };
        if !self.0.remove(&name) {
            self.0.insert(name);
        }
    }

    /// Returns whether the set contains `label`.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label.trim())
    }

    /// Returns the number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over label names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for LabelSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_labels(iter)
    }
}

fn normalize_label(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// One entry of the label catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelOption {
    /// Stable catalog key, e.g. `high-priority`.
    pub id: String,
    /// Label name as shown on cards, e.g. `High Priority`.
    pub display_text: String,
    /// Presentation color token, e.g. `bg-orange-500`.
    pub color: String,
}

impl LabelOption {
    /// Creates a catalog entry.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        display_text: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_text: display_text.into(),
            color: color.into(),
        }
    }
}

/// Ordered, read-only catalog of suggested labels and their colors.
///
/// The catalog only drives color selection. Removing an entry never affects
/// cards that already carry that label name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelCatalog(Vec<LabelOption>);

impl LabelCatalog {
    /// Creates a catalog from explicit entries, preserving their order.
    #[must_use]
    pub const fn new(options: Vec<LabelOption>) -> Self {
        Self(options)
    }

    /// Returns the catalog entries in display order.
    #[must_use]
    pub fn options(&self) -> &[LabelOption] {
        &self.0
    }

    /// Finds the entry whose display text matches `label`.
    #[must_use]
    pub fn find(&self, label: &str) -> Option<&LabelOption> {
        let wanted = label.trim();
        self.0.iter().find(|option| option.display_text == wanted)
    }

    /// Returns the catalog color for `label`, if the catalog knows it.
    #[must_use]
    pub fn color_for(&self, label: &str) -> Option<&str> {
        self.find(label).map(|option| option.color.as_str())
    }
}

impl Default for LabelCatalog {
    fn default() -> Self {
        Self(vec![
            LabelOption::new("development", "Development", "bg-blue-500"),
            LabelOption::new("design", "Design", "bg-purple-500"),
            LabelOption::new("research", "Research", "bg-green-500"),
            LabelOption::new("bug", "Bug", "bg-red-500"),
            LabelOption::new("high-priority", "High Priority", "bg-orange-500"),
            LabelOption::new("enhancement", "Enhancement", "bg-teal-500"),
        ])
    }
}
