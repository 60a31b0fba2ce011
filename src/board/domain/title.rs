//! Validated display titles.

use super::BoardError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalizes a raw title, returning `None` when nothing but whitespace remains.
fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Non-empty, trimmed list title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ListTitle(String);

impl ListTitle {
    /// Creates a validated list title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyListTitle`] when the value is empty after
    /// trimming.
    pub fn new(value: impl AsRef<str>) -> Result<Self, BoardError> {
        normalize(value.as_ref())
            .map(Self)
            .ok_or(BoardError::EmptyListTitle)
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ListTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for ListTitle {
    type Error = BoardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ListTitle> for String {
    fn from(title: ListTitle) -> Self {
        title.0
    }
}

impl fmt::Display for ListTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-empty, trimmed card title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardTitle(String);

impl CardTitle {
    /// Creates a validated card title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyCardTitle`] when the value is empty after
    /// trimming.
    pub fn new(value: impl AsRef<str>) -> Result<Self, BoardError> {
        normalize(value.as_ref())
            .map(Self)
            .ok_or(BoardError::EmptyCardTitle)
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CardTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for CardTitle {
    type Error = BoardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CardTitle> for String {
    fn from(title: CardTitle) -> Self {
        title.0
    }
}

impl fmt::Display for CardTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
