//! Card entity and the request shapes used to create and edit cards.

use super::{BoardError, CardId, CardTitle, LabelSet};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar due date without a time component.
pub type DueDate = NaiveDate;

/// A task unit on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    title: CardTitle,
    description: Option<String>,
    labels: LabelSet,
    due_date: Option<DueDate>,
}

impl Card {
    /// Creates a card from a draft, assigning it `id`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyCardTitle`] when the draft title is blank.
    pub fn from_draft(id: CardId, draft: CardDraft) -> Result<Self, BoardError> {
        let title = draft.validated_title()?;
        Ok(Self::titled(id, title, draft))
    }

    /// Builds a card whose title was already validated from `draft`.
    pub(crate) fn titled(id: CardId, title: CardTitle, draft: CardDraft) -> Self {
        Self {
            id,
            title,
            description: draft.description,
            labels: draft.labels,
            due_date: draft.due_date,
        }
    }

    /// Returns the card identifier.
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// Returns the card title.
    #[must_use]
    pub const fn title(&self) -> &CardTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the card labels.
    #[must_use]
    pub const fn labels(&self) -> &LabelSet {
        &self.labels
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DueDate> {
        self.due_date
    }

    /// Returns a copy of this card with `patch` applied.
    ///
    /// The identifier never changes.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyCardTitle`] when the patch sets a blank
    /// title.
    pub fn patched(&self, patch: CardPatch) -> Result<Self, BoardError> {
        let title = match patch.title {
            Some(raw) => CardTitle::new(raw)?,
            None => self.title.clone(),
        };
        Ok(Self {
            id: self.id,
            title,
            description: patch.description.unwrap_or_else(|| self.description.clone()),
            labels: patch.labels.unwrap_or_else(|| self.labels.clone()),
            due_date: patch.due_date.unwrap_or(self.due_date),
        })
    }
}

/// A card being composed before it is added to a list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDraft {
    title: String,
    description: Option<String>,
    labels: LabelSet,
    due_date: Option<DueDate>,
}

impl CardDraft {
    /// Starts a draft with the given title.
    ///
    /// The title is validated when the draft is committed, not here, so a
    /// form can hold an empty draft while the user types.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the labels, de-duplicating them.
    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.labels = LabelSet::from_labels(labels);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DueDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Toggles a label on the draft without touching any board.
    pub fn toggle_label(&mut self, label: &str) {
        self.labels.toggle(label);
    }

    /// Validates the draft title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyCardTitle`] when the title is blank.
    pub fn validated_title(&self) -> Result<CardTitle, BoardError> {
        CardTitle::new(&self.title)
    }

    /// Returns the draft title as typed.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the labels currently selected on the draft.
    #[must_use]
    pub const fn labels(&self) -> &LabelSet {
        &self.labels
    }
}

/// Partial update applied by the edit-card operation.
///
/// `None` leaves a field untouched. The nested options on description and
/// due date distinguish "leave as is" from "clear".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardPatch {
    title: Option<String>,
    description: Option<Option<String>>,
    labels: Option<LabelSet>,
    due_date: Option<Option<DueDate>>,
}

impl CardPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Removes the description.
    #[must_use]
    pub fn without_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Replaces the labels, de-duplicating them.
    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.labels = Some(LabelSet::from_labels(labels));
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DueDate) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    /// Clears the due date.
    #[must_use]
    pub const fn without_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }
}
