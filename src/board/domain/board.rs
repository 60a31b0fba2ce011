//! Board aggregate root.

use std::collections::HashSet;

use super::{BoardError, Card, CardId, List, ListId};
use serde::{Deserialize, Serialize};

/// Ordered collection of lists; owns every list and, through them, every
/// card.
///
/// A card belongs to exactly one list at a time. The mutators are crate
/// private and validate before they touch anything, so a failed call leaves
/// the board as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedBoard")]
pub struct Board {
    lists: Vec<List>,
}

/// Wire shape accepted before identifier uniqueness is checked.
#[derive(Deserialize)]
struct UncheckedBoard {
    lists: Vec<List>,
}

impl TryFrom<UncheckedBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: UncheckedBoard) -> Result<Self, Self::Error> {
        Self::from_lists(raw.lists)
    }
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self { lists: Vec::new() }
    }

    /// Builds a board from lists, checking that list identifiers are unique
    /// and that no card identifier appears twice anywhere on the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DuplicateListId`] or
    /// [`BoardError::DuplicateCardId`] for the first repeated identifier.
    pub fn from_lists(lists: Vec<List>) -> Result<Self, BoardError> {
        let mut list_ids = HashSet::with_capacity(lists.len());
        let mut card_ids = HashSet::new();
        for list in &lists {
            if !list_ids.insert(list.id()) {
                return Err(BoardError::DuplicateListId(list.id()));
            }
            for card in list.cards() {
                if !card_ids.insert(card.id()) {
                    return Err(BoardError::DuplicateCardId(card.id()));
                }
            }
        }
        Ok(Self { lists })
    }

    /// Returns the lists in display order.
    #[must_use]
    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    /// Finds a list by identifier.
    #[must_use]
    pub fn list(&self, list_id: ListId) -> Option<&List> {
        self.lists.iter().find(|list| list.id() == list_id)
    }

    /// Finds a card anywhere on the board, together with its owning list.
    #[must_use]
    pub fn card(&self, card_id: CardId) -> Option<(&List, &Card)> {
        self.lists
            .iter()
            .find_map(|list| list.card(card_id).map(|card| (list, card)))
    }

    /// Returns the total number of cards across all lists.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.lists.iter().map(List::len).sum()
    }

    /// Looks up a list, reporting [`BoardError::ListNotFound`] when absent.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ListNotFound`] when no list has `list_id`.
    pub fn require_list(&self, list_id: ListId) -> Result<&List, BoardError> {
        self.list(list_id).ok_or(BoardError::ListNotFound(list_id))
    }

    /// Looks up a card within a specific list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ListNotFound`] or [`BoardError::CardNotFound`].
    pub fn require_card(&self, card_id: CardId, list_id: ListId) -> Result<&Card, BoardError> {
        self.require_list(list_id)?
            .card(card_id)
            .ok_or(BoardError::CardNotFound { card_id, list_id })
    }

    pub(crate) fn push_list(&mut self, list: List) {
        self.lists.push(list);
    }

    pub(crate) fn list_mut(&mut self, list_id: ListId) -> Result<&mut List, BoardError> {
        self.lists
            .iter_mut()
            .find(|list| list.id() == list_id)
            .ok_or(BoardError::ListNotFound(list_id))
    }

    /// Removes a list and every card in it.
    pub(crate) fn remove_list(&mut self, list_id: ListId) -> Result<List, BoardError> {
        let position = self
            .lists
            .iter()
            .position(|list| list.id() == list_id)
            .ok_or(BoardError::ListNotFound(list_id))?;
        Ok(self.lists.remove(position))
    }

    /// Detaches a card from `source` and appends it to `target`.
    ///
    /// Both lists and the card are checked before anything is detached.
    pub(crate) fn relocate_card(
        &mut self,
        card_id: CardId,
        source: ListId,
        target: ListId,
    ) -> Result<(), BoardError> {
        self.require_card(card_id, source)?;
        self.require_list(target)?;
        let card = self.list_mut(source)?.take_card(card_id)?;
        self.list_mut(target)?.push_card(card);
        Ok(())
    }
}
