//! List entity: a titled, ordered column of cards.

use super::{BoardError, Card, CardId, ListId, ListTitle};
use serde::{Deserialize, Serialize};

/// A named, ordered container of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    id: ListId,
    title: ListTitle,
    cards: Vec<Card>,
}

impl List {
    /// Creates an empty list.
    #[must_use]
    pub const fn new(id: ListId, title: ListTitle) -> Self {
        Self {
            id,
            title,
            cards: Vec::new(),
        }
    }

    /// Returns the list identifier.
    #[must_use]
    pub const fn id(&self) -> ListId {
        self.id
    }

    /// Returns the list title.
    #[must_use]
    pub const fn title(&self) -> &ListTitle {
        &self.title
    }

    /// Returns the cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the list holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Finds a card in this list.
    #[must_use]
    pub fn card(&self, card_id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id() == card_id)
    }

    /// Returns the card identifiers in display order.
    pub fn card_ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().map(Card::id)
    }

    pub(crate) fn rename(&mut self, title: ListTitle) {
        self.title = title;
    }

    pub(crate) fn push_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes a card, keeping the relative order of the rest.
    pub(crate) fn take_card(&mut self, card_id: CardId) -> Result<Card, BoardError> {
        let position = self.position_of(card_id)?;
        Ok(self.cards.remove(position))
    }

    pub(crate) fn replace_card(&mut self, card: Card) -> Result<(), BoardError> {
        let position = self.position_of(card.id())?;
        if let Some(slot) = self.cards.get_mut(position) {
            *slot = card;
        }
        Ok(())
    }

    fn position_of(&self, card_id: CardId) -> Result<usize, BoardError> {
        self.cards
            .iter()
            .position(|card| card.id() == card_id)
            .ok_or(BoardError::CardNotFound {
                card_id,
                list_id: self.id,
            })
    }
}
