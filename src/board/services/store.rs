//! Authoritative board state and its mutation operations.

use crate::board::{
    domain::{
        Board, BoardError, Card, CardDraft, CardId, CardPatch, LabelSet, List, ListId, ListTitle,
        Notification,
    },
    ports::IdGenerator,
};
use crate::config::TrellisConfig;
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, warn};

use super::sample_board;

/// Result type for board store operations.
pub type BoardStoreResult = Result<BoardUpdate, BoardError>;

/// Outcome of a committed board operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardUpdate {
    board: Arc<Board>,
    notification: Option<Notification>,
}

impl BoardUpdate {
    /// Returns the board snapshot after the operation.
    #[must_use]
    pub const fn board(&self) -> &Arc<Board> {
        &self.board
    }

    /// Returns the success notification, if the operation produced one.
    ///
    /// Dropping a card back onto its own list commits nothing and produces
    /// no notification.
    #[must_use]
    pub const fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Splits the update into its snapshot and notification.
    #[must_use]
    pub fn into_parts(self) -> (Arc<Board>, Option<Notification>) {
        (self.board, self.notification)
    }
}

/// Capability proving the user confirmed a list deletion.
///
/// The store never prompts. Callers obtain confirmation however their
/// interface does it and then construct this value to unlock
/// [`BoardStore::delete_list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmedListDeletion {
    list_id: ListId,
}

impl ConfirmedListDeletion {
    /// Records that the user agreed to delete `list_id` and all its cards.
    #[must_use]
    pub const fn confirmed(list_id: ListId) -> Self {
        Self { list_id }
    }

    /// Returns the list the confirmation covers.
    #[must_use]
    pub const fn list_id(self) -> ListId {
        self.list_id
    }
}

/// Owner of the single authoritative [`Board`] value.
///
/// Every operation works on a private copy of the current board and swaps
/// the copy in only when the whole operation succeeds. Snapshots handed out
/// earlier are never modified.
#[derive(Clone)]
pub struct BoardStore<G, C>
where
    G: IdGenerator,
    C: Clock + Send + Sync,
{
    board: Arc<Board>,
    ids: Arc<G>,
    clock: Arc<C>,
}

impl<G, C> BoardStore<G, C>
where
    G: IdGenerator,
    C: Clock + Send + Sync,
{
    /// Creates a store holding an empty board.
    #[must_use]
    pub fn new(ids: Arc<G>, clock: Arc<C>) -> Self {
        Self::with_board(Board::new(), ids, clock)
    }

    /// Creates a store holding `board`.
    ///
    /// Every [`Board`] already has unique list and card identifiers, so
    /// this only wires the collaborators together. Identifiers the
    /// generator later hands out are still checked against `board`.
    #[must_use]
    pub fn with_board(board: Board, ids: Arc<G>, clock: Arc<C>) -> Self {
        Self {
            board: Arc::new(board),
            ids,
            clock,
        }
    }

    /// Creates a store as described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if the sample board cannot be built.
    pub fn from_config(
        config: &TrellisConfig,
        ids: Arc<G>,
        clock: Arc<C>,
    ) -> Result<Self, BoardError> {
        let board = if config.seed_sample_board {
            sample_board(&*ids)?
        } else {
            Board::new()
        };
        Ok(Self::with_board(board, ids, clock))
    }

    /// Returns the current board snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Board> {
        Arc::clone(&self.board)
    }

    /// Returns the clock used to stamp notifications.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Appends a new, empty list to the end of the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyListTitle`] when `title` is blank or
    /// [`BoardError::DuplicateListId`] when the generator keeps returning
    /// identifiers already on the board.
    pub fn add_list(&mut self, title: &str) -> BoardStoreResult {
        self.commit("add_list", |board, ids| {
            let list_title = ListTitle::new(title)?;
            let list_id = draw_unused(
                board.lists().len(),
                || ids.next_list_id(),
                |id| board.list(id).is_some(),
            )
            .map_err(BoardError::DuplicateListId)?;
            let list = List::new(list_id, list_title);
            debug!(list_id = %list.id(), "list added");
            board.push_list(list);
            Ok(Some("New list added!".to_owned()))
        })
    }

    /// Renames a list in place, keeping its id, position, and cards.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyListTitle`] when `title` is blank or
    /// [`BoardError::ListNotFound`] when the list does not exist.
    pub fn rename_list(&mut self, list_id: ListId, title: &str) -> BoardStoreResult {
        self.commit("rename_list", |board, _| {
            let list_title = ListTitle::new(title)?;
            board.list_mut(list_id)?.rename(list_title);
            Ok(Some("List updated!".to_owned()))
        })
    }

    /// Deletes a list together with every card in it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ListNotFound`] when the list does not exist.
    pub fn delete_list(&mut self, confirmation: ConfirmedListDeletion) -> BoardStoreResult {
        self.commit("delete_list", |board, _| {
            let removed = board.remove_list(confirmation.list_id())?;
            debug!(list_id = %removed.id(), cards = removed.len(), "list deleted");
            Ok(Some("List deleted!".to_owned()))
        })
    }

    /// Appends a new card built from `draft` to the end of a list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyCardTitle`] when the draft title is blank
    /// or [`BoardError::ListNotFound`] when the list does not exist, and
    /// [`BoardError::DuplicateCardId`] when the generator keeps returning
    /// identifiers already on the board.
    pub fn add_card(&mut self, list_id: ListId, draft: CardDraft) -> BoardStoreResult {
        self.commit("add_card", |board, ids| {
            let title = draft.validated_title()?;
            board.require_list(list_id)?;
            let card_id = draw_unused(
                board.card_count(),
                || ids.next_card_id(),
                |id| board.card(id).is_some(),
            )
            .map_err(BoardError::DuplicateCardId)?;
            let card = Card::titled(card_id, title, draft);
            debug!(card_id = %card.id(), %list_id, "card added");
            board.list_mut(list_id)?.push_card(card);
            Ok(Some("New card added!".to_owned()))
        })
    }

    /// Applies `patch` to a card, keeping its id and position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyCardTitle`] when the patch sets a blank
    /// title, or a not-found error when the list or card is missing.
    pub fn edit_card(
        &mut self,
        card_id: CardId,
        list_id: ListId,
        patch: CardPatch,
    ) -> BoardStoreResult {
        self.commit("edit_card", |board, _| {
            let edited = board.require_card(card_id, list_id)?.patched(patch)?;
            board.list_mut(list_id)?.replace_card(edited)?;
            Ok(Some("Card updated!".to_owned()))
        })
    }

    /// Removes a card from a list, keeping the order of the others.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the list or card is missing.
    pub fn delete_card(&mut self, card_id: CardId, list_id: ListId) -> BoardStoreResult {
        self.commit("delete_card", |board, _| {
            board.list_mut(list_id)?.take_card(card_id)?;
            Ok(Some("Card deleted!".to_owned()))
        })
    }

    /// Moves a card to the end of `target`.
    ///
    /// Moving a card onto the list it is already in changes nothing and
    /// yields no notification.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when either list is missing or the card is
    /// not in `source`.
    pub fn move_card(
        &mut self,
        card_id: CardId,
        source: ListId,
        target: ListId,
    ) -> BoardStoreResult {
        self.commit("move_card", |board, _| {
            let card_title = board.require_card(card_id, source)?.title().clone();
            let target_title = board.require_list(target)?.title().clone();
            if source == target {
                return Ok(None);
            }
            board.relocate_card(card_id, source, target)?;
            Ok(Some(format!("Moved '{card_title}' to {target_title}")))
        })
    }

    /// Toggles `label` in a draft label set without touching the board.
    #[must_use]
    pub fn toggle_card_label(draft_labels: &LabelSet, label: &str) -> LabelSet {
        draft_labels.toggled(label)
    }

    fn commit<F>(&mut self, operation: &'static str, mutate: F) -> BoardStoreResult
    where
        F: FnOnce(&mut Board, &G) -> Result<Option<String>, BoardError>,
    {
        let mut next = Board::clone(&self.board);
        match mutate(&mut next, &*self.ids) {
            Ok(message) => {
                let notification =
                    message.map(|text| Notification::success(text, &*self.clock));
                if notification.is_some() {
                    self.board = Arc::new(next);
                    debug!(operation, "board mutation committed");
                }
                Ok(BoardUpdate {
                    board: self.snapshot(),
                    notification,
                })
            }
            Err(err) => {
                warn!(operation, error = %err, "board mutation rejected");
                Err(err)
            }
        }
    }
}

/// Draws identifiers until one is not `taken`.
///
/// A generator seeded independently of the board may overlap ids already in
/// use, so up to `in_use + 1` draws are made before the last candidate is
/// returned as the error.
fn draw_unused<T: Copy>(
    in_use: usize,
    mut draw: impl FnMut() -> T,
    taken: impl Fn(T) -> bool,
) -> Result<T, T> {
    let mut candidate = draw();
    for _ in 0..in_use {
        if !taken(candidate) {
            return Ok(candidate);
        }
        candidate = draw();
    }
    if taken(candidate) {
        Err(candidate)
    } else {
        Ok(candidate)
    }
}
