//! Intent dispatcher between a presentation layer and the board engine.

use super::{
    BoardStore, BoardStoreResult, ConfirmedListDeletion, DragSession, DragSessionError,
    DropOutcome,
};
use crate::board::{
    domain::{
        Board, BoardError, CardDraft, CardId, CardPatch, LabelCatalog, ListId, Notification,
    },
    ports::IdGenerator,
};
use crate::config::TrellisConfig;
use mockable::Clock;
use std::sync::Arc;
use tracing::warn;

/// A user-originated request emitted by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Create a list at the end of the board.
    AddList {
        /// Title typed by the user.
        title: String,
    },
    /// Rename a list.
    RenameList {
        /// List to rename.
        list_id: ListId,
        /// New title.
        title: String,
    },
    /// Delete a list and its cards. Requires prior confirmation.
    DeleteList(ConfirmedListDeletion),
    /// Append a card to a list.
    AddCard {
        /// Destination list.
        list_id: ListId,
        /// Card contents.
        draft: CardDraft,
    },
    /// Edit an existing card.
    EditCard {
        /// Card to edit.
        card_id: CardId,
        /// List holding the card.
        list_id: ListId,
        /// Fields to change.
        patch: CardPatch,
    },
    /// Delete a card.
    DeleteCard {
        /// Card to delete.
        card_id: CardId,
        /// List holding the card.
        list_id: ListId,
    },
    /// Pick up a card.
    BeginDrag {
        /// Card being picked up.
        card_id: CardId,
        /// List it is picked up from.
        source_list_id: ListId,
    },
    /// Pointer moved over a list during a drag.
    HoverList {
        /// List under the pointer.
        list_id: ListId,
    },
    /// Card released. `None` means it was released outside every list.
    Drop {
        /// List the card was released over.
        target_list_id: Option<ListId>,
    },
    /// Drag abandoned, e.g. with the escape key.
    CancelDrag,
}

/// Snapshot and feedback returned after every intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentResponse {
    /// Board to render.
    pub board: Arc<Board>,
    /// Feedback to show, if any.
    pub notification: Option<Notification>,
}

/// Handles intents one at a time against a store and a drag session.
pub struct BoardController<G, C>
where
    G: IdGenerator,
    C: Clock + Send + Sync,
{
    store: BoardStore<G, C>,
    drag: DragSession,
    config: TrellisConfig,
}

impl<G, C> BoardController<G, C>
where
    G: IdGenerator,
    C: Clock + Send + Sync,
{
    /// Creates a controller around an existing store.
    #[must_use]
    pub fn new(store: BoardStore<G, C>, config: TrellisConfig) -> Self {
        Self {
            store,
            drag: DragSession::new(),
            config,
        }
    }

    /// Creates a controller and its store from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if the configured starting board cannot be built.
    pub fn from_config(
        config: TrellisConfig,
        ids: Arc<G>,
        clock: Arc<C>,
    ) -> Result<Self, BoardError> {
        let store = BoardStore::from_config(&config, ids, clock)?;
        Ok(Self::new(store, config))
    }

    /// Returns the current board snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Board> {
        self.store.snapshot()
    }

    /// Returns the drag session, for hover and dragged-card highlighting.
    #[must_use]
    pub const fn drag_session(&self) -> &DragSession {
        &self.drag
    }

    /// Returns the read-only label catalog.
    #[must_use]
    pub const fn label_catalog(&self) -> &LabelCatalog {
        &self.config.label_catalog
    }

    /// Returns the display color for a card label.
    #[must_use]
    pub fn label_color(&self, label: &str) -> &str {
        self.config.label_color(label)
    }

    /// Handles one intent to completion.
    ///
    /// Board errors become failure notifications with the board unchanged.
    /// Gesture events that do not fit the current drag state are ignored.
    pub fn handle(&mut self, intent: Intent) -> IntentResponse {
        match intent {
            Intent::AddList { title } => {
                let result = self.store.add_list(&title);
                self.respond(result)
            }
            Intent::RenameList { list_id, title } => {
                let result = self.store.rename_list(list_id, &title);
                self.respond(result)
            }
            Intent::DeleteList(confirmation) => {
                let result = self.store.delete_list(confirmation);
                self.respond(result)
            }
            Intent::AddCard { list_id, draft } => {
                let result = self.store.add_card(list_id, draft);
                self.respond(result)
            }
            Intent::EditCard {
                card_id,
                list_id,
                patch,
            } => {
                let result = self.store.edit_card(card_id, list_id, patch);
                self.respond(result)
            }
            Intent::DeleteCard { card_id, list_id } => {
                let result = self.store.delete_card(card_id, list_id);
                self.respond(result)
            }
            Intent::BeginDrag {
                card_id,
                source_list_id,
            } => self.begin_drag(card_id, source_list_id),
            Intent::HoverList { list_id } => {
                let result = self.drag.hover(list_id);
                self.respond_to_gesture(result.map(|()| None))
            }
            Intent::Drop { target_list_id } => {
                let result = self.drag.drop_card(target_list_id, &mut self.store);
                self.respond_to_gesture(result.map(|outcome| match outcome {
                    DropOutcome::Committed(update) => update.into_parts().1,
                    DropOutcome::Cancelled => None,
                }))
            }
            Intent::CancelDrag => {
                let result = self.drag.cancel();
                self.respond_to_gesture(result.map(|()| None))
            }
        }
    }

    fn begin_drag(&mut self, card_id: CardId, source_list_id: ListId) -> IntentResponse {
        let board = self.store.snapshot();
        let card = match board.require_card(card_id, source_list_id) {
            Ok(card) => card.clone(),
            Err(err) => return self.respond(Err(err)),
        };
        let result = self.drag.begin_drag(card, source_list_id);
        self.respond_to_gesture(result.map(|()| None))
    }

    fn respond(&self, result: BoardStoreResult) -> IntentResponse {
        match result {
            Ok(update) => {
                let (board, notification) = update.into_parts();
                IntentResponse { board, notification }
            }
            Err(err) => self.failure(&err),
        }
    }

    fn respond_to_gesture(
        &self,
        result: Result<Option<Notification>, DragSessionError>,
    ) -> IntentResponse {
        match result {
            Ok(notification) => IntentResponse {
                board: self.store.snapshot(),
                notification,
            },
            Err(DragSessionError::Board(err)) => self.failure(&err),
            Err(err) => {
                warn!(error = %err, "ignoring gesture event");
                IntentResponse {
                    board: self.store.snapshot(),
                    notification: None,
                }
            }
        }
    }

    fn failure(&self, err: &BoardError) -> IntentResponse {
        IntentResponse {
            board: self.store.snapshot(),
            notification: Some(Notification::failure(err, self.store.clock())),
        }
    }
}
