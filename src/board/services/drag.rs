//! Drag gesture state machine.
//!
//! A gesture goes `Idle -> Dragging -> Idle`. Only the drop transition
//! touches the board, and it does so through a single
//! [`BoardStore::move_card`] call, so hover events arriving at pointer rate
//! can never cause partial or repeated moves.

use super::{BoardStore, BoardUpdate};
use crate::board::{
    domain::{BoardError, Card, CardId, ListId},
    ports::IdGenerator,
};
use mockable::Clock;
use thiserror::Error;
use tracing::trace;

/// Errors returned by drag session transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DragSessionError {
    /// A gesture is already in progress.
    #[error("card {0} is already being dragged")]
    AlreadyDragging(CardId),

    /// The transition requires an active gesture.
    #[error("no drag is in progress")]
    NotDragging,

    /// The drop reached the board store and was rejected.
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// An in-progress card relocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragGesture {
    card: Card,
    source_list_id: ListId,
    hovered_list_id: Option<ListId>,
}

impl DragGesture {
    /// Returns the snapshot of the card captured at pick-up.
    #[must_use]
    pub const fn card(&self) -> &Card {
        &self.card
    }

    /// Returns the list the card was picked up from.
    #[must_use]
    pub const fn source_list_id(&self) -> ListId {
        self.source_list_id
    }

    /// Returns the list currently under the pointer, if any.
    #[must_use]
    pub const fn hovered_list_id(&self) -> Option<ListId> {
        self.hovered_list_id
    }
}

/// Drag session lifecycle state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A card has been picked up.
    Dragging(DragGesture),
}

/// How a drop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The drop landed on a list and the move was committed.
    Committed(BoardUpdate),
    /// The drop landed outside any list; nothing changed.
    Cancelled,
}

/// Tracks one drag gesture at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    /// Creates an idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    /// Returns the active gesture, if any.
    #[must_use]
    pub const fn gesture(&self) -> Option<&DragGesture> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging(gesture) => Some(gesture),
        }
    }

    /// Returns whether a gesture is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Returns whether `card_id` is the card being dragged.
    #[must_use]
    pub fn is_dragged(&self, card_id: CardId) -> bool {
        self.gesture().is_some_and(|gesture| gesture.card.id() == card_id)
    }

    /// Returns whether `list_id` is the list currently hovered.
    #[must_use]
    pub fn is_hovered(&self, list_id: ListId) -> bool {
        self.gesture()
            .is_some_and(|gesture| gesture.hovered_list_id == Some(list_id))
    }

    /// Picks up `card` from `source_list_id`.
    ///
    /// # Errors
    ///
    /// Returns [`DragSessionError::AlreadyDragging`] when a gesture is
    /// already active.
    pub fn begin_drag(
        &mut self,
        card: Card,
        source_list_id: ListId,
    ) -> Result<(), DragSessionError> {
        if let DragState::Dragging(gesture) = &self.state {
            return Err(DragSessionError::AlreadyDragging(gesture.card.id()));
        }
        trace!(card_id = %card.id(), %source_list_id, "drag started");
        self.state = DragState::Dragging(DragGesture {
            card,
            source_list_id,
            hovered_list_id: None,
        });
        Ok(())
    }

    /// Records the list under the pointer. Presentation feedback only.
    ///
    /// # Errors
    ///
    /// Returns [`DragSessionError::NotDragging`] when no gesture is active.
    pub fn hover(&mut self, list_id: ListId) -> Result<(), DragSessionError> {
        match &mut self.state {
            DragState::Idle => Err(DragSessionError::NotDragging),
            DragState::Dragging(gesture) => {
                gesture.hovered_list_id = Some(list_id);
                Ok(())
            }
        }
    }

    /// Ends the gesture, moving the card when it lands on a list.
    ///
    /// A `None` target means the card was released outside every list and
    /// behaves like [`cancel`](Self::cancel). The session is idle afterwards
    /// whether or not the move succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`DragSessionError::NotDragging`] when no gesture is active,
    /// or [`DragSessionError::Board`] when the store rejects the move.
    pub fn drop_card<G, C>(
        &mut self,
        target_list_id: Option<ListId>,
        store: &mut BoardStore<G, C>,
    ) -> Result<DropOutcome, DragSessionError>
    where
        G: IdGenerator,
        C: Clock + Send + Sync,
    {
        let DragState::Dragging(gesture) = std::mem::take(&mut self.state) else {
            return Err(DragSessionError::NotDragging);
        };
        let Some(target) = target_list_id else {
            trace!(card_id = %gesture.card.id(), "drag released off target");
            return Ok(DropOutcome::Cancelled);
        };
        let update = store.move_card(gesture.card.id(), gesture.source_list_id, target)?;
        trace!(card_id = %gesture.card.id(), target_list_id = %target, "drag dropped");
        Ok(DropOutcome::Committed(update))
    }

    /// Abandons the gesture without touching the board.
    ///
    /// # Errors
    ///
    /// Returns [`DragSessionError::NotDragging`] when no gesture is active.
    pub fn cancel(&mut self) -> Result<(), DragSessionError> {
        match std::mem::take(&mut self.state) {
            DragState::Idle => Err(DragSessionError::NotDragging),
            DragState::Dragging(gesture) => {
                trace!(card_id = %gesture.card.id(), "drag cancelled");
                Ok(())
            }
        }
    }
}
