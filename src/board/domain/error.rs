//! Error types for board validation and lookup.

use super::{CardId, ListId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse failure category reported to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Caller-supplied input failed a required-field constraint.
    Validation,
    /// A referenced list or card does not exist.
    NotFound,
}

/// Errors returned by board operations.
///
/// Every variant is recoverable: the operation is rejected and the board is
/// left exactly as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The list title is empty after trimming.
    #[error("List title cannot be empty")]
    EmptyListTitle,

    /// The card title is empty after trimming.
    #[error("Card title cannot be empty")]
    EmptyCardTitle,

    /// The board name is empty after trimming.
    #[error("Board name cannot be empty")]
    EmptyBoardTitle,

    /// Two lists share an identifier.
    #[error("duplicate list id: {0}")]
    DuplicateListId(ListId),

    /// Two cards on the board share an identifier.
    #[error("duplicate card id: {0}")]
    DuplicateCardId(CardId),

    /// No list with the given identifier exists on the board.
    #[error("list not found: {0}")]
    ListNotFound(ListId),

    /// The card is not part of the given list.
    #[error("card {card_id} not found in list {list_id}")]
    CardNotFound {
        /// Card that was looked up.
        card_id: CardId,
        /// List the card was expected in.
        list_id: ListId,
    },
}

impl BoardError {
    /// Returns the failure category for this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyListTitle
            | Self::EmptyCardTitle
            | Self::EmptyBoardTitle
            | Self::DuplicateListId(_)
            | Self::DuplicateCardId(_) => ErrorKind::Validation,
            Self::ListNotFound(_) | Self::CardNotFound { .. } => ErrorKind::NotFound,
        }
    }
}
