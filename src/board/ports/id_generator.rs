//! Identifier source port.

use crate::board::domain::{BoardId, CardId, ListId};

/// Supplies fresh identifiers for new boards, lists, and cards.
///
/// Implementations must never hand out the same identifier twice, across
/// all three kinds, for the lifetime of the generator. Uniqueness must not
/// depend on call timing.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Returns an unused list identifier.
    fn next_list_id(&self) -> ListId;

    /// Returns an unused card identifier.
    fn next_card_id(&self) -> CardId;

    /// Returns an unused board identifier.
    fn next_board_id(&self) -> BoardId;
}
