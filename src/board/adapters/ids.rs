//! Identifier generators.

use crate::board::{
    domain::{BoardId, CardId, ListId},
    ports::IdGenerator,
};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Generates random version 4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_list_id(&self) -> ListId {
        ListId::new()
    }

    fn next_card_id(&self) -> CardId {
        CardId::new()
    }

    fn next_board_id(&self) -> BoardId {
        BoardId::from_uuid(Uuid::new_v4())
    }
}

/// Generates identifiers from a monotonic counter.
///
/// One counter is shared by all identifier kinds, so a list and a card never
/// share a UUID either. Useful wherever identifiers must be reproducible.
///
/// Counter values occupy the low 64 bits only. Once the counter is spent the
/// generator falls back to random version 4 UUIDs, whose version bits keep
/// them apart from every counter value.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first identifier encodes `1`.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a generator whose first identifier encodes `first`.
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    fn next_uuid(&self) -> Uuid {
        self.next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |value| {
                value.checked_add(1)
            })
            .map_or_else(|_| Uuid::new_v4(), |value| Uuid::from_u128(u128::from(value)))
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_list_id(&self) -> ListId {
        ListId::from_uuid(self.next_uuid())
    }

    fn next_card_id(&self) -> CardId {
        CardId::from_uuid(self.next_uuid())
    }

    fn next_board_id(&self) -> BoardId {
        BoardId::from_uuid(self.next_uuid())
    }
}
