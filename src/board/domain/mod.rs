//! Domain model for the Kanban board.
//!
//! Lists own cards, the board owns lists, and every mutation is expressed as
//! a fallible operation on an owned [`Board`] value so callers can apply it
//! to a copy and discard the copy on failure.

mod board;
mod card;
mod error;
mod ids;
mod label;
mod list;
mod notification;
mod title;

pub use board::Board;
pub use card::{Card, CardDraft, CardPatch, DueDate};
pub use error::{BoardError, ErrorKind};
pub use ids::{BoardId, CardId, ListId};
pub use label::{LabelCatalog, LabelOption, LabelSet};
pub use list::List;
pub use notification::Notification;
pub use title::{CardTitle, ListTitle};
