//! Application services: the board store, the drag session, and the intent
//! dispatcher a presentation layer talks to.

mod controller;
mod drag;
mod sample;
mod store;

pub use controller::{BoardController, Intent, IntentResponse};
pub use drag::{DragGesture, DragSession, DragSessionError, DragState, DropOutcome};
pub use sample::sample_board;
pub use store::{BoardStore, BoardStoreResult, BoardUpdate, ConfirmedListDeletion};
