//! Trellis: an in-memory Kanban board engine.
//!
//! The crate holds the state machine behind a Kanban board: ordered lists of
//! ordered cards, the create/edit/delete operations on them, and the drag
//! gesture that moves cards between lists. Rendering, persistence, and
//! user prompts belong to the caller.
//!
//! # Architecture
//!
//! Trellis follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board values with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces, such as the identifier source
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`board`]: Board state, mutations, and the drag session
//! - [`config`]: Label catalog and start-up options
//! - [`workspace`]: Directory of boards

pub mod board;
pub mod config;
pub mod workspace;
