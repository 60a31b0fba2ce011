//! Unit tests for the board module.
//!
//! Tests are organised by layer: domain values, identifier adapters, store
//! operations, the drag session, and the intent dispatcher.

mod controller_tests;
