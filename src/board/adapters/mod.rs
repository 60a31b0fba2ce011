//! Adapter implementations for board ports.

pub mod ids;

pub use ids::{SequentialIdGenerator, UuidIdGenerator};
