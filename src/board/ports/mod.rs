//! Port contracts for the board engine.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod id_generator;

pub use id_generator::IdGenerator;
