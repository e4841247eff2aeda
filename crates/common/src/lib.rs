//! Shared types used across the DDD toolkit crates.

pub mod types;

pub use types::{CommandId, EventId};
