//! Repository layer: entity-scoped database operations.

mod message;

pub use message::*;
