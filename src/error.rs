//! Errors raised while materialising entities.
//!
//! These are configuration errors: once one is returned the level is in an
//! inconsistent state and the run should stop.

use std::fmt;

use crate::components::kind::EntityKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpawnError {
    /// The kind exists but cannot come out of the spawn queue.
    UnsupportedKind(EntityKind),
    /// A layout named a kind nobody knows.
    UnknownKind(String),
    /// The catalog refers to an animation that was never registered.
    MissingAnimation(String),
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnError::UnsupportedKind(kind) => {
                write!(f, "entity kind '{}' cannot be spawned from the queue", kind)
            }
            SpawnError::UnknownKind(name) => write!(f, "unknown entity kind '{}'", name),
            SpawnError::MissingAnimation(key) => write!(f, "animation '{}' is not registered", key),
        }
    }
}

impl std::error::Error for SpawnError {}
