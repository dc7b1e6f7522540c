//! Pending spawn requests.
//!
//! Requests are drained in FIFO order, all of them, at the start of every
//! level frame by [`drain_spawn_queue`](crate::systems::spawn::drain_spawn_queue).

use std::collections::VecDeque;

use bevy_ecs::prelude::Resource;
use glam::Vec2;

use crate::components::kind::EntityKind;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub kind: EntityKind,
    /// Lower-left corner of the new entity.
    pub position: Vec2,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct SpawnQueue {
    pending: VecDeque<SpawnRequest>,
}

impl SpawnQueue {
    pub fn push(&mut self, kind: EntityKind, position: Vec2) {
        self.pending.push_back(SpawnRequest { kind, position });
    }

    pub fn pop(&mut self) -> Option<SpawnRequest> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpawnRequest> {
        self.pending.iter()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
