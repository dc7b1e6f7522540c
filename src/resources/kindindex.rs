//! Index of live entities by kind.
//!
//! Spawning code inserts, removal code removes. Systems query it instead of
//! scanning every entity for its tag.

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::FxHashMap;

use crate::components::kind::EntityKind;

#[derive(Resource, Debug, Clone, Default)]
pub struct KindIndex {
    by_kind: FxHashMap<EntityKind, Vec<Entity>>,
}

impl KindIndex {
    pub fn insert(&mut self, kind: EntityKind, entity: Entity) {
        self.by_kind.entry(kind).or_default().push(entity);
    }

    /// Remove `entity`. Returns false if it was not indexed under `kind`.
    pub fn remove(&mut self, kind: EntityKind, entity: Entity) -> bool {
        let Some(list) = self.by_kind.get_mut(&kind) else {
            return false;
        };
        match list.iter().position(|e| *e == entity) {
            Some(i) => {
                list.remove(i);
                true
            }
            None => false,
        }
    }

    /// Live entities of `kind`, in spawn order.
    pub fn entities(&self, kind: EntityKind) -> &[Entity] {
        self.by_kind.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities(kind).len()
    }

    pub fn first(&self, kind: EntityKind) -> Option<Entity> {
        self.entities(kind).first().copied()
    }

    pub fn clear(&mut self) {
        self.by_kind.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    #[test]
    fn test_insert_remove_count() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let mut index = KindIndex::default();
        index.insert(EntityKind::Obstacle, a);
        index.insert(EntityKind::Obstacle, b);
        assert_eq!(index.entities(EntityKind::Obstacle), &[a, b]);
        assert!(index.remove(EntityKind::Obstacle, a));
        assert!(!index.remove(EntityKind::Obstacle, a));
        assert!(!index.remove(EntityKind::Hazard, b));
        assert_eq!(index.count(EntityKind::Obstacle), 1);
        assert_eq!(index.count(EntityKind::Hazard), 0);
        index.clear();
        assert_eq!(index.first(EntityKind::Obstacle), None);
    }
}
