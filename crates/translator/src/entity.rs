//! # Entity Cache
//!
//! Per-session index of the entities the client currently knows about.

use bridge_core::{JavaEntityId, RuntimeEntityId, Vector3f};
use std::collections::HashMap;

/// An entity as tracked by one session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    /// ID assigned by the Java server
    pub java_id: JavaEntityId,

    /// ID assigned by the bridge for the Bedrock client
    pub runtime_id: RuntimeEntityId,

    /// Last known position
    pub position: Vector3f,
}

impl Entity {
    pub fn new(java_id: JavaEntityId, runtime_id: RuntimeEntityId, position: Vector3f) -> Self {
        Self {
            java_id,
            runtime_id,
            position,
        }
    }
}

/// Entity Cache
///
/// # Purpose
/// Tracks the entities spawned for one session and resolves them by Java ID.
///
/// # Thread Safety
/// Owned by its session and only touched from that session's task, so no
/// internal locking is needed.
#[derive(Debug, Default)]
pub struct EntityCache {
    /// Key: Java entity ID
    entities: HashMap<JavaEntityId, Entity>,
}

impl EntityCache {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entity
    #[inline]
    pub fn add_entity(&mut self, entity: Entity) {
        tracing::trace!("Caching entity {}", entity.java_id.get());
        self.entities.insert(entity.java_id, entity);
    }

    /// Get an entity by its Java ID
    ///
    /// # Returns
    /// `Some(entity)` if found, `None` otherwise
    #[inline]
    pub fn entity_by_java_id(&self, java_id: JavaEntityId) -> Option<&Entity> {
        self.entities.get(&java_id)
    }

    #[inline]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zombie() -> Entity {
        Entity::new(JavaEntityId(7), RuntimeEntityId(100), Vector3f::new(1.0, 2.0, 3.0))
    }

    #[test]
    fn test_cache_creation() {
        let cache = EntityCache::new();
        assert_eq!(cache.entity_count(), 0);
    }

    #[test]
    fn test_add_and_lookup_entity() {
        let mut cache = EntityCache::new();

        cache.add_entity(zombie());
        assert_eq!(cache.entity_count(), 1);
        assert_eq!(cache.entity_by_java_id(JavaEntityId(7)), Some(&zombie()));
        assert!(cache.entity_by_java_id(JavaEntityId(999)).is_none());
    }

    #[test]
    fn test_add_replaces_existing_entity() {
        let mut cache = EntityCache::new();
        cache.add_entity(zombie());

        let moved = Entity::new(JavaEntityId(7), RuntimeEntityId(100), Vector3f::new(5.0, 6.0, 7.0));
        cache.add_entity(moved);

        assert_eq!(cache.entity_count(), 1);
        let found = cache.entity_by_java_id(JavaEntityId(7)).unwrap();
        assert_eq!(found.position, Vector3f::new(5.0, 6.0, 7.0));
    }
}
