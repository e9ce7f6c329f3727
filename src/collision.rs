/// Collision detection between display rectangles.
///
/// Detection is pure: it reads the store and reports which pairs overlap.
/// Applying the outcome (flagging, igniting) is left to the controller so
/// every pair found in a frame is handled independently of the others.

use crate::entities::{Behavior, Entity, EntityKind};
use crate::store::{EntityId, EntityStore};

/// A flying missile and every sphere its rectangle overlaps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissileHit {
    pub missile: EntityId,
    pub spheres: Vec<EntityId>,
}

fn spheres(store: &EntityStore) -> impl Iterator<Item = (EntityId, &Entity)> + '_ {
    store
        .iter()
        .filter(|(_, entity)| entity.kind() == EntityKind::Sphere)
}

/// Missile vs sphere. Exploding missiles are never tested, so a missile can
/// only score once.
pub fn missile_hits(store: &EntityStore) -> Vec<MissileHit> {
    store
        .iter()
        .filter(|(_, entity)| {
            entity.is_active()
                && matches!(&entity.behavior, Behavior::Missile(m) if !m.is_exploding())
        })
        .filter_map(|(missile_id, missile)| {
            let rect = missile.display_rect();
            let hit: Vec<EntityId> = spheres(store)
                .filter(|(_, sphere)| rect.intersects(&sphere.display_rect()))
                .map(|(sphere_id, _)| sphere_id)
                .collect();
            if hit.is_empty() {
                None
            } else {
                Some(MissileHit {
                    missile: missile_id,
                    spheres: hit,
                })
            }
        })
        .collect()
}

/// Ship vs sphere: the first live sphere overlapping a live ship, if any.
pub fn ship_hit(store: &EntityStore, ship: Option<EntityId>) -> Option<EntityId> {
    let ship = ship.and_then(|id| store.get(id)).filter(|e| e.is_active())?;
    let rect = ship.display_rect();
    spheres(store)
        .find(|(_, sphere)| sphere.is_active() && rect.intersects(&sphere.display_rect()))
        .map(|(id, _)| id)
}
