use as2d::assets::{Catalog, Sprites};
use as2d::collision::{missile_hits, ship_hit};
use as2d::compute::init_state;
use as2d::config::GameConfig;
use as2d::controller::{ignite_missile, manage_collisions};
use as2d::entities::{Behavior, EntityKind, GameStateInfo, ShipExplosion};
use as2d::store::EntityId;
use as2d::spawn;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn make_state() -> GameStateInfo {
    let sprites = Sprites::load(&Catalog::builtin()).unwrap();
    let mut state = init_state(&GameConfig::default(), sprites, &mut StdRng::seed_from_u64(42));
    let spheres: Vec<EntityId> = state
        .entities
        .iter()
        .filter(|(_, e)| e.kind() == EntityKind::Sphere)
        .map(|(id, _)| id)
        .collect();
    for id in spheres {
        state.entities.remove(id);
    }
    state
}

fn place_sphere(state: &mut GameStateInfo, x: f32, y: f32) -> EntityId {
    let sphere = spawn::sphere(
        &state.sprites,
        &state.layout,
        &state.timing,
        Vec2::new(x, y),
        45.0,
    );
    state.entities.spawn(sphere)
}

fn place_missile(state: &mut GameStateInfo, x: f32, y: f32) -> EntityId {
    let missile = spawn::missile(&state.sprites, &state.layout, &state.timing, Vec2::new(x, y));
    state.entities.spawn(missile)
}

fn is_exploding(state: &GameStateInfo, id: EntityId) -> bool {
    match &state.entities.get(id).unwrap().behavior {
        Behavior::Missile(m) => m.is_exploding(),
        other => panic!("not a missile: {:?}", other),
    }
}

// ── Detection ─────────────────────────────────────────────────────────────────

#[test]
fn missile_overlapping_sphere_is_a_hit() {
    let mut state = make_state();
    let sphere = place_sphere(&mut state, 100.0, 100.0);
    let missile = place_missile(&mut state, 110.0, 110.0);
    let hits = missile_hits(&state.entities);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].missile, missile);
    assert_eq!(hits[0].spheres, vec![sphere]);
}

#[test]
fn distant_missile_misses() {
    let mut state = make_state();
    place_sphere(&mut state, 100.0, 100.0);
    place_missile(&mut state, 500.0, 100.0);
    assert!(missile_hits(&state.entities).is_empty());
}

#[test]
fn missile_touching_sphere_edge_misses() {
    let mut state = make_state();
    let sphere = place_sphere(&mut state, 100.0, 100.0);
    let right = state.entities.get(sphere).unwrap().display_rect().right();
    place_missile(&mut state, right, 100.0);
    assert!(missile_hits(&state.entities).is_empty());
}

#[test]
fn one_missile_can_take_out_two_spheres() {
    let mut state = make_state();
    place_sphere(&mut state, 100.0, 100.0);
    place_sphere(&mut state, 110.0, 120.0);
    place_missile(&mut state, 120.0, 110.0);
    let hits = missile_hits(&state.entities);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].spheres.len(), 2);
}

#[test]
fn exploding_missile_is_not_tested() {
    let mut state = make_state();
    place_sphere(&mut state, 100.0, 100.0);
    let missile = place_missile(&mut state, 110.0, 110.0);
    ignite_missile(&mut state, missile);
    assert!(missile_hits(&state.entities).is_empty());
}

#[test]
fn ship_hit_requires_overlap() {
    let mut state = make_state();
    assert_eq!(ship_hit(&state.entities, state.ship), None);
    let ship_rect = state.entities.get(state.ship.unwrap()).unwrap().display_rect();
    let sphere = place_sphere(&mut state, ship_rect.x + 10.0, ship_rect.y + 10.0);
    assert_eq!(ship_hit(&state.entities, state.ship), Some(sphere));
    assert_eq!(ship_hit(&state.entities, None), None);
}

#[test]
fn flagged_sphere_cannot_hit_ship() {
    let mut state = make_state();
    let ship_rect = state.entities.get(state.ship.unwrap()).unwrap().display_rect();
    let sphere = place_sphere(&mut state, ship_rect.x + 10.0, ship_rect.y + 10.0);
    state.entities.mark_destroyed(sphere);
    assert_eq!(ship_hit(&state.entities, state.ship), None);
}

// ── Resolution ────────────────────────────────────────────────────────────────

#[test]
fn hit_flags_sphere_and_ignites_missile() {
    let mut state = make_state();
    let sphere = place_sphere(&mut state, 100.0, 100.0);
    let missile = place_missile(&mut state, 110.0, 110.0);
    manage_collisions(&mut state);

    assert!(!state.entities.get(sphere).unwrap().is_active());
    assert!(is_exploding(&state, missile));
    assert!(!state.entities.get(missile).unwrap().visible);
    assert_eq!(
        state
            .entities
            .iter()
            .filter(|(_, e)| e.kind() == EntityKind::Explosion)
            .count(),
        1
    );
}

#[test]
fn two_missiles_on_one_sphere_both_explode() {
    let mut state = make_state();
    place_sphere(&mut state, 100.0, 100.0);
    let a = place_missile(&mut state, 105.0, 105.0);
    let b = place_missile(&mut state, 125.0, 105.0);
    manage_collisions(&mut state);
    assert!(is_exploding(&state, a));
    assert!(is_exploding(&state, b));
}

#[test]
fn igniting_twice_spawns_one_explosion() {
    let mut state = make_state();
    let missile = place_missile(&mut state, 300.0, 100.0);
    ignite_missile(&mut state, missile);
    ignite_missile(&mut state, missile);
    assert_eq!(
        state
            .entities
            .iter()
            .filter(|(_, e)| e.kind() == EntityKind::Explosion)
            .count(),
        1
    );
}

#[test]
fn ship_collision_signals_explosion_at_ship_centre() {
    let mut state = make_state();
    let ship_id = state.ship.unwrap();
    let ship_rect = state.entities.get(ship_id).unwrap().display_rect();
    let sphere = place_sphere(&mut state, ship_rect.x + 10.0, ship_rect.y + 10.0);
    manage_collisions(&mut state);

    assert!(!state.entities.get(ship_id).unwrap().is_active());
    assert!(!state.entities.get(sphere).unwrap().is_active());
    assert_eq!(
        state.ship_explosion,
        ShipExplosion::Signalled {
            at: ship_rect.center()
        }
    );
}

#[test]
fn sphere_shot_down_cannot_also_hit_ship() {
    let mut state = make_state();
    let ship_rect = state.entities.get(state.ship.unwrap()).unwrap().display_rect();
    place_sphere(&mut state, ship_rect.x + 10.0, ship_rect.y - 40.0);
    place_missile(&mut state, ship_rect.x + 20.0, ship_rect.y - 30.0);
    manage_collisions(&mut state);
    assert_eq!(state.ship_explosion, ShipExplosion::Idle);
    assert!(state.entities.get(state.ship.unwrap()).unwrap().is_active());
}
