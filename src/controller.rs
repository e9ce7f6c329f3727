/// The five-phase game controller.
///
/// Every frame runs [`manage_transition`] (decide the phase) followed by
/// [`manage_state`] (do the phase's work). Entities are only ever flagged
/// here; removal happens in the reap at the end of the frame.

use glam::Vec2;
use rand::Rng;
use tracing::{debug, info};

use crate::animation::ExplosionClock;
use crate::collision;
use crate::entities::{Behavior, EntityKind, GamePhase, GameStateInfo, MissileMode, ShipExplosion};
use crate::spawn;
use crate::store::EntityId;
use crate::text;

// ── Transitions ───────────────────────────────────────────────────────────────

pub fn manage_transition(state: &mut GameStateInfo, active_spheres: usize) {
    match state.phase {
        GamePhase::Game => transition_from_game(state, active_spheres),
        GamePhase::ShipDestruction => transition_from_ship_destruction(state),
        GamePhase::NewShip => transition_from_new_ship(state, active_spheres),
        GamePhase::NewSwarm => enter(state, GamePhase::Game),
        GamePhase::End => {}
    }
}

fn enter(state: &mut GameStateInfo, phase: GamePhase) {
    if state.phase != phase {
        info!(from = ?state.phase, to = ?phase, level = state.level, lives = state.lives, "phase change");
        state.phase = phase;
    }
}

fn level_up(state: &mut GameStateInfo) {
    state.level += 1;
    info!(level = state.level, "swarm cleared");
}

fn transition_from_game(state: &mut GameStateInfo, active_spheres: usize) {
    if let ShipExplosion::Signalled { at } = state.ship_explosion {
        start_ship_explosion(state, at);
        enter(state, GamePhase::ShipDestruction);
    } else if active_spheres == 0 {
        level_up(state);
        enter(state, GamePhase::NewSwarm);
    }
}

fn transition_from_ship_destruction(state: &mut GameStateInfo) {
    if state.ship_explosion.is_active() {
        return;
    }
    state.lives = state.lives.saturating_sub(1);
    if let Some(icon) = state.life_icons.pop() {
        state.entities.mark_destroyed(icon);
    }
    info!(lives = state.lives, "ship lost");
    if state.lives > 0 {
        enter(state, GamePhase::NewShip);
    } else {
        enter(state, GamePhase::End);
    }
}

fn transition_from_new_ship(state: &mut GameStateInfo, active_spheres: usize) {
    if active_spheres == 0 {
        level_up(state);
    } else {
        let stragglers: Vec<EntityId> = state
            .entities
            .iter()
            .filter(|(_, e)| e.kind() == EntityKind::Sphere && e.is_active())
            .map(|(id, _)| id)
            .collect();
        debug!(count = stragglers.len(), "clearing leftover swarm");
        for id in stragglers {
            state.entities.mark_destroyed(id);
        }
    }
    enter(state, GamePhase::NewSwarm);
}

// ── Phase work ────────────────────────────────────────────────────────────────

pub fn manage_state(state: &mut GameStateInfo, dt: f32, rng: &mut impl Rng) {
    match state.phase {
        GamePhase::Game => manage_collisions(state),
        GamePhase::ShipDestruction => manage_ship_explosion(state, dt),
        GamePhase::NewShip => create_ship(state),
        GamePhase::NewSwarm => create_swarm(state, rng),
        GamePhase::End => congratulate(state),
    }
}

pub fn manage_collisions(state: &mut GameStateInfo) {
    for hit in collision::missile_hits(&state.entities) {
        debug!(missile = ?hit.missile, spheres = hit.spheres.len(), "missile hit");
        for sphere in &hit.spheres {
            state.entities.mark_destroyed(*sphere);
        }
        ignite_missile(state, hit.missile);
    }

    let Some(sphere) = collision::ship_hit(&state.entities, state.ship) else {
        return;
    };
    state.entities.mark_destroyed(sphere);
    let wreck = state.ship.and_then(|id| state.entities.get_mut(id)).map(|ship| {
        ship.destroy = true;
        ship.display_rect().center()
    });
    if let Some(at) = wreck {
        info!(x = at.x, y = at.y, "ship hit by sphere");
        state.ship_explosion = ShipExplosion::Signalled { at };
    }
}

/// Turn a flying missile into its explosion: hidden, frozen, and owning a
/// freshly spawned explosion sprite. Igniting twice is a no-op.
pub fn ignite_missile(state: &mut GameStateInfo, missile: EntityId) {
    let center = match state.entities.get(missile) {
        Some(entity) => match &entity.behavior {
            Behavior::Missile(m) if !m.is_exploding() => entity.display_rect().center(),
            _ => return,
        },
        None => return,
    };

    let explosion = spawn::explosion(
        &state.sprites,
        &state.timing,
        center,
        state.layout.missile_explosion_zone,
    );
    let explosion_id = state.entities.spawn(explosion);
    let clock = ExplosionClock::new(state.sprites.explosion.frame_count(), state.timing.slow());

    if let Some(entity) = state.entities.get_mut(missile) {
        entity.visible = false;
        if let Behavior::Missile(m) = &mut entity.behavior {
            m.mode = MissileMode::Exploding {
                explosion: explosion_id,
                clock,
            };
        }
    }
    debug!(?missile, "missile ignited");
}

fn start_ship_explosion(state: &mut GameStateInfo, at: Vec2) {
    let explosion = spawn::explosion(&state.sprites, &state.timing, at, state.layout.ship_zone);
    let id = state.entities.spawn(explosion);
    state.ship_explosion = ShipExplosion::Running {
        explosion: id,
        clock: ExplosionClock::new(state.sprites.explosion.frame_count(), state.timing.slow()),
    };
}

fn manage_ship_explosion(state: &mut GameStateInfo, dt: f32) {
    let finished = match &mut state.ship_explosion {
        ShipExplosion::Running { explosion, clock } => {
            if clock.update(dt) {
                Some(*explosion)
            } else {
                None
            }
        }
        _ => None,
    };
    if let Some(explosion) = finished {
        state.entities.mark_destroyed(explosion);
        state.ship_explosion = ShipExplosion::Idle;
        debug!("ship explosion over");
    }
}

pub fn create_ship(state: &mut GameStateInfo) {
    if let Some(old) = state.ship.take() {
        state.entities.mark_destroyed(old);
    }
    let ship = spawn::ship(&state.sprites, &state.layout, &state.timing);
    state.ship = Some(state.entities.spawn(ship));
    info!(lives = state.lives, "new ship");
}

pub fn create_swarm(state: &mut GameStateInfo, rng: &mut impl Rng) {
    for _ in 0..state.level {
        let sphere = spawn::random_sphere(&state.sprites, &state.layout, &state.timing, rng);
        state.entities.spawn(sphere);
    }
    info!(level = state.level, spheres = state.level, "new swarm");
}

fn congratulate(state: &mut GameStateInfo) {
    if state.congratulated {
        return;
    }
    let message = text::congratulations(state.level);
    info!(level = state.level, "game over");
    let banner = spawn::banner(&state.sprites.font, &state.layout, &state.rules, message);
    state.entities.spawn(banner);
    state.congratulated = true;
}
