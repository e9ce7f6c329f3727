/// Pure game-logic entry points.
///
/// `tick` takes an immutable reference to the current `GameStateInfo` (plus
/// the frame's input and an RNG handle) and returns a brand-new state.  Side
/// effects are limited to the injected RNG.

use rand::Rng;
use tracing::debug;

use crate::assets::Sprites;
use crate::background::NightSky;
use crate::config::GameConfig;
use crate::controller;
use crate::entities::{
    Behavior, Entity, EntityKind, GamePhase, GameStateInfo, Input, ShipExplosion,
};
use crate::geometry::Rect;
use crate::layout::Layout;
use crate::motion::{self, MotionContext, MotionEvent};
use crate::spawn;
use crate::store::{EntityId, EntityStore};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the opening state: life icons, a descending ship and the first swarm.
pub fn init_state(config: &GameConfig, sprites: Sprites, rng: &mut impl Rng) -> GameStateInfo {
    let layout = Layout::new(config.window.width, config.window.height);
    let background = NightSky::new(
        &sprites.night_sky,
        layout.width(),
        config.rules.background_step,
        config.timing.standard(),
    );

    let mut state = GameStateInfo {
        entities: EntityStore::new(),
        ship: None,
        life_icons: Vec::new(),
        phase: GamePhase::Game,
        level: config.rules.starting_level,
        lives: config.rules.lives,
        ship_explosion: ShipExplosion::Idle,
        congratulated: false,
        background,
        layout,
        timing: config.timing.clone(),
        rules: config.rules.clone(),
        sprites,
        frame: 0,
    };

    for index in 0..state.lives {
        let icon = spawn::life_icon(&state.sprites, &state.layout, index);
        let id = state.entities.spawn(icon);
        state.life_icons.push(id);
    }
    controller::create_ship(&mut state);
    controller::create_swarm(&mut state, rng);
    state
}

// ── Queries ──────────────────────────────────────────────────────────────────

pub fn active_spheres(store: &EntityStore) -> usize {
    store
        .iter()
        .filter(|(_, e)| e.kind() == EntityKind::Sphere && e.is_active())
        .count()
}

/// Missiles still in the air: not destroyed and not exploding.
pub fn flying_missiles(store: &EntityStore) -> usize {
    store
        .iter()
        .filter(|(_, e)| {
            e.is_active() && matches!(&e.behavior, Behavior::Missile(m) if !m.is_exploding())
        })
        .count()
}

pub fn count_kind(store: &EntityStore, kind: EntityKind) -> usize {
    store.iter().filter(|(_, e)| e.kind() == kind).count()
}

pub fn ship_entity(state: &GameStateInfo) -> Option<&Entity> {
    state.ship.and_then(|id| state.entities.get(id))
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by `dt` seconds.  All randomness comes through
/// `rng` so callers control determinism (tests use a seeded RNG).
///
/// Order: background, entity updates, phase transition, phase work, reap.
pub fn tick(
    state: &GameStateInfo,
    input: &Input,
    dt: f32,
    rng: &mut impl Rng,
) -> GameStateInfo {
    let mut next = state.clone();
    next.frame += 1;
    next.background.update(dt);

    // Gameplay is frozen once the game has ended.
    if next.phase != GamePhase::End {
        update_entities(&mut next, input, dt);
    }

    let spheres = active_spheres(&next.entities);
    controller::manage_transition(&mut next, spheres);
    controller::manage_state(&mut next, dt, rng);

    reap(&mut next);
    next
}

fn update_entities(state: &mut GameStateInfo, input: &Input, dt: f32) {
    let mut reached_top: Vec<EntityId> = Vec::new();
    let mut finished: Vec<(EntityId, EntityId)> = Vec::new();
    let mut cannon: Option<Rect> = None;

    let ctx = MotionContext {
        input,
        dt,
        layout: &state.layout,
        rules: &state.rules,
    };
    for id in state.entities.ids() {
        let Some(entity) = state.entities.get_mut(id) else {
            continue;
        };
        if entity.destroy {
            continue;
        }
        match motion::update_entity(entity, &ctx) {
            MotionEvent::Idle => {}
            MotionEvent::MissileReachedTop => reached_top.push(id),
            MotionEvent::MissileFinished { explosion } => finished.push((id, explosion)),
        }
        if input.fire && entity.kind() == EntityKind::Ship {
            cannon = Some(entity.display_rect());
        }
    }

    for (missile, explosion) in finished {
        state.entities.mark_destroyed(missile);
        state.entities.mark_destroyed(explosion);
    }
    for missile in reached_top {
        controller::ignite_missile(state, missile);
    }

    if let Some(ship) = cannon {
        if flying_missiles(&state.entities) < state.rules.max_missiles {
            let missile = spawn::missile_from(&state.sprites, &state.layout, &state.timing, ship);
            let id = state.entities.spawn(missile);
            debug!(?id, "missile fired");
        }
    }
}

/// End-of-frame sweep: drop flagged entities and forget ids that died with them.
fn reap(state: &mut GameStateInfo) {
    let removed = state.entities.reap();
    if removed > 0 {
        debug!(removed, frame = state.frame, "reaped entities");
    }
    if let Some(id) = state.ship {
        if !state.entities.contains(id) {
            state.ship = None;
        }
    }
    let entities = &state.entities;
    state.life_icons.retain(|id| entities.contains(*id));
}
