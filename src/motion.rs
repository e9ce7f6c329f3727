/// Per-entity update: sheet animation plus the motion policy for each kind.
///
/// Everything here works on a single entity. Anything that touches other
/// entities (spawning a missile, igniting an explosion) is reported back as
/// a [`MotionEvent`] for the caller to apply.

use glam::Vec2;

use crate::config::RulesConfig;
use crate::entities::{
    Behavior, Entity, Input, MissileMode, MissileState, ShipState, SphereState, Visual,
};
use crate::geometry::{heading, reflect_off_floor, reflect_off_side};
use crate::layout::Layout;
use crate::store::EntityId;

pub struct MotionContext<'a> {
    pub input: &'a Input,
    pub dt: f32,
    pub layout: &'a Layout,
    pub rules: &'a RulesConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionEvent {
    Idle,
    /// A flying missile touched the top margin and must ignite.
    MissileReachedTop,
    /// An exploding missile finished; it and its explosion must go.
    MissileFinished { explosion: EntityId },
}

/// Advance one entity by `ctx.dt`.
pub fn update_entity(entity: &mut Entity, ctx: &MotionContext) -> MotionEvent {
    let Entity {
        visual, behavior, ..
    } = entity;

    match behavior {
        Behavior::Ship(ship) => {
            animate(visual, ctx.dt);
            update_ship(visual, ship, ctx);
            MotionEvent::Idle
        }
        Behavior::Missile(missile) => update_missile(visual, missile, ctx),
        Behavior::Sphere(sphere) => {
            animate(visual, ctx.dt);
            update_sphere(visual, sphere, ctx);
            MotionEvent::Idle
        }
        Behavior::Explosion => {
            animate(visual, ctx.dt);
            MotionEvent::Idle
        }
        Behavior::LifeIcon | Behavior::Text(_) => MotionEvent::Idle,
    }
}

pub fn animate(visual: &mut Visual, dt: f32) {
    if let Some(animation) = visual.animation.as_mut() {
        animation.update(dt);
    }
}

// ── Ship ──────────────────────────────────────────────────────────────────────

pub fn update_ship(visual: &mut Visual, ship: &mut ShipState, ctx: &MotionContext) {
    if !ship.motion.advance(ctx.dt) {
        return;
    }

    if ship.descending {
        visual.position.y += ctx.rules.ship_step;
        if visual.position.y >= ship.resting_y {
            visual.position.y = ship.resting_y;
            ship.descending = false;
        }
    }

    let direction = ctx.input.right as i32 - ctx.input.left as i32;
    let previous_x = visual.position.x;
    let margins = ctx.layout.margins(visual.size());
    visual.position.x = (previous_x + direction as f32 * ctx.rules.ship_step)
        .max(margins.left)
        .min(margins.right);

    ship.moving = visual.position.x != previous_x;
    if let Some(animation) = visual.animation.as_mut() {
        animation.lock_row(Some(ship.moving as u16));
    }
}

// ── Missile ───────────────────────────────────────────────────────────────────

pub fn update_missile(
    visual: &mut Visual,
    missile: &mut MissileState,
    ctx: &MotionContext,
) -> MotionEvent {
    match &mut missile.mode {
        MissileMode::Exploding { explosion, clock } => {
            if clock.update(ctx.dt) {
                MotionEvent::MissileFinished {
                    explosion: *explosion,
                }
            } else {
                MotionEvent::Idle
            }
        }
        MissileMode::Flying => {
            animate(visual, ctx.dt);
            if !missile.motion.advance(ctx.dt) {
                return MotionEvent::Idle;
            }
            visual.position.y -= ctx.rules.missile_step;
            let faster = (missile.motion.interval() - ctx.rules.missile_acceleration)
                .max(ctx.rules.min_missile_interval);
            missile.motion.set_interval(faster);

            let margins = ctx.layout.margins(visual.size());
            if visual.position.y <= margins.top {
                MotionEvent::MissileReachedTop
            } else {
                MotionEvent::Idle
            }
        }
    }
}

// ── Sphere ────────────────────────────────────────────────────────────────────

pub fn update_sphere(visual: &mut Visual, sphere: &mut SphereState, ctx: &MotionContext) {
    if !sphere.motion.advance(ctx.dt) {
        return;
    }
    visual.position += sphere.direction * ctx.rules.sphere_speed;
    bounce(visual, sphere, ctx.layout);
}

/// Reflect the heading off any margin the sphere has reached while moving
/// outward, then pull it back inside the field.
pub fn bounce(visual: &mut Visual, sphere: &mut SphereState, layout: &Layout) {
    let margins = layout.margins(visual.size());
    let Vec2 { x, y } = visual.position;
    let direction = sphere.direction;
    let mut reflected = false;

    if (x <= margins.left && direction.x < 0.0) || (x >= margins.right && direction.x > 0.0) {
        sphere.angle = reflect_off_side(sphere.angle);
        reflected = true;
    }
    if (y <= margins.top && direction.y < 0.0) || (y >= margins.bottom && direction.y > 0.0) {
        sphere.angle = reflect_off_floor(sphere.angle);
        reflected = true;
    }

    if reflected {
        sphere.direction = heading(sphere.angle);
    }
    visual.position.x = x.max(margins.left).min(margins.right);
    visual.position.y = y.max(margins.top).min(margins.bottom);
}
