/// Entity factories. Each takes exactly the collaborators it needs; nothing
/// is looked up from shared state.

use glam::Vec2;
use rand::Rng;

use crate::animation::{AnimationTimer, SheetAnimation};
use crate::assets::{self, FontInfo, ImageInfo, Sprites};
use crate::config::{RulesConfig, TimingConfig};
use crate::entities::{
    Behavior, Entity, MissileMode, MissileState, ShipState, SphereState, Visual,
};
use crate::geometry::{heading, normalize_degrees, Rect};
use crate::layout::{fit_scale, Layout};
use crate::text;

const RIGHT_ANGLE: u32 = 90;
/// Starting headings stay this far away from the axes (degrees).
const MIN_START_ANGLE: u32 = 15;
const MAX_START_ANGLE: u32 = 75;

fn visual(
    image_name: &'static str,
    image: &ImageInfo,
    position: Vec2,
    zone: Vec2,
    animation: Option<SheetAnimation>,
) -> Visual {
    let frame_size = image.frame_size();
    Visual {
        image: image_name,
        position,
        frame_size,
        scale: fit_scale(frame_size, zone),
        animation,
    }
}

fn sheet(image: &ImageInfo, interval: f32) -> SheetAnimation {
    SheetAnimation::new(image.columns, image.rows, interval)
}

// ── Ship ──────────────────────────────────────────────────────────────────────

/// A fresh ship centred on the spawn point, about to descend.
pub fn ship(sprites: &Sprites, layout: &Layout, timing: &TimingConfig) -> Entity {
    let mut animation = sheet(&sprites.ship, timing.slow());
    animation.lock_row(Some(0));
    let mut v = visual(
        assets::SPACESHIP,
        &sprites.ship,
        Vec2::ZERO,
        layout.ship_zone,
        Some(animation),
    );
    let size = v.size();
    v.position = ship_start_position(sprites, layout);
    Entity::new(
        v,
        Behavior::Ship(ShipState {
            descending: true,
            resting_y: layout.height() - size.y,
            motion: AnimationTimer::new(timing.standard()),
            moving: false,
        }),
    )
}

/// Where a new ship starts (top-left corner), before any descent.
pub fn ship_start_position(sprites: &Sprites, layout: &Layout) -> Vec2 {
    let size = sprites.ship.frame_size() * fit_scale(sprites.ship.frame_size(), layout.ship_zone);
    layout.ship_spawn - size / 2.0
}

// ── Missiles ──────────────────────────────────────────────────────────────────

pub fn missile(
    sprites: &Sprites,
    layout: &Layout,
    timing: &TimingConfig,
    position: Vec2,
) -> Entity {
    Entity::new(
        visual(
            assets::MISSILE,
            &sprites.missile,
            position,
            layout.missile_zone,
            Some(sheet(&sprites.missile, timing.fast())),
        ),
        Behavior::Missile(MissileState {
            motion: AnimationTimer::new(timing.standard()),
            mode: MissileMode::Flying,
        }),
    )
}

/// A missile leaving the ship's cannon: horizontally centred, a quarter of
/// the ship's height above its top edge.
pub fn missile_from(
    sprites: &Sprites,
    layout: &Layout,
    timing: &TimingConfig,
    ship: Rect,
) -> Entity {
    let frame = sprites.missile.frame_size();
    let size = frame * fit_scale(frame, layout.missile_zone);
    let position = Vec2::new(
        ship.x + ship.width / 2.0 - size.x / 2.0,
        ship.y - ship.height / 4.0,
    );
    missile(sprites, layout, timing, position)
}

// ── Spheres ───────────────────────────────────────────────────────────────────

pub fn sphere(
    sprites: &Sprites,
    layout: &Layout,
    timing: &TimingConfig,
    position: Vec2,
    angle: f32,
) -> Entity {
    let angle = normalize_degrees(angle);
    Entity::new(
        visual(
            assets::SPHERE,
            &sprites.sphere,
            position,
            layout.sphere_zone,
            Some(sheet(&sprites.sphere, timing.fast())),
        ),
        Behavior::Sphere(SphereState {
            angle,
            direction: heading(angle),
            motion: AnimationTimer::new(timing.standard()),
        }),
    )
}

/// A sphere somewhere in the upper half of the field, heading diagonally.
pub fn random_sphere(
    sprites: &Sprites,
    layout: &Layout,
    timing: &TimingConfig,
    rng: &mut impl Rng,
) -> Entity {
    let frame = sprites.sphere.frame_size();
    let size = frame * fit_scale(frame, layout.sphere_zone);
    let margins = layout.margins(size);
    let x = rng.gen_range(0.0..margins.right.max(1.0));
    let y = rng.gen_range(0.0..(margins.bottom / 2.0).max(1.0));
    let quadrant = rng.gen_range(0..4u32);
    let tilt = rng.gen_range(MIN_START_ANGLE..MAX_START_ANGLE);
    let angle = (quadrant * RIGHT_ANGLE + tilt) as f32;
    sphere(sprites, layout, timing, Vec2::new(x, y), angle)
}

// ── Explosions, icons, text ───────────────────────────────────────────────────

/// An explosion sheet fitted into `zone` and centred on `center`.
pub fn explosion(sprites: &Sprites, timing: &TimingConfig, center: Vec2, zone: Vec2) -> Entity {
    let mut v = visual(
        assets::EXPLOSION,
        &sprites.explosion,
        Vec2::ZERO,
        zone,
        Some(sheet(&sprites.explosion, timing.slow())),
    );
    v.position = center - v.size() / 2.0;
    Entity::new(v, Behavior::Explosion)
}

/// Life icon `index`, counted from the right edge.
pub fn life_icon(sprites: &Sprites, layout: &Layout, index: u32) -> Entity {
    let zone = layout.lives_zone;
    let position = Vec2::new(layout.width() - (index + 1) as f32 * zone.x, zone.y);
    Entity::new(
        visual(assets::SHIP_ICON, &sprites.ship_icon, position, zone, None),
        Behavior::LifeIcon,
    )
}

pub fn banner(font: &FontInfo, layout: &Layout, rules: &RulesConfig, message: String) -> Entity {
    let text_size = font.measure(&message);
    let scale = text::fit_scale(text_size, layout.display, rules.text_margin);
    let position = text::centered_origin(text_size, scale, layout.display);
    Entity::new(
        Visual {
            image: assets::FONT,
            position,
            frame_size: text_size,
            scale,
            animation: None,
        },
        Behavior::Text(message),
    )
}
