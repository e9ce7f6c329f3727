/// Game entity types and the session state. Plain data; behaviour lives in
/// `motion`, `controller` and `compute`.

use crate::animation::{AnimationTimer, ExplosionClock, SheetAnimation};
use crate::assets::Sprites;
use crate::background::NightSky;
use crate::config::{RulesConfig, TimingConfig};
use glam::Vec2;

use crate::geometry::Rect;
use crate::layout::Layout;
use crate::store::{EntityId, EntityStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Game,
    ShipDestruction,
    NewShip,
    NewSwarm,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Ship,
    Missile,
    Sphere,
    Explosion,
    LifeIcon,
    Text,
}

// ── Visual component ──────────────────────────────────────────────────────────

/// What every entity has in common: where it is, how big it is drawn, and
/// which sheet frame is showing.
#[derive(Clone, Debug, PartialEq)]
pub struct Visual {
    pub image: &'static str,
    /// Top-left corner in world pixels.
    pub position: Vec2,
    /// Size of a single sheet frame, unscaled.
    pub frame_size: Vec2,
    pub scale: f32,
    pub animation: Option<SheetAnimation>,
}

impl Visual {
    pub fn size(&self) -> Vec2 {
        self.frame_size * self.scale
    }

    /// On-screen box, used for both drawing and collision.
    pub fn display_rect(&self) -> Rect {
        Rect::at(self.position, self.size())
    }
}

// ── Behaviours ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct ShipState {
    /// True until the ship has slid down to `resting_y`.
    pub descending: bool,
    pub resting_y: f32,
    pub motion: AnimationTimer,
    pub moving: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MissileMode {
    Flying,
    /// Hidden, frozen, and waiting for its explosion to play out.
    Exploding {
        explosion: EntityId,
        clock: ExplosionClock,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct MissileState {
    pub motion: AnimationTimer,
    pub mode: MissileMode,
}

impl MissileState {
    pub fn is_exploding(&self) -> bool {
        matches!(self.mode, MissileMode::Exploding { .. })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SphereState {
    /// Heading in degrees, always within [0, 360).
    pub angle: f32,
    /// Unit vector matching `angle`.
    pub direction: Vec2,
    pub motion: AnimationTimer,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Behavior {
    Ship(ShipState),
    Missile(MissileState),
    Sphere(SphereState),
    Explosion,
    LifeIcon,
    Text(String),
}

impl Behavior {
    pub fn kind(&self) -> EntityKind {
        match self {
            Behavior::Ship(_) => EntityKind::Ship,
            Behavior::Missile(_) => EntityKind::Missile,
            Behavior::Sphere(_) => EntityKind::Sphere,
            Behavior::Explosion => EntityKind::Explosion,
            Behavior::LifeIcon => EntityKind::LifeIcon,
            Behavior::Text(_) => EntityKind::Text,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub visual: Visual,
    pub behavior: Behavior,
    pub visible: bool,
    /// Set during the logic pass; the entity is reaped at the end of the frame.
    pub destroy: bool,
}

impl Entity {
    pub fn new(visual: Visual, behavior: Behavior) -> Self {
        Entity {
            visual,
            behavior,
            visible: true,
            destroy: false,
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.behavior.kind()
    }

    pub fn display_rect(&self) -> Rect {
        self.visual.display_rect()
    }

    pub fn is_active(&self) -> bool {
        !self.destroy
    }
}

// ── Per-frame input ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Input {
    pub left: bool,
    pub right: bool,
    /// Fire key newly pressed this frame.
    pub fire: bool,
}

// ── Ship explosion signal ─────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum ShipExplosion {
    Idle,
    /// Raised by collision detection; consumed by the next transition.
    Signalled { at: Vec2 },
    Running {
        explosion: EntityId,
        clock: ExplosionClock,
    },
}

impl ShipExplosion {
    pub fn is_active(&self) -> bool {
        !matches!(self, ShipExplosion::Idle)
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire session.  Cloneable so `tick` can return a new copy without
/// mutating the original.
#[derive(Clone, Debug)]
pub struct GameStateInfo {
    pub entities: EntityStore,
    pub ship: Option<EntityId>,
    /// Remaining life icons, left-most last.
    pub life_icons: Vec<EntityId>,
    pub phase: GamePhase,
    pub level: u32,
    pub lives: u32,
    pub ship_explosion: ShipExplosion,
    /// Set once the end banner has been spawned.
    pub congratulated: bool,
    pub background: NightSky,
    pub layout: Layout,
    pub timing: TimingConfig,
    pub rules: RulesConfig,
    pub sprites: Sprites,
    pub frame: u64,
}
