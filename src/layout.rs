/// Proportional screen zones, all derived from the window size.

use glam::Vec2;

use crate::geometry::Rect;

/// Side of the square zone missiles and their explosions are fitted into.
const MISSILE_ZONE: f32 = 40.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub display: Rect,
    pub ship_zone: Vec2,
    pub sphere_zone: Vec2,
    pub lives_zone: Vec2,
    pub missile_zone: Vec2,
    pub missile_explosion_zone: Vec2,
    /// Where a new ship is centred before it starts descending.
    pub ship_spawn: Vec2,
}

/// Movement bounds for the top-left corner of an entity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Layout {
    pub fn new(width: f32, height: f32) -> Self {
        Layout {
            display: Rect::new(0.0, 0.0, width, height),
            ship_zone: Vec2::new(width / 5.0, height / 5.0),
            sphere_zone: Vec2::new(width / 10.0, height / 10.0),
            lives_zone: Vec2::new(width / 20.0, height / 20.0),
            missile_zone: Vec2::new(MISSILE_ZONE, MISSILE_ZONE),
            missile_explosion_zone: Vec2::new(MISSILE_ZONE, MISSILE_ZONE),
            ship_spawn: Vec2::new(width / 2.0, height / 4.0 * 3.0),
        }
    }

    pub fn width(&self) -> f32 {
        self.display.width
    }

    pub fn height(&self) -> f32 {
        self.display.height
    }

    pub fn margins(&self, size: Vec2) -> Margins {
        Margins {
            left: 0.0,
            top: 0.0,
            right: (self.display.width - size.x).max(0.0),
            bottom: (self.display.height - size.y).max(0.0),
        }
    }
}

/// Largest uniform scale that fits a `frame` inside a `zone`.
pub fn fit_scale(frame: Vec2, zone: Vec2) -> f32 {
    if frame.x <= 0.0 || frame.y <= 0.0 {
        return 1.0;
    }
    (zone.x / frame.x).min(zone.y / frame.y)
}
