/// Named image and font metadata, and the lookup the game resolves them
/// through. Only dimensions and sheet layout matter to the game; the pixels
/// belong to whatever draws them.

use std::collections::HashMap;

use crate::error::GameError;
use glam::Vec2;

pub const SPACESHIP: &str = "Spaceship";
pub const SPHERE: &str = "Sphere";
pub const MISSILE: &str = "Missile";
pub const EXPLOSION: &str = "Explosion";
pub const SHIP_ICON: &str = "ShipIcon";
pub const NIGHT_SKY: &str = "NightSky";
pub const FONT: &str = "Arial";

/// Size of an image and how it is cut into animation frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub columns: u16,
    pub rows: u16,
}

impl ImageInfo {
    pub const fn new(width: u32, height: u32, columns: u16, rows: u16) -> Self {
        ImageInfo { width, height, columns, rows }
    }

    pub fn frame_size(&self) -> Vec2 {
        Vec2::new(
            self.width as f32 / self.columns.max(1) as f32,
            self.height as f32 / self.rows.max(1) as f32,
        )
    }

    pub fn frame_count(&self) -> u32 {
        self.columns as u32 * self.rows as u32
    }
}

/// Monospaced font metrics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontInfo {
    pub glyph_width: f32,
    pub line_height: f32,
}

impl FontInfo {
    pub fn measure(&self, text: &str) -> Vec2 {
        Vec2::new(
            text.chars().count() as f32 * self.glyph_width,
            self.line_height,
        )
    }
}

/// Resolves asset names to their metadata.
pub trait ResourceLookup {
    fn find_image(&self, name: &str) -> Result<ImageInfo, GameError>;
    fn find_font(&self, name: &str) -> Result<FontInfo, GameError>;
}

/// In-memory asset registry.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    images: HashMap<String, ImageInfo>,
    fonts: HashMap<String, FontInfo>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    pub fn with_image(mut self, name: &str, info: ImageInfo) -> Self {
        self.images.insert(name.to_string(), info);
        self
    }

    pub fn with_font(mut self, name: &str, info: FontInfo) -> Self {
        self.fonts.insert(name.to_string(), info);
        self
    }

    /// Everything the game needs, with the sheet layouts it was drawn for.
    pub fn builtin() -> Self {
        Catalog::new()
            .with_image(SPACESHIP, ImageInfo::new(400, 200, 4, 2))
            .with_image(SPHERE, ImageInfo::new(640, 320, 8, 4))
            .with_image(MISSILE, ImageInfo::new(400, 40, 25, 1))
            .with_image(EXPLOSION, ImageInfo::new(320, 256, 5, 4))
            .with_image(SHIP_ICON, ImageInfo::new(64, 64, 1, 1))
            .with_image(NIGHT_SKY, ImageInfo::new(1400, 840, 1, 1))
            .with_font(
                FONT,
                FontInfo {
                    glyph_width: 12.0,
                    line_height: 24.0,
                },
            )
    }
}

impl ResourceLookup for Catalog {
    fn find_image(&self, name: &str) -> Result<ImageInfo, GameError> {
        self.images
            .get(name)
            .copied()
            .ok_or_else(|| GameError::MissingAsset(name.to_string()))
    }

    fn find_font(&self, name: &str) -> Result<FontInfo, GameError> {
        self.fonts
            .get(name)
            .copied()
            .ok_or_else(|| GameError::MissingAsset(name.to_string()))
    }
}

/// Every asset the game uses, resolved once up front.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprites {
    pub ship: ImageInfo,
    pub sphere: ImageInfo,
    pub missile: ImageInfo,
    pub explosion: ImageInfo,
    pub ship_icon: ImageInfo,
    pub night_sky: ImageInfo,
    pub font: FontInfo,
}

impl Sprites {
    pub fn load(lookup: &impl ResourceLookup) -> Result<Self, GameError> {
        Ok(Sprites {
            ship: lookup.find_image(SPACESHIP)?,
            sphere: lookup.find_image(SPHERE)?,
            missile: lookup.find_image(MISSILE)?,
            explosion: lookup.find_image(EXPLOSION)?,
            ship_icon: lookup.find_image(SHIP_ICON)?,
            night_sky: lookup.find_image(NIGHT_SKY)?,
            font: lookup.find_font(FONT)?,
        })
    }
}
