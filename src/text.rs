/// Fitting a line of text into the middle of a zone.

use glam::Vec2;

use crate::geometry::Rect;

/// Scale that makes `text_size` fill `zone` minus a `margin` fraction on
/// each axis, keeping the aspect ratio.
pub fn fit_scale(text_size: Vec2, zone: Rect, margin: f32) -> f32 {
    if text_size.x <= 0.0 || text_size.y <= 0.0 {
        return 1.0;
    }
    let inner_width = zone.width - zone.width * margin;
    let inner_height = zone.height - zone.height * margin;
    (inner_width / text_size.x).min(inner_height / text_size.y)
}

/// Top-left corner that centres text of `text_size * scale` in `zone`.
pub fn centered_origin(text_size: Vec2, scale: f32, zone: Rect) -> Vec2 {
    zone.center() - text_size * scale / 2.0
}

pub fn congratulations(level: u32) -> String {
    format!("Congratulations, you have reached level {}", level)
}
