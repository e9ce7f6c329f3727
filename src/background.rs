/// Scrolling night sky: two stacked copies of the backdrop slide down and
/// jump back once the leading copy has moved a full image height.

use crate::animation::AnimationTimer;
use crate::assets::ImageInfo;

#[derive(Clone, Debug, PartialEq)]
pub struct NightSky {
    scaled_height: f32,
    first_y: f32,
    second_y: f32,
    step: f32,
    timer: AnimationTimer,
}

impl NightSky {
    /// `width` is the display width the image is scaled to.
    pub fn new(image: &ImageInfo, width: f32, step: f32, interval: f32) -> Self {
        let scale = if image.width == 0 {
            1.0
        } else {
            width / image.width as f32
        };
        let scaled_height = image.height as f32 * scale;
        NightSky {
            scaled_height,
            first_y: 0.0,
            second_y: -scaled_height,
            step,
            timer: AnimationTimer::new(interval),
        }
    }

    pub fn scaled_height(&self) -> f32 {
        self.scaled_height
    }

    /// Vertical offsets of both copies, in world pixels.
    pub fn offsets(&self) -> (f32, f32) {
        (self.first_y, self.second_y)
    }

    pub fn update(&mut self, dt: f32) {
        if !self.timer.advance(dt) {
            return;
        }
        self.first_y += self.step;
        self.second_y += self.step;
        if self.first_y >= self.scaled_height {
            self.first_y = 0.0;
            self.second_y = -self.scaled_height;
        }
    }
}
