use macroquad::prelude::*;
use tracing::warn;

use crate::application::{DisplaySink, FrameScheduler};
use crate::domain::Frame;

#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("a {size}x{size} surface exceeds the texture limit of {max} pixels per side")]
    TooLarge { size: usize, max: u16 },
}

/// Full-window surface backed by one GPU texture.
/// Every present uploads the whole frame and draws it stretched to the window.
pub struct MacroquadDisplay {
    size: usize,
    image: Image,
    texture: Texture2D,
}

impl MacroquadDisplay {
    /// Must be called from inside the macroquad main loop
    pub fn new(size: usize) -> Result<Self, DisplayError> {
        let side = u16::try_from(size).map_err(|_| DisplayError::TooLarge { size, max: u16::MAX })?;
        let image = Image::gen_image_color(side, side, BLACK);
        let texture = Texture2D::from_image(&image);
        texture.set_filter(FilterMode::Nearest);
        Ok(Self { size, image, texture })
    }
}

impl DisplaySink for MacroquadDisplay {
    fn present(&mut self, frame: &Frame) {
        if frame.size() != self.size {
            warn!(expected = self.size, actual = frame.size(), "dropping frame of wrong size");
            return;
        }

        self.image.bytes.copy_from_slice(frame.as_bytes());
        self.texture.update(&self.image);

        clear_background(BLACK);
        draw_texture_ex(
            &self.texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(screen_width(), screen_height())),
                ..Default::default()
            },
        );
    }
}

/// Paces the loop on macroquad's display refresh
pub struct MacroquadScheduler;

impl FrameScheduler for MacroquadScheduler {
    fn next_frame(&mut self) -> impl Future<Output = ()> {
        next_frame()
    }
}
