/// Sprite state and action dispatch
use std::io::BufRead;
use std::path::Path;

use crate::loader::{self, Viewport};
use crate::path::PenPath;
use crate::projection::{self, Segment};
use crate::transform;

/// Tunable interaction constants. The defaults reproduce the classic sprite
/// behavior: a 10000-unit world, 8 units of travel per move, a 1.125 zoom
/// ratio, and 4 degrees per rotation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteConfig {
    /// Side length of the cubic world the sample data lives in.
    pub world_size: f32,
    /// Distance moved per translate action.
    pub translation_step: f32,
    /// Zoom ratio per scale action; in is `1/scale_factor`, out is
    /// `scale_factor`.
    pub scale_factor: f32,
    /// Degrees turned per rotate action.
    pub rotation_step_deg: f32,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            world_size: 10000.0,
            translation_step: 8.0,
            scale_factor: 1.125,
            rotation_step_deg: 4.0,
        }
    }
}

/// One keystroke's worth of shape manipulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    ZoomIn,
    ZoomOut,
    RotateX,
    RotateY,
    RotateZ,
    Reset,
}

impl Action {
    /// Map an input character to its action. Letters are case-insensitive;
    /// unrecognized characters map to `None` and are ignored by the sprite.
    pub fn from_char(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            'l' => Some(Self::MoveLeft),
            'r' => Some(Self::MoveRight),
            'u' => Some(Self::MoveUp),
            'd' => Some(Self::MoveDown),
            'i' => Some(Self::ZoomIn),
            'o' => Some(Self::ZoomOut),
            'x' => Some(Self::RotateX),
            'y' => Some(Self::RotateY),
            'z' => Some(Self::RotateZ),
            '1' => Some(Self::Reset),
            _ => None,
        }
    }
}

/// A wireframe sprite: the live shape plus the pristine copy restored on
/// reset.
#[derive(Debug, Clone)]
pub struct Sprite {
    live: PenPath,
    reset: PenPath,
    config: SpriteConfig,
}

impl Sprite {
    /// Load a sprite from a line-oriented reader.
    pub fn from_reader<R: BufRead>(reader: R, viewport: Viewport, config: SpriteConfig) -> Self {
        let path = loader::load_path(reader, config.world_size, viewport);
        Self::from_path(path, config)
    }

    /// Load a sprite from a shape file. A missing or unreadable file logs a
    /// diagnostic and yields an empty sprite that draws nothing.
    pub fn from_file(path: &Path, viewport: Viewport, config: SpriteConfig) -> Self {
        let path = loader::load_path_from_file(path, config.world_size, viewport);
        Self::from_path(path, config)
    }

    fn from_path(path: PenPath, config: SpriteConfig) -> Self {
        Self {
            reset: path.clone(),
            live: path,
            config,
        }
    }

    pub fn live(&self) -> &PenPath {
        &self.live
    }

    pub fn config(&self) -> &SpriteConfig {
        &self.config
    }

    /// Apply one input character. Unrecognized characters are no-ops.
    pub fn animate(&mut self, code: char) {
        if let Some(action) = Action::from_char(code) {
            self.apply(action);
        }
    }

    /// Apply one action to the live shape.
    pub fn apply(&mut self, action: Action) {
        let step = self.config.translation_step;
        match action {
            Action::MoveLeft => transform::translate(&mut self.live, -step, 0.0, 0.0),
            Action::MoveRight => transform::translate(&mut self.live, step, 0.0, 0.0),
            // Screen-space y grows downward, so up is -y.
            Action::MoveUp => transform::translate(&mut self.live, 0.0, -step, 0.0),
            Action::MoveDown => transform::translate(&mut self.live, 0.0, step, 0.0),
            Action::ZoomIn => transform::scale(&mut self.live, 1.0 / self.config.scale_factor),
            Action::ZoomOut => transform::scale(&mut self.live, self.config.scale_factor),
            Action::RotateX => transform::rotate_x(&mut self.live, self.config.rotation_step_deg),
            Action::RotateY => transform::rotate_y(&mut self.live, self.config.rotation_step_deg),
            Action::RotateZ => transform::rotate_z(&mut self.live, self.config.rotation_step_deg),
            Action::Reset => self.reset(),
        }
    }

    /// Restore the originally loaded shape.
    pub fn reset(&mut self) {
        self.live = self.reset.clone();
    }

    /// Emit the 2D segments for the current shape.
    pub fn draw(&self) -> Vec<Segment> {
        projection::segments(&self.live)
    }
}
