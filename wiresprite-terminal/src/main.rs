/// Wiresprite Terminal - interactive wireframe sprite viewer
///
/// Loads a shape data file and renders it as a wireframe in the terminal.
/// Controls:
///   - L/R/U/D: Move the sprite
///   - I/O: Zoom in and out
///   - X/Y/Z: Rotate about each axis
///   - 1: Reset to the loaded shape
///   - Q/ESC: Quit

use std::env;
use std::io;
use std::path::Path;
use wiresprite_core::{Sprite, SpriteConfig, Viewport};
use wiresprite_terminal::TerminalApp;

const DEFAULT_SHAPE: &str = "wiresprite-terminal/data/pyramid.dat";

fn main() -> io::Result<()> {
    // Logging stays in the binary so the library remains unopinionated.
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let shape_path = match args.get(1) {
        Some(path) => path.as_str(),
        None => {
            log::info!("no shape file given, using {}", DEFAULT_SHAPE);
            DEFAULT_SHAPE
        }
    };

    let (width, height) = terminal_size()?;
    let viewport = Viewport::new(width, height);

    // A missing file still yields a runnable (empty) sprite; the loader
    // logs the diagnostic.
    let sprite = Sprite::from_file(Path::new(shape_path), viewport, SpriteConfig::default());

    let mut app = TerminalApp::new(sprite)?;
    app.run()
}

fn terminal_size() -> io::Result<(f32, f32)> {
    let (width, height) = crossterm::terminal::size()?;
    Ok((width as f32, height as f32))
}
