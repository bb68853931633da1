/// Example: Load a shape file and apply a scripted action sequence
///
/// Runs without a TTY; useful for checking a shape file parses and
/// transforms as expected.
///
/// Usage: cargo run --example spin -- path/to/shape.dat

use std::env;
use std::path::Path;
use wiresprite_core::{Sprite, SpriteConfig, Viewport};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let shape_path = args
        .get(1)
        .map(String::as_str)
        .unwrap_or("wiresprite-terminal/data/pyramid.dat");

    let mut sprite = Sprite::from_file(
        Path::new(shape_path),
        Viewport::new(80.0, 24.0),
        SpriteConfig::default(),
    );

    println!("loaded {} path elements", sprite.live().len());
    println!("initial segments: {}", sprite.draw().len());

    // One full turn about Y in rotation-step increments, then reset.
    for _ in 0..90 {
        sprite.animate('y');
    }
    println!("after spin: {} segments", sprite.draw().len());

    sprite.animate('1');
    println!("after reset: {} segments", sprite.draw().len());
}
