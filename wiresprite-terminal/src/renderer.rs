/// ASCII line rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wiresprite_core::Segment;

/// Glyph used for sprite strokes.
const STROKE_CHAR: char = '#';

/// Stroke color for every segment; the sprite draws in green.
const STROKE_COLOR: Color = Color::Green;

/// ASCII renderer that rasterizes 2D segments into terminal characters
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            char_buffer: vec![' '; width * height],
        }
    }

    pub fn clear(&mut self) {
        for cell in &mut self.char_buffer {
            *cell = ' ';
        }
    }

    pub fn render_segments(&mut self, segments: &[Segment]) {
        for segment in segments {
            self.draw_segment(segment);
        }
    }

    /// Rasterize one segment with integer Bresenham. Endpoints may lie off
    /// screen; out-of-bounds cells are simply dropped.
    fn draw_segment(&mut self, segment: &Segment) {
        let mut x0 = segment.start.x.round() as i32;
        let mut y0 = segment.start.y.round() as i32;
        let x1 = segment.end.x.round() as i32;
        let y1 = segment.end.y.round() as i32;

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0, y0);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn plot(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.char_buffer[y as usize * self.width + x as usize] = STROKE_CHAR;
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.queue(SetForegroundColor(STROKE_COLOR))?;
        for y in 0..self.height {
            for x in 0..self.width {
                writer.queue(Print(self.char_buffer[y * self.width + x]))?;
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }

    #[cfg(test)]
    fn is_set(&self, x: usize, y: usize) -> bool {
        self.char_buffer[y * self.width + x] != ' '
    }
}
