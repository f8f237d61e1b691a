//! Shape generation for entities

use crate::consts::{BULLET_SIZE, HERO_SIZE, SNIPE_SIZE};
use crate::sim::{GameState, Point, Positioned};

/// Colors for game elements (RGBA)
pub mod colors {
    pub const HERO: [f32; 4] = [0.0, 0.0, 1.0, 1.0]; // Blue
    pub const SNIPE: [f32; 4] = [0.0, 0.5, 0.0, 1.0]; // Green
    pub const BULLET_FILL: [f32; 4] = [1.0, 1.0, 0.0, 1.0]; // Yellow
    pub const BULLET_STROKE: [f32; 4] = [1.0, 0.65, 0.0, 1.0]; // Orange
}

/// An axis-aligned square to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub pos: Point,
    /// Edge length
    pub size: i32,
    pub fill: [f32; 4],
    pub stroke: [f32; 4],
    pub stroke_width: i32,
}

impl Rect {
    fn solid(pos: Point, size: i32, color: [f32; 4]) -> Self {
        Self {
            pos,
            size,
            fill: color,
            stroke: color,
            stroke_width: size,
        }
    }
}

/// Draw list for a snapshot: hero first, then bullets, then snipes
pub fn scene(state: &GameState) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(1 + state.bullets.len() + state.snipes.len());

    rects.push(Rect::solid(state.hero.pos(), HERO_SIZE, colors::HERO));

    rects.extend(state.bullets.iter().map(|bullet| Rect {
        pos: bullet.pos(),
        size: BULLET_SIZE,
        fill: colors::BULLET_FILL,
        stroke: colors::BULLET_STROKE,
        stroke_width: 1,
    }));

    rects.extend(
        state
            .snipes
            .iter()
            .map(|snipe| Rect::solid(snipe.pos(), SNIPE_SIZE, colors::SNIPE)),
    );

    rects
}

/// Human-readable position readout, one line per hero/snipe
pub fn status_lines(state: &GameState) -> Vec<String> {
    let hero = &state.hero.unit;
    let mut lines = Vec::with_capacity(1 + state.snipes.len());
    lines.push(format!("Hero: {}, {}, {}", hero.pos.x, hero.pos.y, hero.dir));
    for (i, snipe) in state.snipes.iter().enumerate() {
        let unit = &snipe.unit;
        lines.push(format!("snipe {}: {}, {}, {}", i, unit.pos.x, unit.pos.y, unit.dir));
    }
    lines
}
