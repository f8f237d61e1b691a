//! Unit movement: cardinal steps and border bounces
//!
//! The field has no wrap-around. A unit reaching a border is put back inside
//! and reverses direction.

use super::direction::Direction;
use super::state::{Point, Unit};
use crate::consts::NEAR_BORDER;

/// Translate `point` by `distance` pixels along `dir`
#[inline]
pub fn step(dir: Direction, point: Point, distance: i32) -> Point {
    match dir {
        Direction::Up => Point::new(point.x, point.y - distance),
        Direction::Right => Point::new(point.x + distance, point.y),
        Direction::Down => Point::new(point.x, point.y + distance),
        Direction::Left => Point::new(point.x - distance, point.y),
    }
}

/// Correct a unit that reached a border of a `width`x`height` field
///
/// Far borders trigger once the unit is within half its size of the edge and
/// pull it back to `edge - size`; the near border triggers at `<= 0` and puts
/// it on `NEAR_BORDER`. Each axis is checked independently and every bounce
/// flips the direction, so a corner hit flips twice.
pub fn clamp_and_bounce(unit: Unit, size: i32, width: i32, height: i32) -> Unit {
    let mut out = unit;

    // x >= width - size / 2, kept exact for odd sizes
    if 2 * out.pos.x >= 2 * width - size {
        out.pos.x = width - size;
        out.dir = out.dir.opposite();
    } else if out.pos.x <= 0 {
        out.pos.x = NEAR_BORDER;
        out.dir = out.dir.opposite();
    }

    if 2 * out.pos.y >= 2 * height - size {
        out.pos.y = height - size;
        out.dir = out.dir.opposite();
    } else if out.pos.y <= 0 {
        out.pos.y = NEAR_BORDER;
        out.dir = out.dir.opposite();
    }

    out
}

/// Euclidean distance, rounded to the nearest pixel
pub fn distance(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt().round() as i32
}

/// Cardinal direction from `from` toward `target`, if it is within `range`
///
/// The vertical axis wins when both differ. Returns `None` when out of range
/// or when both points coincide.
pub fn heading_toward(from: Point, target: Point, range: i32) -> Option<Direction> {
    if distance(from, target) >= range {
        return None;
    }
    if from.y > target.y {
        Some(Direction::Up)
    } else if from.y < target.y {
        Some(Direction::Down)
    } else if from.x > target.x {
        Some(Direction::Left)
    } else if from.x < target.x {
        Some(Direction::Right)
    } else {
        None
    }
}
