//! Axis-aligned box collision
//!
//! Every entity is a square anchored at its top-left corner. Two squares of the
//! same edge length overlap when they share interior area; touching edges do
//! not count.

use super::state::{Bullet, Hero, Point, Snipe, Unit};

/// Something with a position on the field
pub trait Positioned {
    fn pos(&self) -> Point;
}

impl Positioned for Point {
    fn pos(&self) -> Point {
        *self
    }
}

impl Positioned for Unit {
    fn pos(&self) -> Point {
        self.pos
    }
}

impl Positioned for Hero {
    fn pos(&self) -> Point {
        self.unit.pos
    }
}

impl Positioned for Snipe {
    fn pos(&self) -> Point {
        self.unit.pos
    }
}

impl Positioned for Bullet {
    fn pos(&self) -> Point {
        self.unit.pos
    }
}

/// Do two `size`x`size` boxes anchored at `a` and `b` intersect?
#[inline]
pub fn boxes_overlap(a: Point, b: Point, size: i32) -> bool {
    debug_assert!(size > 0, "box size must be positive");
    let apart_y = a.y + size <= b.y || a.y >= b.y + size;
    let apart_x = a.x + size <= b.x || a.x >= b.x + size;
    !(apart_y || apart_x)
}

/// Overlap test tolerating absent entities (absent never overlaps)
pub fn overlaps<A, B>(a: Option<&A>, b: Option<&B>, size: i32) -> bool
where
    A: Positioned + ?Sized,
    B: Positioned + ?Sized,
{
    match (a, b) {
        (Some(a), Some(b)) => boxes_overlap(a.pos(), b.pos(), size),
        _ => false,
    }
}

/// Does `subject` overlap any entity in `list`?
pub fn any_overlap<'a, T, S>(list: impl IntoIterator<Item = &'a T>, subject: &S, size: i32) -> bool
where
    T: Positioned + 'a,
    S: Positioned + ?Sized,
{
    list.into_iter()
        .any(|item| boxes_overlap(item.pos(), subject.pos(), size))
}
