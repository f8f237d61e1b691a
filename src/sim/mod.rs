//! Pure simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Snapshot in, snapshot out (no in-place mutation of the previous state)
//! - Injected RNG only
//! - Stable iteration order (spawn order, entities identified by ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod direction;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Positioned, any_overlap, boxes_overlap, overlaps};
pub use direction::Direction;
pub use motion::{clamp_and_bounce, distance, heading_toward, step};
pub use spawn::fire;
pub use state::{Bullet, GameState, Hero, Point, Snipe, Unit};
pub use tick::{BulletBorder, Command, Rules, advance_bullets, advance_snipes, move_hero, next_state};
