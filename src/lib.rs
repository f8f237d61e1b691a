//! Snipes - a square-field arcade game
//!
//! Core modules:
//! - `sim`: Pure game-state transitions (movement, collisions, reducer)
//! - `platform`: Key-code input mapping
//! - `renderer`: Technology-agnostic draw list for a view layer
//! - `session`: Fixed-interval tick driver that owns the state
//! - `settings`: Runtime settings loaded from JSON

pub mod autopilot;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::Error;
pub use session::Session;
pub use settings::Settings;
pub use sim::{BulletBorder, Command, GameState};

/// Game configuration constants
pub mod consts {
    /// Field dimensions in pixels
    pub const FIELD_WIDTH: i32 = 800;
    pub const FIELD_HEIGHT: i32 = 800;

    /// Interval between snipe/bullet ticks
    pub const TICK_INTERVAL_MS: u64 = 100;
    /// Maximum ticks replayed per driver update to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Pixels travelled by any unit in a single move
    pub const PX_PER_MOVE: i32 = 10;
    /// Snipes pick a new random direction every this many ticks
    pub const DIRECTION_LIMIT: u64 = 20;

    /// Entity edge lengths
    pub const HERO_SIZE: i32 = 10;
    pub const SNIPE_SIZE: i32 = 5;
    pub const BULLET_SIZE: i32 = 3;

    /// Coordinate a unit is put back to after crossing the near (zero) border
    pub const NEAR_BORDER: i32 = 1;

    /// Distance under which a unit can "see" the hero
    pub const HUNT_RANGE: i32 = 200;
}
