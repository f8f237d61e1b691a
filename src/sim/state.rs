//! Game state and entity types
//!
//! A `GameState` is a complete snapshot. Transitions never mutate it in place;
//! they build the next snapshot from a copy (see `tick::next_state`).

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use crate::consts::*;

/// Integer pixel coordinate on the field (top-left origin)
pub type Point = IVec2;

/// Anything that moves: a position plus a heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub pos: Point,
    pub dir: Direction,
}

impl Unit {
    pub fn new(x: i32, y: i32, dir: Direction) -> Self {
        Self {
            pos: Point::new(x, y),
            dir,
        }
    }
}

/// The player-controlled unit (exactly one per game)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: u32,
    #[serde(flatten)]
    pub unit: Unit,
}

/// An autonomous wandering enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snipe {
    pub id: u32,
    #[serde(flatten)]
    pub unit: Unit,
}

/// A projectile fired by the hero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    #[serde(flatten)]
    pub unit: Unit,
}

/// Where the snipes start: corners, diagonal and the field center
const SNIPE_START: [(i32, i32, Direction); 4] = [
    (10, 10, Direction::Down),
    (700, 700, Direction::Up),
    (200, 200, Direction::Right),
    (400, 400, Direction::Left),
];

/// Complete game state (serializable snapshot)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Snipe ticks processed so far; drives direction re-randomization
    pub move_counter: u64,
    /// Player hero
    pub hero: Hero,
    /// Live snipes, in spawn order
    pub snipes: Vec<Snipe>,
    /// Live bullets, in fire order
    pub bullets: Vec<Bullet>,
    /// Next entity ID
    next_id: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create the starting field: hero in the center, four snipes
    pub fn new() -> Self {
        let mut state = Self::with_hero(Point::new(FIELD_WIDTH / 2, FIELD_HEIGHT / 2));
        for (x, y, dir) in SNIPE_START {
            state.spawn_snipe(Unit::new(x, y, dir));
        }
        state
    }

    /// Create a field holding only a hero at `pos`
    pub fn with_hero(pos: Point) -> Self {
        let mut state = Self {
            move_counter: 0,
            hero: Hero {
                id: 0,
                unit: Unit {
                    pos,
                    dir: Direction::Up,
                },
            },
            snipes: Vec::new(),
            bullets: Vec::new(),
            next_id: 0,
        };
        state.hero.id = state.next_entity_id();
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a snipe and return its ID
    pub fn spawn_snipe(&mut self, unit: Unit) -> u32 {
        let id = self.next_entity_id();
        self.snipes.push(Snipe { id, unit });
        id
    }

    /// Add a bullet and return its ID
    pub fn spawn_bullet(&mut self, unit: Unit) -> u32 {
        let id = self.next_entity_id();
        self.bullets.push(Bullet { id, unit });
        id
    }

    pub fn snipe(&self, id: u32) -> Option<&Snipe> {
        self.snipes.iter().find(|s| s.id == id)
    }

    pub fn bullet(&self, id: u32) -> Option<&Bullet> {
        self.bullets.iter().find(|b| b.id == id)
    }
}
