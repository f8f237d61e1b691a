//! Demo mode - the computer plays the hero
//!
//! Lines up with the nearest snipe in sight and fires along the shared row or
//! column; with nothing in sight it wanders.

use rand::Rng;

use crate::consts::{HUNT_RANGE, SNIPE_SIZE};
use crate::platform::KeyCommand;
use crate::sim::{Direction, GameState, Positioned, distance, heading_toward};

/// Chance of taking a random step while no snipe is in sight
const WANDER_CHANCE: f64 = 0.3;

/// Pick the next input for the hero, if any
pub fn choose<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> Option<KeyCommand> {
    let hero = state.hero.pos();

    let target = state
        .snipes
        .iter()
        .map(|snipe| snipe.pos())
        .filter(|pos| distance(hero, *pos) < HUNT_RANGE)
        .min_by_key(|pos| distance(hero, *pos));

    let Some(target) = target else {
        return rng
            .random_bool(WANDER_CHANCE)
            .then(|| KeyCommand::Move(Direction::random(rng)));
    };

    let delta = target - hero;
    if delta.x.abs() < SNIPE_SIZE && delta.y != 0 {
        let dir = if delta.y < 0 { Direction::Up } else { Direction::Down };
        return Some(KeyCommand::Shoot(dir));
    }
    if delta.y.abs() < SNIPE_SIZE && delta.x != 0 {
        let dir = if delta.x < 0 { Direction::Left } else { Direction::Right };
        return Some(KeyCommand::Shoot(dir));
    }

    // Close the vertical gap first so the snipe ends up on our row
    heading_toward(hero, target, HUNT_RANGE).map(KeyCommand::Move)
}
