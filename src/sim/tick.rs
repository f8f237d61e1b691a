//! State transitions
//!
//! `next_state` maps a snapshot and a command to the next snapshot. The input
//! snapshot is never touched; the only side effect is drawing from the RNG.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Positioned, any_overlap, boxes_overlap};
use super::direction::Direction;
use super::motion::{clamp_and_bounce, step};
use super::spawn::fire;
use super::state::{Bullet, GameState, Hero, Point, Snipe, Unit};
use crate::consts::*;

/// A single state transition request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// One timer tick: bullets first, then snipes
    Tick,
    /// Move every snipe one step
    AdvanceSnipes,
    /// Resolve bullet hits, then move surviving bullets one step
    AdvanceBullets,
    /// Player moves the hero one step
    MoveHero(Direction),
    /// Player fires a bullet
    Fire(Direction),
}

/// What happens to a bullet that reaches the field border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulletBorder {
    /// Reverse like every other unit
    #[default]
    Bounce,
    /// Remove the bullet
    Despawn,
}

/// Tunable rules that are not fixed constants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    pub bullet_border: BulletBorder,
}

/// Compute the snapshot following `state` under `command`
pub fn next_state<R: Rng + ?Sized>(
    state: &GameState,
    command: &Command,
    rules: &Rules,
    rng: &mut R,
) -> GameState {
    match *command {
        Command::Tick => {
            let after_bullets = advance_bullets(state, rules);
            advance_snipes(&after_bullets, rng)
        }
        Command::AdvanceSnipes => advance_snipes(state, rng),
        Command::AdvanceBullets => advance_bullets(state, rules),
        Command::MoveHero(dir) => {
            let prev = state.hero.unit.pos;
            let candidate = step(dir, prev, PX_PER_MOVE);
            let mut next = state.clone();
            next.hero = move_hero(&state.hero, &state.snipes, prev, candidate);
            next
        }
        Command::Fire(dir) => {
            let mut next = state.clone();
            let id = next.next_entity_id();
            next.bullets.push(fire(&next.hero, dir, id));
            log::debug!("Hero fired bullet {} {}", id, dir);
            next
        }
    }
}

/// Move the hero to `next` unless that spot overlaps a snipe
///
/// The border correction applies either way.
pub fn move_hero(hero: &Hero, snipes: &[Snipe], prev: Point, next: Point) -> Hero {
    let pos = if any_overlap(snipes, &next, HERO_SIZE) {
        prev
    } else {
        next
    };
    Hero {
        id: hero.id,
        unit: clamp_and_bounce(
            Unit {
                pos,
                dir: hero.unit.dir,
            },
            HERO_SIZE,
            FIELD_WIDTH,
            FIELD_HEIGHT,
        ),
    }
}

/// Advance every snipe by one step
///
/// All snipes pick a fresh random direction together whenever the move
/// counter is a multiple of `DIRECTION_LIMIT`. A snipe whose next step would
/// touch the hero keeps its place but still adopts the new direction.
pub fn advance_snipes<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> GameState {
    let randomize = state.move_counter % DIRECTION_LIMIT == 0;
    let hero = state.hero.pos();

    let snipes = state
        .snipes
        .iter()
        .map(|snipe| {
            let dir = if randomize {
                Direction::random(rng)
            } else {
                snipe.unit.dir
            };
            let candidate = step(dir, snipe.unit.pos, PX_PER_MOVE);
            let pos = if boxes_overlap(hero, candidate, SNIPE_SIZE) {
                snipe.unit.pos
            } else {
                candidate
            };
            Snipe {
                id: snipe.id,
                unit: clamp_and_bounce(Unit { pos, dir }, SNIPE_SIZE, FIELD_WIDTH, FIELD_HEIGHT),
            }
        })
        .collect();

    log::trace!("Snipe move {} (randomize: {})", state.move_counter, randomize);

    let mut next = state.clone();
    next.snipes = snipes;
    next.move_counter += 1;
    next
}

/// Resolve bullet hits, then advance the surviving bullets
///
/// Hits are judged on the positions before this step, for bullets and snipes
/// alike: a bullet touching the hero or a snipe is removed, and every snipe
/// touching a bullet is removed with it.
pub fn advance_bullets(state: &GameState, rules: &Rules) -> GameState {
    let hero = state.hero.pos();

    let bullets = state
        .bullets
        .iter()
        .filter_map(|bullet| {
            if boxes_overlap(bullet.pos(), hero, HERO_SIZE) {
                log::debug!("Bullet {} hit the hero", bullet.id);
                return None;
            }
            if any_overlap(&state.snipes, bullet, SNIPE_SIZE) {
                log::debug!("Bullet {} hit a snipe", bullet.id);
                return None;
            }
            advance_bullet(bullet, rules.bullet_border)
        })
        .collect();

    let snipes = state
        .snipes
        .iter()
        .filter(|snipe| {
            let hit = any_overlap(&state.bullets, *snipe, SNIPE_SIZE);
            if hit {
                log::debug!("Snipe {} destroyed", snipe.id);
            }
            !hit
        })
        .copied()
        .collect();

    let mut next = state.clone();
    next.bullets = bullets;
    next.snipes = snipes;
    next
}

fn advance_bullet(bullet: &Bullet, border: BulletBorder) -> Option<Bullet> {
    let moved = Unit {
        pos: step(bullet.unit.dir, bullet.unit.pos, PX_PER_MOVE),
        dir: bullet.unit.dir,
    };
    let corrected = clamp_and_bounce(moved, BULLET_SIZE, FIELD_WIDTH, FIELD_HEIGHT);
    match border {
        BulletBorder::Bounce => Some(Bullet {
            id: bullet.id,
            unit: corrected,
        }),
        BulletBorder::Despawn if corrected != moved => {
            log::debug!("Bullet {} left the field", bullet.id);
            None
        }
        BulletBorder::Despawn => Some(Bullet {
            id: bullet.id,
            unit: moved,
        }),
    }
}
