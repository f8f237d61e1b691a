use std::collections::HashSet;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use snipes::consts::*;
use snipes::session::TICK_INTERVAL;
use snipes::sim::{Direction, GameState, Point, Rules, Unit};
use snipes::{BulletBorder, Session, autopilot};

fn assert_in_field(pos: Point, size: i32, what: &str) {
    assert!(
        pos.x >= NEAR_BORDER && 2 * pos.x < 2 * FIELD_WIDTH - size,
        "{} x out of field: {:?}",
        what,
        pos
    );
    assert!(
        pos.y >= NEAR_BORDER && 2 * pos.y < 2 * FIELD_HEIGHT - size,
        "{} y out of field: {:?}",
        what,
        pos
    );
}

fn play(seed: u64, rules: Rules, ticks: u64) -> Vec<GameState> {
    let mut session = Session::new(seed, rules);
    let mut pilot = Pcg32::seed_from_u64(seed ^ 0xA5A5);
    let mut history = vec![session.state().clone()];
    for _ in 0..ticks {
        if let Some(key) = autopilot::choose(session.state(), &mut pilot) {
            session.apply(key.command());
        }
        session.advance(TICK_INTERVAL);
        history.push(session.state().clone());
    }
    history
}

#[test]
fn units_stay_inside_the_field() {
    for seed in [1, 2, 3, 42] {
        for state in play(seed, Rules::default(), 400).iter().skip(1) {
            assert_in_field(state.hero.unit.pos, HERO_SIZE, "hero");
            for snipe in &state.snipes {
                assert_in_field(snipe.unit.pos, SNIPE_SIZE, "snipe");
            }
            for bullet in &state.bullets {
                assert_in_field(bullet.unit.pos, BULLET_SIZE, "bullet");
            }
        }
    }
}

#[test]
fn snipes_only_disappear() {
    let history = play(7, Rules::default(), 600);
    for pair in history.windows(2) {
        let before: HashSet<u32> = pair[0].snipes.iter().map(|s| s.id).collect();
        let after: HashSet<u32> = pair[1].snipes.iter().map(|s| s.id).collect();
        assert!(after.is_subset(&before));
    }
}

#[test]
fn entity_ids_never_repeat() {
    let history = play(11, Rules::default(), 300);
    let mut retired: HashSet<u32> = HashSet::new();
    let mut fired = 0;

    for state in &history {
        let mut ids: Vec<u32> = state.bullets.iter().map(|b| b.id).collect();
        let len = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), len, "duplicate bullet ids in one snapshot");

        for bullet in &state.bullets {
            assert!(state.snipes.iter().all(|s| s.id != bullet.id));
            assert_ne!(state.hero.id, bullet.id);
        }
    }

    for pair in history.windows(2) {
        let after: HashSet<u32> = pair[1].bullets.iter().map(|b| b.id).collect();
        for bullet in &pair[0].bullets {
            if !after.contains(&bullet.id) {
                retired.insert(bullet.id);
            }
        }
        fired += pair[1]
            .bullets
            .iter()
            .filter(|b| !pair[0].bullets.iter().any(|p| p.id == b.id))
            .count();
        for id in &after {
            assert!(!retired.contains(id), "bullet id {} came back after removal", id);
        }
    }

    let every_id: HashSet<u32> = history
        .iter()
        .flat_map(|state| state.bullets.iter().map(|b| b.id))
        .collect();
    assert!(fired > 0, "autopilot never fired");
    assert_eq!(every_id.len(), fired);
}

#[test]
fn despawned_bullets_never_bounce() {
    let rules = Rules {
        bullet_border: BulletBorder::Despawn,
    };
    let history = play(5, rules, 400);
    for pair in history.windows(2) {
        for bullet in &pair[1].bullets {
            if let Some(prev) = pair[0].bullets.iter().find(|b| b.id == bullet.id) {
                assert_eq!(prev.unit.dir, bullet.unit.dir);
            }
        }
    }
}

#[test]
fn keyboard_driven_round() {
    let mut state = GameState::with_hero(Point::new(400, 400));
    let target = state.spawn_snipe(Unit::new(400, 300, Direction::Left));
    let mut session = Session::with_state(state, 9, Rules::default());
    session.stop();

    // W fires upward from (400, 400); the bullet starts at (400, 380)
    assert!(session.handle_key(87));
    for _ in 0..9 {
        session.apply(snipes::Command::AdvanceBullets);
    }
    assert!(session.state().snipe(target).is_none());
    assert!(session.state().bullets.is_empty());

    // Arrow keys still move the hero with the clock stopped
    assert!(session.handle_key(37));
    assert_eq!(session.state().hero.unit.pos, Point::new(390, 400));
}
