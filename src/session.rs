//! Game session: the single owner of the live state
//!
//! Ticks come from a fixed-interval clock and key presses apply immediately.
//! Both go through `&mut self`, so two transitions can never interleave.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::platform::KeyCommand;
use crate::settings::Settings;
use crate::sim::{Command, GameState, Rules, next_state};

/// Fixed interval between snipe/bullet ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(TICK_INTERVAL_MS);

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    rng: Pcg32,
    rules: Rules,
    seed: u64,
    accumulator: Duration,
    last_frame: Option<Instant>,
    ticking: bool,
}

impl Session {
    /// Start a new game on the default field
    pub fn new(seed: u64, rules: Rules) -> Self {
        Self::with_state(GameState::new(), seed, rules)
    }

    /// Start from an arbitrary snapshot
    pub fn with_state(state: GameState, seed: u64, rules: Rules) -> Self {
        Self {
            state,
            rng: Pcg32::seed_from_u64(seed),
            rules,
            seed,
            accumulator: Duration::ZERO,
            last_frame: None,
            ticking: true,
        }
    }

    /// Start a new game from settings, drawing a seed if none is configured
    pub fn from_settings(settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Starting session (seed {})", seed);
        Self::new(seed, settings.rules())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Whether the tick clock is still running
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    /// Stop the tick clock; input keeps working
    pub fn stop(&mut self) {
        if self.ticking {
            log::info!("Tick clock stopped after {} moves", self.state.move_counter);
        }
        self.ticking = false;
        self.accumulator = Duration::ZERO;
        self.last_frame = None;
    }

    /// Advance by the real time since the previous call
    ///
    /// The first call only records `now` and runs nothing.
    pub fn advance_to(&mut self, now: Instant) -> u32 {
        let elapsed = match self.last_frame {
            Some(last) => now.saturating_duration_since(last),
            None => Duration::ZERO,
        };
        self.last_frame = Some(now);
        self.advance(elapsed)
    }

    /// Feed wall-clock time; runs one tick per elapsed interval
    ///
    /// Returns the number of ticks run. At most `MAX_SUBSTEPS` ticks are
    /// replayed per call, longer gaps are dropped.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.ticking {
            return 0;
        }

        let elapsed = elapsed.min(TICK_INTERVAL * MAX_SUBSTEPS);
        self.accumulator += elapsed;

        let mut substeps = 0;
        while self.accumulator >= TICK_INTERVAL && substeps < MAX_SUBSTEPS {
            self.tick();
            self.accumulator -= TICK_INTERVAL;
            substeps += 1;
        }
        substeps
    }

    /// Run a single tick right away
    pub fn tick(&mut self) {
        self.apply(Command::Tick);
    }

    /// Apply a command and replace the state with the result
    pub fn apply(&mut self, command: Command) {
        self.state = next_state(&self.state, &command, &self.rules, &mut self.rng);
    }

    /// Handle a raw key press; returns whether the key did anything
    pub fn handle_key(&mut self, code: u32) -> bool {
        match KeyCommand::from_key_code(code) {
            Some(key) => {
                log::trace!("Key {} -> {}", code, key);
                self.apply(key.command());
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Direction, Point, Unit};

    fn quiet_session() -> Session {
        let mut state = GameState::with_hero(Point::new(400, 400));
        state.spawn_snipe(Unit::new(100, 100, Direction::Right));
        Session::with_state(state, 1, Rules::default())
    }

    #[test]
    fn test_advance_runs_one_tick_per_interval() {
        let mut session = quiet_session();
        assert_eq!(session.advance(Duration::from_millis(50)), 0);
        assert_eq!(session.advance(Duration::from_millis(50)), 1);
        assert_eq!(session.advance(Duration::from_millis(250)), 2);
        assert_eq!(session.state().move_counter, 3);
    }

    #[test]
    fn test_advance_caps_substeps() {
        let mut session = quiet_session();
        let ran = session.advance(Duration::from_secs(60));
        assert_eq!(ran, MAX_SUBSTEPS);
        assert_eq!(session.advance(Duration::ZERO), 0);
    }

    #[test]
    fn test_advance_to_measures_between_frames() {
        let mut session = quiet_session();
        let t0 = Instant::now();
        assert_eq!(session.advance_to(t0), 0);
        assert_eq!(session.advance_to(t0 + Duration::from_millis(250)), 2);
        // The leftover 50ms carries into the next frame
        assert_eq!(session.advance_to(t0 + Duration::from_millis(300)), 1);
        assert_eq!(session.state().move_counter, 3);
    }

    #[test]
    fn test_advance_to_caps_long_stalls() {
        let mut session = quiet_session();
        let t0 = Instant::now();
        session.advance_to(t0);
        assert_eq!(session.advance_to(t0 + Duration::from_secs(30)), MAX_SUBSTEPS);
        // A clock that appears to run backwards counts as no time
        assert_eq!(session.advance_to(t0), 0);
    }

    #[test]
    fn test_stop_halts_ticks_but_not_input() {
        let mut session = quiet_session();
        session.stop();
        assert!(!session.is_ticking());
        assert_eq!(session.advance(Duration::from_secs(1)), 0);
        assert_eq!(session.state().move_counter, 0);

        assert!(session.handle_key(39));
        assert_eq!(session.state().hero.unit.pos, Point::new(410, 400));
    }

    #[test]
    fn test_keys_apply_immediately() {
        let mut session = quiet_session();
        assert!(session.handle_key(87));
        assert_eq!(session.state().bullets.len(), 1);
        assert_eq!(session.state().bullets[0].unit.pos, Point::new(400, 380));
        assert!(!session.handle_key(13));
        assert_eq!(session.state().bullets.len(), 1);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = Session::new(5, Rules::default());
        let mut b = Session::new(5, Rules::default());
        for _ in 0..50 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.state(), b.state());
    }
}
