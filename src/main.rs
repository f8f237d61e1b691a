//! Snipes entry point
//!
//! Runs a headless game driven by the autopilot and reports the outcome.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use snipes::renderer::status_lines;
use snipes::session::TICK_INTERVAL;
use snipes::{BulletBorder, Session, Settings, autopilot};

/// Status readout cadence in ticks
const REPORT_EVERY: u64 = 50;

#[derive(Debug, Parser)]
#[command(name = "snipes", about = "Play a headless Snipes demo")]
struct Args {
    /// JSON settings file
    #[arg(long)]
    settings: Option<PathBuf>,
    /// RNG seed (overrides settings)
    #[arg(long)]
    seed: Option<u64>,
    /// Number of ticks to play (overrides settings)
    #[arg(long)]
    ticks: Option<u64>,
    /// Pace ticks against the wall clock
    #[arg(long)]
    realtime: bool,
    /// Remove bullets at the border instead of bouncing them
    #[arg(long)]
    despawn_bullets: bool,
    /// Print the final snapshot as JSON
    #[arg(long)]
    dump: bool,
    /// Write the effective settings to this file
    #[arg(long)]
    save_settings: Option<PathBuf>,
}

impl Args {
    fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = match &self.settings {
            Some(path) => Settings::load_or_default(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => Settings::default(),
        };
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        if let Some(ticks) = self.ticks {
            settings.ticks = ticks;
        }
        if self.realtime {
            settings.realtime = true;
        }
        if self.despawn_bullets {
            settings.bullet_border = BulletBorder::Despawn;
        }
        Ok(settings)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Snipes starting...");

    let args = Args::parse();
    let settings = args.settings()?;
    if let Some(path) = &args.save_settings {
        settings.save(path)?;
    }

    let mut session = Session::from_settings(&settings);
    let mut pilot_rng = Pcg32::seed_from_u64(session.seed().wrapping_add(1));
    let start_snipes = session.state().snipes.len();
    if settings.realtime {
        session.advance_to(Instant::now());
    }

    for tick in 0..settings.ticks {
        if let Some(key) = autopilot::choose(session.state(), &mut pilot_rng) {
            session.apply(key.command());
        }

        if settings.realtime {
            std::thread::sleep(TICK_INTERVAL);
            session.advance_to(Instant::now());
        } else {
            session.advance(TICK_INTERVAL);
        }

        if tick % REPORT_EVERY == 0 {
            for line in status_lines(session.state()) {
                log::debug!("{}", line);
            }
        }

        if session.state().snipes.is_empty() {
            log::info!("All snipes down after {} ticks", session.state().move_counter);
            break;
        }
    }
    session.stop();

    let state = session.state();
    log::info!(
        "Finished: {} of {} snipes left, {} bullets in flight",
        state.snipes.len(),
        start_snipes,
        state.bullets.len()
    );

    if args.dump {
        let json = serde_json::to_string_pretty(state).context("serializing snapshot")?;
        println!("{}", json);
    }

    Ok(())
}
