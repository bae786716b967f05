//! Sky Gap headless driver
//!
//! Plays autopilot runs against a synthetic 60 Hz frame clock and reports how
//! each run ended.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use sky_gap::consts::FRAME_MS;
use sky_gap::sim::{Command, EndCause, Engine, GameEvent, RunState};
use sky_gap::{Autopilot, GameConfig};

/// Give up on a run that is still alive after this many frames (~10 minutes)
const MAX_FRAMES: u64 = 60 * 60 * 10;

#[derive(Parser, Debug)]
#[command(name = "sky-gap")]
#[command(about = "Headless autopilot runs of the Sky Gap simulation")]
struct Cli {
    /// JSON tuning file; omitted fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of runs to play
    #[arg(long, default_value_t = 3)]
    runs: u32,
    /// RNG seed for obstacle layouts
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,
    /// Autopilot clearance above the gap bottom (pixels)
    #[arg(long, default_value_t = 8.0)]
    margin: f32,
}

/// One line of output per finished run
#[derive(Debug, Serialize)]
struct RunSummary {
    run: u32,
    score: u32,
    ticks: u64,
    cause: Option<EndCause>,
    flaps: u32,
}

/// Frame loop state: the engine plus the thin shell around it
struct Session {
    engine: Engine,
    pilot: Autopilot,
    /// Commands waiting for the next frame
    commands: VecDeque<Command>,
    /// Milliseconds since the current run started
    clock_ms: f64,
    flaps: u32,
}

impl Session {
    fn new(engine: Engine, pilot: Autopilot) -> Self {
        Self {
            engine,
            pilot,
            commands: VecDeque::new(),
            clock_ms: 0.0,
            flaps: 0,
        }
    }

    /// Play one run to completion (or the frame cap)
    fn play(&mut self, run: u32) -> RunSummary {
        self.clock_ms = 0.0;
        self.flaps = 0;
        self.commands.push_back(if self.engine.state() == RunState::Idle {
            Command::Start
        } else {
            Command::Restart
        });

        let mut frames = 0;
        while frames < MAX_FRAMES {
            while let Some(command) = self.commands.pop_front() {
                self.engine.apply(command);
            }

            self.clock_ms += FRAME_MS;
            let snapshot = self.engine.step(self.clock_ms);
            frames += 1;

            for event in self.engine.drain_events() {
                match event {
                    GameEvent::Flapped => self.flaps += 1,
                    GameEvent::ObstaclePassed { score } if score % 10 == 0 => {
                        log::info!("Run {run}: {score} obstacles cleared");
                    }
                    _ => {}
                }
            }

            if snapshot.state != RunState::Running {
                break;
            }
            if let Some(command) = self.pilot.decide(&snapshot, self.engine.config()) {
                self.commands.push_back(command);
            }
        }

        if self.engine.state() == RunState::Running {
            log::warn!("Run {run} hit the frame cap, stopping it");
        }

        RunSummary {
            run,
            score: self.engine.final_score().unwrap_or(self.engine.score()),
            ticks: self.engine.ticks(),
            cause: self.engine.end_cause(),
            flaps: self.flaps,
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config = GameConfig::from_json(&json)
        .with_context(|| format!("parsing config {}", path.display()))?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    log::info!("Sky Gap (headless) starting...");

    let config = load_config(cli.config.as_deref())?;
    let engine = Engine::new(config, cli.seed).context("building engine")?;
    let mut session = Session::new(engine, Autopilot::new(cli.margin));

    let mut best = 0;
    for run in 1..=cli.runs {
        let summary = session.play(run);
        best = best.max(summary.score);
        println!("{}", serde_json::to_string(&summary)?);
    }
    log::info!("Best score over {} runs: {best}", cli.runs);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["sky-gap"]).expect("no args parse");
        assert!(cli.config.is_none());
        assert_eq!(cli.runs, 3);
        assert_eq!(cli.seed, 0x5eed);
        assert_eq!(cli.margin, 8.0);
    }

    #[test]
    fn test_cli_rejects_bad_number_by_flag() {
        let err = Cli::try_parse_from(["sky-gap", "--runs", "abc"]).expect_err("not a number");
        assert!(err.to_string().contains("--runs"));
    }

    #[test]
    fn test_missing_config_names_the_file() {
        let err = load_config(Some(Path::new("/nonexistent/sky-gap.json"))).expect_err("missing");
        assert!(format!("{err:#}").contains("reading /nonexistent/sky-gap.json"));
    }

    #[test]
    fn test_session_plays_until_end() {
        let engine = Engine::new(GameConfig::default(), 7).expect("valid config");
        let mut session = Session::new(engine, Autopilot::new(8.0));
        let summary = session.play(1);
        assert!(summary.ticks > 0);
        assert_eq!(summary.run, 1);
    }
}
