//! Engine state and run lifecycle
//!
//! The engine exclusively owns the actor, the obstacle stream, the score and
//! the spawn clock. Nothing outside this module mutates them except through
//! the operations below and [`Engine::step`](super::tick).

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::obstacle::ObstacleStream;
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Where the engine is in its run lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// Before the first start
    Idle,
    /// Ticking
    Running,
    /// Terminated; score frozen until the next restart
    Ended,
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndCause {
    Floor,
    Obstacle,
}

/// Input commands, decoupled from whatever device produced them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Start,
    Restart,
    Flap,
    /// Single-button policy: start when not running, flap while running
    Press,
}

/// Things that happened, for sound/score-display hooks in the presenter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RunStarted,
    Flapped,
    ObstacleSpawned { top_height: f32 },
    ObstaclePassed { score: u32 },
    CeilingBump,
    RunEnded { cause: EndCause, final_score: u32 },
}

/// The simulation engine: one independent game instance
#[derive(Debug, Clone)]
pub struct Engine {
    pub(super) config: GameConfig,
    pub(super) rng: Pcg32,
    pub(super) run_state: RunState,
    pub(super) actor: Actor,
    pub(super) stream: ObstacleStream,
    pub(super) score: u32,
    pub(super) final_score: Option<u32>,
    pub(super) end_cause: Option<EndCause>,
    /// Ticks of the current run
    pub(super) ticks: u64,
    pub(super) events: Vec<GameEvent>,
}

impl Engine {
    /// Build an idle engine. Fails fast on tuning that cannot produce a
    /// playable field.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let actor = Actor::new(&config);
        Ok(Self {
            config,
            rng: Pcg32::seed_from_u64(seed),
            run_state: RunState::Idle,
            actor,
            stream: ObstacleStream::new(),
            score: 0,
            final_score: None,
            end_cause: None,
            ticks: 0,
            events: Vec::new(),
        })
    }

    /// Begin a fresh run from any state
    pub fn start(&mut self) {
        self.actor = Actor::new(&self.config);
        self.stream.reset();
        self.score = 0;
        self.final_score = None;
        self.end_cause = None;
        self.ticks = 0;
        self.run_state = RunState::Running;
        self.events.push(GameEvent::RunStarted);
        log::info!("Run started");
    }

    /// Same as [`start`](Self::start); mid-run restarts discard the run
    pub fn restart(&mut self) {
        if self.run_state == RunState::Running {
            log::info!("Restarting mid-run at score {}", self.score);
        }
        self.start();
    }

    /// Apply the flap impulse. No-op unless running.
    pub fn flap(&mut self) {
        if self.run_state != RunState::Running {
            return;
        }
        self.actor.flap(self.config.flap_impulse);
        self.events.push(GameEvent::Flapped);
    }

    /// Terminate the run and freeze the score. Idempotent: only the first
    /// call of a run has any effect.
    pub fn end_run(&mut self, cause: EndCause) {
        if self.run_state != RunState::Running {
            return;
        }
        self.run_state = RunState::Ended;
        self.final_score = Some(self.score);
        self.end_cause = Some(cause);
        self.events.push(GameEvent::RunEnded {
            cause,
            final_score: self.score,
        });
        log::info!(
            "Run ended ({:?}) after {} ticks, score {}",
            cause,
            self.ticks,
            self.score
        );
    }

    /// Dispatch a device-agnostic command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Start => self.start(),
            Command::Restart => self.restart(),
            Command::Flap => self.flap(),
            Command::Press => match self.run_state {
                RunState::Running => self.flap(),
                RunState::Idle | RunState::Ended => self.start(),
            },
        }
    }

    pub fn state(&self) -> RunState {
        self.run_state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Score frozen at termination; `None` until a run has ended
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    pub fn end_cause(&self) -> Option<EndCause> {
        self.end_cause
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn stream(&self) -> &ObstacleStream {
        &self.stream
    }

    /// Take every event recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
