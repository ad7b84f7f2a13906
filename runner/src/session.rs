use std::time::Duration;

use ringbuffer::{AllocRingBuffer, RingBuffer};
use snake_engine::{log, GameStatus, SessionRng, SnakeGame};
use tokio::time::interval;

use crate::runner_config::{RunnerConfig, ScriptedTurn};

#[derive(Clone, Debug, PartialEq)]
pub struct SessionSummary {
    pub session_index: u32,
    pub seed: u64,
    pub status: GameStatus,
    pub ticks: u64,
    pub length: usize,
    pub food_eaten: u32,
}

/// Feeds one engine its scripted input, one `advance` per `step`.
pub struct SessionDriver {
    session_index: u32,
    game: SnakeGame,
    turns: Vec<ScriptedTurn>,
    next_turn: usize,
    tick: u64,
    event_log: AllocRingBuffer<String>,
}

impl SessionDriver {
    pub fn new(session_index: u32, config: &RunnerConfig, rng: SessionRng) -> Self {
        let mut turns = config.turns.clone();
        turns.sort_by_key(|turn| turn.tick);

        Self {
            session_index,
            game: SnakeGame::new(&config.game, rng),
            turns,
            next_turn: 0,
            tick: 0,
            event_log: AllocRingBuffer::new(config.event_log_size),
        }
    }

    pub fn game(&self) -> &SnakeGame {
        &self.game
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn event_log(&self) -> &AllocRingBuffer<String> {
        &self.event_log
    }

    pub fn step(&mut self) -> GameStatus {
        while let Some(turn) = self.turns.get(self.next_turn)
            && turn.tick <= self.tick
        {
            self.game.request_direction(turn.direction);
            self.next_turn += 1;
        }

        let length_before = self.game.length();
        let status = self.game.advance();
        self.tick += 1;

        if self.game.length() != length_before {
            let food = self.game.food_position();
            self.event_log.enqueue(format!(
                "tick {}: length {}, food now at ({}, {}), moving every {} ticks",
                self.tick,
                self.game.length(),
                food.x,
                food.y,
                self.game.tick_threshold() + 1
            ));
        }
        if status.is_terminal() {
            let head = self.game.segment(0);
            self.event_log.enqueue(format!(
                "tick {}: {:?} with head at ({}, {})",
                self.tick, status, head.x, head.y
            ));
        }

        status
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            session_index: self.session_index,
            seed: self.game.seed(),
            status: self.game.status(),
            ticks: self.tick,
            length: self.game.length(),
            food_eaten: self.game.food_eaten(),
        }
    }
}

pub async fn run_session(session_index: u32, config: &RunnerConfig, rng: SessionRng) -> SessionSummary {
    let mut driver = SessionDriver::new(session_index, config, rng);
    let mut tick_interval_timer = interval(Duration::from_millis(config.tick_interval_ms));

    log!(
        "[session:{}] started with seed {}",
        session_index,
        driver.game().seed()
    );

    while driver.tick() < config.max_ticks {
        tick_interval_timer.tick().await;
        if driver.step().is_terminal() {
            break;
        }
    }

    for event in driver.event_log().iter() {
        log!("[session:{}] {}", session_index, event);
    }

    let summary = driver.summary();
    log!(
        "[session:{}] seed {} finished: {:?} after {} ticks, length {}, food eaten {}",
        summary.session_index,
        summary.seed,
        summary.status,
        summary.ticks,
        summary.length,
        summary.food_eaten
    );
    summary
}

// Session N is seeded with base_seed + N.
pub async fn run_sessions(config: &RunnerConfig, base_seed: u64) -> Vec<SessionSummary> {
    let mut summaries = Vec::new();

    for session_index in 0..config.max_sessions {
        let rng = SessionRng::new(base_seed.wrapping_add(session_index as u64));
        let summary = run_session(session_index, config, rng).await;
        let game_over = summary.status.is_terminal();
        summaries.push(summary);

        if !game_over || !config.restart_on_game_over {
            break;
        }
        log!("Restarting with the same parameters");
    }

    summaries
}
