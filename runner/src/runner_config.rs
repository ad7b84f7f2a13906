use serde::{Deserialize, Serialize};
use snake_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use snake_engine::{Direction, GameParameters};

pub const DEFAULT_CONFIG_FILE_NAME: &str = "snake_runner_config.yaml";

pub fn get_config_manager(
    path: &str,
) -> ConfigManager<FileContentConfigProvider, RunnerConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

/// A direction request issued right before the given `advance` call
/// (counted from 0 within a session).
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct ScriptedTurn {
    pub tick: u64,
    pub direction: Direction,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct RunnerConfig {
    pub game: GameParameters,
    pub tick_interval_ms: u64,
    /// Calls to `advance` per session before it is abandoned as still running.
    pub max_ticks: u64,
    pub restart_on_game_over: bool,
    pub max_sessions: u32,
    pub event_log_size: usize,
    #[serde(default)]
    pub turns: Vec<ScriptedTurn>,
}

impl Validate for RunnerConfig {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        if self.tick_interval_ms == 0 {
            return Err("tick_interval_ms must be at least 1".to_string());
        }
        if self.max_ticks == 0 {
            return Err("max_ticks must be at least 1".to_string());
        }
        if self.max_sessions == 0 {
            return Err("max_sessions must be at least 1".to_string());
        }
        if self.event_log_size == 0 {
            return Err("event_log_size must be at least 1".to_string());
        }
        if self.turns.iter().any(|turn| turn.direction == Direction::None) {
            return Err("scripted turns must name a direction".to_string());
        }
        Ok(())
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            game: GameParameters::default(),
            tick_interval_ms: 17,
            max_ticks: 10_000,
            restart_on_game_over: false,
            max_sessions: 1,
            event_log_size: 32,
            turns: vec![
                ScriptedTurn { tick: 120, direction: Direction::Down },
                ScriptedTurn { tick: 240, direction: Direction::Right },
            ],
        }
    }
}
