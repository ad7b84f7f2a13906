pub mod config;
pub mod game;
pub mod logger;

pub use game::{
    Direction, GameParameters, GameStatus, Point, SessionRng, SnakeGame,
};
