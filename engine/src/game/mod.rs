mod body;
mod food;
mod game_state;
mod session_rng;
mod settings;
mod speed;
mod types;

pub use body::{BodyOverflow, SnakeBody};
pub use food::FoodPlacer;
pub use game_state::SnakeGame;
pub use session_rng::SessionRng;
pub use settings::GameParameters;
pub use speed::SpeedController;
pub use types::{Direction, GameStatus, Point};
