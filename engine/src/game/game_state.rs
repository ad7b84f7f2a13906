use crate::log;
use super::body::SnakeBody;
use super::food::FoodPlacer;
use super::session_rng::SessionRng;
use super::settings::GameParameters;
use super::speed::SpeedController;
use super::types::{Direction, GameStatus, Point};

#[derive(Clone, Debug)]
pub struct SnakeGame {
    body: SnakeBody,
    food_placer: FoodPlacer,
    speed: SpeedController,
    rng: SessionRng,
    direction: Direction,
    pending_direction: Option<Direction>,
    food_position: Point,
    max_coordinate: Point,
    status: GameStatus,
    food_eaten: u32,
}

impl SnakeGame {
    /// Panics if `start_direction` is `Direction::None` or the snake does not
    /// fit the grid.
    pub fn new(params: &GameParameters, rng: SessionRng) -> Self {
        assert!(
            params.start_direction != Direction::None,
            "Start direction must not be Direction::None"
        );

        let body = SnakeBody::new(
            params.grid_cells(),
            params.start_position,
            params.start_direction,
            params.snake_length,
        );

        Self {
            body,
            food_placer: FoodPlacer::new(params.grid_bottom_right),
            speed: SpeedController::new(
                params.initial_tick_threshold,
                params.food_per_speedup,
                params.threshold_decrement,
                params.min_tick_threshold,
            ),
            rng,
            direction: params.start_direction,
            pending_direction: None,
            food_position: params.initial_food_position,
            max_coordinate: params.grid_bottom_right,
            status: GameStatus::Running,
            food_eaten: 0,
        }
    }

    pub fn with_seed(params: &GameParameters, seed: u64) -> Self {
        Self::new(params, SessionRng::new(seed))
    }

    pub fn advance(&mut self) -> GameStatus {
        if self.status != GameStatus::Running {
            return self.status;
        }

        if !self.speed.should_move() {
            return self.status;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let new_head = self.body.head().stepped(self.direction);

        self.status = if new_head == self.food_position {
            self.eat(new_head)
        } else {
            self.slide(new_head)
        };
        self.status
    }

    fn eat(&mut self, new_head: Point) -> GameStatus {
        self.food_eaten += 1;
        if self.speed.on_food_eaten(self.food_eaten) {
            log!(
                "Speed up after {} food: moving every {} ticks",
                self.food_eaten,
                self.speed.threshold() + 1
            );
        }

        if self.body.grow(new_head).is_err() {
            log!(
                "Game over: snake too long ({} of {} cells)",
                self.body.len() + 1,
                self.body.capacity()
            );
            return GameStatus::GameOverTooLong;
        }

        self.food_position = self
            .food_placer
            .place(&self.body, &mut self.rng)
            .expect("A successful growth always leaves a free cell");
        log!(
            "Ate food at ({}, {}). Length: {}. Next food at ({}, {})",
            new_head.x,
            new_head.y,
            self.body.len(),
            self.food_position.x,
            self.food_position.y
        );
        GameStatus::Running
    }

    fn slide(&mut self, new_head: Point) -> GameStatus {
        self.body.slide(new_head);

        if !new_head.is_within(self.max_coordinate) {
            log!("Game over: wall collision at ({}, {})", new_head.x, new_head.y);
            return GameStatus::GameOverCollision;
        }
        if self.body.head_hits_body() {
            log!("Game over: self collision at ({}, {})", new_head.x, new_head.y);
            return GameStatus::GameOverCollision;
        }
        GameStatus::Running
    }

    pub fn request_direction(&mut self, direction: Direction) {
        if self.status.is_terminal() {
            return;
        }
        if direction == Direction::None || direction.is_opposite(&self.direction) {
            return;
        }
        self.pending_direction = Some(direction);
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn length(&self) -> usize {
        self.body.len()
    }

    pub fn max_length(&self) -> usize {
        self.body.capacity()
    }

    pub fn food_eaten(&self) -> u32 {
        self.food_eaten
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Segment `index` counted from the head. Panics when `index >= length()`.
    pub fn segment(&self, index: usize) -> Point {
        self.body.segment(index)
    }

    pub fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter()
    }

    pub fn food_position(&self) -> Point {
        self.food_position
    }

    pub fn max_coordinate(&self) -> Point {
        self.max_coordinate
    }

    pub fn tick_threshold(&self) -> u32 {
        self.speed.threshold()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
