use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::{Direction, Point};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameParameters {
    /// Largest valid cell; the grid spans `0..=x` by `0..=y`.
    pub grid_bottom_right: Point,
    pub start_position: Point,
    pub start_direction: Direction,
    pub snake_length: usize,
    pub initial_food_position: Point,
    /// Calls to `advance` that are absorbed before each move.
    pub initial_tick_threshold: u32,
    pub food_per_speedup: u32,
    pub threshold_decrement: u32,
    pub min_tick_threshold: u32,
}

impl GameParameters {
    pub fn grid_cells(&self) -> usize {
        let width = (self.grid_bottom_right.x + 1).max(0) as usize;
        let height = (self.grid_bottom_right.y + 1).max(0) as usize;
        width * height
    }

    fn initial_segments(&self) -> impl Iterator<Item = Point> + '_ {
        let (dx, dy) = self.start_direction.delta().unwrap_or((0, 0));
        (0..self.snake_length as i32).map(move |i| {
            Point::new(
                self.start_position.x - dx * i,
                self.start_position.y - dy * i,
            )
        })
    }
}

impl Default for GameParameters {
    fn default() -> Self {
        Self {
            grid_bottom_right: Point::new(24, 24),
            start_position: Point::new(10, 10),
            start_direction: Direction::Right,
            snake_length: 2,
            initial_food_position: Point::new(20, 10),
            initial_tick_threshold: 10,
            food_per_speedup: 5,
            threshold_decrement: 1,
            min_tick_threshold: 1,
        }
    }
}

impl Validate for GameParameters {
    fn validate(&self) -> Result<(), String> {
        let max = self.grid_bottom_right;
        if max.x < 0 || max.y < 0 {
            return Err("grid_bottom_right must not be negative".to_string());
        }
        if self.start_direction == Direction::None {
            return Err("start_direction must be Up, Down, Left or Right".to_string());
        }
        if self.snake_length == 0 {
            return Err("snake_length must be at least 1".to_string());
        }
        if self.snake_length + 1 >= self.grid_cells() {
            return Err(format!(
                "snake_length must leave room to grow on a {}-cell grid",
                self.grid_cells()
            ));
        }
        if !self.initial_segments().all(|segment| segment.is_within(max)) {
            return Err("initial snake body must lie inside the grid".to_string());
        }
        if !self.initial_food_position.is_within(max) {
            return Err("initial_food_position must lie inside the grid".to_string());
        }
        if self
            .initial_segments()
            .any(|segment| segment == self.initial_food_position)
        {
            return Err("initial_food_position must not be on the snake".to_string());
        }
        if self.food_per_speedup == 0 {
            return Err("food_per_speedup must be at least 1".to_string());
        }
        Ok(())
    }
}
