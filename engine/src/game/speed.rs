#[derive(Clone, Debug)]
pub struct SpeedController {
    threshold: u32,
    counter: u32,
    food_per_speedup: u32,
    decrement: u32,
    min_threshold: u32,
}

impl SpeedController {
    /// `min_threshold` is raised to at least 1 and the starting threshold to
    /// at least the minimum. A `food_per_speedup` of 0 never speeds up.
    pub fn new(initial_threshold: u32, food_per_speedup: u32, decrement: u32, min_threshold: u32) -> Self {
        let min_threshold = min_threshold.max(1);
        Self {
            threshold: initial_threshold.max(min_threshold),
            counter: 0,
            food_per_speedup,
            decrement,
            min_threshold,
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    #[cfg(test)]
    fn counter(&self) -> u32 {
        self.counter
    }

    pub fn should_move(&mut self) -> bool {
        self.counter = self.counter.saturating_add(1);
        if self.counter <= self.threshold {
            return false;
        }
        self.counter = 0;
        true
    }

    pub fn on_food_eaten(&mut self, food_eaten: u32) -> bool {
        if self.food_per_speedup == 0 || food_eaten % self.food_per_speedup != 0 {
            return false;
        }

        let lowered = self
            .threshold
            .saturating_sub(self.decrement)
            .max(self.min_threshold);
        let changed = lowered != self.threshold;
        self.threshold = lowered;
        changed
    }
}
