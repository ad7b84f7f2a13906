use super::body::SnakeBody;
use super::session_rng::SessionRng;
use super::types::Point;

#[derive(Clone, Debug)]
pub struct FoodPlacer {
    max: Point,
    width: usize,
    occupied: Vec<bool>,
    candidates: Vec<Point>,
}

impl FoodPlacer {
    pub fn new(max: Point) -> Self {
        let width = (max.x + 1).max(0) as usize;
        let cells = width * (max.y + 1).max(0) as usize;
        Self {
            max,
            width,
            occupied: vec![false; cells],
            candidates: Vec::with_capacity(cells),
        }
    }

    pub fn place(&mut self, body: &SnakeBody, rng: &mut SessionRng) -> Option<Point> {
        self.occupied.fill(false);
        for segment in body.iter().filter(|s| s.is_within(self.max)) {
            self.occupied[segment.y as usize * self.width + segment.x as usize] = true;
        }

        self.candidates.clear();
        for y in 0..=self.max.y {
            for x in 0..=self.max.x {
                if !self.occupied[y as usize * self.width + x as usize] {
                    self.candidates.push(Point::new(x, y));
                }
            }
        }

        if self.candidates.is_empty() {
            return None;
        }
        let pick = rng.random_range(0..self.candidates.len());
        Some(self.candidates[pick])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Direction;

    #[test]
    fn test_place_avoids_body() {
        let max = Point::new(4, 4);
        let body = SnakeBody::new(25, Point::new(4, 2), Direction::Right, 5);
        let mut placer = FoodPlacer::new(max);
        let mut rng = SessionRng::new(42);

        for _ in 0..200 {
            let food = placer.place(&body, &mut rng).unwrap();
            assert!(food.is_within(max));
            assert!(!body.contains(food));
        }
    }

    #[test]
    fn test_place_finds_the_only_free_cell() {
        // 2x2 grid, the body covers three cells.
        let mut body = SnakeBody::new(4, Point::new(1, 0), Direction::Right, 2);
        body.grow(Point::new(1, 1)).unwrap();
        let mut placer = FoodPlacer::new(Point::new(1, 1));
        let mut rng = SessionRng::new(7);

        for _ in 0..10 {
            assert_eq!(placer.place(&body, &mut rng), Some(Point::new(0, 1)));
        }
    }

    #[test]
    fn test_place_reaches_every_free_cell() {
        let max = Point::new(2, 2);
        let body = SnakeBody::new(9, Point::new(1, 1), Direction::Right, 2);
        let mut placer = FoodPlacer::new(max);
        let mut rng = SessionRng::new(42);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(placer.place(&body, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 7);
    }
}
