use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn stepped(&self, direction: Direction) -> Self {
        let (dx, dy) = direction
            .delta()
            .expect("Heading must never be Direction::None when moving");
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn is_within(&self, max: Point) -> bool {
        (0..=max.x).contains(&self.x) && (0..=max.y).contains(&self.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// No pending change. Never a current heading.
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    pub fn delta(&self) -> Option<(i32, i32)> {
        match self {
            Direction::None => None,
            Direction::Up => Some((0, -1)),
            Direction::Down => Some((0, 1)),
            Direction::Left => Some((-1, 0)),
            Direction::Right => Some((1, 0)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Running,
    GameOverCollision,
    GameOverTooLong,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        match self {
            GameStatus::Running => false,
            GameStatus::GameOverCollision | GameStatus::GameOverTooLong => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(&Direction::Down));
        assert!(Direction::Down.is_opposite(&Direction::Up));
        assert!(Direction::Left.is_opposite(&Direction::Right));
        assert!(Direction::Right.is_opposite(&Direction::Left));

        assert!(!Direction::Up.is_opposite(&Direction::Left));
        assert!(!Direction::Down.is_opposite(&Direction::Down));
        assert!(!Direction::None.is_opposite(&Direction::Up));
        assert!(!Direction::Right.is_opposite(&Direction::None));
    }

    #[test]
    fn test_stepped_follows_screen_axes() {
        let p = Point::new(5, 5);
        assert_eq!(p.stepped(Direction::Up), Point::new(5, 4));
        assert_eq!(p.stepped(Direction::Down), Point::new(5, 6));
        assert_eq!(p.stepped(Direction::Left), Point::new(4, 5));
        assert_eq!(p.stepped(Direction::Right), Point::new(6, 5));
    }

    #[test]
    #[should_panic(expected = "Direction::None")]
    fn test_stepped_with_none_panics() {
        Point::new(0, 0).stepped(Direction::None);
    }

    #[test]
    fn test_is_within_inclusive_bounds() {
        let max = Point::new(24, 24);
        assert!(Point::new(0, 0).is_within(max));
        assert!(Point::new(24, 24).is_within(max));
        assert!(!Point::new(-1, 3).is_within(max));
        assert!(!Point::new(3, 25).is_within(max));
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!GameStatus::Running.is_terminal());
        assert!(GameStatus::GameOverCollision.is_terminal());
        assert!(GameStatus::GameOverTooLong.is_terminal());
    }
}
