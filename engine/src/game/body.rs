use super::types::{Direction, Point};

/// Growing would leave no free cell on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyOverflow;

// Segment i (0 = head) lives in slot (head_index + i) % length.
#[derive(Clone, Debug)]
pub struct SnakeBody {
    slots: Vec<Point>,
    head_index: usize,
    length: usize,
}

impl SnakeBody {
    pub fn new(capacity: usize, head: Point, direction: Direction, length: usize) -> Self {
        assert!(
            length >= 1 && length <= capacity,
            "Snake length {} does not fit a grid of {} cells",
            length,
            capacity
        );
        let (dx, dy) = direction
            .delta()
            .expect("Start direction must not be Direction::None");

        let mut slots = vec![Point::default(); capacity];
        for (i, slot) in slots.iter_mut().take(length).enumerate() {
            let i = i as i32;
            *slot = Point::new(head.x - dx * i, head.y - dy * i);
        }

        Self {
            slots,
            head_index: 0,
            length,
        }
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn head(&self) -> Point {
        self.slots[self.head_index]
    }

    pub fn segment(&self, index: usize) -> Point {
        assert!(
            index < self.length,
            "Segment index {} out of range for snake of length {}",
            index,
            self.length
        );
        self.slots[(self.head_index + index) % self.length]
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.length).map(move |i| self.slots[(self.head_index + i) % self.length])
    }

    pub fn contains(&self, point: Point) -> bool {
        self.slots[..self.length].contains(&point)
    }

    pub fn head_hits_body(&self) -> bool {
        let head = self.head();
        self.iter().skip(1).any(|segment| segment == head)
    }

    pub fn slide(&mut self, new_head: Point) {
        self.head_index = if self.head_index == 0 {
            self.length - 1
        } else {
            self.head_index - 1
        };
        self.slots[self.head_index] = new_head;
    }

    pub fn grow(&mut self, new_head: Point) -> Result<(), BodyOverflow> {
        if self.length + 1 >= self.capacity() {
            return Err(BodyOverflow);
        }

        self.slots
            .copy_within(self.head_index..self.length, self.head_index + 1);
        self.slots[self.head_index] = new_head;
        self.length += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(body: &SnakeBody) -> Vec<Point> {
        body.iter().collect()
    }

    #[test]
    fn test_new_extends_opposite_to_heading() {
        let head = Point::new(5, 5);
        let right = SnakeBody::new(100, head, Direction::Right, 3);
        assert_eq!(collect(&right), vec![Point::new(5, 5), Point::new(4, 5), Point::new(3, 5)]);

        let left = SnakeBody::new(100, head, Direction::Left, 2);
        assert_eq!(collect(&left), vec![Point::new(5, 5), Point::new(6, 5)]);

        let up = SnakeBody::new(100, head, Direction::Up, 2);
        assert_eq!(collect(&up), vec![Point::new(5, 5), Point::new(5, 6)]);

        let down = SnakeBody::new(100, head, Direction::Down, 2);
        assert_eq!(collect(&down), vec![Point::new(5, 5), Point::new(5, 4)]);
    }

    #[test]
    fn test_slide_wraps_head_index() {
        let mut body = SnakeBody::new(10, Point::new(2, 0), Direction::Right, 3);
        body.slide(Point::new(3, 0));
        assert_eq!(collect(&body), vec![Point::new(3, 0), Point::new(2, 0), Point::new(1, 0)]);
        body.slide(Point::new(4, 0));
        body.slide(Point::new(5, 0));
        body.slide(Point::new(6, 0));
        assert_eq!(collect(&body), vec![Point::new(6, 0), Point::new(5, 0), Point::new(4, 0)]);
        assert_eq!(body.len(), 3);
    }

    #[test]
    fn test_grow_after_slides_keeps_order() {
        let mut body = SnakeBody::new(10, Point::new(2, 0), Direction::Right, 3);
        body.slide(Point::new(3, 0));
        body.grow(Point::new(4, 0)).unwrap();
        assert_eq!(
            collect(&body),
            vec![Point::new(4, 0), Point::new(3, 0), Point::new(2, 0), Point::new(1, 0)]
        );

        body.slide(Point::new(5, 0));
        assert_eq!(
            collect(&body),
            vec![Point::new(5, 0), Point::new(4, 0), Point::new(3, 0), Point::new(2, 0)]
        );
    }

    #[test]
    fn test_grow_refuses_to_fill_last_cell() {
        // 2x2 grid, three segments, the fourth cell is the only one left.
        let mut body = SnakeBody::new(4, Point::new(1, 0), Direction::Right, 2);
        body.grow(Point::new(1, 1)).unwrap();
        assert_eq!(body.len(), 3);

        let before = collect(&body);
        assert_eq!(body.grow(Point::new(0, 1)), Err(BodyOverflow));
        assert_eq!(body.len(), 3);
        assert_eq!(collect(&body), before);
    }

    #[test]
    fn test_head_hits_body() {
        let mut body = SnakeBody::new(100, Point::new(5, 5), Direction::Right, 5);
        assert!(!body.head_hits_body());
        body.slide(Point::new(5, 6));
        body.slide(Point::new(4, 6));
        body.slide(Point::new(4, 5));
        assert!(body.head_hits_body());
    }

    #[test]
    fn test_moving_into_vacated_tail_is_not_a_hit() {
        // A 2x2 loop: the head takes the cell the tail leaves on the same tick.
        let mut body = SnakeBody::new(100, Point::new(1, 0), Direction::Right, 4);
        body.slide(Point::new(1, 1));
        body.slide(Point::new(0, 1));
        body.slide(Point::new(0, 0));
        assert!(!body.head_hits_body());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_segment_out_of_range_panics() {
        let body = SnakeBody::new(10, Point::new(5, 5), Direction::Right, 2);
        body.segment(2);
    }

    #[test]
    fn test_capacity_is_fixed() {
        let mut body = SnakeBody::new(16, Point::new(5, 5), Direction::Right, 2);
        for x in 6..12 {
            body.grow(Point::new(x, 5)).unwrap();
        }
        assert_eq!(body.capacity(), 16);
        assert_eq!(body.len(), 8);
        assert_eq!(body.segment(0), Point::new(11, 5));
        assert_eq!(body.segment(7), Point::new(4, 5));
    }
}
