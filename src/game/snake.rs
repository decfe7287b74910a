use super::direction::Direction;
use super::grid::Cell;

/// The player-controlled snake
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Occupied cells, head at index 0
    body: Vec<Cell>,
    direction: Direction,
    pending_growth: bool,
}

impl Snake {
    /// Create a snake of `length` cells trailing behind `head`
    pub fn new(head: Cell, direction: Direction, length: usize) -> Self {
        let behind = direction.opposite();
        let mut body = vec![head];

        for i in 1..length.max(1) {
            let prev = body[i - 1];
            body.push(prev.stepped(behind));
        }

        Self {
            body,
            direction,
            pending_growth: false,
        }
    }

    /// Build a snake from explicit segments, head first
    pub fn from_body(body: Vec<Cell>, direction: Direction) -> Option<Self> {
        if body.is_empty() {
            return None;
        }

        Some(Self {
            body,
            direction,
            pending_growth: false,
        })
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_growth(&self) -> bool {
        self.pending_growth
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false while the game runs, the body never drops below one cell
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Check if cell overlaps a segment other than the head
    pub fn collides_with_body(&self, cell: Cell) -> bool {
        self.body[1..].contains(&cell)
    }

    /// Mark the next advance as a growing one
    pub fn grow(&mut self) {
        self.pending_growth = true;
    }

    /// Request a new heading. Rejected when it would reverse onto the neck.
    pub fn set_direction(&mut self, candidate: Direction) -> bool {
        if self.direction.is_opposite(candidate) {
            return false;
        }

        self.direction = candidate;
        true
    }

    /// Step one cell forward, keeping the tail if growth is pending
    pub fn advance(&mut self) -> Cell {
        let new_head = self.head().stepped(self.direction);
        self.body.insert(0, new_head);

        if self.pending_growth {
            self.pending_growth = false;
        } else {
            self.body.pop();
        }

        new_head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_snake() -> Snake {
        Snake::from_body(
            vec![Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)],
            Direction::Right,
        )
        .unwrap()
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(5, 5));
        assert_eq!(snake.body()[1], Cell::new(4, 5));
        assert_eq!(snake.body()[2], Cell::new(3, 5));
        assert!(!snake.pending_growth());
    }

    #[test]
    fn test_zero_length_still_has_head() {
        let snake = Snake::new(Cell::new(2, 2), Direction::Up, 0);
        assert_eq!(snake.len(), 1);
        assert!(Snake::from_body(Vec::new(), Direction::Up).is_none());
    }

    #[test]
    fn test_advance_keeps_length() {
        let mut snake = line_snake();

        let head = snake.advance();
        assert_eq!(head, Cell::new(6, 5));
        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.body(),
            &[Cell::new(6, 5), Cell::new(5, 5), Cell::new(4, 5)]
        );
    }

    #[test]
    fn test_advance_with_growth() {
        let mut snake = line_snake();
        snake.grow();

        snake.advance();
        assert_eq!(snake.len(), 4);
        assert!(!snake.pending_growth());
        assert_eq!(snake.body()[3], Cell::new(3, 5));

        // Growth is consumed by a single move
        snake.advance();
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_length_changes_only_with_growth_flag() {
        let mut snake = Snake::new(Cell::new(10, 7), Direction::Right, 1);
        let turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];

        for step in 0..40 {
            if step % 3 == 0 {
                snake.grow();
            }
            snake.set_direction(turns[step % turns.len()]);

            let before = snake.len();
            let growing = snake.pending_growth();
            snake.advance();

            let expected = if growing { before + 1 } else { before };
            assert_eq!(snake.len(), expected);
        }
    }

    #[test]
    fn test_reversal_guard_rejects_opposites() {
        for dir in Direction::ALL {
            let mut snake = Snake::new(Cell::new(5, 5), dir, 1);
            assert!(!snake.set_direction(dir.opposite()));
            assert_eq!(snake.direction(), dir);
        }
    }

    #[test]
    fn test_reversal_guard_accepts_non_opposites() {
        let mut accepted = 0;

        for from in Direction::ALL {
            for to in Direction::ALL {
                if to == from || to == from.opposite() {
                    continue;
                }

                let mut snake = Snake::new(Cell::new(5, 5), from, 1);
                assert!(snake.set_direction(to));
                assert_eq!(snake.direction(), to);
                accepted += 1;
            }
        }

        assert_eq!(accepted, 8);
    }

    #[test]
    fn test_direction_applies_on_next_advance() {
        let mut snake = line_snake();
        snake.set_direction(Direction::Down);

        // Body is untouched until the snake actually moves
        assert_eq!(snake.head(), Cell::new(5, 5));

        snake.advance();
        assert_eq!(snake.head(), Cell::new(5, 6));
    }

    #[test]
    fn test_collision_excludes_head() {
        let snake = line_snake();
        assert!(!snake.collides_with_body(Cell::new(5, 5)));
        assert!(snake.collides_with_body(Cell::new(4, 5)));
        assert!(!snake.collides_with_body(Cell::new(10, 10)));
        assert!(snake.occupies(Cell::new(5, 5)));
    }
}
