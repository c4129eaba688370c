//! Model of a single snake round.

use std::collections::VecDeque;

use log::debug;
use rand::Rng;

use super::config::GameConfig;

/// Amount of time before the snake is forced to move.
pub const TICK_MILLIS: u64 = 400;

/// Where the snake starts every round, head only.
const START_CELL: (usize, usize) = (1, 3);
const START_DIRECTION: Direction = Direction::Down;

type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Clone)]
pub enum BoardError {
    InvalidSize,
}

/// Where the snake travels next. Cells are `(row, col)`, rows grow downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    #[must_use]
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    #[must_use]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// What a movement tick did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate,
    Collision(CollisionKind),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionKind {
    Wall,
    Body,
}

/// Grid bounds, the snake, the food and the score for one round.
///
/// The snake is kept head-first; no two segments ever share a cell because
/// a tick that would cause that reports a collision instead.
#[derive(Clone, Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    snake: VecDeque<(usize, usize)>,
    food: (usize, usize),
    direction: Direction,
    score: u32,
    alive: bool,
}

impl Board {
    /// Creates a fresh round: a one-segment snake at the starting cell,
    /// heading down, with food somewhere random.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] when the grid cannot hold the
    /// starting cell.
    pub fn new(config: GameConfig) -> Result<Self> {
        if config.rows <= START_CELL.0 || config.cols <= START_CELL.1 {
            return Err(BoardError::InvalidSize);
        }
        let mut snake = VecDeque::new();
        snake.push_front(START_CELL);
        let mut board = Self {
            rows: config.rows,
            cols: config.cols,
            snake,
            food: (0, 0),
            direction: START_DIRECTION,
            score: 0,
            alive: true,
        };
        board.food = board.random_cell();
        Ok(board)
    }

    // Uniform over the whole grid; the food may land on the snake.
    fn random_cell(&self) -> (usize, usize) {
        let mut rng = rand::thread_rng();
        (rng.gen_range(0..self.rows), rng.gen_range(0..self.cols))
    }

    /// Advances the snake one cell in the current direction. Callers stop
    /// ticking once a collision has been reported.
    ///
    /// # Panics
    ///
    /// Panics if the snake is empty or type conversions fail. Neither is
    /// expected to happen on a board built by [`Board::new`].
    pub fn tick(&mut self) -> TickOutcome {
        let front = *self.snake.front().unwrap();
        let delta = self.direction.delta();
        // the grid is bound far below i64 so the offset math always fits
        let new_x: i64 = i64::try_from(front.0).unwrap() + i64::from(delta.0);
        let new_y: i64 = i64::try_from(front.1).unwrap() + i64::from(delta.1);
        if new_x < 0
            || new_y < 0
            || new_x >= i64::try_from(self.rows).unwrap()
            || new_y >= i64::try_from(self.cols).unwrap()
        {
            debug!("Snake hit the wall heading {:?}", self.direction);
            self.alive = false;
            return TickOutcome::Collision(CollisionKind::Wall);
        }
        let new_head = (
            usize::try_from(new_x).unwrap(),
            usize::try_from(new_y).unwrap(),
        );
        // Checked against the body as it stands, tail included.
        if self.snake.contains(&new_head) {
            debug!("Snake ran into itself at {new_head:?}");
            self.alive = false;
            return TickOutcome::Collision(CollisionKind::Body);
        }
        self.snake.push_front(new_head);
        if new_head == self.food {
            self.score += 1;
            self.food = self.random_cell();
            return TickOutcome::Ate;
        }
        if self.snake.pop_back().is_none() {
            debug!("Removed from back but got none");
        }
        TickOutcome::Moved
    }

    /// Points the snake somewhere new for the next tick. Turning straight
    /// back into the neck is rejected.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            debug!("Rejected reversal from {:?}", self.direction);
            return false;
        }
        self.direction = direction;
        true
    }

    #[must_use]
    pub fn get_rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn get_cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn get_score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn get_food(&self) -> (usize, usize) {
        self.food
    }

    #[must_use]
    pub fn get_snake(&self) -> &VecDeque<(usize, usize)> {
        &self.snake
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[cfg(test)]
    pub(crate) fn with_state(
        config: GameConfig,
        snake: &[(usize, usize)],
        direction: Direction,
        food: (usize, usize),
    ) -> Self {
        Self {
            rows: config.rows,
            cols: config.cols,
            snake: snake.iter().copied().collect(),
            food,
            direction,
            score: 0,
            alive: true,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, food: (usize, usize)) {
        self.food = food;
    }
}
