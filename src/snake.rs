use std::collections::VecDeque;

use thiserror::Error;

use crate::consts::*;
use crate::{Coords, TermInt};
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Up => SNAKE_UP_CHAR,
            Down => SNAKE_DOWN_CHAR,
            Left => SNAKE_LEFT_CHAR,
            Right => SNAKE_RIGHT_CHAR,
        }
    }

    /// One step from `pos`, wrapping around the edges of a `width` x `height` board.
    pub fn step(self, pos: Coords, width: TermInt, height: TermInt) -> Coords {
        let (x, y) = pos;
        match self {
            Up => (x, if y == 0 { height - 1 } else { y - 1 }),
            Down => (x, if y + 1 >= height { 0 } else { y + 1 }),
            Left => (if x == 0 { width - 1 } else { x - 1 }, y),
            Right => (if x + 1 >= width { 0 } else { x + 1 }, y),
        }
    }
}

/// A cell occupied by the snake, along with the direction it was travelling
/// in when it passed through.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Segment {
    pub pos: Coords,
    pub dir: Direction,
}

impl Segment {
    pub fn new(pos: Coords, dir: Direction) -> Self {
        Segment { pos, dir }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnakeError {
    #[error("snake already covers all {capacity} cells of the board")]
    BoardFull { capacity: usize },
    #[error("segment at {pos:?} is off the board")]
    OffBoard { pos: Coords },
}

#[derive(Debug, Clone)]
pub struct Snake {
    head: Segment,
    // Newest first. May hold one stale entry past `length`, kept so that a
    // grow right after a shift widens the window over it.
    trail: VecDeque<Segment>,
    length: usize,
}

impl Snake {
    /// A snake of `INITIAL_SNAKE_LENGTH` with its head at `pos`, its single
    /// tail segment right behind it.
    pub fn new(pos: Coords, direction: Direction) -> Self {
        let behind = direction.opposite().step(pos, WIDTH, HEIGHT);
        let mut trail = VecDeque::with_capacity(MAX_SEGMENTS);
        trail.push_back(Segment::new(behind, direction));

        Snake { head: Segment::new(pos, direction), trail, length: INITIAL_SNAKE_LENGTH }
    }

    /// Builds a snake from an explicit tail, newest segment first. The length
    /// is the number of segments given.
    pub fn with_trail(head: Segment, trail: Vec<Segment>) -> Result<Self, SnakeError> {
        if trail.len() + 1 > MAX_SEGMENTS {
            return Err(SnakeError::BoardFull { capacity: MAX_SEGMENTS });
        }
        if let Some(seg) = std::iter::once(&head).chain(&trail).find(|seg| !on_board(seg.pos)) {
            return Err(SnakeError::OffBoard { pos: seg.pos });
        }

        let length = trail.len().max(INITIAL_SNAKE_LENGTH);
        Ok(Snake { head, trail: trail.into(), length })
    }

    pub fn head(&self) -> Segment {
        self.head
    }

    pub fn len(&self) -> usize {
        self.length
    }

    /// The active tail segments, newest first. Always `len()` long once the
    /// snake has moved at least once.
    pub fn tail(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.trail.iter().take(self.length)
    }

    /// Head followed by the active tail.
    pub fn body(&self) -> impl Iterator<Item = &Segment> + '_ {
        std::iter::once(&self.head).chain(self.tail())
    }

    /// Moves the head one cell in `direction`, wrapping at the edges, and
    /// returns the segment it just vacated, still facing the way the head
    /// entered it. The tail is left untouched.
    pub fn move_head(&mut self, direction: Direction) -> Segment {
        let vacated = self.head;
        self.head = Segment::new(direction.step(self.head.pos, WIDTH, HEIGHT), direction);
        vacated
    }

    /// Pushes `vacated` to the front of the tail, dropping whatever falls
    /// outside the current length.
    pub fn append_trail_and_shift(&mut self, vacated: Segment) {
        self.trail.push_front(vacated);
        self.trail.truncate(self.length + 1);
    }

    pub fn grow(&mut self) -> Result<(), SnakeError> {
        if self.fills_board() {
            return Err(SnakeError::BoardFull { capacity: MAX_SEGMENTS });
        }

        self.length += 1;
        Ok(())
    }

    pub fn fills_board(&self) -> bool {
        self.length + 1 >= MAX_SEGMENTS
    }

    pub fn occupies(&self, pos: Coords) -> bool {
        self.body().any(|seg| seg.pos == pos)
    }

    /// Whether the head sits on one of its own tail segments. Slot 0 is the
    /// cell the head just left and is not considered.
    pub fn bites_itself(&self) -> bool {
        self.tail().skip(1).any(|seg| seg.pos == self.head.pos)
    }
}

fn on_board(pos: Coords) -> bool {
    pos.0 < WIDTH && pos.1 < HEIGHT
}
