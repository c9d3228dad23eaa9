use std::time::Duration;

use anyhow::Result;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::Coords;
use crate::apple;
use crate::board::{self, Board};
use crate::consts::*;
use crate::frame::Frame;
use crate::input::{poll_direction, wait_for_resume, Key, Resume};
use crate::snake::{Snake, Direction::{self, *}};
use crate::term::Surface;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Crashed,
    Won,
    Quit,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Running,
    Won,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Phase {
    Start,
    Playing,
    GameOver(Outcome),
}

/// Everything that changes over the course of one session.
pub struct GameState {
    board: Board,
    snake: Snake,
    apple: Coords,
    direction: Direction,
    eaten: usize,
    rng: StdRng,
}

impl GameState {
    /// A fresh session: the snake in the middle of the board heading right,
    /// and an apple somewhere.
    pub fn new(mut rng: StdRng) -> Self {
        let apple = apple::spawn(&mut rng);
        let snake = Snake::new((WIDTH / 2, HEIGHT / 2), Right);
        Self::with_parts(snake, apple, rng)
    }

    /// A session picking up from an arbitrary snake and apple. The snake
    /// keeps heading the way its head faces.
    pub fn with_parts(snake: Snake, apple: Coords, rng: StdRng) -> Self {
        let direction = snake.head().dir;
        GameState { board: Board::new(), snake, apple, direction, eaten: 0, rng }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> Coords {
        self.apple
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Apples eaten this session.
    pub fn score(&self) -> usize {
        self.eaten
    }

    pub fn steer(&mut self, key: Option<Key>) {
        self.direction = poll_direction(key, self.direction);
    }

    /// Moves the snake one cell, eats the apple if it is there, and stamps
    /// the result onto the board.
    pub fn advance(&mut self) -> Status {
        let vacated = self.snake.move_head(self.direction);

        let ate = self.snake.head().pos == self.apple;
        if ate {
            self.apple = apple::spawn(&mut self.rng);
        }

        // Shift with the length the tick started with; growth only widens the window afterwards.
        self.snake.append_trail_and_shift(vacated);

        let mut status = Status::Running;
        if ate {
            self.eaten += 1;
            match self.snake.grow() {
                Ok(()) if self.snake.fills_board() => status = Status::Won,
                Ok(()) => debug!(length = self.snake.len(), apple = ?self.apple, "apple eaten"),
                Err(err) => {
                    warn!("{}", err);
                    status = Status::Won;
                }
            }
        }

        self.stamp();
        status
    }

    fn stamp(&mut self) {
        let head = self.snake.head();
        self.board.set(head.pos, head.dir.glyph());

        for seg in self.snake.tail() {
            self.board.set(seg.pos, seg.dir.glyph());
        }

        self.board.set(self.apple, APPLE_CHAR);
    }

    pub fn frame(&self) -> Frame {
        let body: Vec<Coords> = self.snake.body().map(|seg| seg.pos).collect();
        board::render(&self.board, &body, Some(self.apple))
    }

    /// Puts the background back under the snake so the next stamp starts clean.
    pub fn erase_marks(&mut self) {
        let cells: Vec<Coords> = self.snake.body().map(|seg| seg.pos).collect();
        for pos in cells {
            self.board.set(pos, BACKGROUND_CHAR);
        }
    }

    /// True while the head is clear of the rest of the snake.
    pub fn collision_check(&self) -> bool {
        !self.snake.bites_itself()
    }

    /// The board with the whole snake drawn as a plain body, for the moment it dies.
    pub fn crash_frame(&mut self) -> Frame {
        let cells: Vec<Coords> = self.snake.body().map(|seg| seg.pos).collect();
        for &pos in &cells {
            self.board.set(pos, SNAKE_CHAR);
        }
        self.board.set(self.apple, APPLE_CHAR);

        let frame = board::render(&self.board, &cells, Some(self.apple));
        self.erase_marks();
        frame
    }
}

/// Time between ticks for a snake of `length`. Longer snakes go faster, down
/// to `MIN_INTERVAL_MS`.
pub fn tick_interval(length: usize) -> Duration {
    let ms = BASE_INTERVAL_MS
        .saturating_sub(INTERVAL_STEP_MS.saturating_mul(length as u64))
        .max(MIN_INTERVAL_MS);
    Duration::from_millis(ms)
}

/// A static screen drawn on a freshly reset `board`: each line centered, one
/// blank row between lines, starting a quarter of the way down. The text is
/// highlighted like the snake.
pub fn banner(board: &mut Board, lines: &[&str]) -> Frame {
    board.reset();
    let mut highlight = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let y = HEIGHT / 4 + 2 * i as u16;
        highlight.extend(board.write_centered(y, line));
    }

    board::render(board, &highlight, None)
}

pub struct SnakeGame<S: Surface> {
    surface: S,
    // Start and game over screens.
    screen: Board,
}

impl<S: Surface> SnakeGame<S> {
    pub fn new(surface: S) -> Self {
        SnakeGame { surface, screen: Board::new() }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Start screen, one session, game over screen.
    pub fn run(&mut self, rng: StdRng) -> Result<Outcome> {
        self.run_session(GameState::new(rng))
    }

    pub fn run_session(&mut self, mut state: GameState) -> Result<Outcome> {
        let mut phase = Phase::Start;

        loop {
            phase = match phase {
                Phase::Start => {
                    if !self.show_intro()? {
                        return Ok(Outcome::Quit);
                    }
                    Phase::Playing
                }
                Phase::Playing => match self.play(&mut state)? {
                    Outcome::Quit => return Ok(Outcome::Quit),
                    outcome => Phase::GameOver(outcome),
                },
                Phase::GameOver(outcome) => {
                    self.game_over(outcome, state.score())?;
                    return Ok(outcome);
                }
            }
        }
    }

    /// Shows the title and waits for a key. Returns false if the player quit.
    pub fn show_intro(&mut self) -> Result<bool> {
        self.surface.clear()?;
        self.surface.draw(&banner(&mut self.screen, &[START_TITLE, START_SUBTITLE]))?;

        let key = self.surface.read_key()?;
        self.surface.clear()?;
        Ok(key != Key::Quit)
    }

    /// Ticks until the snake bites itself, fills the board, or the player quits.
    pub fn play(&mut self, state: &mut GameState) -> Result<Outcome> {
        info!(head = ?state.snake().head().pos, apple = ?state.apple(), "session started");
        state.board.reset();

        loop {
            let key = self.surface.poll_key()?;
            match key {
                Some(Key::Quit) => return Ok(Outcome::Quit),
                Some(Key::Pause) => {
                    if let Resume::Quit = wait_for_resume(&mut self.surface)? {
                        return Ok(Outcome::Quit);
                    }
                }
                _ => state.steer(key),
            }

            let status = state.advance();
            self.surface.draw(&state.frame())?;
            state.erase_marks();

            if status == Status::Won {
                info!(score = state.score(), "board filled");
                return Ok(Outcome::Won);
            }

            if !state.collision_check() {
                info!(score = state.score(), head = ?state.snake().head().pos, "snake bit itself");
                let frame = state.crash_frame();
                self.surface.draw(&frame)?;
                return Ok(Outcome::Crashed);
            }

            self.surface.sleep(tick_interval(state.snake().len()));
        }
    }

    pub fn game_over(&mut self, outcome: Outcome, score: usize) -> Result<()> {
        let (title, subtitle) = match outcome {
            Outcome::Won => (WIN_TITLE, WIN_SUBTITLE),
            _ => (GAME_OVER_TITLE, GAME_OVER_SUBTITLE),
        };
        let score_line = format!("SCORE {}", score);

        self.surface.clear()?;
        let frame = banner(&mut self.screen, &[title, subtitle, score_line.as_str()]);
        self.surface.draw(&frame)?;
        self.surface.sleep(Duration::from_millis(GAME_OVER_HOLD_MS));
        Ok(())
    }
}
