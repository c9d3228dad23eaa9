//! Whole-session tests, driven through a scripted surface instead of a terminal.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{bail, Result};
use rand::{rngs::StdRng, SeedableRng};

use tsnake::consts::*;
use tsnake::frame::Frame;
use tsnake::game::{tick_interval, GameState, Outcome, SnakeGame};
use tsnake::input::Key;
use tsnake::snake::{Direction::*, Segment, Snake};
use tsnake::term::Surface;

/// Feeds pre-recorded keys, one per poll, and keeps everything drawn.
#[derive(Default)]
struct ScriptedSurface {
    polled: VecDeque<Option<Key>>,
    blocking: VecDeque<Key>,
    frames: Vec<Frame>,
    sleeps: Vec<Duration>,
    clears: usize,
}

impl ScriptedSurface {
    fn new(blocking: &[Key], polled: &[Option<Key>]) -> Self {
        ScriptedSurface {
            polled: polled.iter().copied().collect(),
            blocking: blocking.iter().copied().collect(),
            ..Default::default()
        }
    }

    fn last_frame(&self) -> &Frame {
        self.frames.last().expect("nothing drawn")
    }
}

impl Surface for ScriptedSurface {
    fn clear(&mut self) -> Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn poll_key(&mut self) -> Result<Option<Key>> {
        Ok(self.polled.pop_front().flatten())
    }

    fn read_key(&mut self) -> Result<Key> {
        match self.blocking.pop_front() {
            Some(key) => Ok(key),
            None => bail!("script ran out of keys"),
        }
    }

    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
    }
}

/// A snake of five cells heading right, curled so that down, left, up
/// brings the head back onto its own body.
fn curled_state() -> GameState {
    let head = Segment::new((10, 10), Right);
    let trail = vec![
        Segment::new((9, 10), Right),
        Segment::new((8, 10), Right),
        Segment::new((7, 10), Right),
        Segment::new((6, 10), Right),
    ];
    let snake = Snake::with_trail(head, trail).unwrap();
    GameState::with_parts(snake, (0, 0), StdRng::seed_from_u64(9))
}

fn frame_text(frame: &Frame) -> String {
    (0..frame.height()).map(|y| frame.row_text(y)).collect::<Vec<_>>().join("\n")
}

#[test]
fn moving_right_five_ticks() {
    let snake = Snake::new((15, 10), Right);
    let mut state = GameState::with_parts(snake, (0, 0), StdRng::seed_from_u64(1));

    for _ in 0..5 {
        state.steer(None);
        state.advance();
        state.erase_marks();
        assert!(state.collision_check());
    }

    assert_eq!(state.snake().head().pos, (20, 10));
    let tail: Vec<_> = state.snake().tail().map(|s| s.pos).collect();
    assert_eq!(tail, vec![(19, 10)]);
}

#[test]
fn wraps_off_the_right_edge() {
    let snake = Snake::new((WIDTH - 1, 10), Right);
    let mut state = GameState::with_parts(snake, (0, 0), StdRng::seed_from_u64(1));
    state.advance();
    assert_eq!(state.snake().head().pos, (0, 10));
}

#[test]
fn apple_in_the_path_is_eaten() {
    let snake = Snake::new((15, 10), Right);
    let mut state = GameState::with_parts(snake, (16, 10), StdRng::seed_from_u64(5));
    let before = state.snake().len();

    state.advance();

    assert_eq!(state.snake().len(), before + 1);
    assert_eq!(state.score(), 1);
    let (x, y) = state.apple();
    assert!(x < WIDTH && y < HEIGHT);
}

// Apples are placed without looking at the snake, so one can appear under it.
#[test]
fn apple_may_spawn_under_the_snake() {
    let body: Vec<Segment> = (1..HEIGHT)
        .flat_map(|y| (0..WIDTH).map(move |x| Segment::new((x, y), Right)))
        .collect();

    let landed_on_body = (0..20u64).any(|seed| {
        let snake = Snake::with_trail(Segment::new((0, 0), Right), body.clone()).unwrap();
        let mut state = GameState::with_parts(snake, (1, 0), StdRng::seed_from_u64(seed));
        state.advance();
        state.snake().occupies(state.apple())
    });

    assert!(landed_on_body);
}

#[test]
fn filling_the_board_wins() {
    let body: Vec<Segment> = (1..HEIGHT)
        .flat_map(|y| (0..WIDTH).map(move |x| Segment::new((x, y), Right)))
        .chain((2..WIDTH).map(|x| Segment::new((x, 0), Left)))
        .collect();
    assert_eq!(body.len(), MAX_SEGMENTS - 2);

    let snake = Snake::with_trail(Segment::new((1, 0), Left), body).unwrap();
    let mut state = GameState::with_parts(snake, (0, 0), StdRng::seed_from_u64(2));

    let mut game = SnakeGame::new(ScriptedSurface::new(&[], &[]));
    assert_eq!(game.play(&mut state).unwrap(), Outcome::Won);
    assert_eq!(state.snake().len(), MAX_SEGMENTS - 1);
}

#[test]
fn session_ends_on_self_bite() {
    let surface = ScriptedSurface::new(
        &[],
        &[Some(Key::Steer(Down)), Some(Key::Steer(Left)), Some(Key::Steer(Up))],
    );
    let mut game = SnakeGame::new(surface);
    let mut state = curled_state();

    assert_eq!(game.play(&mut state).unwrap(), Outcome::Crashed);
    assert_eq!(state.snake().head().pos, (9, 10));

    let surface = game.surface();
    // Three ticks drawn, plus the crash frame. Only the first two slept.
    assert_eq!(surface.frames.len(), 4);
    assert_eq!(surface.sleeps, vec![tick_interval(4); 2]);
    // The crash frame draws the head with the plain body glyph.
    assert_eq!(surface.last_frame().get(10, 11).unwrap().ch, SNAKE_CHAR);
}

#[test]
fn reversal_is_ignored() {
    let surface = ScriptedSurface::new(&[], &[Some(Key::Steer(Left)), None, Some(Key::Quit)]);
    let mut game = SnakeGame::new(surface);
    let mut state = curled_state();

    assert_eq!(game.play(&mut state).unwrap(), Outcome::Quit);
    assert_eq!(state.direction(), Right);
    assert_eq!(state.snake().head().pos, (12, 10));
}

#[test]
fn pause_blocks_until_resumed() {
    let surface = ScriptedSurface::new(
        &[Key::Steer(Up), Key::Other, Key::Pause],
        &[Some(Key::Pause), None, Some(Key::Quit)],
    );
    let mut game = SnakeGame::new(surface);
    let mut state = curled_state();

    assert_eq!(game.play(&mut state).unwrap(), Outcome::Quit);
    // Keys pressed while paused do not steer.
    assert_eq!(state.direction(), Right);
    assert_eq!(state.snake().head().pos, (12, 10));
    assert!(game.surface().blocking.is_empty());
}

#[test]
fn quitting_while_paused() {
    let surface = ScriptedSurface::new(&[Key::Quit], &[Some(Key::Pause)]);
    let mut game = SnakeGame::new(surface);
    let mut state = curled_state();

    assert_eq!(game.play(&mut state).unwrap(), Outcome::Quit);
    assert!(game.surface().frames.is_empty());
}

#[test]
fn start_screen_then_quit() {
    let surface = ScriptedSurface::new(&[Key::Quit], &[]);
    let mut game = SnakeGame::new(surface);

    assert_eq!(game.run(StdRng::seed_from_u64(3)).unwrap(), Outcome::Quit);

    let text = frame_text(game.surface().last_frame());
    assert!(text.contains(START_TITLE));
    assert!(text.contains(START_SUBTITLE));
    assert!(game.surface().clears > 0);
}

#[test]
fn full_run_shows_game_over() {
    let surface = ScriptedSurface::new(
        &[Key::Other],
        &[Some(Key::Steer(Down)), Some(Key::Steer(Left)), Some(Key::Steer(Up))],
    );
    let mut game = SnakeGame::new(surface);

    assert_eq!(game.run_session(curled_state()).unwrap(), Outcome::Crashed);

    let surface = game.surface();
    let text = frame_text(surface.last_frame());
    assert!(text.contains(GAME_OVER_TITLE));
    assert!(text.contains(GAME_OVER_SUBTITLE));
    assert!(text.contains("SCORE 0"));
    assert_eq!(surface.sleeps.last(), Some(&Duration::from_millis(GAME_OVER_HOLD_MS)));
    // Start banner, three ticks, crash frame, game over banner.
    assert_eq!(surface.frames.len(), 6);
}

#[test]
fn any_key_starts_play() {
    let surface = ScriptedSurface::new(&[Key::Other], &[None, Some(Key::Quit)]);
    let mut game = SnakeGame::new(surface);

    assert_eq!(game.run(StdRng::seed_from_u64(4)).unwrap(), Outcome::Quit);

    // Fresh session in the middle row, heading right.
    let row = game.surface().last_frame().row_text(HEIGHT / 2 + 1);
    assert!(row.contains(SNAKE_RIGHT_CHAR));
}

#[test]
fn game_over_screen_shows_score() {
    let mut game = SnakeGame::new(ScriptedSurface::new(&[], &[]));
    game.game_over(Outcome::Crashed, 7).unwrap();

    let surface = game.surface();
    assert!(frame_text(surface.last_frame()).contains("SCORE 7"));
    assert_eq!(surface.sleeps, vec![Duration::from_millis(GAME_OVER_HOLD_MS)]);
}

#[test]
fn winning_banner() {
    let mut game = SnakeGame::new(ScriptedSurface::new(&[], &[]));
    game.game_over(Outcome::Won, MAX_SEGMENTS - 2).unwrap();

    let text = frame_text(game.surface().last_frame());
    assert!(text.contains(WIN_TITLE));
    assert!(text.contains(WIN_SUBTITLE));
}

#[test]
fn border_and_background_in_play() {
    let surface = ScriptedSurface::new(&[], &[None, Some(Key::Quit)]);
    let mut game = SnakeGame::new(surface);
    let mut state = curled_state();
    game.play(&mut state).unwrap();

    let frame = game.surface().last_frame();
    assert_eq!(frame.row_text(0), BORDER_CHAR.to_string().repeat(WIDTH as usize + 2));
    // Head moved to (11, 10); the apple sits in the top left corner.
    assert_eq!(frame.get(12, 11).unwrap().ch, SNAKE_RIGHT_CHAR);
    assert_eq!(frame.get(1, 1).unwrap().ch, APPLE_CHAR);
    assert_eq!(frame.get(5, 5).unwrap().ch, BACKGROUND_CHAR);
}
