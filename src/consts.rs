//! Hard-coded configuration: board size, pacing and glyphs.

/// Board width in cells, border excluded.
pub const WIDTH: u16 = 30;

/// Board height in cells, border excluded.
pub const HEIGHT: u16 = 20;

/// Number of cells on the board. The head plus every tail segment can never
/// occupy more than this.
pub const MAX_SEGMENTS: usize = WIDTH as usize * HEIGHT as usize;

pub const INITIAL_SNAKE_LENGTH: usize = 1;

/// Tick length before the snake has grown at all.
pub const BASE_INTERVAL_MS: u64 = 150;

/// Every tail segment shortens the tick by this much.
pub const INTERVAL_STEP_MS: u64 = 2;

/// Floor for the tick length once the snake gets long.
pub const MIN_INTERVAL_MS: u64 = 20;

/// How long the game over screen stays up before the program exits.
pub const GAME_OVER_HOLD_MS: u64 = 4000;

pub const BACKGROUND_CHAR: char = '.';
pub const SNAKE_CHAR: char = '#';
pub const SNAKE_UP_CHAR: char = '^';
pub const SNAKE_DOWN_CHAR: char = 'v';
pub const SNAKE_LEFT_CHAR: char = '<';
pub const SNAKE_RIGHT_CHAR: char = '>';
pub const APPLE_CHAR: char = 'O';
pub const BORDER_CHAR: char = '#';

pub const START_TITLE: &str = "SNAKE";
pub const START_SUBTITLE: &str = "PRESS ANY KEY TO START";
pub const GAME_OVER_TITLE: &str = "GAME";
pub const GAME_OVER_SUBTITLE: &str = "OVER";
pub const WIN_TITLE: &str = "YOU";
pub const WIN_SUBTITLE: &str = "WIN";
