pub mod apple;
pub mod board;
pub mod consts;
pub mod frame;
pub mod game;
pub mod input;
pub mod logging;
pub mod snake;
pub mod term;

pub type TermInt = u16;
pub type Coords = (TermInt, TermInt);
