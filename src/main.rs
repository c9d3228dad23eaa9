use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use tsnake::game::SnakeGame;
use tsnake::logging;
use tsnake::term::TermManager;

fn main() -> Result<()> {
    logging::init_from_env()?;

    let mut game = SnakeGame::new(TermManager::new()?);
    // The terminal is handed back when `game` drops, on every path out of here.
    let outcome = game.run(StdRng::from_entropy())?;
    info!(?outcome, "exiting");
    Ok(())
}
