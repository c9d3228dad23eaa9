//! Log setup. The game owns the whole screen, so logs only ever go to a file.

use std::{env, fs::File, path::Path, sync::Mutex};

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Installs a file logger if `SNAKE_LOG` names a path. Without it nothing is logged.
pub fn init_from_env() -> Result<()> {
    match env::var_os("SNAKE_LOG") {
        Some(path) => init(Path::new(&path)),
        None => Ok(()),
    }
}

/// Sends logs to `path`, filtered by `RUST_LOG` (`info` when unset).
pub fn init(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow!("installing log subscriber: {}", err))
}
