use anyhow::{Context, Result};
use common::{Config, ConfigLoader, FsExt};
use log::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOptions {
    pub show_board: bool,
    pub show_moves: bool,
    pub perft_depth: usize,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            show_board: true,
            show_moves: false,
            perft_depth: 3,
        }
    }
}

impl Config for PlayOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            show_board: get_bool(config, "show_board", defaults.show_board)?,
            show_moves: get_bool(config, "show_moves", defaults.show_moves)?,
            perft_depth: get_usize(config, "perft_depth", defaults.perft_depth)?,
        })
    }
}

/// Loads the `play` scope of the config file, falling back to the defaults when there is no file.
pub fn load_options(config: &str) -> Result<PlayOptions> {
    let config_path = config.relative_to_cwd()?;

    if !config_path.is_file() {
        info!("No config found at {:?}, using defaults", config_path);
        return Ok(PlayOptions::default());
    }

    let config = ConfigLoader::new(config_path, "play".to_string())?;
    let options = config.load()?;

    info!("{:?}", options);

    Ok(options)
}

fn get_bool(config: &ConfigLoader, name: &str, default: bool) -> Result<bool> {
    match config.get(name) {
        Some(value) => value
            .as_bool()
            .with_context(|| format!("{} must be a boolean", name)),
        None => Ok(default),
    }
}

fn get_usize(config: &ConfigLoader, name: &str, default: usize) -> Result<usize> {
    match config.get(name) {
        Some(value) => value
            .as_usize()
            .with_context(|| format!("{} must be a non negative integer", name)),
        None => Ok(default),
    }
}
