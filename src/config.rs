use crate::consts;
use crate::game::{Grid, GridError};
use serde::Deserialize;
use std::num::NonZeroU64;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Dimensions of the arena
    #[serde(default)]
    pub(crate) arena: Arena,

    /// Speed of the game
    #[serde(default)]
    pub(crate) timing: Timing,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                tracing::debug!(path = %path.display(), "No configuration file; using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    pub(crate) fn grid(&self) -> Grid {
        self.arena.0
    }
}

/// A validated `[arena]` table
#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(try_from = "RawArena")]
pub(crate) struct Arena(Grid);

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawArena {
    width: u16,
    height: u16,
    cell_size: u16,
}

impl Default for RawArena {
    fn default() -> RawArena {
        let grid = Grid::DEFAULT;
        RawArena {
            width: grid.width(),
            height: grid.height(),
            cell_size: grid.cell_size(),
        }
    }
}

impl TryFrom<RawArena> for Arena {
    type Error = GridError;

    fn try_from(value: RawArena) -> Result<Arena, GridError> {
        Grid::new(value.width, value.height, value.cell_size).map(Arena)
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Timing {
    /// Milliseconds between moves of the snake
    tick_delay_ms: NonZeroU64,

    /// Milliseconds between the snake running into itself and the game-over
    /// message
    death_delay_ms: u64,
}

impl Timing {
    pub(crate) fn tick_delay(&self) -> Duration {
        Duration::from_millis(self.tick_delay_ms.get())
    }

    pub(crate) fn set_tick_delay(&mut self, ms: NonZeroU64) {
        self.tick_delay_ms = ms;
    }

    pub(crate) fn death_delay(&self) -> Duration {
        Duration::from_millis(self.death_delay_ms)
    }
}

impl Default for Timing {
    fn default() -> Timing {
        Timing {
            tick_delay_ms: NonZeroU64::new(millis(consts::TICK_PERIOD)).unwrap_or(NonZeroU64::MIN),
            death_delay_ms: millis(consts::DEATH_DELAY),
        }
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
