use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, bail};
use serde::Deserialize;

pub const LOG_FILE_ENV: &str = "TERMLIFE_LOG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub board: BoardSizing,
    pub tick_ms: Option<u64>, // Skips the speed menu when set.
    pub log_file: Option<PathBuf>,
    pub log_filter: Option<String>,
}

/// Where the board dimensions come from. Either way they are read once and fixed for the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardSizing {
    #[default]
    Viewport,
    Fixed {
        height: usize,
        width: usize,
    },
}

impl Config {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        let serialized =
            fs::read(path).with_context(|| format!("Reading config {}", path.display()))?;
        let config: Config = serde_json::from_slice(&serialized)
            .with_context(|| format!("Parsing config {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.tick_ms == Some(0) {
            bail!("tick_ms must be positive");
        }

        if let BoardSizing::Fixed { height, width } = self.board
            && (height == 0 || width == 0)
        {
            bail!("fixed board size must be at least 1x1, got {height}x{width}");
        }

        Ok(())
    }

    pub fn tick_interval(&self) -> Option<Duration> {
        self.tick_ms.map(Duration::from_millis)
    }

    /// The log file, with the environment taking precedence over the config file.
    pub fn log_file(&self) -> Option<PathBuf> {
        std::env::var_os(LOG_FILE_ENV)
            .map(PathBuf::from)
            .or_else(|| self.log_file.clone())
    }
}
