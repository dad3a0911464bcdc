use std::{env, fs, path::PathBuf, time::Duration};

use directories::BaseDirs;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::storage::{Storage, APP_DIR};

pub const DATA_DIR_ENV: &str = "CONSOLE_INPUT_DATA_DIR";

#[derive(Clone, Debug, Default, Deserialize)]
pub struct FileConfig {
    pub history_slot: Option<String>,
    pub blink_interval_ms: Option<u64>,
    pub dedupe_consecutive: Option<bool>,
    pub prompt: Option<String>,
    pub data_dir: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub history_slot: String,
    pub blink_interval: Duration,
    pub dedupe_consecutive: bool,
    pub prompt: String,
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_slot: "console-history".to_string(),
            blink_interval: Duration::from_millis(530),
            dedupe_consecutive: true,
            prompt: "$ ".to_string(),
            data_dir: None,
        }
    }
}

impl Config {
    /// Defaults, overlaid with `config.toml` when present, then the
    /// data-dir environment override.
    pub fn from_env_and_file() -> Result<Self> {
        let mut cfg = match Self::config_path() {
            Some(path) if path.exists() => {
                let text = fs::read_to_string(&path).map_err(|source| Error::Io {
                    path: path.clone(),
                    source,
                })?;
                let file_cfg = toml::from_str::<FileConfig>(&text)
                    .map_err(|source| Error::Config { path: path.clone(), source })?;
                debug!(target: "console", "config: loaded {}", path.display());
                Self::default().merge(file_cfg)
            }
            _ => Self::default(),
        };
        if let Ok(dir) = env::var(DATA_DIR_ENV) {
            if !dir.trim().is_empty() {
                cfg.data_dir = Some(PathBuf::from(dir));
            }
        }
        Ok(cfg)
    }

    pub fn merge(mut self, file_cfg: FileConfig) -> Self {
        if let Some(s) = file_cfg.history_slot {
            self.history_slot = s;
        }
        if let Some(ms) = file_cfg.blink_interval_ms {
            self.blink_interval = Duration::from_millis(ms.max(1));
        }
        if let Some(d) = file_cfg.dedupe_consecutive {
            self.dedupe_consecutive = d;
        }
        if let Some(p) = file_cfg.prompt {
            self.prompt = p;
        }
        if file_cfg.data_dir.is_some() {
            self.data_dir = file_cfg.data_dir;
        }
        self
    }

    pub fn storage(&self) -> Result<Storage> {
        match &self.data_dir {
            Some(dir) => Ok(Storage::at(dir)),
            None => Storage::default_location(),
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        let base = BaseDirs::new()?;
        Some(base.config_dir().join(APP_DIR).join("config.toml"))
    }
}
