use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use directories::BaseDirs;
use tracing::debug;

use crate::error::{Error, Result};

pub const APP_DIR: &str = "console-input";

/// A directory of named slots, each holding one JSON array of strings.
#[derive(Clone, Debug)]
pub struct Storage {
    dir: PathBuf,
}

fn sanitize(name: &str) -> String {
    let mut s = name
        .trim()
        .replace(['<', '>', ':', '"', '/', '\\', '|', '?', '*'], "_");
    if s.is_empty() {
        s = "default".to_string();
    }
    s
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |source| Error::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl Storage {
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Per-user data directory, e.g. `~/.local/share/console-input`.
    pub fn default_location() -> Result<Self> {
        let base = BaseDirs::new().ok_or(Error::NoDataDir)?;
        Ok(Self::at(base.data_dir().join(APP_DIR)))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize(slot)))
    }

    /// A slot that was never written reads as an empty list.
    pub fn load_list(&self, slot: &str) -> Result<Vec<String>> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read(&path).map_err(io_err(&path))?;
        serde_json::from_slice(&data).map_err(|source| Error::Decode { path, source })
    }

    pub fn save_list(&self, slot: &str, items: &[String]) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(io_err(&self.dir))?;
        let path = self.slot_path(slot);
        let data = serde_json::to_vec(items)?;
        let mut tmp = path.clone();
        tmp.set_extension("json.tmp");
        {
            let mut f = fs::File::create(&tmp).map_err(io_err(&tmp))?;
            f.write_all(&data).map_err(io_err(&tmp))?;
            f.flush().map_err(io_err(&tmp))?;
        }
        fs::rename(&tmp, &path).map_err(io_err(&path))?;
        debug!(target: "console", "storage: wrote {} items to {}", items.len(), path.display());
        Ok(())
    }
}
