use std::path::PathBuf;
use std::{env, fs, io};

use super::port::{KvStore, StoreError};

/// File-backed store: one UTF-8 file per key under `root`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Store rooted at the resolved data directory, created on demand.
    /// `Ok(None)` when no directory can be resolved at all.
    pub fn open_default() -> Result<Option<Self>, StoreError> {
        let Some(root) = resolve_data_path() else {
            return Ok(None);
        };
        fs::create_dir_all(&root)?;
        Ok(Some(Self::new(root)))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Resolve the data path from `ADAGIO_DATA_PATH` or XDG defaults.
pub fn resolve_data_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("ADAGIO_DATA_PATH") {
        return Some(PathBuf::from(p));
    }
    default_data_path()
}

/// Compute the default data path under `$XDG_DATA_HOME/adagio` or
/// `~/.local/share/adagio` when `XDG_DATA_HOME` is not set.
pub fn default_data_path() -> Option<PathBuf> {
    let data_home = if let Some(xdg) = env::var_os("XDG_DATA_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".local").join("share"))
    } else {
        None
    };

    data_home.map(|d| d.join("adagio"))
}
