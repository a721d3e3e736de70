use super::DataStore;
use crate::error::{LarderError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store: each key lives in `<root>/<key>.json`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(LarderError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(LarderError::Io)?;
        Ok(Some(content))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        fs::write(self.path_for(key), value).map_err(LarderError::Io)?;
        Ok(())
    }
}
