use super::DataStore;
use crate::error::{HabitzError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

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

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(HabitzError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(HabitzError::Io(e)),
        }
    }

    fn write_slot(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        let target = self.slot_path(key);

        // Atomic write
        let tmp = self
            .root
            .join(format!(".{}-{}.tmp", key, std::process::id()));
        fs::write(&tmp, value).map_err(HabitzError::Io)?;
        fs::rename(&tmp, &target).map_err(HabitzError::Io)?;

        Ok(())
    }
}
