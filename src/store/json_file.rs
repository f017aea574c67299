use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::Value;

use super::{Collection, RecordStore};
use crate::error::AppResult;

/// File-backed store: one JSON array file per collection under `dir`,
/// named `mindbloom_<collection>.json`.
pub struct JsonFileStore {
    dir: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            lock: Mutex::new(()),
        })
    }

    fn path(&self, collection: Collection) -> PathBuf {
        self.dir.join(format!("mindbloom_{}.json", collection.key()))
    }
}

impl RecordStore for JsonFileStore {
    fn get(&self, collection: Collection) -> AppResult<Vec<Value>> {
        let _guard = self
            .lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let path = self.path(collection);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&path)?;
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&data)?)
    }

    fn put(&self, collection: Collection, records: Vec<Value>) -> AppResult<()> {
        let _guard = self
            .lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let path = self.path(collection);
        let data = serde_json::to_string(&records)?;
        // Write-then-rename keeps the visible file a complete array even
        // if the process dies mid-write.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}
