use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use super::{Collection, RecordStore};
use crate::error::AppResult;

/// In-memory store. Used by tests and anywhere persistence is not wanted.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<Collection, Vec<Value>>>,
}

impl RecordStore for MemoryStore {
    fn get(&self, collection: Collection) -> AppResult<Vec<Value>> {
        let collections = self
            .collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(collections.get(&collection).cloned().unwrap_or_default())
    }

    fn put(&self, collection: Collection, records: Vec<Value>) -> AppResult<()> {
        let mut collections = self
            .collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        collections.insert(collection, records);
        Ok(())
    }
}
