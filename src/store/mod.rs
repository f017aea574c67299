//! Record Store — ordered collections of flat JSON records.
//!
//! The store only knows how to fetch and replace a whole collection.
//! Filtering by `user_id` and sorting by `created_at` happen in the
//! handlers, which recompute every derived view from the full record
//! history on each read.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::AppResult;

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// The five persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Profiles,
    MoodLogs,
    ChatMessages,
    Questionnaires,
}

impl Collection {
    pub fn key(self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Profiles => "profiles",
            Collection::MoodLogs => "mood_logs",
            Collection::ChatMessages => "chat_messages",
            Collection::Questionnaires => "questionnaires",
        }
    }
}

/// Whole-collection get/put. Each `put` replaces the collection in one
/// write, so a read-modify-write sequence never leaves a partial state
/// behind.
pub trait RecordStore: Send + Sync {
    fn get(&self, collection: Collection) -> AppResult<Vec<Value>>;
    fn put(&self, collection: Collection, records: Vec<Value>) -> AppResult<()>;
}

/// Typed handle over a [`RecordStore`] implementation.
#[derive(Clone)]
pub struct Store {
    inner: Arc<dyn RecordStore>,
}

impl Store {
    pub fn new<S: RecordStore + 'static>(inner: S) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    pub fn load<T: DeserializeOwned>(&self, collection: Collection) -> AppResult<Vec<T>> {
        self.inner
            .get(collection)?
            .into_iter()
            .map(|record| serde_json::from_value(record).map_err(Into::into))
            .collect()
    }

    pub fn save<T: Serialize>(&self, collection: Collection, records: &[T]) -> AppResult<()> {
        let values = records
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        self.inner.put(collection, values)
    }

    pub fn append<T: Serialize>(&self, collection: Collection, record: &T) -> AppResult<()> {
        let mut records = self.inner.get(collection)?;
        records.push(serde_json::to_value(record)?);
        self.inner.put(collection, records)
    }

    /// Readiness probe: the store must be able to serve a collection read.
    pub fn probe(&self) -> bool {
        self.inner.get(Collection::Users).is_ok()
    }
}
