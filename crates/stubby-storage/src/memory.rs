use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::collections::BTreeMap;
use stubby_core::error::StorageResult;
use stubby_core::{Alias, Repository, StorageError, UrlEntry};

/// In-memory implementation of the Repository trait using DashMap.
///
/// Each key lives in one shard, and every per-key operation holds that
/// shard's lock for its whole duration. Operations on the same alias are
/// therefore serialized, while different aliases proceed in parallel.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    storage: DashMap<Alias, UrlEntry>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }
}

impl Repository for InMemoryRepository {
    fn insert(&self, alias: &Alias, entry: UrlEntry) -> StorageResult<()> {
        // The entry guard keeps the shard locked between the check and the insert.
        match self.storage.entry(alias.clone()) {
            Entry::Occupied(_) => Err(StorageError::Conflict(alias.to_string())),
            Entry::Vacant(vacant) => {
                vacant.insert(entry);
                Ok(())
            }
        }
    }

    fn get(&self, alias: &str) -> StorageResult<Option<UrlEntry>> {
        Ok(self.storage.get(alias).map(|entry| entry.value().clone()))
    }

    fn record_click(&self, alias: &str) -> StorageResult<Option<UrlEntry>> {
        let Some(mut entry) = self.storage.get_mut(alias) else {
            return Ok(None);
        };
        entry.record_click();
        Ok(Some(entry.value().clone()))
    }

    fn delete(&self, alias: &str) -> StorageResult<bool> {
        Ok(self.storage.remove(alias).is_some())
    }

    fn exists(&self, alias: &str) -> StorageResult<bool> {
        Ok(self.storage.contains_key(alias))
    }

    fn snapshot(&self) -> StorageResult<BTreeMap<Alias, UrlEntry>> {
        Ok(self
            .storage
            .iter()
            .map(|item| (item.key().clone(), item.value().clone()))
            .collect())
    }

    fn len(&self) -> StorageResult<usize> {
        Ok(self.storage.len())
    }
}
