use crate::alias::Alias;
use crate::entry::UrlEntry;
use crate::error::StorageResult;
use std::collections::BTreeMap;

/// Storage backend behind an [`AliasStore`](crate::AliasStore).
///
/// Every operation on a single key must be atomic: a concurrent
/// `record_click` and `delete` on the same alias observe one consistent
/// outcome.
pub trait Repository: Send + Sync + 'static {
    /// Inserts a new entry. Returns `Err(Conflict)` if the alias already exists.
    fn insert(&self, alias: &Alias, entry: UrlEntry) -> StorageResult<()>;

    /// Retrieves a copy of the entry for a given alias.
    /// Returns `None` if the alias does not exist.
    fn get(&self, alias: &str) -> StorageResult<Option<UrlEntry>>;

    /// Increments the click counter and returns the updated entry.
    /// Returns `None` if the alias does not exist.
    fn record_click(&self, alias: &str) -> StorageResult<Option<UrlEntry>>;

    /// Deletes the entry for a given alias.
    /// Returns `true` if the entry existed and was removed.
    fn delete(&self, alias: &str) -> StorageResult<bool>;

    /// Checks whether an alias is already taken.
    fn exists(&self, alias: &str) -> StorageResult<bool>;

    /// Copies every entry, ordered by alias.
    fn snapshot(&self) -> StorageResult<BTreeMap<Alias, UrlEntry>>;

    /// Number of stored entries.
    fn len(&self) -> StorageResult<usize>;

    fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.len()? == 0)
    }
}
