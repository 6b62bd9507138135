use crate::alias::Alias;
use crate::entry::UrlEntry;
use crate::error::Result;
use std::collections::BTreeMap;

/// The alias store contract offered to every caller (CLI, server, tests).
pub trait AliasStore: Send + Sync + 'static {
    /// Shortens a URL and returns a freshly generated, unused alias.
    fn add(&self, original_url: &str) -> Result<Alias>;

    /// Returns the original URL for an alias and counts one click.
    ///
    /// This is a read-modify-write: the click is recorded atomically
    /// with the lookup. Fails with `NotFound` if the alias is absent.
    fn resolve(&self, alias: &str) -> Result<String>;

    /// Returns the click count of an alias without modifying it.
    fn clicks(&self, alias: &str) -> Result<u64>;

    /// Returns a snapshot of every entry.
    fn list(&self) -> Result<BTreeMap<Alias, UrlEntry>>;

    /// Removes an alias. Fails with `NotFound` if the alias is absent.
    fn delete(&self, alias: &str) -> Result<()>;
}
