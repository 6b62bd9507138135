use std::collections::BTreeMap;
use std::sync::Arc;
use stubby_core::error::Result;
use stubby_core::{
    Alias, AliasStore, Clock, Repository, ShortenerError, StorageError, UrlEntry,
};
use stubby_generator::Generator;
use tracing::{debug, trace};

/// A concrete implementation of the `AliasStore` trait.
///
/// This service wraps a `Repository`, a `Generator` and a `Clock` to handle:
/// - Alias generation, re-drawing while the drawn alias is taken
/// - Entry creation stamped with the clock's current time
/// - Click accounting on resolve
///
/// Collisions are detected by the repository refusing an occupied key,
/// never by inspecting stored entries.
#[derive(Debug)]
pub struct ShortenerService<R, G, C> {
    repository: Arc<R>,
    generator: Arc<G>,
    clock: C,
}

impl<R, G, C: Clone> Clone for ShortenerService<R, G, C> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            generator: Arc::clone(&self.generator),
            clock: self.clock.clone(),
        }
    }
}

impl<R: Repository, G: Generator, C: Clock> ShortenerService<R, G, C> {
    pub fn new(repository: R, generator: G, clock: C) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
            clock,
        }
    }

    /// Number of aliases currently stored.
    pub fn len(&self) -> Result<usize> {
        Ok(self.repository.len()?)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.repository.is_empty()?)
    }
}

impl<R: Repository, G: Generator, C: Clock> AliasStore for ShortenerService<R, G, C> {
    fn add(&self, original_url: &str) -> Result<Alias> {
        let entry = UrlEntry::new(original_url, self.clock.now());

        // Unbounded: 62^7 candidates make exhaustion a non-concern.
        let mut attempts = 1u32;
        loop {
            let alias: Alias = self.generator.generate().into();
            match self.repository.insert(&alias, entry.clone()) {
                Ok(()) => {
                    debug!(alias = %alias, attempts, url = %original_url, "added alias");
                    return Ok(alias);
                }
                Err(StorageError::Conflict(_)) => {
                    trace!(alias = %alias, attempts, "alias taken, drawing again");
                    attempts += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn resolve(&self, alias: &str) -> Result<String> {
        trace!(alias = %alias, "resolving alias");

        match self.repository.record_click(alias)? {
            Some(entry) => {
                debug!(alias = %alias, url = %entry.original_url, clicks = entry.clicks, "resolved alias");
                Ok(entry.original_url)
            }
            None => {
                trace!(alias = %alias, "alias not found");
                Err(ShortenerError::NotFound(alias.to_owned()))
            }
        }
    }

    fn clicks(&self, alias: &str) -> Result<u64> {
        self.repository
            .get(alias)?
            .map(|entry| entry.clicks)
            .ok_or_else(|| ShortenerError::NotFound(alias.to_owned()))
    }

    fn list(&self) -> Result<BTreeMap<Alias, UrlEntry>> {
        Ok(self.repository.snapshot()?)
    }

    fn delete(&self, alias: &str) -> Result<()> {
        if self.repository.delete(alias)? {
            debug!(alias = %alias, "deleted alias");
            Ok(())
        } else {
            trace!(alias = %alias, "alias not found");
            Err(ShortenerError::NotFound(alias.to_owned()))
        }
    }
}
