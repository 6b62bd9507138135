//! URL shortener service implementation.
//!
//! This crate provides [`ShortenerService`], the concrete
//! [`AliasStore`](stubby_core::AliasStore) combining a storage backend, an
//! alias generator and a clock. Core types are re-exported from
//! `stubby_core`.

pub mod service;

pub use service::ShortenerService;
pub use stubby_core::{Alias, AliasStore, ShortenerError, UrlEntry};

use stubby_core::SystemClock;
use stubby_generator::{RandomGenerator, RandomGeneratorSettings};
use stubby_storage::InMemoryRepository;

/// The default in-process store: in-memory backend, random aliases, system time.
pub type InMemoryShortener = ShortenerService<InMemoryRepository, RandomGenerator, SystemClock>;

impl InMemoryShortener {
    /// Creates an empty in-memory store whose generator is seeded from OS entropy.
    pub fn in_memory() -> Self {
        Self::in_memory_with(RandomGeneratorSettings::default())
    }

    /// Creates an empty in-memory store with explicit generator settings.
    pub fn in_memory_with(settings: RandomGeneratorSettings) -> Self {
        ShortenerService::new(
            InMemoryRepository::new(),
            RandomGenerator::new(settings),
            SystemClock,
        )
    }
}
