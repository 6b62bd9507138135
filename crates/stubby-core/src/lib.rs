//! Core types and traits for the Stubby URL shortener.
//!
//! This crate provides the shared vocabulary used by the storage backends,
//! the alias generators and the shortener service.

pub mod alias;
pub mod clock;
pub mod entry;
pub mod error;
pub mod repository;
pub mod store;

pub use alias::Alias;
pub use clock::{Clock, SystemClock};
pub use entry::UrlEntry;
pub use error::{ShortenerError, StorageError};
pub use repository::Repository;
pub use store::AliasStore;
