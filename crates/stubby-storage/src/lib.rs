pub mod memory;

pub use memory::InMemoryRepository;
pub use stubby_core::{Repository, StorageError};
