pub mod random;

pub use random::{RandomGenerator, RandomGeneratorSettings, ALPHABET};

use stubby_core::Alias;

/// Trait for generating aliases.
///
/// Implementations are pure generators that don't interact with storage;
/// the caller re-draws when a generated alias is already taken.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<Alias>;
    /// Draws the next candidate alias.
    fn generate(&self) -> Self::Output;
}
