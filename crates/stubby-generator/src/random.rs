use crate::Generator;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stubby_core::alias::ALIAS_LENGTH;
use stubby_core::Alias;
use typed_builder::TypedBuilder;

/// The 62 symbols an alias is drawn from.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Configures a [`RandomGenerator`].
#[derive(Debug, Clone, Copy, Default, TypedBuilder)]
pub struct RandomGeneratorSettings {
    /// Fixed seed for reproducible sequences. Seeded from OS entropy when unset.
    #[builder(default, setter(strip_option))]
    pub seed: Option<u64>,
}

/// Draws aliases uniformly from [`ALPHABET`].
///
/// One RNG is seeded when the generator is built and reused for every
/// draw, so aliases requested in quick succession stay independent.
#[derive(Debug)]
pub struct RandomGenerator {
    rng: Mutex<StdRng>,
}

impl RandomGenerator {
    pub fn new(settings: RandomGeneratorSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new(RandomGeneratorSettings::default())
    }
}

impl Generator for RandomGenerator {
    type Output = Alias;

    fn generate(&self) -> Self::Output {
        let mut rng = self.rng.lock();
        let alias: String = (0..ALIAS_LENGTH)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();
        Alias::new(alias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generates_seven_alphanumeric_chars() {
        let generator = RandomGenerator::default();
        for _ in 0..100 {
            let alias = generator.generate();
            assert_eq!(alias.as_str().len(), 7);
            assert!(alias.is_generated_form());
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let settings = RandomGeneratorSettings::builder().seed(42).build();
        let first = RandomGenerator::new(settings);
        let second = RandomGenerator::new(settings);

        for _ in 0..10 {
            assert_eq!(first.generate(), second.generate());
        }
    }

    #[test]
    fn successive_draws_differ() {
        let generator = RandomGenerator::new(RandomGeneratorSettings::builder().seed(7).build());
        let drawn: HashSet<_> = (0..1_000).map(|_| generator.generate()).collect();
        // 62^7 possibilities; a repeat within 1000 draws means a broken RNG.
        assert_eq!(drawn.len(), 1_000);
    }

    #[test]
    fn draws_cover_whole_alphabet() {
        let generator = RandomGenerator::new(RandomGeneratorSettings::builder().seed(1).build());
        let seen: HashSet<char> = (0..2_000)
            .flat_map(|_| generator.generate().as_str().chars().collect::<Vec<_>>())
            .collect();
        assert_eq!(seen.len(), ALPHABET.len());
    }

    #[test]
    fn alphabet_has_62_unique_symbols() {
        let unique: HashSet<_> = ALPHABET.iter().collect();
        assert_eq!(unique.len(), 62);
        assert!(ALPHABET.iter().all(|b| b.is_ascii_alphanumeric()));
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RandomGenerator>();
    }
}
