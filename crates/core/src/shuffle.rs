use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Source of presentation order for sessions, kept injectable for deterministic tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Shuffle {
    /// Uniform shuffle from the thread-local generator.
    #[default]
    Random,
    /// Uniform shuffle from a generator seeded with the given value.
    Seeded(u64),
    /// Keep the input order.
    Disabled,
}

impl Shuffle {
    /// Returns a shuffle seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(seed)
    }

    /// Reorders `items` in place according to this policy.
    pub fn apply<T>(&self, items: &mut [T]) {
        match self {
            Shuffle::Random => shuffle_with(items, &mut rand::rng()),
            Shuffle::Seeded(seed) => shuffle_with(items, &mut StdRng::seed_from_u64(*seed)),
            Shuffle::Disabled => {}
        }
    }
}

/// Fisher-Yates shuffle driven by a caller-provided generator.
pub fn shuffle_with<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}
