//! Category assignment.
//!
//! Categories are placeholders until the games are curated: each record gets
//! one drawn uniformly at random, independent of its content. The draw goes
//! through [`CategorySource`] so callers can seed it or pin it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use h5_catalog_core::Category;

/// Supplies the category for the next record.
pub trait CategorySource {
    fn next_category(&mut self) -> Category;
}

/// Uniform draw from [`Category::all`] using any `rand` generator.
pub struct RandomCategories<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomCategories<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomCategories<StdRng> {
    /// Seeded from the operating system; differs on every run.
    pub fn from_os() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> CategorySource for RandomCategories<R> {
    fn next_category(&mut self) -> Category {
        let all = Category::all();
        all[self.rng.random_range(0..all.len())]
    }
}

/// Cycles through a fixed list of categories.
pub struct FixedCategories {
    sequence: Vec<Category>,
    next: usize,
}

impl FixedCategories {
    /// An empty list yields [`Category::Casual`] forever.
    pub fn new(sequence: Vec<Category>) -> Self {
        Self { sequence, next: 0 }
    }
}

impl CategorySource for FixedCategories {
    fn next_category(&mut self) -> Category {
        if self.sequence.is_empty() {
            return Category::Casual;
        }
        let category = self.sequence[self.next % self.sequence.len()];
        self.next += 1;
        category
    }
}
