// src/utils/random.rs

use rand::Rng;

/// Source of randomness for quiz selection.
///
/// Injected through application state so tests can substitute a
/// deterministic implementation.
pub trait IndexPicker: Send + Sync {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&self, len: usize) -> usize;
}

/// Uniform picker backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngPicker;

impl IndexPicker for ThreadRngPicker {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}
