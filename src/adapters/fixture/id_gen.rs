//! Fixture adapter for the `IdGenerator` port.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::ports::IdGenerator;

/// ID generator that produces a predictable `prefix-NNNN` sequence.
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose ids start at `prefix-0001`.
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self { prefix: prefix.to_string(), counter: AtomicU64::new(0) }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{n:04}", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_and_prefixed() {
        let id_gen = SequentialIdGenerator::new("nav");
        assert_eq!(id_gen.generate_id(), "nav-0001");
        assert_eq!(id_gen.generate_id(), "nav-0002");
    }
}
