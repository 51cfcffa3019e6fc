//! ID generator port for producing unique identifiers.

/// Generates unique identifiers.
///
/// Abstracting ID generation allows deterministic trace and transition ids
/// by substituting a predictable sequence during tests.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}
