//! Identifier generation capability

use uuid::Uuid;

/// Source of record identifiers
///
/// Implementations must return a fresh identifier on every call; the store
/// relies on this for its id-uniqueness invariant.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// UUIDv4 generator used outside of tests
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
