use thiserror::Error;

/// Failures reported by `WordTable`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("capacity {capacity} is too small, at least 2 slots are required")]
    CapacityTooSmall { capacity: usize },
    #[error("no free or matching slot left in table of capacity {capacity}")]
    Full { capacity: usize },
    #[error("the empty string cannot be stored as a key")]
    EmptyWord,
}
