use thiserror::Error;

/// Error types for `MString` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum MStringError {
    /// The allocator could not provide the requested storage
    #[error("Allocation failed: could not allocate {requested} bytes")]
    AllocationFailed {
        /// Number of bytes requested
        requested: usize,
    },
    /// The requested size does not fit in `usize` after rounding
    #[error("Capacity overflow: {requested} bytes cannot be rounded to a power of two")]
    CapacityOverflow {
        /// Number of bytes requested
        requested: usize,
    },
    /// Index is beyond the current string length
    #[error("Index out of bounds: index {index} is beyond string length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the string
        length: usize,
    },
    /// Operation needs at least one byte of content
    #[error("Operation on empty string")]
    EmptyString,
}
