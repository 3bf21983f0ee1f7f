//! Error types for the dynarr workspace.
//!
//! Two families: [`ArrayError`] for recoverable failures of array
//! operations (checked access, fallible growth), and [`ConfigError`] for
//! rejected [`GrowthPolicy`](crate::GrowthPolicy) parameters.

use std::error::Error;
use std::fmt;

/// Errors returned by checked and fallible array operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArrayError {
    /// A logical index was not less than the array length.
    ///
    /// Returned by the checked accessors and by position-validating
    /// fallible operations such as `try_insert`.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Number of live elements at the time of the request.
        len: usize,
    },
    /// Storage for the requested number of slots could not be obtained.
    ///
    /// Covers both a byte size that overflows the address space and a
    /// null return from the global allocator. The array that reported it
    /// is left exactly as it was before the call.
    AllocationFailure {
        /// Number of element slots that were requested.
        requested: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::AllocationFailure { requested } => {
                write!(f, "failed to allocate storage for {requested} elements")
            }
        }
    }
}

impl Error for ArrayError {}

/// Errors from validating a [`GrowthPolicy`](crate::GrowthPolicy).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The growth factor must be at least 2 to keep appends amortized O(1).
    InvalidGrowthFactor {
        /// The rejected factor.
        factor: usize,
    },
    /// The minimum non-zero capacity must be at least 1.
    InvalidMinCapacity {
        /// The rejected minimum.
        min_capacity: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrowthFactor { factor } => {
                write!(f, "growth factor {factor} is invalid, must be at least 2")
            }
            Self::InvalidMinCapacity { min_capacity } => {
                write!(
                    f,
                    "minimum capacity {min_capacity} is invalid, must be at least 1"
                )
            }
        }
    }
}

impl Error for ConfigError {}
