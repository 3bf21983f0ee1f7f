//! Buffer allocation errors.

use std::alloc::{handle_alloc_error, Layout};
use std::error::Error;
use std::fmt;

use dynarr_core::ArrayError;

/// Failure to obtain a block of slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The byte size of the block does not fit in `isize::MAX`.
    CapacityOverflow {
        /// Number of element slots requested.
        requested: usize,
    },
    /// The global allocator returned null.
    OutOfMemory {
        /// Number of element slots requested.
        requested: usize,
        /// The layout that could not be satisfied.
        layout: Layout,
    },
}

impl AllocError {
    /// Number of element slots the failed request asked for.
    pub fn requested(&self) -> usize {
        match self {
            Self::CapacityOverflow { requested } | Self::OutOfMemory { requested, .. } => {
                *requested
            }
        }
    }

    /// Escalate to the process-level failure path.
    ///
    /// Capacity overflow panics; allocator exhaustion goes through
    /// [`handle_alloc_error`], which aborts by default.
    pub fn into_fatal(self) -> ! {
        match self {
            Self::CapacityOverflow { requested } => {
                panic!("capacity overflow: cannot allocate {requested} elements")
            }
            Self::OutOfMemory { layout, .. } => handle_alloc_error(layout),
        }
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: {requested} elements")
            }
            Self::OutOfMemory { requested, layout } => {
                write!(
                    f,
                    "out of memory: {requested} elements ({} bytes)",
                    layout.size()
                )
            }
        }
    }
}

impl Error for AllocError {}

impl From<AllocError> for ArrayError {
    fn from(err: AllocError) -> Self {
        ArrayError::AllocationFailure {
            requested: err.requested(),
        }
    }
}
