//! Low-level primitives for block allocation.
//!
//! The only module that calls into `std::alloc`. Zero-length blocks and
//! zero-sized element types never reach the allocator; they are
//! represented by a dangling, well-aligned pointer.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::mem;
use std::ptr::NonNull;

use tracing::debug;

use crate::error::AllocError;

/// Whether a block of `n` slots of `T` needs real memory.
fn needs_memory<T>(n: usize) -> bool {
    n != 0 && mem::size_of::<T>() != 0
}

/// Allocate an uninitialized block of `n` slots.
pub(crate) fn allocate<T>(n: usize) -> Result<NonNull<T>, AllocError> {
    if !needs_memory::<T>(n) {
        return Ok(NonNull::dangling());
    }
    let layout = Layout::array::<T>(n).map_err(|_| {
        debug!(requested = n, "block layout overflows");
        AllocError::CapacityOverflow { requested: n }
    })?;
    // SAFETY: `layout` has non-zero size: `n > 0` and `T` is not zero-sized.
    let ptr = unsafe { alloc::alloc(layout) };
    NonNull::new(ptr.cast::<T>()).ok_or_else(|| {
        debug!(requested = n, bytes = layout.size(), "allocator returned null");
        AllocError::OutOfMemory {
            requested: n,
            layout,
        }
    })
}

/// Free a block previously returned by [`allocate`].
///
/// # Safety
///
/// `ptr` must have been returned by `allocate::<T>(n)` with this exact `n`
/// and must not have been freed already.
pub(crate) unsafe fn deallocate<T>(ptr: NonNull<T>, n: usize) {
    if !needs_memory::<T>(n) {
        return;
    }
    // SAFETY: `allocate::<T>(n)` succeeded with `Layout::array::<T>(n)`,
    // so this size and alignment describe a valid layout.
    let layout =
        unsafe { Layout::from_size_align_unchecked(mem::size_of::<T>() * n, mem::align_of::<T>()) };
    // SAFETY: per the caller contract, `ptr` was allocated with `layout`.
    unsafe { alloc::dealloc(ptr.as_ptr().cast::<u8>(), layout) };
}
