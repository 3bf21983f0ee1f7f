//! The owning slot buffer.
//!
//! [`Buffer`] is an RAII wrapper around a single allocation of `len`
//! slots. Slots start uninitialized. The buffer frees its block exactly
//! once on drop and never drops slot contents; whoever writes values into
//! the slots is responsible for dropping or moving them out first.

#![allow(unsafe_code)]

use std::fmt;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use crate::error::AllocError;
use crate::raw;

/// An exclusively owned block of `len` element slots.
///
/// A buffer with `len == 0` owns nothing. Ownership can be exchanged with
/// [`swap_with`](Buffer::swap_with) or handed out with
/// [`release`](Buffer::release); at every point each block has exactly one
/// owner.
pub struct Buffer<T> {
    ptr: NonNull<T>,
    len: usize,
    _marker: PhantomData<T>,
}

// SAFETY: a `Buffer<T>` uniquely owns its slots, like `Box<[T]>`.
unsafe impl<T: Send> Send for Buffer<T> {}
// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync> Sync for Buffer<T> {}

/// A block released from a [`Buffer`].
///
/// Whoever holds a `RawBlock` owns the allocation. Hand it back to
/// [`Buffer::from_raw`] to have it freed; dropping it leaks the block.
#[must_use = "dropping a RawBlock leaks its allocation"]
#[derive(Debug)]
pub struct RawBlock<T> {
    ptr: NonNull<T>,
    len: usize,
}

impl<T> RawBlock<T> {
    /// Pointer to the first slot.
    pub fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Number of slots in the block.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the block has no slots.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Buffer<T> {
    /// A buffer that owns nothing.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Allocate a block of `n` uninitialized slots.
    ///
    /// `n == 0` yields a non-owning buffer without touching the allocator.
    pub fn allocate(n: usize) -> Result<Self, AllocError> {
        let ptr = raw::allocate::<T>(n)?;
        Ok(Self {
            ptr,
            len: n,
            _marker: PhantomData,
        })
    }

    /// Re-adopt a block previously handed out by [`release`](Buffer::release).
    pub fn from_raw(block: RawBlock<T>) -> Self {
        Self {
            ptr: block.ptr,
            len: block.len,
            _marker: PhantomData,
        }
    }

    /// Number of slots in the block.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer owns no slots. Inverse of [`has_block`](Buffer::has_block).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether this buffer owns a block.
    ///
    /// Zero-sized element types never touch the allocator but still report
    /// a block of `len` slots.
    pub fn has_block(&self) -> bool {
        self.len != 0
    }

    /// Pointer to the first slot. Dangling when the buffer owns nothing.
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable pointer to the first slot. Dangling when the buffer owns nothing.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Hand the block to the caller and leave this buffer empty.
    ///
    /// Slot contents are untouched: live values in the block travel with it.
    pub fn release(&mut self) -> RawBlock<T> {
        let block = RawBlock {
            ptr: self.ptr,
            len: self.len,
        };
        self.ptr = NonNull::dangling();
        self.len = 0;
        block
    }

    /// Exchange blocks with `other` in constant time.
    pub fn swap_with(&mut self, other: &mut Buffer<T>) {
        std::mem::swap(self, other);
    }

    /// Shared reference to slot `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index < self.len()` and the slot holds an initialized value.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "slot {index} out of {}", self.len);
        // SAFETY: caller guarantees the slot is in bounds and initialized.
        unsafe { &*self.ptr.as_ptr().add(index) }
    }

    /// Mutable reference to slot `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index < self.len()` and the slot holds an initialized value.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "slot {index} out of {}", self.len);
        // SAFETY: caller guarantees the slot is in bounds and initialized.
        unsafe { &mut *self.ptr.as_ptr().add(index) }
    }

    /// Move `value` into slot `index` without dropping the old contents.
    ///
    /// # Safety
    ///
    /// `index < self.len()`. If the slot held a live value it is leaked.
    pub unsafe fn write(&mut self, index: usize, value: T) {
        debug_assert!(index < self.len, "slot {index} out of {}", self.len);
        // SAFETY: caller guarantees the slot is in bounds.
        unsafe { ptr::write(self.ptr.as_ptr().add(index), value) };
    }

    /// Move the value out of slot `index`, leaving the slot logically
    /// uninitialized.
    ///
    /// # Safety
    ///
    /// `index < self.len()`, the slot is initialized, and the caller treats
    /// it as uninitialized afterwards.
    pub unsafe fn read(&mut self, index: usize) -> T {
        debug_assert!(index < self.len, "slot {index} out of {}", self.len);
        // SAFETY: caller guarantees the slot is in bounds and initialized.
        unsafe { ptr::read(self.ptr.as_ptr().add(index)) }
    }

    /// View the first `len` slots as a slice.
    ///
    /// # Safety
    ///
    /// `len <= self.len()` and slots `[0, len)` are initialized.
    pub unsafe fn as_slice(&self, len: usize) -> &[T] {
        debug_assert!(len <= self.len, "prefix {len} exceeds {}", self.len);
        // SAFETY: caller guarantees the prefix is in bounds and initialized;
        // `ptr` is non-null and aligned even when dangling.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), len) }
    }

    /// Mutable view of the first `len` slots.
    ///
    /// # Safety
    ///
    /// `len <= self.len()` and slots `[0, len)` are initialized.
    pub unsafe fn as_mut_slice(&mut self, len: usize) -> &mut [T] {
        debug_assert!(len <= self.len, "prefix {len} exceeds {}", self.len);
        // SAFETY: as for `as_slice`, plus `&mut self` guarantees uniqueness.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), len) }
    }

    /// Drop the values in slots `[start, end)` in place.
    ///
    /// # Safety
    ///
    /// `start <= end <= self.len()`, every slot in the range is initialized,
    /// and the caller treats them as uninitialized afterwards.
    pub unsafe fn drop_range(&mut self, start: usize, end: usize) {
        debug_assert!(start <= end && end <= self.len);
        // SAFETY: caller guarantees the range is in bounds and initialized.
        unsafe {
            let first = self.ptr.as_ptr().add(start);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, end - start));
        }
    }

    /// Bitwise-move `count` slots starting at `src` so they start at `dst`.
    ///
    /// The ranges may overlap. Slots left behind by the move keep stale
    /// bits and must be treated as uninitialized unless they are also part
    /// of the destination range.
    ///
    /// # Safety
    ///
    /// `src + count <= self.len()` and `dst + count <= self.len()`.
    pub unsafe fn shift(&mut self, src: usize, dst: usize, count: usize) {
        debug_assert!(src + count <= self.len && dst + count <= self.len);
        // SAFETY: caller guarantees both ranges are in bounds; `ptr::copy`
        // handles overlap.
        unsafe {
            let base = self.ptr.as_ptr();
            ptr::copy(base.add(src), base.add(dst), count);
        }
    }

    /// Bitwise-move the first `count` slots into the first `count` slots of
    /// `dst`.
    ///
    /// Afterwards the values live in `dst`; the source slots must be treated
    /// as uninitialized.
    ///
    /// # Safety
    ///
    /// `count` does not exceed either buffer's length, slots `[0, count)` of
    /// `self` are initialized, and the destination slots hold no live
    /// values (they would be leaked).
    pub unsafe fn relocate_into(&mut self, dst: &mut Buffer<T>, count: usize) {
        debug_assert!(count <= self.len && count <= dst.len);
        // SAFETY: two distinct buffers never share a block (`&mut` on both),
        // so the ranges cannot overlap; bounds are the caller's guarantee.
        unsafe { ptr::copy_nonoverlapping(self.ptr.as_ptr(), dst.ptr.as_ptr(), count) };
    }
}

impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        // SAFETY: `ptr`/`len` always describe either a block obtained from
        // `raw::allocate::<T>(len)` that only this buffer owns, or an empty
        // dangling block that `deallocate` ignores.
        unsafe { raw::deallocate(self.ptr, self.len) };
    }
}

impl<T> fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("len", &self.len)
            .field("has_block", &self.has_block())
            .finish()
    }
}
