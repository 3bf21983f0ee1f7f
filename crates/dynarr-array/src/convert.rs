//! Copying, slice views, and conversions to and from other containers.

#![allow(unsafe_code)]

use std::borrow::{Borrow, BorrowMut};
use std::fmt;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr;
use std::slice::SliceIndex;

use crate::array::{infallible, DynamicArray};

/// Deep copy into fresh storage sized to the live length.
impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len);
        copy.policy = self.policy;
        copy.extend(self.iter().cloned());
        copy
    }

    /// Reuses `self`'s storage when it is large enough.
    fn clone_from(&mut self, source: &Self) {
        self.policy = source.policy;
        self.truncate(source.len);
        let (head, tail) = source.as_slice().split_at(self.len);
        self.as_mut_slice().clone_from_slice(head);
        self.extend(tail.iter().cloned());
    }
}

impl<T> DynamicArray<T> {
    /// Convert into a boxed slice, shrinking storage to the live length.
    pub fn into_boxed_slice(mut self) -> Box<[T]> {
        if self.capacity() != self.len {
            self.shrink_to_fit();
        }
        if self.capacity() != self.len {
            // Best-effort shrink failed; the box must own an exact block.
            let mut exact = Self::with_capacity(self.len);
            exact.extend(self.take());
            self = exact;
        }
        let block = self.buf.release();
        // The block now travels with `block`; `self` drops as an empty array.
        self.len = 0;
        // SAFETY: the block came from the global allocator with
        // `Layout::array::<T>(len)`, which is the layout of `[T]` with
        // `len` elements, and every slot holds a live value. Empty and
        // zero-sized blocks use a dangling, aligned pointer, which `Box`
        // accepts for zero-sized allocations.
        unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(block.as_ptr(), block.len())) }
    }

    /// Convert into a `Vec` without copying elements.
    pub fn into_vec(self) -> Vec<T> {
        self.into_boxed_slice().into_vec()
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Bounds-checked indexing; panics when out of range. Use
/// [`DynamicArray::at`] for a recoverable check or
/// [`DynamicArray::get_unchecked`] to skip it.
impl<T, I: SliceIndex<[T]>> Index<I> for DynamicArray<T> {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for DynamicArray<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for DynamicArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for DynamicArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Moves each element of the literal into storage of exactly `N` slots.
impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(values: [T; N]) -> Self {
        let mut array = Self::with_capacity(N);
        array.extend(values);
        array
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(values: &[T]) -> Self {
        let mut array = Self::with_capacity(values.len());
        array.extend(values.iter().cloned());
        array
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(values: Vec<T>) -> Self {
        let mut array = Self::with_capacity(values.len());
        array.extend(values);
        array
    }
}

impl<T> From<DynamicArray<T>> for Vec<T> {
    fn from(array: DynamicArray<T>) -> Self {
        array.into_vec()
    }
}

impl<T> From<DynamicArray<T>> for Box<[T]> {
    fn from(array: DynamicArray<T>) -> Self {
        array.into_boxed_slice()
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        infallible(self.grow_amortized(lower));
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}
