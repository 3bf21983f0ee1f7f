//! Owning iteration.

#![allow(unsafe_code)]

use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use dynarr_buffer::Buffer;

use crate::array::DynamicArray;

/// An iterator that moves elements out of a [`DynamicArray`].
///
/// Holds the array's buffer; elements not yet yielded are dropped when the
/// iterator is, and the block is freed after that.
pub struct IntoIter<T> {
    buf: Buffer<T>,
    /// Live slots are `[start, end)`.
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    /// Number of elements not yet yielded.
    pub fn remaining(&self) -> usize {
        self.end - self.start
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        let index = self.start;
        self.start += 1;
        // SAFETY: `index` was in the live range, which no longer includes it.
        Some(unsafe { self.buf.read(index) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: `end` was the last live slot and is now outside the range.
        Some(unsafe { self.buf.read(self.end) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let (start, end) = (self.start, self.end);
        self.start = end;
        // SAFETY: [start, end) are the elements never yielded.
        unsafe { self.buf.drop_range(start, end) };
    }
}

impl<T> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &self.remaining())
            .finish()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let end = self.len;
        // Ownership of the live values moves to the iterator; `self` then
        // drops as an empty, unallocated array.
        self.len = 0;
        let buf = mem::take(&mut self.buf);
        IntoIter { buf, start: 0, end }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
