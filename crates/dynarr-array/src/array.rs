//! The growable array and its capacity management.
//!
//! A [`DynamicArray`] owns one [`Buffer`] plus a logical length. Slots
//! `[0, len)` hold live values; slots `[len, capacity)` are uninitialized.
//! Every operation that needs more room goes through one path:
//!
//! 1. allocate a fresh buffer of the target capacity (the only step that
//!    can fail; on failure nothing has changed),
//! 2. bitwise-move the live prefix into it,
//! 3. swap the fresh buffer in,
//! 4. let the old buffer drop, which frees its block and nothing else.
//!
//! Relocation is a `memcpy` and cannot panic, so growth is all-or-nothing
//! with respect to allocation failure.

#![allow(unsafe_code)]

use std::mem;

use dynarr_buffer::{AllocError, Buffer};
use dynarr_core::{ArrayError, CapacityRequest, GrowthPolicy};
use tracing::{debug, trace};

/// A resizable, contiguous sequence of `T` with amortized O(1) append.
///
/// Capacity grows by the array's [`GrowthPolicy`] (doubling from 1 by
/// default) when an append finds it full; `reserve` grows to an exact
/// target; nothing shrinks capacity except [`shrink_to_fit`].
///
/// Removed elements (`pop_back`, `erase`, `clear`, truncating `resize`)
/// are dropped immediately.
///
/// [`shrink_to_fit`]: DynamicArray::shrink_to_fit
pub struct DynamicArray<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
    pub(crate) policy: GrowthPolicy,
}

/// Unwrap an allocation result, escalating failures to a panic or abort.
pub(crate) fn infallible<R>(result: Result<R, AllocError>) -> R {
    match result {
        Ok(value) => value,
        Err(err) => err.into_fatal(),
    }
}

impl<T> DynamicArray<T> {
    /// An empty array. Does not allocate.
    pub const fn new() -> Self {
        Self::with_policy(GrowthPolicy::DOUBLING)
    }

    /// An empty array that grows according to `policy`.
    pub const fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            buf: Buffer::new(),
            len: 0,
            policy,
        }
    }

    /// An empty array with room for exactly `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if the byte size overflows; aborts if the allocator fails.
    pub fn with_capacity(capacity: usize) -> Self {
        infallible(Self::alloc_with_capacity(capacity))
    }

    /// Fallible form of [`with_capacity`](DynamicArray::with_capacity).
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        Ok(Self::alloc_with_capacity(capacity)?)
    }

    /// An empty array pre-sized by a [`CapacityRequest`].
    pub fn reserved(request: CapacityRequest) -> Self {
        Self::with_capacity(request.capacity())
    }

    /// `len` default values, with capacity exactly `len`.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut array = Self::with_capacity(len);
        array.fill_to(len, T::default);
        array
    }

    /// `len` copies of `value`, with capacity exactly `len`.
    ///
    /// The last slot receives `value` itself, so `len` values cost
    /// `len - 1` clones.
    pub fn from_elem(value: T, len: usize) -> Self
    where
        T: Clone,
    {
        let mut array = Self::with_capacity(len);
        if len > 0 {
            array.fill_to(len - 1, || value.clone());
            array.push_back(value);
        }
        array
    }

    fn alloc_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        Ok(Self {
            buf: Buffer::allocate(capacity)?,
            len: 0,
            policy: GrowthPolicy::DOUBLING,
        })
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The growth policy this array was built with.
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) are initialized and len <= capacity.
        unsafe { self.buf.as_slice(self.len) }
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: slots [0, len) are initialized and len <= capacity.
        unsafe { self.buf.as_mut_slice(self.len) }
    }

    /// Pointer to the first element. Dangling when nothing is allocated.
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Mutable pointer to the first element. Dangling when nothing is allocated.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// Iterator over shared references, front to back.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterator over mutable references, front to back.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Checked access to element `index`.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        self.as_slice().get(index).ok_or(ArrayError::OutOfRange {
            index,
            len: self.len,
        })
    }

    /// Checked mutable access to element `index`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Element `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index < self.len()`. Debug builds assert it.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "index {index} out of range for length {}", self.len);
        // SAFETY: caller guarantees index < len, so the slot is initialized.
        unsafe { self.buf.get_unchecked(index) }
    }

    /// Mutable element `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index < self.len()`. Debug builds assert it.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "index {index} out of range for length {}", self.len);
        // SAFETY: caller guarantees index < len, so the slot is initialized.
        unsafe { self.buf.get_unchecked_mut(index) }
    }

    /// Append `value`, growing by the policy if the array is full.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts if the allocator fails.
    pub fn push_back(&mut self, value: T) {
        infallible(self.grow_amortized(1));
        // SAFETY: grow_amortized(1) guarantees len < capacity.
        unsafe { self.push_unchecked(value) };
    }

    /// Append `value`, reporting allocation failure instead of aborting.
    ///
    /// On failure the array is unchanged and `value` is dropped.
    pub fn try_push_back(&mut self, value: T) -> Result<(), ArrayError> {
        self.grow_amortized(1)?;
        // SAFETY: grow_amortized(1) guarantees len < capacity.
        unsafe { self.push_unchecked(value) };
        Ok(())
    }

    /// Remove and return the last element. Capacity is kept.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was the last live slot and is now outside the
        // live prefix, so reading it out transfers ownership exactly once.
        Some(unsafe { self.buf.read(self.len) })
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// Returns the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`, or on capacity overflow.
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        let len = self.len;
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );
        infallible(self.grow_amortized(1));
        // SAFETY: index <= len and len < capacity after growing.
        unsafe { self.insert_unchecked(index, value) }
    }

    /// Fallible form of [`insert`](DynamicArray::insert).
    ///
    /// Reports `OutOfRange` for `index > len` and `AllocationFailure` when
    /// growth fails; either way the array is unchanged.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, ArrayError> {
        if index > self.len {
            return Err(ArrayError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.grow_amortized(1)?;
        // SAFETY: index <= len and len < capacity after growing.
        Ok(unsafe { self.insert_unchecked(index, value) })
    }

    /// Remove and return the element at `index`, shifting `[index + 1, len)`
    /// one slot left. Capacity is kept.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn erase(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(
            index < len,
            "removal index (is {index}) should be < len (is {len})"
        );
        // SAFETY: index < len, so the slot is live. After the read it is a
        // hole that the shift overwrites; the now-duplicated last slot falls
        // outside the shortened live prefix.
        unsafe {
            let value = self.buf.read(index);
            self.buf.shift(index + 1, index, len - index - 1);
            self.len = len - 1;
            value
        }
    }

    /// Drop every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drop elements past `len`. No-op if the array is not longer than `len`.
    pub fn truncate(&mut self, len: usize) {
        let old_len = self.len;
        if len >= old_len {
            return;
        }
        // Shorten first so a panicking destructor cannot cause a double drop.
        self.len = len;
        // SAFETY: [len, old_len) were live and are now outside the prefix.
        unsafe { self.buf.drop_range(len, old_len) };
    }

    /// Resize to `new_len`, filling new slots with `T::default()`.
    ///
    /// Shrinking drops the tail and keeps capacity. Growing within capacity
    /// fills in place. Growing past capacity reallocates to
    /// [`GrowthPolicy::resize_capacity`] (twice `new_len` by default).
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Like [`resize`](DynamicArray::resize), producing new values with `f`.
    pub fn resize_with<F>(&mut self, new_len: usize, f: F)
    where
        F: FnMut() -> T,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }
        infallible(self.grow_for_resize(new_len));
        self.fill_to(new_len, f);
    }

    /// Fallible form of [`resize`](DynamicArray::resize).
    ///
    /// If growth fails the array is unchanged.
    pub fn try_resize(&mut self, new_len: usize) -> Result<(), ArrayError>
    where
        T: Default,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        self.grow_for_resize(new_len)?;
        self.fill_to(new_len, T::default);
        Ok(())
    }

    /// Grow capacity to exactly `capacity` if it is currently smaller.
    ///
    /// Never shrinks; a target at or below the current capacity is a no-op.
    pub fn reserve(&mut self, capacity: usize) {
        infallible(self.try_reserve_exact(capacity));
    }

    /// Fallible form of [`reserve`](DynamicArray::reserve).
    ///
    /// On failure the array, including its capacity, is unchanged.
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), ArrayError> {
        Ok(self.try_reserve_exact(capacity)?)
    }

    /// Reallocate so that capacity equals length.
    ///
    /// Best effort: if the smaller block cannot be allocated the array
    /// keeps its current storage.
    pub fn shrink_to_fit(&mut self) {
        let old_capacity = self.capacity();
        if old_capacity == self.len {
            return;
        }
        if self.relocate(self.len).is_ok() {
            debug!(
                from = old_capacity,
                to = self.len,
                "shrank array storage to fit"
            );
        }
    }

    /// Exchange contents, capacity and policy with `other` in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Move the contents out, leaving `self` empty with no allocation.
    ///
    /// The source keeps its growth policy.
    pub fn take(&mut self) -> Self {
        let empty = Self::with_policy(self.policy);
        mem::replace(self, empty)
    }

    /// Write `value` at `len` and bump the length.
    ///
    /// # Safety
    ///
    /// `len < capacity`.
    unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: caller guarantees slot `len` exists and is not live.
        unsafe { self.buf.write(self.len, value) };
        self.len += 1;
    }

    /// # Safety
    ///
    /// `index <= len` and `len < capacity`.
    unsafe fn insert_unchecked(&mut self, index: usize, value: T) -> &mut T {
        let tail = self.len - index;
        // SAFETY: [index, len) shifts into [index + 1, len + 1), which fits
        // because len < capacity. Slot `index` is then a hole for `value`.
        unsafe {
            self.buf.shift(index, index + 1, tail);
            self.buf.write(index, value);
        }
        self.len += 1;
        // SAFETY: index < len now.
        unsafe { self.buf.get_unchecked_mut(index) }
    }

    /// Fill slots `[len, new_len)` with values from `f`.
    ///
    /// The length is bumped after every write, so a panic in `f` leaves a
    /// valid array holding the values produced so far.
    fn fill_to<F>(&mut self, new_len: usize, mut f: F)
    where
        F: FnMut() -> T,
    {
        debug_assert!(new_len <= self.capacity());
        while self.len < new_len {
            let value = f();
            // SAFETY: len < new_len <= capacity.
            unsafe { self.push_unchecked(value) };
        }
    }

    /// Make room for `additional` more elements using the growth policy.
    pub(crate) fn grow_amortized(&mut self, additional: usize) -> Result<(), AllocError> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(AllocError::CapacityOverflow {
                requested: usize::MAX,
            })?;
        let capacity = self.capacity();
        if required <= capacity {
            return Ok(());
        }
        let target = self.policy.next_capacity(capacity).max(required);
        self.relocate(target)
    }

    fn grow_for_resize(&mut self, new_len: usize) -> Result<(), AllocError> {
        if new_len <= self.capacity() {
            return Ok(());
        }
        self.relocate(self.policy.resize_capacity(new_len))
    }

    fn try_reserve_exact(&mut self, capacity: usize) -> Result<(), AllocError> {
        if capacity <= self.capacity() {
            return Ok(());
        }
        self.relocate(capacity)
    }

    /// Move the live prefix into a fresh block of `new_capacity` slots.
    ///
    /// All-or-nothing: if allocation fails, `self` is untouched.
    fn relocate(&mut self, new_capacity: usize) -> Result<(), AllocError> {
        debug_assert!(new_capacity >= self.len);
        let mut fresh = Buffer::allocate(new_capacity)?;
        trace!(
            from = self.capacity(),
            to = new_capacity,
            len = self.len,
            "relocating array storage"
        );
        // SAFETY: [0, len) is live in the old block; the fresh block has at
        // least len empty slots. After the move the old slots are dead.
        unsafe { self.buf.relocate_into(&mut fresh, self.len) };
        self.buf.swap_with(&mut fresh);
        // `fresh` now holds the old block with no live values; dropping it
        // frees the memory only.
        drop(fresh);
        Ok(())
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<CapacityRequest> for DynamicArray<T> {
    fn from(request: CapacityRequest) -> Self {
        Self::reserved(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynarr_core::reserve;
    use dynarr_test_utils::DropCounter;

    fn collect<T: Clone>(array: &DynamicArray<T>) -> Vec<T> {
        array.iter().cloned().collect()
    }

    #[test]
    fn new_array_is_empty_and_unallocated() {
        let array: DynamicArray<i32> = DynamicArray::new();
        assert!(array.is_empty());
        assert_eq!(array.len(), 0);
        assert_eq!(array.capacity(), 0);
    }

    #[test]
    fn push_back_doubles_from_one() {
        let mut array = DynamicArray::new();
        let mut seen = Vec::new();
        for i in 0..9 {
            array.push_back(i);
            seen.push(array.capacity());
        }
        assert_eq!(seen, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
        assert_eq!(collect(&array), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn custom_policy_is_used_for_growth() {
        let policy = GrowthPolicy::new(3, 4).unwrap();
        let mut array = DynamicArray::with_policy(policy);
        array.push_back(1u8);
        assert_eq!(array.capacity(), 4);
        for i in 0..4 {
            array.push_back(i);
        }
        assert_eq!(array.capacity(), 12);
        assert_eq!(array.policy(), policy);
    }

    #[test]
    fn with_len_fills_defaults() {
        let array: DynamicArray<String> = DynamicArray::with_len(3);
        assert_eq!(array.len(), 3);
        assert_eq!(array.capacity(), 3);
        assert!(array.iter().all(String::is_empty));
    }

    #[test]
    fn from_elem_fills_copies() {
        let array = DynamicArray::from_elem("x".to_string(), 4);
        assert_eq!(collect(&array), ["x", "x", "x", "x"]);
        assert_eq!(array.capacity(), 4);
        let empty = DynamicArray::from_elem(1u8, 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn capacity_request_reserves_without_elements() {
        let array: DynamicArray<u64> = DynamicArray::from(reserve(10));
        assert_eq!(array.len(), 0);
        assert_eq!(array.capacity(), 10);
        let array: DynamicArray<u64> = DynamicArray::reserved(CapacityRequest::new(3));
        assert_eq!(array.capacity(), 3);
    }

    #[test]
    fn worked_example() {
        let mut array = DynamicArray::new();
        array.push_back(1);
        array.push_back(2);
        array.push_back(3);
        assert_eq!(collect(&array), [1, 2, 3]);

        assert_eq!(*array.insert(1, 9), 9);
        assert_eq!(collect(&array), [1, 9, 2, 3]);

        assert_eq!(array.erase(1), 9);
        assert_eq!(collect(&array), [1, 2, 3]);

        array.resize(5);
        assert_eq!(collect(&array), [1, 2, 3, 0, 0]);
        assert!(array.capacity() >= 5);

        let capacity = array.capacity();
        array.resize(1);
        assert_eq!(collect(&array), [1]);
        assert_eq!(array.capacity(), capacity);

        array.reserve(10);
        assert_eq!(array.capacity(), 10);
        assert_eq!(collect(&array), [1]);
    }

    #[test]
    fn resize_past_capacity_allocates_twice_len() {
        let mut array: DynamicArray<u8> = DynamicArray::with_capacity(2);
        array.resize(5);
        assert_eq!(array.len(), 5);
        assert_eq!(array.capacity(), 10);
    }

    #[test]
    fn resize_within_capacity_keeps_capacity() {
        let mut array: DynamicArray<u8> = DynamicArray::with_capacity(8);
        array.resize(6);
        assert_eq!(array.capacity(), 8);
        assert!(array.iter().all(|&v| v == 0));
    }

    #[test]
    fn resize_with_uses_closure() {
        let mut array = DynamicArray::new();
        let mut next = 0;
        array.resize_with(3, || {
            next += 1;
            next
        });
        assert_eq!(collect(&array), [1, 2, 3]);
    }

    #[test]
    fn reserve_below_capacity_is_noop() {
        let mut array = DynamicArray::with_capacity(8);
        array.push_back('a');
        let ptr = array.as_ptr();
        array.reserve(4);
        array.reserve(8);
        assert_eq!(array.capacity(), 8);
        assert_eq!(array.as_ptr(), ptr);
        assert_eq!(collect(&array), ['a']);
    }

    #[test]
    fn pop_back_keeps_capacity() {
        let mut array = DynamicArray::new();
        array.push_back(1);
        array.push_back(2);
        assert_eq!(array.pop_back(), Some(2));
        assert_eq!(array.pop_back(), Some(1));
        assert_eq!(array.pop_back(), None);
        assert_eq!(array.capacity(), 2);
    }

    #[test]
    fn insert_at_ends() {
        let mut array = DynamicArray::new();
        array.insert(0, 2);
        array.insert(0, 1);
        array.insert(2, 3);
        assert_eq!(collect(&array), [1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "insertion index (is 2) should be <= len (is 1)")]
    fn insert_past_end_panics() {
        let mut array = DynamicArray::new();
        array.push_back(1);
        array.insert(2, 5);
    }

    #[test]
    #[should_panic(expected = "removal index (is 0) should be < len (is 0)")]
    fn erase_from_empty_panics() {
        let mut array: DynamicArray<i32> = DynamicArray::new();
        array.erase(0);
    }

    #[test]
    fn try_insert_reports_out_of_range() {
        let mut array = DynamicArray::new();
        array.push_back(1);
        assert_eq!(
            array.try_insert(3, 0),
            Err(ArrayError::OutOfRange { index: 3, len: 1 })
        );
        assert_eq!(array.try_insert(1, 2).copied(), Ok(2));
        assert_eq!(collect(&array), [1, 2]);
    }

    #[test]
    fn at_checks_bounds() {
        let mut array = DynamicArray::new();
        array.push_back(10);
        assert_eq!(array.at(0), Ok(&10));
        assert_eq!(array.at(1), Err(ArrayError::OutOfRange { index: 1, len: 1 }));
        *array.at_mut(0).unwrap() = 11;
        assert_eq!(array.at_mut(5), Err(ArrayError::OutOfRange { index: 5, len: 1 }));
        assert_eq!(unsafe { *array.get_unchecked(0) }, 11);
        unsafe { *array.get_unchecked_mut(0) = 12 };
        assert_eq!(array.at(0), Ok(&12));
    }

    #[test]
    fn clear_keeps_capacity_and_drops_elements() {
        let counter = DropCounter::new();
        let mut array = DynamicArray::new();
        for i in 0..5 {
            array.push_back(counter.track(i));
        }
        let capacity = array.capacity();
        array.clear();
        assert_eq!(counter.dropped(), 5);
        assert!(array.is_empty());
        assert_eq!(array.capacity(), capacity);
    }

    #[test]
    fn erase_and_truncate_drop_promptly() {
        let counter = DropCounter::new();
        let mut array = DynamicArray::new();
        for i in 0..6 {
            array.push_back(counter.track(i));
        }
        let removed = array.erase(2);
        assert_eq!(counter.dropped(), 0);
        drop(removed);
        assert_eq!(counter.dropped(), 1);

        array.resize_with(2, || unreachable!());
        assert_eq!(counter.dropped(), 4);
        assert_eq!(array.iter().map(|t| t.id).collect::<Vec<_>>(), [0, 1]);

        drop(array);
        assert_eq!(counter.dropped(), 6);
    }

    #[test]
    fn growth_does_not_drop_relocated_elements() {
        let counter = DropCounter::new();
        let mut array = DynamicArray::new();
        for i in 0..33 {
            array.push_back(counter.track(i));
        }
        assert_eq!(counter.dropped(), 0);
        drop(array);
        assert_eq!(counter.dropped(), 33);
    }

    #[test]
    fn shrink_to_fit_matches_len() {
        let mut array = DynamicArray::with_capacity(16);
        array.push_back(1);
        array.push_back(2);
        array.shrink_to_fit();
        assert_eq!(array.capacity(), 2);
        array.clear();
        array.shrink_to_fit();
        assert_eq!(array.capacity(), 0);
    }

    #[test]
    fn swap_exchanges_everything() {
        let policy = GrowthPolicy::new(4, 1).unwrap();
        let mut a = DynamicArray::with_policy(policy);
        a.push_back(1);
        let mut b = DynamicArray::with_capacity(5);
        b.push_back(7);
        b.push_back(8);

        a.swap(&mut b);
        assert_eq!(collect(&a), [7, 8]);
        assert_eq!(a.capacity(), 5);
        assert_eq!(a.policy(), GrowthPolicy::default());
        assert_eq!(collect(&b), [1]);
        assert_eq!(b.policy(), policy);
    }

    #[test]
    fn take_leaves_source_empty() {
        let mut a = DynamicArray::new();
        a.push_back("one");
        a.push_back("two");
        let b = a.take();
        assert_eq!(a.len(), 0);
        assert_eq!(a.capacity(), 0);
        assert_eq!(collect(&b), ["one", "two"]);
    }

    #[test]
    fn try_reserve_overflow_leaves_array_unchanged() {
        let mut array = DynamicArray::new();
        array.push_back(1u64);
        array.push_back(2u64);
        let capacity = array.capacity();
        let err = array.try_reserve(usize::MAX).unwrap_err();
        assert_eq!(
            err,
            ArrayError::AllocationFailure {
                requested: usize::MAX
            }
        );
        assert_eq!(array.capacity(), capacity);
        assert_eq!(collect(&array), [1, 2]);
    }

    #[test]
    fn try_resize_overflow_leaves_array_unchanged() {
        let mut array: DynamicArray<u32> = DynamicArray::new();
        array.push_back(5);
        assert!(matches!(
            array.try_resize(usize::MAX / 2),
            Err(ArrayError::AllocationFailure { .. })
        ));
        assert_eq!(collect(&array), [5]);
        assert!(array.try_resize(3).is_ok());
        assert_eq!(collect(&array), [5, 0, 0]);
    }

    #[test]
    fn try_with_capacity_overflow() {
        let result = DynamicArray::<u64>::try_with_capacity(usize::MAX);
        assert!(matches!(
            result,
            Err(ArrayError::AllocationFailure { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn reserve_overflow_panics() {
        let mut array: DynamicArray<u64> = DynamicArray::new();
        array.reserve(usize::MAX);
    }

    #[test]
    fn zero_sized_elements() {
        let mut array = DynamicArray::new();
        for _ in 0..100 {
            array.push_back(());
        }
        assert_eq!(array.len(), 100);
        array.erase(50);
        assert_eq!(array.pop_back(), Some(()));
        assert_eq!(array.len(), 98);
    }
}
