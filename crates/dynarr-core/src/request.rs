//! One-shot capacity reservation descriptor.

/// Requests an empty array with room for `capacity` elements.
///
/// This is a plain value with no behaviour of its own; arrays accept it
/// through `From<CapacityRequest>`. Prefer the named `with_capacity`
/// constructor in new code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct CapacityRequest {
    capacity: usize,
}

impl CapacityRequest {
    /// Describe a reservation of `capacity` slots.
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The requested number of slots.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`CapacityRequest::new`].
///
/// ```
/// let req = dynarr_core::reserve(16);
/// assert_eq!(req.capacity(), 16);
/// ```
pub const fn reserve(capacity: usize) -> CapacityRequest {
    CapacityRequest::new(capacity)
}
