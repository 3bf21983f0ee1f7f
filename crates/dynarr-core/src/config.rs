//! Growth configuration for dynamic arrays.

use crate::error::ConfigError;

/// Controls how an array computes its next capacity.
///
/// Validated at construction; all values are immutable after creation.
/// Every array carries its own policy, so `swap` exchanges policies and
/// `clone` copies them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GrowthPolicy {
    factor: usize,
    min_capacity: usize,
}

impl GrowthPolicy {
    /// Default multiplicative growth factor.
    pub const DEFAULT_FACTOR: usize = 2;

    /// Default capacity of the first allocation made by an append.
    pub const DEFAULT_MIN_CAPACITY: usize = 1;

    /// The default doubling policy: `max(1, 2 * capacity)`.
    pub const DOUBLING: Self = Self {
        factor: Self::DEFAULT_FACTOR,
        min_capacity: Self::DEFAULT_MIN_CAPACITY,
    };

    /// Create a policy with the given growth factor and minimum capacity.
    ///
    /// A factor below 2 would break the amortized O(1) append bound, and a
    /// zero minimum would let an empty array "grow" to zero slots.
    pub fn new(factor: usize, min_capacity: usize) -> Result<Self, ConfigError> {
        if factor < 2 {
            return Err(ConfigError::InvalidGrowthFactor { factor });
        }
        if min_capacity == 0 {
            return Err(ConfigError::InvalidMinCapacity { min_capacity });
        }
        Ok(Self {
            factor,
            min_capacity,
        })
    }

    /// The multiplicative growth factor.
    pub fn factor(&self) -> usize {
        self.factor
    }

    /// The capacity of the first allocation made by an append.
    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }

    /// Capacity to grow to when an append finds the array full.
    ///
    /// Saturates at `usize::MAX`; the allocation of such a capacity fails
    /// downstream rather than wrapping here.
    pub fn next_capacity(&self, current: usize) -> usize {
        current.saturating_mul(self.factor).max(self.min_capacity)
    }

    /// Capacity to allocate when a resize to `len` exceeds the current
    /// capacity.
    pub fn resize_capacity(&self, len: usize) -> usize {
        len.saturating_mul(self.factor)
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::DOUBLING
    }
}
