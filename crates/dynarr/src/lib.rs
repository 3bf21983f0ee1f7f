//! dynarr: growable contiguous arrays with explicit capacity control.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the dynarr sub-crates. For most users, adding `dynarr` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use dynarr::prelude::*;
//!
//! let mut numbers = DynamicArray::new();
//! numbers.push_back(1);
//! numbers.push_back(2);
//! numbers.push_back(3);
//! numbers.insert(1, 9);
//! assert_eq!(numbers, [1, 9, 2, 3]);
//!
//! assert_eq!(numbers.erase(1), 9);
//! assert_eq!(numbers.at(3), Err(ArrayError::OutOfRange { index: 3, len: 3 }));
//!
//! let reserved: DynamicArray<u8> = DynamicArray::from(reserve(10));
//! assert_eq!(reserved.capacity(), 10);
//!
//! let listed = dynarr![1, 2, 3];
//! assert_eq!(listed, numbers);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `dynarr-array` | `DynamicArray`, owning iterator, `dynarr!` |
//! | [`buffer`] | `dynarr-buffer` | `Buffer`, `RawBlock`, `AllocError` |
//! | [`types`] | `dynarr-core` | Errors, `CapacityRequest`, `GrowthPolicy` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The growable array (`dynarr-array`).
///
/// [`array::DynamicArray`] is also available in the [`prelude`].
pub use dynarr_array as array;

/// Owned slot storage (`dynarr-buffer`).
///
/// Only needed when building a container of your own on top of
/// [`buffer::Buffer`].
pub use dynarr_buffer as buffer;

/// Errors, capacity requests and growth configuration (`dynarr-core`).
pub use dynarr_core as types;

pub use dynarr_array::dynarr;

/// Common imports for typical dynarr usage.
///
/// ```rust
/// use dynarr::prelude::*;
/// ```
pub mod prelude {
    pub use dynarr_array::{dynarr, DynamicArray};
    pub use dynarr_core::{reserve, ArrayError, CapacityRequest, GrowthPolicy};
}
