//! A growable contiguous array with explicit capacity control.
//!
//! [`DynamicArray`] is a value-semantic sequence container: it owns its
//! elements, copies deeply on `clone`, and moves in O(1). Appends are
//! amortized O(1) through geometric growth configured by a
//! [`GrowthPolicy`].
//!
//! # Architecture
//!
//! ```text
//! DynamicArray<T>
//! ├── Buffer<T>      (dynarr-buffer: one owned block of `capacity` slots)
//! ├── len            (slots [0, len) are live)
//! └── GrowthPolicy   (dynarr-core: next capacity on growth)
//! ```
//!
//! # Checked and unchecked access
//!
//! | Access | Out of range |
//! |--------|--------------|
//! | [`DynamicArray::at`] | `Err(ArrayError::OutOfRange)` |
//! | `array[i]` | panic |
//! | [`DynamicArray::get_unchecked`] | undefined behaviour (debug assertion) |
//!
//! # Allocation failure
//!
//! The `try_*` operations return [`ArrayError::AllocationFailure`] and leave
//! the array exactly as it was. Their infallible counterparts panic on
//! capacity overflow and abort through `handle_alloc_error` when the
//! allocator runs dry.
//!
//! # Unsafe boundary
//!
//! The crate root denies `unsafe_code`. `array`, `convert` and `iter` opt
//! back in to move values in and out of [`Buffer`](dynarr_buffer::Buffer)
//! slots; each `unsafe` block carries a `// SAFETY:` comment.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod array;
mod cmp;
mod convert;
pub mod iter;
mod macros;

pub use array::DynamicArray;
pub use dynarr_core::{reserve, ArrayError, CapacityRequest, GrowthPolicy};
pub use iter::IntoIter;
