//! Owned contiguous storage for dynarr arrays.
//!
//! A [`Buffer`] owns exactly one block of `N` element slots and nothing
//! else. It does not know which slots hold live values: that bookkeeping
//! belongs to the owning array, which writes a slot before it ever reads
//! it and drops live values before the buffer goes away.
//!
//! # Unsafe boundary
//!
//! The crate root denies `unsafe_code`. Two modules opt back in:
//!
//! - `raw`: the only place that talks to the global allocator.
//! - `buffer`: slot-level primitives (`write`, `read`, `shift`, ...) that
//!   are `unsafe fn` because their correctness depends on the caller's
//!   knowledge of which slots are initialized.
//!
//! Every `unsafe` block carries a `// SAFETY:` comment.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod buffer;
pub mod error;
mod raw;

pub use buffer::{Buffer, RawBlock};
pub use error::AllocError;
