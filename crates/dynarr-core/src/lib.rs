//! Core types for the dynarr container workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the buffer and array crates: error types,
//! the one-shot [`CapacityRequest`] descriptor, and the [`GrowthPolicy`]
//! that decides how much storage to allocate when an array grows.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod request;

pub use config::GrowthPolicy;
pub use error::{ArrayError, ConfigError};
pub use request::{reserve, CapacityRequest};
