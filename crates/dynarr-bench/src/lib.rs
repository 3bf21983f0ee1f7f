//! Benchmark workloads for dynarr arrays.
//!
//! Provides pre-built arrays for benchmarks:
//!
//! - [`sequential`]: `0..n` as `u64`, built by repeated `push_back`
//! - [`labels`]: `n` heap-owning strings, for clone and relocation costs

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarr_array::DynamicArray;

/// Build `0..n` by appending one element at a time.
pub fn sequential(n: u64) -> DynamicArray<u64> {
    let mut array = DynamicArray::new();
    for i in 0..n {
        array.push_back(i);
    }
    array
}

/// Build `n` short owned strings (`"label-0"`, `"label-1"`, ...).
pub fn labels(n: usize) -> DynamicArray<String> {
    (0..n).map(|i| format!("label-{i}")).collect()
}
