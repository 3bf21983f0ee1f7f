//! Test utilities and instrumented element types for dynarr development.
//!
//! Containers are only as correct as their bookkeeping of element
//! lifetimes. The types here make that bookkeeping observable:
//! [`DropCounter`] counts drops, [`CloneCounter`] counts clones, and
//! [`CloneBudget`] panics once a fixed number of clones has been spent.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Shared counter of how many [`Tracked`] values have been dropped.
#[derive(Clone, Debug, Default)]
pub struct DropCounter {
    drops: Arc<AtomicUsize>,
}

impl DropCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `id` in a value that bumps this counter when dropped.
    pub fn track(&self, id: usize) -> Tracked {
        Tracked {
            id,
            drops: Arc::clone(&self.drops),
        }
    }

    /// Number of tracked values dropped so far.
    pub fn dropped(&self) -> usize {
        self.drops.load(Ordering::SeqCst)
    }
}

/// A value that reports its own drop to a [`DropCounter`].
///
/// Equality and ordering compare `id` only. Clones share the counter, so
/// every clone is counted when it drops too.
#[derive(Debug)]
pub struct Tracked {
    pub id: usize,
    drops: Arc<AtomicUsize>,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            drops: Arc::clone(&self.drops),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tracked {}

impl PartialOrd for Tracked {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tracked {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

/// Shared counter of how many [`Counted`] values have been cloned.
#[derive(Clone, Debug, Default)]
pub struct CloneCounter {
    clones: Arc<AtomicUsize>,
}

impl CloneCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track<V>(&self, value: V) -> Counted<V> {
        Counted {
            value,
            clones: Arc::clone(&self.clones),
        }
    }

    /// Number of clones made so far.
    pub fn clones(&self) -> usize {
        self.clones.load(Ordering::SeqCst)
    }
}

/// A value whose clones are counted by a [`CloneCounter`].
#[derive(Debug)]
pub struct Counted<V> {
    pub value: V,
    clones: Arc<AtomicUsize>,
}

impl<V: Clone> Clone for Counted<V> {
    fn clone(&self) -> Self {
        self.clones.fetch_add(1, Ordering::SeqCst);
        Self {
            value: self.value.clone(),
            clones: Arc::clone(&self.clones),
        }
    }
}

impl<V: PartialEq> PartialEq for Counted<V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// A shared allowance of clones; the clone that exceeds it panics.
///
/// Used to check that containers stay valid when element cloning panics
/// partway through a bulk copy.
#[derive(Clone, Debug)]
pub struct CloneBudget {
    remaining: Arc<AtomicUsize>,
}

impl CloneBudget {
    /// Allow `clones` successful clones before panicking.
    pub fn new(clones: usize) -> Self {
        Self {
            remaining: Arc::new(AtomicUsize::new(clones)),
        }
    }

    pub fn item<V>(&self, value: V) -> Budgeted<V> {
        Budgeted {
            value,
            remaining: Arc::clone(&self.remaining),
        }
    }
}

/// A value drawing on a [`CloneBudget`] each time it is cloned.
#[derive(Debug)]
pub struct Budgeted<V> {
    pub value: V,
    remaining: Arc<AtomicUsize>,
}

impl<V: Clone> Clone for Budgeted<V> {
    fn clone(&self) -> Self {
        let spent = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
        if spent.is_err() {
            panic!("clone budget exhausted");
        }
        Self {
            value: self.value.clone(),
            remaining: Arc::clone(&self.remaining),
        }
    }
}
