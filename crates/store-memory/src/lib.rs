//! In-memory store adapter for SpendTrack.
//!
//! This crate provides a fully functional, process-local implementation of
//! the store adapter trait defined in `spendtrack-core`: documents live in
//! memory, writes are applied immediately, and every write re-delivers a
//! full snapshot to matching subscribers. It backs local-first usage and
//! integration tests; swapping in a remote document store only requires
//! another implementation of the same trait.

mod memory_store;

pub use memory_store::MemoryStore;

// Re-export from spendtrack-core for convenience
pub use spendtrack_core::errors::{Error, Result, StoreError};
