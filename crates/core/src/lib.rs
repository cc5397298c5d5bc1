//! SpendTrack Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for SpendTrack: expense
//! and budget aggregation, category management, and the reactive table
//! view-model. It is backend-agnostic and defines the store adapter
//! trait that is implemented by the `store-memory` crate.

pub mod budgets;
pub mod categories;
pub mod constants;
pub mod errors;
pub mod expenses;
pub mod identity;
pub mod profile;
pub mod spending;
pub mod store;
pub mod table;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
