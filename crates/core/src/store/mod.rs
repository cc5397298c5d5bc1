//! Store adapter boundary - opaque documents, queries, and adapter traits.

mod store_mock;
mod store_model;
mod store_traits;

#[cfg(test)]
mod store_model_tests;

pub use store_mock::{MockOperation, MockStore};
pub use store_model::{Document, Query, Snapshot, SortOrder, DATE_FIELD, OWNER_FIELD};
pub use store_traits::{SnapshotCallback, StoreAdapterTrait, SubscriptionHandle};
