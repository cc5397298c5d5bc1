//! Adapter traits for the external document store.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::errors::Result;

use super::{Query, Snapshot};

/// Callback invoked with the full current matching set on every change.
pub type SnapshotCallback = Arc<dyn Fn(Snapshot) + Send + Sync>;

/// Contract every store backend implements.
///
/// Reads are push-based: `subscribe` delivers the current matching set
/// immediately and again after every change (whole snapshots, not deltas).
/// Writes are fire-and-forget from the caller's perspective; success is
/// observed indirectly through the next snapshot.
#[async_trait]
pub trait StoreAdapterTrait: Send + Sync {
    /// Subscribes to a collection. The callback receives the current
    /// snapshot synchronously before this returns, then one snapshot per
    /// subsequent change until the handle is released.
    fn subscribe(
        &self,
        collection: &str,
        query: Query,
        on_snapshot: SnapshotCallback,
    ) -> Result<SubscriptionHandle>;

    /// Inserts a new document; the store assigns and returns its id.
    async fn insert(&self, collection: &str, fields: Map<String, Value>) -> Result<String>;

    /// Merges fields into the document with the given id, creating it if
    /// absent. Fields not named in `fields` are preserved.
    async fn upsert(&self, collection: &str, id: &str, fields: Map<String, Value>) -> Result<()>;

    /// Partially updates an existing document. Fails with
    /// [`StoreError::NotFound`](crate::errors::StoreError::NotFound) if no
    /// document has the given id.
    async fn update(&self, collection: &str, id: &str, fields: Map<String, Value>) -> Result<()>;

    /// Deletes a document. Deleting an absent document is a no-op.
    async fn delete(&self, collection: &str, id: &str) -> Result<()>;
}

/// Handle releasing a snapshot subscription.
///
/// The subscription is released explicitly via [`unsubscribe`] or
/// implicitly when the handle is dropped, so a torn-down consumer cannot
/// leak update callbacks.
///
/// [`unsubscribe`]: SubscriptionHandle::unsubscribe
pub struct SubscriptionHandle {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl SubscriptionHandle {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        SubscriptionHandle {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Handle for subscriptions that were never established (for example,
    /// when no identity is present and the caller receives "no data").
    pub fn noop() -> Self {
        SubscriptionHandle { cancel: None }
    }

    /// Releases the subscription now.
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for SubscriptionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriptionHandle")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
