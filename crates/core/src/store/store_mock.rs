//! Mock store adapter for testing - records writes, replays snapshots.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::errors::Result;

use super::{Document, Query, SnapshotCallback, StoreAdapterTrait, SubscriptionHandle};

/// A write operation recorded by [`MockStore`].
#[derive(Clone, Debug, PartialEq)]
pub enum MockOperation {
    Insert {
        collection: String,
        fields: Map<String, Value>,
    },
    Upsert {
        collection: String,
        id: String,
        fields: Map<String, Value>,
    },
    Update {
        collection: String,
        id: String,
        fields: Map<String, Value>,
    },
    Delete {
        collection: String,
        id: String,
    },
}

struct MockSubscription {
    id: u64,
    collection: String,
    query: Query,
    callback: SnapshotCallback,
}

#[derive(Default)]
struct MockStoreInner {
    documents: HashMap<String, Vec<Document>>,
    subscriptions: Vec<MockSubscription>,
    operations: Vec<MockOperation>,
    next_subscription_id: u64,
    next_document_id: u64,
}

/// Mock adapter for testing core services.
///
/// Writes are recorded without touching the document set, so tests control
/// exactly when a change becomes visible: call [`set_documents`] to stage
/// data and re-notify subscribers, the way a real store delivers its next
/// snapshot after a round trip.
///
/// [`set_documents`]: MockStore::set_documents
#[derive(Clone, Default)]
pub struct MockStore {
    inner: Arc<Mutex<MockStoreInner>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces a collection's documents and notifies matching subscribers.
    pub fn set_documents(&self, collection: &str, documents: Vec<Document>) {
        let callbacks: Vec<(SnapshotCallback, Vec<Document>)> = {
            let mut inner = self.inner.lock().unwrap();
            inner
                .documents
                .insert(collection.to_string(), documents.clone());
            inner
                .subscriptions
                .iter()
                .filter(|s| s.collection == collection)
                .map(|s| (s.callback.clone(), s.query.apply(&documents)))
                .collect()
        };
        for (callback, snapshot) in callbacks {
            callback(snapshot);
        }
    }

    /// Returns all recorded write operations, in order.
    pub fn operations(&self) -> Vec<MockOperation> {
        self.inner.lock().unwrap().operations.clone()
    }

    /// Returns the number of live subscriptions.
    pub fn active_subscriptions(&self) -> usize {
        self.inner.lock().unwrap().subscriptions.len()
    }
}

#[async_trait]
impl StoreAdapterTrait for MockStore {
    fn subscribe(
        &self,
        collection: &str,
        query: Query,
        on_snapshot: SnapshotCallback,
    ) -> Result<SubscriptionHandle> {
        let (subscription_id, initial) = {
            let mut inner = self.inner.lock().unwrap();
            let subscription_id = inner.next_subscription_id;
            inner.next_subscription_id += 1;
            let documents = inner
                .documents
                .get(collection)
                .cloned()
                .unwrap_or_default();
            inner.subscriptions.push(MockSubscription {
                id: subscription_id,
                collection: collection.to_string(),
                query: query.clone(),
                callback: on_snapshot.clone(),
            });
            (subscription_id, query.apply(&documents))
        };
        on_snapshot(initial);

        let inner = Arc::clone(&self.inner);
        Ok(SubscriptionHandle::new(move || {
            inner
                .lock()
                .unwrap()
                .subscriptions
                .retain(|s| s.id != subscription_id);
        }))
    }

    async fn insert(&self, collection: &str, fields: Map<String, Value>) -> Result<String> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_document_id += 1;
        let id = format!("mock-{}", inner.next_document_id);
        inner.operations.push(MockOperation::Insert {
            collection: collection.to_string(),
            fields,
        });
        Ok(id)
    }

    async fn upsert(&self, collection: &str, id: &str, fields: Map<String, Value>) -> Result<()> {
        self.inner
            .lock()
            .unwrap()
            .operations
            .push(MockOperation::Upsert {
                collection: collection.to_string(),
                id: id.to_string(),
                fields,
            });
        Ok(())
    }

    async fn update(&self, collection: &str, id: &str, fields: Map<String, Value>) -> Result<()> {
        self.inner
            .lock()
            .unwrap()
            .operations
            .push(MockOperation::Update {
                collection: collection.to_string(),
                id: id.to_string(),
                fields,
            });
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        self.inner
            .lock()
            .unwrap()
            .operations
            .push(MockOperation::Delete {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        Ok(())
    }
}
