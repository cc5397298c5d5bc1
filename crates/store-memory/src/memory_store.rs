//! Process-local document store.

use async_trait::async_trait;
use log::debug;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use spendtrack_core::errors::{Result, StoreError};
use spendtrack_core::store::{
    Document, Query, SnapshotCallback, StoreAdapterTrait, SubscriptionHandle,
};

struct Subscription {
    id: u64,
    collection: String,
    query: Query,
    callback: SnapshotCallback,
}

#[derive(Default)]
struct MemoryState {
    collections: HashMap<String, Vec<Document>>,
    subscriptions: Vec<Subscription>,
    next_subscription_id: u64,
}

/// In-memory implementation of the store adapter.
///
/// Writes take effect immediately and synchronously re-notify every
/// subscriber whose collection changed, each with the full result set of
/// its own query. Clones share the same underlying state.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifies subscribers of `collection` with fresh snapshots.
    /// Callbacks run outside the state lock.
    fn notify(&self, collection: &str) {
        let callbacks: Vec<(SnapshotCallback, Vec<Document>)> = {
            let state = self.state.lock().unwrap();
            let documents = state
                .collections
                .get(collection)
                .cloned()
                .unwrap_or_default();
            state
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
}

#[async_trait]
impl StoreAdapterTrait for MemoryStore {
    fn subscribe(
        &self,
        collection: &str,
        query: Query,
        on_snapshot: SnapshotCallback,
    ) -> Result<SubscriptionHandle> {
        let (subscription_id, initial) = {
            let mut state = self.state.lock().unwrap();
            let subscription_id = state.next_subscription_id;
            state.next_subscription_id += 1;
            let documents = state
                .collections
                .get(collection)
                .cloned()
                .unwrap_or_default();
            state.subscriptions.push(Subscription {
                id: subscription_id,
                collection: collection.to_string(),
                query: query.clone(),
                callback: on_snapshot.clone(),
            });
            (subscription_id, query.apply(&documents))
        };
        on_snapshot(initial);

        let state = Arc::clone(&self.state);
        Ok(SubscriptionHandle::new(move || {
            state
                .lock()
                .unwrap()
                .subscriptions
                .retain(|s| s.id != subscription_id);
        }))
    }

    async fn insert(&self, collection: &str, fields: Map<String, Value>) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        {
            let mut state = self.state.lock().unwrap();
            state
                .collections
                .entry(collection.to_string())
                .or_default()
                .push(Document::new(id.clone(), fields));
        }
        debug!("Inserted document {} into {}", id, collection);
        self.notify(collection);
        Ok(id)
    }

    async fn upsert(&self, collection: &str, id: &str, fields: Map<String, Value>) -> Result<()> {
        {
            let mut state = self.state.lock().unwrap();
            let documents = state.collections.entry(collection.to_string()).or_default();
            match documents.iter_mut().find(|d| d.id == id) {
                Some(existing) => existing.fields.extend(fields),
                None => documents.push(Document::new(id, fields)),
            }
        }
        self.notify(collection);
        Ok(())
    }

    async fn update(&self, collection: &str, id: &str, fields: Map<String, Value>) -> Result<()> {
        {
            let mut state = self.state.lock().unwrap();
            let existing = state
                .collections
                .get_mut(collection)
                .and_then(|documents| documents.iter_mut().find(|d| d.id == id))
                .ok_or_else(|| StoreError::NotFound(format!("{}/{}", collection, id)))?;
            existing.fields.extend(fields);
        }
        self.notify(collection);
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        {
            let mut state = self.state.lock().unwrap();
            if let Some(documents) = state.collections.get_mut(collection) {
                documents.retain(|d| d.id != id);
            }
        }
        self.notify(collection);
        Ok(())
    }
}
