//! Client-side store of fetched order lists.
//!
//! Every list view reads through [`QueryCache`], so a status patch applied here is visible to
//! all of them, including lists for filters that are not currently on screen.

mod patch;

pub use patch::patch_result;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};
use tracing::debug;

use crate::entities::order::OrderStatus;
use crate::entities::query::{OrderQueryKey, OrderQueryResult};

const EVENT_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEvent {
    Stored {
        key: OrderQueryKey,
    },
    Patched {
        order_id: String,
        status: OrderStatus,
        keys: Vec<OrderQueryKey>,
    },
    Removed {
        key: OrderQueryKey,
    },
    Cleared,
}

/// Cloneable handle; clones share the same entries and event channel.
#[derive(Clone)]
pub struct QueryCache {
    inner: Arc<RwLock<HashMap<OrderQueryKey, Arc<OrderQueryResult>>>>,
    events: broadcast::Sender<CacheEvent>,
}

impl Default for QueryCache {
    fn default() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            inner: Arc::default(),
            events,
        }
    }
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CacheEvent> {
        self.events.subscribe()
    }

    /// Sends `ev` to current subscribers, if any.
    fn emit(&self, ev: CacheEvent) {
        let _ = self.events.send(ev);
    }

    pub async fn get(&self, key: &OrderQueryKey) -> Option<Arc<OrderQueryResult>> {
        let r = self.inner.read().await;
        r.get(key).cloned()
    }

    /// Stores a freshly fetched snapshot, replacing any previous one wholesale.
    pub async fn set(&self, key: OrderQueryKey, result: OrderQueryResult) -> Arc<OrderQueryResult> {
        let snapshot = Arc::new(result);
        {
            let mut w = self.inner.write().await;
            w.insert(key.clone(), snapshot.clone());
        }
        debug!(?key, "cached order list");
        self.emit(CacheEvent::Stored { key });
        snapshot
    }

    pub async fn get_all<P>(&self, predicate: P) -> Vec<(OrderQueryKey, Arc<OrderQueryResult>)>
    where
        P: Fn(&OrderQueryKey) -> bool,
    {
        let r = self.inner.read().await;
        r.iter()
            .filter(|(k, _)| predicate(k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Replaces an existing entry. Returns `false` and stores nothing when `key` is absent.
    pub async fn update(&self, key: &OrderQueryKey, result: OrderQueryResult) -> bool {
        let replaced = {
            let mut w = self.inner.write().await;
            match w.get_mut(key) {
                Some(slot) => {
                    *slot = Arc::new(result);
                    true
                }
                None => false,
            }
        };
        if replaced {
            self.emit(CacheEvent::Stored { key: key.clone() });
        }
        replaced
    }

    pub async fn remove(&self, key: &OrderQueryKey) -> Option<Arc<OrderQueryResult>> {
        let removed = self.inner.write().await.remove(key);
        if removed.is_some() {
            self.emit(CacheEvent::Removed { key: key.clone() });
        }
        removed
    }

    pub async fn clear(&self) {
        self.inner.write().await.clear();
        self.emit(CacheEvent::Cleared);
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Sets the status of `order_id` in every cached snapshot that lists it.
    ///
    /// The whole pass runs under one write guard, so readers see either none or all of the
    /// rewrites. Snapshot membership is not re-evaluated against the key's filter. Returns the
    /// number of entries rewritten; zero when no snapshot holds the order.
    pub async fn patch_order_status(&self, order_id: &str, status: OrderStatus) -> usize {
        let keys: Vec<OrderQueryKey> = {
            let mut w = self.inner.write().await;
            let mut keys = Vec::new();
            for (key, slot) in w.iter_mut() {
                if let Some(patched) = patch_result(&**slot, order_id, status) {
                    *slot = Arc::new(patched);
                    keys.push(key.clone());
                }
            }
            keys
        };
        let n = keys.len();
        debug!(order_id, %status, patched = n, "patched cached order lists");
        if n > 0 {
            self.emit(CacheEvent::Patched {
                order_id: order_id.to_string(),
                status,
                keys,
            });
        }
        n
    }
}
