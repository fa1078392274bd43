//! Data access for the dashboard views.
//!
//! List reads go through the shared [`QueryCache`]; detail reads always hit the API and are
//! never patched, so an open detail view may lag behind a list until it is reopened.

pub mod transitions;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::cache::QueryCache;
use crate::client::OrderApi;
use crate::entities::order::OrderDetail;
use crate::entities::profile::UpdateProfile;
use crate::entities::query::{OrderQueryKey, OrderQueryResult, OrdersFilter};
use crate::errors::ClientError;

pub use transitions::TransitionExecutor;

#[derive(Clone)]
pub struct Dashboard {
    api: Arc<dyn OrderApi>,
    cache: QueryCache,
    transitions: TransitionExecutor,
}

impl Dashboard {
    pub fn new(api: Arc<dyn OrderApi>, cache: QueryCache) -> Self {
        let transitions = TransitionExecutor::new(api.clone(), cache.clone());
        Self {
            api,
            cache,
            transitions,
        }
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn transitions(&self) -> &TransitionExecutor {
        &self.transitions
    }

    /// Cached list for `filter`, fetched on first use.
    #[instrument(skip(self))]
    pub async fn orders(
        &self,
        filter: &OrdersFilter,
    ) -> Result<Arc<OrderQueryResult>, ClientError> {
        let key = filter.normalize();
        if let Some(hit) = self.cache.get(&key).await {
            debug!("order list served from cache");
            return Ok(hit);
        }
        self.fetch_into_cache(key).await
    }

    /// Fetches `filter` again and replaces the cached snapshot.
    #[instrument(skip(self))]
    pub async fn refetch_orders(
        &self,
        filter: &OrdersFilter,
    ) -> Result<Arc<OrderQueryResult>, ClientError> {
        self.fetch_into_cache(filter.normalize()).await
    }

    async fn fetch_into_cache(
        &self,
        key: OrderQueryKey,
    ) -> Result<Arc<OrderQueryResult>, ClientError> {
        let result = self.api.get_orders(&key).await?;
        Ok(self.cache.set(key, result).await)
    }

    pub async fn order_details(&self, order_id: &str) -> Result<OrderDetail, ClientError> {
        self.api.get_order_details(order_id).await
    }

    pub async fn update_profile(&self, profile: &UpdateProfile) -> Result<(), ClientError> {
        self.api.update_profile(profile).await
    }
}
