use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::cache::QueryCache;
use crate::client::OrderApi;
use crate::entities::order::{OrderAction, OrderStatus};
use crate::errors::TransitionError;

/// Runs status-changing actions against the remote API and patches the cache on success.
#[derive(Clone)]
pub struct TransitionExecutor {
    api: Arc<dyn OrderApi>,
    cache: QueryCache,
}

impl TransitionExecutor {
    pub fn new(api: Arc<dyn OrderApi>, cache: QueryCache) -> Self {
        Self { api, cache }
    }

    /// `current` is the status the caller is displaying. Actions it does not offer are refused
    /// without contacting the API.
    #[instrument(
        name = "order_transition",
        skip_all,
        fields(order_id = %order_id, current = %current, action = %action)
    )]
    pub async fn execute(
        &self,
        order_id: &str,
        current: OrderStatus,
        action: OrderAction,
    ) -> Result<OrderStatus, TransitionError> {
        if !current.allows(action) {
            warn!("action not offered for current status");
            return Err(TransitionError::NotAllowed {
                action,
                status: current,
            });
        }

        if let Err(e) = self.api.transition(order_id, action).await {
            warn!(err = %e, "remote transition failed; cache left untouched");
            return Err(e.into());
        }

        let next = action.target();
        let patched = self.cache.patch_order_status(order_id, next).await;
        info!(status = %next, patched, "order transitioned");
        Ok(next)
    }

    pub async fn approve(
        &self,
        order_id: &str,
        current: OrderStatus,
    ) -> Result<OrderStatus, TransitionError> {
        self.execute(order_id, current, OrderAction::Approve).await
    }

    pub async fn dispatch(
        &self,
        order_id: &str,
        current: OrderStatus,
    ) -> Result<OrderStatus, TransitionError> {
        self.execute(order_id, current, OrderAction::Dispatch).await
    }

    pub async fn deliver(
        &self,
        order_id: &str,
        current: OrderStatus,
    ) -> Result<OrderStatus, TransitionError> {
        self.execute(order_id, current, OrderAction::Deliver).await
    }

    pub async fn cancel(
        &self,
        order_id: &str,
        current: OrderStatus,
    ) -> Result<OrderStatus, TransitionError> {
        self.execute(order_id, current, OrderAction::Cancel).await
    }
}
