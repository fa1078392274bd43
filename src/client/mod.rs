pub mod http;

use async_trait::async_trait;

use crate::entities::order::{OrderAction, OrderDetail};
use crate::entities::profile::UpdateProfile;
use crate::entities::query::{OrderQueryKey, OrderQueryResult};
use crate::errors::ClientError;

pub use http::HttpOrderApi;

/// Request surface of the remote order API.
#[async_trait]
pub trait OrderApi: Send + Sync {
    async fn get_orders(&self, query: &OrderQueryKey) -> Result<OrderQueryResult, ClientError>;
    async fn get_order_details(&self, order_id: &str) -> Result<OrderDetail, ClientError>;
    async fn transition(&self, order_id: &str, action: OrderAction) -> Result<(), ClientError>;
    async fn update_profile(&self, profile: &UpdateProfile) -> Result<(), ClientError>;
}
