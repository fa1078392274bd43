pub mod in_memory;

use async_trait::async_trait;

use crate::{
    entities::{
        order::{OrderAction, OrderDetail, OrderStatus},
        profile::UpdateProfile,
        query::{OrderQueryKey, OrderQueryResult},
    },
    errors::RepoErr,
};

pub const PER_PAGE: u32 = 10;

/// Backing store of the mock order API.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn get_by_id(&self, id: &str) -> Result<OrderDetail, RepoErr>;
    async fn list(&self, q: &OrderQueryKey) -> Result<OrderQueryResult, RepoErr>;
    /// Applies `action` if the order's current status allows it.
    async fn apply(&self, id: &str, action: OrderAction) -> Result<OrderStatus, RepoErr>;
    async fn update_profile(&self, profile: UpdateProfile) -> Result<(), RepoErr>;
    async fn profile(&self) -> Result<Option<UpdateProfile>, RepoErr>;
}
