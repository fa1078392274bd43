use std::collections::{HashMap, HashSet};
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::RwLock;

use crate::client::OrderApi;
use crate::entities::order::{
    Customer, OrderAction, OrderDetail, OrderItem, OrderStatus, OrderSummary, Product,
};
use crate::entities::profile::UpdateProfile;
use crate::entities::query::{OrderQueryKey, OrderQueryResult, PageMeta};
use crate::errors::ClientError;

/// Scripted stand-in for the remote API that records what it was asked to do.
#[derive(Default)]
pub(crate) struct FakeApi {
    lists: RwLock<HashMap<OrderQueryKey, OrderQueryResult>>,
    details: RwLock<HashMap<String, OrderDetail>>,
    fail_transition_for: RwLock<HashSet<String>>,
    calls: RwLock<Vec<(String, OrderAction)>>,
    queries: RwLock<Vec<OrderQueryKey>>,
    fetches: AtomicUsize,
    profile: RwLock<Option<UpdateProfile>>,
}

impl FakeApi {
    pub(crate) async fn put_list(&self, key: OrderQueryKey, r: OrderQueryResult) {
        self.lists.write().await.insert(key, r);
    }

    pub(crate) async fn put_detail(&self, d: OrderDetail) {
        self.details.write().await.insert(d.id.clone(), d);
    }

    pub(crate) async fn fail_for(&self, id: &str) {
        self.fail_transition_for
            .write()
            .await
            .insert(id.to_string());
    }

    pub(crate) async fn calls(&self) -> Vec<(String, OrderAction)> {
        self.calls.read().await.clone()
    }

    pub(crate) async fn list_queries(&self) -> Vec<OrderQueryKey> {
        self.queries.read().await.clone()
    }

    pub(crate) fn list_fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub(crate) async fn profile(&self) -> Option<UpdateProfile> {
        self.profile.read().await.clone()
    }
}

fn boom(body: &str) -> ClientError {
    ClientError::Status {
        status: 500,
        body: body.to_string(),
    }
}

#[async_trait]
impl OrderApi for FakeApi {
    async fn get_orders(&self, query: &OrderQueryKey) -> Result<OrderQueryResult, ClientError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.queries.write().await.push(query.clone());
        self.lists
            .read()
            .await
            .get(query)
            .cloned()
            .ok_or_else(|| boom("no list scripted"))
    }

    async fn get_order_details(&self, order_id: &str) -> Result<OrderDetail, ClientError> {
        self.details
            .read()
            .await
            .get(order_id)
            .cloned()
            .ok_or(ClientError::Status {
                status: 404,
                body: "not found".into(),
            })
    }

    async fn transition(&self, order_id: &str, action: OrderAction) -> Result<(), ClientError> {
        self.calls.write().await.push((order_id.to_string(), action));
        if self.fail_transition_for.read().await.contains(order_id) {
            return Err(boom("boom transition"));
        }
        Ok(())
    }

    async fn update_profile(&self, profile: &UpdateProfile) -> Result<(), ClientError> {
        *self.profile.write().await = Some(profile.clone());
        Ok(())
    }
}

pub(crate) fn summary(id: &str, status: OrderStatus) -> OrderSummary {
    OrderSummary {
        order_id: id.to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        status,
        customer_name: format!("customer {id}"),
        total: 4590,
    }
}

pub(crate) fn result(orders: Vec<OrderSummary>) -> OrderQueryResult {
    OrderQueryResult {
        meta: PageMeta {
            page_index: 0,
            per_page: 10,
            total_count: orders.len() as u64,
        },
        orders,
    }
}

pub(crate) fn detail(id: &str, status: OrderStatus) -> OrderDetail {
    OrderDetail {
        id: id.to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        status,
        total_in_cents: 4590,
        customer: Customer {
            name: format!("customer {id}"),
            email: format!("{id}@example.com"),
            phone: None,
        },
        order_items: vec![OrderItem {
            id: format!("{id}-item"),
            name: "Margherita".into(),
            price_in_cents: 4590,
            quantity: NonZeroU32::MIN,
            product: Product {
                name: "Margherita".into(),
            },
        }],
    }
}
