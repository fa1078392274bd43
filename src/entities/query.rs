use serde::{Deserialize, Serialize};

use crate::entities::order::{OrderStatus, OrderSummary};

/// Identifies one cached order list. Equal keys address the same snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct OrderQueryKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

impl OrderQueryKey {
    pub fn with_status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

/// Untyped list filter as it arrives from a command line or a URL query string.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrdersFilter {
    pub page_index: Option<String>,
    pub order_id: Option<String>,
    pub customer_name: Option<String>,
    pub status: Option<String>,
}

impl OrdersFilter {
    /// Unparseable page indexes and unknown statuses are dropped rather than rejected.
    pub fn normalize(&self) -> OrderQueryKey {
        OrderQueryKey {
            page_index: self
                .page_index
                .as_deref()
                .and_then(|p| p.trim().parse::<u32>().ok()),
            order_id: self.order_id.clone(),
            customer_name: self.customer_name.clone(),
            status: self.status.as_deref().and_then(|s| s.parse().ok()),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page_index: u32,
    pub per_page: u32,
    pub total_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderQueryResult {
    pub orders: Vec<OrderSummary>,
    pub meta: PageMeta,
}
